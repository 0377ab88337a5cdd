// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `avm_homeauto` - A Rust library to control FRITZ!Box smart home devices.
//!
//! This library provides an async client for the home automation HTTP
//! interface (`webservices/homeautoswitch.lua`) of AVM FRITZ!Box gateways.
//!
//! # Supported Features
//!
//! - **Session handling**: Challenge/response login, explicit relogin and logout
//! - **Outlets**: Switch on/off/toggle, state, power and energy readings
//! - **Thermostats**: Target/comfort/economy temperature, boost and window-open mode
//! - **Lights**: Level, colour, white temperature, colour presets
//! - **Blinds, templates, triggers**: Open/close/stop, apply and create templates
//! - **Device lists**: Typed records or raw XML documents
//!
//! # Quick Start
//!
//! ```no_run
//! use avm_homeauto::{HomeAutomation, HkrTemperature};
//!
//! #[tokio::main]
//! async fn main() -> avm_homeauto::Result<()> {
//!     let client = HomeAutomation::builder()
//!         .host("192.168.178.1")
//!         .with_credentials("smarthome", "secret")
//!         .build()
//!         .await?;
//!
//!     // Outlets
//!     for ain in client.switch_list().await? {
//!         println!("{ain}: {:?}", client.switch_state(&ain).await?);
//!     }
//!
//!     // Radiator controller
//!     client
//!         .set_target_temperature("09995 0125605", HkrTemperature::celsius(21.0)?)
//!         .await?;
//!
//!     // Everything the gateway knows
//!     let devices = client.device_list().await?;
//!     for device in &devices.devices {
//!         println!("{} ({})", device.name, device.product_name);
//!     }
//!
//!     client.logout().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Arguments are validated before any request is sent ([`ValueError`]).
//! Gateway failures are reported as [`ProtocolError`], replies outside the
//! documented wire format as [`ParseError`], and a client without session
//! as [`Error::NotConnected`].

mod client;
pub mod codec;
pub mod command;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use client::{HomeAutomation, HomeAutomationBuilder};
pub use command::Command;
pub use error::{Error, LoginError, ParseError, ProtocolError, Result, ValueError};
pub use protocol::HttpConfig;
pub use types::{
    BlindTarget, ColorTemperature, DeviceName, EndTime, HkrTemperature, Hue, Level,
    LevelPercentage, OnOff, Saturation,
};
