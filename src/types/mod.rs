// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for gateway commands.
//!
//! Each type checks its documented range at construction time, so a command
//! built from these types can always be sent.
//!
//! # Types
//!
//! - [`Level`] - Brightness (0-255)
//! - [`LevelPercentage`] - Brightness (0-100%)
//! - [`Hue`] / [`Saturation`] - Colour (0-359 / 0-255)
//! - [`ColorTemperature`] - White temperature (2700-6500 K)
//! - [`HkrTemperature`] - Thermostat temperature with on/off sentinels
//! - [`EndTime`] - Boost / window-open end (at most 24 h ahead)
//! - [`OnOff`] / [`BlindTarget`] - Switching enums
//! - [`DeviceName`] - Name of at most 40 characters

mod light;
mod switching;
mod thermostat;

pub use light::{ColorTemperature, Hue, Level, LevelPercentage, Saturation};
pub use switching::{BlindTarget, DeviceName, OnOff};
pub use thermostat::{EndTime, HkrTemperature};
