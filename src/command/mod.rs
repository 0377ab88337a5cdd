// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gateway command definitions.
//!
//! This module provides typed representations of the `switchcmd` commands
//! understood by `webservices/homeautoswitch.lua`.
//!
//! # Available Commands
//!
//! | Command Type | Purpose | Example |
//! |-------------|---------|---------|
//! | [`SwitchCommand`] | Outlets and simple on/off units | `setswitchon` |
//! | [`ThermostatCommand`] | Radiator controllers | `sethkrtsoll` |
//! | [`LightCommand`] | Dimmers and colour lamps | `setlevel`, `setcolor` |
//! | [`DeviceCommand`] | Device lists, statistics, naming, blinds | `getdevicelistinfos` |
//! | [`TemplateCommand`] | Templates | `applytemplate` |
//! | [`TriggerCommand`] | Triggers | `settriggeractive` |
//! | [`SubscriptionCommand`] | DECT-ULE registration | `startulesubscription` |
//!
//! # Command Structure
//!
//! Each command consists of:
//! - A command name (e.g., `"getswitchlist"`, `"setlevel"`)
//! - An optional target AIN
//! - Zero or more parameters in a fixed order
//!
//! Values are validated when the command is built, see [`crate::types`].
//!
//! # Examples
//!
//! ```
//! use avm_homeauto::command::{Command, LightCommand};
//! use avm_homeauto::types::Level;
//!
//! let cmd = LightCommand::Level {
//!     ain: "12345 0000001".to_string(),
//!     level: Level::new(128).unwrap(),
//! };
//!
//! assert_eq!(cmd.name(), "setlevel");
//! assert_eq!(cmd.ain(), Some("12345 0000001"));
//! assert_eq!(cmd.params(), vec![("level".to_string(), "128".to_string())]);
//! ```

mod device;
mod light;
mod subscription;
mod switch;
mod template;
mod thermostat;

pub use device::DeviceCommand;
pub use light::LightCommand;
pub use subscription::SubscriptionCommand;
pub use switch::SwitchCommand;
pub use template::{ColorLevelTemplate, TemplateColor, TemplateCommand, TriggerCommand};
pub use thermostat::ThermostatCommand;

use crate::error::ValueError;

/// A command that can be sent to the gateway.
pub trait Command {
    /// Returns the `switchcmd` wire token.
    fn name(&self) -> &'static str;

    /// Returns the target AIN, if the command addresses one.
    fn ain(&self) -> Option<&str> {
        None
    }

    /// Returns the additional parameters in wire order.
    ///
    /// Values are unencoded; the dispatcher URL-encodes them.
    fn params(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Checks values that the type system cannot rule out.
    ///
    /// The dispatcher calls this before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns `ValueError` if the command carries an invalid value.
    fn validate(&self) -> Result<(), ValueError> {
        Ok(())
    }
}

/// Shorthand for a single parameter pair.
fn param(key: &str, value: impl ToString) -> (String, String) {
    (key.to_string(), value.to_string())
}
