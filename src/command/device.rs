// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device information and configuration commands.

use super::{Command, param};
use crate::codec;
use crate::error::ParseError;
use crate::response::MetaData;
use crate::types::{BlindTarget, DeviceName};

/// Command for device lists, statistics and per-device settings.
///
/// # Examples
///
/// ```
/// use avm_homeauto::command::{Command, DeviceCommand};
/// use avm_homeauto::types::{BlindTarget, DeviceName};
///
/// let cmd = DeviceCommand::SetName {
///     ain: "087610500005".to_string(),
///     name: DeviceName::new("Kitchen").unwrap(),
/// };
/// assert_eq!(cmd.name(), "setname");
/// assert_eq!(cmd.params(), vec![("name".to_string(), "Kitchen".to_string())]);
///
/// let cmd = DeviceCommand::SetBlind {
///     ain: "142760503450-1".to_string(),
///     target: BlindTarget::Stop,
/// };
/// assert_eq!(cmd.params(), vec![("target".to_string(), "stop".to_string())]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCommand {
    /// Query all devices and groups.
    ListInfos,
    /// Query a single device.
    Infos(String),
    /// Query the recorded statistics of a device.
    BasicStats(String),
    /// Rename a device or group.
    SetName {
        /// Target AIN.
        ain: String,
        /// New name.
        name: DeviceName,
    },
    /// Move a blind.
    SetBlind {
        /// Target AIN.
        ain: String,
        /// Target position.
        target: BlindTarget,
    },
    /// Set icon and type; build with [`DeviceCommand::set_metadata`].
    SetMetaData {
        /// Target AIN.
        ain: String,
        /// JSON payload.
        json: String,
    },
}

impl DeviceCommand {
    /// Creates a `setmetadata` command with the JSON encoded payload.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the payload cannot be serialized.
    pub fn set_metadata(ain: impl Into<String>, metadata: &MetaData) -> Result<Self, ParseError> {
        Ok(Self::SetMetaData {
            ain: ain.into(),
            json: codec::encode_json(metadata)?,
        })
    }
}

impl Command for DeviceCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::ListInfos => "getdevicelistinfos",
            Self::Infos(_) => "getdeviceinfos",
            Self::BasicStats(_) => "getbasicdevicestats",
            Self::SetName { .. } => "setname",
            Self::SetBlind { .. } => "setblind",
            Self::SetMetaData { .. } => "setmetadata",
        }
    }

    fn ain(&self) -> Option<&str> {
        match self {
            Self::ListInfos => None,
            Self::Infos(ain)
            | Self::BasicStats(ain)
            | Self::SetName { ain, .. }
            | Self::SetBlind { ain, .. }
            | Self::SetMetaData { ain, .. } => Some(ain),
        }
    }

    fn params(&self) -> Vec<(String, String)> {
        match self {
            Self::SetName { name, .. } => vec![param("name", name)],
            Self::SetBlind { target, .. } => vec![param("target", target.as_str())],
            Self::SetMetaData { json, .. } => vec![param("metadata", json)],
            _ => Vec::new(),
        }
    }
}
