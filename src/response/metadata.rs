// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Metadata payload for `setmetadata`.

use serde::{Deserialize, Serialize};

/// Icon and type shown for a device, group or template.
///
/// Serialized as JSON with the type written by name.
///
/// # Examples
///
/// ```
/// use avm_homeauto::response::{MetaData, MetaDataType};
///
/// let meta = MetaData::new(12, MetaDataType::Thermostat);
/// let json = serde_json::to_string(&meta).unwrap();
/// assert_eq!(json, r#"{"icon":12,"type":"thermostat"}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaData {
    /// Icon index.
    pub icon: u32,
    /// Device type.
    #[serde(rename = "type")]
    pub kind: MetaDataType,
}

impl MetaData {
    /// Creates a metadata payload.
    #[must_use]
    pub const fn new(icon: u32, kind: MetaDataType) -> Self {
        Self { icon, kind }
    }
}

/// Device type of a [`MetaData`] payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaDataType {
    /// Radiator controller.
    Thermostat,
    /// Outlet.
    Socket,
    /// Lamp.
    Light,
    /// Blind or shutter.
    Blind,
    /// Group or template spanning several kinds.
    All,
}
