// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structured gateway replies.
//!
//! XML replies are mapped onto these records with `quick-xml`'s serde
//! support; the metadata payload of `setmetadata` is JSON. Every record
//! operation of [`crate::HomeAutomation`] also has an `*_xml` variant that
//! returns the untyped [`xmltree::Element`] instead.

mod color;
mod device;
mod metadata;
mod session;
mod stats;
mod subscription;
mod template;

pub use color::{
    ColorDefaults, ColorPreset, HsDefaults, HueDefault, TemperatureDefault, TemperatureDefaults,
};
pub use device::{
    Alert, Button, ColorControl, Device, DeviceList, EtsiUnitInfo, Functions, GroupInfo, Hkr,
    LevelControl, NextChange, PowerMeter, SimpleOnOff, Switch, Temperature,
};
pub use metadata::{MetaData, MetaDataType};
pub use session::SessionInfo;
pub use stats::{DeviceStats, Stats, StatsSeries};
pub use subscription::{SubscriptionCode, SubscriptionState};
pub use template::{Reference, References, Template, TemplateList, Trigger, TriggerList};

use crate::codec;
use crate::error::ParseError;

/// Decodes `raw` unless the element was empty.
fn non_empty<T>(
    raw: &str,
    decode: impl FnOnce(&str) -> Result<T, ParseError>,
) -> Result<Option<T>, ParseError> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        decode(raw).map(Some)
    }
}

/// Decodes a `0`/`1` flag element, empty or `inval` meaning unknown.
fn optional_flag(raw: &str) -> Result<Option<bool>, ParseError> {
    non_empty(raw, codec::decode_optional_bool).map(Option::flatten)
}
