// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Template and trigger lists.

use serde::Deserialize;

use super::device::Functions;
use crate::codec;
use crate::error::ParseError;

/// Root of `gettemplatelistinfos`.
///
/// ```xml
/// <templatelist version="1">
///   <template identifier="tmp6F0093-39091EED0" id="60008" functionbitmask="320" applymask="0">
///     <name>Heizen</name>
///     <devices><device identifier="09995 0125605"/></devices>
///   </template>
/// </templatelist>
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateList {
    /// Schema version.
    #[serde(rename = "@version", default)]
    pub version: String,
    /// Templates.
    #[serde(rename = "template", default)]
    pub templates: Vec<Template>,
}

impl TemplateList {
    /// Looks up a template by identifier.
    #[must_use]
    pub fn find(&self, identifier: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.identifier == identifier)
    }
}

/// A template that can be applied with `applytemplate`.
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    /// Template AIN.
    #[serde(rename = "@identifier")]
    pub identifier: String,
    /// Internal id.
    #[serde(rename = "@id", default)]
    pub id: String,
    /// Raw function bitmask.
    #[serde(rename = "@functionbitmask", default)]
    pub function_bitmask: u32,
    /// Raw apply bitmask.
    #[serde(rename = "@applymask", default)]
    pub applymask: u32,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Devices the template acts on.
    #[serde(default)]
    pub devices: References,
    /// Nested templates.
    #[serde(default)]
    pub sub_templates: References,
    /// Triggers started by the template.
    #[serde(default)]
    pub triggers: References,
}

impl Template {
    /// Returns the decoded function bitmask.
    #[must_use]
    pub fn functions(&self) -> Functions {
        Functions::from_bits(self.function_bitmask)
    }
}

/// A list of `identifier` references.
///
/// Element names differ per list (`device`, `template`, `trigger`); any of
/// them is accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct References {
    /// Referenced devices.
    #[serde(rename = "device", default)]
    pub devices: Vec<Reference>,
    /// Referenced templates.
    #[serde(rename = "template", default)]
    pub templates: Vec<Reference>,
    /// Referenced triggers.
    #[serde(rename = "trigger", default)]
    pub triggers: Vec<Reference>,
}

impl References {
    /// Iterates over all referenced identifiers.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.devices
            .iter()
            .chain(&self.templates)
            .chain(&self.triggers)
            .map(|r| r.identifier.as_str())
    }
}

/// A single reference.
#[derive(Debug, Clone, Deserialize)]
pub struct Reference {
    /// AIN of the referenced entity.
    #[serde(rename = "@identifier")]
    pub identifier: String,
}

/// Root of `gettriggerlistinfos`.
///
/// ```xml
/// <triggerlist version="1">
///   <trigger identifier="trg0A3C1B-3E6B4B2F9" active="1"><name>Morgens</name></trigger>
/// </triggerlist>
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TriggerList {
    /// Schema version.
    #[serde(rename = "@version", default)]
    pub version: String,
    /// Triggers.
    #[serde(rename = "trigger", default)]
    pub triggers: Vec<Trigger>,
}

/// A trigger (automation rule).
#[derive(Debug, Clone, Deserialize)]
pub struct Trigger {
    /// Trigger AIN.
    #[serde(rename = "@identifier")]
    pub identifier: String,
    /// `0` / `1`.
    #[serde(rename = "@active", default)]
    pub active: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

impl Trigger {
    /// Returns whether the trigger is enabled.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for a value other than `0`/`1`.
    pub fn is_active(&self) -> Result<bool, ParseError> {
        codec::decode_bool(&self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_templates() {
        let xml = r#"<templatelist version="1">
<template identifier="tmp6F0093-39091EED0" id="60008" functionbitmask="320" applymask="0">
<name>Heizen</name><metadata></metadata>
<devices><device identifier="09995 0125605"/><device identifier="09995 0125606"/></devices>
<sub_templates></sub_templates>
<triggers><trigger identifier="trg0A3C1B-3E6B4B2F9"/></triggers>
</template>
<template identifier="tmp6F0093-39091EED1" id="60009" functionbitmask="0"><name>Leer</name></template>
</templatelist>"#;
        let list: TemplateList = codec::decode_xml(xml).unwrap();
        assert_eq!(list.templates.len(), 2);

        let heating = list.find("tmp6F0093-39091EED0").unwrap();
        assert_eq!(heating.name, "Heizen");
        assert!(heating.functions().contains(Functions::THERMOSTAT));
        let devices: Vec<_> = heating.devices.identifiers().collect();
        assert_eq!(devices, vec!["09995 0125605", "09995 0125606"]);
        assert_eq!(heating.triggers.identifiers().count(), 1);

        assert_eq!(list.templates[1].devices.identifiers().count(), 0);
    }

    #[test]
    fn parse_triggers() {
        let xml = r#"<triggerlist version="1">
<trigger identifier="trg0A3C1B-3E6B4B2F9" active="1"><name>Morgens</name></trigger>
<trigger identifier="trg0A3C1B-3E6B4B2FA" active="0"><name>Abends</name></trigger>
</triggerlist>"#;
        let list: TriggerList = codec::decode_xml(xml).unwrap();
        assert!(list.triggers[0].is_active().unwrap());
        assert!(!list.triggers[1].is_active().unwrap());
    }

    #[test]
    fn empty_trigger_list() {
        let list: TriggerList = codec::decode_xml(r#"<triggerlist version="1"/>"#).unwrap();
        assert!(list.triggers.is_empty());
    }
}
