// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Colour presets (`getcolordefaults`).
//!
//! Lamps only accept the preset hue/saturation pairs via `setcolor`;
//! anything else must go through `setunmappedcolor`.

use serde::Deserialize;

/// Root of `getcolordefaults`.
///
/// ```xml
/// <colordefaults>
///   <hsdefaults>
///     <hs hue_index="1">
///       <name enum="3">Rot</name>
///       <color sat_index="1" hue="358" sat="180" val="255"/>
///       <color sat_index="2" hue="358" sat="112" val="255"/>
///     </hs>
///   </hsdefaults>
///   <temperaturedefaults><temp value="2700"/><temp value="3000"/></temperaturedefaults>
/// </colordefaults>
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorDefaults {
    /// Hue presets.
    #[serde(default)]
    pub hsdefaults: HsDefaults,
    /// White temperature presets.
    #[serde(default)]
    pub temperaturedefaults: TemperatureDefaults,
}

impl ColorDefaults {
    /// Iterates over all preset hue/saturation pairs.
    pub fn presets(&self) -> impl Iterator<Item = &ColorPreset> {
        self.hsdefaults.hues.iter().flat_map(|hue| &hue.colors)
    }

    /// Returns the preset white temperatures in Kelvin.
    #[must_use]
    pub fn temperatures(&self) -> Vec<u16> {
        self.temperaturedefaults
            .temperatures
            .iter()
            .map(|t| t.value)
            .collect()
    }
}

/// `<hsdefaults>` element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HsDefaults {
    /// Preset hues.
    #[serde(rename = "hs", default)]
    pub hues: Vec<HueDefault>,
}

/// `<temperaturedefaults>` element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemperatureDefaults {
    /// Preset white temperatures.
    #[serde(rename = "temp", default)]
    pub temperatures: Vec<TemperatureDefault>,
}

/// One hue with its saturation steps.
#[derive(Debug, Clone, Deserialize)]
pub struct HueDefault {
    /// Position of the hue.
    #[serde(rename = "@hue_index", default)]
    pub hue_index: u32,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Saturation steps.
    #[serde(rename = "color", default)]
    pub colors: Vec<ColorPreset>,
}

/// A preset colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ColorPreset {
    /// Position of the saturation step.
    #[serde(rename = "@sat_index", default)]
    pub sat_index: u32,
    /// Hue in degrees.
    #[serde(rename = "@hue")]
    pub hue: u16,
    /// Saturation 0-255.
    #[serde(rename = "@sat")]
    pub saturation: u16,
    /// Value 0-255.
    #[serde(rename = "@val", default)]
    pub value: u16,
}

/// A preset white temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TemperatureDefault {
    /// Temperature in Kelvin.
    #[serde(rename = "@value")]
    pub value: u16,
}
