// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Template and trigger commands.

use super::{Command, param};
use crate::codec;
use crate::types::{ColorTemperature, Hue, LevelPercentage, Saturation};

/// Command for templates.
///
/// # Examples
///
/// ```
/// use avm_homeauto::command::{ColorLevelTemplate, Command, TemplateColor, TemplateCommand};
/// use avm_homeauto::types::{ColorTemperature, LevelPercentage};
///
/// let template = ColorLevelTemplate {
///     name: "Evening".to_string(),
///     level: LevelPercentage::new(40).unwrap(),
///     color: TemplateColor::Temperature(ColorTemperature::WARMEST),
///     children: vec!["13077 0045237-1".to_string(), "13077 0045238-1".to_string()],
///     color_preset: true,
/// };
/// let cmd = TemplateCommand::AddColorLevel(template);
/// let keys: Vec<_> = cmd.params().into_iter().map(|(k, _)| k).collect();
/// assert_eq!(
///     keys,
///     vec!["name", "levelPercentage", "temperature", "child_1", "child_2", "colorpreset"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateCommand {
    /// Query all templates.
    List,
    /// Apply a template.
    Apply(String),
    /// Create a colour/level template for lamps.
    AddColorLevel(ColorLevelTemplate),
}

/// Definition of a lamp template created with `addcolorleveltemplate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorLevelTemplate {
    /// Template name.
    pub name: String,
    /// Brightness.
    pub level: LevelPercentage,
    /// Colour or white temperature.
    pub color: TemplateColor,
    /// AINs of the lamps, sent as `child_1..child_N` in this order.
    pub children: Vec<String>,
    /// Store the colour as a user preset.
    pub color_preset: bool,
}

/// Colour of a [`ColorLevelTemplate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateColor {
    /// Hue/saturation colour.
    HueSaturation {
        /// Hue.
        hue: Hue,
        /// Saturation.
        saturation: Saturation,
    },
    /// White temperature.
    Temperature(ColorTemperature),
}

impl ColorLevelTemplate {
    fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            param("name", &self.name),
            param("levelPercentage", self.level.value()),
        ];
        match self.color {
            TemplateColor::HueSaturation { hue, saturation } => {
                params.push(param("hue", hue.value()));
                params.push(param("saturation", saturation.value()));
            }
            TemplateColor::Temperature(temperature) => {
                params.push(param("temperature", temperature.kelvin()));
            }
        }
        params.extend(
            self.children
                .iter()
                .enumerate()
                .map(|(i, ain)| param(&format!("child_{}", i + 1), ain)),
        );
        if self.color_preset {
            params.push(param("colorpreset", "true"));
        }
        params
    }
}

impl Command for TemplateCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::List => "gettemplatelistinfos",
            Self::Apply(_) => "applytemplate",
            Self::AddColorLevel(_) => "addcolorleveltemplate",
        }
    }

    fn ain(&self) -> Option<&str> {
        match self {
            Self::Apply(ain) => Some(ain),
            Self::List | Self::AddColorLevel(_) => None,
        }
    }

    fn params(&self) -> Vec<(String, String)> {
        match self {
            Self::AddColorLevel(template) => template.params(),
            Self::List | Self::Apply(_) => Vec::new(),
        }
    }
}

/// Command for triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerCommand {
    /// Query all triggers.
    List,
    /// Enable or disable a trigger.
    SetActive {
        /// Trigger AIN.
        ain: String,
        /// Enable.
        active: bool,
    },
}

impl Command for TriggerCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::List => "gettriggerlistinfos",
            Self::SetActive { .. } => "settriggeractive",
        }
    }

    fn ain(&self) -> Option<&str> {
        match self {
            Self::List => None,
            Self::SetActive { ain, .. } => Some(ain),
        }
    }

    fn params(&self) -> Vec<(String, String)> {
        match self {
            Self::List => Vec::new(),
            Self::SetActive { active, .. } => vec![param("active", codec::encode_bool(*active))],
        }
    }
}
