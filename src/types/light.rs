// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light control values.
//!
//! Dimmer levels, hue/saturation pairs and colour temperatures accepted by
//! the `setlevel`, `setcolor` and `setcolortemperature` commands. Every
//! constructor checks the documented range so an out-of-range value never
//! reaches the gateway.

use std::fmt;

use crate::error::ValueError;

fn check_range(field: &'static str, value: u16, min: u16, max: u16) -> Result<(), ValueError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValueError::OutOfRange {
            field,
            min: i64::from(min),
            max: i64::from(max),
            actual: i64::from(value),
        })
    }
}

/// Brightness level on the gateway's 0-255 scale.
///
/// # Examples
///
/// ```
/// use avm_homeauto::types::Level;
///
/// let level = Level::new(128).unwrap();
/// assert_eq!(level.value(), 128);
///
/// assert!(Level::new(256).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    /// Lowest level.
    pub const MIN: Self = Self(0);

    /// Highest level.
    pub const MAX: Self = Self(255);

    /// Creates a new level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 255.
    pub fn new(value: u16) -> Result<Self, ValueError> {
        check_range("level", value, 0, 255)?;
        #[allow(clippy::cast_possible_truncation)]
        let value = value as u8;
        Ok(Self(value))
    }

    /// Returns the raw level.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Brightness level as a percentage (0-100).
///
/// # Examples
///
/// ```
/// use avm_homeauto::types::LevelPercentage;
///
/// assert_eq!(LevelPercentage::new(75).unwrap().value(), 75);
/// assert!(LevelPercentage::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LevelPercentage(u8);

impl LevelPercentage {
    /// Creates a new percentage level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u16) -> Result<Self, ValueError> {
        check_range("level percentage", value, 0, 100)?;
        #[allow(clippy::cast_possible_truncation)]
        let value = value as u8;
        Ok(Self(value))
    }

    /// Returns the percentage.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for LevelPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Hue in degrees (0-359).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hue(u16);

impl Hue {
    /// Creates a new hue.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 359.
    pub fn new(value: u16) -> Result<Self, ValueError> {
        check_range("hue", value, 0, 359)?;
        Ok(Self(value))
    }

    /// Returns the hue in degrees.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

/// Colour saturation on the gateway's 0-255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Saturation(u8);

impl Saturation {
    /// Creates a new saturation.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 255.
    pub fn new(value: u16) -> Result<Self, ValueError> {
        check_range("saturation", value, 0, 255)?;
        #[allow(clippy::cast_possible_truncation)]
        let value = value as u8;
        Ok(Self(value))
    }

    /// Returns the raw saturation.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

/// White colour temperature in Kelvin (2700-6500).
///
/// # Examples
///
/// ```
/// use avm_homeauto::types::ColorTemperature;
///
/// let warm = ColorTemperature::new(2700).unwrap();
/// assert_eq!(warm, ColorTemperature::WARMEST);
/// assert!(ColorTemperature::new(2000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorTemperature(u16);

impl ColorTemperature {
    /// Warmest supported white.
    pub const WARMEST: Self = Self(2700);

    /// Coolest supported white.
    pub const COOLEST: Self = Self(6500);

    /// Creates a new colour temperature.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if kelvin is outside [2700, 6500].
    pub fn new(kelvin: u16) -> Result<Self, ValueError> {
        check_range("color temperature", kelvin, Self::WARMEST.0, Self::COOLEST.0)?;
        Ok(Self(kelvin))
    }

    /// Returns the temperature in Kelvin.
    #[must_use]
    pub const fn kelvin(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for ColorTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.0)
    }
}
