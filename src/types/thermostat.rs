// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Radiator controller (HKR) values.
//!
//! The gateway transfers HKR temperatures in half-degree steps: 16 means
//! 8 °C, 56 means 28 °C. Two codes outside that range are reserved, 254 for
//! "valve always open" and 253 for "valve always closed".

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::ValueError;

/// A thermostat setpoint or reading.
///
/// # Examples
///
/// ```
/// use avm_homeauto::types::HkrTemperature;
///
/// let comfort = HkrTemperature::celsius(21.5).unwrap();
/// assert_eq!(comfort, HkrTemperature::Celsius(21.5));
///
/// // Outside the regulated range
/// assert!(HkrTemperature::celsius(30.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HkrTemperature {
    /// Valve permanently open (wire code 254).
    On,
    /// Valve permanently closed (wire code 253).
    Off,
    /// A regulated temperature in °C.
    Celsius(f64),
}

impl HkrTemperature {
    /// Lowest regulated temperature in °C.
    pub const MIN_CELSIUS: f64 = 8.0;

    /// Highest regulated temperature in °C.
    pub const MAX_CELSIUS: f64 = 28.0;

    /// Creates a regulated temperature.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TemperatureOutOfRange` outside 8-28 °C.
    pub fn celsius(value: f64) -> Result<Self, ValueError> {
        let checked = Self::Celsius(value);
        checked.validate()?;
        Ok(checked)
    }

    /// Checks that a regulated temperature lies within 8-28 °C.
    ///
    /// The sentinels always pass.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TemperatureOutOfRange` outside 8-28 °C.
    pub fn validate(&self) -> Result<(), ValueError> {
        match *self {
            Self::Celsius(value)
                if !(Self::MIN_CELSIUS..=Self::MAX_CELSIUS).contains(&value) =>
            {
                Err(ValueError::TemperatureOutOfRange(value))
            }
            _ => Ok(()),
        }
    }

    /// Returns the temperature in °C, or `None` for a sentinel.
    #[must_use]
    pub fn as_celsius(&self) -> Option<f64> {
        match self {
            Self::Celsius(value) => Some(*value),
            Self::On | Self::Off => None,
        }
    }
}

impl fmt::Display for HkrTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "ON"),
            Self::Off => write!(f, "OFF"),
            Self::Celsius(value) => write!(f, "{value:.1} °C"),
        }
    }
}

/// End of a boost or window-open period.
///
/// [`EndTime::Disable`] switches the mode off. An active end time must not
/// lie in the past and no more than 24 hours ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndTime {
    /// Switch the mode off.
    Disable,
    /// Keep the mode active until the given instant.
    At(DateTime<Utc>),
}

impl EndTime {
    /// Longest period the gateway accepts.
    #[must_use]
    pub fn max_ahead() -> TimeDelta {
        TimeDelta::hours(24)
    }

    /// Creates an end time relative to the current clock.
    ///
    /// # Errors
    ///
    /// See [`EndTime::checked`].
    pub fn at(end: DateTime<Utc>) -> Result<Self, ValueError> {
        Self::checked(end, Utc::now())
    }

    /// Creates an end time relative to `now`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::EndTimeInPast` if `end` is before `now` and
    /// `ValueError::EndTimeTooFar` if it is more than 24 hours after it.
    pub fn checked(end: DateTime<Utc>, now: DateTime<Utc>) -> Result<Self, ValueError> {
        if end < now {
            return Err(ValueError::EndTimeInPast);
        }
        if end > now + Self::max_ahead() {
            return Err(ValueError::EndTimeTooFar);
        }
        Ok(Self::At(end))
    }

    /// Returns the instant, or `None` when disabling.
    #[must_use]
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Disable => None,
            Self::At(end) => Some(*end),
        }
    }
}
