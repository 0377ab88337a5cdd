// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switching enums and device names.

use std::fmt;

use crate::error::ValueError;

/// State for the `setsimpleonoff` command.
///
/// # Examples
///
/// ```
/// use avm_homeauto::types::OnOff;
///
/// assert_eq!(OnOff::Toggle.code(), 2);
/// assert_eq!(OnOff::from(true), OnOff::On);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnOff {
    /// Switch off.
    Off,
    /// Switch on.
    On,
    /// Toggle the current state.
    Toggle,
}

impl OnOff {
    /// Returns the numeric wire code.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Off => 0,
            Self::On => 1,
            Self::Toggle => 2,
        }
    }
}

impl From<bool> for OnOff {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl fmt::Display for OnOff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Off => "off",
            Self::On => "on",
            Self::Toggle => "toggle",
        };
        write!(f, "{s}")
    }
}

/// Target for the `setblind` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlindTarget {
    /// Close the blind.
    Close,
    /// Open the blind.
    Open,
    /// Stop a running movement.
    Stop,
}

impl BlindTarget {
    /// Returns the wire token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Open => "open",
            Self::Stop => "stop",
        }
    }
}

impl fmt::Display for BlindTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A device or group name accepted by `setname`.
///
/// # Examples
///
/// ```
/// use avm_homeauto::types::DeviceName;
///
/// let name = DeviceName::new("Living room").unwrap();
/// assert_eq!(name.as_str(), "Living room");
///
/// assert!(DeviceName::new("x".repeat(41)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceName(String);

impl DeviceName {
    /// Maximum number of characters.
    pub const MAX_LEN: usize = 40;

    /// Creates a new name.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NameTooLong` for more than 40 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, ValueError> {
        let name = name.into();
        let len = name.chars().count();
        if len > Self::MAX_LEN {
            return Err(ValueError::NameTooLong {
                len,
                max: Self::MAX_LEN,
            });
        }
        Ok(Self(name))
    }

    /// Returns the name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
