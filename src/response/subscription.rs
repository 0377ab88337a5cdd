// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! DECT-ULE registration state.

use serde::Deserialize;

use crate::error::ParseError;

/// Reply of `getsubscriptionstate`.
///
/// ```xml
/// <state code="1"><latestain>11657 0240192</latestain></state>
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionState {
    /// Raw state code, see [`SubscriptionState::code`].
    #[serde(rename = "@code")]
    pub code: String,
    /// AIN of the most recently registered device.
    #[serde(default)]
    pub latestain: String,
}

impl SubscriptionState {
    /// Returns the decoded state code.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedValue` for an undocumented code.
    pub fn code(&self) -> Result<SubscriptionCode, ParseError> {
        match self.code.trim() {
            "0" => Ok(SubscriptionCode::Idle),
            "1" => Ok(SubscriptionCode::Running),
            "2" => Ok(SubscriptionCode::Timeout),
            "3" => Ok(SubscriptionCode::Failed),
            _ => Err(ParseError::unrecognized("subscription state", &self.code)),
        }
    }

    /// Returns the most recently registered AIN, if any.
    #[must_use]
    pub fn latest_ain(&self) -> Option<&str> {
        let ain = self.latestain.trim();
        (!ain.is_empty()).then_some(ain)
    }
}

/// Registration state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionCode {
    /// No registration running.
    Idle,
    /// Registration running.
    Running,
    /// Registration timed out.
    Timeout,
    /// Registration failed.
    Failed,
}
