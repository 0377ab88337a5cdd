// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Login resource reply.

use serde::Deserialize;

/// `SessionInfo` document returned by `login_sid.lua`.
///
/// ```xml
/// <SessionInfo>
///   <SID>0000000000000000</SID>
///   <Challenge>1234567z</Challenge>
///   <BlockTime>0</BlockTime>
/// </SessionInfo>
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SessionInfo {
    /// Session id, all zeros while unauthenticated.
    #[serde(rename = "SID")]
    pub sid: String,
    /// Nonce for the login response.
    #[serde(rename = "Challenge", default)]
    pub challenge: String,
    /// Seconds until the next login attempt is accepted.
    #[serde(rename = "BlockTime", default)]
    pub block_time: u32,
}

impl SessionInfo {
    /// The session id of an unauthenticated session.
    pub const INVALID_SID: &'static str = "0000000000000000";

    /// Returns `true` if the document carries a usable session id.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.sid.is_empty() && self.sid != Self::INVALID_SID
    }
}
