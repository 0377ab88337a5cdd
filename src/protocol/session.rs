// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Session handshake and token state.
//!
//! The gateway issues a session id (SID) through `login_sid.lua` using a
//! challenge/response scheme:
//!
//! 1. `GET login_sid.lua` returns a `SessionInfo` with a challenge. A
//!    non-zero SID there is adopted directly.
//! 2. Otherwise `GET login_sid.lua?username=..&response=..` with
//!    `response = challenge + "-" + md5hex(utf16le(challenge + "-" + password))`
//!    returns the SID.
//!
//! The SID is reused until [`SessionManager::logout`] or a new handshake.
//! Expiry on the gateway side is not detected; callers re-login explicitly.

use md5::{Digest, Md5};
use parking_lot::RwLock;
use tokio::sync::Mutex;

use super::http::HttpClient;
use crate::codec;
use crate::error::{Error, LoginError, ParseError};
use crate::response::SessionInfo;

/// Login resource path.
pub const LOGIN_RESOURCE: &str = "login_sid.lua";

/// Computes the login response for a challenge.
///
/// # Examples
///
/// ```
/// use avm_homeauto::protocol::challenge_response;
///
/// assert_eq!(
///     challenge_response("1234567z", "äbc"),
///     "1234567z-9e224a41eeefa284df7bb0f26c2913e2"
/// );
/// ```
#[must_use]
pub fn challenge_response(challenge: &str, password: &str) -> String {
    let utf16: Vec<u8> = format!("{challenge}-{password}")
        .encode_utf16()
        .flat_map(u16::to_le_bytes)
        .collect();
    let digest = Md5::digest(&utf16);
    format!("{challenge}-{}", hex::encode(digest))
}

/// Owns the login handshake and the current session id.
///
/// Commands take a clone of the SID and never hold the lock across a
/// request. Handshakes and logout are serialized among themselves.
pub struct SessionManager {
    http: HttpClient,
    username: String,
    password: String,
    sid: RwLock<Option<String>>,
    gate: Mutex<()>,
}

impl SessionManager {
    /// Creates an unauthenticated session manager.
    #[must_use]
    pub fn new(http: HttpClient, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            http,
            username: username.into(),
            password: password.into(),
            sid: RwLock::new(None),
            gate: Mutex::new(()),
        }
    }

    /// Returns the current session id.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` if no session is established.
    pub fn sid(&self) -> Result<String, Error> {
        self.sid.read().clone().ok_or(Error::NotConnected)
    }

    /// Returns `true` if a session is established.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.sid.read().is_some()
    }

    /// Performs the handshake and replaces the current session id.
    ///
    /// On failure the previous session id is dropped as well.
    ///
    /// # Errors
    ///
    /// Returns `LoginError` if the handshake cannot complete.
    pub async fn login(&self) -> Result<(), LoginError> {
        let _guard = self.gate.lock().await;

        match self.handshake().await {
            Ok(sid) => {
                *self.sid.write() = Some(sid);
                tracing::info!(username = %self.username, "Logged in");
                Ok(())
            }
            Err(e) => {
                *self.sid.write() = None;
                tracing::debug!(error = %e, "Login failed");
                Err(e)
            }
        }
    }

    /// Invalidates the session on the gateway and drops it locally.
    ///
    /// The local session is dropped even if the gateway request fails.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` without a session and
    /// `Error::Protocol` if the logout request fails.
    pub async fn logout(&self) -> Result<(), Error> {
        let _guard = self.gate.lock().await;

        let sid = self.sid.write().take();
        let Some(sid) = sid else {
            return Err(Error::NotConnected);
        };

        let query = [
            ("logout".to_string(), "1".to_string()),
            ("sid".to_string(), sid),
        ];
        self.http.get(LOGIN_RESOURCE, &query).await?;

        tracing::info!("Logged out");
        Ok(())
    }

    async fn handshake(&self) -> Result<String, LoginError> {
        let body = self.http.get(LOGIN_RESOURCE, &[]).await?;
        let info: SessionInfo = codec::decode_xml(&body)?;
        if info.is_authenticated() {
            return Ok(info.sid);
        }
        if info.challenge.is_empty() {
            return Err(ParseError::unrecognized("challenge", &body).into());
        }

        let query = [
            ("username".to_string(), self.username.clone()),
            (
                "response".to_string(),
                challenge_response(&info.challenge, &self.password),
            ),
        ];
        let body = self.http.get(LOGIN_RESOURCE, &query).await?;
        let info: SessionInfo = codec::decode_xml(&body)?;

        if info.is_authenticated() {
            Ok(info.sid)
        } else if info.block_time > 0 {
            Err(LoginError::Blocked(info.block_time))
        } else {
            Err(LoginError::InvalidCredentials)
        }
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("base_url", &self.http.base_url())
            .field("username", &self.username)
            .field("connected", &self.is_connected())
            .finish_non_exhaustive()
    }
}
