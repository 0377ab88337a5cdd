// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the library.
//!
//! The hierarchy mirrors the stages a command goes through: argument
//! validation, login, transport, and decoding of the gateway reply.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied argument is outside its documented domain.
    ///
    /// Raised before any request is built.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The gateway rejected the request or could not be reached.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The gateway replied with something outside the documented wire domain.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The login handshake could not complete.
    #[error("login failed: {0}")]
    Login(#[from] LoginError),

    /// The client has no live session.
    #[error("client is not connected")]
    NotConnected,
}

/// Errors related to argument validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("{field} value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the checked argument.
        field: &'static str,
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The value that was provided.
        actual: i64,
    },

    /// A thermostat temperature outside 8-28 °C.
    #[error("temperature {0} °C is out of range [8, 28]")]
    TemperatureOutOfRange(f64),

    /// A device name longer than the gateway accepts.
    #[error("name has {len} characters, at most {max} are allowed")]
    NameTooLong {
        /// Number of characters in the rejected name.
        len: usize,
        /// Maximum number of characters.
        max: usize,
    },

    /// An end time that already lies in the past.
    #[error("end time lies in the past")]
    EndTimeInPast,

    /// An end time more than 24 hours ahead.
    #[error("end time lies more than 24 hours in the future")]
    EndTimeTooFar,
}

/// Errors related to the HTTP exchange with the gateway.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-success status.
    #[error("HTTP {status} - {reason}")]
    HttpStatus {
        /// Numeric status code.
        status: u16,
        /// Canonical reason phrase.
        reason: String,
    },

    /// The gateway answered 403/401 for the session in use.
    #[error("request not authorized")]
    Unauthorized,

    /// The gateway embedded an `HTTP/1.0 500` status line in a 200 body.
    #[error("internal server error reported by the gateway")]
    InternalServerError,

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to decoding gateway replies.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A scalar reply is outside the documented wire domain of its kind.
    #[error("unrecognized {kind} value: {raw:?}")]
    UnrecognizedValue {
        /// The value kind that was expected.
        kind: &'static str,
        /// The offending raw string.
        raw: String,
    },

    /// XML could not be mapped onto the expected record.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// XML is not a well-formed document.
    #[error("XML document error: {0}")]
    XmlDocument(#[from] xmltree::ParseError),

    /// JSON (de)serialization failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParseError {
    /// Creates an [`ParseError::UnrecognizedValue`] for `raw`.
    pub(crate) fn unrecognized(kind: &'static str, raw: &str) -> Self {
        Self::UnrecognizedValue {
            kind,
            raw: raw.to_string(),
        }
    }
}

/// Errors raised while establishing a session.
#[derive(Debug, Error)]
pub enum LoginError {
    /// A login request failed on the wire.
    #[error("transport: {0}")]
    Transport(#[from] ProtocolError),

    /// The session document could not be read.
    #[error("malformed session document: {0}")]
    Malformed(#[from] ParseError),

    /// The gateway refused the credentials.
    #[error("credentials rejected")]
    InvalidCredentials,

    /// The gateway is refusing logins for the given number of seconds.
    #[error("login blocked for {0} seconds")]
    Blocked(u32),

    /// No username/password were configured.
    #[error("no credentials configured")]
    MissingCredentials,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            field: "level",
            min: 0,
            max: 255,
            actual: 256,
        };
        assert_eq!(err.to_string(), "level value 256 is out of range [0, 255]");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::EndTimeInPast.into();
        assert!(matches!(err, Error::Value(ValueError::EndTimeInPast)));
    }

    #[test]
    fn unrecognized_value_keeps_raw_string() {
        let err = ParseError::unrecognized("boolean", "2\n");
        assert_eq!(err.to_string(), "unrecognized boolean value: \"2\\n\"");
        match err {
            ParseError::UnrecognizedValue { kind, raw } => {
                assert_eq!(kind, "boolean");
                assert_eq!(raw, "2\n");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn login_error_display() {
        assert_eq!(
            LoginError::Blocked(32).to_string(),
            "login blocked for 32 seconds"
        );
        let err: Error = LoginError::InvalidCredentials.into();
        assert_eq!(err.to_string(), "login failed: credentials rejected");
    }
}
