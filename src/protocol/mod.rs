// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP plumbing for the gateway.
//!
//! - [`HttpConfig`] / [`HttpClient`]: transport and response classification
//! - [`SessionManager`]: login handshake and session id
//! - [`Dispatcher`]: builds `homeautoswitch.lua` requests for a [`Command`]
//!
//! [`Command`]: crate::command::Command

mod dispatcher;
mod http;
mod session;

pub use dispatcher::{COMMAND_RESOURCE, Dispatcher, build_query};
pub use http::{HttpClient, HttpConfig};
pub use session::{LOGIN_RESOURCE, SessionManager, challenge_response};

use serde::de::DeserializeOwned;

use crate::codec;
use crate::error::ParseError;

/// Reply to a command, trailing whitespace already stripped.
#[derive(Debug, Clone)]
pub struct CommandResponse {
    body: String,
}

impl CommandResponse {
    /// Creates a command response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consumes the response, returning the body.
    #[must_use]
    pub fn into_body(self) -> String {
        self.body
    }

    /// Maps an XML body onto a record type.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Xml` if the document does not fit the record.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ParseError> {
        codec::decode_xml(&self.body)
    }

    /// Parses an XML body into a generic element tree.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::XmlDocument` if the body is not well-formed.
    pub fn document(&self) -> Result<xmltree::Element, ParseError> {
        codec::decode_xml_document(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::SubscriptionState;

    #[test]
    fn parse_and_document() {
        let response = CommandResponse::new(r#"<state code="0"><latestain/></state>"#.to_string());
        let state: SubscriptionState = response.parse().unwrap();
        assert_eq!(state.code, "0");
        let doc = response.document().unwrap();
        assert_eq!(doc.name, "state");
        assert_eq!(doc.attributes.get("code").map(String::as_str), Some("0"));
    }

    #[test]
    fn document_rejects_garbage() {
        let response = CommandResponse::new("not xml".to_string());
        assert!(matches!(
            response.document(),
            Err(ParseError::XmlDocument(_))
        ));
    }
}
