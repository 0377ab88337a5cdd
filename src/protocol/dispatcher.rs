// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command request building and dispatch.

use super::http::HttpClient;
use super::session::SessionManager;
use super::CommandResponse;
use crate::command::Command;
use crate::error::Result;

/// Command resource path.
pub const COMMAND_RESOURCE: &str = "webservices/homeautoswitch.lua";

/// Builds the query of a command request.
///
/// The order is fixed: `switchcmd`, `sid`, `ain` (if any), then the
/// command parameters in their own order.
///
/// # Examples
///
/// ```
/// use avm_homeauto::command::SwitchCommand;
/// use avm_homeauto::protocol::build_query;
///
/// let query = build_query(&SwitchCommand::On("1".to_string()), "9d4a0bc3e6f7a821");
/// let keys: Vec<_> = query.iter().map(|(k, _)| k.as_str()).collect();
/// assert_eq!(keys, vec!["switchcmd", "sid", "ain"]);
/// ```
#[must_use]
pub fn build_query<C: Command + ?Sized>(command: &C, sid: &str) -> Vec<(String, String)> {
    let mut query = vec![
        ("switchcmd".to_string(), command.name().to_string()),
        ("sid".to_string(), sid.to_string()),
    ];
    if let Some(ain) = command.ain() {
        query.push(("ain".to_string(), ain.to_string()));
    }
    query.extend(command.params());
    query
}

/// Sends commands with the current session id.
#[derive(Debug)]
pub struct Dispatcher {
    http: HttpClient,
    session: SessionManager,
}

impl Dispatcher {
    /// Creates a dispatcher around a transport and session.
    #[must_use]
    pub fn new(http: HttpClient, session: SessionManager) -> Self {
        Self { http, session }
    }

    /// Returns the session manager.
    #[must_use]
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Sends a command and returns the trimmed reply.
    ///
    /// # Errors
    ///
    /// Returns `Error::Value` if the command carries an invalid value,
    /// `Error::NotConnected` without a session and `Error::Protocol` if the
    /// request fails.
    pub async fn send<C: Command + ?Sized>(&self, command: &C) -> Result<CommandResponse> {
        command.validate()?;
        let sid = self.session.sid()?;
        let query = build_query(command, &sid);

        tracing::debug!(command = command.name(), ain = ?command.ain(), "Sending command");

        let body = self.http.get(COMMAND_RESOURCE, &query).await?;
        Ok(CommandResponse::new(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{LightCommand, TemplateCommand, ThermostatCommand};
    use crate::error::{Error, ValueError};
    use crate::protocol::HttpConfig;
    use crate::types::{HkrTemperature, Level};

    #[test]
    fn ain_precedes_parameters() {
        let cmd = LightCommand::Level {
            ain: "13077 0045237-1".to_string(),
            level: Level::new(128).unwrap(),
        };
        let query = build_query(&cmd, "sid1");
        assert_eq!(
            query,
            vec![
                ("switchcmd".to_string(), "setlevel".to_string()),
                ("sid".to_string(), "sid1".to_string()),
                ("ain".to_string(), "13077 0045237-1".to_string()),
                ("level".to_string(), "128".to_string()),
            ]
        );
    }

    #[test]
    fn global_command_has_no_ain() {
        let query = build_query(&TemplateCommand::List, "sid1");
        assert_eq!(query.len(), 2);
        assert!(query.iter().all(|(k, _)| k != "ain"));
    }

    #[tokio::test]
    async fn invalid_command_fails_before_session_check() {
        let http = HttpConfig::default().build_client().unwrap();
        let session = SessionManager::new(http.clone(), "user", "pass");
        let dispatcher = Dispatcher::new(http, session);

        let cmd = ThermostatCommand::SetTarget {
            ain: "1".to_string(),
            temperature: HkrTemperature::Celsius(126.5),
        };
        assert!(matches!(
            dispatcher.send(&cmd).await,
            Err(Error::Value(ValueError::TemperatureOutOfRange(_)))
        ));
        assert!(matches!(
            dispatcher.send(&TemplateCommand::List).await,
            Err(Error::NotConnected)
        ));
    }
}
