// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outlet commands.

use super::{Command, param};
use crate::types::OnOff;

/// Command for switchable outlets.
///
/// # Examples
///
/// ```
/// use avm_homeauto::command::{Command, SwitchCommand};
/// use avm_homeauto::types::OnOff;
///
/// let cmd = SwitchCommand::On("087610500005".to_string());
/// assert_eq!(cmd.name(), "setswitchon");
/// assert!(cmd.params().is_empty());
///
/// let cmd = SwitchCommand::SimpleOnOff {
///     ain: "087610500005".to_string(),
///     state: OnOff::Toggle,
/// };
/// assert_eq!(cmd.params(), vec![("onoff".to_string(), "2".to_string())]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchCommand {
    /// List the AINs of all outlets.
    List,
    /// Switch an outlet on.
    On(String),
    /// Switch an outlet off.
    Off(String),
    /// Toggle an outlet.
    Toggle(String),
    /// Query the switching state.
    State(String),
    /// Query whether the outlet is connected.
    Present(String),
    /// Query the current power.
    Power(String),
    /// Query the energy since commissioning.
    Energy(String),
    /// Query the display name.
    Name(String),
    /// Switch any on/off capable unit.
    SimpleOnOff {
        /// Target AIN.
        ain: String,
        /// Desired state.
        state: OnOff,
    },
}

impl Command for SwitchCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::List => "getswitchlist",
            Self::On(_) => "setswitchon",
            Self::Off(_) => "setswitchoff",
            Self::Toggle(_) => "setswitchtoggle",
            Self::State(_) => "getswitchstate",
            Self::Present(_) => "getswitchpresent",
            Self::Power(_) => "getswitchpower",
            Self::Energy(_) => "getswitchenergy",
            Self::Name(_) => "getswitchname",
            Self::SimpleOnOff { .. } => "setsimpleonoff",
        }
    }

    fn ain(&self) -> Option<&str> {
        match self {
            Self::List => None,
            Self::On(ain)
            | Self::Off(ain)
            | Self::Toggle(ain)
            | Self::State(ain)
            | Self::Present(ain)
            | Self::Power(ain)
            | Self::Energy(ain)
            | Self::Name(ain)
            | Self::SimpleOnOff { ain, .. } => Some(ain),
        }
    }

    fn params(&self) -> Vec<(String, String)> {
        match self {
            Self::SimpleOnOff { state, .. } => vec![param("onoff", state.code())],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_has_no_target() {
        assert_eq!(SwitchCommand::List.name(), "getswitchlist");
        assert_eq!(SwitchCommand::List.ain(), None);
    }

    #[test]
    fn queries_carry_ain() {
        let cmd = SwitchCommand::Power("1".to_string());
        assert_eq!(cmd.name(), "getswitchpower");
        assert_eq!(cmd.ain(), Some("1"));
        assert!(cmd.params().is_empty());
    }

    #[test]
    fn simple_on_off_code() {
        let cmd = SwitchCommand::SimpleOnOff {
            ain: "1".to_string(),
            state: OnOff::Off,
        };
        assert_eq!(cmd.name(), "setsimpleonoff");
        assert_eq!(cmd.params(), vec![("onoff".to_string(), "0".to_string())]);
    }
}
