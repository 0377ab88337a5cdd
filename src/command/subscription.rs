// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! DECT-ULE registration commands.
//!
//! Both require the "restricted settings for apps" permission on the
//! gateway account.

use super::Command;

/// Command for DECT-ULE device registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionCommand {
    /// Start a registration.
    Start,
    /// Query the registration state.
    State,
}

impl Command for SubscriptionCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::Start => "startulesubscription",
            Self::State => "getsubscriptionstate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(SubscriptionCommand::Start.name(), "startulesubscription");
        assert_eq!(SubscriptionCommand::State.name(), "getsubscriptionstate");
        assert!(SubscriptionCommand::Start.params().is_empty());
    }
}
