//! Configuration for a campaign session.

use ash_mechanics::Rules;
use serde::{Deserialize, Serialize};

/// Configuration for a session. Saved alongside the session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Campaign title shown in status output.
    pub campaign: String,
    /// Derived-attribute and economy rules.
    pub rules: Rules,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            campaign: "Untitled Campaign".to_string(),
            rules: Rules::default(),
        }
    }
}

impl SessionConfig {
    /// Set the campaign title.
    pub fn with_campaign(mut self, campaign: impl Into<String>) -> Self {
        self.campaign = campaign.into();
        self
    }

    /// Replace the rules.
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }
}
