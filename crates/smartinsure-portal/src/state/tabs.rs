//! Tab navigation

use serde::{Deserialize, Serialize};
use smartinsure_common::Toast;

use super::Transition;

/// Top-level portal views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    Home,
    InstantQuote,
    #[serde(rename = "quote")]
    RiskAssessment,
    Dashboard,
    Claims,
    Coaching,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Home,
        Tab::InstantQuote,
        Tab::RiskAssessment,
        Tab::Dashboard,
        Tab::Claims,
        Tab::Coaching,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::InstantQuote => "Instant Quote",
            Tab::RiskAssessment => "Risk Assessment",
            Tab::Dashboard => "My Policies",
            Tab::Claims => "Claims",
            Tab::Coaching => "Smart Coaching",
        }
    }
}

#[derive(Debug, Clone)]
pub enum TabAction {
    Select(Tab),
    /// Hero call-to-action
    GetQuote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TabState {
    pub active: Tab,
}

impl TabState {
    pub fn reduce(self, action: TabAction) -> Transition<Self> {
        match action {
            TabAction::Select(active) => Transition::quiet(Self { active }),
            TabAction::GetQuote => Transition::with_toast(
                Self {
                    active: Tab::InstantQuote,
                },
                Toast::new(
                    "Welcome to Smart Insurance",
                    "Let's create your personalized policy with AI-driven risk assessment.",
                ),
            ),
        }
    }
}
