//! Risk-reduction coaching actions

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tone::Tone;

/// How urgently an action should be taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn tone(&self) -> Tone {
        match self {
            Priority::High => Tone::Danger,
            Priority::Medium => Tone::Warning,
            Priority::Low => Tone::Success,
        }
    }
}

/// A suggested action that earns a monthly discount once completed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingAction {
    pub id: u32,
    pub category: String,
    pub action: String,
    pub impact: String,
    /// Monthly discount earned
    pub discount: Decimal,
    pub priority: Priority,
    pub timeframe: String,
}
