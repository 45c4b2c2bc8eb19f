//! Policies shown on the dashboard

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tone::Tone;

/// Lifecycle status of a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyStatus {
    Active,
    Pending,
    Expired,
}

impl PolicyStatus {
    pub fn tone(&self) -> Tone {
        match self {
            PolicyStatus::Active => Tone::Success,
            PolicyStatus::Pending => Tone::Warning,
            PolicyStatus::Expired => Tone::Danger,
        }
    }
}

/// Line of business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyKind {
    Auto,
    Home,
    Life,
}

impl PolicyKind {
    pub fn title(&self) -> &'static str {
        match self {
            PolicyKind::Auto => "Auto Insurance",
            PolicyKind::Home => "Home Insurance",
            PolicyKind::Life => "Life Insurance",
        }
    }
}

/// An in-force or pending policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: u32,
    pub kind: PolicyKind,
    /// Insured object: vehicle, property address or term details
    pub subject: String,
    pub monthly_premium: Decimal,
    pub status: PolicyStatus,
    pub next_payment: NaiveDate,
    /// Coverage utilisation, 0-100
    pub coverage_percent: u8,
}
