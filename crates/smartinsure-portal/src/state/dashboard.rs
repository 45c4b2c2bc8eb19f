//! Policy dashboard. Read-only, built from the catalogue.

use rust_decimal::Decimal;
use serde::Serialize;
use smartinsure_common::{Policy, PolicyStatus, Tone};

use crate::catalogue::{self, Recommendation, CLAIMS_PAID_YTD};

/// A policy as rendered on the dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyCard {
    #[serde(flatten)]
    pub policy: Policy,
    pub title: &'static str,
    pub status_tone: Tone,
}

impl From<Policy> for PolicyCard {
    fn from(policy: Policy) -> Self {
        Self {
            title: policy.kind.title(),
            status_tone: policy.status.tone(),
            policy,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub policies: Vec<PolicyCard>,
    pub policy_count: usize,
    pub active_count: usize,
    pub total_monthly_premium: Decimal,
    pub claims_paid_ytd: Decimal,
    pub recommendations: Vec<Recommendation>,
}

impl DashboardView {
    pub fn build() -> Self {
        Self::from_policies(catalogue::policies())
    }

    pub fn from_policies(policies: Vec<Policy>) -> Self {
        Self {
            policy_count: policies.len(),
            active_count: policies
                .iter()
                .filter(|p| p.status == PolicyStatus::Active)
                .count(),
            total_monthly_premium: policies.iter().map(|p| p.monthly_premium).sum(),
            claims_paid_ytd: CLAIMS_PAID_YTD,
            recommendations: catalogue::recommendations(),
            policies: policies.into_iter().map(PolicyCard::from).collect(),
        }
    }
}
