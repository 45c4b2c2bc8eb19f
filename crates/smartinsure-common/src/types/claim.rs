//! Claims - filed incidents and the new-claim form

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::tone::Tone;
use crate::error::ValidationError;

/// Largest amount a single claim may be filed for
pub const MAX_CLAIM_AMOUNT: Decimal = dec!(10000000);

/// Processing status of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    Approved,
    Processing,
    #[serde(rename = "Under Review")]
    UnderReview,
    Denied,
}

impl ClaimStatus {
    pub fn tone(&self) -> Tone {
        match self {
            ClaimStatus::Approved => Tone::Success,
            ClaimStatus::Processing => Tone::Info,
            ClaimStatus::UnderReview => Tone::Warning,
            ClaimStatus::Denied => Tone::Danger,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Processing => "Processing",
            ClaimStatus::UnderReview => "Under Review",
            ClaimStatus::Denied => "Denied",
        }
    }
}

/// Incident categories selectable on the new-claim form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClaimType {
    AutoAccident,
    AutoTheft,
    AutoVandalism,
    HomeFire,
    HomeWater,
    HomeTheft,
    Other,
}

impl ClaimType {
    pub const ALL: [ClaimType; 7] = [
        ClaimType::AutoAccident,
        ClaimType::AutoTheft,
        ClaimType::AutoVandalism,
        ClaimType::HomeFire,
        ClaimType::HomeWater,
        ClaimType::HomeTheft,
        ClaimType::Other,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn code(&self) -> &'static str {
        match self {
            ClaimType::AutoAccident => "auto-accident",
            ClaimType::AutoTheft => "auto-theft",
            ClaimType::AutoVandalism => "auto-vandalism",
            ClaimType::HomeFire => "home-fire",
            ClaimType::HomeWater => "home-water",
            ClaimType::HomeTheft => "home-theft",
            ClaimType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClaimType::AutoAccident => "Auto Accident",
            ClaimType::AutoTheft => "Auto Theft",
            ClaimType::AutoVandalism => "Auto Vandalism",
            ClaimType::HomeFire => "Home Fire",
            ClaimType::HomeWater => "Home Water Damage",
            ClaimType::HomeTheft => "Home Theft",
            ClaimType::Other => "Other",
        }
    }
}

/// A filed claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: String,
    /// Display label of the incident type
    pub kind: String,
    pub date: Option<NaiveDate>,
    pub amount: Decimal,
    pub status: ClaimStatus,
    /// Processing progress, 0-100
    pub progress: u8,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Raw new-claim form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimForm {
    #[serde(rename = "type")]
    pub claim_type: String,
    pub description: String,
    pub amount: String,
    pub date: String,
}

impl ClaimForm {
    /// Set a field by its form name (`type`, `description`, `amount`, `date`)
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> Result<(), ValidationError> {
        let slot = match field {
            "type" => &mut self.claim_type,
            "description" => &mut self.description,
            "amount" => &mut self.amount,
            "date" => &mut self.date,
            other => return Err(ValidationError::UnknownField(other.to_string())),
        };
        *slot = value.into();
        Ok(())
    }

    /// Validate the form into the pieces a new claim is built from.
    ///
    /// Only the claim type is required. Amount and date are optional but
    /// must parse when present; the amount is capped at [`MAX_CLAIM_AMOUNT`].
    pub fn validate(&self) -> Result<ValidClaimForm, ValidationError> {
        let code = self.claim_type.trim();
        if code.is_empty() {
            return Err(ValidationError::MissingField { field: "type" });
        }
        // Unlisted types are filed as "Other"
        let claim_type = ClaimType::from_code(code).unwrap_or(ClaimType::Other);

        let amount = match self.amount.trim() {
            "" => Decimal::ZERO,
            raw => {
                let amount: Decimal = raw.parse().map_err(|_| ValidationError::InvalidNumber {
                    field: "amount",
                    value: raw.to_string(),
                })?;
                if amount.is_sign_negative() && !amount.is_zero() {
                    return Err(ValidationError::Negative { field: "amount" });
                }
                if amount > MAX_CLAIM_AMOUNT {
                    return Err(ValidationError::OutOfRange {
                        field: "amount",
                        value: raw.to_string(),
                        min: "0".into(),
                        max: MAX_CLAIM_AMOUNT.to_string(),
                    });
                }
                amount
            }
        };

        let date = match self.date.trim() {
            "" => None,
            raw => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                ValidationError::InvalidNumber {
                    field: "date",
                    value: raw.to_string(),
                }
            })?),
        };

        Ok(ValidClaimForm {
            claim_type,
            description: self.description.trim().to_string(),
            amount,
            date,
        })
    }
}

/// Claim form after validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidClaimForm {
    pub claim_type: ClaimType,
    pub description: String,
    pub amount: Decimal,
    pub date: Option<NaiveDate>,
}
