//! Claims portal: claims history and the new-claim form

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smartinsure_common::{Claim, ClaimForm, ClaimStatus, Result, Toast};

use super::Transition;
use crate::catalogue::{self, Stat};

/// Year stamped into generated claim ids
pub const DEFAULT_CLAIM_YEAR: i32 = 2024;

#[derive(Debug, Clone)]
pub enum ClaimsAction {
    OpenForm,
    /// Hides the form but keeps whatever was typed
    CloseForm,
    SetField { field: String, value: String },
    Submit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimsState {
    /// Newest first
    pub claims: Vec<Claim>,
    pub form_open: bool,
    pub form: ClaimForm,
    pub next_sequence: u32,
    pub id_year: i32,
}

impl Default for ClaimsState {
    fn default() -> Self {
        Self::with_year(DEFAULT_CLAIM_YEAR)
    }
}

impl ClaimsState {
    pub fn with_year(id_year: i32) -> Self {
        let claims = catalogue::claims();
        Self {
            next_sequence: claims.len() as u32 + 1,
            claims,
            form_open: false,
            form: ClaimForm::default(),
            id_year,
        }
    }

    /// Id the next submitted claim will get
    pub fn next_claim_id(&self) -> String {
        format!("CLM-{}-{:03}", self.id_year, self.next_sequence)
    }

    pub fn active_count(&self) -> usize {
        self.claims
            .iter()
            .filter(|c| c.status != ClaimStatus::Approved && c.status != ClaimStatus::Denied)
            .count()
    }

    /// Sum of every claim amount, saturating at `Decimal::MAX`
    pub fn total_claimed(&self) -> Decimal {
        self.claims.iter().fold(Decimal::ZERO, |total, c| {
            total.checked_add(c.amount).unwrap_or(Decimal::MAX)
        })
    }

    pub fn stats(&self) -> ClaimsStats {
        ClaimsStats {
            active_claims: self.active_count(),
            total_claimed: self.total_claimed(),
            service: catalogue::claims_service_stats(),
        }
    }

    pub fn reduce(self, action: ClaimsAction) -> Result<Transition<Self>> {
        match action {
            ClaimsAction::OpenForm => Ok(Transition::quiet(Self {
                form_open: true,
                ..self
            })),
            ClaimsAction::CloseForm => Ok(Transition::quiet(Self {
                form_open: false,
                ..self
            })),
            ClaimsAction::SetField { field, value } => {
                let mut form = self.form;
                form.set_field(&field, value)?;
                Ok(Transition::quiet(Self { form, ..self }))
            }
            ClaimsAction::Submit => {
                let valid = self.form.validate()?;
                let id = self.next_claim_id();

                let claim = Claim {
                    id: id.clone(),
                    kind: valid.claim_type.label().to_string(),
                    date: valid.date,
                    amount: valid.amount,
                    status: ClaimStatus::UnderReview,
                    progress: 0,
                    description: valid.description,
                };
                let mut claims = self.claims;
                claims.insert(0, claim);

                Ok(Transition::with_toast(
                    Self {
                        claims,
                        form_open: false,
                        form: ClaimForm::default(),
                        next_sequence: self.next_sequence + 1,
                        id_year: self.id_year,
                    },
                    Toast::new(
                        "Claim Submitted Successfully!",
                        format!(
                            "Your claim has been processed by AI and assigned claim ID {id}. \
                             Expected processing time: 2-3 business days."
                        ),
                    ),
                ))
            }
        }
    }
}

/// Summary cards on the claims view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimsStats {
    pub active_claims: usize,
    pub total_claimed: Decimal,
    pub service: Vec<Stat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use smartinsure_common::{SmartInsureError, ValidationError};

    fn fill(state: ClaimsState, fields: &[(&str, &str)]) -> ClaimsState {
        fields.iter().fold(state, |state, (field, value)| {
            state
                .reduce(ClaimsAction::SetField {
                    field: field.to_string(),
                    value: value.to_string(),
                })
                .unwrap()
                .state
        })
    }

    #[test]
    fn test_initial_stats() {
        let state = ClaimsState::default();
        let stats = state.stats();
        assert_eq!(stats.active_claims, 2);
        assert_eq!(stats.total_claimed, dec!(5150));
        assert_eq!(state.next_claim_id(), "CLM-2024-004");
    }

    #[test]
    fn test_submit_prepends_claim() {
        let state = ClaimsState::default()
            .reduce(ClaimsAction::OpenForm)
            .unwrap()
            .state;
        let state = fill(
            state,
            &[
                ("type", "auto-theft"),
                ("description", "Car stolen from driveway"),
                ("amount", "8000"),
                ("date", "2024-02-03"),
            ],
        );

        let t = state.reduce(ClaimsAction::Submit).unwrap();
        let state = t.state;
        let claim = &state.claims[0];
        assert_eq!(claim.id, "CLM-2024-004");
        assert_eq!(claim.kind, "Auto Theft");
        assert_eq!(claim.status, ClaimStatus::UnderReview);
        assert_eq!(claim.progress, 0);
        assert_eq!(claim.date, NaiveDate::from_ymd_opt(2024, 2, 3));
        assert_eq!(state.claims.len(), 4);
        assert!(!state.form_open);
        assert_eq!(state.form, ClaimForm::default());
        assert!(t.toasts[0].description.contains("CLM-2024-004"));
        assert_eq!(state.total_claimed(), dec!(13150));
        assert_eq!(state.active_count(), 3);
    }

    #[test]
    fn test_ids_keep_counting() {
        let mut state = ClaimsState::with_year(2026);
        for expected in ["CLM-2026-004", "CLM-2026-005", "CLM-2026-006"] {
            state = fill(state, &[("type", "other")]);
            state = state.reduce(ClaimsAction::Submit).unwrap().state;
            assert_eq!(state.claims[0].id, expected);
        }
    }

    #[test]
    fn test_submit_without_type_is_rejected() {
        let state = fill(ClaimsState::default(), &[("amount", "100")]);
        let err = state.reduce(ClaimsAction::Submit).unwrap_err();
        assert!(matches!(
            err,
            SmartInsureError::Validation(ValidationError::MissingField { field: "type" })
        ));
    }

    #[test]
    fn test_huge_amount_is_rejected() {
        let state = fill(
            ClaimsState::default(),
            &[("type", "auto-accident"), ("amount", "79228162514264337593543950335")],
        );
        let err = state.clone().reduce(ClaimsAction::Submit).unwrap_err();
        assert!(matches!(
            err,
            SmartInsureError::Validation(ValidationError::OutOfRange { field: "amount", .. })
        ));
        assert_eq!(state.stats().total_claimed, dec!(5150));
    }

    #[test]
    fn test_total_claimed_saturates() {
        let mut state = ClaimsState::default();
        state.claims[0].amount = Decimal::MAX;
        assert_eq!(state.total_claimed(), Decimal::MAX);
        assert_eq!(state.stats().active_claims, 2);
    }

    #[test]
    fn test_close_keeps_draft() {
        let state = ClaimsState::default()
            .reduce(ClaimsAction::OpenForm)
            .unwrap()
            .state;
        let state = fill(state, &[("description", "hail")]);
        let state = state.reduce(ClaimsAction::CloseForm).unwrap().state;
        assert!(!state.form_open);
        assert_eq!(state.form.description, "hail");
    }
}
