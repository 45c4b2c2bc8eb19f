//! Multi-step risk assessment wizard
//!
//! Four steps collect the risk profile form. Advancing past the last step
//! submits: the session prices the form and feeds the result back as
//! [`AssessmentAction::QuoteGenerated`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use smartinsure_common::{PremiumQuote, Result, RiskProfileForm, Toast};
use smartinsure_pricing::{RiskLevel, RiskScore};

use super::Transition;

pub const TOTAL_STEPS: u8 = 4;

/// Title and form fields of a wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepOutline {
    pub title: &'static str,
    pub fields: &'static [&'static str],
}

/// Outline of a 1-based step; anything past the end is the last step
pub fn step_outline(step: u8) -> StepOutline {
    let (title, fields): (&'static str, &'static [&'static str]) = match step {
        1 => ("Personal Information", &["age", "location"]),
        2 => ("Vehicle Information", &["vehicleYear", "vehicleType"]),
        3 => ("Driving History", &["drivingHistory", "annualMileage"]),
        _ => ("Coverage Preferences", &["creditScore", "coverageType"]),
    };
    StepOutline { title, fields }
}

#[derive(Debug, Clone)]
pub enum AssessmentAction {
    SetField { field: String, value: String },
    Next,
    Previous,
    QuoteGenerated { quote: PremiumQuote, risk_score: RiskScore },
    Reset,
}

/// Coverage line on the generated quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageLine {
    pub label: String,
    pub limit: Decimal,
}

/// Quote shown once the wizard is submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub quote: PremiumQuote,
    pub risk_score: RiskScore,
    pub risk_level: RiskLevel,
    pub coverage: Vec<CoverageLine>,
}

impl AssessmentResult {
    pub fn new(quote: PremiumQuote, risk_score: RiskScore) -> Self {
        let coverage = [
            ("Liability Coverage", dec!(100000)),
            ("Collision Coverage", dec!(50000)),
            ("Comprehensive", dec!(25000)),
            ("Deductible", dec!(500)),
        ]
        .into_iter()
        .map(|(label, limit)| CoverageLine {
            label: label.to_string(),
            limit,
        })
        .collect();

        Self {
            quote,
            risk_level: risk_score.level(),
            risk_score,
            coverage,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentState {
    pub step: u8,
    pub form: RiskProfileForm,
    pub result: Option<AssessmentResult>,
}

impl Default for AssessmentState {
    fn default() -> Self {
        Self {
            step: 1,
            form: RiskProfileForm::default(),
            result: None,
        }
    }
}

impl AssessmentState {
    /// Completion percentage shown on the progress bar
    pub fn progress(&self) -> u8 {
        ((self.step as u16 * 100) / TOTAL_STEPS as u16) as u8
    }

    pub fn outline(&self) -> StepOutline {
        step_outline(self.step)
    }

    pub fn is_final_step(&self) -> bool {
        self.step >= TOTAL_STEPS
    }

    pub fn reduce(self, action: AssessmentAction) -> Result<Transition<Self>> {
        match action {
            AssessmentAction::SetField { field, value } => {
                let mut form = self.form;
                form.set_field(&field, value)?;
                Ok(Transition::quiet(Self { form, ..self }))
            }
            AssessmentAction::Next if !self.is_final_step() => Ok(Transition::quiet(Self {
                step: self.step + 1,
                ..self
            })),
            // Submission from the last step goes through QuoteGenerated
            AssessmentAction::Next => Ok(Transition::quiet(self)),
            AssessmentAction::Previous => Ok(Transition::quiet(Self {
                step: self.step.saturating_sub(1).max(1),
                ..self
            })),
            AssessmentAction::QuoteGenerated { quote, risk_score } => Ok(Transition::with_toast(
                Self {
                    result: Some(AssessmentResult::new(quote, risk_score)),
                    ..self
                },
                Toast::new(
                    "Quote Generated Successfully!",
                    "Your personalized premium has been calculated using AI analysis.",
                ),
            )),
            AssessmentAction::Reset => Ok(Transition::quiet(Self::default())),
        }
    }
}
