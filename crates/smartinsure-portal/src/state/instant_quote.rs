//! Instant quote: natural-language "AI" quote plus coverage sliders

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smartinsure_common::{Result, SessionError, Toast};
use smartinsure_pricing::customization::{default_base_premium, validate_description};
use smartinsure_pricing::{AdjustedQuote, CoverageOptions};

use super::Transition;

#[derive(Debug, Clone)]
pub enum InstantQuoteAction {
    SetDescription(String),
    SetCoverage(CoverageOptions),
    /// Begin the simulated AI analysis of the description
    StartAiQuote,
    AiQuoteCompleted { base_premium: Decimal },
    AiQuoteCancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstantQuoteState {
    pub description: String,
    pub coverage: CoverageOptions,
    pub base_premium: Decimal,
    pub processing: bool,
}

impl Default for InstantQuoteState {
    fn default() -> Self {
        Self {
            description: String::new(),
            coverage: CoverageOptions::default(),
            base_premium: default_base_premium(),
            processing: false,
        }
    }
}

impl InstantQuoteState {
    /// Current itemised quote
    pub fn quote(&self) -> AdjustedQuote {
        self.coverage.price(self.base_premium)
    }

    /// Whether the "Generate AI Quote" button is enabled
    pub fn can_start(&self) -> bool {
        !self.processing && !self.description.trim().is_empty()
    }

    pub fn reduce(self, action: InstantQuoteAction) -> Result<Transition<Self>> {
        match action {
            InstantQuoteAction::SetDescription(description) => {
                Ok(Transition::quiet(Self { description, ..self }))
            }
            InstantQuoteAction::SetCoverage(coverage) => Ok(Transition::quiet(Self {
                coverage: coverage.normalized(),
                ..self
            })),
            InstantQuoteAction::StartAiQuote => {
                validate_description(&self.description)?;
                if self.processing {
                    return Err(SessionError::AlreadyProcessing.into());
                }
                Ok(Transition::quiet(Self {
                    processing: true,
                    ..self
                }))
            }
            InstantQuoteAction::AiQuoteCompleted { base_premium } => {
                // A completion arriving after a cancel is stale
                if !self.processing {
                    return Ok(Transition::quiet(self));
                }
                Ok(Transition::with_toast(
                    Self {
                        base_premium,
                        processing: false,
                        ..self
                    },
                    Toast::new(
                        "AI Quote Generated!",
                        "Based on your description, we've created a personalized quote for you.",
                    ),
                ))
            }
            InstantQuoteAction::AiQuoteCancelled => Ok(Transition::quiet(Self {
                processing: false,
                ..self
            })),
        }
    }
}
