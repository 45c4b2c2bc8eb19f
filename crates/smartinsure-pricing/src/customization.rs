//! Instant-quote coverage customization
//!
//! The instant quote starts from a base premium (120 until an "AI quote"
//! replaces it) and applies flat monthly adjustments for the selected
//! coverage options. The total never drops below
//! [`MIN_INSTANT_PREMIUM`](smartinsure_common::MIN_INSTANT_PREMIUM).

use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use smartinsure_common::{PricingError, BASE_MONTHLY_PREMIUM, MIN_INSTANT_PREMIUM};

pub const DEDUCTIBLE_MIN: u32 = 250;
pub const DEDUCTIBLE_MAX: u32 = 2_000;
pub const DEDUCTIBLE_STEP: u32 = 250;

pub const LIABILITY_MIN: u32 = 50_000;
pub const LIABILITY_MAX: u32 = 500_000;
pub const LIABILITY_STEP: u32 = 25_000;

/// Coverage options selectable on the instant-quote view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverageOptions {
    pub deductible: u32,
    pub liability: u32,
    pub comprehensive: bool,
    pub collision: bool,
    pub roadside: bool,
    pub rental: bool,
}

impl Default for CoverageOptions {
    fn default() -> Self {
        Self {
            deductible: 500,
            liability: 100_000,
            comprehensive: true,
            collision: true,
            roadside: false,
            rental: false,
        }
    }
}

impl CoverageOptions {
    /// Snap slider values onto their ranges and steps
    pub fn normalized(self) -> Self {
        Self {
            deductible: snap(self.deductible, DEDUCTIBLE_MIN, DEDUCTIBLE_MAX, DEDUCTIBLE_STEP),
            liability: snap(self.liability, LIABILITY_MIN, LIABILITY_MAX, LIABILITY_STEP),
            ..self
        }
    }

    /// Line items these options add to a base premium
    pub fn adjustments(&self) -> Vec<Adjustment> {
        let mut items = Vec::new();

        if self.deductible < 500 {
            items.push(Adjustment::new("Deductible Adjustment", dec!(20)));
        } else if self.deductible > 1_000 {
            items.push(Adjustment::new("Deductible Adjustment", dec!(-15)));
        }
        if self.liability > 100_000 {
            items.push(Adjustment::new("Liability Coverage", dec!(25)));
        }
        if self.roadside {
            items.push(Adjustment::new("Roadside Assistance", dec!(15)));
        }
        if self.rental {
            items.push(Adjustment::new("Rental Coverage", dec!(22)));
        }
        if !self.comprehensive {
            items.push(Adjustment::new("No Comprehensive Coverage", dec!(-30)));
        }
        if !self.collision {
            items.push(Adjustment::new("No Collision Coverage", dec!(-25)));
        }

        items
    }

    /// Price these options on top of `base_premium`
    pub fn price(&self, base_premium: Decimal) -> AdjustedQuote {
        let adjustments = self.adjustments();
        let raw: Decimal = base_premium + adjustments.iter().map(|a| a.amount).sum::<Decimal>();
        let total = raw.max(Decimal::from(MIN_INSTANT_PREMIUM));

        AdjustedQuote {
            base_premium,
            adjustments,
            total,
        }
    }
}

/// One flat monthly adjustment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    pub label: String,
    pub amount: Decimal,
}

impl Adjustment {
    fn new(label: &str, amount: Decimal) -> Self {
        Self {
            label: label.to_string(),
            amount,
        }
    }
}

/// Itemised instant quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedQuote {
    pub base_premium: Decimal,
    pub adjustments: Vec<Adjustment>,
    pub total: Decimal,
}

/// Base premium the instant quote shows before any AI quote
pub fn default_base_premium() -> Decimal {
    Decimal::from(BASE_MONTHLY_PREMIUM)
}

/// Reject descriptions with nothing to "analyse"
pub fn validate_description(text: &str) -> Result<(), PricingError> {
    if text.trim().is_empty() {
        return Err(PricingError::EmptyDescription);
    }
    Ok(())
}

/// Base premium produced by the AI quote: uniform in 80..=279
pub fn draw_ai_base_premium<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    Decimal::from(rng.gen_range(80u32..280))
}

fn snap(value: u32, min: u32, max: u32, step: u32) -> u32 {
    let clamped = value.clamp(min, max);
    let steps = (clamped - min + step / 2) / step;
    (min + steps * step).min(max)
}
