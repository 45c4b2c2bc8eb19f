//! Pricing Types - Premium = Base × Π(rate factors) × jitter
//!
//! A monthly premium starts from a fixed base and is multiplied by one
//! bracket multiplier per rating dimension:
//! - age, region, vehicle age, vehicle type
//! - driving history, annual mileage, credit tier, coverage tier
//!
//! A bounded jitter (±10%) is applied last and the result is rounded to a
//! whole currency unit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rating dimension a multiplier was selected for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingDimension {
    Age,
    Location,
    VehicleAge,
    VehicleType,
    DrivingHistory,
    AnnualMileage,
    CreditScore,
    CoverageType,
}

/// Individual rate factor with explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateFactor {
    /// Which dimension this factor prices
    pub dimension: RatingDimension,
    /// Multiplier applied to the running premium (1.0 is neutral)
    pub multiplier: Decimal,
    /// Human-readable explanation
    pub description: String,
}

impl RateFactor {
    pub fn new(dimension: RatingDimension, multiplier: Decimal, description: impl Into<String>) -> Self {
        Self {
            dimension,
            multiplier,
            description: description.into(),
        }
    }

    /// Whether this factor leaves the premium unchanged
    pub fn is_neutral(&self) -> bool {
        self.multiplier == Decimal::ONE
    }
}

/// Result of pricing one risk profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumQuote {
    /// Quote identifier
    pub quote_id: uuid::Uuid,

    /// Base monthly premium before any factor
    pub base_premium: Decimal,

    /// Factors in application order, one per rating dimension
    pub factors: Vec<RateFactor>,

    /// Base premium times every factor, before jitter
    pub pre_jitter: Decimal,

    /// Jitter multiplier drawn for this quote
    pub jitter: Decimal,

    /// Final rounded monthly premium
    pub monthly_premium: u32,

    /// Calculation timestamp
    pub calculated_at: i64,
}

impl PremiumQuote {
    /// Product of every rate factor
    pub fn combined_multiplier(&self) -> Decimal {
        self.factors.iter().map(|f| f.multiplier).product()
    }

    /// Factor selected for a dimension
    pub fn factor(&self, dimension: RatingDimension) -> Option<&RateFactor> {
        self.factors.iter().find(|f| f.dimension == dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quote(factors: Vec<RateFactor>) -> PremiumQuote {
        PremiumQuote {
            quote_id: uuid::Uuid::new_v4(),
            base_premium: dec!(120),
            factors,
            pre_jitter: dec!(0),
            jitter: dec!(1),
            monthly_premium: 0,
            calculated_at: 0,
        }
    }

    #[test]
    fn test_combined_multiplier() {
        let q = quote(vec![
            RateFactor::new(RatingDimension::Age, dec!(1.2), "age 30"),
            RateFactor::new(RatingDimension::CreditScore, dec!(0.95), "good credit"),
        ]);
        assert_eq!(q.combined_multiplier(), dec!(1.14));
        assert_eq!(
            q.factor(RatingDimension::CreditScore).map(|f| f.multiplier),
            Some(dec!(0.95))
        );
        assert!(q.factor(RatingDimension::Location).is_none());
    }

    #[test]
    fn test_empty_factor_list_is_neutral() {
        assert_eq!(quote(vec![]).combined_multiplier(), Decimal::ONE);
        assert!(RateFactor::new(RatingDimension::Location, dec!(1.0), "TX").is_neutral());
    }
}
