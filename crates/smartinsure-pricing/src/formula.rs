//! Premium formula
//!
//! ```text
//! premium = round(120 × age × region × vehicle_age × vehicle_type
//!                     × history × mileage × credit × coverage × jitter)
//! ```
//!
//! Every factor is a fixed bracket multiplier. Categories the portal does not
//! recognise price at 1.0. The rounded result is kept inside the ±10% jitter
//! band around the pre-jitter product.

use chrono::Datelike;
use rand::Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use smartinsure_common::{
    PremiumQuote, PricingError, RateFactor, RatingDimension, Result, RiskProfile,
    RiskProfileForm, BASE_MONTHLY_PREMIUM,
};
use tracing::{debug, instrument};

use crate::jitter::{draw_jitter, JITTER_CEIL, JITTER_FLOOR};

/// Age bracket multiplier
pub fn age_factor(age: u32) -> Decimal {
    if age < 25 {
        dec!(1.5)
    } else if age < 35 {
        dec!(1.2)
    } else if age >= 65 {
        dec!(1.1)
    } else {
        dec!(1.0)
    }
}

/// Vehicle age bracket multiplier. Newer cars cost more to repair, cars over
/// ten years old are cheaper to cover.
pub fn vehicle_age_factor(vehicle_age: i32) -> Decimal {
    if vehicle_age < 3 {
        dec!(1.2)
    } else if vehicle_age > 10 {
        dec!(0.8)
    } else {
        dec!(1.0)
    }
}

/// Annual mileage bracket multiplier
pub fn mileage_factor(annual_mileage: u32) -> Decimal {
    if annual_mileage > 15_000 {
        dec!(1.2)
    } else if annual_mileage < 7_500 {
        dec!(0.9)
    } else {
        dec!(1.0)
    }
}

/// Fixed-multiplier premium calculator
#[derive(Debug, Clone)]
pub struct PremiumCalculator {
    base_premium: Decimal,
    reference_year: i32,
}

impl PremiumCalculator {
    /// Calculator that ages vehicles against the current calendar year
    pub fn new() -> Self {
        Self::with_reference_year(chrono::Utc::now().year())
    }

    /// Calculator that ages vehicles against a fixed year
    pub fn with_reference_year(reference_year: i32) -> Self {
        Self {
            base_premium: Decimal::from(BASE_MONTHLY_PREMIUM),
            reference_year,
        }
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    pub fn base_premium(&self) -> Decimal {
        self.base_premium
    }

    /// Rate factors for a profile, in application order
    pub fn factors(&self, profile: &RiskProfile) -> Vec<RateFactor> {
        let vehicle_age = self.reference_year.saturating_sub(profile.vehicle_year);

        vec![
            RateFactor::new(
                RatingDimension::Age,
                age_factor(profile.age),
                format!("Driver age {}", profile.age),
            ),
            categorical(
                RatingDimension::Location,
                profile.location.map(|l| (l.multiplier(), l.label())),
                "region",
            ),
            RateFactor::new(
                RatingDimension::VehicleAge,
                vehicle_age_factor(vehicle_age),
                format!("Vehicle {} years old", vehicle_age),
            ),
            categorical(
                RatingDimension::VehicleType,
                profile.vehicle_type.map(|v| (v.multiplier(), v.code())),
                "vehicle type",
            ),
            categorical(
                RatingDimension::DrivingHistory,
                profile.driving_history.map(|d| (d.multiplier(), d.code())),
                "driving record",
            ),
            RateFactor::new(
                RatingDimension::AnnualMileage,
                mileage_factor(profile.annual_mileage),
                format!("{} miles per year", profile.annual_mileage),
            ),
            categorical(
                RatingDimension::CreditScore,
                profile.credit_score.map(|c| (c.multiplier(), c.code())),
                "credit",
            ),
            categorical(
                RatingDimension::CoverageType,
                profile.coverage_type.map(|c| (c.multiplier(), c.code())),
                "coverage",
            ),
        ]
    }

    /// Base premium times every factor, before jitter
    pub fn base_product(&self, profile: &RiskProfile) -> Decimal {
        self.factors(profile)
            .iter()
            .fold(self.base_premium, |acc, f| acc * f.multiplier)
    }

    /// Price a profile, drawing jitter from `rng`
    #[instrument(skip(self, rng))]
    pub fn quote<R: Rng + ?Sized>(&self, profile: &RiskProfile, rng: &mut R) -> Result<PremiumQuote> {
        let jitter = draw_jitter(rng);
        self.quote_with_jitter(profile, jitter)
    }

    /// Price a profile with an explicit jitter factor
    pub fn quote_with_jitter(&self, profile: &RiskProfile, jitter: Decimal) -> Result<PremiumQuote> {
        let factors = self.factors(profile);
        let pre_jitter = factors
            .iter()
            .fold(self.base_premium, |acc, f| acc * f.multiplier);

        let monthly_premium = round_within_band(pre_jitter, jitter)
            .ok_or_else(|| PricingError::Overflow(pre_jitter.to_string()))?;

        debug!(
            %pre_jitter,
            %jitter,
            monthly_premium,
            "Priced risk profile"
        );

        Ok(PremiumQuote {
            quote_id: uuid::Uuid::new_v4(),
            base_premium: self.base_premium,
            factors,
            pre_jitter,
            jitter,
            monthly_premium,
            calculated_at: chrono::Utc::now().timestamp_millis(),
        })
    }
}

impl Default for PremiumCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a raw form and price it in one step
pub fn calculate_premium<R: Rng + ?Sized>(form: &RiskProfileForm, rng: &mut R) -> Result<u32> {
    let profile = RiskProfile::from_form(form)?;
    Ok(PremiumCalculator::new().quote(&profile, rng)?.monthly_premium)
}

fn categorical(
    dimension: RatingDimension,
    selected: Option<(Decimal, &'static str)>,
    what: &str,
) -> RateFactor {
    match selected {
        Some((multiplier, label)) => RateFactor::new(dimension, multiplier, format!("{label} {what}")),
        None => RateFactor::new(dimension, Decimal::ONE, format!("Unrecognised {what}")),
    }
}

/// Round `pre_jitter × jitter` to a whole unit, then clamp into
/// `[ceil(0.9 × pre_jitter), floor(1.1 × pre_jitter)]` so rounding can never
/// push the premium outside the jitter band.
fn round_within_band(pre_jitter: Decimal, jitter: Decimal) -> Option<u32> {
    let rounded = (pre_jitter * jitter).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let low = (pre_jitter * JITTER_FLOOR).ceil();
    let high = (pre_jitter * JITTER_CEIL).floor();
    let clamped = if low <= high {
        rounded.clamp(low, high)
    } else {
        rounded
    };
    clamped.to_u32()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use smartinsure_common::{CoverageTier, CreditTier, DrivingHistory, Location, VehicleType};

    const YEAR: i32 = 2025;

    fn profile() -> RiskProfile {
        RiskProfile {
            age: 30,
            location: Some(Location::TX),
            vehicle_year: YEAR - 1,
            vehicle_type: Some(VehicleType::Sedan),
            driving_history: Some(DrivingHistory::Clean),
            annual_mileage: 10_000,
            credit_score: Some(CreditTier::Good),
            coverage_type: Some(CoverageTier::Standard),
        }
    }

    fn neutral_profile() -> RiskProfile {
        RiskProfile {
            age: 40,
            location: None,
            vehicle_year: YEAR - 5,
            vehicle_type: None,
            driving_history: None,
            annual_mileage: 10_000,
            credit_score: None,
            coverage_type: None,
        }
    }

    #[test]
    fn test_reference_example_pre_jitter() {
        let calc = PremiumCalculator::with_reference_year(YEAR);
        // 120 × 1.2 × 1.0 × 1.2 × 1.0 × 0.9 × 1.0 × 0.95 × 1.0
        assert_eq!(calc.base_product(&profile()), dec!(147.744));
    }

    #[test]
    fn test_reference_example_final_range() {
        let calc = PremiumCalculator::with_reference_year(YEAR);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..2_000 {
            let quote = calc.quote(&profile(), &mut rng).unwrap();
            assert!(
                (133..=162).contains(&quote.monthly_premium),
                "premium {} outside [133, 162]",
                quote.monthly_premium
            );
        }
    }

    #[test]
    fn test_band_edges_are_clamped() {
        let calc = PremiumCalculator::with_reference_year(YEAR);
        let high = calc.quote_with_jitter(&profile(), dec!(1.09999)).unwrap();
        assert_eq!(high.monthly_premium, 162);
        let low = calc.quote_with_jitter(&profile(), dec!(0.9)).unwrap();
        assert_eq!(low.monthly_premium, 133);
    }

    #[test]
    fn test_unit_jitter_rounds_product() {
        let calc = PremiumCalculator::with_reference_year(YEAR);
        let quote = calc.quote_with_jitter(&profile(), Decimal::ONE).unwrap();
        assert_eq!(quote.monthly_premium, 148);
        assert_eq!(quote.pre_jitter, dec!(147.744));
        assert_eq!(quote.factors.len(), 8);
    }

    #[test]
    fn test_unrecognised_categories_are_neutral() {
        let calc = PremiumCalculator::with_reference_year(YEAR);
        let p = neutral_profile();
        assert_eq!(calc.base_product(&p), dec!(120));
        assert!(calc.factors(&p).iter().all(|f| f.is_neutral()));
    }

    #[test]
    fn test_each_category_applied_once() {
        let calc = PremiumCalculator::with_reference_year(YEAR);

        for location in Location::ALL {
            let p = RiskProfile {
                location: Some(location),
                ..neutral_profile()
            };
            assert_eq!(calc.base_product(&p), dec!(120) * location.multiplier());
        }
        for vehicle in VehicleType::ALL {
            let p = RiskProfile {
                vehicle_type: Some(vehicle),
                ..neutral_profile()
            };
            assert_eq!(calc.base_product(&p), dec!(120) * vehicle.multiplier());
        }
        for history in DrivingHistory::ALL {
            let p = RiskProfile {
                driving_history: Some(history),
                ..neutral_profile()
            };
            assert_eq!(calc.base_product(&p), dec!(120) * history.multiplier());
        }
        for credit in CreditTier::ALL {
            let p = RiskProfile {
                credit_score: Some(credit),
                ..neutral_profile()
            };
            assert_eq!(calc.base_product(&p), dec!(120) * credit.multiplier());
        }
        for coverage in CoverageTier::ALL {
            let p = RiskProfile {
                coverage_type: Some(coverage),
                ..neutral_profile()
            };
            assert_eq!(calc.base_product(&p), dec!(120) * coverage.multiplier());
        }
    }

    #[test]
    fn test_age_brackets() {
        assert_eq!(age_factor(18), dec!(1.5));
        assert_eq!(age_factor(24), dec!(1.5));
        assert_eq!(age_factor(25), dec!(1.2));
        assert_eq!(age_factor(34), dec!(1.2));
        assert_eq!(age_factor(35), dec!(1.0));
        assert_eq!(age_factor(64), dec!(1.0));
        assert_eq!(age_factor(65), dec!(1.1));
        assert_eq!(age_factor(90), dec!(1.1));
    }

    #[test]
    fn test_vehicle_age_brackets() {
        assert_eq!(vehicle_age_factor(-1), dec!(1.2));
        assert_eq!(vehicle_age_factor(0), dec!(1.2));
        assert_eq!(vehicle_age_factor(2), dec!(1.2));
        assert_eq!(vehicle_age_factor(3), dec!(1.0));
        assert_eq!(vehicle_age_factor(10), dec!(1.0));
        assert_eq!(vehicle_age_factor(11), dec!(0.8));
    }

    #[test]
    fn test_mileage_brackets() {
        assert_eq!(mileage_factor(0), dec!(0.9));
        assert_eq!(mileage_factor(7_499), dec!(0.9));
        assert_eq!(mileage_factor(7_500), dec!(1.0));
        assert_eq!(mileage_factor(15_000), dec!(1.0));
        assert_eq!(mileage_factor(15_001), dec!(1.2));
    }

    #[test]
    fn test_vehicle_age_uses_reference_year() {
        let p = RiskProfile {
            vehicle_year: 2010,
            ..neutral_profile()
        };
        let old = PremiumCalculator::with_reference_year(2025);
        let new = PremiumCalculator::with_reference_year(2011);
        assert_eq!(old.base_product(&p), dec!(96));
        assert_eq!(new.base_product(&p), dec!(144));
    }

    #[test]
    fn test_extreme_vehicle_years_saturate() {
        let calc = PremiumCalculator::with_reference_year(YEAR);
        let ancient = RiskProfile {
            vehicle_year: i32::MIN,
            ..neutral_profile()
        };
        let future = RiskProfile {
            vehicle_year: i32::MAX,
            ..neutral_profile()
        };
        // 120 x 0.8 and 120 x 1.2
        assert_eq!(calc.base_product(&ancient), dec!(96));
        assert_eq!(calc.base_product(&future), dec!(144));
    }

    #[test]
    fn test_calculate_premium_rejects_implausible_vehicle_year() {
        let form = RiskProfileForm {
            age: "30".into(),
            vehicle_year: "-2147483648".into(),
            annual_mileage: "10000".into(),
            ..Default::default()
        };
        let err = calculate_premium(&form, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(err.to_string().contains("vehicleYear"));
    }

    #[test]
    fn test_jitter_band_holds_for_any_profile() {
        let calc = PremiumCalculator::with_reference_year(YEAR);
        let mut rng = StdRng::seed_from_u64(99);
        let risky = RiskProfile {
            age: 19,
            location: Some(Location::NY),
            vehicle_year: YEAR,
            vehicle_type: Some(VehicleType::Convertible),
            driving_history: Some(DrivingHistory::Accidents),
            annual_mileage: 30_000,
            credit_score: Some(CreditTier::Poor),
            coverage_type: Some(CoverageTier::Comprehensive),
        };
        for p in [profile(), neutral_profile(), risky] {
            let pre = calc.base_product(&p);
            for _ in 0..500 {
                let premium = Decimal::from(calc.quote(&p, &mut rng).unwrap().monthly_premium);
                assert!(premium >= pre * dec!(0.9) && premium <= pre * dec!(1.1));
            }
        }
    }

    #[test]
    fn test_same_seed_same_premium() {
        let calc = PremiumCalculator::with_reference_year(YEAR);
        let a = calc
            .quote(&profile(), &mut StdRng::seed_from_u64(5))
            .unwrap();
        let b = calc
            .quote(&profile(), &mut StdRng::seed_from_u64(5))
            .unwrap();
        assert_eq!(a.monthly_premium, b.monthly_premium);
        assert_eq!(a.jitter, b.jitter);
    }

    #[test]
    fn test_calculate_premium_rejects_missing_numbers() {
        let form = RiskProfileForm {
            location: "CA".into(),
            ..Default::default()
        };
        let err = calculate_premium(&form, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(err.to_string().contains("age"));
    }
}
