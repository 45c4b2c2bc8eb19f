//! Risk profile - the driver/vehicle attributes a premium is priced from
//!
//! Categorical attributes map to a fixed rate multiplier. A category the
//! portal does not recognise prices at the neutral multiplier (1.0) rather
//! than failing, so every categorical field on a [`RiskProfile`] is an
//! `Option`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::error::ValidationError;

/// Model years the portal will price
pub const VEHICLE_YEARS: RangeInclusive<i32> = 1900..=2100;

/// US state the vehicle is garaged in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    CA,
    NY,
    TX,
    FL,
    IL,
}

impl Location {
    pub const ALL: [Location; 5] = [
        Location::CA,
        Location::NY,
        Location::TX,
        Location::FL,
        Location::IL,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Location::CA => "CA",
            Location::NY => "NY",
            Location::TX => "TX",
            Location::FL => "FL",
            Location::IL => "IL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Location::CA => "California",
            Location::NY => "New York",
            Location::TX => "Texas",
            Location::FL => "Florida",
            Location::IL => "Illinois",
        }
    }

    /// Regional rate multiplier
    pub fn multiplier(&self) -> Decimal {
        match self {
            Location::CA => dec!(1.3),
            Location::NY => dec!(1.4),
            Location::TX => dec!(1.0),
            Location::FL => dec!(1.2),
            Location::IL => dec!(1.1),
        }
    }
}

/// Body style of the insured vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Sedan,
    Suv,
    Truck,
    Coupe,
    Convertible,
}

impl VehicleType {
    pub const ALL: [VehicleType; 5] = [
        VehicleType::Sedan,
        VehicleType::Suv,
        VehicleType::Truck,
        VehicleType::Coupe,
        VehicleType::Convertible,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }

    pub fn code(&self) -> &'static str {
        match self {
            VehicleType::Sedan => "sedan",
            VehicleType::Suv => "suv",
            VehicleType::Truck => "truck",
            VehicleType::Coupe => "coupe",
            VehicleType::Convertible => "convertible",
        }
    }

    pub fn multiplier(&self) -> Decimal {
        match self {
            VehicleType::Sedan => dec!(1.0),
            VehicleType::Suv => dec!(1.1),
            VehicleType::Truck => dec!(1.2),
            VehicleType::Coupe => dec!(1.3),
            VehicleType::Convertible => dec!(1.5),
        }
    }
}

/// Driving record over the look-back period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrivingHistory {
    /// Clean record
    Clean,
    /// Minor violations
    Minor,
    /// Major violations
    Major,
    /// Recent accidents
    Accidents,
}

impl DrivingHistory {
    pub const ALL: [DrivingHistory; 4] = [
        DrivingHistory::Clean,
        DrivingHistory::Minor,
        DrivingHistory::Major,
        DrivingHistory::Accidents,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }

    pub fn code(&self) -> &'static str {
        match self {
            DrivingHistory::Clean => "clean",
            DrivingHistory::Minor => "minor",
            DrivingHistory::Major => "major",
            DrivingHistory::Accidents => "accidents",
        }
    }

    pub fn multiplier(&self) -> Decimal {
        match self {
            DrivingHistory::Clean => dec!(0.9),
            DrivingHistory::Minor => dec!(1.1),
            DrivingHistory::Major => dec!(1.4),
            DrivingHistory::Accidents => dec!(1.6),
        }
    }
}

/// Self-reported credit score range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditTier {
    /// 750+
    Excellent,
    /// 700-749
    Good,
    /// 650-699
    Fair,
    /// Below 650
    Poor,
}

impl CreditTier {
    pub const ALL: [CreditTier; 4] = [
        CreditTier::Excellent,
        CreditTier::Good,
        CreditTier::Fair,
        CreditTier::Poor,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn code(&self) -> &'static str {
        match self {
            CreditTier::Excellent => "excellent",
            CreditTier::Good => "good",
            CreditTier::Fair => "fair",
            CreditTier::Poor => "poor",
        }
    }

    pub fn multiplier(&self) -> Decimal {
        match self {
            CreditTier::Excellent => dec!(0.85),
            CreditTier::Good => dec!(0.95),
            CreditTier::Fair => dec!(1.1),
            CreditTier::Poor => dec!(1.3),
        }
    }
}

/// Breadth of coverage requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageTier {
    Basic,
    Standard,
    Premium,
    Comprehensive,
}

impl CoverageTier {
    pub const ALL: [CoverageTier; 4] = [
        CoverageTier::Basic,
        CoverageTier::Standard,
        CoverageTier::Premium,
        CoverageTier::Comprehensive,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn code(&self) -> &'static str {
        match self {
            CoverageTier::Basic => "basic",
            CoverageTier::Standard => "standard",
            CoverageTier::Premium => "premium",
            CoverageTier::Comprehensive => "comprehensive",
        }
    }

    pub fn multiplier(&self) -> Decimal {
        match self {
            CoverageTier::Basic => dec!(0.8),
            CoverageTier::Standard => dec!(1.0),
            CoverageTier::Premium => dec!(1.3),
            CoverageTier::Comprehensive => dec!(1.6),
        }
    }
}

/// Raw wizard form, exactly as typed or selected by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskProfileForm {
    pub age: String,
    pub location: String,
    pub vehicle_year: String,
    pub vehicle_type: String,
    pub driving_history: String,
    pub annual_mileage: String,
    pub credit_score: String,
    pub coverage_type: String,
}

impl RiskProfileForm {
    /// Form field names in wizard order
    pub const FIELDS: [&'static str; 8] = [
        "age",
        "location",
        "vehicleYear",
        "vehicleType",
        "drivingHistory",
        "annualMileage",
        "creditScore",
        "coverageType",
    ];

    /// Set a field by its camelCase form name
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> Result<(), ValidationError> {
        let slot = match field {
            "age" => &mut self.age,
            "location" => &mut self.location,
            "vehicleYear" => &mut self.vehicle_year,
            "vehicleType" => &mut self.vehicle_type,
            "drivingHistory" => &mut self.driving_history,
            "annualMileage" => &mut self.annual_mileage,
            "creditScore" => &mut self.credit_score,
            "coverageType" => &mut self.coverage_type,
            other => return Err(ValidationError::UnknownField(other.to_string())),
        };
        *slot = value.into();
        Ok(())
    }
}

/// Validated input to the premium formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    pub age: u32,
    pub location: Option<Location>,
    pub vehicle_year: i32,
    pub vehicle_type: Option<VehicleType>,
    pub driving_history: Option<DrivingHistory>,
    pub annual_mileage: u32,
    pub credit_score: Option<CreditTier>,
    pub coverage_type: Option<CoverageTier>,
}

impl RiskProfile {
    /// Validate a raw form.
    ///
    /// Numeric fields must be present and parse as whole numbers; categorical
    /// fields that are empty or unrecognised become `None`. The vehicle year
    /// must fall within [`VEHICLE_YEARS`].
    pub fn from_form(form: &RiskProfileForm) -> Result<Self, ValidationError> {
        let age = parse_number("age", &form.age)?;
        let vehicle_year: i32 = parse_number("vehicleYear", &form.vehicle_year)?;
        if !VEHICLE_YEARS.contains(&vehicle_year) {
            return Err(ValidationError::OutOfRange {
                field: "vehicleYear",
                value: vehicle_year.to_string(),
                min: VEHICLE_YEARS.start().to_string(),
                max: VEHICLE_YEARS.end().to_string(),
            });
        }

        Ok(Self {
            age,
            location: Location::from_code(form.location.trim()),
            vehicle_year,
            vehicle_type: VehicleType::from_code(form.vehicle_type.trim()),
            driving_history: DrivingHistory::from_code(form.driving_history.trim()),
            annual_mileage: parse_number("annualMileage", &form.annual_mileage)?,
            credit_score: CreditTier::from_code(form.credit_score.trim()),
            coverage_type: CoverageTier::from_code(form.coverage_type.trim()),
        })
    }
}

fn parse_number<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    raw.parse().map_err(|_| ValidationError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RiskProfileForm {
        RiskProfileForm {
            age: "30".into(),
            location: "TX".into(),
            vehicle_year: "2020".into(),
            vehicle_type: "sedan".into(),
            driving_history: "clean".into(),
            annual_mileage: "10000".into(),
            credit_score: "good".into(),
            coverage_type: "standard".into(),
        }
    }

    #[test]
    fn test_from_form_parses_all_fields() {
        let profile = RiskProfile::from_form(&form()).unwrap();
        assert_eq!(profile.age, 30);
        assert_eq!(profile.location, Some(Location::TX));
        assert_eq!(profile.vehicle_year, 2020);
        assert_eq!(profile.vehicle_type, Some(VehicleType::Sedan));
        assert_eq!(profile.driving_history, Some(DrivingHistory::Clean));
        assert_eq!(profile.annual_mileage, 10000);
        assert_eq!(profile.credit_score, Some(CreditTier::Good));
        assert_eq!(profile.coverage_type, Some(CoverageTier::Standard));
    }

    #[test]
    fn test_unknown_categories_become_none() {
        let mut f = form();
        f.location = "WA".into();
        f.vehicle_type = "".into();
        f.coverage_type = "platinum".into();

        let profile = RiskProfile::from_form(&f).unwrap();
        assert_eq!(profile.location, None);
        assert_eq!(profile.vehicle_type, None);
        assert_eq!(profile.coverage_type, None);
    }

    #[test]
    fn test_numeric_fields_are_required() {
        let mut f = form();
        f.age = "  ".into();
        assert_eq!(
            RiskProfile::from_form(&f),
            Err(ValidationError::MissingField { field: "age" })
        );

        let mut f = form();
        f.annual_mileage = "lots".into();
        assert_eq!(
            RiskProfile::from_form(&f),
            Err(ValidationError::InvalidNumber {
                field: "annualMileage",
                value: "lots".into()
            })
        );
    }

    #[test]
    fn test_negative_age_rejected() {
        let mut f = form();
        f.age = "-4".into();
        assert!(RiskProfile::from_form(&f).is_err());
    }

    #[test]
    fn test_vehicle_year_range() {
        for year in ["-2147483648", "1899", "3000"] {
            let mut f = form();
            f.vehicle_year = year.into();
            assert_eq!(
                RiskProfile::from_form(&f),
                Err(ValidationError::OutOfRange {
                    field: "vehicleYear",
                    value: year.into(),
                    min: "1900".into(),
                    max: "2100".into(),
                })
            );
        }

        let mut f = form();
        f.vehicle_year = "1900".into();
        assert_eq!(RiskProfile::from_form(&f).unwrap().vehicle_year, 1900);
    }

    #[test]
    fn test_set_field_by_form_name() {
        let mut f = RiskProfileForm::default();
        f.set_field("vehicleYear", "2015").unwrap();
        f.set_field("creditScore", "fair").unwrap();
        assert_eq!(f.vehicle_year, "2015");
        assert_eq!(f.credit_score, "fair");
        assert_eq!(
            f.set_field("shoeSize", "9"),
            Err(ValidationError::UnknownField("shoeSize".into()))
        );
    }

    #[test]
    fn test_form_deserializes_camel_case() {
        let f: RiskProfileForm =
            serde_json::from_str(r#"{"age":"41","vehicleYear":"2012","creditScore":"poor"}"#)
                .unwrap();
        assert_eq!(f.age, "41");
        assert_eq!(f.vehicle_year, "2012");
        assert_eq!(f.credit_score, "poor");
        assert!(f.location.is_empty());
    }

    #[test]
    fn test_codes_round_trip() {
        for l in Location::ALL {
            assert_eq!(Location::from_code(l.code()), Some(l));
        }
        for v in VehicleType::ALL {
            assert_eq!(VehicleType::from_code(v.code()), Some(v));
        }
        assert_eq!(Location::from_code("ca"), None);
    }
}
