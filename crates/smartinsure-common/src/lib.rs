//! # SmartInsure Common
//!
//! Shared types and errors for the SmartInsure demo portal.
//!
//! ## Core Types
//!
//! - [`RiskProfileForm`]/[`RiskProfile`]: raw and validated premium inputs
//! - [`RateFactor`]/[`PremiumQuote`]: priced premium with its factor breakdown
//! - [`Policy`]: dashboard policies
//! - [`Claim`]/[`ClaimForm`]: filed claims and the new-claim form
//! - [`CoachingAction`]: risk-reduction actions that earn discounts
//! - [`Toast`]: notifications raised by portal actions

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{PricingError, Result, SessionError, SmartInsureError, ValidationError};
pub use types::{
    claim::{Claim, ClaimForm, ClaimStatus, ClaimType, ValidClaimForm, MAX_CLAIM_AMOUNT},
    coaching::{CoachingAction, Priority},
    policy::{Policy, PolicyKind, PolicyStatus},
    pricing::{PremiumQuote, RateFactor, RatingDimension},
    risk_profile::{
        CoverageTier, CreditTier, DrivingHistory, Location, RiskProfile, RiskProfileForm,
        VehicleType, VEHICLE_YEARS,
    },
    toast::Toast,
    tone::Tone,
};

/// SmartInsure version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base monthly premium every quote starts from
pub const BASE_MONTHLY_PREMIUM: u32 = 120;

/// Default simulated "AI processing" time in milliseconds
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 2000;

/// Floor for an instant-quote total
pub const MIN_INSTANT_PREMIUM: u32 = 50;
