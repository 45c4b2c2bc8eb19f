//! # SmartInsure Pricing
//!
//! Premium arithmetic for the SmartInsure portal.
//!
//! ## Premium Formula
//!
//! ```text
//! P = round(B × Πfᵢ × j)
//! ```
//!
//! Where:
//! - B: base monthly premium (120)
//! - fᵢ: one fixed bracket multiplier per rating dimension
//! - j: jitter drawn uniformly from [0.9, 1.1)
//!
//! The instant quote uses flat monthly adjustments on top of a base premium
//! instead, see [`customization`].

pub mod customization;
pub mod formula;
pub mod jitter;
pub mod risk;

pub use customization::{AdjustedQuote, Adjustment, CoverageOptions};
pub use formula::{calculate_premium, PremiumCalculator};
pub use jitter::{draw_jitter, session_rng};
pub use risk::{RiskLevel, RiskScore};
