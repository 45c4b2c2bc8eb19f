//! Core data types for SmartInsure

pub mod claim;
pub mod coaching;
pub mod policy;
pub mod pricing;
pub mod risk_profile;
pub mod toast;
pub mod tone;
