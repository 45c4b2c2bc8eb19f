//! Risk score shown next to a generated quote
//!
//! The score is decorative: a uniform draw in 70..=99, bucketed into a level.

use rand::Rng;
use serde::{Deserialize, Serialize};
use smartinsure_common::Tone;

/// Coarse risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn tone(&self) -> Tone {
        match self {
            RiskLevel::Low => Tone::Success,
            RiskLevel::Medium => Tone::Warning,
            RiskLevel::High => Tone::Danger,
        }
    }
}

/// Risk score out of 100, higher is safer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(u8);

impl RiskScore {
    pub fn new(score: u8) -> Self {
        Self(score.min(100))
    }

    /// Draw a mock score in 70..=99
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(70..100))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn level(&self) -> RiskLevel {
        match self.0 {
            90.. => RiskLevel::Low,
            70..=89 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_levels() {
        assert_eq!(RiskScore::new(95).level(), RiskLevel::Low);
        assert_eq!(RiskScore::new(90).level(), RiskLevel::Low);
        assert_eq!(RiskScore::new(89).level(), RiskLevel::Medium);
        assert_eq!(RiskScore::new(70).level(), RiskLevel::Medium);
        assert_eq!(RiskScore::new(69).level(), RiskLevel::High);
        assert_eq!(RiskScore::new(250).value(), 100);
    }

    #[test]
    fn test_draw_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let score = RiskScore::draw(&mut rng).value();
            assert!((70..=99).contains(&score));
        }
    }
}
