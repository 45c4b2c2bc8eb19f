//! Seedable jitter source
//!
//! Quotes are perturbed by a uniform factor in `[0.9, 1.1)`. The random source
//! is always passed in, so a seeded [`StdRng`] reproduces a quote exactly.

use rand::{rngs::StdRng, Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Lowest jitter factor that can be drawn
pub const JITTER_FLOOR: Decimal = dec!(0.9);

/// Exclusive upper bound of the jitter factor
pub const JITTER_CEIL: Decimal = dec!(1.1);

/// Draw resolution: factors are multiples of 0.00001
const JITTER_STEPS: u32 = 20_000;

/// Draw a jitter factor in `[0.9, 1.1)`
pub fn draw_jitter<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    let step = rng.gen_range(0..JITTER_STEPS);
    JITTER_FLOOR + Decimal::new(step as i64, 5)
}

/// Random source for a session: seeded when a seed is configured, otherwise
/// from OS entropy
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
