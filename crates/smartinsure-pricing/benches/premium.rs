//! SmartInsure pricing benchmarks
//!
//! - Form validation + premium quote
//! - Pre-jitter product across category combinations
//! - Instant-quote adjustments

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use rust_decimal_macros::dec;
use smartinsure_common::{CoverageTier, RiskProfile, RiskProfileForm};
use smartinsure_pricing::{CoverageOptions, PremiumCalculator};
use std::time::Duration;

fn sample_form() -> RiskProfileForm {
    RiskProfileForm {
        age: "30".into(),
        location: "TX".into(),
        vehicle_year: "2022".into(),
        vehicle_type: "sedan".into(),
        driving_history: "clean".into(),
        annual_mileage: "10000".into(),
        credit_score: "good".into(),
        coverage_type: "standard".into(),
    }
}

fn bench_premium(c: &mut Criterion) {
    let mut group = c.benchmark_group("premium");
    group.measurement_time(Duration::from_secs(5));

    let calc = PremiumCalculator::with_reference_year(2025);

    group.bench_function("form_to_quote", |b| {
        let form = sample_form();
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| {
            let profile = RiskProfile::from_form(black_box(&form)).unwrap();
            black_box(calc.quote(&profile, &mut rng).unwrap().monthly_premium)
        });
    });

    for coverage in CoverageTier::ALL {
        group.bench_with_input(
            BenchmarkId::new("base_product", coverage.code()),
            &coverage,
            |b, &coverage| {
                let mut profile = RiskProfile::from_form(&sample_form()).unwrap();
                profile.coverage_type = Some(coverage);
                b.iter(|| black_box(calc.base_product(black_box(&profile))));
            },
        );
    }

    group.finish();
}

fn bench_instant_quote(c: &mut Criterion) {
    let mut group = c.benchmark_group("instant_quote");

    group.bench_function("adjusted_total", |b| {
        let options = CoverageOptions {
            deductible: 250,
            roadside: true,
            rental: true,
            ..Default::default()
        };
        b.iter(|| black_box(options.price(black_box(dec!(120)))));
    });

    group.finish();
}

criterion_group!(benches, bench_premium, bench_instant_quote);
criterion_main!(benches);
