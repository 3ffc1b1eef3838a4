use chart_core::{build_option, ChartOptions, Palette};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use payoff_core::{OptionContract, OptionType, Position};

fn gen_contracts(n: usize) -> Vec<OptionContract> {
    let expiry = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            let option_type = if i % 2 == 0 { OptionType::Call } else { OptionType::Put };
            let position = if i % 3 == 0 { Position::Short } else { Position::Long };
            OptionContract::new(option_type, position, 50.0 + i as f64, 1.0, 1.5, expiry).unwrap()
        })
        .collect()
}

fn bench_build_option(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_option");
    for &legs in &[1usize, 4, 16] {
        let contracts = gen_contracts(legs);
        for &step in &[1.0f64, 0.1, 0.01] {
            let opts = ChartOptions::payoff(0.0, 200.0, step, Palette::default());
            group.bench_with_input(BenchmarkId::from_parameter(format!("legs{legs}_step{step}")), &opts, |b, o| {
                b.iter(|| {
                    let _ = black_box(build_option(&contracts, o));
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_build_option);
criterion_main!(benches);
