//! Pipeline benchmarks over synthetic world-sized data.

use criterion::{criterion_group, criterion_main, Criterion};

use worldmap_core::geometry::flatten;
use worldmap_core::score::score_countries;
use worldmap_core::{CountryGeometry, MetricRecord};

fn synthetic_world(countries: usize) -> (Vec<CountryGeometry>, Vec<MetricRecord>) {
    let geometries: Vec<CountryGeometry> = (0..countries)
        .map(|i| {
            let base = i as f64;
            let ring: Vec<[f64; 2]> = (0..64)
                .map(|v| {
                    let angle = v as f64 * std::f64::consts::TAU / 64.0;
                    [base % 170.0 + angle.cos(), (base % 80.0) + angle.sin()]
                })
                .collect();
            CountryGeometry {
                name: format!("Country {i}"),
                id: None,
                rings: vec![ring.clone(), ring],
            }
        })
        .collect();

    let records: Vec<MetricRecord> = (0..countries)
        .map(|i| MetricRecord {
            country: format!("Country {i}"),
            year: 2015,
            raw_value: (i * 37 % 191) as f64 + 1.0,
        })
        .collect();

    (geometries, records)
}

fn bench_flatten(c: &mut Criterion) {
    let (geometries, _) = synthetic_world(200);
    c.bench_function("flatten 200 countries x 2 rings", |b| {
        b.iter(|| flatten(&geometries).unwrap())
    });
}

fn bench_score(c: &mut Criterion) {
    let (geometries, records) = synthetic_world(200);
    c.bench_function("score 200 countries", |b| {
        b.iter(|| score_countries(&geometries, &records, 2015, 10).unwrap())
    });
}

criterion_group!(benches, bench_flatten, bench_score);
criterion_main!(benches);
