use criterion::{criterion_group, criterion_main, Criterion, black_box};

use tba_csv::{
    config::options::ScheduleOptions,
    specs::{Match, ScoredMatch},
    transform,
};

const FIXTURE: &str = include_str!("../tests/fixtures/matches_2022cala.json");

/// Blow the fixture up to a district-championship sized list (~100 quals + playoffs).
fn load_matches<T: serde::de::DeserializeOwned>() -> Vec<T> {
    let one: Vec<serde_json::Value> = serde_json::from_str(FIXTURE).expect("parse fixture");
    let mut all = Vec::new();
    for round in 0..40u64 {
        for m in &one {
            let mut m = m.clone();
            if let Some(n) = m["match_number"].as_u64() {
                m["match_number"] = (n + round * 3).into();
            }
            all.push(serde_json::from_value(m).expect("decode match"));
        }
    }
    all
}

fn bench_transform(c: &mut Criterion) {
    let matches: Vec<Match> = load_matches();
    let scored: Vec<ScoredMatch> = load_matches();

    c.bench_function("schedule_default", |b| {
        b.iter(|| {
            let rows = transform::schedule_rows(black_box(matches.clone()), &ScheduleOptions::default());
            black_box(rows.len())
        })
    });

    c.bench_function("schedule_blue_first", |b| {
        let opts = ScheduleOptions { blue_first: true, ..Default::default() };
        b.iter(|| {
            let rows = transform::schedule_rows(black_box(matches.clone()), &opts);
            black_box(rows.len())
        })
    });

    c.bench_function("breakdown", |b| {
        b.iter(|| {
            let rows = transform::breakdown_rows(black_box(&scored));
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
