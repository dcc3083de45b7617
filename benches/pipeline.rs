use chrono::NaiveDate;
use climacast::{run_training, RawObservation, TrainerConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn synthetic_year(station: &str, latitude: f64, longitude: f64) -> Vec<RawObservation> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date");
    (0..365)
        .map(|offset| {
            let date = start + chrono::Duration::days(offset);
            let phase = offset as f64 / 365.0 * std::f64::consts::TAU;
            RawObservation {
                station_name: station.to_string(),
                latitude,
                longitude,
                date: date.format("%Y-%m-%d").to_string(),
                precipitation: (1.0 + phase.sin()).max(0.0) * 2.0,
                temp_max: 12.0 - 10.0 * phase.cos(),
                temp_min: 4.0 - 9.0 * phase.cos(),
            }
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut observations = synthetic_year("Seattle", 47.6, -122.3);
    observations.extend(synthetic_year("Portland", 45.5, -122.7));
    let config = TrainerConfig::default();

    c.bench_function("run_training_two_stations_one_year", |b| {
        b.iter(|| run_training(black_box(&observations), &config))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
