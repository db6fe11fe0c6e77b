use criterion::{Criterion, black_box, criterion_group, criterion_main};
use flight_distance::Coordinates;
use flight_distance::app::services::record_processor::{
    great_circle_nm, haversine, parse_coordinate_pair,
};
use flight_distance::constants::EARTH_RADIUS_NM;

fn bench_haversine(c: &mut Criterion) {
    c.bench_function("haversine lhr-jfk", |b| {
        b.iter(|| {
            haversine(
                black_box(-0.461941),
                black_box(51.4706),
                black_box(-73.7781),
                black_box(40.6413),
            )
        })
    });

    let route: Vec<(Coordinates, Coordinates)> = (0..1000)
        .map(|i| {
            let step = i as f64 * 0.17;
            (
                Coordinates::new(-180.0 + step, -80.0 + step / 2.0),
                Coordinates::new(179.0 - step, 80.0 - step / 2.0),
            )
        })
        .collect();

    c.bench_function("great_circle_nm 1000 pairs", |b| {
        b.iter(|| {
            route
                .iter()
                .map(|(from, to)| great_circle_nm(from, to, EARTH_RADIUS_NM))
                .sum::<f64>()
        })
    });
}

fn bench_sanitizer(c: &mut Criterion) {
    c.bench_function("parse_coordinate_pair", |b| {
        b.iter(|| parse_coordinate_pair(black_box("-73.7781, 40.6413")))
    });
}

criterion_group!(benches, bench_haversine, bench_sanitizer);
criterion_main!(benches);
