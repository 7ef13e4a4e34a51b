use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use porhalaan_calendar::{Converter, VisibilityRule, evaluate_new_moon, lake_toba};
use porhalaan_ephem::AnalyticEphemeris;
use porhalaan_time::Instant;

fn conversion_bench(c: &mut Criterion) {
    let converter = Converter::new(AnalyticEphemeris::new());
    let date = NaiveDate::from_ymd_opt(1994, 4, 1).unwrap_or_default();

    let mut group = c.benchmark_group("calendar_convert");
    group.sample_size(20);
    group.bench_function("convert_1994_04_01", |b| {
        b.iter(|| {
            converter
                .convert(black_box(date))
                .expect("conversion should succeed")
        })
    });
    group.finish();
}

fn visibility_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new();
    let observer = lake_toba();
    let rule = VisibilityRule::default();
    // New moon of 1993-05-21
    let candidate = Instant::from_jd_utc(2_449_129.088);

    c.bench_function("evaluate_new_moon", |b| {
        b.iter(|| {
            evaluate_new_moon(&eph, &observer, &rule, black_box(candidate))
                .expect("evaluation should succeed")
        })
    });
}

criterion_group!(benches, conversion_bench, visibility_bench);
criterion_main!(benches);
