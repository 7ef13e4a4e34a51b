use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use porhalaan_calendar::BatakDate;
use porhalaan_cli::{load_settings, parse_date, render};
use porhalaan_time::Instant;

fn cli_bench(c: &mut Criterion) {
    c.bench_function("parse_date", |b| {
        b.iter(|| parse_date(black_box("1994-04-01")).expect("valid date"))
    });

    c.bench_function("load_default_settings", |b| {
        b.iter(|| load_settings(None, black_box(Some(40))).expect("defaults resolve"))
    });

    let date = NaiveDate::from_ymd_opt(1994, 4, 1).unwrap_or_default();
    let batak = BatakDate {
        month_ordinal: 11,
        day_ordinal: 20,
        new_year_start: Instant::from_jd_utc(2_449_129.088),
    };
    c.bench_function("render", |b| b.iter(|| render(black_box(date), &batak)));
}

criterion_group!(benches, cli_bench);
criterion_main!(benches);
