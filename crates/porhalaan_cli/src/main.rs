mod cli;
mod logging;

use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use porhalaan_calendar::Converter;
use porhalaan_cli::{DATE_FORMAT_ERROR, PROMPT, load_settings, parse_date, render, render_explanation};
use porhalaan_ephem::AnalyticEphemeris;
use tracing::info;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let text = match cli.date.clone() {
        Some(text) => text,
        None => prompt().unwrap_or_else(|e| {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }),
    };
    // Malformed input is reported, then the process ends normally.
    let Ok(date) = parse_date(&text) else {
        println!("{DATE_FORMAT_ERROR}");
        return;
    };

    if let Err(e) = run(&cli, date) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn prompt() -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{PROMPT}")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read date from stdin")?;
    Ok(line)
}

fn run(cli: &Cli, date: NaiveDate) -> Result<()> {
    let settings = load_settings(cli.config.as_deref(), cli.max_lookback)?;
    let converter = Converter::new(AnalyticEphemeris::new())
        .with_observer(settings.observer)
        .with_rule(settings.rule)
        .with_search(settings.search);

    info!(%date, "converting");
    let ex = converter
        .explain(date)
        .with_context(|| format!("cannot convert {date}"))?;

    print!("{}", render(date, &ex.date));
    if cli.explain {
        print!("{}", render_explanation(&ex, converter.observer(), converter.rule()));
    }
    Ok(())
}
