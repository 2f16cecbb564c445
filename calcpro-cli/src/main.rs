//! CalcPro CLI
//!
//! Commands:
//! - convert: convert a value between two units of a kind
//! - bmi: body mass index with category
//! - history: show the saved calculations for a kind
//! - rates: show the active exchange rates, optionally refreshing first
//!
//! Successful conversions are saved to the per-kind history, like the web
//! calculators did.

use std::env;
use std::process::ExitCode;
use calcpro::{
    format_value, Calculator, HeightUnit, QuantityKind, RateSource, WeightUnit, CURRENCIES,
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage:
  calcpro convert <kind> <value> <from-unit> <to-unit>
  calcpro bmi <weight> <kg|pounds> <height> <cm|feet|inches>
  calcpro history <kind>
  calcpro rates [--refresh]

kinds: temperature length weight area volume speed data time currency";

/// Display decimals per kind; conversion results themselves are unrounded
fn decimals_for(kind: QuantityKind) -> usize {
    match kind {
        QuantityKind::Currency => 2,
        QuantityKind::Temperature => 2,
        _ => 6,
    }
}

fn parse_number(s: &str) -> Result<f64, String> {
    s.parse::<f64>().map_err(|_| format!("not a number: {}", s))
}

fn cmd_convert(calc: &Calculator, args: &[String]) -> Result<String, String> {
    let [kind, value, from, to] = args else {
        return Err(USAGE.to_string());
    };
    let kind: QuantityKind = kind.parse()?;
    let value = parse_number(value)?;

    let result = calc
        .convert_and_record(kind, from, to, value)
        .map_err(|e| e.to_string())?;

    let decimals = decimals_for(kind);
    Ok(format!(
        "{} {} = {} {}",
        format_value(value, decimals),
        from,
        format_value(result, decimals),
        to
    ))
}

fn cmd_bmi(calc: &Calculator, args: &[String]) -> Result<String, String> {
    let [weight, weight_unit, height, height_unit] = args else {
        return Err(USAGE.to_string());
    };
    let weight = parse_number(weight)?;
    let height = parse_number(height)?;
    let weight_unit: WeightUnit = weight_unit.parse()?;
    let height_unit: HeightUnit = height_unit.parse()?;

    let (value, category) = calc
        .bmi(weight, height, weight_unit, height_unit)
        .map_err(|e| e.to_string())?;

    Ok(format!("BMI {} ({})", format_value(value, 2), category))
}

fn cmd_history(calc: &Calculator, args: &[String]) -> Result<String, String> {
    let [kind] = args else {
        return Err(USAGE.to_string());
    };
    let kind: QuantityKind = kind.parse()?;

    let log = calc.history(kind);
    if log.is_empty() {
        return Ok(format!("no saved {} calculations", kind));
    }

    let decimals = decimals_for(kind);
    let lines: Vec<String> = log
        .iter()
        .map(|e| {
            format!(
                "{}  {} {} = {} {}",
                e.timestamp.format("%Y-%m-%d %H:%M:%S"),
                format_value(e.from_value, decimals),
                e.from_unit,
                format_value(e.to_value, decimals),
                e.to_unit
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

async fn cmd_rates(calc: &mut Calculator, args: &[String]) -> Result<String, String> {
    match args {
        [] => {}
        [flag] if flag == "--refresh" => {
            if let Err(err) = calc.refresh_rates().await {
                // degraded, not fatal: the previous table stays active
                eprintln!("warning: {}", err);
            }
        }
        _ => return Err(USAGE.to_string()),
    }

    let source = match calc.rate_source() {
        RateSource::Fallback => "built-in fallback rates".to_string(),
        RateSource::Live { fetched_at } => {
            format!("live rates fetched {}", fetched_at.format("%Y-%m-%d %H:%M:%S"))
        }
    };

    let mut lines = vec![source];
    for info in CURRENCIES {
        if let Some(rate) = calc.rate("USD", info.code) {
            lines.push(format!(
                "1 USD = {} {} ({})",
                format_value(rate, 4),
                info.code,
                info.name
            ));
        }
    }
    Ok(lines.join("\n"))
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    let mut calc = match Calculator::open_default() {
        Ok(calc) => calc,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let result = match command.as_str() {
        "convert" => cmd_convert(&calc, rest),
        "bmi" => cmd_bmi(&calc, rest),
        "history" => cmd_history(&calc, rest),
        "rates" => cmd_rates(&mut calc, rest).await,
        _ => Err(USAGE.to_string()),
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}
