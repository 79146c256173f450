//! nzpost-quote - Quote a shipment against the New Zealand Post rate API.
//!
//! Credentials come from `NZPOST_*` environment variables, a `.env` file or
//! `--config`. The quote is printed as JSON; the exit code is 1 when the
//! quote fails.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use nzpost_rates::domain::value_objects::UnitSystem;
use nzpost_rates::infrastructure::init_tracing;
use nzpost_rates::{
    CarrierConfig, CarrierSettings, CountryCode, CurrencyCode, Location, Package, QuoteOptions,
    RateQuoteAssembler,
};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

/// Command line arguments for nzpost-quote
#[derive(Debug, Parser)]
#[command(author, version, about = "Quote a shipment with New Zealand Post", long_about = None)]
struct Args {
    /// TOML file with carrier settings, overlaid by NZPOST_* variables
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Origin country code; the Wellington mail centre is used when no
    /// origin field is given
    #[arg(long = "from-country", value_name = "CODE")]
    from_country: Option<String>,

    /// Origin post code
    #[arg(long = "from-postcode", value_name = "CODE")]
    from_postcode: Option<String>,

    /// Origin suburb
    #[arg(long = "from-suburb", value_name = "SUBURB")]
    from_suburb: Option<String>,

    /// Destination country code
    #[arg(long = "to-country", value_name = "CODE", default_value = "NZ")]
    to_country: String,

    /// Destination post code
    #[arg(long = "to-postcode", value_name = "CODE")]
    to_postcode: Option<String>,

    /// Destination suburb
    #[arg(long = "to-suburb", value_name = "SUBURB")]
    to_suburb: Option<String>,

    /// Package as WEIGHT[:DxDxD][:cylinder], e.g. 250:14x19x2 (repeatable)
    #[arg(long = "package", value_name = "PACKAGE", required = true)]
    packages: Vec<String>,

    /// Read weights as ounces and dimensions as inches
    #[arg(long)]
    imperial: bool,

    /// Declared value of each package in cents
    #[arg(long = "value-cents", value_name = "CENTS")]
    value_cents: Option<i64>,

    /// Currency of the declared value
    #[arg(long, value_name = "CODE")]
    currency: Option<String>,

    /// Quote against this account instead of the configured one
    #[arg(long = "account-number", value_name = "NUMBER")]
    account_number: Option<String>,

    /// Flag the quote as a test
    #[arg(long)]
    test: bool,

    /// Emit logs as JSON lines
    #[arg(long = "json-logs")]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = CarrierConfig::load(args.config.as_deref()).context("loading configuration")?;
    init_tracing(&config.log_level, args.json_logs)?;
    config.validate()?;

    let origin = origin(&args)?;
    let destination = location(
        Some(&args.to_country),
        args.to_postcode.as_deref(),
        args.to_suburb.as_deref(),
    )?;
    let packages = args
        .packages
        .iter()
        .map(|raw| parse_package(raw, &args))
        .collect::<Result<Vec<_>>>()?;

    let mut options = QuoteOptions::new();
    if let Some(account) = &args.account_number {
        options = options.with_account_number(account);
    }
    if args.test {
        options = options.with_test(true);
    }

    let assembler = RateQuoteAssembler::new(config.settings()?, Arc::new(config.transport()?));
    let result = assembler
        .quote(&origin, &destination, &packages, &options)
        .await;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn origin(args: &Args) -> Result<Location> {
    if args.from_country.is_none() && args.from_postcode.is_none() && args.from_suburb.is_none() {
        return Ok(CarrierSettings::default_location());
    }
    location(
        args.from_country.as_deref(),
        args.from_postcode.as_deref(),
        args.from_suburb.as_deref(),
    )
}

fn location(country: Option<&str>, postcode: Option<&str>, suburb: Option<&str>) -> Result<Location> {
    let mut builder = Location::builder();
    if let Some(code) = country {
        builder = builder.country(CountryCode::new(code)?);
    }
    if let Some(postcode) = postcode {
        builder = builder.postal_code(postcode);
    }
    if let Some(suburb) = suburb {
        builder = builder.address2(suburb);
    }
    Ok(builder.build())
}

fn parse_package(raw: &str, args: &Args) -> Result<Package> {
    let mut parts = raw.split(':');
    let weight = parts
        .next()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .ok_or_else(|| anyhow!("package '{}' has no weight", raw))?;
    let weight = Decimal::from_str(weight).with_context(|| format!("invalid weight in '{}'", raw))?;

    let units = if args.imperial {
        UnitSystem::Imperial
    } else {
        UnitSystem::Metric
    };
    let mut builder = Package::builder(weight).units(units);

    for part in parts {
        match part.trim() {
            "cylinder" => builder = builder.cylinder(),
            dims => {
                let dimensions = dims
                    .split('x')
                    .map(|d| Decimal::from_str(d.trim()))
                    .collect::<Result<Vec<_>, _>>()
                    .with_context(|| format!("invalid dimensions in '{}'", raw))?;
                builder = builder.dimensions(dimensions);
            }
        }
    }

    if let Some(cents) = args.value_cents {
        builder = builder.value(cents);
    }
    if let Some(code) = &args.currency {
        builder = builder.currency(CurrencyCode::new(code)?);
    }

    Ok(builder.build()?)
}
