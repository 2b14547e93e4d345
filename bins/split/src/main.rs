//! Coinage split tool.
//!
//! Splits an amount evenly or by weights and prints each part as one JSON
//! document per line, encoded with the configured coding options.
//!
//! Usage: coinage-split <CODE> <AMOUNT> <PARTS|W1,W2,...>
//!
//! A third argument containing a comma is a weight list (`2,5` or `3,`);
//! anything else is a part count.

use anyhow::{Context, bail};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coinage_core::coding::to_json_string;
use coinage_core::{
    Aud, Bhd, Cad, Chf, Clf, CodingOptions, Currency, CurrencyDescriptor, Eur, Gbp, Idr, Jpy, Krw,
    Kwd, Money, Sgd, Usd,
};
use coinage_shared::AppConfig;

const USAGE: &str = "Usage: coinage-split <CODE> <AMOUNT> <PARTS|W1,W2,...>";

/// How the amount is split.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Split {
    Even(i64),
    Weighted(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Request {
    currency: CurrencyDescriptor,
    amount: String,
    split: Split,
}

fn parse_args(args: &[String]) -> anyhow::Result<Request> {
    let [code, amount, split] = args else {
        bail!("expected 3 arguments, got {}\n{USAGE}", args.len());
    };

    let currency = CurrencyDescriptor::lookup(code)
        .with_context(|| format!("Unknown currency: {code}"))?;

    let split = if split.contains(',') {
        Split::Weighted(
            split
                .split(',')
                .map(str::trim)
                .filter(|weight| !weight.is_empty())
                .map(str::to_string)
                .collect(),
        )
    } else {
        Split::Even(
            split
                .trim()
                .parse()
                .with_context(|| format!("Invalid part count: {split}"))?,
        )
    };

    Ok(Request {
        currency,
        amount: amount.clone(),
        split,
    })
}

/// Runs the split in currency `C` and encodes every part.
fn split<C: Currency>(request: &Request, options: CodingOptions) -> anyhow::Result<Vec<String>> {
    let amount: Money<C> = request.amount.parse()?;

    let parts = match &request.split {
        Split::Even(count) => amount.distributed_evenly(*count)?,
        Split::Weighted(weights) => {
            let weights = weights
                .iter()
                .map(|weight| weight.parse::<Money<C>>())
                .collect::<Result<Vec<_>, _>>()?;
            amount.distributed_proportionally(&weights)?
        }
    };

    debug!(currency = C::CODE, parts = parts.len(), "Split computed");

    parts
        .iter()
        .map(|part| to_json_string(part, options).map_err(Into::into))
        .collect()
}

/// Picks the marker type matching a runtime currency code.
macro_rules! dispatch {
    ($request:expr, $options:expr; $($marker:ident),* $(,)?) => {
        match $request.currency.code {
            $(code if code == $marker::CODE => split::<$marker>($request, $options),)*
            other => bail!("Unsupported currency: {other}"),
        }
    };
}

fn run(request: &Request, options: CodingOptions) -> anyhow::Result<Vec<String>> {
    dispatch!(
        request, options;
        Usd, Eur, Gbp, Chf, Cad, Aud, Sgd, Idr, Jpy, Krw, Bhd, Kwd, Clf,
    )
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing on stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let request = parse_args(&args)?;
    info!(currency = %request.currency, amount = %request.amount, "Splitting");

    for line in run(&request, config.coding)? {
        println!("{line}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_even_split() {
        let request = parse_args(&args(&["usd", "10.00", "6"])).unwrap();
        assert_eq!(request.currency, Usd::descriptor());
        assert_eq!(request.amount, "10.00");
        assert_eq!(request.split, Split::Even(6));
    }

    #[test]
    fn test_parse_weighted_split() {
        let request = parse_args(&args(&["JPY", "100", "2, 5,"])).unwrap();
        assert_eq!(request.currency, Jpy::descriptor());
        assert_eq!(
            request.split,
            Split::Weighted(vec!["2".to_string(), "5".to_string()])
        );
    }

    #[rstest]
    #[case(&["USD", "10"])]
    #[case(&["XXX", "10", "2"])]
    #[case(&["USD", "10", "two"])]
    fn test_parse_rejects_bad_arguments(#[case] values: &[&str]) {
        assert!(parse_args(&args(values)).is_err());
    }

    #[test]
    fn test_run_even_split() {
        let request = parse_args(&args(&["USD", "10.00", "6"])).unwrap();
        let lines = run(&request, CodingOptions::default()).unwrap();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], r#"{"currency":"USD","amount":1.67}"#);
        assert_eq!(lines[5], r#"{"currency":"USD","amount":1.66}"#);
    }

    #[test]
    fn test_run_weighted_split_with_options() {
        let request = parse_args(&args(&["USD", "10.00", "2,5"])).unwrap();
        let options = CodingOptions::default()
            .omit_currency(true)
            .encode_amount_as_string(true);
        let lines = run(&request, options).unwrap();
        assert_eq!(lines, vec![r#""2.86""#, r#""7.14""#]);
    }

    #[test]
    fn test_run_dispatches_every_catalog_currency() {
        for descriptor in CurrencyDescriptor::all() {
            let request = Request {
                currency: *descriptor,
                amount: "1".to_string(),
                split: Split::Even(2),
            };
            assert_eq!(run(&request, CodingOptions::default()).unwrap().len(), 2);
        }
    }

    #[test]
    fn test_run_reports_bad_amount() {
        let request = parse_args(&args(&["USD", "ten", "2"])).unwrap();
        let err = run(&request, CodingOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid decimal amount"));
    }
}
