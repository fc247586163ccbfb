//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Computes total sales from a price catalogue and a sales record.
///
/// Exactly two positional arguments are accepted; anything else is a
/// usage error reported before any file is opened.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "compute-sales")]
#[command(version)]
pub struct Args {
    /// Price catalogue JSON document (product name → unit price)
    pub price_catalogue: PathBuf,

    /// Sales record JSON document (array of {product, quantity})
    pub sales_record: PathBuf,
}

impl Args {
    /// Builds arguments directly, bypassing the command line.
    pub fn new(price_catalogue: impl Into<PathBuf>, sales_record: impl Into<PathBuf>) -> Self {
        Args {
            price_catalogue: price_catalogue.into(),
            sales_record: sales_record.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_positionals() {
        let args = Args::try_parse_from(["compute-sales", "prices.json", "sales.json"]).unwrap();
        assert_eq!(args, Args::new("prices.json", "sales.json"));
    }

    #[test]
    fn test_missing_argument_is_rejected() {
        assert!(Args::try_parse_from(["compute-sales"]).is_err());
        assert!(Args::try_parse_from(["compute-sales", "prices.json"]).is_err());
    }

    #[test]
    fn test_extra_argument_is_rejected() {
        let result = Args::try_parse_from(["compute-sales", "a.json", "b.json", "c.json"]);
        assert!(result.is_err());
    }
}
