use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

fn parse_denomination(s: &str) -> Result<i64, String> {
    s.trim().parse::<i64>().map_err(|_| {
        format!(
            "Could not decode denomination {}: Format is an integer coin value, eg. 25",
            s
        )
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "orderly",
    about = "Checks whether greedy change-making is always optimal for a currency"
)]
pub struct OrderlyOptions {
    #[command(subcommand)]
    pub command: OrderlyCommand,
}

#[derive(Subcommand, Debug)]
pub enum OrderlyCommand {
    /// Decide whether the currency is orderly, with a counterexample if not
    #[command(allow_negative_numbers = true)]
    Check {
        #[command(flatten)]
        source: CurrencySource,

        #[arg(long)]
        json: bool,
    },

    /// Make optimal change for a value, refusing currencies that are not orderly
    #[command(allow_negative_numbers = true)]
    Change {
        value: i64,

        #[command(flatten)]
        source: CurrencySource,
    },
}

/// Where the denominations come from: the command line or a named vault entry.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CurrencySource {
    #[arg(value_parser = parse_denomination)]
    pub denominations: Vec<i64>,

    #[arg(short = 'c', long = "currency")]
    pub currency: Option<String>,

    #[arg(short = 'V', long)]
    pub vault: Option<PathBuf>,
}
