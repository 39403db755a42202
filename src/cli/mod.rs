use crate::currency::Currency;
use crate::error::OrderlyError;
use crate::greedy::optimal_change;
use crate::orderliness::{check, CounterexampleReport};
use crate::vault::{CurrenciesVaultValue, FileVault, Vault, VaultReadable};
use clap::Parser;
use serde::Serialize;
use std::env::current_dir;
use std::process::ExitCode;
use tracing::info;

pub use argument_parsing::{CurrencySource, OrderlyCommand, OrderlyOptions};

mod argument_parsing;
mod formatting;

pub fn run() -> ExitCode {
    let arguments = OrderlyOptions::parse();

    match execute(arguments) {
        Ok(screen) => {
            println!("{}", screen);
            ExitCode::SUCCESS
        }
        Err(error) => {
            println!("Could not verify currency: {}", error);
            ExitCode::FAILURE
        }
    }
}

pub fn execute(arguments: OrderlyOptions) -> Result<String, OrderlyError> {
    match arguments.command {
        OrderlyCommand::Check { source, json } => {
            let currency = resolve_currency(&source, || vault_for(&source))?;
            info!(%currency, "Checking orderliness");
            let report = check(&currency);

            if json {
                let screen = CheckJsonScreen {
                    orderly: report.is_none(),
                    currency: &currency,
                    counterexample: report.as_ref(),
                };
                serde_json::to_string_pretty(&screen).map_err(|error| OrderlyError::Output(error.to_string()))
            } else {
                Ok(formatting::format_check_screen(&currency, report.as_ref()))
            }
        }
        OrderlyCommand::Change { value, source } => {
            let currency = resolve_currency(&source, || vault_for(&source))?;
            info!(%currency, value, "Making change");
            let coinrep = optimal_change(value, &currency)?;
            Ok(formatting::format_change_screen(value, &currency, &coinrep))
        }
    }
}

#[derive(Serialize)]
struct CheckJsonScreen<'a> {
    currency: &'a Currency,
    orderly: bool,
    counterexample: Option<&'a CounterexampleReport>,
}

fn vault_for(source: &CurrencySource) -> Result<FileVault, OrderlyError> {
    let path = match &source.vault {
        Some(path) => path.clone(),
        None => current_dir().map_err(|error| OrderlyError::Vault(error.to_string()))?,
    };
    Ok(FileVault { path })
}

/// Denominations given on the command line win only when no named currency is
/// requested; asking for both, or for neither, is rejected.
///
/// `open_vault` is only called for a named currency.
pub fn resolve_currency<V, F>(source: &CurrencySource, open_vault: F) -> Result<Currency, OrderlyError>
where
    V: Vault,
    F: FnOnce() -> Result<V, OrderlyError>,
{
    match (&source.currency, source.denominations.is_empty()) {
        (Some(name), true) => CurrenciesVaultValue::from_vault(&open_vault()?)?.currency(name),
        (None, false) => Currency::from_unordered(source.denominations.clone()),
        (Some(name), false) => Err(OrderlyError::Arguments(format!(
            "Give either denominations or a named currency, not both (got {:?} and \"{}\")",
            source.denominations, name
        ))),
        (None, true) => Err(OrderlyError::Arguments(
            "No currency given: pass denominations, eg. 25 10 5 1, or --currency NAME".to_string(),
        )),
    }
}
