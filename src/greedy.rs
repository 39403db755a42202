use crate::coinrep::CoinRep;
use crate::currency::Currency;
use crate::error::OrderlyError;
use crate::orderliness::orderly_counterexample;
use tracing::debug;

/// Represents `value` by always taking as many coins of the largest remaining
/// denomination as possible.
///
/// The result is optimal only when the currency is orderly, see
/// [`optimal_change`].
pub fn greedy_coinrep(value: i64, currency: &Currency) -> Result<CoinRep, OrderlyError> {
    if value < 0 {
        return Err(OrderlyError::InvalidValue(value));
    }
    Ok(greedy_coinrep_unsigned(value as u64, currency))
}

pub(crate) fn greedy_coinrep_unsigned(value: u64, currency: &Currency) -> CoinRep {
    let mut remaining = value;
    let entries = currency
        .iter()
        .map(|denomination| {
            let count = remaining / denomination;
            remaining %= denomination;
            (denomination, count)
        })
        .collect();

    // The trailing 1 absorbs whatever is left.
    debug_assert_eq!(remaining, 0);
    CoinRep::from_entries(entries)
}

/// Fewest-coins representation of `value`, for orderly currencies only.
///
/// Fails with `NotOrderly` when greedy change cannot be trusted for this
/// currency, carrying the counterexample that proves it.
pub fn optimal_change(value: i64, currency: &Currency) -> Result<CoinRep, OrderlyError> {
    if value < 0 {
        return Err(OrderlyError::InvalidValue(value));
    }

    if let Some(counterexample) = orderly_counterexample(currency) {
        debug!(%currency, %counterexample, "Refusing to make change with a non-orderly currency");
        return Err(OrderlyError::NotOrderly { counterexample });
    }

    greedy_coinrep(value, currency)
}
