use crate::currency::{Currency, Denomination};
use crate::error::OrderlyError;
use serde::Serialize;
use std::fmt::{Display, Formatter};

pub type Count = u64;

/// A multiset of coins of one currency.
///
/// Holds exactly one `(denomination, count)` entry per denomination of the
/// currency it was built from, in the currency's descending order. Unused
/// denominations have a count of zero.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CoinRep {
    entries: Vec<(Denomination, Count)>,
}

impl CoinRep {
    /// Pairs each denomination of `currency` with the count at the same position.
    ///
    /// Fails with `Overflow` when the total value does not fit in a `u64`.
    /// The number of coins never exceeds the value, so it fits too.
    pub fn from_counts(currency: &Currency, counts: Vec<Count>) -> Result<CoinRep, OrderlyError> {
        let denominations = currency.denominations();
        if counts.len() != denominations.len() {
            return Err(OrderlyError::Arguments(format!(
                "expected {} counts for currency {}, got {}",
                denominations.len(),
                currency,
                counts.len()
            )));
        }

        let entries: Vec<(Denomination, Count)> = currency.iter().zip(counts).collect();

        let mut value: u64 = 0;
        for (denomination, count) in entries.iter() {
            value = denomination
                .checked_mul(*count)
                .and_then(|subtotal| value.checked_add(subtotal))
                .ok_or_else(|| {
                    OrderlyError::Overflow(format!(
                        "{} coins of {} on top of {} exceed {}",
                        count,
                        denomination,
                        value,
                        u64::MAX
                    ))
                })?;
        }

        Ok(CoinRep { entries })
    }

    pub(crate) fn from_entries(entries: Vec<(Denomination, Count)>) -> CoinRep {
        CoinRep { entries }
    }

    pub fn entries(&self) -> &[(Denomination, Count)] {
        &self.entries
    }

    /// Total value of the coins.
    pub fn value(&self) -> u64 {
        self.entries
            .iter()
            .map(|(denomination, count)| denomination * count)
            .sum()
    }

    /// Number of coins.
    pub fn size(&self) -> Count {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Copy of `self` with the counts before `position` kept, the count at
    /// `position` incremented by one and every later count set to zero.
    pub(crate) fn bumped_at(&self, position: usize) -> CoinRep {
        let entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, &(denomination, count))| {
                if index < position {
                    (denomination, count)
                } else if index == position {
                    (denomination, count + 1)
                } else {
                    (denomination, 0)
                }
            })
            .collect();

        CoinRep { entries }
    }
}

impl Display for CoinRep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let entries = self
            .entries
            .iter()
            .map(|(denomination, count)| format!("({}, {})", denomination, count))
            .collect::<Vec<String>>();
        write!(f, "[{}]", entries.join(", "))
    }
}
