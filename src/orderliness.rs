//! Orderliness checking.
//!
//! A currency is orderly when the greedy representation of every value uses
//! the fewest coins possible. Testing every value is unbounded, but Pearson
//! (A Polynomial-time Algorithm for the Change-Making Problem, Operations
//! Research Letters 33(3), 2005) shows that if greedy ever fails, one of
//! O(n²) candidate representations built around `denomination - 1` probes
//! already beats it. Each candidate costs O(n) to build and verify.

use crate::coinrep::{CoinRep, Count};
use crate::currency::Currency;
use crate::greedy::greedy_coinrep_unsigned;
use serde::Serialize;
use tracing::{debug, trace};

/// Returns a representation that uses fewer coins than the greedy
/// representation of the same value, or `None` if the currency is orderly.
///
/// Candidates are examined in ascending `(probe, position)` order and the
/// first one that beats greedy is returned. It is not necessarily the
/// smallest counterexample.
pub fn orderly_counterexample(currency: &Currency) -> Option<CoinRep> {
    let denominations = currency.denominations();
    let n = denominations.len();

    // The trailing 1 is never probed, so every probe is at least 1.
    for (probe_position, &denomination) in denominations.iter().enumerate().take(n - 1) {
        let template = greedy_coinrep_unsigned(denomination - 1, currency);

        for position in probe_position..n - 1 {
            let candidate = template.bumped_at(position);
            let reference = greedy_coinrep_unsigned(candidate.value(), currency);

            trace!(
                probe = denomination - 1,
                %candidate,
                candidate_size = candidate.size(),
                greedy_size = reference.size(),
                "Examined candidate"
            );

            if candidate.size() < reference.size() {
                debug!(%currency, counterexample = %candidate, "Currency is not orderly");
                return Some(candidate);
            }
        }
    }

    debug!(%currency, "Currency is orderly");
    None
}

pub fn is_orderly(currency: &Currency) -> bool {
    orderly_counterexample(currency).is_none()
}

/// Checks `currency` and, when it is not orderly, explains why.
pub fn check(currency: &Currency) -> Option<CounterexampleReport> {
    orderly_counterexample(currency)
        .map(|counterexample| CounterexampleReport::new(counterexample, currency))
}

/// A counterexample alongside the greedy representation it beats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CounterexampleReport {
    value: u64,
    counterexample: CoinRep,
    greedy: CoinRep,
}

impl CounterexampleReport {
    pub fn new(counterexample: CoinRep, currency: &Currency) -> CounterexampleReport {
        let value = counterexample.value();
        CounterexampleReport {
            value,
            greedy: greedy_coinrep_unsigned(value, currency),
            counterexample,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn counterexample(&self) -> &CoinRep {
        &self.counterexample
    }

    pub fn greedy(&self) -> &CoinRep {
        &self.greedy
    }

    // The counterexample is not necessarily optimal, so this is an upper bound.
    pub fn optimal_size(&self) -> Count {
        self.counterexample.size()
    }

    pub fn greedy_size(&self) -> Count {
        self.greedy.size()
    }
}
