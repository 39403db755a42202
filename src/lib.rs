//! Currency orderliness for change-making.
//!
//! A currency is orderly (also called canonical or greedy) when always taking
//! the largest coin that fits yields change with the fewest coins. This crate
//! computes greedy representations, decides orderliness in polynomial time and
//! produces a counterexample when greedy change can be beaten.

pub mod cli;
pub mod coinrep;
pub mod currency;
pub mod error;
pub mod greedy;
pub mod orderliness;
pub mod vault;

pub use coinrep::{CoinRep, Count};
pub use currency::{Currency, Denomination};
pub use error::OrderlyError;
pub use greedy::{greedy_coinrep, optimal_change};
pub use orderliness::{check, is_orderly, orderly_counterexample, CounterexampleReport};
