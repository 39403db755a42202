use crate::coinrep::CoinRep;

/// Failures surfaced by the library and the command line.
///
/// `InvalidValue` and `InvalidCurrency` are precondition violations: they are
/// raised before any computation starts and nothing is corrected silently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderlyError {
    #[error("Invalid value {0}: values must be non-negative")]
    InvalidValue(i64),

    #[error("Value too large: {0}")]
    Overflow(String),

    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    #[error("Currency is not orderly: {counterexample} beats the greedy representation")]
    NotOrderly { counterexample: CoinRep },

    #[error("Vault error: {0}")]
    Vault(String),

    #[error("Invalid arguments: {0}")]
    Arguments(String),

    #[error("Could not render output: {0}")]
    Output(String),
}
