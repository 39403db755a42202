use crate::error::OrderlyError;
use serde::Serialize;
use std::fmt::{Display, Formatter};

pub type Denomination = u64;

/// A validated set of denominations.
///
/// Denominations are positive, strictly descending (hence distinct) and the
/// last one is always 1, so every non-negative value can be represented and a
/// greedy decomposition always ends with a zero remainder.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Currency {
    denominations: Vec<Denomination>,
}

impl Currency {
    /// Validates `raw` as given. Nothing is sorted or deduplicated.
    pub fn new(raw: Vec<i64>) -> Result<Currency, OrderlyError> {
        if raw.is_empty() {
            return Err(OrderlyError::InvalidCurrency(
                "a currency needs at least one denomination".to_string(),
            ));
        }

        let denominations = raw
            .into_iter()
            .map(positive_denomination)
            .collect::<Result<Vec<Denomination>, OrderlyError>>()?;

        if let Some(pair) = denominations.windows(2).find(|pair| pair[0] <= pair[1]) {
            let reason = if pair[0] == pair[1] {
                format!("denomination {} appears more than once", pair[0])
            } else {
                format!(
                    "denominations must be strictly descending, found {} before {}",
                    pair[0], pair[1]
                )
            };
            return Err(OrderlyError::InvalidCurrency(reason));
        }

        Currency::with_trailing_one(denominations)
    }

    /// Builds a currency from denominations in any order, possibly repeated.
    ///
    /// Non-positive values are still rejected and a missing 1 is never added.
    pub fn from_unordered(raw: Vec<i64>) -> Result<Currency, OrderlyError> {
        let mut denominations = raw
            .into_iter()
            .map(positive_denomination)
            .collect::<Result<Vec<Denomination>, OrderlyError>>()?;

        if denominations.is_empty() {
            return Err(OrderlyError::InvalidCurrency(
                "a currency needs at least one denomination".to_string(),
            ));
        }

        denominations.sort_unstable_by(|a, b| b.cmp(a));
        denominations.dedup();

        Currency::with_trailing_one(denominations)
    }

    fn with_trailing_one(denominations: Vec<Denomination>) -> Result<Currency, OrderlyError> {
        match denominations.last() {
            Some(1) => Ok(Currency { denominations }),
            Some(smallest) => Err(OrderlyError::InvalidCurrency(format!(
                "the smallest denomination must be 1, found {}",
                smallest
            ))),
            None => Err(OrderlyError::InvalidCurrency(
                "a currency needs at least one denomination".to_string(),
            )),
        }
    }

    pub fn denominations(&self) -> &[Denomination] {
        &self.denominations
    }

    pub fn iter(&self) -> impl Iterator<Item = Denomination> + '_ {
        self.denominations.iter().copied()
    }
}

fn positive_denomination(raw: i64) -> Result<Denomination, OrderlyError> {
    if raw <= 0 {
        return Err(OrderlyError::InvalidCurrency(format!(
            "denominations must be positive, found {}",
            raw
        )));
    }
    Ok(raw as Denomination)
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let denominations = self
            .denominations
            .iter()
            .map(|denomination| denomination.to_string())
            .collect::<Vec<String>>();
        write!(f, "[{}]", denominations.join(", "))
    }
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use super::Currency;
    use crate::error::OrderlyError;
    use pretty_assertions::assert_eq;

    fn expect_invalid(result: Result<Currency, OrderlyError>, reason_fragment: &str) {
        match result {
            Err(OrderlyError::InvalidCurrency(reason)) => assert!(
                reason.contains(reason_fragment),
                "reason {:?} does not mention {:?}",
                reason,
                reason_fragment
            ),
            other => panic!("Expected InvalidCurrency, got {:?}", other),
        }
    }

    #[test]
    fn test__new__nominal() {
        let currency = Currency::new(vec![25, 10, 5, 1]).expect("Can build a currency");
        assert_eq!(currency.denominations(), &[25, 10, 5, 1]);
    }

    #[test]
    fn test__new__only_one() {
        let currency = Currency::new(vec![1]).expect("Can build a currency");
        assert_eq!(currency.denominations(), &[1]);
    }

    #[test]
    fn test__new__no_trailing_one() {
        expect_invalid(Currency::new(vec![5, 3, 2]), "smallest denomination must be 1");
    }

    #[test]
    fn test__new__empty() {
        expect_invalid(Currency::new(vec![]), "at least one denomination");
    }

    #[test]
    fn test__new__zero_denomination() {
        expect_invalid(Currency::new(vec![5, 0, 1]), "must be positive");
    }

    #[test]
    fn test__new__negative_denomination() {
        expect_invalid(Currency::new(vec![5, -3, 1]), "must be positive");
    }

    #[test]
    fn test__new__duplicate() {
        expect_invalid(Currency::new(vec![5, 5, 1]), "more than once");
    }

    #[test]
    fn test__new__ascending() {
        expect_invalid(Currency::new(vec![1, 5, 10]), "strictly descending");
    }

    #[test]
    fn test__from_unordered__sorts_and_deduplicates() {
        assert_eq!(
            Currency::from_unordered(vec![1, 5, 10, 5, 25]),
            Currency::new(vec![25, 10, 5, 1])
        );
    }

    #[test]
    fn test__from_unordered__does_not_add_one() {
        expect_invalid(Currency::from_unordered(vec![5, 3, 2]), "smallest denomination must be 1");
    }

    #[test]
    fn test__from_unordered__rejects_non_positive() {
        expect_invalid(Currency::from_unordered(vec![0, 1]), "must be positive");
    }

    #[test]
    fn test__from_unordered__empty() {
        expect_invalid(Currency::from_unordered(vec![]), "at least one denomination");
    }

    #[test]
    fn test__display() {
        let currency = Currency::new(vec![4, 3, 1]).expect("Can build a currency");
        assert_eq!(currency.to_string(), "[4, 3, 1]");
    }
}
