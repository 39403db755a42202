use crate::currency::Currency;
use crate::error::OrderlyError;
#[cfg(test)]
use mockall::automock;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::debug;

pub const CONFIG_FILE: &str = "config.json";

/// A directory holding `config.json`, whose top-level keys are read by
/// [`VaultReadable`] implementors.
#[cfg_attr(test, automock)]
pub trait Vault {
    fn read_vault_values<T: DeserializeOwned + 'static>(&self, name: String) -> Result<T, OrderlyError>;
}

pub trait VaultReadable: DeserializeOwned + 'static {
    const KEY: &'static str;

    fn from_vault<V: Vault>(vault: &V) -> Result<Self, OrderlyError> {
        vault.read_vault_values(Self::KEY.to_string())
    }
}

pub struct FileVault {
    pub path: PathBuf,
}

impl Vault for FileVault {
    fn read_vault_values<T: DeserializeOwned + 'static>(&self, name: String) -> Result<T, OrderlyError> {
        let config_path = self.path.join(CONFIG_FILE);
        debug!(path = %config_path.display(), key = %name, "Reading vault values");

        let file = File::open(&config_path).map_err(|error| {
            OrderlyError::Vault(format!("Could not open {}: {}", config_path.display(), error))
        })?;

        let mut config: serde_json::Value = serde_json::from_reader(BufReader::new(file))
            .map_err(|error| {
                OrderlyError::Vault(format!("Could not parse {}: {}", config_path.display(), error))
            })?;

        let value = config
            .get_mut(&name)
            .map(serde_json::Value::take)
            .ok_or_else(|| OrderlyError::Vault(format!("No \"{}\" key in {}", name, config_path.display())))?;

        serde_json::from_value(value)
            .map_err(|error| OrderlyError::Vault(format!("Could not decode \"{}\": {}", name, error)))
    }
}

/// Named currencies, e.g. `{"currencies": {"us": [25, 10, 5, 1]}}`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct CurrenciesVaultValue {
    currencies: BTreeMap<String, Vec<i64>>,
}

impl VaultReadable for CurrenciesVaultValue {
    const KEY: &'static str = "currencies";
}

impl CurrenciesVaultValue {
    /// Denominations are normalised like command-line ones: any order, repeats allowed.
    pub fn currency(&self, name: &str) -> Result<Currency, OrderlyError> {
        let raw = self.currencies.get(name).ok_or_else(|| {
            OrderlyError::Vault(format!(
                "Unknown currency \"{}\". Known currencies: {}",
                name,
                self.names().join(", ")
            ))
        })?;

        Currency::from_unordered(raw.clone())
    }

    pub fn names(&self) -> Vec<String> {
        self.currencies.keys().cloned().collect()
    }
}

#[cfg(test)]
impl CurrenciesVaultValue {
    pub fn from_pairs(pairs: Vec<(&str, Vec<i64>)>) -> CurrenciesVaultValue {
        CurrenciesVaultValue {
            currencies: pairs
                .into_iter()
                .map(|(name, denominations)| (name.to_string(), denominations))
                .collect(),
        }
    }
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use super::{CurrenciesVaultValue, FileVault, VaultReadable, CONFIG_FILE};
    use crate::currency::Currency;
    use crate::error::OrderlyError;
    use pretty_assertions::assert_eq;
    use std::fs::File;
    use std::io::prelude::*;
    use tempfile::{tempdir, TempDir};

    fn vault_with_config(content: &str) -> (TempDir, FileVault) {
        let directory = tempdir().unwrap();
        let mut file = File::create(directory.path().join(CONFIG_FILE)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        let vault = FileVault {
            path: directory.path().to_path_buf(),
        };
        (directory, vault)
    }

    fn expect_vault_error(result: Result<CurrenciesVaultValue, OrderlyError>, fragment: &str) {
        match result {
            Err(OrderlyError::Vault(message)) => assert!(
                message.contains(fragment),
                "message {:?} does not mention {:?}",
                message,
                fragment
            ),
            other => panic!("Expected a vault error, got {:?}", other),
        }
    }

    #[test]
    fn read_currencies__nominal() {
        let (_directory, vault) = vault_with_config(
            r#"{
"currencies": {
    "us": [25, 10, 5, 1],
    "toy": [1, 3, 4]
},
"unrelated": true
}"#,
        );

        let currencies = CurrenciesVaultValue::from_vault(&vault).expect("Can read currencies");

        assert_eq!(currencies.names(), vec!["toy".to_string(), "us".to_string()]);
        assert_eq!(currencies.currency("us"), Currency::new(vec![25, 10, 5, 1]));
        assert_eq!(currencies.currency("toy"), Currency::new(vec![4, 3, 1]));
    }

    #[test]
    fn read_currencies__unknown_name() {
        let currencies = CurrenciesVaultValue::from_pairs(vec![("us", vec![25, 10, 5, 1])]);
        match currencies.currency("euro") {
            Err(OrderlyError::Vault(message)) => {
                assert_eq!(message, "Unknown currency \"euro\". Known currencies: us")
            }
            other => panic!("Expected a vault error, got {:?}", other),
        }
    }

    #[test]
    fn read_currencies__invalid_currency() {
        let currencies = CurrenciesVaultValue::from_pairs(vec![("broken", vec![5, 3, 2])]);
        assert!(matches!(
            currencies.currency("broken"),
            Err(OrderlyError::InvalidCurrency(_))
        ));
    }

    #[test]
    fn read_currencies__missing_file() {
        let directory = tempdir().unwrap();
        let vault = FileVault {
            path: directory.path().to_path_buf(),
        };
        expect_vault_error(CurrenciesVaultValue::from_vault(&vault), "Could not open");
    }

    #[test]
    fn read_currencies__malformed_json() {
        let (_directory, vault) = vault_with_config("{\"currencies\": ");
        expect_vault_error(CurrenciesVaultValue::from_vault(&vault), "Could not parse");
    }

    #[test]
    fn read_currencies__missing_key() {
        let (_directory, vault) = vault_with_config("{\"periods\": []}");
        expect_vault_error(CurrenciesVaultValue::from_vault(&vault), "No \"currencies\" key");
    }

    #[test]
    fn read_currencies__wrong_shape() {
        let (_directory, vault) = vault_with_config("{\"currencies\": {\"us\": \"25,10,5,1\"}}");
        expect_vault_error(CurrenciesVaultValue::from_vault(&vault), "Could not decode");
    }
}
