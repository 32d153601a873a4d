use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Employee, LogPolicy, employee::seed_roster};

/// Configuration for building a ledger at startup.
///
/// The configuration decides which employees the ledger starts with and how
/// a request to log more days than remain is handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// How `log_days` behaves when the balance runs out.
    log_policy: LogPolicy,

    /// The starting roster, in directory iteration order.
    ///
    /// Defaults to the built-in seed roster when the file omits it.
    employees: Vec<Employee>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_policy: LogPolicy::default(),
            employees: seed_roster(),
        }
    }
}

impl Config {
    /// Create a configuration from an explicit roster.
    #[must_use]
    pub const fn new(log_policy: LogPolicy, employees: Vec<Employee>) -> Self {
        Self {
            log_policy,
            employees,
        }
    }

    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the configured log policy.
    #[must_use]
    pub const fn log_policy(&self) -> LogPolicy {
        self.log_policy
    }

    /// Returns the configured roster.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        log_policy: LogPolicy,

        /// An absent key means the seed roster. An explicit empty list means
        /// an empty directory.
        #[serde(default = "seed_roster")]
        employees: Vec<Employee>,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                log_policy,
                employees,
            } => Self {
                log_policy,
                employees,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        let Config {
            log_policy,
            employees,
        } = config;

        Self::V1 {
            log_policy,
            employees,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"_version = "1"
log_policy = "all_or_nothing"

[[employees]]
id = "E010"
name = "Carol Diaz"
vacation_days_per_year = 25
vacation_history = ["2024-07-01"]

[[employees]]
id = "E011"
name = "Dan Eriksen"
vacation_days_per_year = 10
"#,
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.log_policy(), LogPolicy::AllOrNothing);
        assert_eq!(config.employees().len(), 2);
        assert_eq!(config.employees()[0].id(), "E010");
        assert_eq!(config.employees()[0].vacation_history(), &["2024-07-01"]);
        assert!(config.employees()[1].vacation_history().is_empty());
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nlog_policy = \"sometimes\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn empty_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
        assert_eq!(actual.log_policy(), LogPolicy::Partial);
        assert_eq!(actual.employees().len(), 2);
    }

    #[test]
    fn explicit_empty_roster_is_kept() {
        let config: Config = toml::from_str("_version = \"1\"\nemployees = []\n").unwrap();
        assert!(config.employees().is_empty());
    }

    #[test]
    fn save_then_load_preserves_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("vacation.toml");

        let config = Config::new(LogPolicy::AllOrNothing, seed_roster());
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
