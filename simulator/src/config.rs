use std::env;
use std::fmt;

use shared::constants::CATALOG_GROUP_COUNT;

const DEFAULT_SPINS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
    ZeroSpins,
    GroupOutOfRange(usize),
    UnknownFormat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { key, value } => write!(f, "{} must be a number, got '{}'", key, value),
            Self::ZeroSpins => write!(f, "WHEEL_SIM_SPINS must be at least 1"),
            Self::GroupOutOfRange(group) => {
                write!(f, "WHEEL_SIM_GROUP must be below {}, got {}", CATALOG_GROUP_COUNT, group)
            }
            Self::UnknownFormat(format) => write!(f, "WHEEL_SIM_FORMAT must be 'text' or 'json', got '{}'", format),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    pub spins: u32,
    /// Fixed seed for reproducible runs; entropy otherwise.
    pub seed: Option<u64>,
    /// Single prize group to audit; all groups otherwise.
    pub group: Option<usize>,
    pub format: OutputFormat,
}

impl SimulatorConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let spins = parse_number(&lookup, "WHEEL_SIM_SPINS")?.unwrap_or(DEFAULT_SPINS);
        if spins == 0 {
            return Err(ConfigError::ZeroSpins);
        }

        let seed = parse_number(&lookup, "WHEEL_SIM_SEED")?;

        let group = parse_number(&lookup, "WHEEL_SIM_GROUP")?;
        if let Some(group) = group {
            if group >= CATALOG_GROUP_COUNT {
                return Err(ConfigError::GroupOutOfRange(group));
            }
        }

        let format = match lookup("WHEEL_SIM_FORMAT").map(|v| v.trim().to_lowercase()) {
            None => OutputFormat::Text,
            Some(v) if v.is_empty() || v == "text" => OutputFormat::Text,
            Some(v) if v == "json" => OutputFormat::Json,
            Some(v) => return Err(ConfigError::UnknownFormat(v)),
        };

        Ok(Self { spins, seed, group, format })
    }

    pub fn groups(&self) -> Vec<usize> {
        match self.group {
            Some(group) => vec![group],
            None => (0..CATALOG_GROUP_COUNT).collect(),
        }
    }
}

fn parse_number<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&'static str, &str)]) -> Result<SimulatorConfig, ConfigError> {
        let vars: HashMap<&'static str, String> = vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        SimulatorConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.spins, DEFAULT_SPINS);
        assert_eq!(config.seed, None);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.groups(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_reads_all_values() {
        let config = config(&[
            ("WHEEL_SIM_SPINS", "500"),
            ("WHEEL_SIM_SEED", "42"),
            ("WHEEL_SIM_GROUP", "2"),
            ("WHEEL_SIM_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.spins, 500);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.groups(), vec![2]);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            config(&[("WHEEL_SIM_SPINS", "lots")]),
            Err(ConfigError::InvalidNumber { key: "WHEEL_SIM_SPINS", value: "lots".to_string() })
        );
        assert_eq!(config(&[("WHEEL_SIM_SPINS", "0")]), Err(ConfigError::ZeroSpins));
        assert_eq!(config(&[("WHEEL_SIM_GROUP", "4")]), Err(ConfigError::GroupOutOfRange(4)));
        assert_eq!(
            config(&[("WHEEL_SIM_FORMAT", "xml")]),
            Err(ConfigError::UnknownFormat("xml".to_string()))
        );
    }
}
