use crate::search::heuristics::StateHeuristicNames;
use crate::search::search_engines::{CancellationToken, SearchStrategy, TerminationCondition};
use crate::search::successor_generators::SuccessorGeneratorName;
use crate::search::ConfigError;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_OPERATOR_CAP: usize = 1_000_000;

/// Planner settings, usually read from a toml file such as
///
/// ```toml
/// strategy = "gbfs"
/// heuristic = "goal-counting"
/// successor-generator = "indexed"
/// operator-cap = 50000
/// time-limit = "5m"
/// memory-limit-mb = 4096
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct PlannerConfig {
    pub strategy: SearchStrategy,
    pub heuristic: StateHeuristicNames,
    pub successor_generator: SuccessorGeneratorName,
    pub operator_cap: usize,
    #[serde(deserialize_with = "deserialize_duration")]
    pub time_limit: Option<Duration>,
    pub memory_limit_mb: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::default(),
            heuristic: StateHeuristicNames::default(),
            successor_generator: SuccessorGeneratorName::default(),
            operator_cap: DEFAULT_OPERATOR_CAP,
            time_limit: None,
            memory_limit_mb: None,
        }
    }
}

impl PlannerConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn termination_condition(&self, token: CancellationToken) -> TerminationCondition {
        TerminationCondition::new(self.time_limit, self.memory_limit_mb)
            .with_cancellation_token(token)
    }
}

/// Durations are written the humantime way, e.g. `"90s"` or `"1h 30m"`.
fn deserialize_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let text: Option<String> = Option::deserialize(deserializer)?;
    text.map(|text| humantime::parse_duration(&text).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_config_uses_defaults() {
        let config = PlannerConfig::from_toml_str("").unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.strategy, SearchStrategy::Bfs);
        assert_eq!(config.successor_generator, SuccessorGeneratorName::Indexed);
        assert_eq!(config.operator_cap, DEFAULT_OPERATOR_CAP);
    }

    #[test]
    fn every_key_is_read() {
        let config = PlannerConfig::from_toml_str(
            r#"
            strategy = "gbfs"
            heuristic = "zero"
            successor-generator = "naive"
            operator-cap = 500
            time-limit = "1m 30s"
            memory-limit-mb = 2048
            "#,
        )
        .unwrap();
        assert_eq!(config.strategy, SearchStrategy::Gbfs);
        assert_eq!(config.heuristic, StateHeuristicNames::ZeroHeuristic);
        assert_eq!(config.successor_generator, SuccessorGeneratorName::Naive);
        assert_eq!(config.operator_cap, 500);
        assert_eq!(config.time_limit, Some(Duration::from_secs(90)));
        assert_eq!(config.memory_limit_mb, Some(2048));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            PlannerConfig::from_toml_str("strategy = \"ucs\"\nbeam-width = 3"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn bad_durations_are_rejected() {
        assert!(PlannerConfig::from_toml_str("time-limit = \"soon\"").is_err());
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "strategy = \"ucs\"").unwrap();
        let config = PlannerConfig::from_path(file.path()).unwrap();
        assert_eq!(config.strategy, SearchStrategy::Ucs);

        assert!(matches!(
            PlannerConfig::from_path(&file.path().with_extension("missing")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn termination_condition_shares_the_token() {
        let token = CancellationToken::new();
        let mut termination = PlannerConfig::default().termination_condition(token.clone());
        assert!(termination.should_terminate().is_none());
        token.cancel();
        assert!(termination.should_terminate().is_some());
    }
}
