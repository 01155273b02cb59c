use holdem_engine::config::TableConfig;
use serde::{Deserialize, Serialize};

use crate::io_utils::read_text;

/// Environment variable naming a TOML configuration file.
pub const CONFIG_ENV: &str = "HOLDEM_CONFIG";
pub const SEED_ENV: &str = "HOLDEM_SEED";
pub const STARTING_STACK_ENV: &str = "HOLDEM_STARTING_STACK";
pub const BLIND_ENV: &str = "HOLDEM_BLIND";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub blind: u32,
    pub min_raise: u32,
    pub max_invalid_actions: u32,
    pub burn_cards: bool,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub blind: ValueSource,
    pub min_raise: ValueSource,
    pub max_invalid_actions: ValueSource,
    pub burn_cards: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            blind: ValueSource::Default,
            min_raise: ValueSource::Default,
            max_invalid_actions: ValueSource::Default,
            burn_cards: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        let table = TableConfig::default();
        Self {
            starting_stack: table.starting_stack,
            blind: table.blind,
            min_raise: table.min_raise,
            max_invalid_actions: table.max_invalid_actions,
            burn_cards: table.burn_cards,
            seed: None,
        }
    }
}

impl Config {
    pub fn table_config(&self) -> TableConfig {
        TableConfig {
            starting_stack: self.starting_stack,
            blind: self.blind,
            min_raise: self.min_raise,
            max_invalid_actions: self.max_invalid_actions,
            burn_cards: self.burn_cards,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

/// Resolves defaults, then the file named by `HOLDEM_CONFIG`, then environment overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Same as [`load_with_sources`] with an injectable environment lookup.
pub fn load_from(env: impl Fn(&str) -> Option<String>) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = read_text(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.blind {
            cfg.blind = v;
            sources.blind = ValueSource::File;
        }
        if let Some(v) = f.min_raise {
            cfg.min_raise = v;
            sources.min_raise = ValueSource::File;
        }
        if let Some(v) = f.max_invalid_actions {
            cfg.max_invalid_actions = v;
            sources.max_invalid_actions = ValueSource::File;
        }
        if let Some(v) = f.burn_cards {
            cfg.burn_cards = v;
            sources.burn_cards = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(seed) = env(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(stack) = env(STARTING_STACK_ENV)
        && !stack.is_empty()
    {
        cfg.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting_stack".into()))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(blind) = env(BLIND_ENV)
        && !blind.is_empty()
    {
        cfg.blind = blind
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid blind".into()))?;
        sources.blind = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    blind: Option<u32>,
    #[serde(default)]
    min_raise: Option<u32>,
    #[serde(default)]
    max_invalid_actions: Option<u32>,
    #[serde(default)]
    burn_cards: Option<bool>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.table_config()
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    if cfg.blind > cfg.starting_stack {
        return Err(ConfigError::Invalid(
            "Invalid configuration: blind must not exceed starting_stack".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let r = load_from(env_of(&[])).unwrap();
        assert_eq!(r.config, Config::default());
        assert_eq!(r.sources.seed, ValueSource::Default);
    }

    #[test]
    fn env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holdem.toml");
        fs::write(&path, "starting_stack = 500\nblind = 10\nseed = 1\n").unwrap();
        let path = path.to_string_lossy().to_string();
        let r = load_from(env_of(&[(CONFIG_ENV, &path), (SEED_ENV, "9")])).unwrap();
        assert_eq!(r.config.starting_stack, 500);
        assert_eq!(r.sources.starting_stack, ValueSource::File);
        assert_eq!(r.config.blind, 10);
        assert_eq!(r.config.seed, Some(9));
        assert_eq!(r.sources.seed, ValueSource::Env);
        assert_eq!(r.sources.min_raise, ValueSource::Default);
    }

    #[test]
    fn file_sets_table_rules() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holdem.toml");
        fs::write(&path, "burn_cards = false\nmax_invalid_actions = 5\n").unwrap();
        let path = path.to_string_lossy().to_string();
        let r = load_from(env_of(&[(CONFIG_ENV, &path)])).unwrap();
        assert_eq!(r.sources.burn_cards, ValueSource::File);
        assert_eq!(r.sources.max_invalid_actions, ValueSource::File);
        assert_eq!(r.sources.blind, ValueSource::Default);
        let table = r.config.table_config();
        assert!(!table.burn_cards);
        assert_eq!(table.max_invalid_actions, 5);
        assert_eq!(table.blind, TableConfig::default().blind);
    }

    #[test]
    fn zero_invalid_action_limit_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holdem.toml");
        fs::write(&path, "max_invalid_actions = 0\n").unwrap();
        let path = path.to_string_lossy().to_string();
        assert!(matches!(
            load_from(env_of(&[(CONFIG_ENV, &path)])),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(
            load_from(env_of(&[(SEED_ENV, "abc")])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            load_from(env_of(&[(STARTING_STACK_ENV, "0")])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            load_from(env_of(&[(STARTING_STACK_ENV, "50"), (BLIND_ENV, "60")])),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let r = load_from(env_of(&[(CONFIG_ENV, "/definitely/not/here.toml")]));
        assert!(matches!(r, Err(ConfigError::Io(_))));
    }
}
