//! Layered configuration: defaults, then a TOML file named by `MAKETEN_CONFIG`,
//! then `MAKETEN_*` environment variables. Every value remembers its source.

use maketen_ai::PICKERS;
use maketen_engine::cards::{ExpressionDef, default_expressions};
use maketen_engine::game::RoundConfig;
use maketen_engine::rules::{MATCH_SETTLE, MISMATCH_SETTLE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub match_settle_ms: u64,
    pub mismatch_settle_ms: u64,
    pub expressions: Vec<String>,
    pub picker: String,
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
    pub seed: ValueSource,
    pub match_settle_ms: ValueSource,
    pub mismatch_settle_ms: ValueSource,
    pub expressions: ValueSource,
    pub picker: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            match_settle_ms: ValueSource::Default,
            mismatch_settle_ms: ValueSource::Default,
            expressions: ValueSource::Default,
            picker: ValueSource::Default,
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
        Self {
            seed: None,
            match_settle_ms: MATCH_SETTLE.as_millis() as u64,
            mismatch_settle_ms: MISMATCH_SETTLE.as_millis() as u64,
            expressions: default_expressions().into_iter().map(|d| d.text).collect(),
            picker: "memory".into(),
        }
    }
}

impl Config {
    /// Builds the engine configuration, parsing every expression.
    pub fn round_config(&self) -> Result<RoundConfig, ConfigError> {
        let expressions = self
            .expressions
            .iter()
            .map(|text| ExpressionDef::parse(text))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        let round = RoundConfig {
            expressions,
            match_settle: Duration::from_millis(self.match_settle_ms),
            mismatch_settle: Duration::from_millis(self.mismatch_settle_ms),
        };
        round
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(round)
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

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("MAKETEN_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.match_settle_ms {
            cfg.match_settle_ms = v;
            sources.match_settle_ms = ValueSource::File;
        }
        if let Some(v) = f.mismatch_settle_ms {
            cfg.mismatch_settle_ms = v;
            sources.mismatch_settle_ms = ValueSource::File;
        }
        if let Some(v) = f.expressions {
            cfg.expressions = v;
            sources.expressions = ValueSource::File;
        }
        if let Some(v) = f.picker {
            cfg.picker = v;
            sources.picker = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("MAKETEN_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(ms) = std::env::var("MAKETEN_MATCH_SETTLE_MS")
        && !ms.is_empty()
    {
        cfg.match_settle_ms = ms
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid match_settle_ms".into()))?;
        sources.match_settle_ms = ValueSource::Env;
    }
    if let Ok(ms) = std::env::var("MAKETEN_MISMATCH_SETTLE_MS")
        && !ms.is_empty()
    {
        cfg.mismatch_settle_ms = ms
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid mismatch_settle_ms".into()))?;
        sources.mismatch_settle_ms = ValueSource::Env;
    }
    if let Ok(picker) = std::env::var("MAKETEN_PICKER")
        && !picker.is_empty()
    {
        cfg.picker = picker;
        sources.picker = ValueSource::Env;
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
    seed: Option<u64>,
    #[serde(default)]
    match_settle_ms: Option<u64>,
    #[serde(default)]
    mismatch_settle_ms: Option<u64>,
    #[serde(default)]
    expressions: Option<Vec<String>>,
    #[serde(default)]
    picker: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !PICKERS.contains(&cfg.picker.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: picker must be one of {}",
            PICKERS.join(", ")
        )));
    }
    cfg.round_config()
        .map(|_| ())
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const VARS: &[&str] = &[
        "MAKETEN_CONFIG",
        "MAKETEN_SEED",
        "MAKETEN_MATCH_SETTLE_MS",
        "MAKETEN_MISMATCH_SETTLE_MS",
        "MAKETEN_PICKER",
    ];

    fn with_env<F: FnOnce()>(pairs: &[(&str, &str)], f: F) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe {
            for key in VARS {
                std::env::remove_var(key);
            }
            for (k, v) in pairs {
                std::env::set_var(k, v);
            }
        }
        f();
        unsafe {
            for key in VARS {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_match_engine_constants() {
        with_env(&[], || {
            let resolved = load_with_sources().unwrap();
            assert_eq!(resolved.config, Config::default());
            assert_eq!(resolved.config.match_settle_ms, 420);
            assert_eq!(resolved.config.mismatch_settle_ms, 700);
            assert_eq!(resolved.config.expressions.len(), 6);
            assert_eq!(resolved.sources.seed, ValueSource::Default);
            assert_eq!(resolved.config.round_config().unwrap(), RoundConfig::default());
        });
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "seed = 5\nmismatch_settle_ms = 10\nexpressions = [\"6 + 4\", \"11 - 1\"]\npicker = \"random\""
        )
        .unwrap();
        let path = file.path().to_string_lossy().into_owned();

        with_env(
            &[("MAKETEN_CONFIG", path.as_str()), ("MAKETEN_SEED", "9")],
            || {
                let resolved = load_with_sources().unwrap();
                assert_eq!(resolved.config.seed, Some(9));
                assert_eq!(resolved.sources.seed, ValueSource::Env);
                assert_eq!(resolved.config.mismatch_settle_ms, 10);
                assert_eq!(resolved.sources.mismatch_settle_ms, ValueSource::File);
                assert_eq!(resolved.sources.match_settle_ms, ValueSource::Default);
                assert_eq!(resolved.config.picker, "random");
                assert_eq!(resolved.config.round_config().unwrap().total_pairs(), 2);
            },
        );
    }

    #[test]
    #[serial]
    fn rejects_bad_values() {
        with_env(&[("MAKETEN_SEED", "abc")], || {
            assert!(matches!(load(), Err(ConfigError::Invalid(_))));
        });
        with_env(&[("MAKETEN_PICKER", "psychic")], || {
            let err = load().unwrap_err();
            assert!(err.to_string().contains("picker"));
        });
    }

    #[test]
    #[serial]
    fn rejects_expressions_that_do_not_make_ten() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "expressions = [\"6 + 5\"]").unwrap();
        let path = file.path().to_string_lossy().into_owned();
        with_env(&[("MAKETEN_CONFIG", path.as_str())], || {
            let err = load().unwrap_err();
            assert!(err.to_string().contains("expected 10"), "{}", err);
        });
    }
}
