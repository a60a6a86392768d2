//! Pricing rule configuration
//!
//! The rule set defaults to the standard message pricing table. Any value
//! can be overridden from a `credits.toml` file:
//!
//! ```toml
//! # credits.toml
//!
//! [rules]
//! char_cost = "0.05"
//! length_penalty = "5"
//! length_penalty_threshold = 100
//! unique_word_bonus = "-2"
//! ```
//!
//! Decimal values should be written as strings so they are read exactly.
//! Keys that are left out keep their defaults.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// File name searched for in the working directory and user config dir
pub const CONFIG_FILE_NAME: &str = "credits.toml";

/// Example configuration written by `config init`
pub const EXAMPLE_CONFIG: &str = r#"# Message Credits configuration
#
# Every key is optional. Decimal values are strings so they are read exactly.

[rules]
# Charged for every message
base_cost = "1"

# Per character (Unicode code point)
char_cost = "0.05"

# Per word, by length bucket
short_word_cost = "0.1"    # 1..=short_word_max_len characters
medium_word_cost = "0.2"   # up to medium_word_max_len characters
long_word_cost = "0.3"     # anything longer
short_word_max_len = 3
medium_word_max_len = 7

# Per vowel found at every Nth character position
vowel_position_cost = "0.3"
vowel_position_interval = 3

# Flat surcharge for messages longer than the threshold (in characters)
length_penalty = "5"
length_penalty_threshold = 100

# Applied when every word in the message is distinct (case-sensitive)
unique_word_bonus = "-2"

# Lowest charge before the palindrome multiplier
minimum_credits = "1"
"#;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid rule configuration: {0}")]
    Invalid(String),
}

/// Top-level layout of `credits.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CreditsConfig {
    /// Pricing rules
    #[serde(default)]
    pub rules: CreditRules,
}

/// The pricing rule set
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CreditRules {
    /// Charged for every message (default: 1)
    pub base_cost: Decimal,
    /// Per character (default: 0.05)
    pub char_cost: Decimal,
    /// Per word of 1..=short_word_max_len chars (default: 0.1)
    pub short_word_cost: Decimal,
    /// Per word up to medium_word_max_len chars (default: 0.2)
    pub medium_word_cost: Decimal,
    /// Per longer word (default: 0.3)
    pub long_word_cost: Decimal,
    pub short_word_max_len: usize,
    pub medium_word_max_len: usize,
    /// Per vowel at a multiple-of-interval position (default: 0.3)
    pub vowel_position_cost: Decimal,
    pub vowel_position_interval: usize,
    /// Flat surcharge for long messages (default: 5)
    pub length_penalty: Decimal,
    /// Character count above which the penalty applies (default: 100)
    pub length_penalty_threshold: usize,
    /// Discount for all-unique words (default: -2)
    pub unique_word_bonus: Decimal,
    /// Floor applied before the palindrome multiplier (default: 1)
    pub minimum_credits: Decimal,
}

impl Default for CreditRules {
    fn default() -> Self {
        Self {
            base_cost: dec!(1),
            char_cost: dec!(0.05),
            short_word_cost: dec!(0.1),
            medium_word_cost: dec!(0.2),
            long_word_cost: dec!(0.3),
            short_word_max_len: 3,
            medium_word_max_len: 7,
            vowel_position_cost: dec!(0.3),
            vowel_position_interval: 3,
            length_penalty: dec!(5),
            length_penalty_threshold: 100,
            unique_word_bonus: dec!(-2),
            minimum_credits: dec!(1),
        }
    }
}

impl CreditRules {
    /// Check the values the scorer relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vowel_position_interval == 0 {
            return Err(ConfigError::Invalid(
                "vowel_position_interval must be at least 1".to_string(),
            ));
        }
        if self.short_word_max_len == 0 {
            return Err(ConfigError::Invalid(
                "short_word_max_len must be at least 1".to_string(),
            ));
        }
        if self.medium_word_max_len <= self.short_word_max_len {
            return Err(ConfigError::Invalid(format!(
                "medium_word_max_len ({}) must be greater than short_word_max_len ({})",
                self.medium_word_max_len, self.short_word_max_len
            )));
        }
        if self.minimum_credits.is_sign_negative() {
            return Err(ConfigError::Invalid(format!(
                "minimum_credits must not be negative, got {}",
                self.minimum_credits
            )));
        }
        Ok(())
    }

    /// Surcharge for one word of `len` characters
    pub fn word_cost(&self, len: usize) -> Decimal {
        if len <= self.short_word_max_len {
            self.short_word_cost
        } else if len <= self.medium_word_max_len {
            self.medium_word_cost
        } else {
            self.long_word_cost
        }
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` flag or `MESSAGE_CREDITS_CONFIG`
    Explicit(PathBuf),
    /// `credits.toml` in the working directory
    WorkingDir(PathBuf),
    /// `credits.toml` in the user config directory
    User(PathBuf),
    /// Built-in defaults
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Explicit(p) => write!(f, "{} (explicit)", p.display()),
            ConfigSource::WorkingDir(p) => write!(f, "{}", p.display()),
            ConfigSource::User(p) => write!(f, "{} (user config)", p.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Configuration together with its origin
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: CreditsConfig,
    pub source: ConfigSource,
}

/// Get the user config file path
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("message-credits").join(CONFIG_FILE_NAME))
}

/// Load and validate a single configuration file
pub fn load_config_file(path: &Path) -> Result<CreditsConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: CreditsConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.rules.validate()?;
    Ok(config)
}

/// Resolve the effective configuration.
///
/// Searches in this order:
/// 1. `explicit` (an error here is returned to the caller)
/// 2. `credits.toml` in `cwd`
/// 3. `credits.toml` in the user config directory
///
/// Discovered files that fail to load are skipped with a warning.
/// Returns defaults if nothing is found.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig, ConfigError> {
    resolve_with_user_path(explicit, cwd, user_config_path())
}

fn resolve_with_user_path(
    explicit: Option<&Path>,
    cwd: &Path,
    user_path: Option<PathBuf>,
) -> Result<LoadedConfig, ConfigError> {
    if let Some(path) = explicit {
        let config = load_config_file(path)?;
        debug!("Loaded config from {}", path.display());
        return Ok(LoadedConfig {
            config,
            source: ConfigSource::Explicit(path.to_path_buf()),
        });
    }

    let local = cwd.join(CONFIG_FILE_NAME);
    if local.exists() {
        match load_config_file(&local) {
            Ok(config) => {
                debug!("Loaded config from {}", local.display());
                return Ok(LoadedConfig {
                    config,
                    source: ConfigSource::WorkingDir(local),
                });
            }
            Err(e) => warn!("Ignoring {}: {}", local.display(), e),
        }
    }

    if let Some(user) = user_path.filter(|p| p.exists()) {
        match load_config_file(&user) {
            Ok(config) => {
                debug!("Loaded user config from {}", user.display());
                return Ok(LoadedConfig {
                    config,
                    source: ConfigSource::User(user),
                });
            }
            Err(e) => warn!("Ignoring {}: {}", user.display(), e),
        }
    }

    debug!("No config file found, using defaults");
    Ok(LoadedConfig {
        config: CreditsConfig::default(),
        source: ConfigSource::Defaults,
    })
}
