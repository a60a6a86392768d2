//! Configuration module for Message Credits
//!
//! This module handles:
//! - The pricing rule set (`CreditRules`) and its defaults
//! - Loading overrides from `credits.toml`
//! - Config file discovery (explicit path, working directory, user config dir)

mod rules_config;

pub use rules_config::{
    load_config_file,
    resolve_config,
    user_config_path,
    ConfigError,
    ConfigSource,
    CreditRules,
    CreditsConfig,
    LoadedConfig,
    CONFIG_FILE_NAME,
    EXAMPLE_CONFIG,
};
