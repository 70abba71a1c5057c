//! Titu configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use titu_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("typing delay: {} ms", config.chat.typing_delay_ms);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::TituConfig;

use std::path::Path;
use titu_common::ConfigError;

/// Load and validate the config.
///
/// With `path` set, that file must exist. Otherwise `config.toml` is read
/// from the OS config directory and a commented default is created if none
/// exists.
pub fn load_config(path: Option<&Path>) -> Result<TituConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}
