// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Layered configuration for sift.
//!
//! Values come from built-in defaults, an optional TOML file and `SIFT_*`
//! environment variables, in increasing precedence.
//!
//! ```toml
//! [logging]
//! level = "info"
//! format = "compact"
//!
//! [filter]
//! date_attributes = ["hired", "expires"]
//! date_format = "%Y-%m-%d"
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::SiftConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use std::path::PathBuf;

use tracing::debug;

/// Names the config file when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "SIFT_CONFIG";

/// Config file read from the working directory by default.
pub const DEFAULT_CONFIG_FILE: &str = "sift.toml";

/// Fully resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiftConfig {
	pub logging: LoggingConfig,
	pub filter: FilterConfig,
}

/// Resolves the config file path: an explicit path wins, then
/// `SIFT_CONFIG`, then `sift.toml`.
pub fn config_path(explicit: Option<PathBuf>) -> PathBuf {
	explicit
		.or_else(|| sources::env_var(CONFIG_ENV_VAR).map(PathBuf::from))
		.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`SIFT_*`)
/// 2. Config file (see [`config_path`])
/// 3. Built-in defaults
pub fn load_config(explicit: Option<PathBuf>) -> Result<SiftConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path(explicit))),
		Box::new(EnvSource),
	])
}

/// Merges `sources` in precedence order and resolves the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<SiftConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = SiftConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	finalize(merged)
}

fn finalize(layer: SiftConfigLayer) -> Result<SiftConfig, ConfigError> {
	let logging = layer.logging.unwrap_or_default().finalize();
	let filter = layer.filter.unwrap_or_default().finalize();

	filter.validate()?;

	debug!(
		log_level = %logging.level,
		log_format = %logging.format,
		date_attributes = filter.date_attributes.len(),
		"configuration resolved"
	);

	Ok(SiftConfig { logging, filter })
}
