// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, a TOML file and the environment.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::SiftConfigLayer;
use crate::sections::{FilterConfigLayer, LogFormat, LoggingConfigLayer};

pub const ENV_LOG_LEVEL: &str = "SIFT_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "SIFT_LOG_FORMAT";
pub const ENV_DATE_ATTRIBUTES: &str = "SIFT_FILTER_DATE_ATTRIBUTES";
pub const ENV_DATE_FORMAT: &str = "SIFT_FILTER_DATE_FORMAT";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<SiftConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<SiftConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(SiftConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file yields an empty layer.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<SiftConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(SiftConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: SiftConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: SIFT_<SECTION>_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<SiftConfigLayer, ConfigError> {
		debug!("loading environment variables");
		load_from(|name| std::env::var(name).ok())
	}
}

/// Builds a layer from `lookup`, which maps variable names to values.
fn load_from<F>(lookup: F) -> Result<SiftConfigLayer, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let var = |name: &str| lookup(name).filter(|s| !s.is_empty());

	let format = match var(ENV_LOG_FORMAT) {
		Some(v) => Some(v.parse::<LogFormat>().map_err(|_| ConfigError::InvalidValue {
			key: ENV_LOG_FORMAT.to_string(),
			message: format!("invalid log format '{v}'"),
		})?),
		None => None,
	};

	Ok(SiftConfigLayer {
		logging: Some(LoggingConfigLayer {
			level: var(ENV_LOG_LEVEL),
			format,
		}),
		filter: Some(FilterConfigLayer {
			date_attributes: var(ENV_DATE_ATTRIBUTES).map(|v| split_list(&v)),
			date_format: var(ENV_DATE_FORMAT),
		}),
	})
}

pub(crate) fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn split_list(value: &str) -> Vec<String> {
	value
		.split(',')
		.map(|s| s.trim().to_string())
		.filter(|s| !s.is_empty())
		.collect()
}
