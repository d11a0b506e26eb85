// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Filter expression parsing configuration.

use serde::Deserialize;
use sift_filter::{FilterParser, DEFAULT_DATE_FORMAT};

use crate::error::ConfigError;

/// Filter configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
	/// Attributes whose quoted values are read as dates.
	pub date_attributes: Vec<String>,
	/// chrono format string for those values.
	pub date_format: String,
}

impl Default for FilterConfig {
	fn default() -> Self {
		Self {
			date_attributes: Vec::new(),
			date_format: DEFAULT_DATE_FORMAT.to_string(),
		}
	}
}

impl FilterConfig {
	pub fn parser(&self) -> FilterParser {
		FilterParser::with_dates(&self.date_attributes, self.date_format.clone())
	}

	pub(crate) fn validate(&self) -> Result<(), ConfigError> {
		if self.date_format.trim().is_empty() {
			return Err(ConfigError::Validation(
				"filter.date_format must not be empty".to_string(),
			));
		}
		if self.date_attributes.iter().any(|name| name.trim().is_empty()) {
			return Err(ConfigError::Validation(
				"filter.date_attributes must not contain blank names".to_string(),
			));
		}
		Ok(())
	}
}

/// Filter configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfigLayer {
	#[serde(default)]
	pub date_attributes: Option<Vec<String>>,
	#[serde(default)]
	pub date_format: Option<String>,
}

impl FilterConfigLayer {
	pub fn merge(&mut self, other: FilterConfigLayer) {
		if other.date_attributes.is_some() {
			self.date_attributes = other.date_attributes;
		}
		if other.date_format.is_some() {
			self.date_format = other.date_format;
		}
	}

	pub fn finalize(self) -> FilterConfig {
		FilterConfig {
			date_attributes: self.date_attributes.unwrap_or_default(),
			date_format: self
				.date_format
				.unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = FilterConfigLayer::default().finalize();
		assert!(config.date_attributes.is_empty());
		assert_eq!(config.date_format, "%Y-%m-%d");
		assert!(config.validate().is_ok());
	}

	#[test]
	fn test_blank_format_rejected() {
		let config = FilterConfig {
			date_attributes: Vec::new(),
			date_format: " ".to_string(),
		};
		assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
	}

	#[test]
	fn test_blank_attribute_rejected() {
		let config = FilterConfig {
			date_attributes: vec!["hired".to_string(), String::new()],
			date_format: DEFAULT_DATE_FORMAT.to_string(),
		};
		assert!(config.validate().is_err());
	}

	#[test]
	fn test_parser_converts_dates() {
		let config = FilterConfig {
			date_attributes: vec!["hired".to_string()],
			date_format: DEFAULT_DATE_FORMAT.to_string(),
		};
		let filter = config.parser().parse(r#"hired ge "2024-01-31""#).unwrap();
		assert_eq!(filter.to_string(), r#"hired ge "2024-01-31T00:00:00Z""#);
	}
}
