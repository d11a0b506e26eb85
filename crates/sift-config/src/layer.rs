// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration as produced by a single source.

use serde::Deserialize;

use crate::sections::{FilterConfigLayer, LoggingConfigLayer};

/// One source's view of the configuration. Absent sections and fields leave
/// lower-precedence values in place when merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiftConfigLayer {
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
	#[serde(default)]
	pub filter: Option<FilterConfigLayer>,
}

impl SiftConfigLayer {
	pub fn merge(&mut self, other: SiftConfigLayer) {
		if let Some(logging) = other.logging {
			self.logging.get_or_insert_with(Default::default).merge(logging);
		}
		if let Some(filter) = other.filter {
			self.filter.get_or_insert_with(Default::default).merge(filter);
		}
	}
}
