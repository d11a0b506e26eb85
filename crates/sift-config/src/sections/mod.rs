// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod filter;
mod logging;

pub use filter::{FilterConfig, FilterConfigLayer};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};
