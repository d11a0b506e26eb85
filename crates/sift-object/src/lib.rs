// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Object model consumed by sift filters and criteria.
//!
//! - [`AttributeValue`]: a single typed value
//! - [`Attribute`]: a named, ordered, multi-valued attribute
//! - [`AttributeSource`]: the lookup contract filters evaluate against
//! - [`Entity`]: the provided [`AttributeSource`], keyed case-insensitively
//! - [`Record`]: the raw single-valued, string-keyed map form
//!
//! # Example
//!
//! ```
//! use sift_object::{AttributeSource, Entity};
//!
//! let entity = Entity::new("user")
//! 	.unwrap()
//! 	.with_attribute("name", ["Alice"])
//! 	.unwrap();
//!
//! assert!(entity.get("NAME").is_some());
//! ```

pub mod attribute;
pub mod entity;
pub mod error;
pub mod value;

pub use attribute::Attribute;
pub use entity::{record_from_json, AttributeSource, Entity, Record};
pub use error::{ObjectError, Result};
pub use value::{AttributeValue, ValueKind};
