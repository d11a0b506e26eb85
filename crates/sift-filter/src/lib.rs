// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Filter trees over attribute sources.
//!
//! A [`Filter`] is built with the constructors on the type, or parsed from
//! an expression with [`FilterParser`]:
//!
//! ```
//! use sift_filter::Filter;
//! use sift_object::Entity;
//!
//! let user = Entity::new("user")
//! 	.unwrap()
//! 	.with_attribute("name", ["Alice"])
//! 	.unwrap()
//! 	.with_attribute("age", ["30"])
//! 	.unwrap();
//!
//! let filter: Filter = r#"name eq "Alice" and age ge "25""#.parse().unwrap();
//! assert!(filter.accept(&user));
//! ```
//!
//! Trees are consumed either through [`FilterVisitor`] or through a
//! [`FilterTranslator`], which rewrites the tree into a normal form first.

pub mod error;
pub mod filter;
pub mod parser;
pub mod render;
pub mod tag;
pub mod translator;
pub mod visitor;

pub use error::{FilterError, Result, TranslateError};
pub use filter::{
	Comparison, Composite, ContainsAll, Equals, Filter, Junction, Presence, StringFilter,
};
pub use parser::{FilterParser, DEFAULT_DATE_FORMAT};
pub use render::ExpressionRenderer;
pub use tag::FilterTag;
pub use translator::FilterTranslator;
pub use visitor::FilterVisitor;
