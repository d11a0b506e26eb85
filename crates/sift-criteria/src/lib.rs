// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Flat criteria: a list of `(name, value, operator)` tests under a single
//! `AND`, `OR` or `NOT` conjunction.
//!
//! Criteria are built once through [`Criteria::builder`] and read through
//! [`Criteria::criterions`]. [`CriteriaTranslator`] derives criteria from a
//! filter tree.

pub mod criteria;
pub mod criterion;
pub mod error;
pub mod operator;
pub mod translator;

pub use criteria::{Criteria, CriteriaBuilder};
pub use criterion::Criterion;
pub use error::{CriteriaError, Result};
pub use operator::{Conjunction, Operator};
pub use translator::CriteriaTranslator;
