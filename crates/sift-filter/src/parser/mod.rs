// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Filter expression parser.
//!
//! ```text
//! filter   := or
//! or       := and ( "or" and )*
//! and      := not ( "and" not )*
//! not      := "not" atom | atom
//! atom     := "(" filter ")" | attr "pr" | attr op operand
//! operand  := value | "[" ( value ( "," value )* )? "]"
//! ```
//!
//! `ne` is read as `not eq`. Unquoted values are typed: `true`/`false` become
//! booleans and numeric tokens integers or floats. Everything else, including
//! every quoted value, is a string.

mod ast;
mod grammar;

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use sift_object::{Attribute, AttributeValue};
use tracing::debug;
use winnow::prelude::*;

use crate::error::{FilterError, Result};
use crate::filter::{Filter, Junction};
use ast::{CompareOp, Expr, Literal, LogicalOp, Operand};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses filter expressions into [`Filter`] trees.
#[derive(Debug, Clone)]
pub struct FilterParser {
	date_attributes: Vec<String>,
	date_format: String,
}

impl Default for FilterParser {
	fn default() -> Self {
		Self {
			date_attributes: Vec::new(),
			date_format: DEFAULT_DATE_FORMAT.to_string(),
		}
	}
}

impl FilterParser {
	pub fn new() -> Self {
		Self::default()
	}

	/// A parser that converts quoted values of `attributes` into timestamps.
	///
	/// Values are read with `format` as a date-time, then as a date at
	/// midnight UTC. RFC 3339 timestamps are always accepted.
	pub fn with_dates<I, S>(attributes: I, format: impl Into<String>) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self {
			date_attributes: attributes
				.into_iter()
				.map(|name| name.as_ref().to_lowercase())
				.collect(),
			date_format: format.into(),
		}
	}

	/// Reads a data value the way filter literals are read, so that string
	/// values of date attributes compare against parsed dates.
	pub fn input_value(&self, attr: &str, value: AttributeValue) -> Result<AttributeValue> {
		match value {
			AttributeValue::String(text) if self.is_date_attribute(attr) => self.date(attr, &text),
			other => Ok(other),
		}
	}

	pub fn parse(&self, input: &str) -> Result<Filter> {
		let expr = grammar::parse_expression
			.parse(input.trim())
			.map_err(|e| FilterError::InvalidExpression(e.to_string()))?;
		debug!(?expr, "parsed filter expression");
		self.lower(expr)
	}

	fn lower(&self, expr: Expr) -> Result<Filter> {
		match expr {
			Expr::Logical { op, operands } => {
				let junction = match op {
					LogicalOp::And => Junction::And,
					LogicalOp::Or => Junction::Or,
				};
				let filters = operands
					.into_iter()
					.map(|operand| self.lower(operand))
					.collect::<Result<Vec<_>>>()?;
				Filter::composite(junction, filters)
			}
			Expr::Not(inner) => Ok(Filter::not(self.lower(*inner)?)),
			Expr::Compare { attr, op, operand } => self.lower_compare(attr, op, operand),
		}
	}

	fn lower_compare(&self, attr: String, op: CompareOp, operand: Operand) -> Result<Filter> {
		if op == CompareOp::Pr {
			return Filter::presence(attr);
		}

		let attribute = match operand {
			Operand::None => return Err(invalid(&attr, op, "a value")),
			Operand::Single(literal) => {
				Attribute::single(attr.clone(), self.value(&attr, literal)?)?
			}
			Operand::List(literals) => {
				if !matches!(op, CompareOp::Eq | CompareOp::Ne | CompareOp::Ca) {
					return Err(invalid(&attr, op, "a single value"));
				}
				let values = literals
					.into_iter()
					.map(|literal| self.value(&attr, literal))
					.collect::<Result<Vec<_>>>()?;
				Attribute::new(attr.clone(), values)?
			}
		};

		match op {
			CompareOp::Pr => Filter::presence(attr),
			CompareOp::Eq => Ok(Filter::equal(attribute)),
			CompareOp::Ne => Ok(Filter::not(Filter::equal(attribute))),
			CompareOp::Ca => Ok(Filter::contains_all(attribute)),
			CompareOp::Co => Filter::contains(attribute, false),
			CompareOp::Sw => Filter::starts_with(attribute, false),
			CompareOp::Ew => Filter::ends_with(attribute, false),
			CompareOp::Gt => Filter::greater_than(attribute),
			CompareOp::Ge => Filter::greater_than_or_equal(attribute),
			CompareOp::Lt => Filter::less_than(attribute),
			CompareOp::Le => Filter::less_than_or_equal(attribute),
		}
	}

	fn value(&self, attr: &str, literal: Literal) -> Result<AttributeValue> {
		match literal {
			Literal::Quoted(text) if self.is_date_attribute(attr) => self.date(attr, &text),
			Literal::Quoted(text) => Ok(AttributeValue::String(text)),
			Literal::Bare(token) => Ok(bare_value(token)),
		}
	}

	fn is_date_attribute(&self, attr: &str) -> bool {
		let folded = attr.to_lowercase();
		self.date_attributes.iter().any(|name| *name == folded)
	}

	fn date(&self, attr: &str, text: &str) -> Result<AttributeValue> {
		if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
			return Ok(AttributeValue::Timestamp(ts.with_timezone(&Utc)));
		}
		NaiveDateTime::parse_from_str(text, &self.date_format)
			.ok()
			.or_else(|| {
				NaiveDate::parse_from_str(text, &self.date_format)
					.ok()
					.and_then(|date| date.and_hms_opt(0, 0, 0))
			})
			.map(|naive| AttributeValue::Timestamp(Utc.from_utc_datetime(&naive)))
			.ok_or_else(|| FilterError::InvalidDate {
				name: attr.to_string(),
				value: text.to_string(),
				format: self.date_format.clone(),
			})
	}
}

impl FromStr for Filter {
	type Err = FilterError;

	fn from_str(s: &str) -> Result<Self> {
		FilterParser::new().parse(s)
	}
}

fn bare_value(token: String) -> AttributeValue {
	if token.eq_ignore_ascii_case("true") {
		return AttributeValue::Boolean(true);
	}
	if token.eq_ignore_ascii_case("false") {
		return AttributeValue::Boolean(false);
	}
	if token.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
		if let Ok(i) = token.parse::<i64>() {
			return AttributeValue::Integer(i);
		}
		if let Ok(f) = token.parse::<f64>() {
			return AttributeValue::Float(f);
		}
	}
	AttributeValue::String(token)
}

fn invalid(attr: &str, op: CompareOp, expected: &str) -> FilterError {
	FilterError::InvalidExpression(format!(
		"operator {op:?} on '{attr}' expects {expected}"
	))
}
