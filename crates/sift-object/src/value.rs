// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::error::{ObjectError, Result};

/// A single attribute value.
///
/// Equality and hashing are total: floats compare by bit pattern, so values
/// can be used as hash keys. Ordering is only defined between comparable
/// kinds, see [`AttributeValue::compare`].
#[derive(Debug, Clone)]
pub enum AttributeValue {
	String(String),
	Integer(i64),
	Float(f64),
	Boolean(bool),
	Timestamp(DateTime<Utc>),
	Bytes(Vec<u8>),
}

/// The kind of an [`AttributeValue`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	String,
	Integer,
	Float,
	Boolean,
	Timestamp,
	Bytes,
}

impl ValueKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			ValueKind::String => "string",
			ValueKind::Integer => "integer",
			ValueKind::Float => "float",
			ValueKind::Boolean => "boolean",
			ValueKind::Timestamp => "timestamp",
			ValueKind::Bytes => "bytes",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl AttributeValue {
	pub fn kind(&self) -> ValueKind {
		match self {
			AttributeValue::String(_) => ValueKind::String,
			AttributeValue::Integer(_) => ValueKind::Integer,
			AttributeValue::Float(_) => ValueKind::Float,
			AttributeValue::Boolean(_) => ValueKind::Boolean,
			AttributeValue::Timestamp(_) => ValueKind::Timestamp,
			AttributeValue::Bytes(_) => ValueKind::Bytes,
		}
	}

	/// Whether values of this kind have a natural ordering.
	pub fn is_comparable(&self) -> bool {
		!matches!(self, AttributeValue::Bytes(_))
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			AttributeValue::String(s) => Some(s),
			_ => None,
		}
	}

	/// Natural ordering of `self` relative to `other`.
	///
	/// Same-kind comparable values order naturally, integers and floats order
	/// numerically against each other. Every other pairing has no ordering.
	pub fn compare(&self, other: &AttributeValue) -> Option<Ordering> {
		use AttributeValue::*;

		match (self, other) {
			(String(a), String(b)) => Some(a.cmp(b)),
			(Integer(a), Integer(b)) => Some(a.cmp(b)),
			(Float(a), Float(b)) => a.partial_cmp(b),
			(Integer(a), Float(b)) => (*a as f64).partial_cmp(b),
			(Float(a), Integer(b)) => a.partial_cmp(&(*b as f64)),
			(Boolean(a), Boolean(b)) => Some(a.cmp(b)),
			(Timestamp(a), Timestamp(b)) => Some(a.cmp(b)),
			_ => None,
		}
	}

	/// Converts a JSON scalar into a value.
	///
	/// `field` only feeds the error message.
	pub fn from_json(field: &str, value: &Value) -> Result<Self> {
		match value {
			Value::String(s) => Ok(AttributeValue::String(s.clone())),
			Value::Bool(b) => Ok(AttributeValue::Boolean(*b)),
			Value::Number(n) => match n.as_i64() {
				Some(i) => Ok(AttributeValue::Integer(i)),
				None => n
					.as_f64()
					.map(AttributeValue::Float)
					.ok_or_else(|| unsupported(field, "number")),
			},
			Value::Null => Err(unsupported(field, "null")),
			Value::Array(_) => Err(unsupported(field, "array")),
			Value::Object(_) => Err(unsupported(field, "object")),
		}
	}

	/// Converts a JSON scalar or flat array into a value list.
	pub fn list_from_json(field: &str, value: &Value) -> Result<Vec<Self>> {
		match value {
			Value::Array(items) => items
				.iter()
				.map(|item| AttributeValue::from_json(field, item))
				.collect(),
			other => Ok(vec![AttributeValue::from_json(field, other)?]),
		}
	}
}

fn unsupported(field: &str, found: &'static str) -> ObjectError {
	ObjectError::UnsupportedJson {
		field: field.to_string(),
		found,
	}
}

impl PartialEq for AttributeValue {
	fn eq(&self, other: &Self) -> bool {
		use AttributeValue::*;

		match (self, other) {
			(String(a), String(b)) => a == b,
			(Integer(a), Integer(b)) => a == b,
			(Float(a), Float(b)) => a.to_bits() == b.to_bits(),
			(Boolean(a), Boolean(b)) => a == b,
			(Timestamp(a), Timestamp(b)) => a == b,
			(Bytes(a), Bytes(b)) => a == b,
			_ => false,
		}
	}
}

impl Eq for AttributeValue {}

impl Hash for AttributeValue {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.kind().hash(state);
		match self {
			AttributeValue::String(s) => s.hash(state),
			AttributeValue::Integer(i) => i.hash(state),
			AttributeValue::Float(f) => f.to_bits().hash(state),
			AttributeValue::Boolean(b) => b.hash(state),
			AttributeValue::Timestamp(t) => t.hash(state),
			AttributeValue::Bytes(b) => b.hash(state),
		}
	}
}

impl fmt::Display for AttributeValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AttributeValue::String(s) => f.write_str(s),
			AttributeValue::Integer(i) => write!(f, "{i}"),
			AttributeValue::Float(v) => write!(f, "{v:?}"),
			AttributeValue::Boolean(b) => write!(f, "{b}"),
			AttributeValue::Timestamp(t) => {
				f.write_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
			}
			AttributeValue::Bytes(b) => f.write_str(&hex::encode(b)),
		}
	}
}

impl From<&str> for AttributeValue {
	fn from(value: &str) -> Self {
		AttributeValue::String(value.to_string())
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> Self {
		AttributeValue::String(value)
	}
}

impl From<i64> for AttributeValue {
	fn from(value: i64) -> Self {
		AttributeValue::Integer(value)
	}
}

impl From<i32> for AttributeValue {
	fn from(value: i32) -> Self {
		AttributeValue::Integer(i64::from(value))
	}
}

impl From<f64> for AttributeValue {
	fn from(value: f64) -> Self {
		AttributeValue::Float(value)
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> Self {
		AttributeValue::Boolean(value)
	}
}

impl From<DateTime<Utc>> for AttributeValue {
	fn from(value: DateTime<Utc>) -> Self {
		AttributeValue::Timestamp(value)
	}
}

impl From<Vec<u8>> for AttributeValue {
	fn from(value: Vec<u8>) -> Self {
		AttributeValue::Bytes(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;
	use proptest::prelude::*;
	use serde_json::json;

	#[test]
	fn test_compare_same_kind() {
		assert_eq!(
			AttributeValue::from("brown").compare(&AttributeValue::from("auburn")),
			Some(Ordering::Greater)
		);
		assert_eq!(
			AttributeValue::from(99).compare(&AttributeValue::from(123)),
			Some(Ordering::Less)
		);
		// lexical, not arithmetic
		assert_eq!(
			AttributeValue::from("99").compare(&AttributeValue::from("123")),
			Some(Ordering::Greater)
		);
	}

	#[test]
	fn test_compare_mixed_numeric() {
		assert_eq!(
			AttributeValue::from(3).compare(&AttributeValue::from(2.5)),
			Some(Ordering::Greater)
		);
		assert_eq!(
			AttributeValue::from(2.0).compare(&AttributeValue::from(2)),
			Some(Ordering::Equal)
		);
	}

	#[test]
	fn test_compare_kind_mismatch_has_no_ordering() {
		assert_eq!(
			AttributeValue::from("30").compare(&AttributeValue::from(30)),
			None
		);
		assert_eq!(
			AttributeValue::from(vec![1u8]).compare(&AttributeValue::from(vec![1u8])),
			None
		);
	}

	#[test]
	fn test_timestamps_order() {
		let early = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
		let late = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
		assert_eq!(
			AttributeValue::from(early).compare(&AttributeValue::from(late)),
			Some(Ordering::Less)
		);
	}

	#[test]
	fn test_equality_is_kind_strict() {
		assert_ne!(AttributeValue::from(30), AttributeValue::from(30.0));
		assert_ne!(AttributeValue::from("true"), AttributeValue::from(true));
		assert_eq!(AttributeValue::from(f64::NAN), AttributeValue::from(f64::NAN));
	}

	#[test]
	fn test_bytes_not_comparable() {
		assert!(!AttributeValue::from(vec![0u8, 1]).is_comparable());
		assert!(AttributeValue::from("x").is_comparable());
	}

	#[test]
	fn test_display() {
		assert_eq!(AttributeValue::from("Alice").to_string(), "Alice");
		assert_eq!(AttributeValue::from(2.0).to_string(), "2.0");
		assert_eq!(AttributeValue::from(vec![0xde, 0xad]).to_string(), "dead");
		let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
		assert_eq!(AttributeValue::from(ts).to_string(), "2024-05-01T12:00:00Z");
	}

	#[test]
	fn test_from_json_scalars() {
		assert_eq!(
			AttributeValue::from_json("a", &json!("x")).unwrap(),
			AttributeValue::from("x")
		);
		assert_eq!(
			AttributeValue::from_json("a", &json!(42)).unwrap(),
			AttributeValue::from(42)
		);
		assert_eq!(
			AttributeValue::from_json("a", &json!(1.5)).unwrap(),
			AttributeValue::from(1.5)
		);
		assert_eq!(
			AttributeValue::from_json("a", &json!(false)).unwrap(),
			AttributeValue::from(false)
		);
	}

	#[test]
	fn test_from_json_rejects_null_and_objects() {
		let err = AttributeValue::from_json("manager", &json!(null)).unwrap_err();
		assert_eq!(
			err,
			ObjectError::UnsupportedJson {
				field: "manager".to_string(),
				found: "null"
			}
		);
		assert!(AttributeValue::from_json("a", &json!({"b": 1})).is_err());
		assert!(AttributeValue::list_from_json("a", &json!([[1]])).is_err());
	}

	#[test]
	fn test_list_from_json() {
		let values = AttributeValue::list_from_json("groups", &json!(["admins", "ops"])).unwrap();
		assert_eq!(values, vec![AttributeValue::from("admins"), AttributeValue::from("ops")]);

		let single = AttributeValue::list_from_json("age", &json!(30)).unwrap();
		assert_eq!(single, vec![AttributeValue::from(30)]);
	}

	proptest! {
		/// Integer ordering agrees with the primitive ordering.
		#[test]
		fn integer_compare_matches_primitive(a in any::<i64>(), b in any::<i64>()) {
			prop_assert_eq!(
				AttributeValue::from(a).compare(&AttributeValue::from(b)),
				Some(a.cmp(&b))
			);
		}

		/// Compare is antisymmetric for strings.
		#[test]
		fn string_compare_antisymmetric(a in "[a-z]{0,8}", b in "[a-z]{0,8}") {
			let lhs = AttributeValue::from(a.as_str());
			let rhs = AttributeValue::from(b.as_str());
			prop_assert_eq!(
				lhs.compare(&rhs).map(Ordering::reverse),
				rhs.compare(&lhs)
			);
		}
	}
}
