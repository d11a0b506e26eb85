// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::attribute::{fold, Attribute};
use crate::error::{ObjectError, Result};
use crate::value::AttributeValue;

/// The raw, single-valued, string-keyed map form filters can evaluate.
pub type Record = BTreeMap<String, AttributeValue>;

/// Lookup contract for anything filters evaluate against.
pub trait AttributeSource {
	/// Returns the attribute called `name`, if present.
	fn get(&self, name: &str) -> Option<&Attribute>;
}

impl<T: AttributeSource + ?Sized> AttributeSource for &T {
	fn get(&self, name: &str) -> Option<&Attribute> {
		(**self).get(name)
	}
}

/// A typed bag of attributes keyed case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
	kind: String,
	attributes: BTreeMap<String, Attribute>,
}

impl Entity {
	pub fn new(kind: impl Into<String>) -> Result<Self> {
		let kind = kind.into();
		if kind.trim().is_empty() {
			return Err(ObjectError::BlankType);
		}
		Ok(Self {
			kind,
			attributes: BTreeMap::new(),
		})
	}

	/// Builds an entity from a JSON object whose fields hold scalars or flat
	/// arrays of scalars.
	pub fn from_json(kind: impl Into<String>, object: &Map<String, Value>) -> Result<Self> {
		let mut entity = Self::new(kind)?;
		for (name, value) in object {
			let values = AttributeValue::list_from_json(name, value)?;
			entity.put(Attribute::new(name.clone(), values)?);
		}
		Ok(entity)
	}

	pub fn kind(&self) -> &str {
		&self.kind
	}

	/// Adds or replaces an attribute, returning the replaced one.
	pub fn put(&mut self, attribute: Attribute) -> Option<Attribute> {
		self.attributes.insert(fold(attribute.name()), attribute)
	}

	pub fn with_attribute<I, V>(mut self, name: impl Into<String>, values: I) -> Result<Self>
	where
		I: IntoIterator<Item = V>,
		V: Into<AttributeValue>,
	{
		self.put(Attribute::new(name, values)?);
		Ok(self)
	}

	pub fn remove(&mut self, name: &str) -> Option<Attribute> {
		self.attributes.remove(&fold(name))
	}

	pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
		self.attributes.values()
	}

	pub fn len(&self) -> usize {
		self.attributes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.attributes.is_empty()
	}
}

impl AttributeSource for Entity {
	fn get(&self, name: &str) -> Option<&Attribute> {
		self.attributes.get(&fold(name))
	}
}

/// Builds a [`Record`] from a JSON object of scalar fields.
pub fn record_from_json(object: &Map<String, Value>) -> Result<Record> {
	object
		.iter()
		.map(|(name, value)| Ok((name.clone(), AttributeValue::from_json(name, value)?)))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn object(value: Value) -> Map<String, Value> {
		match value {
			Value::Object(map) => map,
			_ => panic!("expected a JSON object"),
		}
	}

	#[test]
	fn test_blank_type_rejected() {
		assert_eq!(Entity::new(" ").unwrap_err(), ObjectError::BlankType);
	}

	#[test]
	fn test_lookup_ignores_case() {
		let entity = Entity::new("user")
			.unwrap()
			.with_attribute("userName", ["bjensen"])
			.unwrap();
		assert_eq!(entity.get("USERNAME").unwrap().name(), "userName");
		assert!(entity.get("email").is_none());
	}

	#[test]
	fn test_put_replaces_same_name() {
		let mut entity = Entity::new("user").unwrap();
		entity.put(Attribute::single("mail", "a@example.com").unwrap());
		let replaced = entity.put(Attribute::single("MAIL", "b@example.com").unwrap());
		assert!(replaced.is_some());
		assert_eq!(entity.len(), 1);
		assert_eq!(
			entity.get("mail").unwrap().values(),
			&[AttributeValue::from("b@example.com")]
		);
	}

	#[test]
	fn test_remove() {
		let mut entity = Entity::new("user")
			.unwrap()
			.with_attribute("title", ["Engineer"])
			.unwrap();
		assert!(entity.remove("Title").is_some());
		assert!(entity.is_empty());
	}

	#[test]
	fn test_from_json() {
		let entity = Entity::from_json(
			"user",
			&object(json!({"name": "Alice", "groups": ["admins", "ops"], "age": 30})),
		)
		.unwrap();
		assert_eq!(entity.kind(), "user");
		assert_eq!(entity.get("groups").unwrap().values().len(), 2);
		assert_eq!(
			entity.get("age").unwrap().values(),
			&[AttributeValue::from(30)]
		);
	}

	#[test]
	fn test_record_from_json_rejects_arrays() {
		let err = record_from_json(&object(json!({"groups": ["a"]}))).unwrap_err();
		assert_eq!(
			err,
			ObjectError::UnsupportedJson {
				field: "groups".to_string(),
				found: "array"
			}
		);
	}

	#[test]
	fn test_record_from_json() {
		let record = record_from_json(&object(json!({"name": "Alice", "active": true}))).unwrap();
		assert_eq!(record.get("active"), Some(&AttributeValue::from(true)));
	}
}
