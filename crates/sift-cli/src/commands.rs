// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use sift_criteria::CriteriaTranslator;
use sift_filter::{Filter, FilterParser, FilterTranslator};
use sift_object::{record_from_json, Attribute, AttributeValue, Entity, Record};
use tracing::{debug, info};

/// Key naming an object's entity type in input files.
pub const TYPE_KEY: &str = "__type";

/// Entity type used when an object carries no [`TYPE_KEY`].
pub const DEFAULT_ENTITY_TYPE: &str = "entity";

fn parse(parser: &FilterParser, expression: &str) -> Result<Filter> {
	parser
		.parse(expression)
		.with_context(|| format!("failed to parse filter: {expression}"))
}

/// Reads a JSON array of objects.
pub fn load_objects(path: &Path) -> Result<Vec<Map<String, Value>>> {
	let content = std::fs::read_to_string(path)
		.with_context(|| format!("failed to read {}", path.display()))?;
	let value: Value = serde_json::from_str(&content)
		.with_context(|| format!("failed to parse JSON in {}", path.display()))?;

	let Value::Array(items) = value else {
		bail!("{} must contain a JSON array of objects", path.display());
	};
	items
		.into_iter()
		.enumerate()
		.map(|(index, item)| match item {
			Value::Object(object) => Ok(object),
			_ => bail!("element {index} of {} is not an object", path.display()),
		})
		.collect()
}

/// Builds an entity, reading values of date attributes as the parser does.
fn entity(parser: &FilterParser, object: &Map<String, Value>) -> Result<Entity> {
	let kind = match object.get(TYPE_KEY) {
		Some(Value::String(kind)) => kind.clone(),
		Some(other) => bail!("{TYPE_KEY} must be a string, found {other}"),
		None => DEFAULT_ENTITY_TYPE.to_string(),
	};

	let mut entity = Entity::new(kind)?;
	for (name, value) in object.iter().filter(|(name, _)| *name != TYPE_KEY) {
		let values = AttributeValue::list_from_json(name, value)?
			.into_iter()
			.map(|value| parser.input_value(name, value))
			.collect::<std::result::Result<Vec<_>, _>>()?;
		entity.put(Attribute::new(name.clone(), values)?);
	}
	Ok(entity)
}

fn record(parser: &FilterParser, object: &Map<String, Value>) -> Result<Record> {
	record_from_json(object)?
		.into_iter()
		.map(|(name, value)| -> Result<(String, AttributeValue)> {
			let value = parser.input_value(&name, value)?;
			Ok((name, value))
		})
		.collect()
}

/// Returns the objects the filter accepts, in input order.
///
/// With `records` set each object is read as a flat record of scalars
/// rather than an entity.
pub fn run_match(
	parser: &FilterParser,
	expression: &str,
	objects: Vec<Map<String, Value>>,
	records: bool,
) -> Result<Vec<Value>> {
	let filter = parse(parser, expression)?;
	let total = objects.len();

	let mut matched = Vec::new();
	for (index, object) in objects.into_iter().enumerate() {
		let accepted = if records {
			let record = record(parser, &object)
				.with_context(|| format!("element {index} is not a valid record"))?;
			filter.accept_record(&record)
		} else {
			let entity = entity(parser, &object)
				.with_context(|| format!("element {index} is not a valid entity"))?;
			filter.accept(&entity)
		};
		debug!(index, accepted, "evaluated object");
		if accepted {
			matched.push(Value::Object(object));
		}
	}

	info!(total, matched = matched.len(), filter = %filter, "match complete");
	Ok(matched)
}

/// Describes the parsed filter: its tree, tag and rendered expression.
pub fn explain(parser: &FilterParser, expression: &str) -> Result<String> {
	let filter = parse(parser, expression)?;
	Ok(format!(
		"{filter:#?}\n\ntag: {}\nexpression: {filter}",
		filter.tag()
	))
}

/// Translates the filter into criteria alternatives, one per line.
pub fn translate(parser: &FilterParser, expression: &str) -> Result<Vec<String>> {
	let filter = parse(parser, expression)?;
	let alternatives = CriteriaTranslator
		.translate(Some(&filter))
		.context("failed to translate filter")?;
	debug!(count = alternatives.len(), "translated filter");
	Ok(alternatives.iter().map(ToString::to_string).collect())
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use std::io::Write;

	fn objects(value: Value) -> Vec<Map<String, Value>> {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "{value}").unwrap();
		load_objects(file.path()).unwrap()
	}

	fn people() -> Vec<Map<String, Value>> {
		objects(json!([
			{"name": "Alice", "age": 30, "groups": ["ops", "dev"]},
			{"name": "Bob", "age": 22},
			{"__type": "service", "name": "backup"}
		]))
	}

	#[test]
	fn test_match_entities() {
		let parser = FilterParser::new();
		let matched = run_match(&parser, "age ge 25 or name sw \"b\"", people(), false).unwrap();
		assert_eq!(
			matched,
			vec![
				json!({"name": "Alice", "age": 30, "groups": ["ops", "dev"]}),
				json!({"__type": "service", "name": "backup"}),
			]
		);
	}

	#[test]
	fn test_match_multi_valued() {
		let parser = FilterParser::new();
		let matched = run_match(&parser, r#"groups ca ["dev", "ops"]"#, people(), false).unwrap();
		assert_eq!(matched.len(), 1);
	}

	#[test]
	fn test_match_records_rejects_arrays() {
		let parser = FilterParser::new();
		assert!(run_match(&parser, "age pr", people(), true).is_err());

		let records = objects(json!([{"age": 30}, {"age": 20}]));
		let matched = run_match(&parser, "age gt 25", records, true).unwrap();
		assert_eq!(matched, vec![json!({"age": 30})]);
	}

	#[test]
	fn test_match_date_attributes() {
		let parser = FilterParser::with_dates(["hired"], "%Y-%m-%d");
		let input = || {
			objects(json!([
				{"name": "Alice", "hired": "2024-03-01"},
				{"name": "Bob", "hired": "2023-11-15"}
			]))
		};

		let matched = run_match(&parser, r#"hired ge "2024-01-01""#, input(), false).unwrap();
		assert_eq!(matched, vec![json!({"name": "Alice", "hired": "2024-03-01"})]);

		let matched = run_match(&parser, r#"hired lt "2024-01-01""#, input(), true).unwrap();
		assert_eq!(matched, vec![json!({"name": "Bob", "hired": "2023-11-15"})]);

		let matched =
			run_match(&parser, r#"hired eq "2023-11-15T00:00:00Z""#, input(), false).unwrap();
		assert_eq!(matched.len(), 1);
	}

	#[test]
	fn test_unreadable_input_date() {
		let parser = FilterParser::with_dates(["hired"], "%Y-%m-%d");
		let input = objects(json!([{"hired": "last spring"}]));
		let err = run_match(&parser, "hired pr", input, false).unwrap_err();
		assert!(err.to_string().contains("element 0"));
	}

	#[test]
	fn test_non_string_type_key() {
		let parser = FilterParser::new();
		let input = objects(json!([{"__type": 1, "name": "x"}]));
		assert!(run_match(&parser, "name pr", input, false).is_err());
	}

	#[test]
	fn test_load_objects_requires_array() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "{{\"name\": \"Alice\"}}").unwrap();
		assert!(load_objects(file.path()).is_err());
	}

	#[test]
	fn test_explain() {
		let output = explain(&FilterParser::new(), "NAME EQ \"Alice\"").unwrap();
		assert!(output.contains("Equals"));
		assert!(output.contains("tag: eq"));
		assert!(output.ends_with("expression: NAME eq \"Alice\""));
	}

	#[test]
	fn test_translate() {
		let lines = translate(&FilterParser::new(), "not (a eq 1 or b lt 2)").unwrap();
		assert_eq!(lines, vec!["AND [a NOT_EQUAL 1] [b GREATER_EQUAL 2]"]);
	}

	#[test]
	fn test_parse_error_has_context() {
		let err = explain(&FilterParser::new(), "name eq").unwrap_err();
		assert!(err.to_string().contains("failed to parse filter"));
	}
}
