// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Renders filters back into the expression syntax accepted by
//! [`FilterParser`](crate::parser::FilterParser).

use sift_object::{Attribute, AttributeValue};

use crate::filter::{Comparison, Composite, ContainsAll, Equals, Filter, Presence, StringFilter};
use crate::tag::FilterTag;
use crate::visitor::FilterVisitor;

/// Visitor producing a filter expression string.
///
/// Composite children of a composite are parenthesized so the rendered text
/// parses back into the same tree, with three exceptions:
///
/// - timestamps render as quoted RFC 3339 and only read back as timestamps
///   for date attributes of the parser, see
///   [`FilterParser::with_dates`](crate::parser::FilterParser::with_dates);
/// - bytes render as a quoted hex string and read back as a string;
/// - non-finite floats render as `NaN`, `inf` or `-inf` and read back as
///   strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionRenderer;

impl ExpressionRenderer {
	pub fn render(filter: &Filter) -> String {
		filter.accept_visitor(&ExpressionRenderer, ())
	}

	fn junction(&self, keyword: &str, filter: &Composite) -> String {
		filter
			.filters()
			.iter()
			.map(|child| match child {
				Filter::And(_) | Filter::Or(_) => format!("({})", child.accept_visitor(self, ())),
				_ => child.accept_visitor(self, ()),
			})
			.collect::<Vec<_>>()
			.join(format!(" {keyword} ").as_str())
	}

	fn string_filter(&self, tag: FilterTag, filter: &StringFilter) -> String {
		format!("{} {tag} {}", filter.name(), quote(filter.value()))
	}

	fn comparison(&self, tag: FilterTag, filter: &Comparison) -> String {
		format!("{} {tag} {}", filter.name(), literal(filter.value()))
	}
}

impl FilterVisitor<String, ()> for ExpressionRenderer {
	fn and(&self, _: (), filter: &Composite) -> String {
		self.junction("and", filter)
	}

	fn or(&self, _: (), filter: &Composite) -> String {
		self.junction("or", filter)
	}

	fn not(&self, _: (), inner: &Filter) -> String {
		format!("not ({})", inner.accept_visitor(self, ()))
	}

	fn presence(&self, _: (), filter: &Presence) -> String {
		format!("{} pr", filter.name())
	}

	fn equal(&self, _: (), filter: &Equals) -> String {
		let attribute = filter.attribute();
		match attribute.values() {
			[value] => format!("{} eq {}", attribute.name(), literal(value)),
			_ => format!("{} eq {}", attribute.name(), list(attribute)),
		}
	}

	fn contains_all(&self, _: (), filter: &ContainsAll) -> String {
		let attribute = filter.attribute();
		format!("{} ca {}", attribute.name(), list(attribute))
	}

	fn contains(&self, _: (), filter: &StringFilter) -> String {
		self.string_filter(FilterTag::Contains, filter)
	}

	fn starts_with(&self, _: (), filter: &StringFilter) -> String {
		self.string_filter(FilterTag::StartsWith, filter)
	}

	fn ends_with(&self, _: (), filter: &StringFilter) -> String {
		self.string_filter(FilterTag::EndsWith, filter)
	}

	fn greater_than(&self, _: (), filter: &Comparison) -> String {
		self.comparison(FilterTag::GreaterThan, filter)
	}

	fn greater_than_or_equal(&self, _: (), filter: &Comparison) -> String {
		self.comparison(FilterTag::GreaterOrEqual, filter)
	}

	fn less_than(&self, _: (), filter: &Comparison) -> String {
		self.comparison(FilterTag::LessThan, filter)
	}

	fn less_than_or_equal(&self, _: (), filter: &Comparison) -> String {
		self.comparison(FilterTag::LessOrEqual, filter)
	}
}

fn literal(value: &AttributeValue) -> String {
	match value {
		AttributeValue::Integer(_) | AttributeValue::Float(_) | AttributeValue::Boolean(_) => {
			value.to_string()
		}
		other => quote(&other.to_string()),
	}
}

fn list(attribute: &Attribute) -> String {
	let items: Vec<String> = attribute.values().iter().map(literal).collect();
	format!("[{}]", items.join(", "))
}

fn quote(value: &str) -> String {
	let mut out = String::with_capacity(value.len() + 2);
	out.push('"');
	for c in value.chars() {
		if c == '"' || c == '\\' {
			out.push('\\');
		}
		out.push(c);
	}
	out.push('"');
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{TimeZone, Utc};

	fn attr(name: &str, value: impl Into<AttributeValue>) -> Attribute {
		Attribute::single(name, value).unwrap()
	}

	#[test]
	fn test_leaves() {
		assert_eq!(ExpressionRenderer::render(&Filter::presence("mail").unwrap()), "mail pr");
		assert_eq!(
			ExpressionRenderer::render(&Filter::starts_with(attr("cn", "Al"), false).unwrap()),
			r#"cn sw "Al""#
		);
		assert_eq!(
			ExpressionRenderer::render(&Filter::less_than(attr("score", 1.5)).unwrap()),
			"score lt 1.5"
		);
		assert_eq!(
			ExpressionRenderer::render(&Filter::equal(attr("active", true))),
			"active eq true"
		);
	}

	#[test]
	fn test_lists() {
		let groups = Attribute::new("groups", ["a", "b"]).unwrap();
		assert_eq!(
			ExpressionRenderer::render(&Filter::contains_all(groups.clone())),
			r#"groups ca ["a", "b"]"#
		);
		assert_eq!(
			ExpressionRenderer::render(&Filter::equal(groups)),
			r#"groups eq ["a", "b"]"#
		);
		assert_eq!(
			ExpressionRenderer::render(&Filter::contains_all(attr("groups", "a"))),
			r#"groups ca ["a"]"#
		);
		assert_eq!(
			ExpressionRenderer::render(&Filter::equal(Attribute::empty("groups").unwrap())),
			"groups eq []"
		);
	}

	#[test]
	fn test_quoting() {
		let filter = Filter::equal(attr("title", r#"say "hi" \o/"#));
		assert_eq!(
			ExpressionRenderer::render(&filter),
			r#"title eq "say \"hi\" \\o/""#
		);
	}

	#[test]
	fn test_timestamp_rendered_quoted() {
		let ts = Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap();
		let filter = Filter::greater_than(attr("hired", ts)).unwrap();
		assert_eq!(
			ExpressionRenderer::render(&filter),
			r#"hired gt "2024-02-29T00:00:00Z""#
		);
	}

	#[test]
	fn test_nesting_parenthesized() {
		let a = Filter::presence("a").unwrap();
		let b = Filter::presence("b").unwrap();
		let c = Filter::presence("c").unwrap();
		let tree = Filter::and(Filter::or(a.clone(), b.clone()), Filter::not(c.clone()));
		assert_eq!(ExpressionRenderer::render(&tree), "(a pr or b pr) and not (c pr)");

		let flat = Filter::or_all(vec![a, b, c]).unwrap();
		assert_eq!(ExpressionRenderer::render(&flat), "a pr or b pr or c pr");
	}
}
