// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use super::ast::{CompareOp, Expr, Literal, LogicalOp, Operand};
use winnow::ascii::{space0, space1, Caseless};
use winnow::combinator::alt;
use winnow::error::ContextError;
use winnow::prelude::*;
use winnow::token::{any, one_of, take_while};

pub(super) fn parse_expression(input: &mut &str) -> Result<Expr, ContextError> {
	parse_or_expr(input)
}

fn parse_or_expr(input: &mut &str) -> Result<Expr, ContextError> {
	let mut operands = vec![parse_and_expr(input)?];
	while keyword(input, "or") {
		operands.push(parse_and_expr(input)?);
	}
	Ok(logical(LogicalOp::Or, operands))
}

fn parse_and_expr(input: &mut &str) -> Result<Expr, ContextError> {
	let mut operands = vec![parse_not_expr(input)?];
	while keyword(input, "and") {
		operands.push(parse_not_expr(input)?);
	}
	Ok(logical(LogicalOp::And, operands))
}

fn logical(op: LogicalOp, mut operands: Vec<Expr>) -> Expr {
	if operands.len() == 1 {
		if let Some(only) = operands.pop() {
			return only;
		}
	}
	Expr::Logical { op, operands }
}

/// Consumes a whitespace-delimited keyword, leaving the input untouched when
/// it does not come next.
fn keyword(input: &mut &str, word: &'static str) -> bool {
	let checkpoint = *input;
	if required_space(input).is_err() {
		*input = checkpoint;
		return false;
	}
	let word_result: Result<&str, ContextError> = Caseless(word).parse_next(input);
	if word_result.is_err() || required_space(input).is_err() {
		*input = checkpoint;
		return false;
	}
	true
}

fn parse_not_expr(input: &mut &str) -> Result<Expr, ContextError> {
	let checkpoint = *input;
	let not_result: Result<&str, ContextError> = Caseless("not").parse_next(input);
	if not_result.is_ok() && (required_space(input).is_ok() || input.starts_with('(')) {
		let expr = parse_atom(input)?;
		return Ok(Expr::Not(Box::new(expr)));
	}
	*input = checkpoint;
	parse_atom(input)
}

fn parse_atom(input: &mut &str) -> Result<Expr, ContextError> {
	optional_space(input)?;

	if input.starts_with('(') {
		symbol(input, '(')?;
		optional_space(input)?;
		let expr = parse_expression(input)?;
		optional_space(input)?;
		symbol(input, ')')?;
		return Ok(expr);
	}

	parse_comparison(input)
}

fn parse_comparison(input: &mut &str) -> Result<Expr, ContextError> {
	let attr = parse_attr_path(input)?;
	required_space(input)?;

	let op = parse_compare_op(input)?;
	if op == CompareOp::Pr {
		return Ok(Expr::Compare {
			attr,
			op,
			operand: Operand::None,
		});
	}

	required_space(input)?;
	let operand = if input.starts_with('[') {
		Operand::List(parse_list(input)?)
	} else {
		Operand::Single(parse_literal(input)?)
	};

	Ok(Expr::Compare { attr, op, operand })
}

fn parse_attr_path(input: &mut &str) -> Result<String, ContextError> {
	(
		one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
		take_while(0.., |c: char| {
			c.is_ascii_alphanumeric() || matches!(c, '.' | ':' | '_' | '-' | '$')
		}),
	)
		.take()
		.map(|path: &str| path.to_string())
		.parse_next(input)
}

fn parse_compare_op(input: &mut &str) -> Result<CompareOp, ContextError> {
	alt((
		Caseless("pr").map(|_| CompareOp::Pr),
		Caseless("eq").map(|_| CompareOp::Eq),
		Caseless("ne").map(|_| CompareOp::Ne),
		Caseless("ca").map(|_| CompareOp::Ca),
		Caseless("co").map(|_| CompareOp::Co),
		Caseless("sw").map(|_| CompareOp::Sw),
		Caseless("ew").map(|_| CompareOp::Ew),
		Caseless("gt").map(|_| CompareOp::Gt),
		Caseless("ge").map(|_| CompareOp::Ge),
		Caseless("lt").map(|_| CompareOp::Lt),
		Caseless("le").map(|_| CompareOp::Le),
	))
	.parse_next(input)
}

fn parse_list(input: &mut &str) -> Result<Vec<Literal>, ContextError> {
	symbol(input, '[')?;
	optional_space(input)?;

	let mut items = Vec::new();
	if input.starts_with(']') {
		symbol(input, ']')?;
		return Ok(items);
	}

	loop {
		items.push(parse_literal(input)?);
		optional_space(input)?;
		if input.starts_with(',') {
			symbol(input, ',')?;
			optional_space(input)?;
			continue;
		}
		symbol(input, ']')?;
		return Ok(items);
	}
}

fn parse_literal(input: &mut &str) -> Result<Literal, ContextError> {
	if input.starts_with('"') {
		return parse_quoted(input).map(Literal::Quoted);
	}
	take_while(1.., |c: char| {
		!c.is_whitespace() && !matches!(c, '(' | ')' | '[' | ']' | ',' | '"')
	})
	.map(|token: &str| Literal::Bare(token.to_string()))
	.parse_next(input)
}

fn parse_quoted(input: &mut &str) -> Result<String, ContextError> {
	symbol(input, '"')?;
	let mut value = String::new();
	loop {
		match next_char(input)? {
			'"' => return Ok(value),
			'\\' => value.push(next_char(input)?),
			c => value.push(c),
		}
	}
}

fn next_char(input: &mut &str) -> Result<char, ContextError> {
	any.parse_next(input)
}

fn symbol(input: &mut &str, mut c: char) -> Result<char, ContextError> {
	c.parse_next(input)
}

fn optional_space(input: &mut &str) -> Result<(), ContextError> {
	space0.void().parse_next(input)
}

fn required_space(input: &mut &str) -> Result<(), ContextError> {
	space1.void().parse_next(input)
}
