// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
	Pr,
	Eq,
	Ne,
	Ca,
	Co,
	Sw,
	Ew,
	Gt,
	Ge,
	Lt,
	Le,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
	And,
	Or,
}

/// A value token as written, before it is typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
	Quoted(String),
	Bare(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
	None,
	Single(Literal),
	List(Vec<Literal>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
	Compare {
		attr: String,
		op: CompareOp,
		operand: Operand,
	},
	Logical {
		op: LogicalOp,
		operands: Vec<Expr>,
	},
	Not(Box<Expr>),
}
