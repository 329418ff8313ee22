// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use strum::AsRefStr;

use crate::{Node, TokenKind};

#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// `name = value`, `name.index = value` or `name[index] = value`.
///
/// An assignment through a dot keeps the index inside the name (`x.1`, `x.i`), so `index` is only
/// set by the bracket form.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableAssignment {
    pub name: String,
    pub index: Option<Box<Node>>,
    pub value: Box<Node>,
}

impl VariableAssignment {
    /// Splits a dotted target like `x.1` into `("x", "1")`.
    #[must_use]
    pub fn dotted_target(&self) -> Option<(&str, &str)> {
        self.name.split_once('.')
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryOp {
    pub operator: BinaryOperator,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, AsRefStr)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    And,
    Or,
    Equal,
}

impl BinaryOperator {
    #[must_use]
    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Subtract,
            TokenKind::Asterisk => Self::Multiply,
            TokenKind::Solidus => Self::Divide,
            TokenKind::GreaterThan => Self::GreaterThan,
            TokenKind::LessThan => Self::LessThan,
            TokenKind::GreaterThanOrEqual => Self::GreaterThanOrEqual,
            TokenKind::LessThanOrEqual => Self::LessThanOrEqual,
            TokenKind::And => Self::And,
            TokenKind::Or => Self::Or,
            TokenKind::Equal => Self::Equal,
            _ => return None,
        })
    }

    /// Binding power, higher binds tighter. `==` binds tighter than arithmetic.
    ///
    /// `not` (6) sits between `*` and `==` but is a prefix of a single factor, so it never appears here.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::GreaterThan | Self::LessThan | Self::GreaterThanOrEqual | Self::LessThanOrEqual => 3,
            Self::Add | Self::Subtract => 4,
            Self::Multiply | Self::Divide => 5,
            Self::Equal => 7,
        }
    }

    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThanOrEqual => "<=",
            Self::And => "and",
            Self::Or => "or",
            Self::Equal => "==",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `name.index`: element access, last element (`name.`) or a method call on a runtime function
/// (`name.method(...)`).
#[derive(Clone, Debug, PartialEq)]
pub struct DotExpression {
    pub variable: String,
    pub index: Box<Node>,
}

/// `name.first.last`: a slice, end exclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct DotDotExpression {
    pub variable: String,
    pub first: Box<Node>,
    pub last: Box<Node>,
}
