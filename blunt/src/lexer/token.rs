// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use crate::FileLocation;

use super::TokenKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: FileLocation,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, location: FileLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    /// The value of an integer token: its leading run of digits.
    #[must_use]
    pub fn integer_value(&self) -> Option<i64> {
        if self.kind != TokenKind::Integer {
            return None;
        }

        leading_integer(&self.text)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfFile => f.write_str("the end of the file"),
            TokenKind::StringLiteral => write!(f, "\"{}\"", self.text),
            _ => write!(f, "`{}`", self.text),
        }
    }
}

/// Parses the digits at the start of `text`, returning `None` when there are none or they overflow.
pub(crate) fn leading_integer(text: &str) -> Option<i64> {
    let end = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    text[..end].parse().ok()
}
