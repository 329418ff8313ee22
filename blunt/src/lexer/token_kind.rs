// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use strum::{EnumIter, IntoStaticStr};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(EnumIter, IntoStaticStr)]
pub enum TokenKind {
    /// `=`, also spelled `with`.
    #[strum(serialize = "TOKEN_EQUALS")]
    Equals,

    #[strum(serialize = "TOKEN_SEMI")]
    Semicolon,

    #[strum(serialize = "TOKEN_LPAREN")]
    LeftParenthesis,

    #[strum(serialize = "TOKEN_RPAREN")]
    RightParenthesis,

    #[strum(serialize = "TOKEN_LBRACE")]
    LeftCurlyBracket,

    #[strum(serialize = "TOKEN_RBRACE")]
    RightCurlyBracket,

    #[strum(serialize = "TOKEN_COMMA")]
    Comma,

    #[strum(serialize = "TOKEN_PLUS")]
    Plus,

    #[strum(serialize = "TOKEN_MINUS")]
    Minus,

    #[strum(serialize = "TOKEN_MUL")]
    Asterisk,

    #[strum(serialize = "TOKEN_DIV")]
    Solidus,

    #[strum(serialize = "TOKEN_STRING")]
    StringLiteral,

    #[strum(serialize = "TOKEN_ID")]
    Identifier,

    #[strum(serialize = "TOKEN_EOF")]
    EndOfFile,

    /// `roll`
    #[strum(serialize = "TOKEN_VARIABLE_DEFINITION")]
    VariableDefinition,

    /// `smoke`
    #[strum(serialize = "TOKEN_RETURN")]
    Return,

    /// `blunt`
    #[strum(serialize = "TOKEN_FUNCTION_DEFINITION")]
    FunctionDefinition,

    #[strum(serialize = "TOKEN_INT")]
    Integer,

    #[strum(serialize = "TOKEN_GT")]
    GreaterThan,

    #[strum(serialize = "TOKEN_LT")]
    LessThan,

    #[strum(serialize = "TOKEN_GTE")]
    GreaterThanOrEqual,

    #[strum(serialize = "TOKEN_LTE")]
    LessThanOrEqual,

    #[strum(serialize = "TOKEN_IF")]
    If,

    #[strum(serialize = "TOKEN_ELSE")]
    Else,

    #[strum(serialize = "TOKEN_ELSEIF")]
    ElseIf,

    #[strum(serialize = "TOKEN_AND")]
    And,

    #[strum(serialize = "TOKEN_OR")]
    Or,

    #[strum(serialize = "TOKEN_NOT")]
    Not,

    /// `==`
    #[strum(serialize = "TOKEN_EQUAL")]
    Equal,

    #[strum(serialize = "TOKEN_LSQUARE")]
    LeftSquareBracket,

    #[strum(serialize = "TOKEN_RSQUARE")]
    RightSquareBracket,

    #[strum(serialize = "TOKEN_DOT")]
    Period,

    /// `light`
    #[strum(serialize = "TOKEN_FOR")]
    For,

    /// `using`
    #[strum(serialize = "TOKEN_FOR_ITER")]
    ForIterator,

    /// `keep`
    #[strum(serialize = "TOKEN_SAVE")]
    Save,
}

impl TokenKind {
    /// The kind of a token that consists of exactly this character.
    #[must_use]
    pub const fn from_character(c: char) -> Option<Self> {
        Some(match c {
            '=' => Self::Equals,
            ';' => Self::Semicolon,
            '(' => Self::LeftParenthesis,
            ')' => Self::RightParenthesis,
            '{' => Self::LeftCurlyBracket,
            '}' => Self::RightCurlyBracket,
            ',' => Self::Comma,
            '+' => Self::Plus,
            '-' => Self::Minus,
            '*' => Self::Asterisk,
            '/' => Self::Solidus,
            '<' => Self::LessThan,
            '>' => Self::GreaterThan,
            '[' => Self::LeftSquareBracket,
            ']' => Self::RightSquareBracket,
            '.' => Self::Period,
            _ => return None,
        })
    }

    /// The name used when dumping the token stream, e.g. `TOKEN_ID`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Equals => "`=`",
            Self::Semicolon => "`;`",
            Self::LeftParenthesis => "`(`",
            Self::RightParenthesis => "`)`",
            Self::LeftCurlyBracket => "`{`",
            Self::RightCurlyBracket => "`}`",
            Self::Comma => "`,`",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Asterisk => "`*`",
            Self::Solidus => "`/`",
            Self::StringLiteral => "a string",
            Self::Identifier => "a name",
            Self::EndOfFile => "the end of the file",
            Self::VariableDefinition => "`roll`",
            Self::Return => "`smoke`",
            Self::FunctionDefinition => "`blunt`",
            Self::Integer => "an integer",
            Self::GreaterThan => "`>`",
            Self::LessThan => "`<`",
            Self::GreaterThanOrEqual => "`>=`",
            Self::LessThanOrEqual => "`<=`",
            Self::If => "`if`",
            Self::Else => "`else`",
            Self::ElseIf => "`elseif`",
            Self::And => "`and`",
            Self::Or => "`or`",
            Self::Not => "`not`",
            Self::Equal => "`==`",
            Self::LeftSquareBracket => "`[`",
            Self::RightSquareBracket => "`]`",
            Self::Period => "`.`",
            Self::For => "`light`",
            Self::ForIterator => "`using`",
            Self::Save => "`keep`",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
