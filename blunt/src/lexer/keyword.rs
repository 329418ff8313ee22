// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::IntoEnumIterator;

use super::TokenKind;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Keyword {
    And,
    Blunt,
    Else,
    Elseif,
    If,
    Keep,
    Light,
    Not,
    Or,
    Roll,
    Smoke,
    Using,
    With,
}

impl Keyword {
    pub fn iter_variants() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|x| x.as_ref() == input)
    }

    #[must_use]
    pub const fn token_kind(&self) -> TokenKind {
        match self {
            Self::And => TokenKind::And,
            Self::Blunt => TokenKind::FunctionDefinition,
            Self::Else => TokenKind::Else,
            Self::Elseif => TokenKind::ElseIf,
            Self::If => TokenKind::If,
            Self::Keep => TokenKind::Save,
            Self::Light => TokenKind::For,
            Self::Not => TokenKind::Not,
            Self::Or => TokenKind::Or,
            Self::Roll => TokenKind::VariableDefinition,
            Self::Smoke => TokenKind::Return,
            Self::Using => TokenKind::ForIterator,

            // `roll x with 5` reads the same as `roll x = 5`.
            Self::With => TokenKind::Equals,
        }
    }
}
