// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod ast;
mod lexer;
mod parser;
mod util;

pub use self::{
    ast::*,
    lexer::{Keyword, Lexer, LexerError, LexerErrorKind, Token, TokenKind},
    parser::{parse, ParseError, ParseResult, Parser},
    util::FileLocation,
};
