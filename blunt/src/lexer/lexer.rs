// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::str::CharIndices;

use strum::AsRefStr;
use thiserror::Error;

use crate::FileLocation;

use super::{token::leading_integer, Keyword, Token, TokenKind};

/// Turns source text into tokens, one at a time.
///
/// The lexer only moves forward: to read the same text again, construct a new one.
pub struct Lexer<'source_code> {
    input: &'source_code str,
    chars: CharIndices<'source_code>,

    current: Option<(FileLocation, char)>,
    line: usize,
    column: usize,
    finished: bool,
}

impl<'source_code> Lexer<'source_code> {
    pub fn new(input: &'source_code str) -> Self {
        Self {
            input,
            chars: input.char_indices(),
            current: None,
            line: 0,
            column: 0,
            finished: false,
        }
    }

    /// Produces the next token. At the end of the input this keeps returning `EndOfFile` tokens.
    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        self.skip_whitespace_and_comments();

        let begin = self.current_location();
        let Some(ch) = self.peek_char() else {
            return Ok(Token::new(TokenKind::EndOfFile, "", begin));
        };

        let token = match ch {
            '"' | '\'' => return self.consume_string(),

            c if is_identifier_char(c) => return self.consume_word(),

            '=' => self.consume_single_or_double_char_token(TokenKind::Equals, TokenKind::Equal),
            '<' => self.consume_single_or_double_char_token(TokenKind::LessThan, TokenKind::LessThanOrEqual),
            '>' => self.consume_single_or_double_char_token(TokenKind::GreaterThan, TokenKind::GreaterThanOrEqual),

            c => match TokenKind::from_character(c) {
                Some(kind) => self.consume_single_char_token(kind),
                None => {
                    self.consume_char();
                    return Err(LexerError {
                        location: begin,
                        kind: LexerErrorKind::UnrecognizedCharacter { character: c },
                    });
                }
            }
        };

        log::trace!("Lexed {}: {}", token.kind.name(), token.text);
        Ok(token)
    }

    #[must_use]
    fn consume_single_char_token(&mut self, kind: TokenKind) -> Token {
        let begin = self.current_location();

        self.consume_char();

        self.token_from(kind, begin)
    }

    /// Handles the characters that become a different token when followed by `=`.
    #[must_use]
    fn consume_single_or_double_char_token(&mut self, single: TokenKind, double: TokenKind) -> Token {
        let begin = self.current_location();
        self.consume_char();

        let kind = if self.peek_char() == Some('=') {
            self.consume_char();
            double
        } else {
            single
        };

        self.token_from(kind, begin)
    }

    /// A string opens with `"` or `'`, but only a `"` closes it.
    fn consume_string(&mut self) -> Result<Token, LexerError> {
        let begin = self.current_location();
        self.consume_char();

        let unterminated = LexerError {
            location: begin,
            kind: LexerErrorKind::UnterminatedString,
        };

        let mut str = String::new();

        loop {
            let Some(c) = self.next_char() else {
                return Err(unterminated);
            };

            match c {
                '"' => break,

                '\\' => {
                    let Some(escaped) = self.next_char() else {
                        return Err(unterminated);
                    };

                    str.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        other => other,
                    });
                }

                c => str.push(c),
            }
        }

        Ok(Token::new(TokenKind::StringLiteral, str, begin))
    }

    fn consume_word(&mut self) -> Result<Token, LexerError> {
        let begin = self.current_location();

        while let Some(c) = self.peek_char() {
            if !is_identifier_char(c) {
                break;
            }

            self.consume_char();
        }

        let end = self.current_location();
        let word = &self.input[begin.offset()..end.offset()];

        if word.starts_with(|c: char| c.is_ascii_digit()) {
            let Some(value) = leading_integer(word) else {
                return Err(LexerError {
                    location: begin,
                    kind: LexerErrorKind::InvalidNumber,
                });
            };

            // `0abc` is a name, `0` and `12abc` are integers.
            if value != 0 || word == "0" {
                return Ok(Token::new(TokenKind::Integer, word, begin));
            }
        }

        let kind = match Keyword::parse(word) {
            Some(keyword) => keyword.token_kind(),
            None => TokenKind::Identifier,
        };

        Ok(Token::new(kind, word, begin))
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(c) = self.peek_char() {
            if c == '#' {
                self.consume_until_end_of_line();
                continue;
            }

            if !matches!(c, ' ' | '\n' | '\t' | '\r') {
                break;
            }

            self.consume_char();
        }
    }

    fn consume_until_end_of_line(&mut self) {
        while let Some(c) = self.next_char() {
            if c == '\n' {
                break;
            }
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        if let Some((_, c)) = self.current {
            return Some(c);
        }

        self.current = self.chars.next()
            .map(|(offset, char)| {
                let location = FileLocation::new(offset, self.line, self.column);

                if char == '\n' {
                    self.line += 1;
                    self.column = 0;
                } else {
                    self.column += 1;
                }

                (location, char)
            });
        Some(self.current?.1)
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.consume_char();
        Some(c)
    }

    fn consume_char(&mut self) {
        self.current = None;
        _ = self.peek_char();
    }

    fn current_location(&mut self) -> FileLocation {
        _ = self.peek_char();
        match self.current {
            Some((location, _)) => location,
            None => FileLocation::new(self.input.len(), self.line, self.column),
        }
    }

    fn token_from(&mut self, kind: TokenKind, begin: FileLocation) -> Token {
        let end = self.current_location();
        Token::new(kind, &self.input[begin.offset()..end.offset()], begin)
    }
}

/// Yields every token up to and including the `EndOfFile` token, or up to the first error.
impl<'source_code> Iterator for Lexer<'source_code> {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        self.finished = match &result {
            Ok(token) => token.kind == TokenKind::EndOfFile,
            Err(..) => true,
        };

        Some(result)
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct LexerError {
    pub location: FileLocation,
    pub kind: LexerErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, AsRefStr)]
pub enum LexerErrorKind {
    #[error("Unrecognized character `{character}`")]
    UnrecognizedCharacter { character: char },

    #[error("String is never closed with `\"`")]
    UnterminatedString,

    #[error("Integer literal is too large")]
    InvalidNumber,
}

impl LexerErrorKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
