// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::Display, io, path::Path};

use blunt::FileLocation;
use colored::{Color, ColoredString, Colorize};
use strum::AsRefStr;
use thiserror::Error;

/// Writes a diagnostic to stderr: the message, the offending source line with a caret under the
/// location, and where it happened.
pub struct ErrorPrinter<'a> {
    path: &'a Path,
    source_code: &'a str,
    location: Option<FileLocation>,
    category: &'a str,
    message: String,
    hint: Option<String>,

    color: Color,
    line_number: ColoredString,
}

impl<'a> ErrorPrinter<'a> {
    #[must_use = "Use the `print` method to actually print"]
    pub fn new(path: &'a Path, source_code: &'a str, category: &'a str, message: impl Display) -> Self {
        Self {
            path,
            source_code,
            location: None,
            category,
            message: message.to_string(),
            hint: None,

            color: Color::Red,
            line_number: "".normal(),
        }
    }

    #[must_use]
    pub fn location(self, location: FileLocation) -> Self {
        Self {
            location: Some(location),
            line_number: format!("{}", location.line() + 1).blue().bold(),
            ..self
        }
    }

    #[must_use]
    pub fn hint(self, hint: impl Into<Option<String>>) -> Self {
        Self {
            hint: hint.into(),
            ..self
        }
    }

    pub fn print(self) {
        self.print_prelude();

        if let Some(location) = self.location {
            self.print_lines(location);
            self.print_postlude(location);
        }
    }

    fn print_prelude(&self) {
        eprintln!("{} [{}]: {}", "error".red().bold(), self.category, self.message.bold());
    }

    fn print_lines(&self, location: FileLocation) {
        eprintln!();

        let Some(line) = self.source_code.lines().nth(location.line()) else {
            return;
        };

        self.print_line_prefix(true);
        eprintln!("{line}");

        let spaces = " ".repeat(location.column());
        let caret = "^".color(self.color).bold();
        let hint = match &self.hint {
            Some(hint) => format!("hint: {hint}").color(self.color).bold(),
            None => "".bold(),
        };

        self.print_line_prefix(false);
        eprintln!("{spaces}{caret} {hint}");
    }

    fn print_line_prefix(&self, is_primary: bool) {
        let separator = " | ".blue().bold();

        if is_primary {
            eprint!("{} {separator}", self.line_number);
        } else {
            eprint!("{} {separator}", " ".repeat(self.line_number.len()));
        }
    }

    fn print_postlude(&self, location: FileLocation) {
        eprintln!();
        eprintln!("In {}:{location}\n", self.path.display());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum ErrorCategory {
    #[strum(serialize = "NameError")]
    Name,

    #[strum(serialize = "TypeError")]
    Type,

    #[strum(serialize = "BoundsError")]
    Bounds,

    #[strum(serialize = "ArityError")]
    Arity,

    #[strum(serialize = "StateError")]
    State,

    #[strum(serialize = "ArithmeticError")]
    Arithmetic,

    #[strum(serialize = "IoError")]
    Io,
}

#[derive(Debug, Error, AsRefStr)]
pub enum RuntimeError {
    #[error("Variable `{name}` is not defined")]
    UndefinedVariable { name: String },

    #[error("Function `{name}` is not defined")]
    UndefinedFunction { name: String },

    #[error("Expected an integer {context}, but got a value of type {actual}")]
    ExpectedInteger { context: &'static str, actual: &'static str },

    #[error("Cannot slice `{name}`, a value of type {actual}")]
    UnsliceableValue { name: String, actual: &'static str },

    #[error("Unsupported type for printing: {actual}")]
    UnprintableValue { actual: &'static str },

    #[error("Cannot take the length of a value of type {actual}")]
    UnmeasurableValue { actual: &'static str },

    #[error("Index {index} of `{name}` is out of bounds, it holds {count} value(s)")]
    IndexOutOfBounds { name: String, index: i64, count: usize },

    #[error("Slice {first}..{last} of `{name}` is out of bounds, its length is {length}")]
    SliceOutOfBounds { name: String, first: i64, last: i64, length: usize },

    #[error("Cannot hold {count} values in `{name}`")]
    TooManyValues { name: String, count: usize },

    #[error("`{name}` is empty, so it has no last element")]
    EmptyValue { name: String },

    #[error("Missing argument `{parameter}` in call to `{function}`")]
    MissingArgument { function: String, parameter: String },

    #[error("Cannot keep `{name}` outside of a function")]
    SaveOutsideFunction { name: String },

    #[error("Cannot call `{name}.{method}`, `{name}` does not hold a function result")]
    NotARuntimeFunction { name: String, method: String },

    #[error("Function `{function}` does not define a function named `{method}`")]
    NestedFunctionNotFound { function: String, method: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl RuntimeError {
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UndefinedVariable { .. } | Self::UndefinedFunction { .. } => ErrorCategory::Name,

            Self::ExpectedInteger { .. }
                | Self::UnsliceableValue { .. }
                | Self::UnprintableValue { .. }
                | Self::UnmeasurableValue { .. } => ErrorCategory::Type,

            Self::IndexOutOfBounds { .. }
                | Self::SliceOutOfBounds { .. }
                | Self::TooManyValues { .. }
                | Self::EmptyValue { .. } => ErrorCategory::Bounds,

            Self::MissingArgument { .. } => ErrorCategory::Arity,

            Self::SaveOutsideFunction { .. }
                | Self::NotARuntimeFunction { .. }
                | Self::NestedFunctionNotFound { .. } => ErrorCategory::State,

            Self::DivisionByZero => ErrorCategory::Arithmetic,
            Self::Io(..) => ErrorCategory::Io,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

/// Why evaluation stopped before reaching the end of the program.
#[derive(Debug)]
pub enum Halt {
    /// The program called `exit()`.
    Exit,

    Error(RuntimeError),
}

impl From<RuntimeError> for Halt {
    fn from(value: RuntimeError) -> Self {
        Self::Error(value)
    }
}

impl From<io::Error> for Halt {
    fn from(value: io::Error) -> Self {
        Self::Error(RuntimeError::Io(value))
    }
}

pub type EvalResult<T> = Result<T, Halt>;
