// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod builtin;
mod error;
mod interpreter;
mod scope;
mod value;

pub use self::{
    builtin::{format_value, Builtin, BuiltinFunction, BuiltinFunctionSignature},
    error::{ErrorCategory, ErrorPrinter, EvalResult, Halt, RuntimeError},
    interpreter::{Interpreter, StatementResult},
    scope::{Binding, BindingRef, Scope, ScopeStack},
    value::{ArrayRef, RuntimeFunction, Value},
};
