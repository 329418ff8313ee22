// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod functions;

pub use self::functions::{format_value, BuiltinFunction, BuiltinFunctionSignature};

pub struct Builtin;

impl Builtin {
    /// Functions every program can call. A user function with the same name is never reached.
    pub const FUNCTIONS: &'static [BuiltinFunction] = &[
        BuiltinFunction {
            name: "print",
            function: &functions::print,
        },
        BuiltinFunction {
            name: "println",
            function: &functions::println,
        },
        BuiltinFunction {
            name: "len",
            function: &functions::len,
        },
        BuiltinFunction {
            name: "exit",
            function: &functions::exit,
        },
    ];

    #[must_use]
    pub fn resolve(name: &str) -> Option<&'static BuiltinFunction> {
        Self::FUNCTIONS.iter().find(|function| function.name == name)
    }
}
