// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{cell::RefCell, fmt::Display, rc::Rc};

use blunt::FunctionDefinition;
use strum::IntoStaticStr;

use crate::{scope::BindingRef, Binding};

/// Arrays are shared: every variable holding the same array sees writes to its slots.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;

#[derive(Clone, Debug, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Value {
    Integer(i64),
    String(String),
    Array(ArrayRef),

    /// What a call evaluates to when the function does not `smoke` a value.
    Function(Rc<RuntimeFunction>),

    /// The value of a bare `.` index.
    DotDot,

    /// The result of operations that have no meaningful value.
    Noop,
}

impl Value {
    #[must_use]
    pub fn new_array(values: Vec<Value>) -> Self {
        Self::Array(Rc::new(RefCell::new(values)))
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.into()
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => i.fmt(f),
            Self::String(str) => f.write_str(str),
            Self::Array(values) => {
                for (idx, value) in values.borrow().iter().enumerate() {
                    if idx != 0 {
                        f.write_str(" ")?;
                    }
                    value.fmt(f)?;
                }
                Ok(())
            }
            Self::Function(function) => write!(f, "<function {}>", function.definition().name),
            Self::DotDot => f.write_str(".."),
            Self::Noop => f.write_str("noop"),
        }
    }
}

/// A function as it was called once: its definition plus the variables `keep` saved during that call.
#[derive(Debug)]
pub struct RuntimeFunction {
    definition: Rc<FunctionDefinition>,
    saved: RefCell<Vec<BindingRef>>,
}

impl RuntimeFunction {
    #[must_use]
    pub fn new(definition: Rc<FunctionDefinition>) -> Self {
        Self {
            definition,
            saved: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn definition(&self) -> &Rc<FunctionDefinition> {
        &self.definition
    }

    /// Saves a copy of a binding. Saving a name again replaces the earlier entry in its place.
    pub fn save(&self, binding: Binding) {
        self.capture(Rc::new(RefCell::new(binding)));
    }

    /// Saves the binding itself, so later assignments through the scope are seen here too.
    pub fn capture(&self, binding: BindingRef) {
        let mut saved = self.saved.borrow_mut();
        let name = binding.borrow().name.clone();

        if let Some(existing) = saved.iter_mut().find(|existing| existing.borrow().name == name) {
            *existing = binding;
            return;
        }

        saved.push(binding);
    }

    #[must_use]
    pub fn saved_variables(&self) -> Vec<BindingRef> {
        self.saved.borrow().clone()
    }
}

/// Two runtime functions are only equal when they are the same call's result.
impl PartialEq for RuntimeFunction {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}
