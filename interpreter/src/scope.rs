// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{cell::RefCell, collections::HashMap, iter::once, rc::Rc};

use blunt::FunctionDefinition;

use crate::Value;

/// A variable as it is stored in a scope.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub name: String,
    pub value: Value,
    pub count: usize,
}

impl Binding {
    #[must_use]
    pub fn new(name: impl Into<String>, value: Value, count: usize) -> Self {
        Self {
            name: name.into(),
            value,
            count,
        }
    }
}

/// Bindings are shared between the scope that defines them and the runtime functions that save
/// them, so an assignment through either is seen by both.
pub type BindingRef = Rc<RefCell<Binding>>;

#[derive(Default, Debug)]
pub struct Scope {
    pub functions: HashMap<String, Rc<FunctionDefinition>>,
    pub variables: HashMap<String, BindingRef>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_variable(&self, name: &str) -> Option<&BindingRef> {
        self.variables.get(name)
    }

    pub fn find_function(&self, name: &str) -> Option<&Rc<FunctionDefinition>> {
        self.functions.get(name)
    }
}

/// The global scope plus a stack of scopes pushed by calls and loops.
///
/// Lookups go from the innermost scope outwards and end at the global scope.
#[derive(Default, Debug)]
pub struct ScopeStack {
    global: Scope,
    frames: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self) {
        self.frames.push(Scope::new());
        log::trace!("Pushed scope, depth is now {}", self.frames.len());
    }

    pub fn pop(&mut self) {
        self.frames.pop().expect("Global scope popped!");
        log::trace!("Popped scope, depth is now {}", self.frames.len());
    }

    /// The number of pushed scopes, not counting the global scope.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn global(&self) -> &Scope {
        &self.global
    }

    fn current_mut(&mut self) -> &mut Scope {
        self.frames.last_mut().unwrap_or(&mut self.global)
    }

    fn scopes(&self) -> impl Iterator<Item = &Scope> {
        self.frames.iter().rev().chain(once(&self.global))
    }

    #[must_use]
    pub fn lookup_variable(&self, name: &str) -> Option<BindingRef> {
        self.scopes()
            .find_map(|scope| scope.find_variable(name))
            .cloned()
    }

    #[must_use]
    pub fn lookup_function(&self, name: &str) -> Option<Rc<FunctionDefinition>> {
        self.scopes()
            .find_map(|scope| scope.find_function(name))
            .cloned()
    }

    /// Defines a variable in the current scope, replacing one with the same name.
    pub fn define_variable(&mut self, binding: Binding) -> BindingRef {
        let binding = Rc::new(RefCell::new(binding));
        self.insert_variable(Rc::clone(&binding));
        binding
    }

    /// Puts an existing binding in the current scope, keeping it shared with its other owners.
    pub fn insert_variable(&mut self, binding: BindingRef) {
        let name = binding.borrow().name.clone();
        self.current_mut().variables.insert(name, binding);
    }

    pub fn define_function(&mut self, function: Rc<FunctionDefinition>) {
        self.current_mut().functions.insert(function.name.clone(), function);
    }
}
