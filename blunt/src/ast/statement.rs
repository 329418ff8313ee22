// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::rc::Rc;

use crate::Node;

pub const DEFAULT_VARIABLE_COUNT: usize = 1;

/// The iterator a `light` loop uses when no `using` clause names one.
pub const DEFAULT_ITERATOR_NAME: &str = "i";

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub name: String,
    pub value: Box<Node>,

    /// The number of slots, `3` in `roll 3 x = 0`.
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: Compound,
}

impl FunctionDefinition {
    /// Finds a function defined directly in this function's body. A later definition wins.
    #[must_use]
    pub fn nested_function(&self, name: &str) -> Option<&Rc<FunctionDefinition>> {
        self.body.statements
            .iter()
            .rev()
            .find_map(|statement| match statement {
                Node::FunctionDefinition(function) if function.name == name => Some(function),
                _ => None,
            })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Compound {
    pub statements: Vec<Node>,
}

impl Compound {
    #[must_use]
    pub fn new(statements: Vec<Node>) -> Self {
        Self { statements }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfElseChain {
    pub branches: Vec<Branch>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Branch {
    If(ConditionalBranch),
    ElseIf(ConditionalBranch),
    Else(Compound),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConditionalBranch {
    pub condition: Box<Node>,
    pub body: Compound,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForLoop {
    pub subject: String,
    pub iterator: String,

    /// Without a condition the loop runs while `iterator < count of subject`.
    pub condition: Option<Box<Node>>,
    pub body: Compound,
}
