// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::rc::Rc;

use strum::IntoStaticStr;

use super::{
    BinaryOp,
    Compound,
    DotDotExpression,
    DotExpression,
    ForLoop,
    FunctionCall,
    FunctionDefinition,
    IfElseChain,
    Variable,
    VariableAssignment,
    VariableDefinition,
};

#[derive(Clone, Debug, PartialEq, IntoStaticStr)]
pub enum Node {
    VariableDefinition(VariableDefinition),
    Variable(Variable),
    VariableAssignment(VariableAssignment),
    FunctionDefinition(Rc<FunctionDefinition>),
    FunctionCall(FunctionCall),
    Return(Box<Node>),
    StringLiteral(String),
    IntegerLiteral(i64),
    Array(Vec<Node>),
    Compound(Compound),
    BinaryOp(BinaryOp),
    Not(Box<Node>),
    NestedExpression(Box<Node>),
    IfElseChain(IfElseChain),
    DotExpression(DotExpression),
    DotDotExpression(DotDotExpression),

    /// A bare `.` where an index was expected: `0` as the start of a slice, the length as its end,
    /// or "the last element" as a single index.
    DotDotMarker,
    ForLoop(ForLoop),
    Save(Variable),
    Noop,
}

impl Node {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }
}
