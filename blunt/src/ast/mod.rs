// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod expression;
mod node;
mod print;
mod statement;

pub use self::{
    expression::{
        BinaryOp,
        BinaryOperator,
        DotDotExpression,
        DotExpression,
        FunctionCall,
        Variable,
        VariableAssignment,
    },
    node::Node,
    print::{
        ast_print,
        dump,
        print_tree,
    },
    statement::{
        Branch,
        Compound,
        ConditionalBranch,
        ForLoop,
        FunctionDefinition,
        IfElseChain,
        VariableDefinition,
        DEFAULT_ITERATOR_NAME,
        DEFAULT_VARIABLE_COUNT,
    },
};
