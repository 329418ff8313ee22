// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Write;

use log::Level;

use super::{Branch, Compound, Node};

/// Writes the tree below `node` to the debug log, one node per line.
pub fn ast_print(node: &Node, indent: usize) {
    if !log::log_enabled!(Level::Debug) {
        return;
    }

    for line in dump(node, indent).lines() {
        log::debug!("{line}");
    }
}

/// Writes a whole program to the debug log.
pub fn print_tree(root: &Compound) {
    if !log::log_enabled!(Level::Debug) {
        return;
    }

    log::debug!("Compound");
    for statement in &root.statements {
        ast_print(statement, 1);
    }
}

#[must_use]
pub fn dump(node: &Node, indent: usize) -> String {
    let mut dumper = Dumper { out: String::new() };
    dumper.node(node, indent);
    dumper.out
}

struct Dumper {
    out: String,
}

impl Dumper {
    fn line(&mut self, indent: usize, text: impl std::fmt::Display) {
        _ = writeln!(self.out, "{}{text}", "  ".repeat(indent));
    }

    fn node(&mut self, node: &Node, indent: usize) {
        self.line(indent, node.name());
        let indent = indent + 1;

        match node {
            Node::VariableDefinition(definition) => {
                self.line(indent, format_args!("Name: {}", definition.name));
                self.line(indent, format_args!("Count: {}", definition.count));
                self.node(&definition.value, indent);
            }

            Node::Variable(variable) | Node::Save(variable) => {
                self.line(indent, format_args!("Name: {}", variable.name));
            }

            Node::VariableAssignment(assignment) => {
                self.line(indent, format_args!("Name: {}", assignment.name));
                if let Some(index) = &assignment.index {
                    self.node(index, indent);
                }
                self.node(&assignment.value, indent);
            }

            Node::FunctionDefinition(function) => {
                self.line(indent, format_args!("Name: {}", function.name));
                for parameter in &function.parameters {
                    self.line(indent, format_args!("Parameter: {parameter}"));
                }
                self.compound(&function.body, indent);
            }

            Node::FunctionCall(call) => {
                self.line(indent, format_args!("Name: {}", call.name));
                for argument in &call.arguments {
                    self.node(argument, indent);
                }
            }

            Node::StringLiteral(value) => self.line(indent, format_args!("Value: {value}")),
            Node::IntegerLiteral(value) => self.line(indent, format_args!("Value: {value}")),

            Node::Array(elements) => {
                for element in elements {
                    self.node(element, indent);
                }
            }

            Node::Compound(compound) => {
                for statement in &compound.statements {
                    self.node(statement, indent);
                }
            }

            Node::BinaryOp(op) => {
                self.line(indent, format_args!("Operator: {}", op.operator.as_ref()));
                self.node(&op.left, indent);
                self.node(&op.right, indent);
            }

            Node::Return(inner) | Node::Not(inner) | Node::NestedExpression(inner) => {
                self.node(inner, indent);
            }

            Node::IfElseChain(chain) => {
                for branch in &chain.branches {
                    match branch {
                        Branch::If(branch) => {
                            self.line(indent, "If");
                            self.node(&branch.condition, indent + 1);
                            self.compound(&branch.body, indent + 1);
                        }
                        Branch::ElseIf(branch) => {
                            self.line(indent, "ElseIf");
                            self.node(&branch.condition, indent + 1);
                            self.compound(&branch.body, indent + 1);
                        }
                        Branch::Else(body) => {
                            self.line(indent, "Else");
                            self.compound(body, indent + 1);
                        }
                    }
                }
            }

            Node::DotExpression(dot) => {
                self.line(indent, format_args!("Name: {}", dot.variable));
                self.node(&dot.index, indent);
            }

            Node::DotDotExpression(slice) => {
                self.line(indent, format_args!("Name: {}", slice.variable));
                self.node(&slice.first, indent);
                self.node(&slice.last, indent);
            }

            Node::ForLoop(for_loop) => {
                self.line(indent, format_args!("Subject: {}", for_loop.subject));
                self.line(indent, format_args!("Iterator: {}", for_loop.iterator));
                if let Some(condition) = &for_loop.condition {
                    self.node(condition, indent);
                }
                self.compound(&for_loop.body, indent);
            }

            Node::DotDotMarker | Node::Noop => (),
        }
    }

    fn compound(&mut self, compound: &Compound, indent: usize) {
        self.line(indent, "Compound");
        for statement in &compound.statements {
            self.node(statement, indent + 1);
        }
    }
}
