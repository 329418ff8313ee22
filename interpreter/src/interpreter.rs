// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{io::Write, rc::Rc};

use blunt::*;
use log::{debug, trace};

use crate::*;

pub struct Interpreter<W>
        where W: Write {
    scopes: ScopeStack,
    current_function: Option<Rc<RuntimeFunction>>,
    output: W,
}

impl<W> Interpreter<W>
        where W: Write {
    pub fn new(output: W) -> Self {
        Self {
            scopes: ScopeStack::new(),
            current_function: None,
            output,
        }
    }

    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    #[must_use]
    pub fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    /// Runs a whole program. A `smoke` at the top level ends the program early.
    pub fn execute_tree(&mut self, tree: &Compound) -> EvalResult<()> {
        let result = self.execute_compound(tree);
        self.output.flush()?;

        match result? {
            StatementResult::Continue => (),
            StatementResult::Return(value) => debug!("Program returned {value:?}"),
        }

        Ok(())
    }

    fn execute_compound(&mut self, compound: &Compound) -> EvalResult<StatementResult> {
        for statement in &compound.statements {
            if let StatementResult::Return(value) = self.visit(statement)? {
                return Ok(StatementResult::Return(value));
            }
        }

        Ok(StatementResult::Continue)
    }

    pub fn visit(&mut self, node: &Node) -> EvalResult<StatementResult> {
        trace!("Visiting {}", node.name());

        match node {
            Node::VariableDefinition(definition) => {
                let value = self.evaluate(&definition.value)?;
                debug!("Defining {} with count {}", definition.name, definition.count);
                self.scopes.define_variable(Binding::new(&definition.name, value, definition.count));
                Ok(StatementResult::Continue)
            }

            Node::VariableAssignment(assignment) => {
                self.execute_assignment(assignment)?;
                Ok(StatementResult::Continue)
            }

            Node::FunctionDefinition(function) => {
                self.scopes.define_function(Rc::clone(function));
                Ok(StatementResult::Continue)
            }

            Node::Return(value) => {
                let value = self.evaluate(value)?;
                Ok(StatementResult::Return(value))
            }

            Node::Compound(compound) => self.execute_compound(compound),

            Node::IfElseChain(chain) => self.execute_if_else_chain(chain),

            Node::ForLoop(for_loop) => self.execute_for_loop(for_loop),

            Node::Save(variable) => {
                self.execute_save(variable)?;
                Ok(StatementResult::Continue)
            }

            Node::Noop => Ok(StatementResult::Continue),

            Node::Variable(..)
                | Node::FunctionCall(..)
                | Node::StringLiteral(..)
                | Node::IntegerLiteral(..)
                | Node::Array(..)
                | Node::BinaryOp(..)
                | Node::Not(..)
                | Node::NestedExpression(..)
                | Node::DotExpression(..)
                | Node::DotDotExpression(..)
                | Node::DotDotMarker => {
                self.evaluate(node)?;
                Ok(StatementResult::Continue)
            }
        }
    }

    pub fn evaluate(&mut self, node: &Node) -> EvalResult<Value> {
        match node {
            Node::IntegerLiteral(integer) => Ok(Value::Integer(*integer)),
            Node::StringLiteral(str) => Ok(Value::String(str.clone())),

            Node::Array(elements) => {
                let values = elements.iter()
                    .map(|element| self.evaluate(element))
                    .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::new_array(values))
            }

            Node::Variable(variable) => {
                let binding = self.lookup_variable(&variable.name)?;
                let value = binding.borrow().value.clone();
                Ok(value)
            }

            Node::FunctionCall(call) => self.call_function(call),

            Node::BinaryOp(op) => self.evaluate_binary_op(op),

            Node::Not(operand) => {
                let operand = self.evaluate(operand)?;
                let operand = expect_integer(&operand, "as the operand of `not`")?;
                Ok(Value::Integer(i64::from(operand == 0)))
            }

            Node::NestedExpression(inner) => self.evaluate(inner),

            Node::DotExpression(dot) => self.evaluate_dot_expression(dot),
            Node::DotDotExpression(slice) => self.evaluate_slice(slice),
            Node::DotDotMarker => Ok(Value::DotDot),

            Node::VariableDefinition(..)
                | Node::VariableAssignment(..)
                | Node::FunctionDefinition(..)
                | Node::Return(..)
                | Node::Compound(..)
                | Node::IfElseChain(..)
                | Node::ForLoop(..)
                | Node::Save(..)
                | Node::Noop => {
                match self.visit(node)? {
                    StatementResult::Continue => Ok(Value::Noop),
                    StatementResult::Return(value) => Ok(value),
                }
            }
        }
    }

    fn evaluate_binary_op(&mut self, op: &BinaryOp) -> EvalResult<Value> {
        let lhs = self.evaluate(&op.left)?;
        let rhs = self.evaluate(&op.right)?;

        match (&lhs, &rhs) {
            (Value::Integer(lhs), Value::Integer(rhs)) => {
                apply_integer_operator(op.operator, *lhs, *rhs).map(Value::Integer)
            }

            (Value::String(lhs), Value::String(rhs)) if op.operator == BinaryOperator::Add => {
                Ok(Value::String(format!("{lhs}{rhs}")))
            }

            _ => {
                trace!("No `{}` for {} and {}", op.operator, lhs.type_name(), rhs.type_name());
                Ok(Value::Noop)
            }
        }
    }

    fn execute_if_else_chain(&mut self, chain: &IfElseChain) -> EvalResult<StatementResult> {
        for branch in &chain.branches {
            let (condition, body) = match branch {
                Branch::If(branch) | Branch::ElseIf(branch) => (Some(&branch.condition), &branch.body),
                Branch::Else(body) => (None, body),
            };

            if let Some(condition) = condition {
                let condition = self.evaluate(condition)?;
                if expect_integer(&condition, "as a condition")? == 0 {
                    continue;
                }
            }

            return self.execute_compound(body);
        }

        Ok(StatementResult::Continue)
    }

    fn execute_for_loop(&mut self, for_loop: &ForLoop) -> EvalResult<StatementResult> {
        let subject = self.lookup_variable(&for_loop.subject)?;
        let bound = subject.borrow().count as i64;
        let existing_iterator = self.scopes.lookup_variable(&for_loop.iterator);

        self.scopes.push();
        let result = self.run_for_loop(for_loop, existing_iterator, bound);
        self.scopes.pop();

        result
    }

    fn run_for_loop(&mut self, for_loop: &ForLoop, iterator: Option<BindingRef>, bound: i64) -> EvalResult<StatementResult> {
        let iterator = match iterator {
            Some(iterator) => iterator,
            None => {
                debug!("Creating loop iterator `{}`", for_loop.iterator);
                self.scopes.define_variable(Binding::new(&for_loop.iterator, Value::Integer(0), DEFAULT_VARIABLE_COUNT))
            }
        };

        expect_integer(&iterator.borrow().value, "as a loop iterator")?;

        loop {
            let proceed = match &for_loop.condition {
                Some(condition) => {
                    let condition = self.evaluate(condition)?;
                    expect_integer(&condition, "as a loop condition")? != 0
                }
                None => expect_integer(&iterator.borrow().value, "as a loop iterator")? < bound,
            };

            if !proceed {
                break;
            }

            if let StatementResult::Return(value) = self.execute_compound(&for_loop.body)? {
                return Ok(StatementResult::Return(value));
            }

            let mut slot = iterator.borrow_mut();
            let next = expect_integer(&slot.value, "as a loop iterator")?.wrapping_add(1);
            slot.value = Value::Integer(next);
        }

        Ok(StatementResult::Continue)
    }

    fn execute_save(&mut self, variable: &Variable) -> EvalResult<()> {
        let Some(function) = self.current_function.clone() else {
            return Err(RuntimeError::SaveOutsideFunction { name: variable.name.clone() }.into());
        };

        let binding = self.lookup_variable(&variable.name)?;
        debug!("Keeping `{}` in `{}`", variable.name, function.definition().name);
        function.save(binding.borrow().clone());
        Ok(())
    }

    fn call_function(&mut self, call: &FunctionCall) -> EvalResult<Value> {
        if let Some(builtin) = Builtin::resolve(&call.name) {
            let arguments = call.arguments.iter()
                .map(|argument| self.evaluate(argument))
                .collect::<EvalResult<Vec<_>>>()?;
            return (builtin.function)(&mut self.output, arguments);
        }

        let Some(function) = self.scopes.lookup_function(&call.name) else {
            return Err(RuntimeError::UndefinedFunction { name: call.name.clone() }.into());
        };

        self.invoke(function, &call.arguments)
    }

    /// Calls a user function. Without a `smoke` the call evaluates to a fresh [`RuntimeFunction`],
    /// holding whatever the body kept.
    fn invoke(&mut self, definition: Rc<FunctionDefinition>, arguments: &[Node]) -> EvalResult<Value> {
        debug!("Calling `{}`", definition.name);

        let mut parameters = Vec::with_capacity(definition.parameters.len());
        for (idx, parameter) in definition.parameters.iter().enumerate() {
            let Some(argument) = arguments.get(idx) else {
                return Err(RuntimeError::MissingArgument {
                    function: definition.name.clone(),
                    parameter: parameter.clone(),
                }.into());
            };

            let value = self.evaluate(argument)?;
            let count = match argument {
                Node::Variable(variable) => self.scopes.lookup_variable(&variable.name)
                    .map_or(DEFAULT_VARIABLE_COUNT, |binding| binding.borrow().count),
                _ => DEFAULT_VARIABLE_COUNT,
            };

            parameters.push(Binding::new(parameter, value, count));
        }

        let runtime = Rc::new(RuntimeFunction::new(Rc::clone(&definition)));
        let previous_function = self.current_function.replace(Rc::clone(&runtime));

        self.scopes.push();
        for parameter in parameters {
            let binding = self.scopes.define_variable(parameter);
            runtime.capture(binding);
        }

        let result = self.execute_compound(&definition.body);

        self.scopes.pop();
        self.current_function = previous_function;

        match result? {
            StatementResult::Return(value) => Ok(value),
            StatementResult::Continue => Ok(Value::Function(runtime)),
        }
    }

    /// `name.method(...)`: calls a function nested in the body of the function whose call result
    /// `name` holds, with the variables that call kept in scope.
    fn call_method(&mut self, variable: &str, call: &FunctionCall) -> EvalResult<Value> {
        let binding = self.lookup_variable(variable)?;
        let Value::Function(runtime) = binding.borrow().value.clone() else {
            return Err(RuntimeError::NotARuntimeFunction {
                name: variable.to_string(),
                method: call.name.clone(),
            }.into());
        };

        let Some(method) = runtime.definition().nested_function(&call.name).cloned() else {
            return Err(RuntimeError::NestedFunctionNotFound {
                function: runtime.definition().name.clone(),
                method: call.name.clone(),
            }.into());
        };

        debug!("Calling `{}.{}` with {} kept variable(s)", variable, call.name, runtime.saved_variables().len());

        self.scopes.push();
        self.scopes.define_function(method);
        for saved in runtime.saved_variables() {
            self.scopes.insert_variable(saved);
        }

        let result = self.call_function(call);
        self.scopes.pop();

        result
    }

    fn evaluate_dot_expression(&mut self, dot: &DotExpression) -> EvalResult<Value> {
        match dot.index.as_ref() {
            Node::FunctionCall(call) => self.call_method(&dot.variable, call),
            Node::DotDotMarker => self.last_element(&dot.variable),
            index => {
                let index = self.evaluate(index)?;
                let index = expect_integer(&index, "as an index")?;
                self.variable_with_index(&dot.variable, index)
            }
        }
    }

    fn variable_with_index(&self, name: &str, index: i64) -> EvalResult<Value> {
        let binding = self.lookup_variable(name)?;
        let binding = binding.borrow();
        check_index(name, index, binding.count)?;

        match &binding.value {
            Value::Array(values) => {
                let values = values.borrow();
                let element = values.get(index as usize).ok_or_else(|| RuntimeError::IndexOutOfBounds {
                    name: name.to_string(),
                    index,
                    count: values.len(),
                })?;
                Ok(element.clone())
            }
            value => Ok(value.clone()),
        }
    }

    fn last_element(&self, name: &str) -> EvalResult<Value> {
        let binding = self.lookup_variable(name)?;
        let value = binding.borrow().value.clone();

        let last = match &value {
            Value::Array(values) => values.borrow().last().cloned(),
            Value::String(str) => str.chars().last().map(|c| Value::String(c.to_string())),
            _ => return Ok(value),
        };

        last.ok_or_else(|| RuntimeError::EmptyValue { name: name.to_string() }.into())
    }

    fn evaluate_slice(&mut self, slice: &DotDotExpression) -> EvalResult<Value> {
        let binding = self.lookup_variable(&slice.variable)?;
        let length = match &binding.borrow().value {
            Value::Array(values) => values.borrow().len(),
            Value::String(str) => str.len(),
            value => return Err(RuntimeError::UnsliceableValue {
                name: slice.variable.clone(),
                actual: value.type_name(),
            }.into()),
        };

        let first = match self.evaluate(&slice.first)? {
            Value::DotDot => 0,
            value => expect_integer(&value, "as the start of a slice")?,
        };

        let last = match self.evaluate(&slice.last)? {
            Value::DotDot => length as i64,
            value => expect_integer(&value, "as the end of a slice")?,
        };

        if first < 0 || first > last || last > length as i64 {
            return Err(RuntimeError::SliceOutOfBounds {
                name: slice.variable.clone(),
                first,
                last,
                length,
            }.into());
        }

        let range = first as usize..last as usize;
        let value = binding.borrow().value.clone();
        match value {
            Value::Array(values) => Ok(Value::new_array(values.borrow()[range].to_vec())),
            Value::String(str) => Ok(Value::String(String::from_utf8_lossy(&str.as_bytes()[range]).into_owned())),
            value => Err(RuntimeError::UnsliceableValue {
                name: slice.variable.clone(),
                actual: value.type_name(),
            }.into()),
        }
    }

    fn execute_assignment(&mut self, assignment: &VariableAssignment) -> EvalResult<()> {
        if let Some(index) = &assignment.index {
            let index = self.evaluate(index)?;
            let index = expect_integer(&index, "as an index")?;
            return self.assign_with_index(&assignment.name, index, &assignment.value);
        }

        if let Some((name, field)) = assignment.dotted_target() {
            return self.assign_dotted(name, field, &assignment.value);
        }

        let binding = self.lookup_variable(&assignment.name)?;
        let value = self.evaluate(&assignment.value)?;
        binding.borrow_mut().value = value;
        Ok(())
    }

    /// `name[index] = value`: writes a slot of an array, or replaces any other value entirely.
    fn assign_with_index(&mut self, name: &str, index: i64, value: &Node) -> EvalResult<()> {
        let binding = self.lookup_variable(name)?;
        check_index(name, index, binding.borrow().count)?;

        let value = self.evaluate(value)?;

        let mut binding = binding.borrow_mut();
        if let Value::Array(values) = &binding.value {
            return set_element(name, values, index, value);
        }

        binding.value = value;
        Ok(())
    }

    /// `name.field = value`: writes a slot of an array. Any other value first becomes an array of
    /// `count` copies of itself.
    fn assign_dotted(&mut self, name: &str, field: &str, value: &Node) -> EvalResult<()> {
        let binding = self.lookup_variable(name)?;

        let index = match field.parse::<i64>() {
            Ok(index) => index,
            Err(..) => {
                let field = self.lookup_variable(field)?;
                let field = field.borrow();
                expect_integer(&field.value, "as an index")?
            }
        };

        let count = binding.borrow().count;
        check_index(name, index, count)?;

        let value = self.evaluate(value)?;

        let mut binding = binding.borrow_mut();
        if let Value::Array(values) = &binding.value {
            return set_element(name, values, index, value);
        }

        trace!("Promoting `{name}` to an array of {count} values");
        let mut values = Vec::new();
        if values.try_reserve_exact(count).is_err() {
            return Err(RuntimeError::TooManyValues { name: name.to_string(), count }.into());
        }
        values.resize(count, binding.value.clone());
        values[index as usize] = value;
        binding.value = Value::new_array(values);
        Ok(())
    }

    fn lookup_variable(&self, name: &str) -> Result<BindingRef, RuntimeError> {
        self.scopes.lookup_variable(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }
}

#[derive(Debug)]
#[must_use]
pub enum StatementResult {
    Continue,
    Return(Value),
}

fn expect_integer(value: &Value, context: &'static str) -> Result<i64, RuntimeError> {
    match value {
        Value::Integer(integer) => Ok(*integer),
        _ => Err(RuntimeError::ExpectedInteger { context, actual: value.type_name() }),
    }
}

fn check_index(name: &str, index: i64, count: usize) -> Result<(), RuntimeError> {
    if index < 0 || index >= count as i64 {
        return Err(RuntimeError::IndexOutOfBounds {
            name: name.to_string(),
            index,
            count,
        });
    }

    Ok(())
}

fn set_element(name: &str, values: &ArrayRef, index: i64, value: Value) -> EvalResult<()> {
    let mut values = values.borrow_mut();
    let length = values.len();

    let Some(slot) = values.get_mut(index as usize) else {
        return Err(RuntimeError::IndexOutOfBounds {
            name: name.to_string(),
            index,
            count: length,
        }.into());
    };

    *slot = value;
    Ok(())
}

fn apply_integer_operator(operator: BinaryOperator, lhs: i64, rhs: i64) -> EvalResult<i64> {
    Ok(match operator {
        BinaryOperator::Add => lhs.wrapping_add(rhs),
        BinaryOperator::Subtract => lhs.wrapping_sub(rhs),
        BinaryOperator::Multiply => lhs.wrapping_mul(rhs),
        BinaryOperator::Divide => {
            if rhs == 0 {
                return Err(RuntimeError::DivisionByZero.into());
            }
            lhs.wrapping_div(rhs)
        }
        BinaryOperator::GreaterThan => i64::from(lhs > rhs),
        BinaryOperator::LessThan => i64::from(lhs < rhs),
        BinaryOperator::GreaterThanOrEqual => i64::from(lhs >= rhs),
        BinaryOperator::LessThanOrEqual => i64::from(lhs <= rhs),
        BinaryOperator::And => i64::from(lhs != 0 && rhs != 0),
        BinaryOperator::Or => i64::from(lhs != 0 || rhs != 0),
        BinaryOperator::Equal => i64::from(lhs == rhs),
    })
}
