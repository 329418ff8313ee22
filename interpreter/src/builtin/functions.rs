// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::Write;

use crate::{EvalResult, Halt, RuntimeError, Value};

pub type BuiltinFunctionSignature = &'static dyn Fn(&mut dyn Write, Vec<Value>) -> EvalResult<Value>;

pub struct BuiltinFunction {
    pub name: &'static str,
    pub function: BuiltinFunctionSignature,
}

/// The text `print` writes for a value. Arrays print their elements separated by spaces.
pub fn format_value(value: &Value) -> Result<String, RuntimeError> {
    match value {
        Value::Integer(integer) => Ok(integer.to_string()),
        Value::String(str) => Ok(str.clone()),
        Value::Array(values) => {
            let parts = values.borrow()
                .iter()
                .map(format_value)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(parts.join(" "))
        }
        Value::Function(..) | Value::DotDot | Value::Noop => {
            Err(RuntimeError::UnprintableValue { actual: value.type_name() })
        }
    }
}

fn write_arguments(output: &mut dyn Write, args: &[Value]) -> EvalResult<()> {
    for (arg_idx, arg) in args.iter().enumerate() {
        if arg_idx != 0 {
            write!(output, " ")?;
        }

        write!(output, "{}", format_value(arg)?)?;
    }

    Ok(())
}

pub fn print(output: &mut dyn Write, args: Vec<Value>) -> EvalResult<Value> {
    write_arguments(output, &args)?;
    Ok(Value::Noop)
}

pub fn println(output: &mut dyn Write, args: Vec<Value>) -> EvalResult<Value> {
    write_arguments(output, &args)?;
    writeln!(output)?;
    Ok(Value::Noop)
}

/// The number of elements of an array, or the byte length of a string plus one.
pub fn len(_: &mut dyn Write, args: Vec<Value>) -> EvalResult<Value> {
    let Some(value) = args.first() else {
        return Err(RuntimeError::MissingArgument {
            function: "len".into(),
            parameter: "value".into(),
        }.into());
    };

    let length = match value {
        Value::Array(values) => values.borrow().len(),
        Value::String(str) => str.len() + 1,
        _ => return Err(RuntimeError::UnmeasurableValue { actual: value.type_name() }.into()),
    };

    Ok(Value::Integer(length as i64))
}

pub fn exit(output: &mut dyn Write, _: Vec<Value>) -> EvalResult<Value> {
    output.flush()?;
    Err(Halt::Exit)
}
