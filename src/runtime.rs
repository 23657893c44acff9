use crate::error::{Error, Result};
use crate::parser::{Command, Node};
use std::fmt::{self, Debug, Display, Formatter};

#[derive(Clone)]
pub enum Value {
    Number(f64),
    Nil,
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => {
                const EPSILON: f64 = 1e-10;
                (a - b).abs() < EPSILON
            }
            (Value::Nil, Value::Nil) => true,
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Nil => write!(f, "nil"),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

pub fn evaluate(node: &Node) -> Result<Value> {
    match node {
        Node::Literal(n) => Ok(Value::Number(*n)),
        // A bare identifier is not invocable; no numeric fallback.
        Node::Symbol(name) => Err(Error::UnknownCommand(name.clone())),
        Node::Invocation { command, operands } => {
            check_arity(command, operands.len())?;
            evaluate_invocation(command, operands)
        }
    }
}

// Required operand counts, checked before dispatch. Surplus operands are
// admitted by the grammar and ignored: dispatch reads exactly the first
// `expected` operands.
fn check_arity(command: &Command, got: usize) -> Result<()> {
    let expected = match command {
        Command::Add | Command::Sub | Command::Mul | Command::Div => 2,
        Command::Print => 1,
        Command::Unknown(name) => return Err(Error::UnknownCommand(name.clone())),
    };

    if got < expected {
        return Err(Error::WrongArity {
            command: command.name().to_string(),
            expected,
            got,
        });
    }

    Ok(())
}

fn evaluate_invocation(command: &Command, operands: &[Node]) -> Result<Value> {
    match command {
        Command::Add => evaluate_arithmetic(command, operands, |a, b| a + b),
        Command::Sub => evaluate_arithmetic(command, operands, |a, b| a - b),
        Command::Mul => evaluate_arithmetic(command, operands, |a, b| a * b),
        // IEEE-754 division: a zero divisor yields ±inf, and 0/0 yields NaN,
        // rather than a distinct error.
        Command::Div => evaluate_arithmetic(command, operands, |a, b| a / b),
        Command::Print => {
            let value = evaluate(&operands[0])?;
            println!("{}", value);
            Ok(Value::Nil)
        }
        Command::Unknown(name) => Err(Error::UnknownCommand(name.clone())),
    }
}

fn evaluate_arithmetic(
    command: &Command,
    operands: &[Node],
    op: impl Fn(f64, f64) -> f64,
) -> Result<Value> {
    let lhs = number_operand(command, &operands[0])?;
    let rhs = number_operand(command, &operands[1])?;
    Ok(Value::Number(op(lhs, rhs)))
}

fn number_operand(command: &Command, operand: &Node) -> Result<f64> {
    match evaluate(operand)? {
        Value::Number(n) => Ok(n),
        Value::Nil => Err(Error::NonNumericOperand(command.name().to_string())),
    }
}
