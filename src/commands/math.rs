use std::io::Write;

use crate::calculator::{self, parse_number};
use crate::cli::{Arity, Command, Handler, Invocation, Node};
use crate::error::NumberError;

pub fn command() -> Command {
    Command {
        name: "math",
        usage: "",
        short: "Mathematical operations",
        long: "Perform various mathematical operations",
        flags: Vec::new(),
        node: Node::Internal {
            children: vec![
                leaf(
                    "add",
                    "[numbers...]",
                    "Add numbers together",
                    "Add two or more numbers together",
                    Arity::AtLeast(2),
                    add,
                ),
                leaf(
                    "multiply",
                    "[numbers...]",
                    "Multiply numbers together",
                    "Multiply two or more numbers together",
                    Arity::AtLeast(2),
                    multiply,
                ),
                leaf(
                    "divide",
                    "[dividend] [divisor]",
                    "Divide two numbers",
                    "Divide the first number by the second number",
                    Arity::Exactly(2),
                    divide,
                ),
                leaf(
                    "sqrt",
                    "[number]",
                    "Calculate square root",
                    "Calculate the square root of a number",
                    Arity::Exactly(1),
                    sqrt,
                ),
            ],
            handler: None,
        },
    }
}

fn leaf(
    name: &'static str,
    usage: &'static str,
    short: &'static str,
    long: &'static str,
    arity: Arity,
    handler: Handler,
) -> Command {
    Command {
        name,
        usage,
        short,
        long,
        flags: Vec::new(),
        node: Node::Leaf { arity, handler },
    }
}

/// Parses every token, stopping at the first invalid one.
fn parse_all(tokens: &[String]) -> Result<Vec<f64>, NumberError> {
    tokens.iter().map(|token| parse_number(token)).collect()
}

fn print_error(out: &mut dyn Write, error: impl std::fmt::Display) -> crate::Result<()> {
    writeln!(out, "Error: {error}")?;
    Ok(())
}

pub fn add(invocation: &Invocation, out: &mut dyn Write) -> crate::Result<()> {
    let numbers = match parse_all(&invocation.positionals) {
        Ok(numbers) => numbers,
        Err(error) => return print_error(out, error),
    };
    tracing::trace!(?numbers, "adding");

    let total = numbers
        .into_iter()
        .reduce(calculator::add)
        .unwrap_or_default();
    writeln!(out, "Result: {total:.2}")?;
    Ok(())
}

pub fn multiply(invocation: &Invocation, out: &mut dyn Write) -> crate::Result<()> {
    let numbers = match parse_all(&invocation.positionals) {
        Ok(numbers) => numbers,
        Err(error) => return print_error(out, error),
    };
    tracing::trace!(?numbers, "multiplying");

    let product = numbers.into_iter().fold(1.0, calculator::multiply);
    writeln!(out, "Result: {product:.2}")?;
    Ok(())
}

/// Expects exactly two positionals; the dispatcher checks arity first.
pub fn divide(invocation: &Invocation, out: &mut dyn Write) -> crate::Result<()> {
    let (dividend, divisor) = match parse_all(&invocation.positionals).as_deref() {
        Ok(&[dividend, divisor]) => (dividend, divisor),
        Ok(_) => anyhow::bail!("divide expects exactly two operands"),
        Err(error) => return print_error(out, error),
    };
    tracing::trace!(dividend, divisor, "dividing");

    match calculator::divide(dividend, divisor) {
        Ok(quotient) => writeln!(out, "Result: {quotient:.2}")?,
        Err(error) => print_error(out, error)?,
    }
    Ok(())
}

/// Expects exactly one positional; the dispatcher checks arity first.
pub fn sqrt(invocation: &Invocation, out: &mut dyn Write) -> crate::Result<()> {
    let value = match parse_all(&invocation.positionals).as_deref() {
        Ok(&[value]) => value,
        Ok(_) => anyhow::bail!("sqrt expects exactly one operand"),
        Err(error) => return print_error(out, error),
    };
    tracing::trace!(value, "taking square root");

    match calculator::sqrt(value) {
        Ok(root) => writeln!(out, "Result: {root:.6}")?,
        Err(error) => print_error(out, error)?,
    }
    Ok(())
}
