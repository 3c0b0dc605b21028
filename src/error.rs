use thiserror::Error;

pub type CalcResult<T> = Result<T, CalcError>;

/// Failure modes of the calculator operations that can fail.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("cannot calculate square root of negative number")]
    NegativeSqrt,
}

/// A positional token that could not be read as a number.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{token}' is not a valid number")]
pub struct NumberError {
    pub token: String,
}

/// Positional count outside a command's arity rule.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ArityError {
    #[error("requires at least {min} arg(s), only received {received}")]
    TooFew { min: usize, received: usize },
    #[error("accepts at most {max} arg(s), received {received}")]
    TooMany { max: usize, received: usize },
    #[error("accepts {expected} arg(s), received {received}")]
    Exact { expected: usize, received: usize },
    #[error("accepts between {min} and {max} arg(s), received {received}")]
    OutOfRange {
        min: usize,
        max: usize,
        received: usize,
    },
}

/// Structural misuse of the command line, reported on stderr with usage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("unknown command \"{token}\" for \"{parent}\"{}", suggestion_block(.suggestions))]
    UnknownCommand {
        token: String,
        parent: String,
        suggestions: Vec<String>,
    },
    #[error("unknown flag: {flag}")]
    UnknownFlag { flag: String },
    #[error(transparent)]
    Arity(#[from] ArityError),
    #[error("{0}")]
    Usage(String),
}

fn suggestion_block(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }

    let mut block = String::from("\n\nDid you mean this?");
    for name in suggestions {
        block.push_str("\n\t");
        block.push_str(name);
    }
    block
}
