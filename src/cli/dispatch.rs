use std::{
    ffi::OsString,
    io::{self, Write},
};

use anyhow::Context;
use clap::error::{ContextKind, ContextValue, ErrorKind};

use super::tree::{Command, FlagKind, FlagValue, FlagValues, Invocation, Node, ARGS_ID};
use crate::calculator::parse_number;
use crate::error::DispatchError;

pub const EXIT_OK: i32 = 0;
pub const EXIT_USAGE: i32 = 1;

/// Maximum edit distance for "did you mean" suggestions.
const SUGGESTION_DISTANCE: usize = 2;

/// The command selected by walking the verb tree, plus the tokens left for it.
#[derive(Debug)]
struct Selection<'a> {
    command: &'a Command,
    path: String,
    rest: Vec<OsString>,
}

/// Routes `args` (without the program name) through `tree` and runs the
/// selected command. Results and in-domain errors go to `out`; structural
/// errors go to `err` with usage. Returns the process exit code.
pub fn dispatch<I, T>(
    tree: &Command,
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> crate::Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let selection = select(tree, args.into_iter().map(Into::into).collect());
    tracing::debug!(
        command = %selection.path,
        tokens = selection.rest.len(),
        "selected command"
    );

    let mut parser = selection.command.to_clap(&selection.path);
    if std::ptr::eq(selection.command, tree) {
        parser = parser.version(env!("CARGO_PKG_VERSION"));
    }

    let rest = guard_negative_operands(selection.command, selection.rest);
    let argv = std::iter::once(OsString::from(&selection.path)).chain(rest);
    let matches = match parser.try_get_matches_from_mut(argv) {
        Ok(matches) => matches,
        Err(error) => {
            return match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write!(out, "{}", error.render()).context("failed to write help")?;
                    Ok(EXIT_OK)
                }
                _ => report(&mut parser, &selection.path, translate(&error), err),
            };
        }
    };

    let invocation = Invocation {
        positionals: matches
            .get_many::<String>(ARGS_ID)
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        flags: resolve_flags(selection.command, &matches),
    };

    match &selection.command.node {
        Node::Leaf { arity, handler } => {
            if let Err(arity_error) = arity.check(invocation.positionals.len()) {
                return report(&mut parser, &selection.path, arity_error.into(), err);
            }
            handler(&invocation, out)?;
            Ok(EXIT_OK)
        }
        Node::Internal { children, handler } => {
            if let Some(token) = invocation.positionals.first() {
                let error = DispatchError::UnknownCommand {
                    token: token.clone(),
                    parent: selection.path.clone(),
                    suggestions: suggest(token, children),
                };
                return report(&mut parser, &selection.path, error, err);
            }

            match handler {
                Some(handler) => handler(&invocation, out)?,
                None => {
                    write!(out, "{}", parser.render_long_help()).context("failed to write help")?
                }
            }
            Ok(EXIT_OK)
        }
    }
}

/// Descends while the next token names a child of the current command.
fn select(tree: &Command, tokens: Vec<OsString>) -> Selection<'_> {
    let mut command = tree;
    let mut path = tree.name.to_string();
    let mut consumed = 0;

    for token in &tokens {
        let Some(child) = token.to_str().and_then(|name| command.child(name)) else {
            break;
        };
        command = child;
        path.push(' ');
        path.push_str(child.name);
        consumed += 1;
    }

    Selection {
        command,
        path,
        rest: tokens.into_iter().skip(consumed).collect(),
    }
}

/// Inserts `--` ahead of a trailing run of operands that starts with a
/// negative number, so clap does not read `-.5` or `-inf` as short flags.
/// Left untouched when a real flag follows, when the number is the value of
/// a preceding string flag, or when `--` is already present.
fn guard_negative_operands(command: &Command, mut tokens: Vec<OsString>) -> Vec<OsString> {
    let Some(start) = tokens.iter().position(|token| is_negative_number(token)) else {
        return tokens;
    };

    let tail_is_operands = tokens[start..]
        .iter()
        .all(|token| is_negative_number(token) || !is_flag_like(token));
    let after_separator = tokens[..start].iter().any(|token| token == "--");
    let is_flag_value = start
        .checked_sub(1)
        .is_some_and(|prev| takes_value(command, &tokens[prev]));

    if tail_is_operands && !after_separator && !is_flag_value {
        tokens.insert(start, OsString::from("--"));
    }
    tokens
}

fn is_negative_number(token: &OsString) -> bool {
    token
        .to_str()
        .is_some_and(|token| token.starts_with('-') && parse_number(token).is_ok())
}

fn is_flag_like(token: &OsString) -> bool {
    token
        .to_str()
        .map_or(false, |token| token.starts_with('-') && token != "-")
}

/// Whether `token` is a string flag written without `=`, so the next token is its value.
fn takes_value(command: &Command, token: &OsString) -> bool {
    let Some(token) = token.to_str() else {
        return false;
    };

    command.flags.iter().any(|flag| {
        matches!(flag.kind, FlagKind::String { .. })
            && (token.strip_prefix("--") == Some(flag.long)
                || flag
                    .short
                    .is_some_and(|short| token == format!("-{short}")))
    })
}

fn resolve_flags(command: &Command, matches: &clap::ArgMatches) -> FlagValues {
    let mut values = FlagValues::default();
    for flag in &command.flags {
        let value = match flag.kind {
            FlagKind::Bool => FlagValue::Bool(matches.get_flag(flag.long)),
            FlagKind::String { default } => FlagValue::String(
                matches
                    .get_one::<String>(flag.long)
                    .cloned()
                    .unwrap_or_else(|| default.to_string()),
            ),
        };
        values.insert(flag.long, value);
    }
    values
}

fn translate(error: &clap::Error) -> DispatchError {
    if error.kind() == ErrorKind::UnknownArgument {
        if let Some(ContextValue::String(flag)) = error.get(ContextKind::InvalidArg) {
            return DispatchError::UnknownFlag { flag: flag.clone() };
        }
    }

    let rendered = error.render().to_string();
    let first = rendered.lines().next().unwrap_or_default();
    DispatchError::Usage(first.strip_prefix("error: ").unwrap_or(first).to_string())
}

fn report(
    parser: &mut clap::Command,
    path: &str,
    error: DispatchError,
    err: &mut dyn Write,
) -> crate::Result<i32> {
    tracing::debug!(command = %path, error = %error, "rejected command line");
    write_usage_error(parser, path, &error, err).context("failed to write usage")?;
    Ok(EXIT_USAGE)
}

fn write_usage_error(
    parser: &mut clap::Command,
    path: &str,
    error: &DispatchError,
    err: &mut dyn Write,
) -> io::Result<()> {
    writeln!(err, "Error: {error}")?;
    writeln!(err, "{}", parser.render_usage())?;
    writeln!(err)?;
    writeln!(err, "Run '{path} --help' for usage.")
}

fn suggest(token: &str, children: &[Command]) -> Vec<String> {
    children
        .iter()
        .filter(|child| {
            levenshtein(token, child.name) <= SUGGESTION_DISTANCE
                || (!token.is_empty() && child.name.starts_with(&token.to_lowercase()))
        })
        .map(|child| child.name.to_string())
        .collect()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ca != *cb);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }
    row[b.len()]
}
