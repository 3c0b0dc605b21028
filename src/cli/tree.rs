use std::{collections::BTreeMap, io::Write};

use clap::{Arg, ArgAction};

use crate::error::ArityError;

/// Id of the clap argument that collects positional tokens.
pub(crate) const ARGS_ID: &str = "args";
const HELP_ID: &str = "help";

/// Leaf entry point: receives the resolved invocation and writes to stdout.
pub type Handler = fn(&Invocation, &mut dyn Write) -> crate::Result<()>;

/// Constraint on the number of positional arguments a command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    AtMost(usize),
    Range(usize, usize),
}

impl Arity {
    pub fn check(self, received: usize) -> Result<(), ArityError> {
        match self {
            Arity::Exactly(expected) if received != expected => {
                Err(ArityError::Exact { expected, received })
            }
            Arity::AtLeast(min) if received < min => Err(ArityError::TooFew { min, received }),
            Arity::AtMost(max) if received > max => Err(ArityError::TooMany { max, received }),
            Arity::Range(min, max) if received < min || received > max => {
                Err(ArityError::OutOfRange { min, max, received })
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Bool,
    String { default: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pub long: &'static str,
    pub short: Option<char>,
    pub kind: FlagKind,
    pub help: &'static str,
}

impl Flag {
    pub const fn bool(long: &'static str, short: Option<char>, help: &'static str) -> Self {
        Self {
            long,
            short,
            kind: FlagKind::Bool,
            help,
        }
    }

    pub const fn string(
        long: &'static str,
        short: Option<char>,
        default: &'static str,
        help: &'static str,
    ) -> Self {
        Self {
            long,
            short,
            kind: FlagKind::String { default },
            help,
        }
    }

    fn to_arg(&self) -> Arg {
        let mut arg = Arg::new(self.long).long(self.long).help(self.help);
        if let Some(short) = self.short {
            arg = arg.short(short);
        }

        match self.kind {
            FlagKind::Bool => arg.action(ArgAction::SetTrue),
            FlagKind::String { default } => arg
                .action(ArgAction::Set)
                .value_name("string")
                .default_value(default),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    Bool(bool),
    String(String),
}

/// Flag values keyed by long name, defaults already applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlagValues(BTreeMap<&'static str, FlagValue>);

impl FlagValues {
    pub fn insert(&mut self, name: &'static str, value: FlagValue) {
        self.0.insert(name, value);
    }

    /// `false` when the flag is missing or not boolean.
    pub fn get_bool(&self, name: &str) -> bool {
        matches!(self.0.get(name), Some(FlagValue::Bool(true)))
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(FlagValue::String(value)) => Some(value.as_str()),
            _ => None,
        }
    }
}

/// Everything a handler gets to see about its command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invocation {
    pub positionals: Vec<String>,
    pub flags: FlagValues,
}

#[derive(Debug, Clone)]
pub enum Node {
    /// Groups children. Without a handler, invoking it prints help.
    Internal {
        children: Vec<Command>,
        handler: Option<Handler>,
    },
    Leaf { arity: Arity, handler: Handler },
}

/// A named node in the verb tree.
#[derive(Debug, Clone)]
pub struct Command {
    pub name: &'static str,
    /// Argument part of the usage line, e.g. `[name]`.
    pub usage: &'static str,
    pub short: &'static str,
    pub long: &'static str,
    pub flags: Vec<Flag>,
    pub node: Node,
}

impl Command {
    pub fn children(&self) -> &[Command] {
        match &self.node {
            Node::Internal { children, .. } => children,
            Node::Leaf { .. } => &[],
        }
    }

    pub fn child(&self, name: &str) -> Option<&Command> {
        self.children().iter().find(|child| child.name == name)
    }

    /// Builds the clap parser for this node alone. Children are listed in the
    /// help text but resolved by the dispatcher, not by clap.
    pub(crate) fn to_clap(&self, path: &str) -> clap::Command {
        let usage = match &self.node {
            Node::Internal { .. } => format!("{path} [command]"),
            Node::Leaf { .. } if self.usage.is_empty() => format!("{path} [flags]"),
            Node::Leaf { .. } => format!("{path} {} [flags]", self.usage),
        };

        let mut cmd = clap::Command::new(self.name)
            .bin_name(path.to_string())
            .about(self.short)
            .long_about(self.long)
            .override_usage(usage)
            .disable_help_flag(true)
            .disable_help_subcommand(true)
            .arg(
                Arg::new(HELP_ID)
                    .short('h')
                    .long("help")
                    .help(format!("help for {}", self.name))
                    .action(ArgAction::HelpLong),
            )
            .arg(
                Arg::new(ARGS_ID)
                    .num_args(1..)
                    .action(ArgAction::Append)
                    .allow_negative_numbers(true)
                    .hide(true),
            );

        for flag in &self.flags {
            cmd = cmd.arg(flag.to_arg());
        }

        let children = self.children();
        if !children.is_empty() {
            let mut listing = String::from("Available Commands:");
            for child in children {
                listing.push_str(&format!("\n  {:<12}{}", child.name, child.short));
            }
            listing.push_str(&format!(
                "\n\nUse \"{path} [command] --help\" for more information about a command."
            ));
            cmd = cmd.after_long_help(listing);
        }

        cmd
    }
}
