use std::io::Write;

use crate::cli::{Arity, Command, Flag, Invocation, Node};
use crate::greeter::Greeter;

pub const DEFAULT_PREFIX: &str = "Hello";

pub fn command() -> Command {
    Command {
        name: "greet",
        usage: "[name]",
        short: "Greet someone",
        long: "Greet someone with a personalized message",
        flags: vec![
            Flag::bool("uppercase", Some('u'), "Print greeting in uppercase"),
            Flag::string("prefix", Some('p'), DEFAULT_PREFIX, "Greeting prefix"),
        ],
        node: Node::Leaf {
            arity: Arity::AtMost(1),
            handler: run,
        },
    }
}

/// Prints the greeting for the optional name argument.
pub fn run(invocation: &Invocation, out: &mut dyn Write) -> crate::Result<()> {
    let name = invocation
        .positionals
        .first()
        .map(String::as_str)
        .unwrap_or_default();
    let prefix = invocation.flags.get_str("prefix").unwrap_or(DEFAULT_PREFIX);
    let greeter = Greeter::new(prefix);

    let greeting = if invocation.flags.get_bool("uppercase") {
        greeter.greet_uppercase(name)
    } else {
        greeter.greet(name)
    };

    writeln!(out, "{greeting}")?;
    Ok(())
}
