//! Declarative verb tree and the dispatcher that routes argv through it.

mod dispatch;
mod tree;

pub use dispatch::{dispatch, EXIT_OK, EXIT_USAGE};
pub use tree::{Arity, Command, Flag, FlagKind, FlagValue, FlagValues, Handler, Invocation, Node};

use crate::commands;

pub const APP_NAME: &str = "go-cli-test";

const ROOT_SHORT: &str = "A simple CLI tool for greetings and arithmetic";
const ROOT_LONG: &str = "A demonstration CLI application that showcases:
- Command dispatch over a nested verb tree
- Flag parsing with typed defaults
- Unit testing best practices";

/// Builds the full command tree: `greet` and `math` under the root.
pub fn command_tree() -> Command {
    Command {
        name: APP_NAME,
        usage: "",
        short: ROOT_SHORT,
        long: ROOT_LONG,
        flags: Vec::new(),
        node: Node::Internal {
            children: vec![commands::greet::command(), commands::math::command()],
            handler: Some(welcome),
        },
    }
}

fn welcome(_invocation: &Invocation, out: &mut dyn std::io::Write) -> crate::Result<()> {
    writeln!(
        out,
        "Welcome to {APP_NAME}! Use --help to see available commands."
    )?;
    Ok(())
}
