use std::io::{self, Write};

use anyhow::Context;

pub mod calculator;
pub mod cli;
pub mod commands;
pub mod error;
pub mod greeter;

mod calculator_proptest;
mod greeter_proptest;

pub type Result<T> = anyhow::Result<T>;

/// Entry point used by the binary crate. Returns the process exit code.
pub fn run() -> Result<i32> {
    init_tracing();

    let tree = cli::command_tree();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let code = cli::dispatch(&tree, std::env::args_os().skip(1), &mut stdout, &mut stderr)
        .context("failed to execute command")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(code)
}

fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
