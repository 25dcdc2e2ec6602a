//! ## linkstack-cli
//! **Reverses every argument through a linked stack**
//!
//! Each word is pushed one character at a time and popped back out, so
//! words longer than the configured capacity come back truncated.

use clap::Parser;

mod commands;
mod error;
mod reverse;

use commands::Cli;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    commands::run_command(cli)?;
    Ok(())
}
