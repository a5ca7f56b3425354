pub mod checkout_wizard;
pub mod commands;
pub mod output;
mod shell;

pub use commands::{CliMode, CommandError, ShellContext};
pub use shell::run_cli;

use thiserror::Error;

/// Fatal shell-level failures; per-command problems stay in [`CommandError`].
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Core(#[from] crate::errors::CoreError),
}
