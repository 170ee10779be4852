//! Errors reported back to the user by the dispatcher.

use crate::draw::GridError;
use thiserror::Error;

/// Failures of a single command. All of them are recoverable: the REPL
/// prints the message and reads the next line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    #[error("Command {command} requires {required} args, not {supplied}")]
    BadArity {
        command: String,
        supplied: usize,
        required: usize,
    },

    #[error("{command} can only be invoked after creating an image.")]
    NoActiveImage { command: String },

    #[error("Args must all be integer values (got '{token}').")]
    ArgumentParse { token: String },

    #[error(transparent)]
    Grid(#[from] GridError),
}
