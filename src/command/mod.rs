//! Command parsing and dispatch.
//!
//! This module turns one line of user input into an operation on the
//! [`Session`](crate::session::Session). Each command declares its arity as
//! data; the dispatcher checks the name, the argument count and the presence
//! of an image, in that order, before touching the grid.

pub mod dispatch;
pub mod error;
pub mod parse;

// Re-export commonly used types at module level
pub use crate::config::Command;
pub use dispatch::{Dispatcher, Outcome};
pub use error::CommandError;
pub use parse::Invocation;
