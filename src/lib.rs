//! Library exports for the gridpaint editor.
//!
//! Exposes the pixel grid, the flood fill, the command dispatcher and the REPL
//! so that the binaries and integration tests share one implementation.

pub mod command;
pub mod config;
pub mod draw;
pub mod repl;
pub mod session;

pub use config::Config;
