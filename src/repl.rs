//! Interactive read-eval-print loop.
//!
//! Reads one command per line, runs it through the [`Dispatcher`] and writes
//! the rendered image, the help listing, or a one-line error message. Command
//! errors never end the loop; only `terminate`, end of input, or an I/O
//! failure do.

use crate::command::{CommandError, Dispatcher, Outcome};
use crate::config::Config;
use crate::session::Session;
use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use std::io::{BufRead, Write};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user ran the terminate command.
    Terminated,
    /// The input stream ended.
    EndOfInput,
}

/// An editing session bound to a command table and prompt.
pub struct Repl {
    session: Session,
    dispatcher: Dispatcher,
    prompt: Option<String>,
}

impl Repl {
    pub fn new(session: Session, dispatcher: Dispatcher, prompt: Option<String>) -> Self {
        Self {
            session,
            dispatcher,
            prompt,
        }
    }

    /// Builds a REPL from loaded configuration.
    ///
    /// # Errors
    /// Returns an error if the configured command names are invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        let dispatcher =
            Dispatcher::new(&config.commands).map_err(|e| anyhow!("Invalid [commands]: {e}"))?;
        let prompt = config.repl.show_prompt.then(|| config.repl.prompt.clone());

        Ok(Self::new(
            Session::new(config.canvas.limits()),
            dispatcher,
            prompt,
        ))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs one line and returns what it produced.
    ///
    /// Returns `None` for a blank line.
    pub fn eval(&mut self, line: &str) -> Option<Result<Outcome, CommandError>> {
        self.dispatcher.dispatch_line(&mut self.session, line)
    }

    /// Reads and runs commands until the session terminates or input ends.
    ///
    /// # Errors
    /// Returns an error only for I/O failures on `input` or `output`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<ExitReason> {
        info!("Session started");
        let mut buf = Vec::new();

        while self.session.is_running() {
            if let Some(prompt) = &self.prompt {
                write!(output, "{prompt}").context("Failed to write prompt")?;
                output.flush().context("Failed to flush output")?;
            }

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("Failed to read command")?;
            if read == 0 {
                debug!("Input closed");
                return Ok(ExitReason::EndOfInput);
            }

            // Undecodable bytes become U+FFFD and fail as ordinary bad tokens.
            let line = String::from_utf8_lossy(&buf);
            match self.eval(&line) {
                None => {}
                Some(Ok(outcome)) => write_outcome(&mut output, &outcome)?,
                Some(Err(err)) => {
                    debug!("Command '{}' failed: {:?}", line.trim(), err);
                    writeln!(output, "{err}").context("Failed to write error")?;
                }
            }
        }

        info!("Session terminated");
        Ok(ExitReason::Terminated)
    }
}

fn write_outcome<W: Write>(output: &mut W, outcome: &Outcome) -> Result<()> {
    match outcome {
        Outcome::Render(lines) | Outcome::Help(lines) => {
            for line in lines {
                writeln!(output, "{line}").context("Failed to write output")?;
            }
        }
        Outcome::Done | Outcome::Terminated => {}
    }
    Ok(())
}
