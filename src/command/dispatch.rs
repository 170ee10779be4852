//! Command validation and execution against a session.

use super::error::CommandError;
use super::parse::Invocation;
use crate::config::{Command, CommandsConfig};
use crate::draw::{Grid, Shape, flood_fill, render_rows};
use crate::session::Session;
use log::debug;
use std::collections::HashMap;

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran and has nothing to print.
    Done,
    /// Rendered image rows to print.
    Render(Vec<String>),
    /// Help listing to print.
    Help(Vec<String>),
    /// The session ended; the REPL should stop reading.
    Terminated,
}

/// Maps command names to commands and runs them on a [`Session`].
#[derive(Debug, Clone)]
pub struct Dispatcher {
    commands: HashMap<String, Command>,
    names: CommandsConfig,
}

impl Dispatcher {
    /// Builds a dispatcher from the configured command names.
    ///
    /// Returns an error if the configuration assigns a name twice or contains
    /// an unusable name.
    pub fn new(names: &CommandsConfig) -> Result<Self, String> {
        Ok(Self {
            commands: names.build_command_map()?,
            names: names.clone(),
        })
    }

    /// Looks up `name` and checks the argument count against its arity.
    pub fn resolve(&self, name: &str, supplied: usize) -> Result<Command, CommandError> {
        let command = *self
            .commands
            .get(name)
            .ok_or_else(|| CommandError::UnknownCommand {
                name: name.to_string(),
            })?;

        if supplied != command.arity() {
            return Err(CommandError::BadArity {
                command: name.to_string(),
                supplied,
                required: command.arity(),
            });
        }

        Ok(command)
    }

    /// Tokenizes and runs one input line. Returns `None` for a blank line.
    ///
    /// Arguments are only parsed as integers once the name and argument count
    /// have been validated.
    pub fn dispatch_line(
        &self,
        session: &mut Session,
        line: &str,
    ) -> Option<Result<Outcome, CommandError>> {
        let invocation = Invocation::tokenize(line)?;
        Some(self.run_invocation(session, &invocation))
    }

    fn run_invocation(
        &self,
        session: &mut Session,
        invocation: &Invocation<'_>,
    ) -> Result<Outcome, CommandError> {
        let command = self.resolve(invocation.name, invocation.args.len())?;
        let args = invocation.integer_args()?;
        self.execute(session, command, invocation.name, &args)
    }

    /// Validates and runs the command called `name` with integer `args`.
    ///
    /// Checks are applied in order: unknown name, wrong argument count,
    /// missing image, then grid errors from the operation itself.
    pub fn dispatch(
        &self,
        session: &mut Session,
        name: &str,
        args: &[i64],
    ) -> Result<Outcome, CommandError> {
        let command = self.resolve(name, args.len())?;
        self.execute(session, command, name, args)
    }

    fn execute(
        &self,
        session: &mut Session,
        command: Command,
        name: &str,
        args: &[i64],
    ) -> Result<Outcome, CommandError> {
        debug!("Dispatching {:?} as '{}' with {:?}", command, name, args);

        match command {
            Command::CreateImage => {
                session.create_image(args[0], args[1])?;
            }
            Command::Terminate => {
                session.terminate();
                return Ok(Outcome::Terminated);
            }
            Command::Help => return Ok(Outcome::Help(self.help_lines())),
            Command::Clear => active_image(session, name)?.clear(),
            Command::SetPixel => Shape::Pixel {
                x: args[0],
                y: args[1],
                color: args[2],
            }
            .apply(active_image(session, name)?)?,
            Command::DrawVertical => Shape::VerticalSegment {
                col: args[0],
                y1: args[1],
                y2: args[2],
                color: args[3],
            }
            .apply(active_image(session, name)?)?,
            Command::DrawHorizontal => Shape::HorizontalSegment {
                x1: args[0],
                x2: args[1],
                row: args[2],
                color: args[3],
            }
            .apply(active_image(session, name)?)?,
            Command::Fill => {
                flood_fill(active_image(session, name)?, args[0], args[1], args[2])?;
            }
            Command::Show => {
                let image = active_image(session, name)?;
                return Ok(Outcome::Render(render_rows(image).collect()));
            }
        }

        Ok(Outcome::Done)
    }

    /// One line per command: its names, parameters and a summary.
    pub fn help_lines(&self) -> Vec<String> {
        Command::ALL
            .iter()
            .filter(|command| !self.names.names(**command).is_empty())
            .map(|&command| {
                let mut usage = self.names.names(command).join(" | ");
                for param in command.params() {
                    usage.push_str(&format!(" <{param}>"));
                }
                format!("{usage:<36} {}", command.summary())
            })
            .collect()
    }
}

/// The image commands operate on, or `NoActiveImage` before one exists.
fn active_image<'s>(session: &'s mut Session, name: &str) -> Result<&'s mut Grid, CommandError> {
    session
        .image_mut()
        .ok_or_else(|| CommandError::NoActiveImage {
            command: name.to_string(),
        })
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(&CommandsConfig::default())
            .expect("default command names are distinct and non-empty")
    }
}
