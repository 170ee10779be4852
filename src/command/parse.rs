//! Tokenizing of input lines.

use super::error::CommandError;

/// A command line split into its name and raw argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

impl<'a> Invocation<'a> {
    /// Splits `line` on whitespace. Returns `None` for a blank line.
    pub fn tokenize(line: &'a str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next()?;
        Some(Self {
            name,
            args: tokens.collect(),
        })
    }

    /// Parses every argument as a decimal integer.
    ///
    /// # Errors
    /// Returns [`CommandError::ArgumentParse`] naming the first token that is
    /// not an integer.
    pub fn integer_args(&self) -> Result<Vec<i64>, CommandError> {
        self.args
            .iter()
            .map(|token| {
                token.parse::<i64>().map_err(|_| CommandError::ArgumentParse {
                    token: (*token).to_string(),
                })
            })
            .collect()
    }
}
