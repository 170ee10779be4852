//! Command name configuration and parsing.
//!
//! Every editor command can be invoked under one or more names. The defaults
//! accept both the single-letter tokens and a spelled-out form.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All commands understood by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    CreateImage,
    Clear,
    SetPixel,
    DrawVertical,
    DrawHorizontal,
    Fill,
    Show,
    Terminate,
    Help,
}

impl Command {
    /// Every command, in help-listing order.
    pub const ALL: [Command; 9] = [
        Command::CreateImage,
        Command::Clear,
        Command::SetPixel,
        Command::DrawVertical,
        Command::DrawHorizontal,
        Command::Fill,
        Command::Show,
        Command::Terminate,
        Command::Help,
    ];

    /// Number of integer arguments the command takes.
    pub fn arity(self) -> usize {
        self.params().len()
    }

    /// Names of the integer arguments, in order.
    pub fn params(self) -> &'static [&'static str] {
        match self {
            Command::CreateImage => &["width", "height"],
            Command::SetPixel => &["x", "y", "color"],
            Command::DrawVertical => &["col", "y1", "y2", "color"],
            Command::DrawHorizontal => &["x1", "x2", "row", "color"],
            Command::Fill => &["x", "y", "color"],
            Command::Clear | Command::Show | Command::Terminate | Command::Help => &[],
        }
    }

    /// One-line summary for the help listing.
    pub fn summary(self) -> &'static str {
        match self {
            Command::CreateImage => "create a blank image, replacing the current one",
            Command::Clear => "reset every pixel to the initial color",
            Command::SetPixel => "color a single pixel",
            Command::DrawVertical => "draw a vertical segment in a column",
            Command::DrawHorizontal => "draw a horizontal segment in a row",
            Command::Fill => "fill the region containing a pixel",
            Command::Show => "print the image",
            Command::Terminate => "discard the image and quit",
            Command::Help => "list available commands",
        }
    }
}

/// Configuration for command names.
///
/// Each command can have several names. Users specify them in config.toml as:
/// ```toml
/// [commands]
/// fill = ["F", "fill", "bucket"]
/// terminate = ["X", "quit"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CommandsConfig {
    #[serde(default = "default_create_image")]
    pub create_image: Vec<String>,

    #[serde(default = "default_clear")]
    pub clear: Vec<String>,

    #[serde(default = "default_set_pixel")]
    pub set_pixel: Vec<String>,

    #[serde(default = "default_draw_vertical")]
    pub draw_vertical: Vec<String>,

    #[serde(default = "default_draw_horizontal")]
    pub draw_horizontal: Vec<String>,

    #[serde(default = "default_fill")]
    pub fill: Vec<String>,

    #[serde(default = "default_show")]
    pub show: Vec<String>,

    #[serde(default = "default_terminate")]
    pub terminate: Vec<String>,

    #[serde(default = "default_help")]
    pub help: Vec<String>,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            create_image: default_create_image(),
            clear: default_clear(),
            set_pixel: default_set_pixel(),
            draw_vertical: default_draw_vertical(),
            draw_horizontal: default_draw_horizontal(),
            fill: default_fill(),
            show: default_show(),
            terminate: default_terminate(),
            help: default_help(),
        }
    }
}

impl CommandsConfig {
    /// Names configured for `command`.
    pub fn names(&self, command: Command) -> &[String] {
        match command {
            Command::CreateImage => &self.create_image,
            Command::Clear => &self.clear,
            Command::SetPixel => &self.set_pixel,
            Command::DrawVertical => &self.draw_vertical,
            Command::DrawHorizontal => &self.draw_horizontal,
            Command::Fill => &self.fill,
            Command::Show => &self.show,
            Command::Terminate => &self.terminate,
            Command::Help => &self.help,
        }
    }

    /// Build a lookup map from command names to commands.
    /// Returns an error if a name is empty, contains whitespace, or is assigned twice.
    pub fn build_command_map(&self) -> Result<HashMap<String, Command>, String> {
        let mut map = HashMap::new();

        for command in Command::ALL {
            for name in self.names(command) {
                if name.is_empty() {
                    return Err(format!("Empty name configured for {:?}", command));
                }
                if name.chars().any(char::is_whitespace) {
                    return Err(format!(
                        "Command name '{}' for {:?} must not contain whitespace",
                        name, command
                    ));
                }
                if let Some(existing) = map.insert(name.clone(), command) {
                    return Err(format!(
                        "Duplicate command name '{}' assigned to both {:?} and {:?}",
                        name, existing, command
                    ));
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default command names
// =============================================================================

fn default_create_image() -> Vec<String> {
    vec!["I".to_string(), "create-image".to_string()]
}

fn default_clear() -> Vec<String> {
    vec!["C".to_string(), "clear".to_string()]
}

fn default_set_pixel() -> Vec<String> {
    vec!["L".to_string(), "set-pixel".to_string()]
}

fn default_draw_vertical() -> Vec<String> {
    vec!["V".to_string(), "draw-vertical".to_string()]
}

fn default_draw_horizontal() -> Vec<String> {
    vec!["H".to_string(), "draw-horizontal".to_string()]
}

fn default_fill() -> Vec<String> {
    vec!["F".to_string(), "fill".to_string()]
}

fn default_show() -> Vec<String> {
    vec!["S".to_string(), "show".to_string()]
}

fn default_terminate() -> Vec<String> {
    vec!["X".to_string(), "terminate".to_string()]
}

fn default_help() -> Vec<String> {
    vec!["?".to_string(), "help".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_map_contains_letters_and_long_names() {
        let map = CommandsConfig::default().build_command_map().unwrap();
        assert_eq!(map.get("I"), Some(&Command::CreateImage));
        assert_eq!(map.get("create-image"), Some(&Command::CreateImage));
        assert_eq!(map.get("F"), Some(&Command::Fill));
        assert_eq!(map.get("X"), Some(&Command::Terminate));
        assert_eq!(map.get("set-pixel"), Some(&Command::SetPixel));
        assert_eq!(map.len(), 18);
    }

    #[test]
    fn names_are_case_sensitive() {
        let map = CommandsConfig::default().build_command_map().unwrap();
        assert!(map.get("i").is_none());
        assert!(map.get("FILL").is_none());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let config = CommandsConfig {
            clear: vec!["F".to_string()],
            ..CommandsConfig::default()
        };
        let err = config.build_command_map().unwrap_err();
        assert!(err.contains("Duplicate command name 'F'"), "{err}");
    }

    #[test]
    fn whitespace_and_empty_names_are_rejected() {
        let config = CommandsConfig {
            show: vec!["sh ow".to_string()],
            ..CommandsConfig::default()
        };
        assert!(config.build_command_map().is_err());

        let config = CommandsConfig {
            show: vec![String::new()],
            ..CommandsConfig::default()
        };
        assert!(config.build_command_map().is_err());
    }

    #[test]
    fn arity_matches_parameter_list() {
        assert_eq!(Command::CreateImage.arity(), 2);
        assert_eq!(Command::Clear.arity(), 0);
        assert_eq!(Command::SetPixel.arity(), 3);
        assert_eq!(Command::DrawVertical.arity(), 4);
        assert_eq!(Command::DrawHorizontal.arity(), 4);
        assert_eq!(Command::Fill.arity(), 3);
        assert_eq!(Command::Show.arity(), 0);
        assert_eq!(Command::Terminate.arity(), 0);
    }

    #[test]
    fn parses_from_toml() {
        let config: CommandsConfig = toml::from_str(r#"fill = ["bucket"]"#).unwrap();
        assert_eq!(config.fill, vec!["bucket".to_string()]);
        assert_eq!(config.show, default_show());
    }
}
