//! Configuration type definitions.

use crate::draw::grid::{DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};
use crate::draw::{BLANK, CanvasLimits, Color};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Image limits and defaults.
///
/// Controls which dimensions `create-image` accepts and the color new
/// images start with.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Largest accepted image width in pixels (valid range: 1 - 4096)
    #[serde(default = "default_max_width")]
    pub max_width: u32,

    /// Largest accepted image height in pixels (valid range: 1 - 4096)
    #[serde(default = "default_max_height")]
    pub max_height: u32,

    /// Color of every pixel after create-image and clear
    #[serde(default = "default_initial_color")]
    pub initial_color: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            max_height: default_max_height(),
            initial_color: default_initial_color(),
        }
    }
}

impl CanvasConfig {
    /// Limits handed to the session for grid creation.
    pub fn limits(&self) -> CanvasLimits {
        CanvasLimits {
            max_width: self.max_width,
            max_height: self.max_height,
            initial_color: self.initial_color,
        }
    }
}

/// Interactive prompt preferences.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReplConfig {
    /// Text written before each command is read
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Write the prompt at all (disable for scripted input)
    #[serde(default = "default_show_prompt")]
    pub show_prompt: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            show_prompt: default_show_prompt(),
        }
    }
}

fn default_max_width() -> u32 {
    DEFAULT_MAX_WIDTH
}

fn default_max_height() -> u32 {
    DEFAULT_MAX_HEIGHT
}

fn default_initial_color() -> Color {
    BLANK
}

fn default_prompt() -> String {
    ">>> ".to_string()
}

fn default_show_prompt() -> bool {
    true
}
