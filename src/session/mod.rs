//! Editing session state.
//!
//! A session owns at most one image at a time together with the flag that
//! keeps the REPL running. Creating a new image discards the previous one.

use crate::draw::{CanvasLimits, Grid, GridError};
use log::info;

/// State shared by every command of one editing session.
#[derive(Debug)]
pub struct Session {
    image: Option<Grid>,
    running: bool,
    limits: CanvasLimits,
}

impl Session {
    /// Creates a running session with no image.
    pub fn new(limits: CanvasLimits) -> Self {
        Self {
            image: None,
            running: true,
            limits,
        }
    }

    pub fn limits(&self) -> &CanvasLimits {
        &self.limits
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn image(&self) -> Option<&Grid> {
        self.image.as_ref()
    }

    pub fn image_mut(&mut self) -> Option<&mut Grid> {
        self.image.as_mut()
    }

    /// Replaces the current image with a fresh `width x height` grid.
    ///
    /// On error the previous image (if any) is kept.
    pub fn create_image(&mut self, width: i64, height: i64) -> Result<&mut Grid, GridError> {
        let grid = Grid::new(width, height, &self.limits)?;
        if self.image.is_some() {
            info!("Replacing current image with a new {}x{} image", width, height);
        }
        Ok(self.image.insert(grid))
    }

    /// Discards the image and stops the session.
    pub fn terminate(&mut self) {
        self.image = None;
        self.running = false;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CanvasLimits::default())
    }
}
