//! Cube geometry state.

use serde::{Deserialize, Serialize};

/// Position and size of the cube, in container-local coordinates.
///
/// `x`/`y` is the top-left corner. After any interaction the width and
/// height never fall below the configured minimum size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeState {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl CubeState {
    /// Create a cube of `initial_size` centered in a square container.
    pub fn centered(container_size: f64, initial_size: f64) -> Self {
        let origin = (container_size - initial_size) / 2.0;
        Self {
            x: origin,
            y: origin,
            w: initial_size,
            h: initial_size,
        }
    }

    /// X coordinate of the left edge.
    pub fn left(&self) -> f64 {
        self.x
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Y coordinate of the top edge.
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}
