//! Pointer input types for unified mouse/touch handling.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Bounding rectangle of the interactive element, in client coordinates.
///
/// Only the top-left corner is needed to convert pointer positions into
/// element-local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementBounds {
    pub left: f64,
    pub top: f64,
}

impl ElementBounds {
    /// Create bounds from the element's top-left corner.
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// A discrete pointer event carrying absolute client coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerInput {
    /// A mouse event with a single position.
    Mouse { position: Point },
    /// A touch event with zero or more contact points.
    Touch { points: Vec<Point> },
}

impl PointerInput {
    /// The event's client position: the mouse position, or the first touch
    /// point. A touch event with no contact points yields `None`.
    pub fn client_position(&self) -> Option<Point> {
        match self {
            Self::Mouse { position } => Some(*position),
            Self::Touch { points } => points.first().copied(),
        }
    }

    /// The event's position relative to the element's top-left corner.
    pub fn local_position(&self, bounds: ElementBounds) -> Option<Point> {
        self.client_position()
            .map(|p| Point::new(p.x - bounds.left, p.y - bounds.top))
    }
}
