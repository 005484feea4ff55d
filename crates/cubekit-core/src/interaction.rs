//! Drag/resize interaction state machine for the cube.
//!
//! Pointer events flow in, the shared [`CubeState`] geometry is mutated in
//! place, and a cursor affordance is derived from whichever edge the pointer
//! currently targets. The state machine raises no errors: all inputs are
//! clamped, and malformed events (a touch with no contact points) are
//! ignored.

use crate::config::{ConfigError, InteractionConfig};
use crate::cube::CubeState;
use crate::input::{ElementBounds, PointerInput};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Which edge of the cube a pointer targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Cursor affordance for the targeted side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorHint {
    /// No edge targeted - the default cursor.
    #[default]
    Default,
    /// Left or right edge - horizontal resize cursor (`ew-resize`).
    ResizeHorizontal,
    /// Top or bottom edge - vertical resize cursor (`ns-resize`).
    ResizeVertical,
}

impl Side {
    /// The cursor affordance shown while this side is targeted.
    pub fn cursor_hint(self) -> CursorHint {
        match self {
            Self::Left | Self::Right => CursorHint::ResizeHorizontal,
            Self::Top | Self::Bottom => CursorHint::ResizeVertical,
        }
    }
}

/// Snapshot taken when a drag starts.
///
/// Deltas are always applied against this snapshot, never the live geometry,
/// so successive move events do not compound error.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    /// The edge being dragged.
    side: Side,
    /// Pointer-down position in element-local coordinates.
    start: Point,
    /// Cube geometry at drag start.
    origin: CubeState,
}

/// Callback invoked after every geometry mutation.
pub type ChangeListener = Box<dyn FnMut(&CubeState)>;

/// Owns the cube geometry and the drag/hover state, and exposes the
/// pointer-event handlers that drive them.
///
/// Handlers run to completion on the calling thread; the caller is
/// responsible for event subscription and for feeding events in delivery
/// order.
pub struct InteractionState {
    config: InteractionConfig,
    cube: CubeState,
    session: Option<DragSession>,
    hover_side: Option<Side>,
    on_change: Option<ChangeListener>,
}

impl std::fmt::Debug for InteractionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionState")
            .field("config", &self.config)
            .field("cube", &self.cube)
            .field("session", &self.session)
            .field("hover_side", &self.hover_side)
            .finish_non_exhaustive()
    }
}

impl InteractionState {
    /// Create an interaction state with the cube centered in the container.
    pub fn new(config: InteractionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            cube: CubeState::centered(config.container_size, config.initial_size),
            config,
            session: None,
            hover_side: None,
            on_change: None,
        })
    }

    /// Current cube geometry.
    pub fn cube(&self) -> &CubeState {
        &self.cube
    }

    /// The configuration this state was created with.
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The edge being dragged, if a drag is in progress.
    pub fn dragged_side(&self) -> Option<Side> {
        self.session.as_ref().map(|s| s.side)
    }

    /// The edge under the pointer, if any (hover only, not dragging).
    pub fn hover_side(&self) -> Option<Side> {
        self.hover_side
    }

    /// Subscribe to geometry changes, e.g. to trigger a render.
    ///
    /// Replaces any previously installed listener.
    pub fn set_change_listener(&mut self, listener: impl FnMut(&CubeState) + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    fn notify(&mut self) {
        if let Some(listener) = &mut self.on_change {
            listener(&self.cube);
        }
    }

    /// Find the edge closest to `(x, y)` in element-local coordinates.
    ///
    /// Distances to all four edges are compared; the first minimal one wins
    /// in the fixed order left, right, top, bottom. The edge is returned
    /// only if its distance is strictly below the drag threshold.
    pub fn detect_side(&self, x: f64, y: f64) -> Option<Side> {
        let distances = [
            (Side::Left, (x - self.cube.left()).abs()),
            (Side::Right, (x - self.cube.right()).abs()),
            (Side::Top, (y - self.cube.top()).abs()),
            (Side::Bottom, (y - self.cube.bottom()).abs()),
        ];

        let mut closest = distances[0];
        for candidate in &distances[1..] {
            if candidate.1 < closest.1 {
                closest = *candidate;
            }
        }

        (closest.1 < self.config.drag_threshold).then_some(closest.0)
    }

    /// Begin a drag if the pointer is near an edge.
    ///
    /// Returns `true` if a drag began, in which case the caller should
    /// suppress the event's default behavior (e.g. text selection). Returns
    /// `false` - and leaves all state untouched - when no edge is within
    /// the threshold or the event carries no position.
    #[must_use]
    pub fn begin_drag(&mut self, input: &PointerInput, bounds: ElementBounds) -> bool {
        let Some(position) = input.local_position(bounds) else {
            log::debug!("ignoring pointer-down without a position");
            return false;
        };
        let Some(side) = self.detect_side(position.x, position.y) else {
            return false;
        };

        log::debug!(
            "drag started on {:?} edge at ({:.1}, {:.1})",
            side,
            position.x,
            position.y
        );
        self.session = Some(DragSession {
            side,
            start: position,
            origin: self.cube,
        });
        true
    }

    /// Track a pointer move during a drag, resizing the cube.
    ///
    /// No-op when not dragging.
    pub fn update_drag(&mut self, input: &PointerInput, bounds: ElementBounds) {
        let Some(session) = self.session else {
            return;
        };
        let Some(position) = input.local_position(bounds) else {
            return;
        };

        let delta = Vec2::new(position.x - session.start.x, position.y - session.start.y);
        self.resize(session.side, session.origin, delta);
    }

    /// Apply the per-side resize rule against the drag-start snapshot.
    ///
    /// For left/top the position follows the pointer while the opposite edge
    /// stays fixed; once the size clamps at the minimum the position keeps
    /// tracking the pointer, so the opposite edge starts to slide.
    fn resize(&mut self, side: Side, origin: CubeState, delta: Vec2) {
        let min = self.config.min_size;
        match side {
            Side::Left => {
                let new_width = (origin.w - delta.x).max(min);
                if new_width >= min {
                    self.cube.x = origin.x + delta.x;
                    self.cube.w = new_width;
                }
            }
            Side::Right => {
                self.cube.w = (origin.w + delta.x).max(min);
            }
            Side::Top => {
                let new_height = (origin.h - delta.y).max(min);
                if new_height >= min {
                    self.cube.y = origin.y + delta.y;
                    self.cube.h = new_height;
                }
            }
            Side::Bottom => {
                self.cube.h = (origin.h + delta.y).max(min);
            }
        }

        log::trace!(
            "resized via {:?} edge to ({:.1}, {:.1}) {}x{}",
            side,
            self.cube.x,
            self.cube.y,
            self.cube.w,
            self.cube.h
        );
        self.notify();
    }

    /// Update the hovered edge for cursor affordance.
    ///
    /// No-op while dragging - the active drag must not be perturbed.
    pub fn update_hover(&mut self, input: &PointerInput, bounds: ElementBounds) {
        if self.session.is_some() {
            return;
        }
        let Some(position) = input.local_position(bounds) else {
            return;
        };
        self.hover_side = self.detect_side(position.x, position.y);
    }

    /// End the current drag, if any. Idempotent.
    pub fn end_drag(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("drag on {:?} edge finished", session.side);
        }
    }

    /// Clear the hovered edge when the pointer leaves the interactive area.
    ///
    /// A drag in progress keeps its state.
    pub fn leave(&mut self) {
        if self.session.is_none() {
            self.hover_side = None;
        }
    }

    /// Cursor affordance for the currently targeted edge.
    ///
    /// The dragged side takes precedence over the hovered side.
    pub fn cursor_hint(&self) -> CursorHint {
        self.dragged_side()
            .or(self.hover_side)
            .map(Side::cursor_hint)
            .unwrap_or_default()
    }
}
