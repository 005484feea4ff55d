//! CubeKit Core Library
//!
//! Platform-agnostic geometry and drag/resize interaction logic for a
//! rectangular shape confined to a square container.

pub mod config;
pub mod cube;
pub mod input;
pub mod interaction;

pub use config::{ConfigError, InteractionConfig};
pub use cube::CubeState;
pub use input::{ElementBounds, PointerInput};
pub use interaction::{CursorHint, InteractionState, Side};
