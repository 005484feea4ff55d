//! Interaction configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by configuration validation.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("sizes must be positive (container: {container_size}, initial: {initial_size}, min: {min_size})")]
    NonPositiveSize {
        container_size: f64,
        initial_size: f64,
        min_size: f64,
    },
    #[error("initial size {initial_size} is smaller than minimum size {min_size}")]
    InitialBelowMin { initial_size: f64, min_size: f64 },
    #[error("container size {container_size} cannot hold initial size {initial_size}")]
    ContainerTooSmall {
        container_size: f64,
        initial_size: f64,
    },
    #[error("drag threshold must be non-negative, got {0}")]
    NegativeThreshold(f64),
}

/// Configuration for one [`InteractionState`] instance.
///
/// Immutable for the lifetime of the interaction state.
///
/// [`InteractionState`]: crate::interaction::InteractionState
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Side length of the square container.
    pub container_size: f64,
    /// Initial width and height of the cube.
    pub initial_size: f64,
    /// Minimum width and height the cube can be resized to.
    pub min_size: f64,
    /// Maximum distance from an edge at which a pointer still targets it.
    pub drag_threshold: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            container_size: 500.0,
            initial_size: 100.0,
            min_size: 50.0,
            drag_threshold: 10.0,
        }
    }
}

impl InteractionConfig {
    /// Check the configuration for internally inconsistent values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.container_size <= 0.0 || self.initial_size <= 0.0 || self.min_size <= 0.0 {
            return Err(ConfigError::NonPositiveSize {
                container_size: self.container_size,
                initial_size: self.initial_size,
                min_size: self.min_size,
            });
        }
        if self.initial_size < self.min_size {
            return Err(ConfigError::InitialBelowMin {
                initial_size: self.initial_size,
                min_size: self.min_size,
            });
        }
        if self.container_size < self.initial_size {
            return Err(ConfigError::ContainerTooSmall {
                container_size: self.container_size,
                initial_size: self.initial_size,
            });
        }
        if self.drag_threshold < 0.0 {
            return Err(ConfigError::NegativeThreshold(self.drag_threshold));
        }
        Ok(())
    }
}
