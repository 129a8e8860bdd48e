//! Error Types
//!
//! The main error type [`PantinError`] covers the failure modes of the app
//! shell and renderer backends. All public APIs that can fail return
//! [`Result<T>`], an alias for `std::result::Result<T, PantinError>`.
//!
//! Structural misuse of the scene graph (attaching a node to itself,
//! referencing a missing parent) is not an error value: it is logged and
//! skipped. Violations of construction-order invariants (a pose updater
//! reading a parameter that was never seeded) are programmer errors and
//! panic with context.

use thiserror::Error;

/// The main error type for the pantin playground.
#[derive(Error, Debug)]
pub enum PantinError {
    /// Event loop error (winit).
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// A renderer backend failed to initialize or submit a frame.
    #[error("Renderer error: {0}")]
    Renderer(String),
}

/// Alias for `Result<T, PantinError>`.
pub type Result<T> = std::result::Result<T, PantinError>;
