//! Character control
//!
//! Turns keyboard edges into discrete [`Intent`]s, runs the per-rig
//! Idle/Walking/Jumping state machine that owns the stock timelines, and
//! manages transient projectiles. Everything here is driven from the frame
//! callback; nothing keeps its own clock.

pub mod animator;
pub mod intent;
pub mod projectile;

pub use animator::{Animator, Locomotion};
pub use intent::{Intent, KeyBindings};
pub use projectile::ProjectileLauncher;
