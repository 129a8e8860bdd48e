//! Tween engine
//!
//! Timelines of property-interpolation steps over a rig's
//! [`ParameterSet`](crate::rig::ParameterSet), with repeat/yoyo/pause
//! semantics and an easing-curve library. Timelines advance once per frame
//! inside the app's frame callback; nothing here keeps its own clock.

pub mod easing;
pub mod timeline;

pub use easing::Easing;
pub use timeline::{Repeat, Timeline, Tween};
