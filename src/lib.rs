#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod app;
pub mod control;
pub mod errors;
pub mod renderer;
pub mod resources;
pub mod rig;
pub mod scene;
pub mod tween;
pub mod utils;

pub use app::input::{Input, Key, KeyEvent, MouseButton};
pub use app::{App, RenderContext};
pub use control::{Animator, Intent, KeyBindings, Locomotion, ProjectileLauncher};
pub use errors::{PantinError, Result};
pub use renderer::{HeadlessRenderer, Renderer, RendererSettings};
pub use resources::{Geometry, Material, Mesh, hsl};
pub use rig::{Dog, Figure, ParameterSet, Puppet, Rig};
pub use scene::{Camera, Fog, Light, Node, NodeHandle, Scene, Transform};
pub use tween::{Easing, Repeat, Timeline, Tween};
pub use utils::{FpsCounter, IntervalTimer, OrbitControls, Timer};
