use std::borrow::Cow;

use rustc_hash::FxHashMap;

/// Well-known parameter names shared by the rig builders, the stock
/// timelines and the pose updaters.
pub mod names {
    pub const X: &str = "x";
    pub const Y: &str = "y";
    pub const Z: &str = "z";
    /// Yaw around the vertical axis.
    pub const RY: &str = "ry";
    pub const ARM_ROTATION: &str = "arm_rotation";
    pub const WALK_ROTATION: &str = "walk_rotation";
    pub const HEAD_ROTATION: &str = "head_rotation";
    pub const BODY_ROTATION: &str = "body_rotation";
    pub const LEFT_EYE_SCALE: &str = "left_eye_scale";
}

/// Flat mapping of named animatable scalars, owned by one rig.
///
/// Writers: timelines (continuous interpolation) and intent handling
/// (discrete increments). Pose updaters only read.
///
/// Every parameter a pose updater or timeline touches must be seeded by the
/// rig builder before the first frame. Reading or rewriting a name that was
/// never seeded is a construction-order bug and panics.
#[derive(Debug, Clone, Default)]
pub struct ParameterSet {
    values: FxHashMap<Cow<'static, str>, f32>,
}

impl ParameterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds or replaces a parameter.
    pub fn set(&mut self, name: impl Into<Cow<'static, str>>, value: f32) {
        self.values.insert(name.into(), value);
    }

    /// Reads a parameter. Panics if the name was never seeded.
    #[must_use]
    pub fn get(&self, name: &str) -> f32 {
        match self.values.get(name) {
            Some(v) => *v,
            None => panic!("unknown parameter '{name}'"),
        }
    }

    #[must_use]
    pub fn try_get(&self, name: &str) -> Option<f32> {
        self.values.get(name).copied()
    }

    /// Overwrites an existing parameter without allocating.
    /// Panics if the name was never seeded.
    pub fn write(&mut self, name: &str, value: f32) {
        match self.values.get_mut(name) {
            Some(slot) => *slot = value,
            None => panic!("unknown parameter '{name}'"),
        }
    }

    /// Applies a discrete increment to an existing parameter.
    pub fn add(&mut self, name: &str, delta: f32) {
        let value = self.get(name) + delta;
        self.write(name, value);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.values.iter().map(|(k, v)| (k.as_ref(), *v))
    }
}
