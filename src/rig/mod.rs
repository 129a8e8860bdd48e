//! Character rigs
//!
//! A rig is a labeled tree of scene nodes plus one [`ParameterSet`] driving
//! it. Builders assemble the tree in a fixed order (body → legs → head →
//! head decorations → arms) and capture named handles so the per-frame pose
//! update never searches the hierarchy. Pose updaters read parameters and
//! write node transforms; they are the only writers of rig node transforms.

pub mod dog;
pub mod figure;
pub mod params;

pub use dog::Dog;
pub use figure::Figure;
pub use params::ParameterSet;

use std::borrow::Cow;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::scene::{Node, NodeHandle, Scene};

/// Named handles into a rig's node tree plus its parameter set.
///
/// Handles are registered at build time. Looking up a name that was never
/// registered is a construction-order bug and panics.
pub struct Rig {
    pub root: NodeHandle,
    pub params: ParameterSet,
    nodes: FxHashMap<Cow<'static, str>, NodeHandle>,
    groups: FxHashMap<Cow<'static, str>, SmallVec<[NodeHandle; 4]>>,
}

impl Rig {
    #[must_use]
    pub fn new(root: NodeHandle, params: ParameterSet) -> Self {
        Self {
            root,
            params,
            nodes: FxHashMap::default(),
            groups: FxHashMap::default(),
        }
    }

    pub fn insert_node(&mut self, name: impl Into<Cow<'static, str>>, handle: NodeHandle) {
        self.nodes.insert(name.into(), handle);
    }

    /// Looks up a single named node. Panics if the name was never
    /// registered.
    #[must_use]
    pub fn node(&self, name: &str) -> NodeHandle {
        match self.nodes.get(name) {
            Some(h) => *h,
            None => panic!("rig has no node named '{name}'"),
        }
    }

    #[must_use]
    pub fn try_node(&self, name: &str) -> Option<NodeHandle> {
        self.nodes.get(name).copied()
    }

    pub fn push_group_node(&mut self, group: impl Into<Cow<'static, str>>, handle: NodeHandle) {
        self.groups.entry(group.into()).or_default().push(handle);
    }

    /// Looks up an ordered node group (paired limbs). Panics if the group
    /// was never registered.
    #[must_use]
    pub fn group(&self, name: &str) -> &[NodeHandle] {
        match self.groups.get(name) {
            Some(g) => g,
            None => panic!("rig has no group named '{name}'"),
        }
    }
}

/// A rig owner with a per-frame pose update.
pub trait Puppet {
    fn rig(&self) -> &Rig;
    fn rig_mut(&mut self) -> &mut Rig;

    /// Pushes the current parameter values into the rig's node transforms.
    ///
    /// Called exactly once per frame, after every timeline has advanced and
    /// before world matrices are rebuilt. Pure: reads parameters, writes
    /// local transforms, nothing else.
    fn apply_pose(&self, scene: &mut Scene);

    fn params(&self) -> &ParameterSet {
        &self.rig().params
    }

    fn params_mut(&mut self) -> &mut ParameterSet {
        &mut self.rig_mut().params
    }
}

/// Mirror-sign convention for paired limbs: even indices swing positive,
/// odd indices negative.
#[inline]
#[must_use]
pub fn mirror_sign(index: usize) -> f32 {
    if index % 2 == 0 { 1.0 } else { -1.0 }
}

/// Fetches a rig node for a pose update. A missing node means the rig was
/// torn down while its pose updater kept running — fatal, by construction.
pub(crate) fn pose_node<'s>(
    scene: &'s mut Scene,
    handle: NodeHandle,
    what: &str,
) -> &'s mut Node {
    scene
        .get_node_mut(handle)
        .unwrap_or_else(|| panic!("rig node '{what}' missing from scene"))
}
