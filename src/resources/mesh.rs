use std::borrow::Cow;

use crate::resources::geometry::Geometry;
use crate::resources::material::Material;

/// Visual payload for a scene node: geometry plus material, with the shadow
/// participation flags the renderer contract expects.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub name: Cow<'static, str>,
    pub geometry: Geometry,
    pub material: Material,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Mesh {
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        geometry: Geometry,
        material: Material,
    ) -> Self {
        Self {
            name: name.into(),
            geometry,
            material,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    #[must_use]
    pub fn with_cast_shadow(mut self, cast: bool) -> Self {
        self.cast_shadow = cast;
        self
    }

    #[must_use]
    pub fn with_receive_shadow(mut self, receive: bool) -> Self {
        self.receive_shadow = receive;
        self
    }
}
