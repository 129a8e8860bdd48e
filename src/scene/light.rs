use glam::Vec3;
use uuid::Uuid;

/// Shadow-map configuration, consumed by renderer backends.
#[derive(Debug, Clone)]
pub struct ShadowConfig {
    pub bias: f32,
    pub map_size: u32,
    pub near: f32,
    pub far: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            bias: 0.005,
            map_size: 1024,
            near: 0.5,
            far: 50.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AmbientLight {}

#[derive(Debug, Clone)]
pub struct DirectionalLight {}

#[derive(Debug, Clone)]
pub struct PointLight {
    pub range: f32,
}

#[derive(Debug, Clone)]
pub struct SpotLight {
    pub range: f32,
    /// Cone half-angle, radians.
    pub angle: f32,
}

/// High-level abstraction: light component in the scene.
#[derive(Debug, Clone)]
pub enum LightKind {
    Ambient(AmbientLight),
    Directional(DirectionalLight),
    Point(PointLight),
    Spot(SpotLight),
}

#[derive(Debug, Clone)]
pub struct Light {
    pub uuid: Uuid,
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,

    pub cast_shadows: bool,
    pub shadow: Option<ShadowConfig>,
}

impl Light {
    #[must_use]
    pub fn new_ambient(color: Vec3, intensity: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Ambient(AmbientLight {}),
            cast_shadows: false,
            shadow: None,
        }
    }

    #[must_use]
    pub fn new_directional(color: Vec3, intensity: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Directional(DirectionalLight {}),
            cast_shadows: false,
            shadow: Some(ShadowConfig::default()),
        }
    }

    #[must_use]
    pub fn new_point(color: Vec3, intensity: f32, range: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Point(PointLight { range }),
            cast_shadows: false,
            shadow: Some(ShadowConfig::default()),
        }
    }

    #[must_use]
    pub fn new_spot(color: Vec3, intensity: f32, range: f32, angle: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Spot(SpotLight { range, angle }),
            cast_shadows: false,
            shadow: Some(ShadowConfig::default()),
        }
    }

    /// Builder-style toggle for shadow casting.
    #[must_use]
    pub fn with_cast_shadows(mut self, cast: bool) -> Self {
        self.cast_shadows = cast;
        self
    }
}
