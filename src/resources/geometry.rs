/// Primitive geometry descriptor.
///
/// Dimensions follow the three.js primitive conventions the exercises were
/// written against. Parameters are not validated; a zero-sized box is a
/// programmer error that renders as nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Plane {
        width: f32,
        height: f32,
    },
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
    },
}

impl Geometry {
    /// Shorthand for a sphere with the default segment counts.
    #[must_use]
    pub fn sphere(radius: f32) -> Self {
        Self::Sphere {
            radius,
            width_segments: 32,
            height_segments: 32,
        }
    }

    /// Shorthand for an axis-aligned box.
    #[must_use]
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Self::Box {
            width,
            height,
            depth,
        }
    }
}
