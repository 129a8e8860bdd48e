use glam::Vec3;

/// Shading model requested from the renderer backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialKind {
    Lambert,
    Phong,
    Physical { metalness: f32, roughness: f32 },
}

/// Material descriptor: a base color plus the shading model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Linear RGB, each channel in [0, 1].
    pub color: Vec3,
    pub kind: MaterialKind,
}

impl Material {
    #[must_use]
    pub fn lambert(color: Vec3) -> Self {
        Self {
            color,
            kind: MaterialKind::Lambert,
        }
    }

    #[must_use]
    pub fn phong(color: Vec3) -> Self {
        Self {
            color,
            kind: MaterialKind::Phong,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::lambert(Vec3::ONE)
    }
}

/// Converts HSL to linear RGB.
///
/// `h` in degrees (wraps), `s` and `l` in [0, 1]. Used by the rig builders
/// for their hue jitter, mirroring CSS `hsl()` colors.
#[must_use]
pub fn hsl(h: f32, s: f32, l: f32) -> Vec3 {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = l - c / 2.0;
    Vec3::new(r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_primaries() {
        let red = hsl(0.0, 1.0, 0.5);
        assert!((red.x - 1.0).abs() < 1e-5 && red.y < 1e-5 && red.z < 1e-5);

        let green = hsl(120.0, 1.0, 0.5);
        assert!(green.x < 1e-5 && (green.y - 1.0).abs() < 1e-5 && green.z < 1e-5);
    }

    #[test]
    fn hsl_grey_ignores_hue() {
        let a = hsl(42.0, 0.0, 0.5);
        let b = hsl(280.0, 0.0, 0.5);
        assert!((a - b).length() < 1e-5);
    }
}
