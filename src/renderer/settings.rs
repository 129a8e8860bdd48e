/// Renderer configuration flags, read by backends at init and resize time.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererSettings {
    /// Master shadow-mapping toggle.
    pub shadow_maps: bool,
    /// Soft (PCF) shadow filtering when shadow maps are on.
    pub soft_shadows: bool,
    /// Device pixel ratio is clamped to this, keeping high-DPI displays
    /// affordable.
    pub max_pixel_ratio: f32,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            shadow_maps: true,
            soft_shadows: true,
            max_pixel_ratio: 2.0,
        }
    }
}
