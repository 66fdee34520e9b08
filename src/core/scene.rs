// Copyright @yucwang 2026

use crate::math::spectrum::SpectralMode;

/// Render-global representation settings, fixed before any sampling
/// starts. Integrators that only make sense for a subset of modes check
/// this at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderMode {
    pub spectral_mode: SpectralMode,
    pub polarized: bool,
}

impl RenderMode {
    pub fn new(spectral_mode: SpectralMode, polarized: bool) -> Self {
        Self { spectral_mode, polarized }
    }
}

/// Handle to the scene being rendered. Sampling integrators receive it on
/// every call; decorator integrators pass it through untouched.
pub struct Scene {
    mode: RenderMode,
}

impl Scene {
    pub fn new(mode: RenderMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }
}
