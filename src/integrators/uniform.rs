// Copyright @yucwang 2026

use std::sync::Arc;

use crate::core::integrator::{Mask, SamplingIntegrator};
use crate::core::properties::{ConfigObject, Properties};
use crate::core::sampler::Sampler;
use crate::core::scene::{RenderMode, Scene};
use crate::math::constants::{Float, Vector3f, SPECTRUM_SAMPLES};
use crate::math::ray::Ray3f;
use crate::math::spectrum::{PolarizedSpectrum, SpectralMode, Spectrum, StokesVector};

/// Debug source that returns the same Stokes vector for every ray,
/// expressed in the active spectral representation. Useful for checking
/// the polarimetric output path without running light transport.
pub struct UniformStokesIntegrator {
    stokes: StokesVector,
}

impl UniformStokesIntegrator {
    /// Reads `s0`..`s3` from the property list (defaults: unpolarized
    /// unit intensity) and lifts them into the representation selected by
    /// `mode`.
    pub fn new(props: &Properties, mode: RenderMode) -> Self {
        let values = [
            props.get_float("s0", 1.0),
            props.get_float("s1", 0.0),
            props.get_float("s2", 0.0),
            props.get_float("s3", 0.0),
        ];

        let lift = |v: Float| match mode.spectral_mode {
            SpectralMode::Monochromatic => Spectrum::Monochromatic(v),
            SpectralMode::Rgb => Spectrum::Rgb(Vector3f::new(v, v, v)),
            SpectralMode::Spectral => Spectrum::Spectral([v; SPECTRUM_SAMPLES]),
        };

        Self {
            stokes: StokesVector::new([lift(values[0]), lift(values[1]),
                                       lift(values[2]), lift(values[3])]),
        }
    }

    pub fn stokes(&self) -> &StokesVector {
        &self.stokes
    }
}

impl SamplingIntegrator for UniformStokesIntegrator {
    fn sample(&self, _scene: &Scene, sampler: &mut Sampler, _ray: &Ray3f,
              _aovs: &mut [Float], active: Mask) -> (PolarizedSpectrum, Mask) {
        // Consume the per-ray sample budget like a real estimator would.
        let _ = sampler.next_2d();
        (PolarizedSpectrum::from_stokes(self.stokes), active)
    }
}

impl ConfigObject for UniformStokesIntegrator {
    fn as_sampling_integrator(self: Arc<Self>) -> Option<Arc<dyn SamplingIntegrator>> {
        Some(self)
    }
}
