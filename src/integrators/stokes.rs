// Copyright @yucwang 2026

use std::sync::Arc;

use crate::core::integrator::{Mask, SamplingIntegrator, TraversalCallback};
use crate::core::properties::{ConfigObject, ConfigurationError, Properties};
use crate::core::sampler::Sampler;
use crate::core::scene::{RenderMode, Scene};
use crate::math::color::{pdf_rgb_spectrum, spectrum_to_xyz, xyz_to_srgb};
use crate::math::constants::{Float, Vector3f, SPECTRUM_SAMPLES};
use crate::math::ray::Ray3f;
use crate::math::spectrum::{PolarizedSpectrum, Spectrum};

/// Width of the Stokes block: 4 components, one RGB triple each.
pub const STOKES_AOV_SLOTS: usize = 12;

// Historical layout contract: the Stokes block sits after the first 12
// channels of the wrapped integrator. The splice position is negotiated
// against the wrapped integrator's actual channel count instead of
// trusting the constant blindly.
const STOKES_AOV_OFFSET: usize = 12;

/// Wraps another sampling integrator and emits the four Stokes components
/// of its radiance estimate as RGB auxiliary channels. The primary
/// estimate passes through unchanged.
pub struct StokesIntegrator {
    inner: Arc<dyn SamplingIntegrator>,
    inner_aov_count: usize,
    // Position of the Stokes block within the channel list, equal to
    // min(inner_aov_count, STOKES_AOV_OFFSET).
    offset: usize,
}

impl StokesIntegrator {
    /// Build the decorator from a property list naming exactly one child
    /// sampling integrator. Refuses to run without polarized light
    /// transport: every Stokes component beyond S0 would be zero.
    pub fn new(props: &Properties, mode: RenderMode) -> Result<Self, ConfigurationError> {
        if !mode.polarized {
            return Err(ConfigurationError::UnpolarizedMode);
        }

        let mut inner: Option<Arc<dyn SamplingIntegrator>> = None;
        for (name, object) in props.objects() {
            let child = match object.clone().as_sampling_integrator() {
                Some(child) => child,
                None => return Err(ConfigurationError::IncompatibleChild(name.clone())),
            };
            if inner.is_some() {
                return Err(ConfigurationError::MultipleChildren("integrator"));
            }
            inner = Some(child);
        }

        let inner = inner.ok_or(ConfigurationError::MissingChild("integrator"))?;
        let inner_aov_count = inner.aov_names().len();
        let offset = inner_aov_count.min(STOKES_AOV_OFFSET);
        Ok(Self { inner, inner_aov_count, offset })
    }

    fn stokes_component_to_rgb(component: &Spectrum, ray: &Ray3f, active: Mask) -> Vector3f {
        match component {
            Spectrum::Monochromatic(v) => Vector3f::new(*v, *v, *v),
            Spectrum::Rgb(rgb) => *rgb,
            Spectrum::Spectral(samples) => {
                // The sensor is assumed to have sampled ray.wavelengths
                // with the density of sample_rgb_spectrum; undo it before
                // integrating against the matching functions. A zero
                // density contributes nothing.
                let pdf = pdf_rgb_spectrum(&ray.wavelengths);
                let mut spec = [0.0 as Float; SPECTRUM_SAMPLES];
                for i in 0..SPECTRUM_SAMPLES {
                    if pdf[i] != 0.0 {
                        spec[i] = samples[i] / pdf[i];
                    }
                }
                xyz_to_srgb(&spectrum_to_xyz(&spec, &ray.wavelengths, active))
            }
        }
    }

    fn write_stokes_block(&self, radiance: &PolarizedSpectrum, ray: &Ray3f,
                          active: Mask, block: &mut [Float]) {
        let stokes = radiance.coeff(0);
        for (i, component) in stokes.components().iter().enumerate() {
            let rgb = Self::stokes_component_to_rgb(component, ray, active);
            block[3 * i] = rgb.x;
            block[3 * i + 1] = rgb.y;
            block[3 * i + 2] = rgb.z;
        }
    }
}

impl SamplingIntegrator for StokesIntegrator {
    fn sample(&self, scene: &Scene, sampler: &mut Sampler, ray: &Ray3f,
              aovs: &mut [Float], active: Mask) -> (PolarizedSpectrum, Mask) {
        let result = if self.inner_aov_count <= self.offset {
            // The wrapped integrator's channels all sit in front of the
            // Stokes block, so it can write straight into the buffer.
            self.inner.sample(scene, sampler, ray, &mut aovs[..self.inner_aov_count], active)
        } else {
            // Channels past the splice point land after the Stokes block;
            // let the wrapped integrator fill a contiguous scratch buffer
            // and re-distribute it around ours.
            let mut scratch = vec![0.0 as Float; self.inner_aov_count];
            let result = self.inner.sample(scene, sampler, ray, &mut scratch, active);
            aovs[..self.offset].copy_from_slice(&scratch[..self.offset]);
            let tail = self.offset + STOKES_AOV_SLOTS;
            aovs[tail..tail + self.inner_aov_count - self.offset]
                .copy_from_slice(&scratch[self.offset..]);
            result
        };

        self.write_stokes_block(&result.0, ray, active,
                                &mut aovs[self.offset..self.offset + STOKES_AOV_SLOTS]);
        result
    }

    fn aov_names(&self) -> Vec<String> {
        let mut names = self.inner.aov_names();
        for i in 0..4 {
            for (j, channel) in ["R", "G", "B"].iter().enumerate() {
                names.insert(self.offset + 3 * i + j, format!("S{}.{}", i, channel));
            }
        }
        names
    }

    fn traverse(&self, callback: &mut dyn TraversalCallback) {
        callback.put_object("integrator", &self.inner);
    }
}

impl ConfigObject for StokesIntegrator {
    fn as_sampling_integrator(self: Arc<Self>) -> Option<Arc<dyn SamplingIntegrator>> {
        Some(self)
    }
}
