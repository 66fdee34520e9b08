// Copyright @yucwang 2026

use std::sync::Arc;

use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;
use crate::math::spectrum::PolarizedSpectrum;

/// Per-lane validity flag. The execution model here is scalar, so a lane
/// batch degenerates to a single bool.
pub type Mask = bool;

/// Receives the named children of an integrator for generic scene-graph
/// tooling (parameter discovery, serialization).
pub trait TraversalCallback {
    fn put_object(&mut self, name: &str, child: &Arc<dyn SamplingIntegrator>);
}

/// A radiance estimator that can be invoked per ray. Implementations are
/// immutable once built and safe to call from many workers at once; all
/// per-ray mutable state lives in the `Sampler`.
pub trait SamplingIntegrator: Send + Sync {
    /// Estimate radiance along `ray`. Auxiliary outputs are written into
    /// `aovs`, whose layout matches `aov_names`. Returns the estimate and
    /// a validity mask; an inactive input lane stays inactive.
    fn sample(&self, scene: &Scene, sampler: &mut Sampler, ray: &Ray3f,
              aovs: &mut [Float], active: Mask) -> (PolarizedSpectrum, Mask);

    /// Names of the auxiliary channels this integrator writes, in buffer
    /// order. Must stay in lock-step with what `sample` writes.
    fn aov_names(&self) -> Vec<String> {
        Vec::new()
    }

    /// Expose child objects to generic tooling. Leaf integrators have
    /// nothing to report.
    fn traverse(&self, callback: &mut dyn TraversalCallback) {
        let _ = callback;
    }
}
