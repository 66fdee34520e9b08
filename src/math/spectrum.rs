// Copyright @yucwang 2026

use super::constants::{Float, Vector3f, SPECTRUM_SAMPLES};

/// Spectral representation used for a whole render. Chosen once when the
/// render is configured and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectralMode {
    Monochromatic,
    Rgb,
    Spectral,
}

/// A single radiometric quantity in the active spectral representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spectrum {
    Monochromatic(Float),
    Rgb(Vector3f),
    Spectral([Float; SPECTRUM_SAMPLES]),
}

impl Spectrum {
    pub fn mode(&self) -> SpectralMode {
        match self {
            Spectrum::Monochromatic(_) => SpectralMode::Monochromatic,
            Spectrum::Rgb(_) => SpectralMode::Rgb,
            Spectrum::Spectral(_) => SpectralMode::Spectral,
        }
    }

    /// The additive identity in the same representation as `self`.
    pub fn zero_like(&self) -> Spectrum {
        match self {
            Spectrum::Monochromatic(_) => Spectrum::Monochromatic(0.0),
            Spectrum::Rgb(_) => Spectrum::Rgb(Vector3f::zeros()),
            Spectrum::Spectral(_) => Spectrum::Spectral([0.0; SPECTRUM_SAMPLES]),
        }
    }
}

/// The four Stokes components of a light beam: S0 is total intensity,
/// S1..S3 describe the polarization ellipse. The slots are fixed, there
/// are always exactly four of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StokesVector {
    components: [Spectrum; 4],
}

impl StokesVector {
    pub fn new(components: [Spectrum; 4]) -> Self {
        Self { components }
    }

    pub fn component(&self, index: usize) -> &Spectrum {
        &self.components[index]
    }

    pub fn components(&self) -> &[Spectrum; 4] {
        &self.components
    }

    fn zero_like(&self) -> StokesVector {
        let z = self.components[0].zero_like();
        Self { components: [z, z, z, z] }
    }
}

/// Polarization-aware radiance carried along a ray. The four coefficient
/// banks are the columns of the Mueller-matrix representation; bank 0 is
/// the Stokes vector expressed in the sensor-aligned frame, which is the
/// only bank most consumers ever read.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarizedSpectrum {
    coeffs: [StokesVector; 4],
}

impl PolarizedSpectrum {
    /// Build a beam whose sensor-frame Stokes vector is `stokes`; the
    /// remaining banks are zero.
    pub fn from_stokes(stokes: StokesVector) -> Self {
        let zero = stokes.zero_like();
        Self { coeffs: [stokes, zero, zero, zero] }
    }

    /// Lift an unpolarized quantity: all intensity in S0.
    pub fn depolarized(value: Spectrum) -> Self {
        let zero = value.zero_like();
        Self::from_stokes(StokesVector::new([value, zero, zero, zero]))
    }

    pub fn coeff(&self, index: usize) -> &StokesVector {
        &self.coeffs[index]
    }
}
