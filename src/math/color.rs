// Copyright @yucwang 2026

use super::constants::{Float, Vector3f, SPECTRUM_SAMPLES, WAVELENGTH_MIN, WAVELENGTH_MAX};
use super::ray::Wavelengths;

// Integral of the CIE 1931 y-bar curve over the visible range. Used to
// normalize tristimulus estimates so a unit-radiance flat spectrum maps
// to Y = 1.
const CIE_Y_INTEGRAL: Float = 106.857;

/// Density of the hyperbolic-secant wavelength importance distribution
/// used when a sensor turns an RGB pixel estimate into spectral samples.
/// Zero outside the visible range.
pub fn pdf_rgb_spectrum(wavelengths: &Wavelengths) -> [Float; SPECTRUM_SAMPLES] {
    let mut pdf = [0.0 as Float; SPECTRUM_SAMPLES];
    for i in 0..SPECTRUM_SAMPLES {
        let w = wavelengths[i];
        if w >= WAVELENGTH_MIN && w <= WAVELENGTH_MAX {
            let tmp = 1.0 / (0.0072 * (w - 538.0)).cosh();
            pdf[i] = 0.003939804229326285 * tmp * tmp;
        }
    }
    pdf
}

/// Draw one wavelength from the distribution whose density is
/// `pdf_rgb_spectrum`. `u` is a uniform sample in [0, 1).
pub fn sample_rgb_spectrum(u: Float) -> Float {
    538.0 - (0.8569106254698279 - 1.8275019724092267 * u).atanh() * 138.88888888888889
}

/// CIE 1931 standard observer at a single wavelength (nanometers), using
/// the multi-lobe Gaussian fit of Wyman et al. 2013.
pub fn cie1931_xyz(wavelength: Float) -> Vector3f {
    fn gauss(x: Float, mu: Float, sigma_l: Float, sigma_r: Float) -> Float {
        let sigma = if x < mu { sigma_l } else { sigma_r };
        let t = (x - mu) / sigma;
        (-0.5 * t * t).exp()
    }

    let x = 1.056 * gauss(wavelength, 599.8, 37.9, 31.0)
          + 0.362 * gauss(wavelength, 442.0, 16.0, 26.7)
          - 0.065 * gauss(wavelength, 501.1, 20.4, 26.2);
    let y = 0.821 * gauss(wavelength, 568.8, 46.9, 40.5)
          + 0.286 * gauss(wavelength, 530.9, 16.3, 31.1);
    let z = 1.217 * gauss(wavelength, 437.0, 11.8, 36.0)
          + 0.681 * gauss(wavelength, 459.0, 26.0, 13.8);

    Vector3f::new(x, y, z)
}

/// Monte Carlo estimate of the XYZ tristimulus of a spectral quantity
/// whose importance-sampling density has already been divided out. An
/// inactive lane contributes exactly zero.
pub fn spectrum_to_xyz(spec: &[Float; SPECTRUM_SAMPLES],
                       wavelengths: &Wavelengths,
                       active: bool) -> Vector3f {
    if !active {
        return Vector3f::zeros();
    }

    let mut xyz = Vector3f::zeros();
    for i in 0..SPECTRUM_SAMPLES {
        xyz += cie1931_xyz(wavelengths[i]) * spec[i];
    }
    xyz / (SPECTRUM_SAMPLES as Float * CIE_Y_INTEGRAL)
}

/// Linear XYZ to linear sRGB. No gamma, no tone mapping.
pub fn xyz_to_srgb(xyz: &Vector3f) -> Vector3f {
    Vector3f::new(
        3.240479 * xyz.x - 1.537150 * xyz.y - 0.498535 * xyz.z,
        -0.969256 * xyz.x + 1.875991 * xyz.y + 0.041556 * xyz.z,
        0.055648 * xyz.x - 0.204043 * xyz.y + 1.057311 * xyz.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_rgb_spectrum_support() {
        let pdf = pdf_rgb_spectrum(&[538.0, 359.0, 831.0, 450.0]);
        assert!(pdf[0] > 0.0);
        assert_eq!(pdf[1], 0.0);
        assert_eq!(pdf[2], 0.0);
        assert!(pdf[3] > 0.0);
        // The density peaks at the center of the fit.
        assert!(pdf[0] > pdf[3]);
    }

    #[test]
    fn test_sample_rgb_spectrum_stays_in_range() {
        for k in 0..32 {
            let u = (k as Float + 0.5) / 32.0;
            let w = sample_rgb_spectrum(u);
            assert!(w >= WAVELENGTH_MIN && w <= WAVELENGTH_MAX,
                    "wavelength {} out of range for u = {}", w, u);
            let pdf = pdf_rgb_spectrum(&[w, w, w, w]);
            assert!(pdf[0] > 0.0);
        }
    }

    #[test]
    fn test_cie1931_y_peaks_in_green() {
        let y_green = cie1931_xyz(555.0).y;
        assert!(y_green > cie1931_xyz(480.0).y);
        assert!(y_green > cie1931_xyz(630.0).y);
        assert!((y_green - 1.0).abs() < 0.05);
    }

    #[test]
    fn test_xyz_to_srgb_white_point() {
        // D65 white maps to (1, 1, 1) in linear sRGB.
        let rgb = xyz_to_srgb(&Vector3f::new(0.9505, 1.0, 1.089));
        assert!((rgb.x - 1.0).abs() < 1e-2);
        assert!((rgb.y - 1.0).abs() < 1e-2);
        assert!((rgb.z - 1.0).abs() < 1e-2);
    }

    #[test]
    fn test_spectrum_to_xyz_inactive_lane_is_zero() {
        let spec = [1.0, 1.0, 1.0, 1.0];
        let wavelengths = [450.0, 520.0, 590.0, 660.0];
        assert_eq!(spectrum_to_xyz(&spec, &wavelengths, false), Vector3f::zeros());
        assert!(spectrum_to_xyz(&spec, &wavelengths, true).y > 0.0);
    }
}
