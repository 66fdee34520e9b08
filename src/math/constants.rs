/* Copyright 2020 @Yuchen Wong */

pub type Float = f32;
pub type Int = i32;
pub type UInt = u32;

pub type Vector2f = nalgebra::Vector2<Float>;
pub type Vector3f = nalgebra::Vector3<Float>;

pub const EPSILON: Float = 1e-4;
pub const PI: Float = 3.14159265359;
pub const INV_PI: Float = 0.31830988618;

// Number of wavelength samples carried per ray in full-spectrum mode.
pub const SPECTRUM_SAMPLES: usize = 4;

// Visible range covered by the CIE 1931 observer, in nanometers.
pub const WAVELENGTH_MIN: Float = 360.0;
pub const WAVELENGTH_MAX: Float = 830.0;
