// Copyright @yucwang 2026

pub mod stokes;
pub mod uniform;
