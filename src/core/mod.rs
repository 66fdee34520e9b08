// Copyright @yucwang 2021

pub mod integrator;
pub mod properties;
pub mod sampler;
pub mod scene;
