// Copyright @yucwang 2026

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::integrator::SamplingIntegrator;
use crate::math::constants::Float;

/// Raised when an integrator is constructed from a configuration that can
/// never work. Fatal: nothing is rendered with a bad configuration.
#[derive(Debug)]
pub enum ConfigurationError {
    /// The active render mode carries no polarization state.
    UnpolarizedMode,
    /// A required child object is missing.
    MissingChild(&'static str),
    /// More than one child was supplied where exactly one is allowed.
    MultipleChildren(&'static str),
    /// A child object does not implement the required interface.
    IncompatibleChild(String),
}

#[derive(Debug, Clone)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(Float),
    String(String),
}

/// Anything that can appear as a named child object in a property list.
/// Concrete object kinds override the matching downcast hook.
pub trait ConfigObject: Send + Sync {
    fn as_sampling_integrator(self: Arc<Self>) -> Option<Arc<dyn SamplingIntegrator>> {
        None
    }
}

/// Generic key/value configuration handed to object constructors by the
/// host: scalar slots plus an ordered list of named child objects.
#[derive(Default)]
pub struct Properties {
    values: HashMap<String, Value>,
    objects: Vec<(String, Arc<dyn ConfigObject>)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get_float(&self, name: &str, default: Float) -> Float {
        match self.values.get(name) {
            Some(Value::Float(v)) => *v,
            Some(Value::Int(v)) => *v as Float,
            _ => default,
        }
    }

    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        match self.values.get(name) {
            Some(Value::Int(v)) => *v,
            _ => default,
        }
    }

    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        match self.values.get(name) {
            Some(Value::Bool(v)) => *v,
            _ => default,
        }
    }

    pub fn put_object(&mut self, name: &str, object: Arc<dyn ConfigObject>) {
        self.objects.push((name.to_string(), object));
    }

    pub fn objects(&self) -> &[(String, Arc<dyn ConfigObject>)] {
        &self.objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_defaults() {
        let mut props = Properties::new();
        props.set("spp", Value::Int(16));
        assert_eq!(props.get_int("spp", 1), 16);
        assert_eq!(props.get_int("missing", 1), 1);
        assert_eq!(props.get_float("spp", 0.0), 16.0);
        assert_eq!(props.get_bool("missing", true), true);
    }
}
