use nalgebra::{UnitQuaternion, Vector3};
use std::collections::HashMap;

use crate::dynamics::error::DynamicsError;
use crate::utils::GRAVITY;

/// Index of a named input channel, resolved once at configuration time.
///
/// The default handle refers to the first channel bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputHandle(usize);

/// Named input channels shared by all components of one aircraft.
///
/// Components bind the channel names from their configuration while reading
/// it, then look values up by handle on every step. A channel keeps its last
/// value until it is overwritten.
#[derive(Debug, Default)]
pub struct InputTable {
    names: Vec<String>,
    values: Vec<f64>,
    index: HashMap<String, usize>,
}

impl InputTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handle for `name`, registering the channel at 0.0 if it
    /// has not been seen before.
    pub fn bind(&mut self, name: &str) -> InputHandle {
        if let Some(&slot) = self.index.get(name) {
            return InputHandle(slot);
        }
        let slot = self.values.len();
        self.names.push(name.to_string());
        self.values.push(0.0);
        self.index.insert(name.to_string(), slot);
        InputHandle(slot)
    }

    /// Returns the handle for an already registered channel.
    pub fn handle(&self, name: &str) -> Option<InputHandle> {
        self.index.get(name).map(|&slot| InputHandle(slot))
    }

    pub fn set(&mut self, handle: InputHandle, value: f64) {
        if let Some(slot) = self.values.get_mut(handle.0) {
            *slot = value;
        }
    }

    pub fn set_by_name(&mut self, name: &str, value: f64) -> Result<(), DynamicsError> {
        match self.index.get(name) {
            Some(&slot) => {
                self.values[slot] = value;
                Ok(())
            }
            None => Err(DynamicsError::UnknownInput(name.to_string())),
        }
    }

    pub fn value(&self, handle: InputHandle) -> f64 {
        debug_assert!(handle.0 < self.values.len(), "input handle from another table");
        self.values.get(handle.0).copied().unwrap_or(0.0)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// External conditions the components need to produce their forces.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Gravity in world axes (m/s²), z pointing down.
    pub gravity: Vector3<f64>,
    /// Airframe attitude, rotating body axes into world axes.
    pub attitude: UnitQuaternion<f64>,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            gravity: Vector3::new(0.0, 0.0, GRAVITY),
            attitude: UnitQuaternion::identity(),
        }
    }
}

impl Environment {
    /// Gravity resolved into body axes at the current attitude.
    pub fn gravity_bas(&self) -> Vector3<f64> {
        self.attitude.inverse_transform_vector(&self.gravity)
    }
}

/// Everything a component sees during one simulation step.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    /// Step length (s).
    pub dt: f64,
    pub environment: &'a Environment,
    pub inputs: &'a InputTable,
}
