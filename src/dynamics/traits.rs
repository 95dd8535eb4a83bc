use nalgebra::Vector3;
use serde_yaml::Value;
use std::fmt::Debug;

use crate::config::ConfigError;
use crate::dynamics::context::{Environment, InputTable, StepContext};

/// A force-producing part of an aircraft.
///
/// A component is configured once from a YAML node, binding the input
/// channels it needs, and then alternates between `update` and
/// `compute_force_and_moment` every simulation step. Forces and moments are
/// expressed in body axes about the airframe origin.
pub trait Component: Debug {
    /// Reads the component's parameters from its configuration node and
    /// binds its input channels.
    fn read_config(&mut self, node: &Value, inputs: &mut InputTable) -> Result<(), ConfigError>;

    /// Returns the component to its starting state.
    fn initialize(&mut self);

    /// Recomputes the force and moment for the current internal state.
    fn compute_force_and_moment(&mut self, environment: &Environment);

    /// Advances the internal state by one step.
    fn update(&mut self, context: &StepContext);

    /// Force in body axes (N).
    fn force_bas(&self) -> Vector3<f64>;

    /// Moment about the airframe origin in body axes (N·m).
    fn moment_bas(&self) -> Vector3<f64>;
}
