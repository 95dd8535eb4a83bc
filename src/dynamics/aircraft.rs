use log::{debug, info, warn};
use nalgebra::Vector3;
use serde_yaml::Value;
use std::path::Path;

use crate::config::{self, ConfigError};
use crate::dynamics::context::{Environment, InputTable, StepContext};
use crate::dynamics::error::DynamicsError;
use crate::dynamics::mass::MassModel;
use crate::dynamics::propulsion::PropulsionModel;
use crate::dynamics::traits::Component;

/// A configured aircraft: its components, their shared input channels, and
/// the environment they fly in.
///
/// Each step runs every component's `update` from the current inputs, then
/// recomputes and sums their forces and moments, so the totals always
/// reflect the state after the step. Components run in a fixed order: mass,
/// propulsion, then any extra components in the order they were added.
#[derive(Debug)]
pub struct Aircraft {
    pub name: String,
    pub environment: Environment,
    mass: MassModel,
    propulsion: PropulsionModel,
    extras: Vec<Box<dyn Component>>,
    inputs: InputTable,
    time: f64,
    force_bas: Vector3<f64>,
    moment_bas: Vector3<f64>,
}

impl Aircraft {
    /// Loads an aircraft from a YAML file with `mass` and `propulsion`
    /// sections and an optional top-level `name`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let document = config::load_document(path)?;
        Self::from_document(&document)
    }

    /// Loads an aircraft from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let document: Value = serde_yaml::from_str(text)?;
        Self::from_document(&document)
    }

    /// Builds an aircraft from a parsed document.
    pub fn from_document(document: &Value) -> Result<Self, ConfigError> {
        let name = document
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("aircraft")
            .to_string();

        let mut inputs = InputTable::new();
        let mut mass = MassModel::default();
        mass.read_config(config::section(document, "mass")?, &mut inputs)?;
        let mut propulsion = PropulsionModel::default();
        propulsion.read_config(config::section(document, "propulsion")?, &mut inputs)?;

        info!(
            "Loaded aircraft '{}' with {} input channels",
            name,
            inputs.len()
        );

        Ok(Self {
            name,
            environment: Environment::default(),
            mass,
            propulsion,
            extras: Vec::new(),
            inputs,
            time: 0.0,
            force_bas: Vector3::zeros(),
            moment_bas: Vector3::zeros(),
        })
    }

    /// Returns every component to its starting state and rewinds the clock.
    /// Input channel values are kept.
    pub fn initialize(&mut self) {
        self.mass.initialize();
        self.propulsion.initialize();
        for extra in self.extras.iter_mut() {
            extra.initialize();
        }
        self.time = 0.0;
        self.force_bas = Vector3::zeros();
        self.moment_bas = Vector3::zeros();
    }

    /// Advances the aircraft by one step of `dt` seconds.
    ///
    /// A non-positive or non-finite `dt` is logged and ignored.
    pub fn step(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            warn!("Ignoring step with invalid dt = {}", dt);
            return;
        }

        let context = StepContext {
            dt,
            environment: &self.environment,
            inputs: &self.inputs,
        };
        self.mass.update(&context);
        self.propulsion.update(&context);
        for extra in self.extras.iter_mut() {
            extra.update(&context);
        }

        self.mass.compute_force_and_moment(&self.environment);
        self.propulsion.compute_force_and_moment(&self.environment);
        let mut force = self.mass.force_bas() + self.propulsion.force_bas();
        let mut moment = self.mass.moment_bas() + self.propulsion.moment_bas();
        for extra in self.extras.iter_mut() {
            extra.compute_force_and_moment(&self.environment);
            force += extra.force_bas();
            moment += extra.moment_bas();
        }

        self.force_bas = force;
        self.moment_bas = moment;
        self.time += dt;
        debug!(
            "t = {:.3} s: mass {:.1} kg, force {:?} N",
            self.time,
            self.mass.total_mass(),
            self.force_bas
        );
    }

    /// Adds an already configured component. It joins the step sequence
    /// after mass and propulsion.
    pub fn add_component(&mut self, component: Box<dyn Component>) {
        self.extras.push(component);
    }

    /// Sets a named input channel.
    pub fn set_input(&mut self, name: &str, value: f64) -> Result<(), DynamicsError> {
        self.inputs.set_by_name(name, value)
    }

    pub fn inputs(&self) -> &InputTable {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut InputTable {
        &mut self.inputs
    }

    pub fn mass(&self) -> &MassModel {
        &self.mass
    }

    pub fn mass_mut(&mut self) -> &mut MassModel {
        &mut self.mass
    }

    pub fn propulsion(&self) -> &PropulsionModel {
        &self.propulsion
    }

    /// Simulation time accumulated over accepted steps (s).
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Total force over all components, body axes (N).
    pub fn force_bas(&self) -> Vector3<f64> {
        self.force_bas
    }

    /// Total moment over all components about the airframe origin (N·m).
    pub fn moment_bas(&self) -> Vector3<f64> {
        self.moment_bas
    }
}
