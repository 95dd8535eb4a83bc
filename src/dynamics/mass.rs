use log::warn;
use nalgebra::{Matrix3, Matrix6, Vector3};
use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;

use crate::config::{self, ConfigError, MassConfig};
use crate::dynamics::context::{Environment, InputHandle, InputTable, StepContext};
use crate::dynamics::error::DynamicsError;
use crate::dynamics::traits::Component;
use crate::utils::{point_mass_inertia, MIN_TOTAL_MASS};

/// A point-mass station whose mass follows an input channel.
#[derive(Debug, Clone)]
pub struct VariableMass {
    input: InputHandle,
    mass: f64,
    mass_max: f64,
    position: Vector3<f64>,
}

impl VariableMass {
    /// Creates an empty station. Mass arrives once the input channel is
    /// driven.
    pub fn new(input: InputHandle, mass_max: f64, position: Vector3<f64>) -> Self {
        Self {
            input,
            mass: 0.0,
            mass_max,
            position,
        }
    }

    /// Current station mass (kg).
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Largest mass the station can hold (kg).
    pub fn mass_max(&self) -> f64 {
        self.mass_max
    }

    /// Station position in body axes (m).
    pub fn position(&self) -> Vector3<f64> {
        self.position
    }

    /// Rebinds the station to a different input channel.
    pub fn set_input(&mut self, input: InputHandle) {
        self.input = input;
    }

    fn track(&mut self, commanded: f64, name: &str) {
        if commanded.is_finite() {
            self.mass = commanded.clamp(0.0, self.mass_max);
        } else {
            warn!(
                "Non-finite mass command for '{}', holding {} kg",
                name, self.mass
            );
        }
    }
}

/// Mass properties frozen at one instant, safe to pass around.
#[derive(Debug, Clone, Serialize)]
pub struct MassState {
    /// Total mass (kg).
    pub mass: f64,
    /// Combined centre of mass in body axes (m).
    pub center_of_mass: Vector3<f64>,
    /// First moment of mass about the airframe origin (kg·m).
    pub first_moment: Vector3<f64>,
    /// Inertia tensor about the combined centre of mass (kg·m²).
    pub inertia_tensor: Matrix3<f64>,
    /// Weight force in body axes (N).
    pub force_bas: Vector3<f64>,
    /// Weight moment about the airframe origin (N·m).
    pub moment_bas: Vector3<f64>,
}

/// Aggregated mass properties of the airframe and its variable masses.
///
/// The model owns per-step tracking state, so it is deliberately not
/// `Clone`. Use [`MassModel::snapshot`] to hand the current properties to
/// other code.
#[derive(Debug)]
pub struct MassModel {
    empty_mass: f64,
    empty_inertia: Matrix3<f64>,
    empty_cm: Vector3<f64>,
    masses: BTreeMap<String, VariableMass>,
    mass: f64,
    center_of_mass: Vector3<f64>,
    first_moment: Vector3<f64>,
    inertia: Matrix3<f64>,
    force_bas: Vector3<f64>,
    moment_bas: Vector3<f64>,
}

impl Default for MassModel {
    fn default() -> Self {
        Self {
            empty_mass: 0.0,
            empty_inertia: Matrix3::zeros(),
            empty_cm: Vector3::zeros(),
            masses: BTreeMap::new(),
            mass: 0.0,
            center_of_mass: Vector3::zeros(),
            first_moment: Vector3::zeros(),
            inertia: Matrix3::zeros(),
            force_bas: Vector3::zeros(),
            moment_bas: Vector3::zeros(),
        }
    }
}

impl MassModel {
    /// Builds a model from a validated configuration, binding each station's
    /// input channel.
    pub fn from_config(
        mass_config: &MassConfig,
        inputs: &mut InputTable,
    ) -> Result<Self, ConfigError> {
        mass_config.validate()?;

        let mut masses = BTreeMap::new();
        for station in &mass_config.variable_masses {
            let handle = inputs.bind(&station.input);
            masses.insert(
                station.name.clone(),
                VariableMass::new(handle, station.mass_max, station.position),
            );
        }

        let mut model = Self {
            empty_mass: mass_config.empty_mass,
            empty_inertia: mass_config.inertia_matrix(),
            empty_cm: mass_config.center_of_mass,
            masses,
            ..Self::default()
        };
        model.aggregate();
        Ok(model)
    }

    /// Total mass (kg).
    pub fn total_mass(&self) -> f64 {
        self.mass
    }

    /// Empty airframe mass (kg).
    pub fn empty_mass(&self) -> f64 {
        self.empty_mass
    }

    /// Combined centre of mass in body axes (m).
    pub fn center_of_mass(&self) -> Vector3<f64> {
        self.center_of_mass
    }

    /// First moment of mass about the airframe origin (kg·m).
    pub fn first_moment(&self) -> Vector3<f64> {
        self.first_moment
    }

    /// Inertia tensor about the combined centre of mass (kg·m²).
    pub fn inertia_tensor(&self) -> Matrix3<f64> {
        self.inertia
    }

    /// The 6x6 generalized inertia about the airframe origin,
    ///
    /// ```text
    /// | m·I   -S(s) |
    /// | S(s)   I_o  |
    /// ```
    ///
    /// where `s` is the first moment of mass, `S` the cross-product matrix
    /// and `I_o` the inertia tensor shifted to the origin.
    pub fn generalized_inertia(&self) -> Matrix6<f64> {
        let moment_matrix = self.first_moment.cross_matrix();
        let inertia_origin = self.inertia + point_mass_inertia(self.mass, &self.center_of_mass);

        let mut generalized = Matrix6::zeros();
        generalized
            .fixed_slice_mut::<3, 3>(0, 0)
            .copy_from(&(self.mass * Matrix3::identity()));
        generalized
            .fixed_slice_mut::<3, 3>(0, 3)
            .copy_from(&(-moment_matrix));
        generalized
            .fixed_slice_mut::<3, 3>(3, 0)
            .copy_from(&moment_matrix);
        generalized
            .fixed_slice_mut::<3, 3>(3, 3)
            .copy_from(&inertia_origin);
        generalized
    }

    /// Freezes the current aggregate properties.
    pub fn snapshot(&self) -> MassState {
        MassState {
            mass: self.mass,
            center_of_mass: self.center_of_mass,
            first_moment: self.first_moment,
            inertia_tensor: self.inertia,
            force_bas: self.force_bas,
            moment_bas: self.moment_bas,
        }
    }

    /// Adds a station outside of configuration, replacing any station with
    /// the same name.
    pub fn add_variable_mass(&mut self, name: &str, station: VariableMass) {
        self.masses.insert(name.to_string(), station);
        self.aggregate();
    }

    pub fn variable_mass(&self, name: &str) -> Result<&VariableMass, DynamicsError> {
        self.masses
            .get(name)
            .ok_or_else(|| DynamicsError::VariableMassNotFound(name.to_string()))
    }

    pub fn variable_mass_mut(&mut self, name: &str) -> Result<&mut VariableMass, DynamicsError> {
        self.masses
            .get_mut(name)
            .ok_or_else(|| DynamicsError::VariableMassNotFound(name.to_string()))
    }

    pub fn variable_mass_names(&self) -> impl Iterator<Item = &str> {
        self.masses.keys().map(String::as_str)
    }

    /// Rebuilds the aggregate properties from the empty airframe and the
    /// current station masses.
    ///
    /// The first pass accumulates total mass and first moment, which fixes
    /// the combined centre of mass. The second pass sums every contributor's
    /// inertia about that centre through the parallel-axis theorem. Since
    /// each contribution is taken about the final centre, the result does
    /// not depend on the order the stations are visited in.
    fn aggregate(&mut self) {
        let mut total_mass = self.empty_mass;
        let mut first_moment = self.empty_mass * self.empty_cm;
        for station in self.masses.values() {
            total_mass += station.mass;
            first_moment += station.mass * station.position;
        }

        let center_of_mass = if total_mass > MIN_TOTAL_MASS {
            first_moment / total_mass
        } else {
            Vector3::zeros()
        };

        // The configured tensor is taken about the empty centre of mass.
        let mut inertia = self.empty_inertia
            + point_mass_inertia(self.empty_mass, &(self.empty_cm - center_of_mass));
        for station in self.masses.values() {
            inertia += point_mass_inertia(station.mass, &(station.position - center_of_mass));
        }

        self.mass = total_mass;
        self.first_moment = first_moment;
        self.center_of_mass = center_of_mass;
        self.inertia = inertia;
    }
}

impl Component for MassModel {
    fn read_config(&mut self, node: &Value, inputs: &mut InputTable) -> Result<(), ConfigError> {
        let mass_config: MassConfig = config::from_node(node)?;
        *self = Self::from_config(&mass_config, inputs)?;
        Ok(())
    }

    fn initialize(&mut self) {
        for station in self.masses.values_mut() {
            station.mass = 0.0;
        }
        self.force_bas = Vector3::zeros();
        self.moment_bas = Vector3::zeros();
        self.aggregate();
    }

    fn compute_force_and_moment(&mut self, environment: &Environment) {
        self.force_bas = self.mass * environment.gravity_bas();
        self.moment_bas = self.center_of_mass.cross(&self.force_bas);
    }

    fn update(&mut self, context: &StepContext) {
        for (name, station) in self.masses.iter_mut() {
            station.track(context.inputs.value(station.input), name);
        }
        self.aggregate();
        self.compute_force_and_moment(context.environment);
    }

    fn force_bas(&self) -> Vector3<f64> {
        self.force_bas
    }

    fn moment_bas(&self) -> Vector3<f64> {
        self.moment_bas
    }
}
