use nalgebra::Vector3;
use serde_yaml::Value;

use crate::config::{self, ConfigError, PropulsionConfig};
use crate::dynamics::context::{Environment, InputHandle, InputTable, StepContext};
use crate::dynamics::rotor::RotorKinematics;
use crate::dynamics::traits::Component;
use crate::filters::Lag;

/// Rotor drivetrain and thrust generator.
///
/// Throttle shapes thrust through a spool-up lag, and the main and tail
/// rotors spin at rates proportional to the spool state. Thrust is applied
/// at a fixed point along a fixed axis.
#[derive(Debug)]
pub struct PropulsionModel {
    throttle: InputHandle,
    spool: Lag,
    main_rotor: RotorKinematics,
    tail_rotor: RotorKinematics,
    max_thrust: f64,
    thrust_position: Vector3<f64>,
    thrust_axis: Vector3<f64>,
    main_rotor_speed: f64,
    tail_rotor_gear_ratio: f64,
    force_bas: Vector3<f64>,
    moment_bas: Vector3<f64>,
}

impl Default for PropulsionModel {
    fn default() -> Self {
        Self {
            throttle: InputHandle::default(),
            spool: Lag::default(),
            main_rotor: RotorKinematics::new(),
            tail_rotor: RotorKinematics::new(),
            max_thrust: 0.0,
            thrust_position: Vector3::zeros(),
            thrust_axis: Vector3::x(),
            main_rotor_speed: 0.0,
            tail_rotor_gear_ratio: 0.0,
            force_bas: Vector3::zeros(),
            moment_bas: Vector3::zeros(),
        }
    }
}

impl PropulsionModel {
    /// Builds a model from a validated configuration, binding the throttle
    /// channel. A non-positive spool time constant is a configuration error.
    pub fn from_config(
        propulsion_config: &PropulsionConfig,
        inputs: &mut InputTable,
    ) -> Result<Self, ConfigError> {
        propulsion_config.validate()?;
        Ok(Self {
            throttle: inputs.bind(&propulsion_config.input),
            spool: Lag::new(propulsion_config.spool_time_constant)?,
            max_thrust: propulsion_config.max_thrust,
            thrust_position: propulsion_config.thrust_position,
            thrust_axis: propulsion_config.thrust_axis.normalize(),
            main_rotor_speed: propulsion_config.main_rotor_speed,
            tail_rotor_gear_ratio: propulsion_config.tail_rotor_gear_ratio,
            ..Self::default()
        })
    }

    pub fn main_rotor(&self) -> &RotorKinematics {
        &self.main_rotor
    }

    pub fn tail_rotor(&self) -> &RotorKinematics {
        &self.tail_rotor
    }

    /// Fraction of full rotor speed currently reached.
    pub fn spool_fraction(&self) -> f64 {
        self.spool.value()
    }

    /// Thrust magnitude for the current spool state (N).
    pub fn thrust(&self) -> f64 {
        self.max_thrust * self.spool.value()
    }
}

impl Component for PropulsionModel {
    fn read_config(&mut self, node: &Value, inputs: &mut InputTable) -> Result<(), ConfigError> {
        let propulsion_config: PropulsionConfig = config::from_node(node)?;
        *self = Self::from_config(&propulsion_config, inputs)?;
        Ok(())
    }

    fn initialize(&mut self) {
        self.spool.reset();
        self.main_rotor = RotorKinematics::new();
        self.tail_rotor = RotorKinematics::new();
        self.force_bas = Vector3::zeros();
        self.moment_bas = Vector3::zeros();
    }

    fn compute_force_and_moment(&mut self, _environment: &Environment) {
        self.force_bas = self.thrust_axis * self.thrust();
        self.moment_bas = self.thrust_position.cross(&self.force_bas);
    }

    fn update(&mut self, context: &StepContext) {
        let mut commanded = context.inputs.value(self.throttle);
        if commanded.is_finite() {
            commanded = commanded.clamp(0.0, 1.0);
        }
        // The lag holds its state on a non-finite command.
        self.spool.update(commanded, context.dt);

        let spool = self.spool.value();
        self.main_rotor
            .set_angular_rate(self.main_rotor_speed * spool);
        self.tail_rotor
            .set_angular_rate(self.main_rotor_speed * self.tail_rotor_gear_ratio * spool);
        self.main_rotor.update(context.dt);
        self.tail_rotor.update(context.dt);

        self.compute_force_and_moment(context.environment);
    }

    fn force_bas(&self) -> Vector3<f64> {
        self.force_bas
    }

    fn moment_bas(&self) -> Vector3<f64> {
        self.moment_bas
    }
}
