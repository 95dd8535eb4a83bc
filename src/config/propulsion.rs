use nalgebra::Vector3;
use serde::Deserialize;

use crate::config::ConfigError;

fn forward_axis() -> Vector3<f64> {
    Vector3::x()
}

/// Configuration for the rotor drivetrain and its thrust generator.
#[derive(Debug, Clone, Deserialize)]
pub struct PropulsionConfig {
    /// Name of the throttle input channel.
    pub input: String,
    /// Thrust at full throttle, fully spooled up (N).
    pub max_thrust: f64,
    /// Point where thrust is applied, airframe axes (m).
    pub thrust_position: Vector3<f64>,
    /// Thrust direction in airframe axes, normalized before use.
    #[serde(default = "forward_axis")]
    pub thrust_axis: Vector3<f64>,
    /// Time constant of the rotor speed response to throttle (s).
    pub spool_time_constant: f64,
    /// Main rotor speed at full command (rad/s).
    pub main_rotor_speed: f64,
    /// Tail rotor speed as a multiple of main rotor speed.
    pub tail_rotor_gear_ratio: f64,
}

impl Default for PropulsionConfig {
    fn default() -> Self {
        Self {
            input: "throttle".to_string(),
            max_thrust: 4000.0, // N
            thrust_position: Vector3::new(0.0, 0.0, -1.0),
            thrust_axis: Vector3::new(0.0, 0.0, -1.0), // Rotor thrust points up
            spool_time_constant: 2.0,                  // s
            main_rotor_speed: 42.0,                    // rad/s
            tail_rotor_gear_ratio: 6.0,
        }
    }
}

impl PropulsionConfig {
    /// Checks the parsed values for physical sense before any model is built.
    ///
    /// The spool time constant is vetted when the lag filter is constructed,
    /// so it is not repeated here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_thrust.is_finite() || self.max_thrust < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "max_thrust must be non-negative, got {}",
                self.max_thrust
            )));
        }
        if self.thrust_position.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::ValidationError(
                "thrust_position must be finite".to_string(),
            ));
        }
        if self.thrust_axis.iter().any(|c| !c.is_finite()) || self.thrust_axis.norm() < 1e-9 {
            return Err(ConfigError::ValidationError(
                "thrust_axis must be finite and non-zero".to_string(),
            ));
        }
        if !self.main_rotor_speed.is_finite() || self.main_rotor_speed < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "main_rotor_speed must be non-negative, got {}",
                self.main_rotor_speed
            )));
        }
        if !self.tail_rotor_gear_ratio.is_finite() {
            return Err(ConfigError::ValidationError(
                "tail_rotor_gear_ratio must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
