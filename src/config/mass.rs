use nalgebra::{Matrix3, Vector3};
use serde::Deserialize;
use std::collections::HashSet;

use crate::config::ConfigError;

/// Mass properties of the empty airframe plus its variable mass stations.
#[derive(Debug, Clone, Deserialize)]
pub struct MassConfig {
    /// Empty airframe mass (kg).
    pub empty_mass: f64,
    /// Inertia tensor about the empty centre of mass (kg·m²), row-major.
    pub inertia_tensor: [[f64; 3]; 3],
    /// Empty centre of mass in airframe axes (m).
    pub center_of_mass: Vector3<f64>,
    /// Fuel, crew, cargo and other stations whose mass changes in flight.
    #[serde(default)]
    pub variable_masses: Vec<VariableMassConfig>,
}

/// A single station of changeable mass, treated as a point mass.
#[derive(Debug, Clone, Deserialize)]
pub struct VariableMassConfig {
    /// Station name, unique within the aircraft.
    pub name: String,
    /// Name of the input channel commanding this station's mass. The
    /// channel carries an absolute mass (kg), not a fill fraction.
    pub input: String,
    /// Largest mass the station can hold (kg).
    pub mass_max: f64,
    /// Station position in airframe axes (m).
    pub position: Vector3<f64>,
}

impl MassConfig {
    /// Checks the parsed values for physical sense before any model is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.empty_mass.is_finite() || self.empty_mass < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "empty_mass must be non-negative, got {}",
                self.empty_mass
            )));
        }
        if self.inertia_tensor.iter().flatten().any(|e| !e.is_finite()) {
            return Err(ConfigError::ValidationError(
                "inertia_tensor entries must be finite".to_string(),
            ));
        }
        if self.center_of_mass.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::ValidationError(
                "center_of_mass must be finite".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for station in &self.variable_masses {
            if station.name.is_empty() {
                return Err(ConfigError::ValidationError(
                    "variable mass stations must be named".to_string(),
                ));
            }
            if !seen.insert(station.name.as_str()) {
                return Err(ConfigError::DuplicateMass(station.name.clone()));
            }
            if station.input.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "variable mass '{}': input channel name must not be empty",
                    station.name
                )));
            }
            if !station.mass_max.is_finite() || station.mass_max < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "variable mass '{}': mass_max must be non-negative, got {}",
                    station.name, station.mass_max
                )));
            }
            if station.position.iter().any(|c| !c.is_finite()) {
                return Err(ConfigError::ValidationError(format!(
                    "variable mass '{}': position must be finite",
                    station.name
                )));
            }
        }
        Ok(())
    }

    /// The empty inertia tensor as a matrix, symmetrized so that slightly
    /// asymmetric input data cannot leak into the dynamics.
    pub fn inertia_matrix(&self) -> Matrix3<f64> {
        let raw = Matrix3::from_fn(|r, c| self.inertia_tensor[r][c]);
        0.5 * (raw + raw.transpose())
    }
}
