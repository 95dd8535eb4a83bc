pub mod config;
pub mod dynamics;
pub mod filters;
pub mod utils;

pub use config::{ConfigError, MassConfig, PropulsionConfig, VariableMassConfig};
pub use dynamics::{
    Aircraft, Component, DynamicsError, Environment, InputHandle, InputTable, MassModel, MassState,
    PropulsionModel, RotorKinematics, StepContext, VariableMass,
};
pub use filters::{FilterError, Lag};
