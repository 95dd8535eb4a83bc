mod aircraft;
mod context;
mod error;
mod mass;
mod propulsion;
mod rotor;
mod traits;

pub use aircraft::Aircraft;
pub use context::{Environment, InputHandle, InputTable, StepContext};
pub use error::DynamicsError;
pub use mass::{MassModel, MassState, VariableMass};
pub use propulsion::PropulsionModel;
pub use rotor::RotorKinematics;
pub use traits::Component;
