mod loader;
mod mass;
mod propulsion;

pub use loader::{from_node, load_document, section, ConfigError};
pub use mass::{MassConfig, VariableMassConfig};
pub use propulsion::PropulsionConfig;
