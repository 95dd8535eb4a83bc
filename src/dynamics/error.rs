use thiserror::Error;

#[derive(Error, Debug)]
pub enum DynamicsError {
    #[error("No variable mass named '{0}'")]
    VariableMassNotFound(String),
    #[error("No input channel named '{0}'")]
    UnknownInput(String),
}
