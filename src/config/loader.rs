use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::path::Path;
use thiserror::Error;

use crate::filters::FilterError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Missing configuration section: {0}")]
    MissingSection(String),
    #[error("Duplicate variable mass: {0}")]
    DuplicateMass(String),
    #[error("Invalid filter configuration: {0}")]
    FilterError(#[from] FilterError),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Reads and parses a YAML document from disk.
pub fn load_document(path: impl AsRef<Path>) -> Result<Value, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}

/// Looks up a named top-level section of a parsed document.
pub fn section<'a>(document: &'a Value, name: &str) -> Result<&'a Value, ConfigError> {
    document
        .get(name)
        .ok_or_else(|| ConfigError::MissingSection(name.to_string()))
}

/// Deserializes a typed config out of a YAML node.
pub fn from_node<T: DeserializeOwned>(node: &Value) -> Result<T, ConfigError> {
    Ok(serde_yaml::from_value(node.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_lookup() {
        let doc: Value = serde_yaml::from_str("mass:\n  empty_mass: 100.0\n").unwrap();
        assert!(section(&doc, "mass").is_ok());
        let err = section(&doc, "propulsion").unwrap_err();
        assert!(matches!(err, ConfigError::MissingSection(ref name) if name == "propulsion"));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let result: Result<Value, _> = serde_yaml::from_str("mass: [unclosed");
        assert!(result.is_err());
    }
}
