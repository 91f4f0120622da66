//! Boundary loading for profile and insight payloads

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ModelError;

/// Payload encodings accepted at the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    /// `serde_json`
    Json,
    /// `serde_yaml`
    Yaml,
}

impl PayloadFormat {
    /// Pick a format from a file extension
    ///
    /// # Errors
    /// Returns [`ModelError::UnsupportedFormat`] for anything but json/yaml/yml
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ModelError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse a typed value from text in the given format
///
/// # Errors
/// Returns the parser error when the payload does not match `T`
pub fn parse_str<T: DeserializeOwned>(text: &str, format: PayloadFormat) -> Result<T, ModelError> {
    match format {
        PayloadFormat::Json => Ok(serde_json::from_str(text)?),
        PayloadFormat::Yaml => Ok(serde_yaml::from_str(text)?),
    }
}

/// Read and parse a typed value from a `.json`, `.yaml` or `.yml` file
///
/// # Errors
/// Returns I/O, format or parse errors
pub fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let format = PayloadFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|e| ModelError::io_error(path, e))?;
    parse_str(&text, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            PayloadFormat::from_path(&PathBuf::from("p.JSON")).unwrap(),
            PayloadFormat::Json
        );
        assert_eq!(
            PayloadFormat::from_path(&PathBuf::from("p.yml")).unwrap(),
            PayloadFormat::Yaml
        );
        assert!(matches!(
            PayloadFormat::from_path(&PathBuf::from("p.toml")),
            Err(ModelError::UnsupportedFormat(_))
        ));
    }
}
