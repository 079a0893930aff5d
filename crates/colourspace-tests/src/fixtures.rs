//! Reference-value fixtures
//!
//! A fixture is a JSON list of single-colour conversions with a published
//! expected result and a per-case tolerance. Values are in the native units
//! of each space (RGB and XYZ in 0-1).

use std::path::{Path, PathBuf};

use colourspace_core::{ColourSpace, Conversion};
use serde::Deserialize;
use thiserror::Error;

/// Errors loading or running a fixture
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("case {case}: {source}")]
    Conversion {
        case: String,
        source: colourspace_core::Error,
    },
}

/// One published conversion
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceCase {
    pub name: String,
    pub source: String,
    pub destination: String,
    pub input: [f64; 3],
    pub expected: [f64; 3],
    pub tolerance: f64,
}

impl ReferenceCase {
    /// Run the conversion, returning the actual output
    pub fn run(&self) -> Result<[f64; 3], FixtureError> {
        let wrap = |source| FixtureError::Conversion {
            case: self.name.clone(),
            source,
        };
        let source = ColourSpace::from_name(&self.source).map_err(wrap)?;
        let destination = ColourSpace::from_name(&self.destination).map_err(wrap)?;
        Conversion::new(source, 1.0, destination, 1.0)
            .convert(self.input)
            .map_err(wrap)
    }
}

/// A set of reference cases
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    pub description: String,
    pub cases: Vec<ReferenceCase>,
}

impl Fixture {
    /// Parse a fixture from JSON text
    pub fn parse(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a fixture file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json)
    }

    /// Path of a file in this crate's `testdata/` directory
    pub fn testdata(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("testdata")
            .join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_run() {
        let fixture = Fixture::parse(
            r#"{
                "description": "identity",
                "cases": [{
                    "name": "xyz passthrough",
                    "source": "XYZ",
                    "destination": "XYZ",
                    "input": [0.1, 0.2, 0.3],
                    "expected": [0.1, 0.2, 0.3],
                    "tolerance": 0.0
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(fixture.cases.len(), 1);
        assert_eq!(fixture.cases[0].run().unwrap(), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_unknown_space_is_reported() {
        let case = ReferenceCase {
            name: "bad".to_string(),
            source: "CMYK".to_string(),
            destination: "XYZ".to_string(),
            input: [0.0; 3],
            expected: [0.0; 3],
            tolerance: 0.0,
        };
        let err = case.run().unwrap_err();
        assert!(matches!(err, FixtureError::Conversion { .. }));
        assert!(err.to_string().contains("CMYK"), "{err}");
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Fixture::load("/nonexistent/fixture.json"),
            Err(FixtureError::Io { .. })
        ));
    }
}
