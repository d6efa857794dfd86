//!
//! Code samples shown in the help view: loading them from their JSON document and rendering
//! them to HTML with the formatter matching their language tag.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::engine::RuleEngine;
use crate::registry::FormatterRegistry;

/// The sample document compiled into the crate
pub const BUNDLED_SAMPLES: &str = include_str!("../assets/samples.json");

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("Failed to read samples at {path}: {source}")]
    Io { source: io::Error, path: String },
    #[error("Invalid sample document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A sample record as stored in JSON, one string per line
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RawSample {
    pub name: String,
    pub format: String,
    pub description: Vec<String>,
    pub code: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SampleDocument {
    #[serde(default)]
    example: Vec<String>,
    samples: Vec<RawSample>,
}

/// A named, described code snippet tagged with its language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub name: String,
    pub format: String,
    pub description: String,
    pub code: String,
}

impl From<RawSample> for Sample {
    fn from(raw: RawSample) -> Self {
        Self {
            name: raw.name,
            format: raw.format,
            description: raw.description.join("\n"),
            code: raw.code.join("\n"),
        }
    }
}

impl Sample {
    /// Read a single sample record
    pub fn from_json(json: &str) -> Result<Self, SampleError> {
        let raw: RawSample = serde_json::from_str(json)?;
        Ok(raw.into())
    }

    /// Read every sample of a sample document, in document order
    pub fn all_from_json(json: &str) -> Result<Vec<Self>, SampleError> {
        Ok(SampleCatalog::from_json(json)?.samples)
    }

    pub fn description_to_html(&self) -> String {
        format!("<p>{}</p>", self.description.replace('\n', "<br/>"))
    }

    pub fn code_to_html(&self, formatter: &RuleEngine) -> String {
        formatter.format(&self.code)
    }

    /// Description followed by the highlighted code
    pub fn to_html(&self, registry: &FormatterRegistry) -> String {
        let formatter = registry.get(&self.format);
        format!("{}{}", self.description_to_html(), self.code_to_html(formatter))
    }
}

/// All samples of a sample document, plus its example block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleCatalog {
    example: Vec<String>,
    samples: Vec<Sample>,
}

impl SampleCatalog {
    pub fn from_json(json: &str) -> Result<Self, SampleError> {
        let document: SampleDocument = serde_json::from_str(json)?;
        log::debug!("Loaded {} samples", document.samples.len());
        Ok(Self {
            example: document.example,
            samples: document.samples.into_iter().map(Sample::from).collect(),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, SampleError> {
        let json = fs::read_to_string(path).map_err(|source| SampleError::Io {
            source,
            path: path.display().to_string(),
        })?;
        Self::from_json(&json)
    }

    pub fn bundled() -> Result<Self, SampleError> {
        Self::from_json(BUNDLED_SAMPLES)
    }

    /// The example block as plain text
    pub fn example(&self) -> String {
        self.example.join("\n")
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Every sample rendered with the formatter for its own language
    pub fn formatted(&self, registry: &FormatterRegistry) -> Vec<String> {
        self.samples.iter().map(|s| s.to_html(registry)).collect()
    }

    pub fn to_html(&self, registry: &FormatterRegistry) -> String {
        self.formatted(registry).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "name": "test1",
        "description": ["test2", "test3"],
        "format": "lavendeux",
        "code": ["test4", "test5"]
    }"#;

    #[test]
    fn test_from_json() {
        let sample = Sample::from_json(RECORD).unwrap();
        assert_eq!(sample.name, "test1");
        assert_eq!(sample.description, "test2\ntest3");
        assert_eq!(sample.format, "lavendeux");
        assert_eq!(sample.code, "test4\ntest5");
    }

    #[test]
    fn test_missing_arrays_are_fatal() {
        let err = Sample::from_json(r#"{"name": "t", "format": "lavendeux", "code": ["c"]}"#).unwrap_err();
        assert!(matches!(err, SampleError::Parse(_)));

        let err = SampleCatalog::from_json(r#"{"samples": [{"name": "t", "format": "lavendeux", "description": ["d"]}]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("code"));
    }

    #[test]
    fn test_description_to_html() {
        let sample = Sample::from_json(RECORD).unwrap();
        let html = sample.description_to_html();
        assert_eq!(html, "<p>test2<br/>test3</p>");
    }

    #[test]
    fn test_example_is_optional() {
        let catalog = SampleCatalog::from_json(r#"{"samples": []}"#).unwrap();
        assert_eq!(catalog.example(), "");
        assert!(catalog.samples().is_empty());
    }

    #[test]
    fn test_from_path_reports_missing_file() {
        let err = SampleCatalog::from_path(Path::new("/nonexistent/samples.json")).unwrap_err();
        assert!(matches!(err, SampleError::Io { ref path, .. } if path == "/nonexistent/samples.json"));
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = SampleCatalog::bundled().unwrap();
        assert!(catalog.samples().len() > 1);
        assert_eq!(catalog.samples()[0].format, "lavendeux");
        assert!(catalog.example().contains('\n'));
    }
}
