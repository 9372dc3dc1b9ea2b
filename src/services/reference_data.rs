use crate::models::{Doctor, SymptomMap};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the reference dataset
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed data in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid data in {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// A symptom maps to a single specialization or a list of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SpecializationEntry {
    One(String),
    Many(Vec<String>),
}

impl SpecializationEntry {
    fn into_vec(self) -> Vec<String> {
        match self {
            SpecializationEntry::One(spec) => vec![spec],
            SpecializationEntry::Many(specs) => specs,
        }
    }
}

/// Read-only dataset shared by every request
///
/// Loaded once at startup; nothing mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub symptom_map: SymptomMap,
    pub doctors: Vec<Doctor>,
}

impl ReferenceData {
    pub fn new(symptom_map: SymptomMap, doctors: Vec<Doctor>) -> Self {
        Self { symptom_map, doctors }
    }

    /// Load both the symptom map and the doctor roster from disk
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        symptom_map_path: P,
        doctors_path: Q,
    ) -> Result<Self, DataLoadError> {
        let symptom_map = load_symptom_map(symptom_map_path)?;
        let doctors = load_doctors(doctors_path)?;

        tracing::info!(
            "Reference data loaded: {} symptom phrases, {} doctors",
            symptom_map.len(),
            doctors.len()
        );

        Ok(Self { symptom_map, doctors })
    }
}

fn read_source(path: &Path) -> Result<String, DataLoadError> {
    std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the symptom map from a JSON object file
pub fn load_symptom_map<P: AsRef<Path>>(path: P) -> Result<SymptomMap, DataLoadError> {
    let path = path.as_ref();
    parse_symptom_map(&read_source(path)?, path)
}

/// Parse a symptom map; `path` is only used in error messages
pub fn parse_symptom_map(json: &str, path: &Path) -> Result<SymptomMap, DataLoadError> {
    let raw: BTreeMap<String, SpecializationEntry> =
        serde_json::from_str(json).map_err(|source| DataLoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let mut entries = Vec::with_capacity(raw.len());
    for (symptom, entry) in raw {
        let invalid = |reason: String| DataLoadError::Invalid {
            path: path.to_path_buf(),
            reason,
        };

        if symptom.trim().is_empty() {
            return Err(invalid("empty symptom phrase".to_string()));
        }

        let specs = entry.into_vec();
        if specs.is_empty() {
            return Err(invalid(format!("symptom '{}' maps to no specialization", symptom)));
        }
        if specs.iter().any(|s| s.trim().is_empty()) {
            return Err(invalid(format!("symptom '{}' has an empty specialization", symptom)));
        }

        entries.push((symptom, specs));
    }

    Ok(SymptomMap::new(entries))
}

/// Load the doctor roster from a JSON array file
pub fn load_doctors<P: AsRef<Path>>(path: P) -> Result<Vec<Doctor>, DataLoadError> {
    let path = path.as_ref();
    parse_doctors(&read_source(path)?, path)
}

/// Parse a doctor roster; `path` is only used in error messages
pub fn parse_doctors(json: &str, path: &Path) -> Result<Vec<Doctor>, DataLoadError> {
    let doctors: Vec<Doctor> =
        serde_json::from_str(json).map_err(|source| DataLoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(index) = doctors
        .iter()
        .position(|d| d.specialization.trim().is_empty())
    {
        return Err(DataLoadError::Invalid {
            path: path.to_path_buf(),
            reason: format!("doctor #{} has an empty specialization", index),
        });
    }

    Ok(doctors)
}
