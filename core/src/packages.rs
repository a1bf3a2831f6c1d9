use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::errors::PackageError;

/// Én rå sensorpakke: treningskode + posisjonelle verdier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self { code: code.into(), data: data.into() }
    }
}

// Prøv OBJECT først, deretter tuple-formen ["RUN", [..]]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PackageIn {
    Object {
        #[serde(alias = "workout_type", alias = "type")]
        code: String,
        data: Vec<f64>,
    },
    Tuple(String, Vec<f64>),
}

impl From<PackageIn> for Package {
    fn from(p: PackageIn) -> Self {
        match p {
            PackageIn::Object { code, data } | PackageIn::Tuple(code, data) => Package { code, data },
        }
    }
}

/// Standardsettet som kjøres når ingen input er gitt.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parser en JSON-liste med pakker. Tuple- og objektform kan blandes.
pub fn parse_packages(json_in: &str) -> Result<Vec<Package>, PackageError> {
    let mut de = serde_json::Deserializer::from_str(json_in);
    let raw: Vec<PackageIn> = spte::deserialize(&mut de).map_err(|e| PackageError::Parse {
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })?;
    de.end().map_err(|e| PackageError::Parse {
        path: ".".to_string(),
        message: e.to_string(),
    })?;

    Ok(raw.into_iter().map(Package::from).collect())
}

/// Leser pakker fra en JSON-fil på disk.
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<Package>, PackageError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| PackageError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let packages = parse_packages(&contents)?;
    info!("loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}
