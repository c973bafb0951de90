use crate::{
    CatalogError, VehicleListing,
    factories::{HighEngineFactory, PoorEngineFactory},
    ports::EngineFactory,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Catalog bootstrap document, usually read from TOML.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CatalogConfig {
    #[serde(default)]
    pub engine_tier: EngineTier,

    #[serde(default)]
    pub vehicles: Vec<VehicleConfig>,
}

impl CatalogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// One vehicle entry of a [`CatalogConfig`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VehicleConfig {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub engine_type: String,
    pub chassis: String,
    pub price: f64,

    #[serde(default)]
    pub consumption: f64,
}

impl VehicleConfig {
    pub fn listing(&self) -> VehicleListing {
        VehicleListing::new(self.chassis.clone(), self.price, self.consumption)
    }
}

/// Quality level of the engines a factory produces.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineTier {
    #[serde(rename = "high")]
    High,
    #[serde(rename = "low", alias = "poor")]
    Low,
}

impl EngineTier {
    pub fn factory(&self) -> Box<dyn EngineFactory> {
        match self {
            Self::High => Box::new(HighEngineFactory),
            Self::Low => Box::new(PoorEngineFactory),
        }
    }
}

impl Default for EngineTier {
    fn default() -> Self {
        Self::High
    }
}

impl fmt::Display for EngineTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Low => write!(f, "low"),
        }
    }
}

impl TryFrom<&str> for EngineTier {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "low" | "poor" => Ok(Self::Low),
            _ => Err(CatalogError::InvalidEngineTier(value.to_string())),
        }
    }
}
