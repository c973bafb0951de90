use crate::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Propulsion type of an engine.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    #[serde(rename = "gas")]
    Gas,
    #[serde(rename = "electric")]
    Electric,
}

impl EngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gas => "gas",
            Self::Electric => "electric",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for EngineKind {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "gas" => Ok(Self::Gas),
            "electric" => Ok(Self::Electric),
            _ => Err(CatalogError::engine_type(value)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl TryFrom<&str> for Stability {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(CatalogError::InvalidStability(value.to_string())),
        }
    }
}

/// Physical characteristics of a propulsion unit.
///
/// Values are stored as given; nothing is range-checked. Once built an
/// engine cannot be changed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Engine {
    kind: EngineKind,
    torque: f64,
    maximum_speed: f64,
    dimensions: String,
    power: f64,
    stability: Stability,
    weight: f64,
}

impl Engine {
    pub fn new<S: Into<String>>(
        kind: EngineKind,
        torque: f64,
        maximum_speed: f64,
        dimensions: S,
        power: f64,
        stability: Stability,
        weight: f64,
    ) -> Self {
        Self {
            kind,
            torque,
            maximum_speed,
            dimensions: dimensions.into(),
            power,
            stability,
            weight,
        }
    }

    pub fn gas<S: Into<String>>(
        torque: f64,
        maximum_speed: f64,
        dimensions: S,
        power: f64,
        stability: Stability,
        weight: f64,
    ) -> Self {
        Self::new(
            EngineKind::Gas,
            torque,
            maximum_speed,
            dimensions,
            power,
            stability,
            weight,
        )
    }

    pub fn electric<S: Into<String>>(
        torque: f64,
        maximum_speed: f64,
        dimensions: S,
        power: f64,
        stability: Stability,
        weight: f64,
    ) -> Self {
        Self::new(
            EngineKind::Electric,
            torque,
            maximum_speed,
            dimensions,
            power,
            stability,
            weight,
        )
    }

    pub fn kind(&self) -> EngineKind {
        self.kind
    }

    pub fn torque(&self) -> f64 {
        self.torque
    }

    pub fn maximum_speed(&self) -> f64 {
        self.maximum_speed
    }

    /// Free-form dimensions label, usually `WxHxD`.
    pub fn dimensions(&self) -> &str {
        &self.dimensions
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn stability(&self) -> Stability {
        self.stability
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} engine ({} power, {} torque, {} max speed, {}, {} stability, {} weight)",
            self.kind,
            self.power,
            self.torque,
            self.maximum_speed,
            self.dimensions,
            self.stability,
            self.weight
        )
    }
}
