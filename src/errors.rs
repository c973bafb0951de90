use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid engine type `{0}`, expected `electric` or `gas`")]
    InvalidEngineType(String),

    #[error("Invalid engine tier `{0}`, expected `high` or `low`")]
    InvalidEngineTier(String),

    #[error("Invalid stability `{0}`, expected `low`, `medium` or `high`")]
    InvalidStability(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),
}

impl CatalogError {
    pub fn engine_type<S: Into<String>>(value: S) -> Self {
        Self::InvalidEngineType(value.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}
