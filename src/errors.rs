use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
