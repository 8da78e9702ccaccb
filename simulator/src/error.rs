use greeting_common::ConfigError;

/// Result alias that carries [`SimulatorError`].
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Errors surfaced by the simulator binary.
#[derive(Debug, thiserror::Error)]
pub enum SimulatorError {
    /// The scene configuration or string table was rejected.
    #[error("invalid scene: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// A configuration file could not be parsed or printed.
    #[error("config file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot failed: {0}")]
    Snapshot(String),
}
