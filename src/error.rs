use thiserror::Error as ThisError;

/// Error types
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("atomic potential error: {0}")]
    AtomicPotentialError(String),
    #[error("container error: {0}")]
    ContainerError(String),
    #[error("initialization error: {0}")]
    InitializationError(String),
    #[error("integrator error: {0}")]
    IntegratorError(String),
    #[error("config error: {0}")]
    ConfigError(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Checks that a parameter is finite and not negative
pub(crate) fn check_non_negative(name: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{} should be finite and non-negative, found {}", name, value))
    }
}

/// Checks that a parameter is finite and strictly positive
pub(crate) fn check_positive(name: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(format!("{} should be finite and positive, found {}", name, value))
    }
}
