use crate::bus::BusError;
use thiserror::Error;

/// Error types for the VL6180 hub
#[derive(Error, Debug)]
pub enum SensorError {
    #[error("bus transfer failed: {0}")]
    Bus(#[from] BusError),

    #[error("sensor '{sensor}' initialization failed: {reason}")]
    InitError { sensor: String, reason: String },

    #[error("sensor '{sensor}' read failed: {reason}")]
    ReadError { sensor: String, reason: String },

    #[error("invalid sensor configuration for '{sensor}': {reason}")]
    ConfigError { sensor: String, reason: String },

    #[error("unsupported sensor driver: '{driver}'")]
    UnsupportedDriver { driver: String },

    #[error("sensor '{sensor}' wrong chip ID: expected {expected:#04x}, got {actual:#04x}")]
    WrongChipId {
        sensor: String,
        expected: u8,
        actual: u8,
    },

    #[error("sensor '{sensor}' timed out polling register {register:#06x} after {iterations} reads")]
    PollTimeout {
        sensor: String,
        register: u16,
        iterations: u32,
    },
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration from '{path}': {source}")]
    LoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration format: {0}")]
    FormatError(#[from] toml::de::Error),
}

/// Registry and initialization errors
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("sensor registration failed: {0}")]
    RegistrationError(#[source] SensorError),

    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}

/// Result type aliases for convenience
pub type SensorResult<T> = Result<T, SensorError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type RegistryResult<T> = Result<T, RegistryError>;
