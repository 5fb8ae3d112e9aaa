use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid fleet size '{0}': expected a whole number")]
    InvalidFleetSize(String),

    #[error("Invalid fuel cost '{0}': expected a decimal number")]
    InvalidFuelCost(String),

    #[error("Invalid maintenance spend '{0}': expected a whole number")]
    InvalidMaintenance(String),

    #[error("Fleet size {value} is outside {min}..={max}")]
    FleetSizeOutOfRange { value: u32, min: u32, max: u32 },
}

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Settings format error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Input error: {0}")]
    InputError(#[from] InputError),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
