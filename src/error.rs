use crate::types::machine::{MachineType, Part};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthError {
    #[error("part {part} is not registered for machine type {machine}")]
    UnknownPart { machine: MachineType, part: Part },

    #[error("no readings supplied for machine type {0}")]
    NoReadings(MachineType),

    #[error("unknown machine type: {0}")]
    UnknownMachine(String),

    #[error("unknown part name: {0}")]
    UnknownPartName(String),

    #[error("profile parse error: {0}")]
    ProfileParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HealthError>;
