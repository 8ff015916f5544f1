//! Error types for background generation

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Width or height was zero
    #[error("Invalid grid dimensions {width}x{height}: both must be at least 1")]
    InvalidDimension { width: u32, height: u32 },

    /// A tunable is outside the range the generator can work with
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No drawing surface with the requested id
    #[error("No drawing surface with id {0:?}")]
    MissingSurface(String),
}
