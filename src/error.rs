// Error type shared by the library and both binaries
use thiserror::Error;

/// Errors raised by the checked projection, closure and viewport routines.
///
/// The unchecked [`project`](crate::projection::project) never fails; it lets
/// IEEE-754 infinities and NaN flow through instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObserverError {
    /// A projection was requested over a range with no indices.
    #[error("range size must be greater than zero")]
    EmptyRange,

    /// The restored projection value is infinite or NaN.
    #[error("projection of index {target} in range {range_size} is not finite: {value}")]
    NonFiniteProjection {
        range_size: u64,
        target: u64,
        value: f64,
    },

    /// Viewport geometry that cannot be inverted.
    #[error("invalid viewport: {0}")]
    InvalidViewport(String),

    /// Closure benchmark scale that is not a positive finite number.
    #[error("invalid scale: {0}")]
    InvalidScale(f64),
}

/// A specialized [`Result`] type for observer operations.
pub type Result<T> = std::result::Result<T, ObserverError>;
