//! Configuration error types
//!
//! The simulation itself never fails at runtime; bad configuration is the only
//! thing rejected, and it is rejected before a [`crate::sim::GameState`] exists.

/// Errors raised while loading or validating [`crate::Settings`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Playfield dimensions must be finite and positive.
    #[error("invalid playfield size {width}x{height}: dimensions must be finite and positive")]
    InvalidBounds { width: f32, height: f32 },

    /// A tuning value was NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    /// A range whose bounds are reversed, negative or non-finite.
    #[error("invalid range for {field}: [{min}, {max}]")]
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    /// A scalar outside its accepted interval.
    #[error("{field} = {value} is out of range (expected {expected})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// The settings file could not be read.
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// The settings document was not valid JSON for [`crate::Settings`].
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
