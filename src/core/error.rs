use thiserror::Error;

/// Errors raised while setting up a processor.
///
/// Everything here is detected before the per-sample loop starts; processing itself
/// never fails.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// The requested delay does not fit in the ring buffer.
    #[error("delay of {delay_samples} samples does not fit a buffer of {capacity} samples")]
    DelayTooLong { delay_samples: usize, capacity: usize },

    /// A parameter was NaN or infinite.
    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    /// A parameter was finite but outside its accepted range.
    #[error("{name} = {value} is outside the accepted range {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    /// The number of channels handed in does not match the processor bank.
    #[error("expected {expected} channels, got {actual}")]
    ChannelCountMismatch { expected: usize, actual: usize },
}

/// Checks that `value` is finite and lies within `min..=max`.
pub(crate) fn check_range(
    name: &'static str,
    value: f32,
    min: f32,
    max: f32,
) -> Result<f32, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { name, value });
    }
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
