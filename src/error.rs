//! Error type shared by the layout engine, the transition controller and
//! the JS facade.
//!
//! Every fallible operation validates its input before touching any state,
//! so an `Err` always means nothing was mutated.

use thiserror::Error;

/// Errors produced by the arrangement crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// Item count was negative, non-finite or fractional.
    #[error("invalid item count {0}: expected a non-negative integer")]
    InvalidItemCount(f64),

    /// Arrangement name did not match any known arrangement.
    #[error("unknown arrangement '{0}': expected table, sphere, helix or grid")]
    UnknownArrangement(String),

    /// Transition duration was negative or non-finite.
    #[error("invalid transition duration {0}: expected a finite value >= 0")]
    InvalidDuration(f64),

    /// Elapsed time passed to `advance` was negative or non-finite.
    #[error("invalid elapsed time {0}: expected a finite value >= 0")]
    InvalidElapsed(f64),

    /// A supplied position contained NaN or infinity.
    #[error("item {index} has a non-finite position ({x}, {y}, {z})")]
    NonFinitePosition {
        /// Item index.
        index: usize,
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
        /// Z coordinate.
        z: f32,
    },

    /// Flat position buffer whose length is not a multiple of 3.
    #[error("position buffer length {0} is not a multiple of 3")]
    MalformedPositions(usize),

    /// Item index beyond the loaded batch.
    #[error("item {index} out of range for {count} items")]
    ItemOutOfRange {
        /// Requested index.
        index: usize,
        /// Current item count.
        count: usize,
    },

    /// A configuration value failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A configuration object could not be decoded.
    #[error("config decode error: {0}")]
    ConfigDecode(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Largest batch a scene accepts (2^20 items, 12 MiB of positions).
pub const MAX_ITEMS: usize = 1 << 20;

/// Validate an item count coming from an untyped (JS) caller.
pub fn validate_item_count(count: f64) -> Result<usize> {
    if !count.is_finite() || count < 0.0 || count.fract() != 0.0 || count > MAX_ITEMS as f64 {
        return Err(LayoutError::InvalidItemCount(count));
    }
    Ok(count as usize)
}

/// Reject batches larger than [`MAX_ITEMS`].
pub fn check_item_count(count: usize) -> Result<usize> {
    if count > MAX_ITEMS {
        return Err(LayoutError::InvalidItemCount(count as f64));
    }
    Ok(count)
}

/// Validate a transition duration.
pub fn validate_duration(duration: f64) -> Result<f64> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(LayoutError::InvalidDuration(duration));
    }
    Ok(duration)
}

/// Validate an elapsed-time step.
pub fn validate_elapsed(dt: f64) -> Result<f64> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(LayoutError::InvalidElapsed(dt));
    }
    Ok(dt)
}
