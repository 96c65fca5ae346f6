//! Error types for the battery gauge.

/// `ENODEV`, reported for a strip that is not ready
const ENODEV: i32 = 19;

/// Errors surfaced by gauge operations.
///
/// Sensor failures never show up here: the sampler downgrades them to a
/// diagnostic and a full-charge reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HardwareError {
    /// The LED strip device is not initialized or not available.
    #[error("LED strip device not ready")]
    DeviceNotReady,

    /// The LED strip rejected a frame.
    #[error("Failed to update LED strip (error code: {0})")]
    Write(i32),
}

impl HardwareError {
    /// Native error code for firmware glue that reports integers upward
    pub const fn code(self) -> i32 {
        match self {
            Self::DeviceNotReady => -ENODEV,
            Self::Write(code) => code,
        }
    }
}
