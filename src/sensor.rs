//! Battery charge sampling
//!
//! Reads the state of charge from an optional [`ChargeSensor`]. A missing
//! sensor or a failed read is never an error for the caller: the gauge
//! rather looks full than blocks input processing.

use log::{debug, error, warn};

use crate::ChargeSensor;

/// Charge reported when no reading is available
pub const FALLBACK_PERCENT: i32 = 100;

/// Placeholder sensor type for boards without a battery gauge
///
/// Never ready, so sampling always takes the fallback path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSensor;

impl ChargeSensor for NoSensor {
    fn is_ready(&self) -> bool {
        false
    }

    fn sample_fetch(&mut self) -> Result<(), i32> {
        Ok(())
    }

    fn state_of_charge(&mut self) -> Result<i32, i32> {
        Ok(FALLBACK_PERCENT)
    }
}

/// Reasons a charge reading could not be taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SensorReadFailure {
    /// No sensor configured, or it is not ready
    Unavailable,
    /// Latching a new sample failed
    Fetch(i32),
    /// Reading the state-of-charge channel failed
    Channel(i32),
}

/// Charge sampler over an optional sensor
#[derive(Debug)]
pub struct ChargeSampler<S: ChargeSensor> {
    sensor: Option<S>,
}

impl<S: ChargeSensor> ChargeSampler<S> {
    pub const fn new(sensor: Option<S>) -> Self {
        Self { sensor }
    }

    /// Take a fresh charge reading in percent
    ///
    /// The value is passed through unclamped.
    pub fn sample(&mut self) -> i32 {
        match self.read() {
            Ok(percent) => {
                debug!("Battery SOC: {}%", percent);
                percent
            }
            Err(SensorReadFailure::Unavailable) => {
                warn!("Battery device not available, returning {}%", FALLBACK_PERCENT);
                FALLBACK_PERCENT
            }
            Err(SensorReadFailure::Fetch(code)) => {
                error!("Failed to fetch battery sample: {}", code);
                FALLBACK_PERCENT
            }
            Err(SensorReadFailure::Channel(code)) => {
                error!("Failed to get battery SOC: {}", code);
                FALLBACK_PERCENT
            }
        }
    }

    /// Get a mutable reference to the sensor, if any
    pub fn sensor_mut(&mut self) -> Option<&mut S> {
        self.sensor.as_mut()
    }

    fn read(&mut self) -> Result<i32, SensorReadFailure> {
        let sensor = match self.sensor.as_mut() {
            Some(sensor) if sensor.is_ready() => sensor,
            _ => return Err(SensorReadFailure::Unavailable),
        };
        sensor.sample_fetch().map_err(SensorReadFailure::Fetch)?;
        sensor.state_of_charge().map_err(SensorReadFailure::Channel)
    }
}
