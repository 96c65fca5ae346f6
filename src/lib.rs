#![no_std]

pub mod behavior;
pub mod color;
pub mod driver;
pub mod error;
pub mod gauge;
pub mod logging;
pub mod sensor;
pub mod timer;
pub mod work;

pub use behavior::{BehaviorResponse, BindingEvent};
pub use color::{
    DARK, DEFAULT_GRADIENT, GradientTable, PixelBuffer, Rgb, scale_color, segments_lit,
};
pub use driver::{DisplayDriver, SmartLedsStrip};
pub use error::HardwareError;
pub use gauge::{
    BatteryGauge, DEFAULT_DISPLAY_DURATION, DisplayState, GaugeConfig, SEGMENT_COUNT,
};
pub use sensor::{ChargeSampler, FALLBACK_PERCENT, NoSensor};
pub use timer::{AutoOffTimer, TimerState};
pub use work::{GaugeWork, OffWorkQueue, OffWorkSubmitter, OffWorker, WorkQueue};

pub use embassy_time::{Duration, Instant};

/// Abstract LED strip device
///
/// Implement this trait to support different hardware platforms.
/// Errors are reported as the device's native (negative) error code.
pub trait LedStrip {
    /// Check if the device is initialized and usable
    fn is_ready(&self) -> bool;

    /// Write a full frame to the LED strip
    fn update_rgb(&mut self, pixels: &[Rgb]) -> Result<(), i32>;
}

/// Abstract battery state-of-charge sensor
///
/// Reads happen in two steps: `sample_fetch` latches a new measurement,
/// `state_of_charge` returns it as a percentage.
pub trait ChargeSensor {
    /// Check if the device is initialized and usable
    fn is_ready(&self) -> bool;

    /// Latch a fresh sample
    fn sample_fetch(&mut self) -> Result<(), i32>;

    /// Read the latched state of charge in percent
    fn state_of_charge(&mut self) -> Result<i32, i32>;
}
