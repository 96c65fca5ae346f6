//! LED strip output
//!
//! Wraps a [`LedStrip`] device with the readiness check and error mapping
//! every push goes through. There are no retries: one call, one write.

use log::error;
use smart_leds::SmartLedsWrite;

use crate::LedStrip;
use crate::color::{PixelBuffer, Rgb};
use crate::error::HardwareError;

/// Native code reported when a [`SmartLedsWrite`] driver fails (`-EIO`)
const EIO: i32 = 5;

/// Display driver pushing whole frames to the strip
#[derive(Debug)]
pub struct DisplayDriver<L: LedStrip> {
    strip: L,
}

impl<L: LedStrip> DisplayDriver<L> {
    pub const fn new(strip: L) -> Self {
        Self { strip }
    }

    /// Check if the underlying device is ready
    pub fn is_ready(&self) -> bool {
        self.strip.is_ready()
    }

    /// Fail with [`HardwareError::DeviceNotReady`] unless the device is ready
    pub fn ensure_ready(&self) -> Result<(), HardwareError> {
        if self.strip.is_ready() {
            Ok(())
        } else {
            Err(HardwareError::DeviceNotReady)
        }
    }

    /// Push a full frame to the strip
    pub fn push<const N: usize>(&mut self, frame: &PixelBuffer<N>) -> Result<(), HardwareError> {
        self.ensure_ready()?;
        self.strip.update_rgb(frame).map_err(|code| {
            error!("Failed to update LED strip: {}", code);
            HardwareError::Write(code)
        })
    }

    /// Get a reference to the strip device
    pub const fn strip(&self) -> &L {
        &self.strip
    }

    /// Get a mutable reference to the strip device
    pub const fn strip_mut(&mut self) -> &mut L {
        &mut self.strip
    }
}

/// Adapter exposing any `smart-leds` writer as a [`LedStrip`]
///
/// Such writers have no readiness notion, so the strip is always ready.
/// Write failures are reported as `-EIO`.
#[derive(Debug)]
pub struct SmartLedsStrip<W> {
    writer: W,
}

impl<W> SmartLedsStrip<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Release the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> LedStrip for SmartLedsStrip<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn is_ready(&self) -> bool {
        true
    }

    fn update_rgb(&mut self, pixels: &[Rgb]) -> Result<(), i32> {
        self.writer
            .write(pixels.iter().copied())
            .map_err(|_| -EIO)
    }
}
