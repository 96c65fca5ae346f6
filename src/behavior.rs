//! Keypress binding adapter
//!
//! Maps key binding events onto gauge operations: a press shows the gauge,
//! a release does nothing.

use log::debug;

use crate::error::HardwareError;
use crate::gauge::BatteryGauge;
use crate::{ChargeSensor, LedStrip};

/// Key binding event delivered by the keymap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingEvent {
    Pressed,
    Released,
}

/// How the keymap should treat the event after the gauge handled it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorResponse {
    /// The event is consumed
    Opaque,
    /// The event falls through to lower layers
    Transparent,
}

impl BehaviorResponse {
    /// Native keymap code for this response
    pub const fn code(self) -> i32 {
        match self {
            Self::Opaque => 0,
            Self::Transparent => 1,
        }
    }
}

impl<L: LedStrip, S: ChargeSensor, const N: usize> BatteryGauge<'_, L, S, N> {
    /// Handle a key binding event
    pub fn on_binding(&mut self, event: BindingEvent) -> Result<BehaviorResponse, HardwareError> {
        match event {
            BindingEvent::Pressed => {
                debug!("Battery gauge behavior triggered");
                self.show()?;
            }
            BindingEvent::Released => {}
        }
        Ok(BehaviorResponse::Opaque)
    }
}
