use embassy_time::{Duration, Instant};
use log::{debug, error, info};

use crate::color::{DARK, DEFAULT_GRADIENT, GradientTable, segments_lit};
use crate::driver::DisplayDriver;
use crate::error::HardwareError;
use crate::sensor::ChargeSampler;
use crate::timer::AutoOffTimer;
use crate::work::{GaugeWork, OffWorker};
use crate::{ChargeSensor, LedStrip};

/// Number of segments of the stock gauge
pub const SEGMENT_COUNT: usize = 5;

/// Default time the gauge stays lit
pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_millis(3000);

/// Default brightness scale
pub const DEFAULT_BRIGHTNESS: u8 = 64;

/// Configuration for the battery gauge
#[derive(Debug, Clone)]
pub struct GaugeConfig<const N: usize> {
    /// Per-segment colors, top to bottom
    pub gradient: GradientTable<N>,
    /// Scale factor applied to every color (0-255 = 0.0-1.0)
    pub brightness: u8,
    /// Time until the display turns itself off
    pub display_duration: Duration,
    /// Show the gauge once from [`BatteryGauge::init`]
    pub show_on_boot: bool,
}

impl<const N: usize> GaugeConfig<N> {
    /// Create a configuration with default timings for the given table
    pub const fn new(gradient: GradientTable<N>) -> Self {
        const { assert!(N > 0, "gauge needs at least one segment") };
        Self {
            gradient,
            brightness: DEFAULT_BRIGHTNESS,
            display_duration: DEFAULT_DISPLAY_DURATION,
            show_on_boot: false,
        }
    }
}

impl Default for GaugeConfig<SEGMENT_COUNT> {
    fn default() -> Self {
        Self::new(DEFAULT_GRADIENT)
    }
}

/// Whether the gauge is currently on the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Idle,
    Showing,
}

/// Battery gauge - the display orchestrator
///
/// Owns the LED strip and the optional charge sensor. The auto-off countdown
/// and its work queue are shared with the timer context, so the gauge only
/// borrows them.
///
/// `show`, `off` and `process_pending` must be called from one context at a
/// time; the timer context only ever calls [`AutoOffTimer::expire`].
pub struct BatteryGauge<'a, L: LedStrip, S: ChargeSensor, const N: usize> {
    // External dependencies and configuration
    display: DisplayDriver<L>,
    sampler: ChargeSampler<S>,
    timer: &'a AutoOffTimer<'a>,
    work: OffWorker<'a>,
    config: GaugeConfig<N>,

    // Internal state
    state: DisplayState,
}

impl<'a, L: LedStrip, S: ChargeSensor, const N: usize> BatteryGauge<'a, L, S, N> {
    /// Create a new gauge
    ///
    /// `work` must drain the same queue `timer` submits into.
    pub fn new(
        strip: L,
        sensor: Option<S>,
        timer: &'a AutoOffTimer<'a>,
        work: OffWorker<'a>,
        config: GaugeConfig<N>,
    ) -> Self {
        Self {
            display: DisplayDriver::new(strip),
            sampler: ChargeSampler::new(sensor),
            timer,
            work,
            config,
            state: DisplayState::Idle,
        }
    }

    /// Boot hook
    ///
    /// Shows the gauge once if configured to, otherwise does nothing.
    pub fn init(&mut self) -> Result<(), HardwareError> {
        info!("Battery gauge module initialized");
        if !self.config.show_on_boot {
            return Ok(());
        }
        if !self.display.is_ready() {
            error!("LED strip not ready at init");
            return Err(HardwareError::DeviceNotReady);
        }
        self.show()
    }

    /// Show the current charge and arm the auto-off countdown
    pub fn show(&mut self) -> Result<(), HardwareError> {
        self.show_at(Instant::now())
    }

    /// Show the current charge, counting the auto-off duration from `now`
    ///
    /// A failed push leaves the countdown disarmed and the state `Idle`.
    pub fn show_at(&mut self, now: Instant) -> Result<(), HardwareError> {
        if !self.display.is_ready() {
            error!("LED strip device not ready");
            return Err(HardwareError::DeviceNotReady);
        }

        self.timer.cancel();
        // Without a countdown the display is no longer tracked as showing
        self.state = DisplayState::Idle;

        let percent = self.sampler.sample();
        let lit = segments_lit::<N>(percent);
        info!("Battery: {}%, lighting {} LEDs", percent, lit);

        let frame = self.config.gradient.render(lit, self.config.brightness);
        self.display.push(&frame)?;

        self.timer.arm(self.config.display_duration, now);
        self.state = DisplayState::Showing;
        Ok(())
    }

    /// Blank the display and disarm the auto-off countdown
    pub fn off(&mut self) -> Result<(), HardwareError> {
        self.display.ensure_ready()?;

        self.timer.cancel();

        let frame = [DARK; N];
        self.display.push(&frame)?;

        debug!("Battery gauge display off");
        self.state = DisplayState::Idle;
        Ok(())
    }

    /// Run deferred work submitted by the auto-off countdown
    ///
    /// This is the worker context: call it whenever the timer context may
    /// have fired. Returns the number of items handled.
    pub fn process_pending(&mut self) -> Result<usize, HardwareError> {
        let mut handled = 0;
        while let Ok(work) = self.work.try_take() {
            match work {
                GaugeWork::TurnOff => self.off()?,
            }
            handled += 1;
        }
        Ok(handled)
    }

    /// Get the display state
    pub const fn state(&self) -> DisplayState {
        self.state
    }

    /// Get the configuration
    pub const fn config(&self) -> &GaugeConfig<N> {
        &self.config
    }

    /// Get a reference to the LED strip device
    pub const fn strip(&self) -> &L {
        self.display.strip()
    }

    /// Get a mutable reference to the LED strip device
    pub const fn strip_mut(&mut self) -> &mut L {
        self.display.strip_mut()
    }

    /// Get a mutable reference to the charge sensor, if any
    pub fn sensor_mut(&mut self) -> Option<&mut S> {
        self.sampler.sensor_mut()
    }
}
