//! Diagnostics backend
//!
//! The crate reports through the `log` facade only. Diagnostics are
//! best-effort: nothing depends on a logger being installed.

/// Install the `esp-println` logger at the given level
#[cfg(feature = "esp32-log")]
pub fn init(level: log::LevelFilter) {
    esp_println::logger::init_logger(level);
}
