use crate::color::{DARK, Rgb, scale_color};

/// Frame pushed to the LED strip, one color per segment
pub type PixelBuffer<const N: usize> = [Rgb; N];

/// Stacked gauge colors for a five segment strip
///
/// Index 0 is the top segment (full charge), the last index is the
/// bottom segment (low charge).
pub const DEFAULT_GRADIENT: GradientTable<5> = GradientTable::new([
    Rgb { r: 0, g: 255, b: 0 },
    Rgb { r: 0, g: 255, b: 0 },
    Rgb { r: 255, g: 255, b: 0 },
    Rgb { r: 255, g: 128, b: 0 },
    Rgb { r: 255, g: 0, b: 0 },
]);

/// Fixed per-segment colors of the gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientTable<const N: usize> {
    colors: [Rgb; N],
}

impl<const N: usize> GradientTable<N> {
    /// Create a table from top (highest tier) to bottom (lowest tier)
    pub const fn new(colors: [Rgb; N]) -> Self {
        Self { colors }
    }

    /// Get the raw table colors
    pub const fn colors(&self) -> &[Rgb; N] {
        &self.colors
    }

    /// Render a frame with `lit` segments turned on
    ///
    /// Segments fill from the bottom up: the last LED lights first and the
    /// top LED only lights at full charge. Every other LED is dark.
    pub fn render(&self, lit: usize, brightness: u8) -> PixelBuffer<N> {
        let mut frame = [DARK; N];
        for i in 0..lit.min(N) {
            let index = N - 1 - i;
            frame[index] = scale_color(self.colors[index], brightness);
        }
        frame
    }
}

/// Map a charge percentage to the number of lit segments
///
/// Each segment covers `100 / N` percent. Anything at or below zero lights
/// nothing, anything above 100 lights everything.
pub fn segments_lit<const N: usize>(percent: i32) -> usize {
    const { assert!(N > 0, "gauge needs at least one segment") };
    if percent <= 0 {
        return 0;
    }
    let step = u32::try_from(N).map_or(1, |count| (100 / count).max(1));
    let count = percent.unsigned_abs().div_ceil(step);

    usize::try_from(count).map_or(N, |count| count.min(N))
}
