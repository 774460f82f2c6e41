use core::f32::consts::TAU;

/// A sine Low Frequency Oscillator driven by a radian phase accumulator.
///
/// The rate and sample rate are supplied on every step, so the oscillator holds no
/// state besides its phase. The per-step increment is reduced modulo `2π` first, so
/// the phase stays in `[0, 2π)` for any finite rate, including `rate_hz >= sample_rate`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SineLfo {
    phase: f32,
}

impl SineLfo {
    /// Creates an LFO at phase 0.
    pub fn new() -> Self {
        SineLfo { phase: 0.0 }
    }

    /// Advances the phase by one sample and returns `sin(phase)` at the new position.
    ///
    /// # Arguments
    /// * `rate_hz` - LFO frequency in Hz.
    /// * `sample_rate` - Sample rate in Hz.
    #[inline]
    pub fn advance(&mut self, rate_hz: f32, sample_rate: f32) -> f32 {
        let step = libm::fmodf(TAU * (rate_hz / sample_rate), TAU);
        self.phase += step;
        if self.phase >= TAU {
            self.phase -= TAU;
        }
        libm::sinf(self.phase)
    }

    /// Current phase in radians.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Rewinds the phase to 0.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}
