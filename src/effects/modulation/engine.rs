use super::kind::ModulationKind;
use super::params::ModulationParams;
use crate::core::error::ConfigError;
use crate::core::ring_buffer::RingBuffer;
use crate::effects::utility::dry_wet::{blend, blend_into};
use crate::synthesis::lfo::SineLfo;
use crate::FrameProcessor;
use alloc::vec::Vec;

/// Default history length of a modulation engine.
pub const MODULATION_CAPACITY: usize = 2048;

/// An LFO-modulated fractional delay: the shared core of vibrato, chorus and flanger.
///
/// Every sample the engine pushes the input into its history, advances a sine LFO,
/// swings the read delay around the effect's centre delay by `depth_samples`, and
/// reads the history at that non-integer delay with linear interpolation. The
/// interpolated (wet) sample is blended with the input by `mix`.
///
/// Linear interpolation attenuates high frequencies slightly when the delay moves
/// quickly; at musical depths and rates this is inaudible.
///
/// The delay is clamped to `1..=N - 2` so that both interpolation taps always hold
/// history. Settings whose excursion leaves that window lose modulation depth rather
/// than failing.
pub struct ModulationEngine<const N: usize = MODULATION_CAPACITY> {
    kind: ModulationKind,
    params: ModulationParams,
    history: RingBuffer<f32, N>,
    lfo: SineLfo,
    range_reported: bool,

    sample_rate: f32,
    log_range: bool,
    wet_buffer: Vec<f32>,
}

impl<const N: usize> ModulationEngine<N> {
    /// Longest read delay. Both interpolation taps must hold history, so `N >= 4`.
    const MAX_DELAY: f32 = {
        assert!(N >= 4, "ModulationEngine needs a capacity of at least 4 samples");
        (N - 2) as f32
    };

    /// Creates an engine with the effect's preset parameters.
    pub fn new(kind: ModulationKind) -> Self {
        Self::with_params(kind, kind.default_params())
    }

    /// Creates an engine with explicit parameters.
    pub fn with_params(kind: ModulationKind, params: ModulationParams) -> Self {
        let _ = Self::MAX_DELAY;
        log::debug!("{} effect loaded", kind);
        ModulationEngine {
            kind,
            params,
            history: RingBuffer::new(),
            lfo: SineLfo::new(),
            range_reported: false,
            sample_rate: 44100.0,
            log_range: false,
            wet_buffer: Vec::new(),
        }
    }

    /// Creates a Vibrato (5 Hz, 10 samples, fully wet).
    pub fn vibrato() -> Self {
        Self::new(ModulationKind::Vibrato)
    }

    /// Creates a Chorus (0.8 Hz, 96 samples, half wet).
    pub fn chorus() -> Self {
        Self::new(ModulationKind::Chorus)
    }

    /// Creates a Flanger (0.2 Hz, 48 samples, half wet).
    pub fn flanger() -> Self {
        Self::new(ModulationKind::Flanger)
    }

    /// Processes one sample.
    ///
    /// # Arguments
    /// * `input` - The incoming sample.
    /// * `sample_rate` - Sample rate in Hz, must be positive.
    /// * `logging_enabled` - Report the delay range on the first call that enables it.
    ///
    /// A sample rate that differs from the last one seen is stored, and the clamp
    /// warning is re-evaluated for it.
    #[inline]
    pub fn process(&mut self, input: f32, sample_rate: f32, logging_enabled: bool) -> f32 {
        if sample_rate != self.sample_rate {
            self.sample_rate = sample_rate;
            self.warn_if_clamped();
        }
        let wet = self.next_wet(input, sample_rate, logging_enabled);
        blend(input, wet, self.params.mix())
    }

    #[inline]
    fn next_wet(&mut self, input: f32, sample_rate: f32, logging_enabled: bool) -> f32 {
        self.history.push(input);

        let lfo = self.lfo.advance(self.params.rate_hz(), sample_rate);

        let depth = self.params.depth_samples();
        let base = self.kind.base_delay_samples(depth, sample_rate);

        if logging_enabled && !self.range_reported {
            self.range_reported = true;
            self.report_range(base, depth, sample_rate);
        }

        let delay = (base + depth * lfo).clamp(1.0, Self::MAX_DELAY);

        let whole = libm::floorf(delay);
        let frac = delay - whole;
        let d0 = whole as usize;

        let y0 = self.history.get(d0);
        let y1 = self.history.get(d0 + 1);

        (1.0 - frac) * y0 + frac * y1
    }

    #[cold]
    fn report_range(&self, base: f32, depth: f32, sample_rate: f32) {
        let (min_ms, max_ms) = range_ms(base, depth, sample_rate);
        log::info!(
            "{} effect: range of the delay | max: {} ms | min: {} ms",
            self.kind,
            max_ms,
            min_ms
        );
    }

    /// The unclamped `[min, max]` delay the LFO sweeps, in milliseconds.
    pub fn delay_range_ms(&self, sample_rate: f32) -> (f32, f32) {
        let depth = self.params.depth_samples();
        let base = self.kind.base_delay_samples(depth, sample_rate);
        range_ms(base, depth, sample_rate)
    }

    /// Whether the full swing stays inside `1..=N - 2` at `sample_rate`.
    pub fn fits_buffer(&self, sample_rate: f32) -> bool {
        let depth = self.params.depth_samples();
        let base = self.kind.base_delay_samples(depth, sample_rate);
        base - depth >= 1.0 && base + depth <= Self::MAX_DELAY
    }

    #[cold]
    fn warn_if_clamped(&self) {
        if self.fits_buffer(self.sample_rate) {
            return;
        }
        let depth = self.params.depth_samples();
        let base = self.kind.base_delay_samples(depth, self.sample_rate);
        log::warn!(
            "{} sweep {}..{} samples exceeds 1..={}, modulation will be clamped",
            self.kind,
            base - depth,
            base + depth,
            N - 2
        );
    }

    /// Sets the LFO rate in Hz. Must be finite and positive.
    pub fn set_rate_hz(&mut self, rate_hz: f32) -> Result<(), ConfigError> {
        self.params.set_rate_hz(rate_hz)
    }

    /// Sets the modulation depth in samples. Must be finite and non-negative.
    pub fn set_depth_samples(&mut self, depth_samples: f32) -> Result<(), ConfigError> {
        self.params.set_depth_samples(depth_samples)?;
        self.warn_if_clamped();
        Ok(())
    }

    /// Sets the wet share of the output. Must lie in `[0, 1]`.
    pub fn set_mix(&mut self, mix: f32) -> Result<(), ConfigError> {
        self.params.set_mix(mix)
    }

    /// Replaces the whole parameter set.
    pub fn set_params(&mut self, params: ModulationParams) {
        self.params = params;
        self.warn_if_clamped();
    }

    /// Enables the one-shot range report for block processing.
    pub fn set_range_logging(&mut self, enabled: bool) {
        self.log_range = enabled;
    }

    pub fn params(&self) -> ModulationParams {
        self.params
    }

    pub fn kind(&self) -> ModulationKind {
        self.kind
    }

    /// Current LFO phase in radians, within `[0, 2π)`.
    pub fn phase(&self) -> f32 {
        self.lfo.phase()
    }

    /// Whether the delay range has been logged for this instance.
    pub fn has_reported_range(&self) -> bool {
        self.range_reported
    }

    pub fn capacity(&self) -> usize {
        N
    }

    /// The sample rate used by block processing and by the clamp warning.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }
}

fn range_ms(base: f32, depth: f32, sample_rate: f32) -> (f32, f32) {
    let min_ms = (base - depth) / sample_rate * 1000.0;
    let max_ms = (base + depth) / sample_rate * 1000.0;
    (min_ms, max_ms)
}

impl<const N: usize> FrameProcessor for ModulationEngine<N> {
    fn process(&mut self, buffer: &mut [f32], _sample_index: u64) {
        let len = buffer.len();
        if self.wet_buffer.len() < len {
            self.wet_buffer.resize(len, 0.0);
        }

        let sample_rate = self.sample_rate;
        let log_range = self.log_range;
        for (i, &input) in buffer.iter().enumerate() {
            let wet = self.next_wet(input, sample_rate, log_range);
            self.wet_buffer[i] = wet;
        }

        blend_into(buffer, &self.wet_buffer[0..len], self.params.mix());
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.warn_if_clamped();
    }

    fn reset(&mut self) {
        self.history.clear();
        self.lfo.reset();
        self.range_reported = false;
    }

    #[cfg(feature = "debug_visualize")]
    fn name(&self) -> &str {
        match self.kind {
            ModulationKind::Vibrato => "ModulationEngine (Vibrato)",
            ModulationKind::Chorus => "ModulationEngine (Chorus)",
            ModulationKind::Flanger => "ModulationEngine (Flanger)",
        }
    }
}
