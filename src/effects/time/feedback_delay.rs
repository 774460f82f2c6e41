use crate::core::error::{check_range, ConfigError};
use crate::core::ring_buffer::RingBuffer;
use crate::FrameProcessor;

/// Default history length of a feedback delay line.
///
/// 2 seconds at 48 kHz is 96000 samples; the next power of two is 131072.
pub const DELAY_CAPACITY: usize = 131_072;

/// Converts a delay time in milliseconds to a whole number of samples.
///
/// Rounds half away from zero. Negative or non-finite times map to 0.
pub fn delay_samples_for_ms(delay_ms: f32, sample_rate: f32) -> usize {
    let samples = libm::roundf(delay_ms / 1000.0 * sample_rate);
    if samples.is_finite() && samples > 0.0 {
        samples as usize
    } else {
        0
    }
}

/// A delay length that is known to fit a buffer of `N` samples.
///
/// Construction is the only place the length is checked, so the per-sample path of
/// [`FeedbackDelayLine`] never has to branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayLength<const N: usize = DELAY_CAPACITY>(usize);

impl<const N: usize> DelayLength<N> {
    /// Validates a delay in samples. Fails when `delay_samples >= N`.
    pub fn new(delay_samples: usize) -> Result<Self, ConfigError> {
        if delay_samples >= N {
            return Err(ConfigError::DelayTooLong {
                delay_samples,
                capacity: N,
            });
        }
        Ok(DelayLength(delay_samples))
    }

    /// Validates a delay given in milliseconds at `sample_rate`.
    pub fn from_ms(delay_ms: f32, sample_rate: f32) -> Result<Self, ConfigError> {
        Self::new(delay_samples_for_ms(delay_ms, sample_rate))
    }

    /// The delay in samples.
    pub fn samples(&self) -> usize {
        self.0
    }
}

/// An IIR feedback delay line.
///
/// Keeps separate input and output histories. Each call computes
///
/// ```text
/// y[n] = (1 - wetness) * x[n] + wetness * x[n - D] + feedback * y[n - D]
/// ```
///
/// The feedback term recirculates earlier output, so repeats decay geometrically by
/// `feedback`. The line is only stable for `|feedback| < 1`; this is left to the
/// caller.
pub struct FeedbackDelayLine<const N: usize = DELAY_CAPACITY> {
    input_history: RingBuffer<f32, N>,
    output_history: RingBuffer<f32, N>,
}

impl<const N: usize> FeedbackDelayLine<N> {
    /// Creates a silent delay line.
    pub fn new() -> Self {
        FeedbackDelayLine {
            input_history: RingBuffer::new(),
            output_history: RingBuffer::new(),
        }
    }

    /// Processes one sample.
    ///
    /// # Arguments
    /// * `input` - The incoming sample.
    /// * `delay` - Delay length, already validated against the buffer capacity.
    /// * `wetness` - Gain of the delayed input (the dry path gets `1 - wetness`).
    /// * `feedback` - Gain of the delayed output.
    #[inline]
    pub fn process(&mut self, input: f32, delay: DelayLength<N>, wetness: f32, feedback: f32) -> f32 {
        let delayed_input = self.input_history.get(delay.samples());
        let delayed_output = self.output_history.get(delay.samples());

        self.input_history.push(input);

        let output = (1.0 - wetness) * input + wetness * delayed_input + feedback * delayed_output;

        self.output_history.push(output);
        output
    }

    /// History length in samples.
    pub fn capacity(&self) -> usize {
        N
    }

    /// Clears both histories.
    pub fn reset(&mut self) {
        self.input_history.clear();
        self.output_history.clear();
    }
}

impl<const N: usize> Default for FeedbackDelayLine<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`FeedbackDelayLine`] with fixed settings, usable as a block processor.
pub struct FeedbackDelay<const N: usize = DELAY_CAPACITY> {
    line: FeedbackDelayLine<N>,
    delay: DelayLength<N>,
    wetness: f32,
    feedback: f32,
}

impl<const N: usize> FeedbackDelay<N> {
    /// Creates a new FeedbackDelay.
    ///
    /// # Arguments
    /// * `delay_samples` - Delay in samples, must be below the capacity `N`.
    /// * `wetness` - Delayed input gain (0.0 - 1.0).
    /// * `feedback` - Delayed output gain, magnitude below 1.0.
    pub fn new(delay_samples: usize, wetness: f32, feedback: f32) -> Result<Self, ConfigError> {
        let delay = DelayLength::new(delay_samples)?;
        let wetness = check_range("wetness", wetness, 0.0, 1.0)?;
        let feedback = check_range("feedback", feedback, -1.0, 1.0)?;
        if feedback.abs() >= 1.0 {
            log::warn!("feedback of {} will not decay", feedback);
        }

        Ok(FeedbackDelay {
            line: FeedbackDelayLine::new(),
            delay,
            wetness,
            feedback,
        })
    }

    /// Processes one sample with the stored settings.
    #[inline]
    pub fn process_sample(&mut self, input: f32) -> f32 {
        self.line
            .process(input, self.delay, self.wetness, self.feedback)
    }

    /// The configured delay.
    pub fn delay(&self) -> DelayLength<N> {
        self.delay
    }
}

impl<const N: usize> FrameProcessor for FeedbackDelay<N> {
    fn process(&mut self, buffer: &mut [f32], _sample_index: u64) {
        for sample in buffer.iter_mut() {
            *sample = self.process_sample(*sample);
        }
    }

    fn reset(&mut self) {
        self.line.reset();
    }

    #[cfg(feature = "debug_visualize")]
    fn name(&self) -> &str {
        "FeedbackDelay (IIR)"
    }
}
