use crate::core::error::ConfigError;
use crate::FrameProcessor;
use alloc::vec::Vec;

/// One independent processor per audio channel.
///
/// Delay and modulation processors keep history, so channels must never share an
/// instance. The bank owns a separate processor for each channel and routes every
/// channel's samples through its own processor only.
pub struct ChannelBank<P> {
    processors: Vec<P>,
    scratch: Vec<f32>,
}

impl<P: FrameProcessor> ChannelBank<P> {
    /// Creates a bank of `channels` processors.
    ///
    /// # Arguments
    /// * `channels` - Number of audio channels.
    /// * `make` - Builds the processor for a channel index.
    pub fn new(channels: usize, make: impl FnMut(usize) -> P) -> Self {
        ChannelBank {
            processors: (0..channels).map(make).collect(),
            scratch: Vec::new(),
        }
    }

    /// Like [`new`](Self::new) for processors whose construction can fail.
    pub fn try_new(
        channels: usize,
        make: impl FnMut(usize) -> Result<P, ConfigError>,
    ) -> Result<Self, ConfigError> {
        Ok(ChannelBank {
            processors: (0..channels).map(make).collect::<Result<_, _>>()?,
            scratch: Vec::new(),
        })
    }

    pub fn channels(&self) -> usize {
        self.processors.len()
    }

    /// The processor of channel `index`.
    pub fn channel_mut(&mut self, index: usize) -> Option<&mut P> {
        self.processors.get_mut(index)
    }

    /// Processes planar audio, one slice per channel.
    ///
    /// Fails without touching any sample if the number of slices differs from the
    /// number of processors.
    pub fn process_channels<S: AsMut<[f32]>>(
        &mut self,
        channels: &mut [S],
        sample_index: u64,
    ) -> Result<(), ConfigError> {
        if channels.len() != self.processors.len() {
            return Err(ConfigError::ChannelCountMismatch {
                expected: self.processors.len(),
                actual: channels.len(),
            });
        }

        for (processor, channel) in self.processors.iter_mut().zip(channels.iter_mut()) {
            processor.process(channel.as_mut(), sample_index);
        }
        Ok(())
    }
}

impl<P: FrameProcessor> FrameProcessor for ChannelBank<P> {
    /// Processes an interleaved buffer: frame by frame, one sample per channel.
    ///
    /// Only whole frames are processed. A trailing partial frame (when the buffer
    /// length is not a multiple of the channel count) is left untouched.
    fn process(&mut self, buffer: &mut [f32], sample_index: u64) {
        let channels = self.processors.len();
        if channels == 0 {
            return;
        }
        let frames = buffer.len() / channels;

        if self.scratch.len() < frames {
            self.scratch.resize(frames, 0.0);
        }

        for (ch, processor) in self.processors.iter_mut().enumerate() {
            let lane = &mut self.scratch[0..frames];
            for (i, frame) in buffer.chunks_exact(channels).enumerate() {
                lane[i] = frame[ch];
            }

            processor.process(lane, sample_index);

            for (i, frame) in buffer.chunks_exact_mut(channels).enumerate() {
                frame[ch] = lane[i];
            }
        }
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        for p in &mut self.processors {
            p.set_sample_rate(sample_rate);
        }
    }

    fn reset(&mut self) {
        for p in &mut self.processors {
            p.reset();
        }
    }

    #[cfg(feature = "debug_visualize")]
    fn name(&self) -> &str {
        "ChannelBank"
    }

    #[cfg(feature = "debug_visualize")]
    fn visualize(&self, indent: usize) -> alloc::string::String {
        use alloc::format;
        let spaces = " ".repeat(indent);
        let mut output = format!("{}ChannelBank ({} channels)\n", spaces, self.processors.len());

        for (ch, p) in self.processors.iter().enumerate() {
            output.push_str(&format!("{}  Channel {}:\n", spaces, ch));
            output.push_str(&p.visualize(indent + 4));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::time::feedback_delay::FeedbackDelay;
    use alloc::vec;

    #[test]
    fn test_channels_keep_separate_history() {
        let mut bank = ChannelBank::try_new(2, |_| FeedbackDelay::<64>::new(1, 1.0, 0.0)).unwrap();

        let mut left = vec![1.0, 0.0, 0.0, 0.0];
        let mut right = vec![0.0, 0.0, 2.0, 0.0];
        let mut channels = [&mut left[..], &mut right[..]];
        bank.process_channels(&mut channels, 0).unwrap();

        assert_eq!(left, vec![0.0, 1.0, 0.0, 0.0]);
        assert_eq!(right, vec![0.0, 0.0, 0.0, 2.0]);
    }

    #[test]
    fn test_channel_count_mismatch() {
        let mut bank = ChannelBank::try_new(2, |_| FeedbackDelay::<64>::new(1, 1.0, 0.0)).unwrap();
        let mut mono = vec![vec![0.0f32; 8]];
        assert_eq!(
            bank.process_channels(&mut mono, 0),
            Err(ConfigError::ChannelCountMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_interleaved_matches_planar() {
        let make = |ch: usize| FeedbackDelay::<64>::new(2 + ch, 0.5, 0.4);
        let mut planar_bank = ChannelBank::try_new(3, make).unwrap();
        let mut interleaved_bank = ChannelBank::try_new(3, make).unwrap();

        let mut planar: Vec<Vec<f32>> = (0..3)
            .map(|ch| (0..16).map(|i| ((i * 7 + ch * 3) % 5) as f32 * 0.1).collect())
            .collect();
        let mut interleaved: Vec<f32> = (0..16)
            .flat_map(|i| planar.iter().map(move |c| c[i]).collect::<Vec<_>>())
            .collect();

        planar_bank.process_channels(&mut planar, 0).unwrap();
        interleaved_bank.process(&mut interleaved, 0);

        for i in 0..16 {
            for ch in 0..3 {
                assert_eq!(interleaved[i * 3 + ch], planar[ch][i]);
            }
        }
    }

    #[test]
    fn test_partial_frame_left_untouched() {
        let mut bank = ChannelBank::try_new(2, |_| FeedbackDelay::<64>::new(1, 1.0, 0.0)).unwrap();
        let mut buffer = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        bank.process(&mut buffer, 0);
        assert_eq!(buffer, vec![0.0, 0.0, 1.0, 2.0, 5.0]);
    }

    #[test]
    fn test_try_new_propagates_error() {
        let bank = ChannelBank::try_new(2, |_| FeedbackDelay::<64>::new(64, 1.0, 0.0));
        assert!(matches!(bank, Err(ConfigError::DelayTooLong { .. })));
    }
}
