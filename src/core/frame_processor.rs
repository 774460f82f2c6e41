use alloc::boxed::Box;
#[cfg(feature = "debug_visualize")]
use alloc::format;
use alloc::string::String;

/// The block interface shared by every processor in the crate.
///
/// A processor handles one channel of audio. Multi-channel signals are served by
/// one processor per channel (see [`ChannelBank`](crate::core::channels::ChannelBank)).
pub trait FrameProcessor {
    /// Processes a block of audio samples in place.
    ///
    /// # Arguments
    /// * `buffer` - The audio buffer to process (in-place).
    /// * `sample_index` - The global sample index of the start of the block.
    fn process(&mut self, buffer: &mut [f32], sample_index: u64);

    /// Sets the sample rate.
    ///
    /// Should be called before processing starts or when sample rate changes.
    fn set_sample_rate(&mut self, _sample_rate: f32) {}

    /// Clears all history and oscillator state.
    fn reset(&mut self) {}

    /// Returns the name of the processor.
    fn name(&self) -> &str {
        #[cfg(feature = "debug_visualize")]
        {
            "Node"
        }
        #[cfg(not(feature = "debug_visualize"))]
        {
            ""
        }
    }

    /// Returns an ASCII visualization of the processor structure.
    fn visualize(&self, indent: usize) -> String {
        #[cfg(feature = "debug_visualize")]
        {
            let spaces = " ".repeat(indent);
            format!("{}{}\n", spaces, self.name())
        }
        #[cfg(not(feature = "debug_visualize"))]
        {
            let _ = indent;
            String::new()
        }
    }
}

impl<T: FrameProcessor + ?Sized> FrameProcessor for Box<T> {
    fn process(&mut self, buffer: &mut [f32], sample_index: u64) {
        (**self).process(buffer, sample_index);
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        (**self).set_sample_rate(sample_rate);
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn visualize(&self, indent: usize) -> String {
        (**self).visualize(indent)
    }
}
