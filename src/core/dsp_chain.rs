use super::frame_processor::FrameProcessor;
#[cfg(feature = "debug_visualize")]
use alloc::format;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// A chain of DSP processors.
///
/// Processes audio sequentially through a list of processors, e.g. a feedback delay
/// feeding a chorus.
pub struct DspChain {
    processors: Vec<Box<dyn FrameProcessor + Send>>,
    sample_rate: f32,
}

impl DspChain {
    /// Creates a new DspChain starting with the given processor.
    pub fn new(mut first: impl FrameProcessor + Send + 'static, sample_rate: f32) -> Self {
        first.set_sample_rate(sample_rate);
        DspChain {
            processors: vec![Box::new(first)],
            sample_rate,
        }
    }

    /// Appends a processor to the chain.
    pub fn and(mut self, mut processor: impl FrameProcessor + Send + 'static) -> Self {
        processor.set_sample_rate(self.sample_rate);
        self.processors.push(Box::new(processor));
        self
    }

    /// Number of processors in the chain.
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Returns a graph visualization of the entire chain.
    pub fn get_graph(&self) -> String {
        self.visualize(0)
    }
}

impl FrameProcessor for DspChain {
    fn process(&mut self, buffer: &mut [f32], sample_index: u64) {
        for p in &mut self.processors {
            p.process(buffer, sample_index);
        }
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
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
        "DspChain"
    }

    #[cfg(feature = "debug_visualize")]
    fn visualize(&self, indent: usize) -> String {
        let spaces = " ".repeat(indent);
        let mut output = format!("{}DspChain ({} stages, in order)\n", spaces, self.processors.len());

        for (stage, p) in self.processors.iter().enumerate() {
            output.push_str(&format!("{}  stage {}:\n", spaces, stage + 1));
            output.push_str(&p.visualize(indent + 4));
        }

        output
    }
}
