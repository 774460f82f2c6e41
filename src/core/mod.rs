pub mod channels;
pub mod dsp_chain;
pub mod error;
pub mod frame_processor;
pub mod ring_buffer;
