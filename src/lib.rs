#![no_std]

extern crate alloc;

pub mod core;
pub mod effects;
pub mod synthesis;

pub use crate::core::error::ConfigError;
pub use crate::core::frame_processor::FrameProcessor;
pub use crate::core::ring_buffer::RingBuffer;
pub use crate::effects::modulation::{ModulationEngine, ModulationKind, ModulationParams};
pub use crate::effects::time::feedback_delay::{DelayLength, FeedbackDelay, FeedbackDelayLine};
