//! LFO-modulated fractional delays.

pub mod engine;
pub mod kind;
pub mod params;

pub use engine::{ModulationEngine, MODULATION_CAPACITY};
pub use kind::{ModulationKind, TypicalRanges};
pub use params::ModulationParams;
