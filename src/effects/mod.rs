pub mod modulation;
pub mod time;
pub mod utility;
