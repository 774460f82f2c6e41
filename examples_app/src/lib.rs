pub mod prompt;
pub mod wav_io;
