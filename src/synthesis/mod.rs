pub mod lfo;
