pub mod generation;
pub mod log;
pub mod media;
