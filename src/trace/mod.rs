mod decoder;
mod reader;
mod runner;

pub use decoder::*;
pub use reader::*;
pub use runner::*;
