mod contracts;
mod environment;

pub use contracts::*;
pub use environment::*;
