mod outcome;
mod points;
mod prediction;

pub use outcome::*;
pub use points::*;
pub use prediction::*;
