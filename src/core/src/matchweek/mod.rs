mod grouper;
mod summary;

pub use grouper::*;
pub use summary::*;
