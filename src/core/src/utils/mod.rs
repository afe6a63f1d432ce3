mod date;
mod uri;

pub use date::*;
pub use uri::*;
