mod fixture;
mod team;
mod venue;

pub use fixture::*;
pub use team::*;
pub use venue::*;
