mod action;
mod card;
mod state;

pub use action::*;
pub use card::*;
pub use state::*;
