//! Domain models for the AgriConnect platform

mod crop;
mod recommendation;
mod weather;

pub use crop::*;
pub use recommendation::*;
pub use weather::*;
