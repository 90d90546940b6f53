//! IGDB enumerated types

mod esrb;

pub use esrb::*;
