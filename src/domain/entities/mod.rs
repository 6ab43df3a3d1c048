//! Core business entities.

pub mod click;
pub mod link;

pub use click::{Click, NewClick, EARNINGS_PER_VALID_CLICK};
pub use link::{Link, NewLink};
