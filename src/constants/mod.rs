//! Application constants.

pub mod messages;

pub use messages::*;
