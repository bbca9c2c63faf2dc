//! Frontdesk library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::action::{Action, Effect, advance_clock, update};
pub use crate::core::state::Site;
