//! # Core Site Logic
//!
//! This module contains frontdesk's UI logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Site (all state)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • TimerQueue (clock)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Site` struct, the single composition root
//! - [`action`]: The `Action` enum and `update()`
//! - [`router`]: Fragment-keyed page switching and nav bookkeeping
//! - [`carousel`]: Slide cycling with auto-advance, gestures and keys
//! - [`timer`]: Virtual-clock timer queue shared by all controllers
//! - [`form`], [`publications`], [`initiatives`], [`viewport`]: page widgets
//! - [`site`]: The static content model
//! - [`config`]: Settings resolution

pub mod action;
pub mod carousel;
pub mod config;
pub mod form;
pub mod initiatives;
pub mod location;
pub mod publications;
pub mod router;
pub mod site;
pub mod state;
pub mod timer;
pub mod viewport;
