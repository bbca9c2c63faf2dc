//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Chrome (`Component`)
//!
//! Fixed rows drawn straight into the frame:
//! - `NavBar`: site name and nav links, top row
//! - `StatusBar`: fragment, status message and hints, bottom row
//! - `Notice`: modal overlay for confirmations
//!
//! ### Page Sections (`Section`)
//!
//! Blocks stacked inside the scrollable page view. Each builds a paragraph
//! and reports its height so the page view can lay them out:
//! - `PageHeader`: title and markdown body, always first
//! - `CarouselView`, `PublicationList`, `InitiativePanel`, `ContactFormView`:
//!   one per page feature
//!
//! ## Props-Based Data Flow
//!
//! Components receive core state as borrowed props and never mutate it.
//! Every change goes through `core::action::update`.
//!
//! ```rust,ignore
//! let view = CarouselView { slides, carousel: &carousel, focused };
//! let height = view.height(width);
//! ```

mod carousel_view;
mod contact_form;
mod initiative_panel;
mod nav_bar;
mod notice;
mod page_view;
mod publication_list;
mod status_bar;

pub use carousel_view::CarouselView;
pub use contact_form::ContactFormView;
pub use initiative_panel::InitiativePanel;
pub use nav_bar::{NavBar, NavHitbox};
pub use notice::Notice;
pub use page_view::PageHeader;
pub use publication_list::PublicationList;
pub use status_bar::StatusBar;
