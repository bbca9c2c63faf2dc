//! # Initiative Detail View
//!
//! The initiatives page shows either a list of initiatives or the detail of
//! one of them. Records come from an injected [`InitiativeCatalog`] so the
//! view logic can be exercised without the real content table.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Deserialize;

use crate::core::viewport::{ScrollBehavior, Viewport};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InitiativeRecord {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub launch: String,
    #[serde(default)]
    pub coverage: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub contact: String,
    /// Markdown.
    #[serde(default)]
    pub body: String,
}

/// Keyed source of initiative records.
pub trait InitiativeCatalog {
    fn get(&self, key: &str) -> Option<&InitiativeRecord>;

    /// Keys in display order.
    fn keys(&self) -> Vec<&str>;
}

impl InitiativeCatalog for BTreeMap<String, InitiativeRecord> {
    fn get(&self, key: &str) -> Option<&InitiativeRecord> {
        BTreeMap::get(self, key)
    }

    fn keys(&self) -> Vec<&str> {
        BTreeMap::keys(self).map(String::as_str).collect()
    }
}

/// Display slots filled from a record when the detail view opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailSlots {
    pub title: String,
    pub subtitle: String,
    pub launch: String,
    pub coverage: String,
    pub budget: String,
    pub contact: String,
    pub body: String,
}

impl From<&InitiativeRecord> for DetailSlots {
    fn from(record: &InitiativeRecord) -> Self {
        Self {
            title: record.title.clone(),
            subtitle: record.subtitle.clone(),
            launch: record.launch.clone(),
            coverage: record.coverage.clone(),
            budget: record.budget.clone(),
            contact: record.contact.clone(),
            body: record.body.clone(),
        }
    }
}

pub struct InitiativeView {
    catalog: Box<dyn InitiativeCatalog>,
    slots: DetailSlots,
    open_key: Option<String>,
}

impl InitiativeView {
    pub fn new(catalog: Box<dyn InitiativeCatalog>) -> Self {
        Self {
            catalog,
            slots: DetailSlots::default(),
            open_key: None,
        }
    }

    pub fn catalog(&self) -> &dyn InitiativeCatalog {
        self.catalog.as_ref()
    }

    pub fn list_visible(&self) -> bool {
        self.open_key.is_none()
    }

    pub fn detail_visible(&self) -> bool {
        self.open_key.is_some()
    }

    pub fn open_key(&self) -> Option<&str> {
        self.open_key.as_deref()
    }

    /// Slots keep their last projection after the view closes.
    pub fn slots(&self) -> &DetailSlots {
        &self.slots
    }

    /// Opens the detail view. Unknown keys leave everything untouched.
    pub fn show(&mut self, key: &str, viewport: &mut Viewport) -> bool {
        let Some(record) = self.catalog.get(key) else {
            warn!("No initiative record for key '{}'", key);
            return false;
        };
        self.slots = DetailSlots::from(record);
        self.open_key = Some(key.to_string());
        viewport.scroll_to(0, ScrollBehavior::Instant);
        debug!("Showing initiative detail '{}'", key);
        true
    }

    pub fn hide(&mut self, viewport: &mut Viewport) {
        self.open_key = None;
        viewport.scroll_to(0, ScrollBehavior::Instant);
    }

    /// Closes the detail view without touching the viewport.
    pub fn reset(&mut self) {
        self.open_key = None;
    }
}
