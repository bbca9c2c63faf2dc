//! # Location & History
//!
//! The fragment part of the address plus a back/forward stack, the way a
//! browser tab keeps them. The fragment is stored without the leading `#`.
//!
//! ```text
//! entries: ["home", "about", "contact"]
//!                            ▲ cursor
//! back()    → "about"
//! set("x")  → ["home", "about", "x"]   (forward entries dropped)
//! ```

use log::debug;

#[derive(Debug, Clone)]
pub struct Location {
    entries: Vec<String>,
    cursor: usize,
}

impl Location {
    /// `initial` may be empty (no fragment) and may carry a leading `#`.
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![strip_hash(initial).to_string()],
            cursor: 0,
        }
    }

    pub fn fragment(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Sets the fragment, pushing a history entry when it changes.
    pub fn set_fragment(&mut self, fragment: &str) {
        let fragment = strip_hash(fragment);
        if self.fragment() == fragment {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(fragment.to_string());
        self.cursor += 1;
        debug!("Location pushed #{} ({} entries)", fragment, self.entries.len());
    }

    /// Rewrites the current entry in place. Forward entries are kept.
    pub fn replace_fragment(&mut self, fragment: &str) {
        self.entries[self.cursor] = strip_hash(fragment).to_string();
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Returns the new fragment, or `None` at the start of history.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.fragment())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.fragment())
    }
}

pub fn strip_hash(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}
