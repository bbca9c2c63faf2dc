//! # View Router
//!
//! Shows exactly one page at a time, keyed by the location fragment, and
//! keeps the navigation links and the location in step with it.
//!
//! ```text
//!  link click ──┐
//!  history  ────┼──► show_page(id) ──► hide all pages
//!  program  ────┘                      show target (or default)
//!                                      schedule activation tick (10ms)
//!                                      scroll to top, set fragment
//!  tick ──────────────► on_timer(id) ──► target.active = true
//! ```
//!
//! Activation happens one tick after visibility so a transition effect sees
//! the page appear before it is styled active. A newer `show_page` cancels
//! a tick that is still pending, so a page that has been hidden again can
//! never turn active.

use log::{debug, info, warn};

use crate::core::location::{Location, strip_hash};
use crate::core::site::{AnchorSpec, NavLinkSpec, PageSpec};
use crate::core::timer::{TimerId, TimerQueue};
use crate::core::viewport::{ScrollBehavior, Viewport};

/// Delay between a page becoming visible and becoming active.
pub const ACTIVATION_DELAY_MS: u64 = 10;

/// Rows left above an in-page anchor after scrolling to it.
pub const ANCHOR_SCROLL_MARGIN: u16 = 2;

#[derive(Debug, Clone)]
pub struct Page {
    pub id: String,
    pub visible: bool,
    pub active: bool,
    anchors: Vec<AnchorSpec>,
}

impl Page {
    pub fn anchor_offset(&self, anchor_id: &str) -> Option<u16> {
        self.anchors
            .iter()
            .find(|a| a.id == anchor_id)
            .map(|a| a.offset)
    }
}

#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    /// Index into the router's groups.
    pub group: Option<usize>,
    pub active: bool,
}

impl NavLink {
    pub fn fragment(&self) -> &str {
        strip_hash(&self.href)
    }
}

/// A dropdown trigger that owns one or more nav links.
#[derive(Debug, Clone)]
pub struct NavGroup {
    pub name: String,
    pub active: bool,
}

/// Result of a `show_page` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Shown(String),
    FellBack { requested: String, shown: String },
    /// No page is registered at all.
    Unavailable,
}

impl Navigation {
    pub fn shown(&self) -> Option<&str> {
        match self {
            Navigation::Shown(id) => Some(id),
            Navigation::FellBack { shown, .. } => Some(shown),
            Navigation::Unavailable => None,
        }
    }
}

/// Result of following an in-document link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Not a fragment link, a bare `#`, or an anchor on another page.
    Ignored,
    Navigated(Navigation),
    Scrolled { anchor: String, offset: u16 },
}

#[derive(Debug, Clone, Copy)]
enum HistoryEntry {
    Push,
    Replace,
}

#[derive(Debug)]
pub struct Router {
    pages: Vec<Page>,
    nav: Vec<NavLink>,
    groups: Vec<NavGroup>,
    default_page: String,
    location: Location,
    /// Activation tick still waiting to fire, and the page it activates.
    pending: Option<(TimerId, usize)>,
}

impl Router {
    /// Builds the page set with the markup's initial state: the page marked
    /// active, else the default page, else the first page is visible and
    /// active, all others hidden. No timers are scheduled and the location
    /// is not touched.
    pub fn new(
        pages: &[PageSpec],
        nav: &[NavLinkSpec],
        default_page: &str,
        initial_fragment: &str,
    ) -> Self {
        let initial = pages
            .iter()
            .position(|p| p.active)
            .or_else(|| pages.iter().position(|p| p.id == default_page))
            .or(if pages.is_empty() { None } else { Some(0) });

        let pages: Vec<Page> = pages
            .iter()
            .enumerate()
            .map(|(i, spec)| Page {
                id: spec.id.clone(),
                visible: Some(i) == initial,
                active: Some(i) == initial,
                anchors: spec.anchors.clone(),
            })
            .collect();

        let mut groups: Vec<NavGroup> = Vec::new();
        let nav = nav
            .iter()
            .map(|spec| {
                let group = spec.group.as_ref().map(|name| {
                    groups.iter().position(|g| &g.name == name).unwrap_or_else(|| {
                        groups.push(NavGroup {
                            name: name.clone(),
                            active: false,
                        });
                        groups.len() - 1
                    })
                });
                NavLink {
                    label: spec.label.clone(),
                    href: spec.href.clone(),
                    group,
                    active: false,
                }
            })
            .collect();

        let mut router = Self {
            pages,
            nav,
            groups,
            default_page: default_page.to_string(),
            location: Location::new(initial_fragment),
            pending: None,
        };
        if let Some(id) = router.visible_page().map(|p| p.id.clone()) {
            router.sync_nav(&id);
        }
        router
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav
    }

    pub fn nav_groups(&self) -> &[NavGroup] {
        &self.groups
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn default_page(&self) -> &str {
        &self.default_page
    }

    pub fn has_page(&self, id: &str) -> bool {
        self.pages.iter().any(|p| p.id == id)
    }

    pub fn visible_page(&self) -> Option<&Page> {
        self.pages.iter().find(|p| p.visible)
    }

    pub fn active_page(&self) -> Option<&Page> {
        self.pages.iter().find(|p| p.active)
    }

    pub fn activation_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Target page index for a key, with the non-recursive fallback chain:
    /// requested → default → first registered page.
    fn resolve(&self, requested: &str) -> Option<(usize, bool)> {
        if let Some(index) = self.pages.iter().position(|p| p.id == requested) {
            return Some((index, false));
        }
        if let Some(index) = self.pages.iter().position(|p| p.id == self.default_page) {
            return Some((index, true));
        }
        if self.pages.is_empty() {
            None
        } else {
            Some((0, true))
        }
    }

    pub fn show_page(
        &mut self,
        page_id: &str,
        timers: &mut TimerQueue,
        viewport: &mut Viewport,
    ) -> Navigation {
        self.navigate(page_id, HistoryEntry::Push, timers, viewport)
    }

    fn navigate(
        &mut self,
        page_id: &str,
        entry: HistoryEntry,
        timers: &mut TimerQueue,
        viewport: &mut Viewport,
    ) -> Navigation {
        let requested = strip_hash(page_id);

        if let Some((timer, _)) = self.pending.take() {
            timers.cancel(timer);
        }
        for page in &mut self.pages {
            page.visible = false;
            page.active = false;
        }

        let Some((index, fell_back)) = self.resolve(requested) else {
            warn!("No pages registered, cannot show '{}'", requested);
            return Navigation::Unavailable;
        };

        let page = &mut self.pages[index];
        page.visible = true;
        let shown = page.id.clone();

        let timer = timers.start_one_shot(ACTIVATION_DELAY_MS);
        self.pending = Some((timer, index));

        viewport.scroll_to(0, ScrollBehavior::Instant);
        match entry {
            HistoryEntry::Push => self.location.set_fragment(&shown),
            HistoryEntry::Replace => self.location.replace_fragment(&shown),
        }

        if fell_back {
            warn!("Page '{}' not found, showing '{}'", requested, shown);
            Navigation::FellBack {
                requested: requested.to_string(),
                shown,
            }
        } else {
            info!("Showing page '{}'", shown);
            Navigation::Shown(shown)
        }
    }

    /// Handles a fired timer. Returns `false` if the timer is not ours.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        match self.pending {
            Some((timer, index)) if timer == id => {
                self.pending = None;
                let page = &mut self.pages[index];
                if page.visible {
                    page.active = true;
                    debug!("Page '{}' activated", page.id);
                }
                true
            }
            _ => false,
        }
    }

    /// Follows an in-document link.
    ///
    /// Registered pages navigate. Anchors inside the visible page scroll
    /// smoothly. Anchors elsewhere are ignored. Anything else navigates and
    /// lands on the default page.
    pub fn follow_link(
        &mut self,
        href: &str,
        timers: &mut TimerQueue,
        viewport: &mut Viewport,
    ) -> LinkOutcome {
        let href = href.trim();
        let Some(target) = href.strip_prefix('#') else {
            return LinkOutcome::Ignored;
        };
        if target.is_empty() {
            return LinkOutcome::Ignored;
        }

        if self.has_page(target) {
            return LinkOutcome::Navigated(self.show_page(target, timers, viewport));
        }

        if let Some(offset) = self.visible_page().and_then(|p| p.anchor_offset(target)) {
            let offset = offset.saturating_sub(ANCHOR_SCROLL_MARGIN);
            viewport.scroll_to(offset, ScrollBehavior::Smooth);
            debug!("Scrolled to in-page anchor '{}' at {}", target, offset);
            return LinkOutcome::Scrolled {
                anchor: target.to_string(),
                offset,
            };
        }

        if self.pages.iter().any(|p| p.anchor_offset(target).is_some()) {
            debug!("Anchor '{}' belongs to a hidden page, ignoring", target);
            return LinkOutcome::Ignored;
        }

        LinkOutcome::Navigated(self.show_page(target, timers, viewport))
    }

    /// Marks one nav link active, plus the group it sits in.
    pub fn update_active_nav(&mut self, link: usize) -> bool {
        if link >= self.nav.len() {
            warn!("Nav link {} out of range", link);
            return false;
        }
        self.clear_nav();
        self.nav[link].active = true;
        if let Some(group) = self.nav[link].group {
            self.groups[group].active = true;
        }
        true
    }

    /// Marks the first nav link targeting `page_id` active, or none.
    pub fn sync_nav(&mut self, page_id: &str) {
        match self.nav.iter().position(|l| l.fragment() == page_id) {
            Some(link) => {
                self.update_active_nav(link);
            }
            None => self.clear_nav(),
        }
    }

    fn clear_nav(&mut self) {
        for link in &mut self.nav {
            link.active = false;
        }
        for group in &mut self.groups {
            group.active = false;
        }
    }

    /// Re-derives the page from the current fragment ("home" when empty).
    /// The current history entry is rewritten to the shown page, so forward
    /// entries survive a back step onto the empty start entry.
    pub fn handle_history_change(
        &mut self,
        timers: &mut TimerQueue,
        viewport: &mut Viewport,
    ) -> Navigation {
        let fragment = self.location.fragment();
        let target = if fragment.is_empty() {
            self.default_page.clone()
        } else {
            fragment.to_string()
        };
        let navigation = self.navigate(&target, HistoryEntry::Replace, timers, viewport);
        if let Some(shown) = navigation.shown().map(str::to_string) {
            self.sync_nav(&shown);
        }
        navigation
    }

    /// An externally set fragment, e.g. typed into the address bar.
    pub fn set_fragment(
        &mut self,
        fragment: &str,
        timers: &mut TimerQueue,
        viewport: &mut Viewport,
    ) -> Navigation {
        self.location.set_fragment(fragment);
        self.handle_history_change(timers, viewport)
    }

    pub fn go_back(&mut self, timers: &mut TimerQueue, viewport: &mut Viewport) -> Option<Navigation> {
        self.location.back()?;
        Some(self.handle_history_change(timers, viewport))
    }

    pub fn go_forward(
        &mut self,
        timers: &mut TimerQueue,
        viewport: &mut Viewport,
    ) -> Option<Navigation> {
        self.location.forward()?;
        Some(self.handle_history_change(timers, viewport))
    }
}
