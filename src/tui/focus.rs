//! # Keyboard Focus
//!
//! Tab/Shift-Tab walk the interactive elements of the current page the way a
//! browser's tab order does. The ring is rebuilt from `Site` on every key
//! press, so elements that disappear (page switch, detail view closing)
//! silently drop out of the order.
//!
//! ```text
//! nav links → body links → carousel (prev, dots, next)
//!           → publication tabs | initiative list | form fields + submit
//! ```

use crate::core::action::Action;
use crate::core::form::FieldId;
use crate::core::site::PageFeature;
use crate::core::state::Site;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focusable {
    NavLink(usize),
    /// Nth fragment link in the current page body.
    PageLink(usize),
    CarouselPrev,
    Indicator(usize),
    CarouselNext,
    PublicationTab(usize),
    Initiative(String),
    CloseInitiative,
    Field(FieldId),
    Submit,
}

impl Focusable {
    /// The action Enter triggers on this element. Text fields have none.
    pub fn activate(&self, site: &Site) -> Option<Action> {
        match self {
            Focusable::NavLink(index) => Some(Action::ActivateNavLink(*index)),
            Focusable::PageLink(index) => {
                let page = site.current_page_id().and_then(|id| site.content.page(id))?;
                let link = page.links().into_iter().nth(*index)?;
                Some(Action::FollowLink(link.href))
            }
            Focusable::CarouselPrev => Some(Action::PrevSlide),
            Focusable::Indicator(index) => Some(Action::JumpToSlide(*index)),
            Focusable::CarouselNext => Some(Action::NextSlide),
            Focusable::PublicationTab(index) => Some(Action::SelectPublicationTab(*index)),
            Focusable::Initiative(key) => Some(Action::OpenInitiative(key.clone())),
            Focusable::CloseInitiative => Some(Action::CloseInitiative),
            Focusable::Field(_) => None,
            Focusable::Submit => Some(Action::FormSubmit),
        }
    }

    pub fn text_field(&self) -> Option<FieldId> {
        match self {
            Focusable::Field(id) => Some(*id),
            _ => None,
        }
    }
}

/// Tab order for the page currently shown.
pub fn collect(site: &Site) -> Vec<Focusable> {
    let mut items: Vec<Focusable> = (0..site.router.nav_links().len())
        .map(Focusable::NavLink)
        .collect();

    let Some(page) = site.current_page_id().and_then(|id| site.content.page(id)) else {
        return items;
    };

    items.extend((0..page.links().len()).map(Focusable::PageLink));

    for feature in &page.features {
        match feature {
            PageFeature::Carousel => {
                if let Some(carousel) = &site.carousel {
                    items.push(Focusable::CarouselPrev);
                    items.extend((0..carousel.indicators().len()).map(Focusable::Indicator));
                    items.push(Focusable::CarouselNext);
                }
            }
            PageFeature::Publications => {
                items.extend((0..site.publications.tabs().len()).map(Focusable::PublicationTab));
            }
            PageFeature::Initiatives => {
                if site.initiatives.detail_visible() {
                    items.push(Focusable::CloseInitiative);
                } else {
                    items.extend(
                        site.initiatives
                            .catalog()
                            .keys()
                            .into_iter()
                            .map(|key| Focusable::Initiative(key.to_string())),
                    );
                }
            }
            PageFeature::ContactForm => {
                items.extend(FieldId::ALL.iter().map(|&id| Focusable::Field(id)));
                items.push(Focusable::Submit);
            }
        }
    }
    items
}

/// The focused element, tracked by value so it survives re-collection.
#[derive(Debug, Default)]
pub struct FocusRing {
    current: Option<Focusable>,
}

impl FocusRing {
    pub fn current(&self) -> Option<&Focusable> {
        self.current.as_ref()
    }

    pub fn next(&mut self, items: &[Focusable]) {
        self.step(items, true);
    }

    pub fn prev(&mut self, items: &[Focusable]) {
        self.step(items, false);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Drops focus when its element is no longer on the page.
    pub fn retain(&mut self, items: &[Focusable]) {
        if let Some(current) = &self.current
            && !items.contains(current)
        {
            self.current = None;
        }
    }

    fn step(&mut self, items: &[Focusable], forward: bool) {
        if items.is_empty() {
            self.current = None;
            return;
        }
        let position = self
            .current
            .as_ref()
            .and_then(|c| items.iter().position(|i| i == c));
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => items.len() - 1,
            (Some(p), true) => (p + 1) % items.len(),
            (Some(p), false) => (p + items.len() - 1) % items.len(),
        };
        self.current = Some(items[next].clone());
    }
}
