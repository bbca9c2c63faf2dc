//! # Actions
//!
//! Everything that can happen on the site becomes an `Action`.
//! User follows a link? That's `Action::FollowLink(href)`.
//! Carousel timer elapses? That's `Action::TimerFired(id)`.
//!
//! The `update()` function applies an action to the `Site` and returns an
//! `Effect` for the adapter to carry out. No terminal I/O happens here.
//!
//! ```text
//! Site + Action  →  update()  →  Site' + Effect
//! ```

use log::debug;

use crate::core::carousel::ArrowKey;
use crate::core::form::{FieldId, SubmitOutcome};
use crate::core::router::{LinkOutcome, Navigation};
use crate::core::state::Site;
use crate::core::timer::TimerId;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Routing
    FollowLink(String),
    ActivateNavLink(usize),
    ShowPage(String),
    HashChanged(String),
    HistoryBack,
    HistoryForward,

    // Carousel
    NextSlide,
    PrevSlide,
    JumpToSlide(usize),
    PointerEntered,
    PointerLeft,
    TouchStarted(i32),
    TouchEnded(i32),
    KeyPressed(ArrowKey),
    VisibilityChanged { hidden: bool },

    TimerFired(TimerId),

    // Contact form
    FormInput { field: FieldId, value: String },
    FormSubmit,

    SelectPublicationTab(usize),

    OpenInitiative(String),
    CloseInitiative,

    ScrollBy(i32),
    BackToTop,

    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show a modal notice (the browser's `alert`).
    Notify(String),
    Quit,
}

pub fn update(site: &mut Site, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::FollowLink(href) => {
            match site
                .router
                .follow_link(&href, &mut site.timers, &mut site.viewport)
            {
                LinkOutcome::Navigated(navigation) => {
                    if let Some(shown) = navigation.shown().map(str::to_string) {
                        site.router.sync_nav(&shown);
                    }
                    after_navigation(site, &navigation);
                }
                LinkOutcome::Scrolled { anchor, .. } => {
                    site.status_message = format!("#{anchor}");
                }
                LinkOutcome::Ignored => {}
            }
            Effect::None
        }
        Action::ActivateNavLink(index) => {
            let Some(href) = site.router.nav_links().get(index).map(|l| l.href.clone()) else {
                return Effect::None;
            };
            if let LinkOutcome::Navigated(navigation) =
                site.router
                    .follow_link(&href, &mut site.timers, &mut site.viewport)
            {
                site.router.update_active_nav(index);
                after_navigation(site, &navigation);
            }
            Effect::None
        }
        Action::ShowPage(id) => {
            let navigation = site
                .router
                .show_page(&id, &mut site.timers, &mut site.viewport);
            after_navigation(site, &navigation);
            Effect::None
        }
        Action::HashChanged(fragment) => {
            let navigation =
                site.router
                    .set_fragment(&fragment, &mut site.timers, &mut site.viewport);
            after_navigation(site, &navigation);
            Effect::None
        }
        Action::HistoryBack => {
            match site.router.go_back(&mut site.timers, &mut site.viewport) {
                Some(navigation) => after_navigation(site, &navigation),
                None => site.status_message = "No earlier page".to_string(),
            }
            Effect::None
        }
        Action::HistoryForward => {
            match site.router.go_forward(&mut site.timers, &mut site.viewport) {
                Some(navigation) => after_navigation(site, &navigation),
                None => site.status_message = "No later page".to_string(),
            }
            Effect::None
        }

        Action::NextSlide => {
            with_carousel(site, |carousel, timers| carousel.next_slide(timers));
            Effect::None
        }
        Action::PrevSlide => {
            with_carousel(site, |carousel, timers| carousel.prev_slide(timers));
            Effect::None
        }
        Action::JumpToSlide(index) => {
            with_carousel(site, |carousel, timers| carousel.jump(index, timers));
            Effect::None
        }
        Action::PointerEntered => {
            with_carousel(site, |carousel, timers| carousel.pointer_enter(timers));
            Effect::None
        }
        Action::PointerLeft => {
            with_carousel(site, |carousel, timers| carousel.pointer_leave(timers));
            Effect::None
        }
        Action::TouchStarted(x) => {
            with_carousel(site, |carousel, timers| carousel.touch_start(x, timers));
            Effect::None
        }
        Action::TouchEnded(x) => {
            with_carousel(site, |carousel, timers| {
                carousel.touch_end(x, timers);
            });
            Effect::None
        }
        Action::KeyPressed(key) => {
            let host_visible = site.carousel_visible();
            with_carousel(site, |carousel, timers| {
                carousel.key(key, host_visible, timers);
            });
            Effect::None
        }
        Action::VisibilityChanged { hidden } => {
            with_carousel(site, |carousel, timers| carousel.set_hidden(hidden, timers));
            Effect::None
        }

        Action::TimerFired(id) => {
            if site.router.on_timer(id) {
                return Effect::None;
            }
            let handled = site
                .carousel
                .as_mut()
                .is_some_and(|carousel| carousel.on_timer(id, &mut site.timers));
            if !handled {
                debug!("Timer {:?} has no owner", id);
            }
            Effect::None
        }

        Action::FormInput { field, value } => {
            site.form.input(field, value);
            Effect::None
        }
        Action::FormSubmit => match site.form.submit() {
            SubmitOutcome::Accepted(message) => {
                site.status_message = "Message sent".to_string();
                Effect::Notify(message)
            }
            SubmitOutcome::Rejected(fields) => {
                site.status_message = format!(
                    "Please check: {}",
                    fields
                        .iter()
                        .map(|f| f.label())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                Effect::None
            }
        },

        Action::SelectPublicationTab(index) => {
            if let Some(visible) = site.publications.select_tab(index) {
                site.status_message = format!("{visible} publications");
            }
            Effect::None
        }

        Action::OpenInitiative(key) => {
            site.initiatives.show(&key, &mut site.viewport);
            Effect::None
        }
        Action::CloseInitiative => {
            site.initiatives.hide(&mut site.viewport);
            Effect::None
        }

        Action::ScrollBy(delta) => {
            site.viewport.scroll_by(delta);
            Effect::None
        }
        Action::BackToTop => {
            site.viewport.back_to_top();
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

fn with_carousel(
    site: &mut Site,
    f: impl FnOnce(&mut crate::core::carousel::Carousel, &mut crate::core::timer::TimerQueue),
) {
    match site.carousel.as_mut() {
        Some(carousel) => f(carousel, &mut site.timers),
        None => debug!("No carousel on this site"),
    }
}

fn after_navigation(site: &mut Site, navigation: &Navigation) {
    site.initiatives.reset();
    site.status_message = match navigation {
        Navigation::Shown(_) | Navigation::Unavailable => String::new(),
        Navigation::FellBack { requested, .. } => format!("Page '#{requested}' not found"),
    };
}

/// Moves the site clock to `now_ms` and dispatches every due timer, one at
/// a time. Returns how many timers fired.
pub fn advance_clock(site: &mut Site, now_ms: u64) -> usize {
    site.timers.advance_to(now_ms);
    let mut fired = 0;
    while let Some(id) = site.timers.pop_due() {
        update(site, Action::TimerFired(id));
        fired += 1;
    }
    fired
}
