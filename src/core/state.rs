//! # Site State
//!
//! The composition root. `Site::new` builds every controller from the
//! content and settings in one fixed order, so nothing depends on the
//! order in which callbacks happen to be registered.
//!
//! ```text
//! Site
//! ├── content: SiteContent           // static document
//! ├── timers: TimerQueue             // single virtual clock for everything
//! ├── viewport: Viewport             // scroll offset + back-to-top
//! ├── router: Router                 // pages, nav links, location
//! ├── carousel: Option<Carousel>     // None when there are no slides
//! ├── form: ContactForm
//! ├── publications: PublicationFilter
//! ├── initiatives: InitiativeView    // list/detail over an injected catalog
//! └── status_message: String         // status bar text
//! ```
//!
//! State changes only happen through `update(site, action)` in action.rs.

use log::info;

use crate::core::carousel::Carousel;
use crate::core::config::SiteSettings;
use crate::core::form::ContactForm;
use crate::core::initiatives::{InitiativeCatalog, InitiativeView};
use crate::core::publications::PublicationFilter;
use crate::core::router::Router;
use crate::core::site::{PageFeature, SiteContent};
use crate::core::timer::TimerQueue;
use crate::core::viewport::Viewport;

pub struct Site {
    pub content: SiteContent,
    pub timers: TimerQueue,
    pub viewport: Viewport,
    pub router: Router,
    pub carousel: Option<Carousel>,
    pub form: ContactForm,
    pub publications: PublicationFilter,
    pub initiatives: InitiativeView,
    pub status_message: String,
    carousel_host: Option<String>,
}

impl Site {
    /// Wires the site using the content's own initiative table.
    pub fn new(content: SiteContent, settings: &SiteSettings) -> Self {
        let catalog = Box::new(content.initiatives.clone());
        Self::with_catalog(content, catalog, settings)
    }

    pub fn with_catalog(
        content: SiteContent,
        catalog: Box<dyn InitiativeCatalog>,
        settings: &SiteSettings,
    ) -> Self {
        let mut timers = TimerQueue::new();
        let mut viewport = Viewport::new(settings.back_to_top_threshold);

        let initial_fragment = settings.start_page.as_deref().unwrap_or("");
        let mut router = Router::new(
            &content.pages,
            &content.nav,
            &settings.default_page,
            initial_fragment,
        );
        if !router.location().fragment().is_empty() {
            router.handle_history_change(&mut timers, &mut viewport);
        }

        let mut carousel = Carousel::new(
            content.carousel.slides.len(),
            content.carousel.indicator_count(),
            settings.carousel,
        );
        if let Some(carousel) = carousel.as_mut() {
            carousel.start(&mut timers);
        }

        let carousel_host = content
            .feature_page(PageFeature::Carousel)
            .map(|p| p.id.clone());

        info!(
            "Site wired: {} pages, carousel {}, start page {:?}",
            content.pages.len(),
            if carousel.is_some() { "on" } else { "off" },
            settings.start_page
        );

        Self {
            form: ContactForm::new(settings.message_limit),
            publications: PublicationFilter::new(&content.publications),
            initiatives: InitiativeView::new(catalog),
            status_message: content.site.tagline.clone(),
            content,
            timers,
            viewport,
            router,
            carousel,
            carousel_host,
        }
    }

    /// Id of the page currently shown.
    pub fn current_page_id(&self) -> Option<&str> {
        self.router.visible_page().map(|p| p.id.as_str())
    }

    pub fn carousel_host(&self) -> Option<&str> {
        self.carousel_host.as_deref()
    }

    /// Whether the page hosting the carousel is on screen.
    pub fn carousel_visible(&self) -> bool {
        match (self.carousel_host(), self.current_page_id()) {
            (Some(host), Some(current)) => host == current,
            _ => false,
        }
    }

    pub fn page_has_feature(&self, feature: PageFeature) -> bool {
        self.current_page_id()
            .and_then(|id| self.content.page(id))
            .is_some_and(|p| p.has_feature(feature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_content, test_site};

    #[test]
    fn test_site_new_defaults() {
        let site = test_site();
        assert_eq!(site.current_page_id(), Some("home"));
        assert!(site.carousel.is_some());
        assert!(site.carousel_visible());
        assert_eq!(site.form.counter_text(), "0/1000 characters");
        assert!(site.initiatives.list_visible());
    }

    #[test]
    fn start_page_overrides_active_marker() {
        let settings = SiteSettings {
            start_page: Some("#initiatives".to_string()),
            ..SiteSettings::default()
        };
        let mut site = Site::new(sample_content(), &settings);
        crate::core::action::advance_clock(&mut site, 10);

        let visible: Vec<_> = site
            .router
            .pages()
            .iter()
            .filter(|p| p.visible)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(visible, vec!["initiatives"]);
        assert_eq!(site.router.active_page().map(|p| p.id.as_str()), Some("initiatives"));
        assert!(!site.carousel_visible());
    }

    #[test]
    fn empty_slide_set_disables_carousel() {
        let mut content = sample_content();
        content.carousel.slides.clear();
        let site = Site::new(content, &SiteSettings::default());
        assert!(site.carousel.is_none());
        assert_eq!(site.timers.active_count(), 0);
    }
}
