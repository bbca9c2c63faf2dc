use frontdesk::core::carousel::{ArrowKey, CarouselConfig, DEFAULT_INTERVAL_MS, KeyboardScope};
use frontdesk::core::config::SiteSettings;
use frontdesk::core::form::FieldId;
use frontdesk::core::site::SiteContent;
use frontdesk::{Action, Effect, Site, advance_clock, update};

// ============================================================================
// Helper Functions
// ============================================================================

/// Creates a site from the bundled content with default settings
fn bundled_site() -> Site {
    let content = SiteContent::bundled().expect("bundled site parses");
    Site::new(content, &SiteSettings::default())
}

fn visible_pages(site: &Site) -> Vec<&str> {
    site.router
        .pages()
        .iter()
        .filter(|p| p.visible)
        .map(|p| p.id.as_str())
        .collect()
}

fn active_pages(site: &Site) -> Vec<&str> {
    site.router
        .pages()
        .iter()
        .filter(|p| p.active)
        .map(|p| p.id.as_str())
        .collect()
}

fn active_nav(site: &Site) -> Vec<&str> {
    site.router
        .nav_links()
        .iter()
        .filter(|l| l.active)
        .map(|l| l.label.as_str())
        .collect()
}

fn current_slide(site: &Site) -> usize {
    site.carousel.as_ref().expect("carousel").current()
}

// ============================================================================
// Routing
// ============================================================================

#[test]
fn hash_change_shows_exactly_one_page_after_tick() {
    let mut site = bundled_site();

    update(&mut site, Action::HashChanged("#initiatives".to_string()));
    assert_eq!(visible_pages(&site), vec!["initiatives"]);
    assert!(site.router.activation_pending());

    advance_clock(&mut site, 10);

    assert_eq!(visible_pages(&site), vec!["initiatives"]);
    assert_eq!(active_pages(&site), vec!["initiatives"]);
    assert_eq!(active_nav(&site), vec!["Initiatives"]);
    assert_eq!(site.router.location().fragment(), "initiatives");
}

#[test]
fn rapid_navigation_activates_only_the_last_page() {
    let mut site = bundled_site();

    update(&mut site, Action::FollowLink("#about".to_string()));
    advance_clock(&mut site, 5);
    update(&mut site, Action::FollowLink("#contact".to_string()));
    advance_clock(&mut site, 30);

    assert_eq!(active_pages(&site), vec!["contact"]);
}

#[test]
fn unknown_fragment_falls_back_to_home() {
    let mut site = bundled_site();
    update(&mut site, Action::ShowPage("about".to_string()));

    update(&mut site, Action::HashChanged("#does-not-exist".to_string()));
    advance_clock(&mut site, 10);

    assert_eq!(visible_pages(&site), vec!["home"]);
    assert_eq!(active_nav(&site), vec!["Home"]);
    assert!(site.status_message.contains("does-not-exist"));
}

#[test]
fn missing_default_page_falls_back_to_first_page_without_looping() {
    let content = SiteContent::bundled().unwrap();
    let settings = SiteSettings {
        default_page: "landing".to_string(),
        ..SiteSettings::default()
    };
    let mut site = Site::new(content, &settings);

    update(&mut site, Action::ShowPage("nowhere".to_string()));

    assert_eq!(visible_pages(&site), vec!["home"]);
}

#[test]
fn grouped_nav_link_marks_its_dropdown() {
    let mut site = bundled_site();
    let leadership = site
        .router
        .nav_links()
        .iter()
        .position(|l| l.label == "Leadership")
        .unwrap();

    update(&mut site, Action::ActivateNavLink(leadership));

    assert_eq!(active_nav(&site), vec!["Leadership"]);
    let groups: Vec<_> = site
        .router
        .nav_groups()
        .iter()
        .filter(|g| g.active)
        .map(|g| g.name.as_str())
        .collect();
    assert_eq!(groups, vec!["About"]);
}

#[test]
fn back_and_forward_replay_the_history() {
    let mut site = bundled_site();
    update(&mut site, Action::FollowLink("#about".to_string()));
    update(&mut site, Action::FollowLink("#publications".to_string()));

    update(&mut site, Action::HistoryBack);
    assert_eq!(visible_pages(&site), vec!["about"]);
    assert_eq!(active_nav(&site), vec!["Overview"]);

    update(&mut site, Action::HistoryForward);
    assert_eq!(visible_pages(&site), vec!["publications"]);
}

#[test]
fn back_returns_to_the_starting_page() {
    let mut site = bundled_site();
    update(&mut site, Action::FollowLink("#about".to_string()));

    update(&mut site, Action::HistoryBack);
    advance_clock(&mut site, 10);

    assert_eq!(active_pages(&site), vec!["home"]);
    assert_eq!(active_nav(&site), vec!["Home"]);
    assert!(site.router.location().can_go_forward());

    update(&mut site, Action::HistoryForward);
    assert_eq!(visible_pages(&site), vec!["about"]);
}

#[test]
fn start_without_marker_or_default_shows_first_page() {
    let content = SiteContent::from_toml_str(
        r##"
[[pages]]
id = "about"
title = "About"

[[pages]]
id = "contact"
title = "Contact"
"##,
    )
    .unwrap();
    let site = Site::new(content, &SiteSettings::default());

    assert_eq!(visible_pages(&site), vec!["about"]);
    assert_eq!(active_pages(&site), vec!["about"]);
}

#[test]
fn anchor_scrolls_only_on_its_own_page() {
    let mut site = bundled_site();

    // "mission" lives on the about page, which is hidden
    update(&mut site, Action::FollowLink("#mission".to_string()));
    assert_eq!(visible_pages(&site), vec!["home"]);
    assert_eq!(site.viewport.offset(), 0);

    update(&mut site, Action::FollowLink("#about".to_string()));
    update(&mut site, Action::FollowLink("#mission".to_string()));
    assert_eq!(visible_pages(&site), vec!["about"]);
    assert_eq!(site.viewport.offset(), 8);
}

// ============================================================================
// Carousel
// ============================================================================

#[test]
fn carousel_wraps_in_both_directions() {
    let mut site = bundled_site();
    let len = site.carousel.as_ref().unwrap().len();

    for _ in 0..len {
        update(&mut site, Action::NextSlide);
    }
    assert_eq!(current_slide(&site), 0);

    update(&mut site, Action::PrevSlide);
    assert_eq!(current_slide(&site), len - 1);
}

#[test]
fn auto_advance_fires_every_interval() {
    let mut site = bundled_site();

    advance_clock(&mut site, DEFAULT_INTERVAL_MS - 1);
    assert_eq!(current_slide(&site), 0);

    advance_clock(&mut site, DEFAULT_INTERVAL_MS);
    assert_eq!(current_slide(&site), 1);

    advance_clock(&mut site, 2 * DEFAULT_INTERVAL_MS);
    assert_eq!(current_slide(&site), 2);
}

#[test]
fn manual_navigation_restarts_the_countdown() {
    let mut site = bundled_site();

    advance_clock(&mut site, 5000);
    update(&mut site, Action::NextSlide);
    assert_eq!(current_slide(&site), 1);

    // The original 8000ms deadline no longer applies
    advance_clock(&mut site, 8000);
    assert_eq!(current_slide(&site), 1);

    advance_clock(&mut site, 13000);
    assert_eq!(current_slide(&site), 2);
}

#[test]
fn only_one_carousel_timer_survives_repeated_resumes() {
    let mut site = bundled_site();

    for _ in 0..5 {
        update(&mut site, Action::PointerEntered);
        update(&mut site, Action::PointerLeft);
        update(&mut site, Action::VisibilityChanged { hidden: false });
    }

    assert_eq!(site.timers.active_count(), 1);
}

#[test]
fn hover_pauses_auto_advance() {
    let mut site = bundled_site();

    update(&mut site, Action::PointerEntered);
    advance_clock(&mut site, 3 * DEFAULT_INTERVAL_MS);
    assert_eq!(current_slide(&site), 0);

    update(&mut site, Action::PointerLeft);
    advance_clock(&mut site, 4 * DEFAULT_INTERVAL_MS);
    assert_eq!(current_slide(&site), 1);
}

#[test]
fn swipes_past_the_threshold_change_slides() {
    let mut site = bundled_site();

    update(&mut site, Action::TouchStarted(300));
    update(&mut site, Action::TouchEnded(200));
    assert_eq!(current_slide(&site), 1);

    update(&mut site, Action::TouchStarted(200));
    update(&mut site, Action::TouchEnded(300));
    assert_eq!(current_slide(&site), 0);

    // Exactly 50px is not a swipe
    update(&mut site, Action::TouchStarted(200));
    update(&mut site, Action::TouchEnded(150));
    assert_eq!(current_slide(&site), 0);
    assert!(site.carousel.as_ref().unwrap().auto_advancing());
}

#[test]
fn arrow_keys_drive_the_carousel_from_any_page() {
    let mut site = bundled_site();

    update(&mut site, Action::KeyPressed(ArrowKey::Left));
    let last = site.carousel.as_ref().unwrap().len() - 1;
    assert_eq!(current_slide(&site), last);

    update(&mut site, Action::ShowPage("publications".to_string()));
    update(&mut site, Action::KeyPressed(ArrowKey::Right));
    assert_eq!(current_slide(&site), 0);
}

#[test]
fn visible_scope_limits_arrow_keys_to_the_carousel_page() {
    let settings = SiteSettings {
        carousel: CarouselConfig {
            keyboard_scope: KeyboardScope::Visible,
            ..CarouselConfig::default()
        },
        ..SiteSettings::default()
    };
    let mut site = Site::new(SiteContent::bundled().unwrap(), &settings);

    update(&mut site, Action::ShowPage("publications".to_string()));
    update(&mut site, Action::KeyPressed(ArrowKey::Right));
    assert_eq!(current_slide(&site), 0);

    update(&mut site, Action::ShowPage("home".to_string()));
    update(&mut site, Action::KeyPressed(ArrowKey::Right));
    assert_eq!(current_slide(&site), 1);
}

// ============================================================================
// Page Widgets
// ============================================================================

#[test]
fn over_limit_message_blocks_submission() {
    let mut site = bundled_site();
    for (field, value) in [
        (FieldId::Name, "Ayesha".to_string()),
        (FieldId::Email, "ayesha@example.org".to_string()),
        (FieldId::Message, "x".repeat(1001)),
    ] {
        update(&mut site, Action::FormInput { field, value });
    }

    assert_eq!(site.form.counter_text(), "1001/1000 characters");
    assert!(site.form.counter_danger());
    assert_eq!(update(&mut site, Action::FormSubmit), Effect::None);
    assert!(site.form.field(FieldId::Message).invalid);

    update(
        &mut site,
        Action::FormInput {
            field: FieldId::Message,
            value: "x".repeat(1000),
        },
    );
    assert!(matches!(
        update(&mut site, Action::FormSubmit),
        Effect::Notify(_)
    ));
    assert_eq!(site.form.counter_text(), "0/1000 characters");
}

#[test]
fn publication_tabs_filter_cards() {
    let mut site = bundled_site();
    let research = site
        .publications
        .tabs()
        .iter()
        .position(|t| t.label == "Research")
        .unwrap();

    update(&mut site, Action::SelectPublicationTab(research));

    let visible: Vec<_> = site
        .publications
        .cards()
        .iter()
        .filter(|c| c.visible)
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(visible, vec!["research"]);
    assert!(!site.publications.no_results());
}

#[test]
fn initiative_detail_opens_and_closes() {
    let mut site = bundled_site();
    update(&mut site, Action::HashChanged("initiatives".to_string()));

    update(&mut site, Action::OpenInitiative("digital".to_string()));
    assert!(site.initiatives.detail_visible());
    assert_eq!(site.initiatives.slots().launch, "June 2019");

    update(&mut site, Action::CloseInitiative);
    assert!(site.initiatives.list_visible());

    // Unknown keys leave the list in place
    update(&mut site, Action::OpenInitiative("unknown".to_string()));
    assert!(site.initiatives.list_visible());
}

#[test]
fn content_file_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.toml");
    std::fs::write(
        &path,
        r##"
[[pages]]
id = "home"
title = "Home"

[[pages]]
id = "news"
title = "News"
"##,
    )
    .unwrap();

    let content = SiteContent::load(&path).unwrap();
    let settings = SiteSettings {
        start_page: Some("#news".to_string()),
        ..SiteSettings::default()
    };
    let mut site = Site::new(content, &settings);
    advance_clock(&mut site, 10);

    assert_eq!(active_pages(&site), vec!["news"]);
    assert!(site.carousel.is_none());
}
