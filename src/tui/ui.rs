use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollbarVisibility};

use crate::core::site::PageFeature;
use crate::core::state::Site;
use crate::tui::TuiState;
use crate::tui::component::{Component, Section};
use crate::tui::components::{
    CarouselView, ContactFormView, InitiativePanel, NavBar, Notice, PageHeader, PublicationList,
    StatusBar,
};
use crate::tui::focus::Focusable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Header,
    Carousel,
    Widget,
}

struct RenderedSection {
    paragraph: Paragraph<'static>,
    height: u16,
    kind: SectionKind,
}

impl RenderedSection {
    fn new(section: &dyn Section, width: u16, kind: SectionKind) -> Self {
        Self {
            paragraph: section.paragraph(width),
            height: section.height(width),
            kind,
        }
    }
}

/// Splits the frame into nav bar, page and status bar.
pub fn layout(frame_area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame_area)
}

pub fn draw_site(frame: &mut Frame, site: &mut Site, tui: &mut TuiState) {
    let [nav_area, main_area, status_area] = layout(frame.area());

    // Nav bar, caching link columns for mouse clicks
    let focused_nav = match tui.focus.current() {
        Some(Focusable::NavLink(index)) => Some(*index),
        _ => None,
    };
    let mut nav_bar = NavBar::new(
        &site.content.site.name,
        site.router.nav_links(),
        site.router.nav_groups(),
        focused_nav,
    );
    let (_, hitboxes) = nav_bar.layout();
    tui.nav_hitboxes = hitboxes
        .into_iter()
        .map(|mut hitbox| {
            hitbox.start += nav_area.x;
            hitbox.end += nav_area.x;
            hitbox
        })
        .collect();
    tui.nav_row = nav_area.y;
    nav_bar.render(frame, nav_area);

    draw_page(frame, main_area, site, tui);

    let fragment = match site.router.location().fragment() {
        "" => site.current_page_id().unwrap_or_default().to_string(),
        fragment => fragment.to_string(),
    };
    let mut status_bar = StatusBar {
        fragment,
        status_message: site.status_message.clone(),
        back_to_top_visible: site.viewport.back_to_top_visible(),
        can_go_back: site.router.location().can_go_back(),
        can_go_forward: site.router.location().can_go_forward(),
        carousel_paused: site.carousel_visible()
            && site.carousel.as_ref().is_some_and(|c| !c.auto_advancing()),
    };
    status_bar.render(frame, status_area);

    if let Some(message) = tui.notice.as_deref() {
        let area = frame.area();
        Notice { message }.render(frame, area);
    }
}

fn draw_page(frame: &mut Frame, area: Rect, site: &mut Site, tui: &mut TuiState) {
    // One column for the scrollbar
    let content_width = area.width.saturating_sub(1);
    let sections = build_sections(site, tui.focus.current(), content_width);

    let total_height: u16 = sections.iter().map(|s| s.height).sum();
    site.viewport
        .set_max_offset(total_height.saturating_sub(area.height));
    tui.page_rows = area.height;
    let offset = site.viewport.offset();

    let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

    tui.carousel_area = None;
    let mut y_offset: u16 = 0;
    for section in sections {
        let section_rect = Rect::new(0, y_offset, content_width, section.height);
        if section.kind == SectionKind::Carousel {
            tui.carousel_area = on_screen(area, section_rect, offset);
        }
        scroll_view.render_widget(section.paragraph, section_rect);
        y_offset += section.height;
    }

    tui.scroll_state.set_offset(Position::new(0, offset));
    frame.render_stateful_widget(scroll_view, area, &mut tui.scroll_state);
}

fn build_sections(site: &Site, focused: Option<&Focusable>, width: u16) -> Vec<RenderedSection> {
    let Some(page) = site.current_page_id().and_then(|id| site.content.page(id)) else {
        return Vec::new();
    };

    let focused_link = match focused {
        Some(Focusable::PageLink(index)) => Some(*index),
        _ => None,
    };
    let mut sections = vec![RenderedSection::new(
        &PageHeader { page, focused_link },
        width,
        SectionKind::Header,
    )];

    for feature in &page.features {
        match feature {
            PageFeature::Carousel => {
                if let Some(carousel) = &site.carousel {
                    let view = CarouselView {
                        slides: &site.content.carousel.slides,
                        carousel,
                        focused,
                    };
                    sections.push(RenderedSection::new(&view, width, SectionKind::Carousel));
                }
            }
            PageFeature::Publications => {
                let focused_tab = match focused {
                    Some(Focusable::PublicationTab(index)) => Some(*index),
                    _ => None,
                };
                let list = PublicationList {
                    filter: &site.publications,
                    focused_tab,
                };
                sections.push(RenderedSection::new(&list, width, SectionKind::Widget));
            }
            PageFeature::Initiatives => {
                let panel = InitiativePanel {
                    view: &site.initiatives,
                    focused,
                };
                sections.push(RenderedSection::new(&panel, width, SectionKind::Widget));
            }
            PageFeature::ContactForm => {
                let form = ContactFormView {
                    form: &site.form,
                    focused,
                };
                sections.push(RenderedSection::new(&form, width, SectionKind::Widget));
            }
        }
    }
    sections
}

/// Screen rect of a section at `offset`, clipped to the page area.
fn on_screen(area: Rect, section: Rect, offset: u16) -> Option<Rect> {
    let top = i32::from(area.y) + i32::from(section.y) - i32::from(offset);
    let bottom = top + i32::from(section.height);
    let clipped_top = top.max(i32::from(area.y));
    let clipped_bottom = bottom.min(i32::from(area.bottom()));
    if clipped_bottom <= clipped_top {
        return None;
    }
    Some(Rect::new(
        area.x,
        clipped_top as u16,
        section.width,
        (clipped_bottom - clipped_top) as u16,
    ))
}

/// Whether a screen cell lies inside `area`.
pub fn hit(area: Option<Rect>, column: u16, row: u16) -> bool {
    area.is_some_and(|a| a.contains(Position::new(column, row)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_site;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(site: &mut Site, tui: &mut TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_site(f, site, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn home_page_draws_nav_body_and_carousel() {
        let mut site = test_site();
        let mut tui = TuiState::new();
        let text = draw(&mut site, &mut tui, 100, 30);

        assert!(text.contains("Sample Authority"));
        assert!(text.contains("Welcome."));
        assert!(text.contains("Leadership Messages 1/2"));
        assert!(text.contains("#home"));
        assert!(tui.carousel_area.is_some());
        assert_eq!(tui.nav_hitboxes.len(), site.router.nav_links().len());
    }

    #[test]
    fn carousel_area_cleared_on_other_pages() {
        let mut site = test_site();
        let mut tui = TuiState::new();
        update(&mut site, Action::ShowPage("contact".to_string()));
        let text = draw(&mut site, &mut tui, 100, 40);

        assert!(text.contains("Send us a message"));
        assert!(tui.carousel_area.is_none());
    }

    #[test]
    fn tall_page_sets_viewport_limit() {
        let mut site = test_site();
        let mut tui = TuiState::new();
        update(&mut site, Action::ShowPage("contact".to_string()));
        draw(&mut site, &mut tui, 80, 10);

        update(&mut site, Action::ScrollBy(1000));
        assert!(site.viewport.offset() > 0);
        assert!(site.viewport.offset() < 1000);
    }

    #[test]
    fn notice_overlays_page() {
        let mut site = test_site();
        let mut tui = TuiState::new();
        tui.notice = Some("Thank you for your message!".to_string());
        let text = draw(&mut site, &mut tui, 100, 30);
        assert!(text.contains("Thank you for your message!"));
    }

    #[test]
    fn on_screen_clips_to_page_area() {
        let area = Rect::new(0, 1, 80, 10);
        let section = Rect::new(0, 8, 79, 6);

        let visible = on_screen(area, section, 0).unwrap();
        assert_eq!((visible.y, visible.height), (9, 2));

        let scrolled = on_screen(area, section, 8).unwrap();
        assert_eq!((scrolled.y, scrolled.height), (1, 6));

        assert_eq!(on_screen(area, section, 20), None);
    }
}
