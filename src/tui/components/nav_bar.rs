//! # NavBar Component
//!
//! Top row: site name followed by the nav links. Links that live in a
//! dropdown are drawn after their group name (`About ▾ Overview Leadership`).
//!
//! ## Highlighting
//!
//! - Active link: bold + underlined, the `.active` class of the page.
//! - Active group: group name bold, so the dropdown trigger reads as current.
//! - Focused link: reversed, like a browser focus ring.
//!
//! ## Hit Testing
//!
//! `layout()` returns the line together with the column span of every link,
//! so a mouse click on row 0 can be resolved to a link index without
//! re-measuring anything.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::router::{NavGroup, NavLink};
use crate::tui::component::Component;

/// Column range of one nav link, relative to the bar's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavHitbox {
    pub start: u16,
    pub end: u16,
    pub link: usize,
}

impl NavHitbox {
    pub fn contains(&self, column: u16) -> bool {
        column >= self.start && column < self.end
    }
}

pub struct NavBar<'a> {
    pub site_name: &'a str,
    pub links: &'a [NavLink],
    pub groups: &'a [NavGroup],
    /// Index of the nav link holding keyboard focus.
    pub focused: Option<usize>,
}

impl<'a> NavBar<'a> {
    pub fn new(
        site_name: &'a str,
        links: &'a [NavLink],
        groups: &'a [NavGroup],
        focused: Option<usize>,
    ) -> Self {
        Self {
            site_name,
            links,
            groups,
            focused,
        }
    }

    pub fn layout(&self) -> (Line<'static>, Vec<NavHitbox>) {
        let mut spans = Vec::new();
        let mut hitboxes = Vec::new();
        let mut column: u16 = 0;

        let mut push = |spans: &mut Vec<Span<'static>>, text: String, style: Style| -> (u16, u16) {
            let start = column;
            column = column.saturating_add(text.width() as u16);
            spans.push(Span::styled(text, style));
            (start, column)
        };

        push(
            &mut spans,
            format!(" {} ", self.site_name),
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
        );
        push(&mut spans, " ".to_string(), Style::default());

        let mut open_group: Option<usize> = None;
        for (index, link) in self.links.iter().enumerate() {
            if link.group != open_group {
                if let Some(group) = link.group.and_then(|g| self.groups.get(g)) {
                    let mut style = Style::default().fg(Color::Gray);
                    if group.active {
                        style = style.fg(Color::White).add_modifier(Modifier::BOLD);
                    }
                    push(&mut spans, format!(" {} ▾", group.name), style);
                }
                open_group = link.group;
            }

            let mut style = if link.group.is_some() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Gray)
            };
            if link.active {
                style = style
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            if self.focused == Some(index) {
                style = style.add_modifier(Modifier::REVERSED);
            }

            push(&mut spans, " ".to_string(), Style::default());
            let (start, end) = push(&mut spans, link.label.clone(), style);
            hitboxes.push(NavHitbox {
                start,
                end,
                link: index,
            });
        }

        (Line::from(spans), hitboxes)
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (line, _) = self.layout();
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_site;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn bar_text(bar: &mut NavBar) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                bar.render(f, area)
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn group_name_precedes_its_links() {
        let site = test_site();
        let mut bar = NavBar::new(
            "Sample Authority",
            site.router.nav_links(),
            site.router.nav_groups(),
            None,
        );
        let text = bar_text(&mut bar);

        assert!(text.contains("Sample Authority"));
        let group = text.find("About ▾").unwrap();
        let overview = text.find("Overview").unwrap();
        assert!(group < overview);
        assert_eq!(text.matches("About ▾").count(), 1);
    }

    #[test]
    fn hitboxes_cover_link_labels() {
        let site = test_site();
        let bar = NavBar::new("S", site.router.nav_links(), site.router.nav_groups(), None);
        let (line, hitboxes) = bar.layout();

        assert_eq!(hitboxes.len(), site.router.nav_links().len());
        let contact = hitboxes.last().unwrap();
        let span_index = line.spans.iter().position(|s| s.content == "Contact").unwrap();
        let prefix_width: usize = line.spans[..span_index].iter().map(|s| s.width()).sum();
        assert_eq!(contact.start as usize, prefix_width);
        assert_eq!(contact.end - contact.start, 7);
        assert!(contact.contains(contact.start));
        assert!(!contact.contains(contact.end));
    }

    #[test]
    fn active_link_is_bold_and_focused_link_reversed() {
        let site = test_site();
        let bar = NavBar::new("S", site.router.nav_links(), site.router.nav_groups(), Some(1));
        let (line, _) = bar.layout();

        let home = line.spans.iter().find(|s| s.content == "Home").unwrap();
        assert!(home.style.add_modifier.contains(Modifier::BOLD));
        let overview = line.spans.iter().find(|s| s.content == "Overview").unwrap();
        assert!(overview.style.add_modifier.contains(Modifier::REVERSED));
    }
}
