//! # StatusBar Component
//!
//! Bottom row: the current `#fragment` (the address bar), the site status
//! message, and hints that only appear when they apply.
//!
//! 1. **Back-to-top**: `↑ Top (Home)` once the page is scrolled past the threshold
//! 2. **History**: `Alt+← Back` / `Alt+→ Forward` when there is somewhere to go
//! 3. **Carousel**: `⏸ Paused` while auto-advance is stopped on the host page

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct StatusBar {
    pub fragment: String,
    pub status_message: String,
    pub back_to_top_visible: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub carousel_paused: bool,
}

impl StatusBar {
    fn line(&self) -> Line<'static> {
        let dim = Style::default().fg(Color::DarkGray);
        let mut spans = vec![Span::styled(
            format!(" #{} ", self.fragment),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];

        if !self.status_message.is_empty() {
            spans.push(Span::styled("| ", dim));
            spans.push(Span::raw(self.status_message.clone()));
            spans.push(Span::raw(" "));
        }
        if self.carousel_paused {
            spans.push(Span::styled("| ⏸ Paused ", dim));
        }
        if self.can_go_back {
            spans.push(Span::styled("| Alt+← Back ", dim));
        }
        if self.can_go_forward {
            spans.push(Span::styled("| Alt+→ Forward ", dim));
        }
        if self.back_to_top_visible {
            spans.push(Span::styled(
                "| ↑ Top (Home) ",
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn bar(fragment: &str) -> StatusBar {
        StatusBar {
            fragment: fragment.to_string(),
            status_message: String::new(),
            back_to_top_visible: false,
            can_go_back: false,
            can_go_forward: false,
            carousel_paused: false,
        }
    }

    fn render_text(status: &mut StatusBar) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                status.render(f, area)
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
    fn shows_fragment_only_by_default() {
        let text = render_text(&mut bar("home"));
        assert!(text.contains("#home"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn shows_hints_when_they_apply() {
        let mut status = bar("about");
        status.status_message = "Page '#x' not found".to_string();
        status.back_to_top_visible = true;
        status.can_go_back = true;

        let text = render_text(&mut status);

        assert!(text.contains("Page '#x' not found"));
        assert!(text.contains("↑ Top"));
        assert!(text.contains("Back"));
        assert!(!text.contains("Forward"));
    }
}
