//! # InitiativePanel Section
//!
//! The initiatives page shows one of two views:
//!
//! - **List**: every initiative in the catalog, title and subtitle
//! - **Detail**: the slots filled by the core `InitiativeView` when an
//!   initiative is opened, with a back control on top
//!
//! Which one is drawn follows `InitiativeView::detail_visible()`; the panel
//! never decides on its own.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::initiatives::{DetailSlots, InitiativeView};
use crate::tui::component::Section;
use crate::tui::focus::Focusable;
use crate::tui::markdown;

pub struct InitiativePanel<'a> {
    pub view: &'a InitiativeView,
    pub focused: Option<&'a Focusable>,
}

impl InitiativePanel<'_> {
    fn list_lines(&self) -> Vec<Line<'static>> {
        let catalog = self.view.catalog();
        let mut lines = Vec::new();
        for key in catalog.keys() {
            let Some(record) = catalog.get(key) else {
                continue;
            };
            let mut title_style = Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD);
            if self.focused == Some(&Focusable::Initiative(key.to_string())) {
                title_style = title_style.add_modifier(Modifier::REVERSED);
            }
            lines.push(Line::from(vec![
                Span::styled(record.title.clone(), title_style),
                Span::styled("  Read more →", Style::default().fg(Color::Cyan)),
            ]));
            lines.push(Line::from(Span::styled(
                record.subtitle.clone(),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::default());
        }
        lines
    }

    fn detail_lines(&self, slots: &DetailSlots) -> Vec<Line<'static>> {
        let mut back_style = Style::default().fg(Color::Cyan);
        if self.focused == Some(&Focusable::CloseInitiative) {
            back_style = back_style.add_modifier(Modifier::REVERSED);
        }
        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().fg(Color::Gray);

        let mut lines = vec![
            Line::from(Span::styled("← Back to initiatives", back_style)),
            Line::default(),
            Line::from(Span::styled(
                slots.title.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                slots.subtitle.clone(),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::default(),
        ];
        for (name, text) in [
            ("Launched", &slots.launch),
            ("Coverage", &slots.coverage),
            ("Budget", &slots.budget),
            ("Contact", &slots.contact),
        ] {
            lines.push(Line::from(vec![
                Span::styled(format!("{name:<10}"), label),
                Span::styled(text.clone(), value),
            ]));
        }
        lines.extend(markdown::render(&slots.body, Color::Gray, None).lines);
        lines
    }
}

impl Section for InitiativePanel<'_> {
    fn paragraph(&self, _width: u16) -> Paragraph<'static> {
        let (title, lines) = if self.view.detail_visible() {
            (" Initiative ", self.detail_lines(self.view.slots()))
        } else {
            (" Our Initiatives ", self.list_lines())
        };

        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::bordered()
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title),
        )
    }
}
