//! # PageHeader Section
//!
//! Title and markdown body of the page currently shown. Always the first
//! section, so anchor offsets count rows from its top line.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::site::PageSpec;
use crate::tui::component::Section;
use crate::tui::markdown;

pub struct PageHeader<'a> {
    pub page: &'a PageSpec,
    /// Index of the body link holding keyboard focus.
    pub focused_link: Option<usize>,
}

impl Section for PageHeader<'_> {
    fn paragraph(&self, _width: u16) -> Paragraph<'static> {
        let mut text = markdown::render(&self.page.body, Color::Gray, self.focused_link);
        text.lines.insert(
            0,
            Line::from(Span::styled(
                self.page.title.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        );
        text.lines.push(Line::default());

        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(Block::default().padding(Padding::horizontal(1)))
    }
}
