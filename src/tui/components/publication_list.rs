//! # PublicationList Section
//!
//! Category tabs over the publication cards. Hidden cards are simply not
//! drawn; when every card is hidden a "no results" line takes their place.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::publications::PublicationFilter;
use crate::tui::component::Section;

pub struct PublicationList<'a> {
    pub filter: &'a PublicationFilter,
    /// Index of the tab holding keyboard focus.
    pub focused_tab: Option<usize>,
}

impl PublicationList<'_> {
    fn tabs(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (index, tab) in self.filter.tabs().iter().enumerate() {
            let mut style = if tab.active {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            if self.focused_tab == Some(index) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            spans.push(Span::styled(format!(" {} ", tab.label), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Section for PublicationList<'_> {
    fn paragraph(&self, _width: u16) -> Paragraph<'static> {
        let mut lines = vec![self.tabs(), Line::default()];

        if self.filter.no_results() {
            lines.push(Line::from(Span::styled(
                "No publications found in this category.",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        for card in self.filter.cards().iter().filter(|c| c.visible) {
            lines.push(Line::from(vec![
                Span::styled(
                    card.title.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  [{}]", card.category),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            if !card.summary.is_empty() {
                lines.push(Line::from(Span::styled(
                    card.summary.clone(),
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(Line::default());
        }

        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::bordered()
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Publications "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_content, section_rows};

    #[test]
    fn all_tab_lists_every_card() {
        let filter = PublicationFilter::new(&sample_content().publications);
        let list = PublicationList {
            filter: &filter,
            focused_tab: None,
        };
        let text = section_rows(&list, 70).join("\n");

        assert!(text.contains(" All "));
        assert!(text.contains("Reports"));
        assert!(text.contains("Annual Report 2022"));
        assert!(text.contains("Voucher Policy"));
    }

    #[test]
    fn filtered_cards_are_hidden() {
        let mut filter = PublicationFilter::new(&sample_content().publications);
        filter.filter("policies");
        let list = PublicationList {
            filter: &filter,
            focused_tab: None,
        };
        let text = section_rows(&list, 70).join("\n");

        assert!(text.contains("Voucher Policy"));
        assert!(!text.contains("Annual Report 2022"));
    }

    #[test]
    fn empty_category_shows_no_results() {
        let mut filter = PublicationFilter::new(&sample_content().publications);
        filter.filter("minutes");
        let list = PublicationList {
            filter: &filter,
            focused_tab: None,
        };
        let text = section_rows(&list, 70).join("\n");
        assert!(text.contains("No publications found"));
    }
}
