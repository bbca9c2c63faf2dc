//! # CarouselView Section
//!
//! Leadership messages, one slide at a time.
//!
//! ```text
//! ┌ Leadership Messages 1/3 ───────────────┐
//! │ Chairperson                            │
//! │ Board of Directors                     │
//! │                                        │
//! │ "Every child in Punjab deserves..."    │
//! │                                        │
//! │ ◀ Prev    ● ○ ○    Next ▶              │
//! └────────────────────────── ⏸ paused ───┘
//! ```
//!
//! The view is pure: the slide index, indicator marks and auto-advance flag
//! all come from the core `Carousel`. Hover and drag gestures are resolved
//! against the area this section lands in, see `ui::draw_site`.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::carousel::Carousel;
use crate::core::site::SlideSpec;
use crate::tui::component::Section;
use crate::tui::focus::Focusable;

pub struct CarouselView<'a> {
    pub slides: &'a [SlideSpec],
    pub carousel: &'a Carousel,
    pub focused: Option<&'a Focusable>,
}

impl CarouselView<'_> {
    fn control_style(&self, target: &Focusable) -> Style {
        let style = Style::default().fg(Color::Cyan);
        if self.focused == Some(target) {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }

    fn controls(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled("◀ Prev", self.control_style(&Focusable::CarouselPrev)),
            Span::raw("    "),
        ];
        for (index, active) in self.carousel.indicators().iter().enumerate() {
            let dot = if *active { "●" } else { "○" };
            let mut style = if *active {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if self.focused == Some(&Focusable::Indicator(index)) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(dot, style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            "Next ▶",
            self.control_style(&Focusable::CarouselNext),
        ));
        Line::from(spans)
    }
}

impl Section for CarouselView<'_> {
    fn paragraph(&self, _width: u16) -> Paragraph<'static> {
        let current = self.carousel.current();
        let mut lines = Vec::new();
        if let Some(slide) = self.slides.get(current) {
            lines.push(Line::from(Span::styled(
                slide.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )));
            if !slide.role.is_empty() {
                lines.push(Line::from(Span::styled(
                    slide.role.clone(),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("\"{}\"", slide.message),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::default());
        lines.push(self.controls());

        let mut block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(
                " Leadership Messages {}/{} ",
                current + 1,
                self.carousel.len()
            ));
        if !self.carousel.auto_advancing() {
            block = block.title_bottom(Line::from(" ⏸ paused ").right_aligned());
        }

        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block)
    }
}
