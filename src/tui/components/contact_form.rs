//! # ContactForm Section
//!
//! Labelled input rows, the character counter under the message field and a
//! submit button. Editing itself happens in the core `ContactForm`; this
//! section only mirrors its fields, invalid marks and counter text.
//!
//! The message field is pre-wrapped with `textwrap` so typed newlines and
//! long lines keep their indentation under the `>` prompt.

use std::borrow::Cow;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::form::{ContactForm, Field, FieldId};
use crate::tui::component::Section;
use crate::tui::focus::Focusable;

/// Border, padding and the `> ` prompt.
const VALUE_INDENT: u16 = 4;

const CURSOR: &str = "▏";

pub struct ContactFormView<'a> {
    pub form: &'a ContactForm,
    pub focused: Option<&'a Focusable>,
}

impl ContactFormView<'_> {
    fn field_lines(&self, field: &Field, width: u16) -> Vec<Line<'static>> {
        let focused = self.focused == Some(&Focusable::Field(field.id));

        let mut label = vec![Span::styled(
            field.id.label().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )];
        if field.required {
            label.push(Span::styled(" *", Style::default().fg(Color::Red)));
        }
        if field.invalid {
            label.push(Span::styled(
                "  please check this field",
                Style::default().fg(Color::Red),
            ));
        }

        let prompt_style = if focused {
            Style::default().fg(Color::Cyan)
        } else if field.invalid {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut lines = vec![Line::from(label)];
        let mut rows = wrap_value(&field.value, width.saturating_sub(VALUE_INDENT));
        if focused {
            match rows.last_mut() {
                Some(last) => last.push_str(CURSOR),
                None => rows.push(CURSOR.to_string()),
            }
        }
        if rows.is_empty() {
            rows.push(String::new());
        }
        for (i, row) in rows.into_iter().enumerate() {
            let prompt = if i == 0 { "> " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(prompt, prompt_style),
                Span::styled(row, Style::default().fg(Color::Gray)),
            ]));
        }
        lines
    }

    fn counter_line(&self) -> Line<'static> {
        let style = if self.form.counter_danger() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(Span::styled(self.form.counter_text().to_string(), style)).right_aligned()
    }
}

fn wrap_value(value: &str, width: u16) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    let options = textwrap::Options::new(width.max(1) as usize)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    textwrap::wrap(value, options)
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}

impl Section for ContactFormView<'_> {
    fn paragraph(&self, width: u16) -> Paragraph<'static> {
        let mut lines = Vec::new();
        for field in self.form.fields() {
            lines.extend(self.field_lines(field, width));
            if field.id == FieldId::Message {
                lines.push(self.counter_line());
            }
            lines.push(Line::default());
        }

        let mut submit = Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD);
        if self.focused == Some(&Focusable::Submit) {
            submit = submit.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::from(Span::styled(" Send Message ", submit)));

        // No wrap: rows are already sized to the inner width.
        Paragraph::new(lines).block(
            Block::bordered()
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Send us a message "),
        )
    }
}
