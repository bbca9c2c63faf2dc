use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// Used for the fixed chrome (nav bar, status bar, notice overlay).
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A block of page content stacked inside the scrollable page view.
///
/// Sections don't draw into the frame directly: the page view asks each one
/// for a paragraph and its height, lays them out top to bottom, and renders
/// them into a `ScrollView` buffer.
///
/// Every section reserves one column on each side (a border or padding).
pub trait Section {
    /// Build the section's paragraph for a given outer width.
    fn paragraph(&self, width: u16) -> Paragraph<'static>;

    /// Rows needed at `width`, borders included.
    fn height(&self, width: u16) -> u16 {
        self.paragraph(width).line_count(width.saturating_sub(2)) as u16
    }
}
