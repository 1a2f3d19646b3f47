use ratatui::text::Span;

use super::style::HIGHLIGHT_STYLE;

/// Key hint spans, e.g. `↑↓ move`
pub fn hint_spans<'a>(hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, desc) in hints {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*key, HIGHLIGHT_STYLE));
        spans.push(Span::raw(format!(" {desc}")));
    }
    spans
}

/// Height of the whole app: title, widget and footer.
/// The dropdown always gets its full height reserved so the inline viewport
/// doesn't jump while typing.
pub fn app_height(limit: usize) -> u16 {
    // title + label + bordered input + dropdown rows + footer
    let rows = u16::try_from(limit.max(1)).unwrap_or(u16::MAX);
    rows.saturating_add(1 + 1 + 3 + 1)
}

/// Standard layout helpers for consistent widget structure
pub mod layouts {
    use ratatui::layout::{Constraint, Layout, Rect};
    use std::rc::Rc;

    /// Split area into title line, expandable content area and footer bar
    pub fn title_content_footer(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);
        (chunks[0], chunks[1], chunks[2])
    }

    /// Split footer into left and right columns
    pub fn footer_columns(area: Rect) -> Rc<[Rect]> {
        Layout::horizontal([Constraint::Fill(2), Constraint::Fill(1)]).split(area)
    }
}
