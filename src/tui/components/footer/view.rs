use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::helpers::layouts;
use crate::tui::style::{APP_NAME, FOOTER_STYLE, LABEL_STYLE};

/// Bottom bar: key hints on the left, status and app name on the right
pub struct Footer<'a> {
    hints: Vec<Span<'a>>,
    status: Option<String>,
}

impl<'a> Footer<'a> {
    pub fn new(hints: Vec<Span<'a>>) -> Self {
        Self {
            hints,
            status: None,
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let left = Line::from(self.hints);

        let mut right = Vec::new();
        if let Some(status) = self.status {
            right.push(Span::raw(format!("{status} ")));
        }
        right.push(Span::styled(format!(" {} ", APP_NAME), LABEL_STYLE));
        let right = Line::from(right).right_aligned();

        let cols = layouts::footer_columns(area);
        Paragraph::new(left).style(FOOTER_STYLE).render(cols[0], buf);
        Paragraph::new(right).style(FOOTER_STYLE).render(cols[1], buf);
    }
}
