//! TUI rendering logic for the App.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::app::App;
use super::components::autocomplete::AutocompleteView;
use super::components::footer::Footer;
use super::helpers::{hint_spans, layouts};
use super::style::TITLE_STYLE;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title_area, content_area, footer_area) = layouts::title_content_footer(area);

        Paragraph::new(Line::from(Span::styled(self.title(), TITLE_STYLE)))
            .render(title_area, buf);

        let widget = self.widget();
        AutocompleteView::new(widget, self.label(), self.placeholder())
            .render(content_area, buf);

        let hints = if widget.is_open() {
            hint_spans(&[("↑↓", "move"), ("enter", "select"), ("esc", "close")])
        } else {
            hint_spans(&[("enter", "accept"), ("tab", "focus"), ("esc", "quit")])
        };
        let status = format!("{}/{}", widget.filtered().len(), widget.suggestions().len());
        Footer::new(hints).status(status).render(footer_area, buf);
    }
}
