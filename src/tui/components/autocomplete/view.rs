use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use std::collections::HashSet;

use super::model::AutocompleteLayout;
use crate::autocomplete::Autocomplete;
use crate::filter::Match;
use crate::tui::style::{
    ACTIVE_ENTRY_MATCH_STYLE, ACTIVE_ENTRY_STYLE, BORDER_STYLE, DIMMED_STYLE, ENTRY_MATCH_STYLE,
    ENTRY_STYLE, FOCUSED_BORDER_STYLE, INPUT_PROMPT, NO_RESULTS, PLACEHOLDER_STYLE,
};

/// A single dropdown row
struct Entry<'a> {
    item: &'a Match,
    active: bool,
}

impl Widget for Entry<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (base_style, match_style) = if self.active {
            (ACTIVE_ENTRY_STYLE, ACTIVE_ENTRY_MATCH_STYLE)
        } else {
            (ENTRY_STYLE, ENTRY_MATCH_STYLE)
        };
        let match_set: HashSet<u32> = self.item.match_indices.iter().copied().collect();

        // Runs of matched and unmatched characters
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_matched = false;
        for (char_idx, ch) in self.item.text.chars().enumerate() {
            let matched = match_set.contains(&(char_idx as u32));
            if matched != run_matched && !run.is_empty() {
                let style = if run_matched { match_style } else { base_style };
                spans.push(Span::styled(std::mem::take(&mut run), style));
            }
            run_matched = matched;
            run.push(ch);
        }
        if !run.is_empty() {
            let style = if run_matched { match_style } else { base_style };
            spans.push(Span::styled(run, style));
        }

        Clear.render(area, buf);
        buf.set_style(area, base_style);
        // One column of leading padding; wide characters that don't fit are dropped
        buf.set_line(
            area.x.saturating_add(1),
            area.y,
            &Line::from(spans),
            area.width.saturating_sub(1),
        );
    }
}

/// Label, input box and dropdown
pub struct AutocompleteView<'a> {
    state: &'a Autocomplete,
    label: &'a str,
    placeholder: &'a str,
}

impl<'a> AutocompleteView<'a> {
    pub fn new(state: &'a Autocomplete, label: &'a str, placeholder: &'a str) -> Self {
        Self {
            state,
            label,
            placeholder,
        }
    }
}

impl Widget for AutocompleteView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = AutocompleteLayout::compute(area, self.state);

        Paragraph::new(Line::raw(self.label)).render(layout.label, buf);

        let display_text = if self.state.is_empty() {
            Line::from(vec![
                Span::raw(INPUT_PROMPT),
                Span::styled(self.placeholder, PLACEHOLDER_STYLE),
            ])
        } else {
            Line::from(vec![Span::raw(INPUT_PROMPT), Span::raw(self.state.text())])
        };
        let border_style = if self.state.is_focused() {
            FOCUSED_BORDER_STYLE
        } else {
            BORDER_STYLE
        };
        Paragraph::new(display_text)
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(border_style),
            )
            .render(layout.input, buf);

        let active = self.state.active_index();
        for (idx, (item, row)) in self
            .state
            .filtered()
            .iter()
            .zip(layout.entries.iter())
            .enumerate()
        {
            Entry {
                item,
                active: Some(idx) == active,
            }
            .render(*row, buf);
        }

        if let Some(row) = layout.empty {
            Paragraph::new(Line::raw(format!(" {NO_RESULTS}")))
                .style(DIMMED_STYLE)
                .render(row, buf);
        }
    }
}
