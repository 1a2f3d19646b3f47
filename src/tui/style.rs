use ratatui::style::{Color, Modifier, Style};

pub const APP_NAME: &str = "autocomplete";

pub const BORDER_COLOR: Color = Color::DarkGray;
pub const HIGHLIGHT_COLOR: Color = Color::Cyan;
pub const PLACEHOLDER_COLOR: Color = Color::DarkGray;
pub const LABEL_BG_COLOR: Color = Color::DarkGray;
pub const LABEL_FG_COLOR: Color = Color::White;
pub const FOOTER_BG_COLOR: Color = Color::Rgb(40, 40, 40);
pub const FOOTER_FG_COLOR: Color = Color::Gray;
pub const ACTIVE_BG_COLOR: Color = Color::Rgb(30, 50, 80);

pub const BORDER_STYLE: Style = Style::new().fg(BORDER_COLOR);
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(HIGHLIGHT_COLOR);
pub const HIGHLIGHT_STYLE: Style = Style::new()
    .fg(HIGHLIGHT_COLOR)
    .add_modifier(Modifier::BOLD);
pub const PLACEHOLDER_STYLE: Style = Style::new().fg(PLACEHOLDER_COLOR);
pub const DIMMED_STYLE: Style = Style::new().fg(Color::DarkGray).bg(FOOTER_BG_COLOR);
pub const TITLE_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Style for highlighted label boxes (like command context or app name)
pub const LABEL_STYLE: Style = Style::new()
    .bg(LABEL_BG_COLOR)
    .fg(LABEL_FG_COLOR)
    .add_modifier(Modifier::BOLD);

/// Style for the footer bar background
pub const FOOTER_STYLE: Style = Style::new().bg(FOOTER_BG_COLOR).fg(FOOTER_FG_COLOR);

// Dropdown entry styles
pub const ENTRY_STYLE: Style = FOOTER_STYLE;
pub const ACTIVE_ENTRY_STYLE: Style = Style::new()
    .bg(ACTIVE_BG_COLOR)
    .fg(HIGHLIGHT_COLOR)
    .add_modifier(Modifier::BOLD);
pub const ENTRY_MATCH_STYLE: Style = Style::new()
    .bg(FOOTER_BG_COLOR)
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);
pub const ACTIVE_ENTRY_MATCH_STYLE: Style = Style::new()
    .bg(ACTIVE_BG_COLOR)
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

pub const INPUT_PROMPT: &str = "❯ ";
pub const NO_RESULTS: &str = "No results";
