use ratatui::style::{Color, Modifier, Style};

pub const APP_TITLE: &str = "Product List";
pub const SEARCH_TITLE: &str = "Search";
pub const SEARCH_PLACEHOLDER: &str = "Search by product name or price (e.g., <50, >50)";
pub const LOADING_TEXT: &str = "Loading...";

/// Minimum card width before the grid drops a column.
pub const CARD_MIN_WIDTH: u16 = 36;
/// Card height in rows, borders included.
pub const CARD_HEIGHT: u16 = 9;

pub fn title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn price_style() -> Style {
    Style::default().fg(Color::Red)
}

pub fn category_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn description_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn rating_style() -> Style {
    Style::default().fg(Color::Green)
}

pub fn error_style() -> Style {
    Style::default().fg(Color::Red)
}

pub fn loading_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn input_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
