use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use storefront_core::{CatalogViewModel, ProductCardView, ViewPhase};

use super::constants::*;
use super::layout;

/// Draws the whole frame for the current view model. `scroll` is the first
/// visible grid row; it is clamped here so the shell can scroll blindly.
pub fn render(frame: &mut Frame, view: &CatalogViewModel, scroll: &mut usize) {
    match &view.phase {
        ViewPhase::Loading { bytes_fetched } => render_loading(frame, *bytes_fetched),
        ViewPhase::Failed { message } => render_error(frame, message),
        ViewPhase::Ready => render_catalog(frame, view, scroll),
    }
}

fn render_loading(frame: &mut Frame, bytes_fetched: Option<u64>) {
    let text = match bytes_fetched {
        Some(bytes) => format!("{LOADING_TEXT} ({bytes} bytes)"),
        None => LOADING_TEXT.to_string(),
    };
    let paragraph = Paragraph::new(text)
        .style(loading_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(APP_TITLE));
    frame.render_widget(paragraph, frame.area());
}

fn render_error(frame: &mut Frame, message: &str) {
    let paragraph = Paragraph::new(format!("Error: {message}"))
        .style(error_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(APP_TITLE));
    frame.render_widget(paragraph, frame.area());
}

fn render_catalog(frame: &mut Frame, view: &CatalogViewModel, scroll: &mut usize) {
    let (input_area, status_area, grid_area) = layout::screen(frame.area());

    render_search_input(frame, input_area, &view.query);
    render_status_line(frame, status_area, view);
    render_grid(frame, grid_area, &view.cards, scroll);
}

fn render_search_input(frame: &mut Frame, area: Rect, query: &str) {
    let (text, style) = if query.is_empty() {
        (SEARCH_PLACEHOLDER, placeholder_style())
    } else {
        (query, input_style())
    };
    let input = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(SEARCH_TITLE));
    frame.render_widget(input, area);

    let cursor_x = area.x + 1 + query.chars().count() as u16;
    let cursor_limit = (area.x + area.width).saturating_sub(2);
    frame.set_cursor_position((cursor_x.min(cursor_limit), area.y + 1));
}

fn render_status_line(frame: &mut Frame, area: Rect, view: &CatalogViewModel) {
    let status = format!(
        " {} of {} products | arrows scroll, Esc quits",
        view.cards.len(),
        view.total
    );
    frame.render_widget(Paragraph::new(status).style(category_style()), area);
}

fn render_grid(frame: &mut Frame, area: Rect, cards: &[ProductCardView], scroll: &mut usize) {
    let (columns, rows) = layout::grid_shape(area);
    if rows == 0 || cards.is_empty() {
        *scroll = 0;
        return;
    }
    let total_rows = cards.len().div_ceil(columns);
    *scroll = (*scroll).min(total_rows.saturating_sub(rows));

    let first = *scroll * columns;
    for (cell, card) in layout::grid_cells(area).iter().zip(cards.iter().skip(first)) {
        render_card(frame, *cell, card);
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &ProductCardView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(truncate(&card.title, area.width), title_style()));
    let lines = vec![
        Line::styled(format!("Price: ${}", card.price_text), price_style()),
        Line::styled(format!("Category: {}", card.category), category_style()),
        Line::styled(
            format!("Rating: {} ({} reviews)", card.rating_rate, card.rating_count),
            rating_style(),
        ),
        Line::styled(truncate(&card.image, area.width), placeholder_style()),
        Line::styled(card.description.clone(), description_style()),
    ];
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}

fn truncate(text: &str, width: u16) -> String {
    let max = usize::from(width.saturating_sub(2));
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
