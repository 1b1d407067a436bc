use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::constants::{CARD_HEIGHT, CARD_MIN_WIDTH};

/// Vertical split of the Ready screen: search input, status line, card grid.
pub fn screen(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Columns and whole card rows that fit the grid area.
pub fn grid_shape(area: Rect) -> (usize, usize) {
    let columns = usize::from(area.width / CARD_MIN_WIDTH).max(1);
    let rows = usize::from(area.height / CARD_HEIGHT);
    (columns, rows)
}

/// Card cells for the grid area, row-major.
pub fn grid_cells(area: Rect) -> Vec<Rect> {
    let (columns, rows) = grid_shape(area);
    let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns];

    let mut cells = Vec::with_capacity(columns * rows);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); rows])
        .split(area);
    for row in row_areas.iter() {
        let row_cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(column_constraints.clone())
            .split(*row);
        cells.extend(row_cells.iter().copied());
    }
    cells
}
