//! Generic data table component.
//!
//! A table is a pure binding from an ordered list of column descriptors
//! and a sequence of row records to a rendered grid: one header cell per
//! column, one body row per record, both strictly in input order. There is
//! no sorting, filtering, or pagination here.
//!
//! Row types implement [`RowRecord`] so columns can address fields by key;
//! a column may instead carry a custom render closure, in which case the
//! closure wins and the accessor only serves as the column's identity. A
//! missing field renders as an empty cell, never as an error.

use crossterm::event::{Event, KeyCode, KeyEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::constants::TABLE_EMPTY_MESSAGE;
use crate::theme::Theme;
use crate::ui::core::{Action, Component};

/// A record displayable as a table row: an open mapping from field key to
/// display value.
pub trait RowRecord {
    /// Look up a field by key. `None` renders as an empty cell.
    fn field(&self, key: &str) -> Option<String>;
}

/// Custom cell renderer: maps a whole row record to display content
pub type CellRenderer<R> = Box<dyn Fn(&R) -> Line<'static>>;

/// Callback invoked with the activated row record
pub type RowCallback<R> = Box<dyn Fn(&R)>;

/// Descriptor for one table column
pub struct Column<R> {
    header: String,
    accessor: String,
    render: Option<CellRenderer<R>>,
}

impl<R> Column<R> {
    #[must_use]
    pub fn new(header: impl Into<String>, accessor: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            accessor: accessor.into(),
            render: None,
        }
    }

    /// Attach a custom renderer; it takes precedence over the accessor.
    #[must_use]
    pub fn with_render(mut self, render: impl Fn(&R) -> Line<'static> + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Stable identity of the column, even when a renderer is attached
    #[must_use]
    pub fn accessor(&self) -> &str {
        &self.accessor
    }
}

/// Generic table over row records of type `R`
pub struct DataTable<R: RowRecord> {
    columns: Vec<Column<R>>,
    data: Vec<R>,
    empty_message: String,
    on_row_click: Option<RowCallback<R>>,
    selected: usize,
    state: TableState,
    title: String,
    // Set during render; used to map mouse clicks to row indices
    last_area: Option<Rect>,
}

impl<R: RowRecord> DataTable<R> {
    #[must_use]
    pub fn new(title: impl Into<String>, columns: Vec<Column<R>>) -> Self {
        Self {
            columns,
            data: Vec::new(),
            empty_message: TABLE_EMPTY_MESSAGE.to_string(),
            on_row_click: None,
            selected: 0,
            state: TableState::default(),
            title: title.into(),
            last_area: None,
        }
    }

    /// Override the placeholder shown when there are no rows
    #[must_use]
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Make rows interactive: activation invokes the callback with the
    /// activated record. Without a callback, rows are inert.
    pub fn on_row_click(&mut self, callback: RowCallback<R>) {
        self.on_row_click = Some(callback);
        self.sync_selection();
    }

    /// Replace the row data, clamping the selection to the new length
    pub fn set_data(&mut self, data: Vec<R>) {
        self.data = data;
        self.sync_selection();
    }

    fn sync_selection(&mut self) {
        if self.data.is_empty() || !self.is_interactive() {
            self.selected = 0;
            self.state.select(None);
        } else {
            if self.selected >= self.data.len() {
                self.selected = self.data.len() - 1;
            }
            self.state.select(Some(self.selected));
        }
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.on_row_click.is_some()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.data
    }

    /// Move the selection down one row
    pub fn next_row(&mut self) {
        if !self.data.is_empty() && self.selected + 1 < self.data.len() {
            self.selected += 1;
            self.state.select(Some(self.selected));
        }
    }

    /// Move the selection up one row
    pub fn previous_row(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.state.select(Some(self.selected));
        }
    }

    /// Activate the selected row: invokes the row callback exactly once
    /// with the record. A no-op when no callback is set or there is no
    /// data.
    pub fn activate(&self) -> Action {
        if let (Some(callback), Some(record)) = (&self.on_row_click, self.data.get(self.selected)) {
            callback(record);
            Action::Activate
        } else {
            Action::None
        }
    }

    /// Display content for one cell: the column renderer if present,
    /// otherwise the accessor lookup, otherwise empty.
    #[must_use]
    pub fn cell_content(&self, row: usize, col: usize) -> Line<'static> {
        let (Some(column), Some(record)) = (self.columns.get(col), self.data.get(row)) else {
            return Line::default();
        };
        match &column.render {
            Some(render) => render(record),
            None => Line::from(record.field(&column.accessor).unwrap_or_default()),
        }
    }

    /// Select and activate the row under a mouse click, if any.
    ///
    /// Data rows start below the top border and the header row; clicks on
    /// the frame, the header, or past the last row are ignored.
    fn click_at(&mut self, column: u16, row: u16) -> Action {
        let Some(area) = self.last_area else {
            return Action::None;
        };
        let first_row = area.y + 2;
        let inside_x = column > area.x && column + 1 < area.x + area.width;
        let inside_y = row >= first_row && row + 1 < area.y + area.height;
        if !inside_x || !inside_y {
            return Action::None;
        }

        let index = self.state.offset() + (row - first_row) as usize;
        if index >= self.data.len() {
            return Action::None;
        }
        self.selected = index;
        self.state.select(Some(index));
        self.activate()
    }

    fn widths(&self) -> Vec<Constraint> {
        let n = self.columns.len().max(1) as u32;
        self.columns.iter().map(|_| Constraint::Ratio(1, n)).collect()
    }
}

impl<R: RowRecord> Component for DataTable<R> {
    fn handle_events(&mut self, event: Option<Event>) -> Action {
        match event {
            Some(Event::Key(key)) => self.handle_key_events(key),
            Some(Event::Mouse(mouse)) if self.is_interactive() => match mouse.kind {
                MouseEventKind::Down(_) => self.click_at(mouse.column, mouse.row),
                _ => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.is_interactive() {
            return Action::None;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous_row();
                Action::PreviousItem
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.next_row();
                Action::NextItem
            }
            KeyCode::Enter => self.activate(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        self.last_area = Some(rect);
        let block = theme.block(&self.title);

        if self.columns.is_empty() {
            // No columns is a valid state: just the frame
            f.render_widget(block, rect);
            return;
        }

        let header = Row::new(
            self.columns
                .iter()
                .map(|c| Cell::from(c.header.clone()))
                .collect::<Vec<_>>(),
        )
        .style(theme.table_header());

        if self.data.is_empty() {
            // Header plus a single placeholder row spanning every column
            let table = Table::new(Vec::<Row>::new(), self.widths()).header(header).block(block);
            f.render_widget(table, rect);

            if rect.height > 2 && rect.width > 2 {
                // Below the header when there is room, over it when not
                let message_y = rect.y + (rect.height - 2).min(2);
                let message_area = Rect::new(rect.x + 1, message_y, rect.width - 2, 1);
                let placeholder = Paragraph::new(self.empty_message.clone())
                    .style(theme.muted())
                    .alignment(Alignment::Center);
                f.render_widget(placeholder, message_area);
            }
            return;
        }

        let rows: Vec<Row> = (0..self.data.len())
            .map(|row| {
                Row::new(
                    (0..self.columns.len())
                        .map(|col| Cell::from(self.cell_content(row, col)))
                        .collect::<Vec<_>>(),
                )
                .style(theme.text())
            })
            .collect();

        let mut table = Table::new(rows, self.widths()).header(header).block(block);
        if self.is_interactive() && !self.data.is_empty() {
            table = table.row_highlight_style(theme.row_highlight());
        }

        f.render_stateful_widget(table, rect, &mut self.state);
    }
}
