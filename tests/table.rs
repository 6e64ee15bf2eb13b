use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use inventorist::theme::Theme;
use inventorist::ui::components::table::{Column, DataTable, RowRecord};
use inventorist::ui::core::{Action, Component};
use ratatui::{backend::TestBackend, text::Line, Terminal};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    sku: &'static str,
    name: &'static str,
}

impl RowRecord for Item {
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "sku" => Some(self.sku.to_string()),
            "name" => Some(self.name.to_string()),
            _ => None,
        }
    }
}

fn columns() -> Vec<Column<Item>> {
    vec![Column::new("SKU", "sku"), Column::new("Name", "name")]
}

fn items() -> Vec<Item> {
    vec![
        Item { sku: "A-1", name: "Beans" },
        Item { sku: "B-2", name: "Cups" },
        Item { sku: "C-3", name: "Mugs" },
    ]
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn draw(table: &mut DataTable<Item>) -> String {
    let backend = TestBackend::new(60, 12);
    let mut terminal = Terminal::new(backend).unwrap();
    let theme = Theme::default();
    terminal
        .draw(|f| table.render(f, f.area(), &theme))
        .unwrap();
    buffer_text(&terminal)
}

#[test]
fn test_renders_headers_and_rows_in_input_order() {
    let mut table = DataTable::new("Products", columns());
    table.set_data(items());

    assert_eq!(table.column_count(), 2);
    assert_eq!(table.row_count(), 3);

    let text = draw(&mut table);

    // Header cells in column order
    let sku_pos = text.find("SKU").expect("header SKU rendered");
    let name_pos = text.find("Name").expect("header Name rendered");
    assert!(sku_pos < name_pos, "headers keep input order");

    // One row per record, in input order (no implicit sorting)
    let a = text.find("A-1").expect("row A-1 rendered");
    let b = text.find("B-2").expect("row B-2 rendered");
    let c = text.find("C-3").expect("row C-3 rendered");
    assert!(a < b && b < c, "rows keep input order");
}

#[test]
fn test_custom_renderer_takes_precedence_over_accessor() {
    let cols = vec![
        Column::new("SKU", "sku"),
        Column::new("Name", "name").with_render(|item: &Item| Line::from(format!("<<{}>>", item.name))),
    ];
    let mut table = DataTable::new("Products", cols);
    table.set_data(items());

    let rendered: String = table
        .cell_content(0, 1)
        .spans
        .iter()
        .map(|s| s.content.as_ref())
        .collect();
    assert_eq!(rendered, "<<Beans>>");

    // Accessor remains the column identity even with a renderer attached
    let text = draw(&mut table);
    assert!(text.contains("<<Beans>>"));
    assert!(!text.contains(" Beans "), "plain accessor value is not rendered");
}

#[test]
fn test_missing_accessor_renders_empty_cell() {
    let cols = vec![Column::new("SKU", "sku"), Column::new("Weight", "weight")];
    let mut table = DataTable::new("Products", cols);
    table.set_data(items());

    let rendered: String = table
        .cell_content(0, 1)
        .spans
        .iter()
        .map(|s| s.content.as_ref())
        .collect();
    assert_eq!(rendered, "", "absent field renders empty, not an error");

    // The rest of the table still renders
    let text = draw(&mut table);
    assert!(text.contains("A-1"));
}

#[test]
fn test_empty_data_renders_placeholder_row() {
    let mut table = DataTable::new("Products", columns());
    table.set_data(Vec::new());

    let text = draw(&mut table);
    assert!(text.contains("No data available"));
}

#[test]
fn test_empty_message_override() {
    let mut table = DataTable::new("Products", columns()).with_empty_message("Nothing in stock yet");
    table.set_data(Vec::new());

    let text = draw(&mut table);
    assert!(text.contains("Nothing in stock yet"));
    assert!(!text.contains("No data available"));
}

#[test]
fn test_placeholder_survives_short_viewport() {
    let mut table = DataTable::new("Products", columns());
    table.set_data(Vec::new());

    // Three rows: top border, one interior line, bottom border
    let backend = TestBackend::new(60, 3);
    let mut terminal = Terminal::new(backend).unwrap();
    let theme = Theme::default();
    terminal
        .draw(|f| table.render(f, f.area(), &theme))
        .unwrap();

    assert!(buffer_text(&terminal).contains("No data available"));
}

#[test]
fn test_empty_columns_is_a_valid_state() {
    let mut table: DataTable<Item> = DataTable::new("Products", Vec::new());
    table.set_data(items());
    assert_eq!(table.column_count(), 0);

    // Renders the frame without panicking
    let text = draw(&mut table);
    assert!(text.contains("Products"));
}

#[test]
fn test_row_click_invoked_exactly_once_with_record() {
    let mut table = DataTable::new("Products", columns());
    table.set_data(items());

    let count = Rc::new(Cell::new(0));
    let seen: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
    let (count_in, seen_in) = (Rc::clone(&count), Rc::clone(&seen));
    table.on_row_click(Box::new(move |item: &Item| {
        count_in.set(count_in.get() + 1);
        *seen_in.borrow_mut() = Some(item.sku.to_string());
    }));

    // Move to the second row and activate it
    table.handle_key_events(key(KeyCode::Down));
    let action = table.handle_key_events(key(KeyCode::Enter));

    assert_eq!(action, Action::Activate);
    assert_eq!(count.get(), 1, "callback fires exactly once per activation");
    assert_eq!(seen.borrow().as_deref(), Some("B-2"));
}

#[test]
fn test_mouse_click_selects_and_activates_row() {
    let mut table = DataTable::new("Products", columns());
    table.set_data(items());

    let count = Rc::new(Cell::new(0));
    let seen: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
    let (count_in, seen_in) = (Rc::clone(&count), Rc::clone(&seen));
    table.on_row_click(Box::new(move |item: &Item| {
        count_in.set(count_in.get() + 1);
        *seen_in.borrow_mut() = Some(item.sku.to_string());
    }));

    // Render once so the table knows its own footprint. Data rows start
    // at y = 2: top border, header, then the first record.
    draw(&mut table);
    let action = table.handle_events(Some(click(5, 3)));

    assert_eq!(action, Action::Activate);
    assert_eq!(count.get(), 1, "one click, one callback");
    assert_eq!(seen.borrow().as_deref(), Some("B-2"));
    assert_eq!(table.selected(), 1, "click moved the selection");
}

#[test]
fn test_mouse_click_outside_rows_is_a_no_op() {
    let mut table = DataTable::new("Products", columns());
    table.set_data(items());

    let count = Rc::new(Cell::new(0));
    let count_in = Rc::clone(&count);
    table.on_row_click(Box::new(move |_| count_in.set(count_in.get() + 1)));
    draw(&mut table);

    // Header row, left border, and the space below the last record
    for event in [click(5, 1), click(0, 2), click(5, 8)] {
        assert_eq!(table.handle_events(Some(event)), Action::None);
    }
    assert_eq!(count.get(), 0);
}

#[test]
fn test_mouse_click_without_callback_is_a_no_op() {
    let mut table = DataTable::new("Products", columns());
    table.set_data(items());
    draw(&mut table);

    assert_eq!(table.handle_events(Some(click(5, 2))), Action::None);
    assert_eq!(table.selected(), 0);
}

#[test]
fn test_activation_without_callback_is_a_no_op() {
    let mut table = DataTable::new("Products", columns());
    table.set_data(items());

    assert!(!table.is_interactive());
    assert_eq!(table.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert_eq!(table.activate(), Action::None);
}

#[test]
fn test_activation_on_empty_table_is_a_no_op() {
    let mut table: DataTable<Item> = DataTable::new("Products", columns());
    let count = Rc::new(Cell::new(0));
    let count_in = Rc::clone(&count);
    table.on_row_click(Box::new(move |_| count_in.set(count_in.get() + 1)));

    assert_eq!(table.activate(), Action::None);
    assert_eq!(count.get(), 0);
}

#[test]
fn test_selection_clamps_to_data_length() {
    let mut table = DataTable::new("Products", columns());
    table.on_row_click(Box::new(|_| {}));
    table.set_data(items());

    table.handle_key_events(key(KeyCode::Down));
    table.handle_key_events(key(KeyCode::Down));
    table.handle_key_events(key(KeyCode::Down)); // already at the last row
    assert_eq!(table.selected(), 2);

    // Shrinking the data pulls the selection back in range
    table.set_data(vec![Item { sku: "A-1", name: "Beans" }]);
    assert_eq!(table.selected(), 0);
}
