use inventorist::ui::components::scrollbar_helper::ScrollbarHelper;
use ratatui::layout::Rect;

#[test]
fn test_scrollbar_appears_when_content_overflows() {
    // 10 lines in a bordered rect with inner height 3
    let rect = Rect::new(0, 0, 50, 5);
    let (content_area, scrollbar_area) = ScrollbarHelper::split_area(rect, 10);

    let scrollbar_rect = scrollbar_area.expect("scrollbar needed for 10 lines in height 5");
    assert_eq!(scrollbar_rect.width, 1, "scrollbar is one column wide");
    assert_eq!(scrollbar_rect.x, 49, "scrollbar hugs the right edge");
    assert_eq!(scrollbar_rect.height, 3, "scrollbar sits inside the borders");

    assert_eq!(content_area.width, 49, "content gives up one column");
}

#[test]
fn test_no_scrollbar_when_content_fits() {
    let rect = Rect::new(0, 0, 50, 5);
    let (content_area, scrollbar_area) = ScrollbarHelper::split_area(rect, 3);

    assert!(scrollbar_area.is_none());
    assert_eq!(content_area, rect, "content keeps the full rect");
}

#[test]
fn test_boundary_with_borders() {
    // Inner height is 8 after borders; 9 lines should overflow, 8 should not
    let rect = Rect::new(0, 0, 50, 10);

    let (_, overflowing) = ScrollbarHelper::split_area(rect, 9);
    assert!(overflowing.is_some());

    let (_, fitting) = ScrollbarHelper::split_area(rect, 8);
    assert!(fitting.is_none());
}
