use facts::PaginationInfo;

fn info(total_count: u32, current_page: u32, per_page: u32, total_pages: u32) -> PaginationInfo {
    PaginationInfo {
        total_count,
        current_page,
        per_page,
        total_pages,
    }
}

#[test]
fn interval_is_zero_for_empty_result_set() {
    assert_eq!(info(0, 1, 10, 0).interval(), (0, 0));
}

#[test]
fn interval_covers_full_first_page() {
    assert_eq!(info(25, 1, 10, 3).interval(), (1, 10));
}

#[test]
fn interval_end_clamps_to_total_on_last_page() {
    assert_eq!(info(25, 3, 10, 3).interval(), (21, 25));
}

#[test]
fn window_centers_on_current_page() {
    let pages: Vec<u32> = info(100, 5, 10, 10).window().collect();
    assert_eq!(pages, vec![3, 4, 5, 6, 7]);
}

#[test]
fn window_clamps_at_first_page() {
    let pages: Vec<u32> = info(100, 1, 10, 10).window().collect();
    assert_eq!(pages, vec![1, 2, 3]);
}

#[test]
fn window_clamps_at_last_page() {
    let pages: Vec<u32> = info(100, 10, 10, 10).window().collect();
    assert_eq!(pages, vec![8, 9, 10]);
}

#[test]
fn window_never_exceeds_total_pages() {
    let pages: Vec<u32> = info(15, 2, 10, 2).window().collect();
    assert_eq!(pages, vec![1, 2]);
}

#[test]
fn first_page_button_hidden_only_on_first_page() {
    assert!(info(100, 1, 10, 10).hide_first());
    assert!(!info(100, 2, 10, 10).hide_first());
    assert!(!info(100, 10, 10, 10).hide_first());
}

#[test]
fn last_page_button_hidden_only_on_last_page() {
    assert!(info(100, 10, 10, 10).hide_last());
    assert!(!info(100, 9, 10, 10).hide_last());
    assert!(!info(100, 1, 10, 10).hide_last());
}
