use super::*;

#[test]
fn page_count_is_ceiling() {
    assert_eq!(Pagination::new(0, 6).page_count(), 0);
    assert_eq!(Pagination::new(1, 6).page_count(), 1);
    assert_eq!(Pagination::new(6, 6).page_count(), 1);
    assert_eq!(Pagination::new(7, 6).page_count(), 2);
    assert_eq!(Pagination::new(13, 6).page_count(), 3);
}

#[test]
fn zero_page_size_is_one() {
    let pages = Pagination::new(3, 0);
    assert_eq!(pages.page_count(), 3);
}

#[test]
fn out_of_range_pages_clamp() {
    let pages = Pagination::new(13, 6);
    assert_eq!(pages.clamp(0), 1);
    assert_eq!(pages.clamp(99), 3);
    assert_eq!(pages.range(99), 12..13);
    assert_eq!(Pagination::new(0, 6).range(5), 0..0);
}

#[test]
fn ranges_cover_items_without_overlap() {
    for total in 0..40 {
        for per_page in 1..9 {
            let pages = Pagination::new(total, per_page);
            let mut next = 0;
            for page in 1..=pages.page_count() {
                let range = pages.range(page);
                assert_eq!(range.start, next, "gap or overlap at total={total} per_page={per_page}");
                assert!(!range.is_empty());
                assert!(range.len() <= per_page);
                next = range.end;
            }
            assert_eq!(next, total);
        }
    }
}

#[test]
fn slice_returns_page_items() {
    let items: Vec<u32> = (0..10).collect();
    let pages = Pagination::new(items.len(), 4);
    assert_eq!(pages.slice(&items, 1), &[0, 1, 2, 3]);
    assert_eq!(pages.slice(&items, 3), &[8, 9]);
}

#[test]
fn previous_and_next_flags() {
    let pages = Pagination::new(10, 4);
    assert!(!pages.has_previous(1));
    assert!(pages.has_next(1));
    assert!(pages.has_previous(3));
    assert!(!pages.has_next(3));
    assert!(!Pagination::new(0, 4).has_next(1));
}
