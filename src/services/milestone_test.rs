use super::*;
use time::Month;

fn milestone(year: &str, title: &str) -> Milestone {
    Milestone { year: year.into(), title: title.into(), description: String::new() }
}

#[test]
fn present_range_displays_and_is_current() {
    let range = YearRange::parse("04/03/2024-present");
    assert_eq!(range.start, "04/03/2024");
    assert_eq!(range.end, Some("present"));
    assert_eq!(range.display(), "04/03/2024 — Present");
    assert!(range.is_current());
}

#[test]
fn closed_range_displays_both_dates() {
    let range = YearRange::parse("04/03/2024-05/04/2025");
    assert_eq!(range.display(), "04/03/2024 — 05/04/2025");
    assert!(!range.is_current());
}

#[test]
fn sentinel_match_ignores_case() {
    assert!(YearRange::parse("01/01/2023-Present").is_current());
    assert!(YearRange::parse("01/01/2023-PRESENT").is_current());
    assert!(!YearRange::parse("01/01/2023-presently").is_current());
}

#[test]
fn hyphenated_start_is_not_split() {
    let range = YearRange::parse("04-03-2024-present");
    assert_eq!(range.start, "04-03-2024");
    assert!(range.is_current());
    assert_eq!(range.start_date(), None);
}

#[test]
fn start_date_parses_day_month_year() {
    let date = YearRange::parse("04/03/2024-present").start_date().unwrap();
    assert_eq!(date.day(), 4);
    assert_eq!(date.month(), Month::March);
    assert_eq!(date.year(), 2024);
}

#[test]
fn malformed_input_degrades() {
    let range = YearRange::parse("sometime");
    assert_eq!(range.end, None);
    assert_eq!(range.display(), "sometime");
    assert_eq!(range.start_date(), None);
    assert!(!range.is_current());

    let trailing = YearRange::parse("04/03/2024-");
    assert_eq!(trailing.end, None);
    assert_eq!(trailing.display(), "04/03/2024");

    assert_eq!(YearRange::parse("").display(), "");
    assert_eq!(YearRange::parse("31/02/2024-present").start_date(), None);
}

#[test]
fn multibyte_text_does_not_panic() {
    let range = YearRange::parse("четыре-марта-present");
    assert!(range.start_date().is_none());
}

#[test]
fn sort_orders_newest_first_and_unparseable_last() {
    let mut items = vec![
        milestone("junk", "junk"),
        milestone("04/03/2024-05/04/2025", "evd"),
        milestone("10/05/2025-05/07/2025", "dheera"),
        milestone("01/01/2019-31/12/2020", "old"),
        milestone("15/08/2025-present", "now"),
    ];
    sort_newest_first(&mut items);
    let titles: Vec<&str> = items.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["now", "dheera", "evd", "old", "junk"]);
}

#[test]
fn sorted_starts_are_non_increasing() {
    let mut items: Vec<Milestone> = (1..=12)
        .map(|m| milestone(&format!("01/{m:02}/20{}-present", 10 + (m * 7) % 13), "x"))
        .chain(std::iter::once(milestone("??", "bad")))
        .collect();
    sort_newest_first(&mut items);
    let starts: Vec<Option<Date>> = items.iter().map(|m| YearRange::parse(&m.year).start_date()).collect();
    assert!(starts.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(starts.last(), Some(&None));
}

#[test]
fn sort_is_stable_for_equal_starts() {
    let mut items = vec![milestone("bad-one", "first"), milestone("bad-two", "second")];
    sort_newest_first(&mut items);
    assert_eq!(items[0].title, "first");
    assert_eq!(items[1].title, "second");
}

#[test]
fn timeline_entry_marks_current() {
    let entry = TimelineEntry::from(&milestone("04/03/2024-present", "Acme"));
    assert_eq!(entry.period, "04/03/2024 — Present");
    assert!(entry.current);
    let entry = TimelineEntry::from(&milestone("04/03/2024-05/04/2025", "Acme"));
    assert!(!entry.current);
}
