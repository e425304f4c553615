//! Year-range parsing, ordering and display for Experience milestones.
//!
//! A range is `DD/MM/YYYY-DD/MM/YYYY` or `DD/MM/YYYY-present`. The separator
//! is searched from the width of one date onwards so a start date written
//! with hyphens is never split. Anything unparseable degrades: the start
//! has no date (sorting last) and the text displays as given.

#[cfg(test)]
#[path = "milestone_test.rs"]
mod tests;

use std::cmp::Reverse;

use time::Date;
use time::macros::format_description;

use crate::content::Milestone;

pub const PRESENT_SENTINEL: &str = "present";
const START_DATE_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange<'a> {
    pub start: &'a str,
    pub end: Option<&'a str>,
}

impl<'a> YearRange<'a> {
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let raw = raw.trim();
        let separator = raw
            .char_indices()
            .find(|&(i, c)| i >= START_DATE_WIDTH && c == '-')
            .map(|(i, _)| i);

        match separator {
            Some(i) => {
                let end = raw[i + 1..].trim();
                Self { start: raw[..i].trim(), end: (!end.is_empty()).then_some(end) }
            }
            None => Self { start: raw, end: None },
        }
    }

    /// Parsed start date, `None` when it does not match `DD/MM/YYYY`.
    #[must_use]
    pub fn start_date(&self) -> Option<Date> {
        Date::parse(self.start, format_description!("[day]/[month]/[year]")).ok()
    }

    /// True when the range is open-ended.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.end.is_some_and(|end| end.eq_ignore_ascii_case(PRESENT_SENTINEL))
    }

    /// `start — end`, with the sentinel shown as `Present`.
    #[must_use]
    pub fn display(&self) -> String {
        match self.end {
            Some(_) if self.is_current() => format!("{} — Present", self.start),
            Some(end) => format!("{} — {end}", self.start),
            None => self.start.to_owned(),
        }
    }
}

/// A milestone ready for the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub period: String,
    pub current: bool,
    pub title: String,
    pub description: String,
}

impl From<&Milestone> for TimelineEntry {
    fn from(milestone: &Milestone) -> Self {
        let range = YearRange::parse(&milestone.year);
        Self {
            period: range.display(),
            current: range.is_current(),
            title: milestone.title.clone(),
            description: milestone.description.clone(),
        }
    }
}

/// Stable sort, newest start first; unparseable starts last.
pub fn sort_newest_first(milestones: &mut [Milestone]) {
    milestones.sort_by_cached_key(|m| Reverse(YearRange::parse(&m.year).start_date()));
}
