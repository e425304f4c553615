//! Deterministic accent colors for cards and detail pages.

#[cfg(test)]
#[path = "accent_test.rs"]
mod tests;

/// Sum of character codes modulo `len`. Returns 0 for an empty palette.
#[must_use]
pub fn accent_index(id: &str, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let sum = id.chars().fold(0u64, |acc, c| acc.wrapping_add(u64::from(u32::from(c))));
    usize::try_from(sum % len as u64).unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette(&'static [&'static str]);

impl Palette {
    /// Project detail header and section accents.
    pub const DETAIL: Self = Self(&["#FFCDD2", "#FFCC80", "#FFF59D", "#A5D6A7", "#90CAF9", "#CE93D8", "#80DEEA", "#BCAAA4"]);
    /// Project card backgrounds.
    pub const PROJECT_CARDS: Self = Self(&["#FF5252", "#FF9800", "#ffff11", "#FBC02D", "#CE93D8", "#ffffff"]);
    /// Skill card borders.
    pub const SKILL_CARDS: Self = Self(&["#38bdf8", "#a78bfa", "#34d399", "#fb923c", "#f472b6", "#facc15", "#60a5fa", "#4ade80"]);

    /// Color keyed by a record id.
    #[must_use]
    pub fn for_id(self, id: &str) -> &'static str {
        self.for_index(accent_index(id, self.0.len()))
    }

    /// Color cycling by position.
    #[must_use]
    pub fn for_index(self, index: usize) -> &'static str {
        if self.0.is_empty() {
            return "";
        }
        self.0[index % self.0.len()]
    }
}
