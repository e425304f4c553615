//! Inline emphasis for biography text.
//!
//! A phrase wrapped in square brackets is highlighted: `I build [fast] sites`.
//! An opening bracket without a closing one, and an empty `[]`, stay literal.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Highlight(&'a str),
}

#[must_use]
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(open) = text[cursor..].find('[').map(|i| cursor + i) {
        let Some(close) = text[open + 1..].find(']').map(|i| open + 1 + i) else {
            break;
        };
        if close == open + 1 {
            cursor = close + 1;
            continue;
        }
        if open > plain_start {
            out.push(Segment::Plain(&text[plain_start..open]));
        }
        out.push(Segment::Highlight(&text[open + 1..close]));
        plain_start = close + 1;
        cursor = plain_start;
    }

    if plain_start < text.len() {
        out.push(Segment::Plain(&text[plain_start..]));
    }
    out
}
