//! Reveal options and their `data-reveal` attribute encoding.
//!
//! The encoding is a space-separated list: the direction first, then
//! `key=value` pairs and the bare `once` flag, e.g. `left t=0.25 delay=120 once`.

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;

use std::fmt;
use std::str::FromStr;

pub const DEFAULT_THRESHOLD: f64 = 0.12;
pub const DEFAULT_DEBOUNCE_MS: u32 = 80;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RevealParseError {
    #[error("empty reveal attribute")]
    Empty,
    #[error("unknown reveal direction: {0}")]
    UnknownDirection(String),
    #[error("unknown reveal option: {0}")]
    UnknownOption(String),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Entry motion applied by the stylesheet while the element is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    Fade,
    Scale,
}

impl Direction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Fade => "fade",
            Self::Scale => "scale",
        }
    }

    /// Alternate left/right by position, used by timelines.
    #[must_use]
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 { Self::Left } else { Self::Right }
    }
}

impl FromStr for Direction {
    type Err = RevealParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "fade" => Ok(Self::Fade),
            "scale" => Ok(Self::Scale),
            other => Err(RevealParseError::UnknownDirection(other.to_owned())),
        }
    }
}

/// How and when one element reveals itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub direction: Direction,
    /// Minimum visible ratio, clamped to `0.0..=1.0`.
    pub threshold: f64,
    /// Stay revealed after the first entrance.
    pub once: bool,
    /// Transition delay applied by the stylesheet.
    pub delay_ms: u32,
    /// Visibility must hold this long before a transition fires.
    pub debounce_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            direction: Direction::Up,
            threshold: DEFAULT_THRESHOLD,
            once: false,
            delay_ms: 0,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl RevealOptions {
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self { direction, ..Self::default() }
    }

    #[must_use]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = clamp_threshold(threshold);
        self
    }

    #[must_use]
    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }

    #[must_use]
    pub fn delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Stagger delay for the `index`-th item of a list.
    #[must_use]
    pub fn staggered(self, index: usize, step_ms: u32) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_ms(index.saturating_mul(step_ms))
    }

    #[must_use]
    pub fn debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Encode as a `data-reveal` attribute value. Defaults are omitted.
    #[must_use]
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Parse a `data-reveal` attribute value.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty value, an unknown direction or option,
    /// or a value that does not parse.
    pub fn decode(raw: &str) -> Result<Self, RevealParseError> {
        let mut tokens = raw.split_whitespace();
        let direction = tokens.next().ok_or(RevealParseError::Empty)?.parse()?;
        let mut options = Self::new(direction);

        for token in tokens {
            if token == "once" {
                options.once = true;
                continue;
            }
            let Some((key, value)) = token.split_once('=') else {
                return Err(RevealParseError::UnknownOption(token.to_owned()));
            };
            match key {
                "t" => options.threshold = clamp_threshold(parse_value(key, value)?),
                "delay" => options.delay_ms = parse_value(key, value)?,
                "debounce" => options.debounce_ms = parse_value(key, value)?,
                other => return Err(RevealParseError::UnknownOption(other.to_owned())),
            }
        }

        Ok(options)
    }

    /// Inline style carrying the stagger delay, if any.
    #[must_use]
    pub fn style(&self) -> String {
        if self.delay_ms == 0 {
            String::new()
        } else {
            format!("--reveal-delay: {}ms", self.delay_ms)
        }
    }
}

impl fmt::Display for RevealOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.direction.as_str())?;
        if (self.threshold - DEFAULT_THRESHOLD).abs() > f64::EPSILON {
            write!(f, " t={}", self.threshold)?;
        }
        if self.delay_ms != 0 {
            write!(f, " delay={}", self.delay_ms)?;
        }
        if self.debounce_ms != DEFAULT_DEBOUNCE_MS {
            write!(f, " debounce={}", self.debounce_ms)?;
        }
        if self.once {
            f.write_str(" once")?;
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, RevealParseError> {
    value
        .parse()
        .map_err(|_| RevealParseError::InvalidValue { key: key.to_owned(), value: value.to_owned() })
}

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() { DEFAULT_THRESHOLD } else { threshold.clamp(0.0, 1.0) }
}
