use chrono::{Duration, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

static CLOCK_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").expect("valid clock regex"));

static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+\d{1,3}[- ]?)?\d{10}$").expect("valid phone regex"));

/// Per-field validation messages, in the order the checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    /// First message recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, msg)| msg.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn min_chars(&mut self, field: &'static str, value: &str, min: usize, message: &str) {
        if value.chars().count() < min {
            self.add(field, message);
        }
    }
}

/// `HH:MM`, 24-hour, zero padded.
pub fn is_clock_time(value: &str) -> bool {
    CLOCK_TIME.is_match(value)
}

pub fn is_phone_number(value: &str) -> bool {
    PHONE_NUMBER.is_match(value)
}

/// Thirty-minute pickup window starting at a suggested `HH:MM` time.
/// Wraps past midnight.
pub fn window_from_suggestion(suggested: &str) -> Option<(String, String)> {
    let start = NaiveTime::parse_from_str(suggested.trim(), "%H:%M").ok()?;
    let (end, _) = start.overflowing_add_signed(Duration::minutes(30));
    Some((
        start.format("%H:%M").to_string(),
        end.format("%H:%M").to_string(),
    ))
}
