//! Long-form Russian date formatting.

use chrono::{DateTime, Locale, TimeZone};
use std::fmt;

/// Formats a date as `<weekday>, <day> <month> <year> г.`
///
/// `2026-10-17` → `суббота, 17 октября 2026 г.`
pub fn format_long_date<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format_localized("%A, %-d %B %Y г.", Locale::ru_RU)
        .to_string()
}
