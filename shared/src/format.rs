use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{
    Locale,
    models::{DisplayPeriod, Shift},
};

pub const LOCATION_PLACEHOLDER: &str = "N/A";
pub const DEFAULT_STATUS: &str = "Confirmed";

/// A shift ready for display, one table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRow {
    pub date: String,
    pub time_range: String,
    pub location: String,
    pub status: String,
}

impl ShiftRow {
    pub fn from_shift(shift: &Shift, locale: Locale) -> Self {
        ShiftRow {
            date: short_date(&shift.date, locale),
            time_range: format!(
                "{} - {}",
                short_time(&shift.start_time),
                short_time(&shift.end_time)
            ),
            location: shift
                .location
                .as_deref()
                .filter(|location| !location.is_empty())
                .unwrap_or(LOCATION_PLACEHOLDER)
                .to_string(),
            status: shift
                .status
                .as_deref()
                .filter(|status| !status.is_empty())
                .unwrap_or(DEFAULT_STATUS)
                .to_string(),
        }
    }
}

/// Page heading for a period, e.g. `"Ottobre 2024"`.
pub fn period_heading(period: DisplayPeriod, locale: Locale) -> String {
    let name = locale.month_names()[period.month() as usize - 1];
    let mut chars = name.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!("{} {}", capitalized, period.year())
}

/// `"2024-10-05"` becomes `"5 ott"` (Italian) or `"5 Oct"` (English).
pub fn short_date(date: &str, locale: Locale) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(date) => {
            let month = locale.short_month_names()[date.month0() as usize];
            format!("{} {}", date.day(), month.trim_end_matches('.'))
        }
        Err(e) => {
            tracing::warn!("Shift date {:?} is not a calendar date: {}", date, e);
            date.to_string()
        }
    }
}

/// Renders a time of day as 24-hour `HH:MM`, accepting `HH:MM` or `HH:MM:SS`.
pub fn short_time(time: &str) -> String {
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|e| {
            tracing::warn!("Shift time {:?} is not a time of day: {}", time, e);
            time.to_string()
        })
}
