use chrono::{Local, NaiveDate};

use crate::{Locale, models::DisplayPeriod};

/// Source of "today" for period fallback and form pre-fill.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Parses a "Month Year" heading such as `"Ottobre 2024"`.
///
/// The label must split into exactly two tokens, the first a full month name
/// of `locale` (any case) and the second an integer year.
pub fn parse_period_label(label: &str, locale: Locale) -> Option<DisplayPeriod> {
    let mut tokens = label.split_whitespace();
    let (Some(month), Some(year), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return None;
    };
    let month = locale.month_number(month)?;
    let year = year.parse::<i32>().ok()?;
    DisplayPeriod::new(year, month)
}

/// Initial period for the page: the heading when it parses, today otherwise.
pub fn resolve_period(label: Option<&str>, locale: Locale, today: NaiveDate) -> DisplayPeriod {
    match label.and_then(|label| parse_period_label(label, locale)) {
        Some(period) => period,
        None => {
            tracing::debug!("Period label {:?} not usable, falling back to {}", label, today);
            DisplayPeriod::from_date(today)
        }
    }
}
