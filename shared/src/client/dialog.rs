use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    ValidationError,
    models::{DisplayPeriod, NewShift, UserId},
};

/// Form input of the "Add Shift" dialog, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftShift {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogState {
    Closed,
    Open,
    Submitting,
}

/// A draft that passed validation, with the period its date falls in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidShift {
    pub payload: NewShift,
    pub period: DisplayPeriod,
}

impl DraftShift {
    pub fn with_date(date: NaiveDate) -> Self {
        DraftShift {
            date: date.format("%Y-%m-%d").to_string(),
            ..Default::default()
        }
    }

    /// Checks the draft and builds the creation payload.
    ///
    /// Times are compared as `HH:MM` strings, which orders them the same way
    /// as the clock for times on the same day.
    pub fn validate(&self, user_id: UserId) -> Result<ValidShift, ValidationError> {
        if self.date.is_empty() || self.start_time.is_empty() || self.end_time.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if self.start_time >= self.end_time {
            return Err(ValidationError::StartNotBeforeEnd);
        }
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate)?;
        Ok(ValidShift {
            payload: NewShift {
                user_id,
                date: self.date.clone(),
                start_time: self.start_time.clone(),
                end_time: self.end_time.clone(),
                location: self.location.clone(),
            },
            period: DisplayPeriod::from_date(date),
        })
    }
}
