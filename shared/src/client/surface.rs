use serde::{Deserialize, Serialize};

use super::DraftShift;
use crate::{format::ShiftRow, models::DisplayPeriod};

pub const NO_SHIFTS_MESSAGE: &str = "No shifts scheduled for this month.";

/// Full content of the shift table body. Every render replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableBody {
    /// Cleared while a request is outstanding.
    Pending,
    Rows(Vec<ShiftRow>),
    NoShifts,
    Failed(String),
}

impl TableBody {
    /// Number of `<tr>` the body renders to.
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Pending => 0,
            TableBody::Rows(rows) => rows.len(),
            TableBody::NoShifts | TableBody::Failed(_) => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Error, text: text.into() }
    }
}

/// Where a notice ends up: next to the open dialog, or as a blocking page alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeTarget {
    Dialog,
    Page,
}

pub trait ShiftTable {
    fn replace(&self, body: TableBody);
    /// Called right before a loaded body is rendered, with the period it belongs to.
    fn set_period(&self, _period: DisplayPeriod) {}
}

pub trait DialogRegion {
    fn set_open(&self, open: bool);
    /// Disables the submit trigger while a creation request is outstanding.
    fn set_busy(&self, busy: bool);
}

pub trait ShiftForm {
    fn read(&self) -> DraftShift;
    fn write(&self, draft: &DraftShift);
}

pub trait NoticeChannel {
    fn show(&self, target: NoticeTarget, notice: Notice);
    fn clear(&self, target: NoticeTarget);
}
