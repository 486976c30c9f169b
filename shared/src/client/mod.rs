//! The fetch-render-create cycle behind the shifts page.
//!
//! `ShiftSyncClient` owns the table content and the "Add Shift" dialog. It
//! never touches the DOM directly: the page hands it a `Surfaces` bundle of
//! trait objects and the client pushes complete states into them.

mod dialog;
mod surface;

use std::cell::Cell;

pub use dialog::*;
pub use surface::*;

use crate::{
    Error, Locale,
    api::ShiftApi,
    format::ShiftRow,
    models::{DisplayPeriod, Session, ShiftQuery},
    period::{Clock, resolve_period},
};

pub const SHIFT_ADDED_MESSAGE: &str = "Shift added successfully!";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to add the shift.";
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection or API error.";

pub struct Surfaces {
    pub table: Box<dyn ShiftTable>,
    pub dialog: Box<dyn DialogRegion>,
    pub form: Box<dyn ShiftForm>,
    pub notices: Box<dyn NoticeChannel>,
}

pub struct ShiftSyncClient {
    session: Session,
    api: Box<dyn ShiftApi>,
    surfaces: Surfaces,
    clock: Box<dyn Clock>,
    locale: Locale,
    period: Cell<Option<DisplayPeriod>>,
    dialog: Cell<DialogState>,
}

impl ShiftSyncClient {
    pub fn new(
        session: Session,
        api: Box<dyn ShiftApi>,
        surfaces: Surfaces,
        clock: Box<dyn Clock>,
        locale: Locale,
    ) -> Self {
        Self {
            session,
            api,
            surfaces,
            clock,
            locale,
            period: Cell::new(None),
            dialog: Cell::new(DialogState::Closed),
        }
    }

    /// Period of the rows currently rendered.
    pub fn period(&self) -> Option<DisplayPeriod> {
        self.period.get()
    }

    pub fn dialog_state(&self) -> DialogState {
        self.dialog.get()
    }

    /// Resolves the initial period from the page heading and renders it.
    pub async fn start(&self, label: Option<&str>) -> DisplayPeriod {
        let period = resolve_period(label, self.locale, self.clock.today());
        tracing::info!("Displaying shifts for {}", period);
        self.load_period(period).await;
        period
    }

    /// Fetches the user's shifts for `period` and replaces the table body.
    ///
    /// The table is cleared before the request goes out so that rows from a
    /// previous period are never visible next to a pending one. The period is
    /// committed together with the body: when two loads overlap, whichever
    /// response lands last owns both the rows and the heading.
    pub async fn load_period(&self, period: DisplayPeriod) {
        self.surfaces.table.replace(TableBody::Pending);

        let query = ShiftQuery {
            user_id: self.session.user_id,
            year: period.year(),
            month: period.month(),
        };
        let body = match self.api.list_shifts(query).await {
            Ok(shifts) if shifts.is_empty() => TableBody::NoShifts,
            Ok(shifts) => TableBody::Rows(
                shifts
                    .iter()
                    .map(|shift| ShiftRow::from_shift(shift, self.locale))
                    .collect(),
            ),
            Err(e) => {
                tracing::error!("Failed to fetch shifts for {}: {}", period, e);
                TableBody::Failed(format!("Failed to load shifts: {}", e))
            }
        };
        tracing::debug!("Rendering {} row(s) for {}", body.row_count(), period);
        self.period.set(Some(period));
        self.surfaces.table.set_period(period);
        self.surfaces.table.replace(body);
    }

    /// "Add Shift" pressed: pre-fill today's date and show the dialog.
    pub fn open_dialog(&self) {
        if self.dialog.get() == DialogState::Submitting {
            tracing::debug!("Ignoring open while a shift is being submitted");
            return;
        }
        self.surfaces
            .form
            .write(&DraftShift::with_date(self.clock.today()));
        self.surfaces.dialog.set_open(true);
        self.dialog.set(DialogState::Open);
    }

    pub fn cancel(&self) {
        match self.dialog.get() {
            DialogState::Submitting => {
                tracing::debug!("Ignoring cancel while a shift is being submitted");
            }
            DialogState::Open | DialogState::Closed => self.close_dialog(),
        }
    }

    /// Validates the draft, creates the shift and refreshes the period the new
    /// shift belongs to, which may differ from the one on screen.
    ///
    /// Every failure is also surfaced through the notice channel; the returned
    /// error is for logging.
    pub async fn submit(&self) -> Result<(), Error> {
        match self.dialog.get() {
            DialogState::Open => {}
            DialogState::Submitting => {
                tracing::warn!("Rejecting re-entrant shift submission");
                return Err(Error::SubmissionInFlight);
            }
            DialogState::Closed => {
                tracing::warn!("Submit received while the dialog is closed");
                return Ok(());
            }
        }
        self.surfaces.notices.clear(NoticeTarget::Dialog);

        let draft = self.surfaces.form.read();
        let valid = match draft.validate(self.session.user_id) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::debug!("Draft rejected: {}", e);
                self.notify(Notice::error(e.to_string()));
                return Err(e.into());
            }
        };

        self.dialog.set(DialogState::Submitting);
        self.surfaces.dialog.set_busy(true);
        let result = self.api.create_shift(&valid.payload).await;
        self.surfaces.dialog.set_busy(false);

        match result {
            Ok(created) => {
                tracing::info!(
                    "Shift created on {}: {}",
                    valid.payload.date,
                    created.message.as_deref().unwrap_or("no message")
                );
                self.close_dialog();
                self.notify(Notice::success(SHIFT_ADDED_MESSAGE));
                self.load_period(valid.period).await;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to create shift: {}", e);
                self.dialog.set(DialogState::Open);
                let text = match (&e, e.server_message()) {
                    (_, Some(message)) => message,
                    (Error::Rejected { .. }, None) => CREATE_FAILED_MESSAGE,
                    _ => CONNECTION_ERROR_MESSAGE,
                };
                self.notify(Notice::error(text));
                Err(e)
            }
        }
    }

    fn close_dialog(&self) {
        self.surfaces.form.write(&DraftShift::default());
        self.surfaces.notices.clear(NoticeTarget::Dialog);
        self.surfaces.dialog.set_open(false);
        self.dialog.set(DialogState::Closed);
    }

    fn notify(&self, notice: Notice) {
        let target = match self.dialog.get() {
            DialogState::Closed => NoticeTarget::Page,
            DialogState::Open | DialogState::Submitting => NoticeTarget::Dialog,
        };
        self.surfaces.notices.show(target, notice);
    }
}
