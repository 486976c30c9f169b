mod dialog;
mod table;

use std::rc::Rc;

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::client::{
    DialogRegion, DraftShift, Notice, NoticeChannel, NoticeTarget, ShiftForm, ShiftTable,
    Surfaces, TableBody,
};
use shared::format::period_heading;
use shared::models::{DisplayPeriod, Session};
use shared::{ClientConfig, HttpShiftApi, Locale, ShiftSyncClient, SystemClock};

use crate::utils::alert;
use dialog::AddShiftDialog;
use table::ShiftTableView;

stylance::import_crate_style!(
    #[allow(dead_code)]
    style,
    "src/shifts/shifts.module.css"
);

/// Reactive state the sync client writes into. Every field is a signal, so
/// the bundle is `Copy` and can be handed to each surface slot.
#[derive(Clone, Copy)]
pub struct PageSignals {
    pub period: RwSignal<Option<DisplayPeriod>>,
    pub table: RwSignal<TableBody>,
    pub dialog_open: RwSignal<bool>,
    pub busy: RwSignal<bool>,
    pub date: RwSignal<String>,
    pub start_time: RwSignal<String>,
    pub end_time: RwSignal<String>,
    pub location: RwSignal<String>,
    pub message: RwSignal<Option<Notice>>,
}

impl PageSignals {
    fn new() -> Self {
        Self {
            period: RwSignal::new(None),
            table: RwSignal::new(TableBody::Pending),
            dialog_open: RwSignal::new(false),
            busy: RwSignal::new(false),
            date: RwSignal::new(String::new()),
            start_time: RwSignal::new(String::new()),
            end_time: RwSignal::new(String::new()),
            location: RwSignal::new(String::new()),
            message: RwSignal::new(None),
        }
    }

    fn surfaces(self) -> Surfaces {
        Surfaces {
            table: Box::new(self),
            dialog: Box::new(self),
            form: Box::new(self),
            notices: Box::new(self),
        }
    }
}

impl ShiftTable for PageSignals {
    fn replace(&self, body: TableBody) {
        self.table.set(body);
    }

    fn set_period(&self, period: DisplayPeriod) {
        self.period.set(Some(period));
    }
}

impl DialogRegion for PageSignals {
    fn set_open(&self, open: bool) {
        self.dialog_open.set(open);
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }
}

impl ShiftForm for PageSignals {
    fn read(&self) -> DraftShift {
        DraftShift {
            date: self.date.get_untracked(),
            start_time: self.start_time.get_untracked(),
            end_time: self.end_time.get_untracked(),
            location: self.location.get_untracked(),
        }
    }

    fn write(&self, draft: &DraftShift) {
        self.date.set(draft.date.clone());
        self.start_time.set(draft.start_time.clone());
        self.end_time.set(draft.end_time.clone());
        self.location.set(draft.location.clone());
    }
}

impl NoticeChannel for PageSignals {
    fn show(&self, target: NoticeTarget, notice: Notice) {
        match target {
            NoticeTarget::Dialog => self.message.set(Some(notice)),
            NoticeTarget::Page => alert(&notice.text),
        }
    }

    fn clear(&self, target: NoticeTarget) {
        if target == NoticeTarget::Dialog {
            self.message.set(None);
        }
    }
}

#[component]
pub fn ShiftsPage(session: Session, config: ClientConfig, label: Option<String>) -> impl IntoView {
    let signals = PageSignals::new();
    let locale: Locale = config.locale;

    let api = match HttpShiftApi::new(&config) {
        Ok(api) => api,
        Err(e) => {
            error!("Cannot reach the shift service: {}", e);
            return view! { <p class=style::page_error>{e.to_string()}</p> }.into_any();
        }
    };
    let username = session.profile.username.clone();
    let client = Rc::new(ShiftSyncClient::new(
        session,
        Box::new(api),
        signals.surfaces(),
        Box::new(SystemClock),
        locale,
    ));
    let client = StoredValue::new_local(client);

    spawn_local(async move {
        let client = client.get_value();
        client.start(label.as_deref()).await;
    });

    let on_add = move |_| client.with_value(|client| client.open_dialog());
    let on_cancel = Callback::new(move |_: ()| client.with_value(|client| client.cancel()));
    let on_submit = Callback::new(move |_: ()| {
        let client = client.get_value();
        spawn_local(async move {
            if let Err(e) = client.submit().await {
                log!("Shift submission ended with: {}", e);
            }
        });
    });

    view! {
        <section class=style::shifts_page>
            <header class=style::shifts_header>
                <h2>
                    {move || signals.period.get().map(|period| period_heading(period, locale))}
                </h2>
                {username.map(|name| view! { <span class=style::username>{name}</span> })}
                <button type="button" class=style::add_button on:click=on_add>
                    <span>"Add Shift"</span>
                </button>
            </header>
            <ShiftTableView body=signals.table />
            <AddShiftDialog signals=signals on_submit=on_submit on_cancel=on_cancel />
        </section>
    }
    .into_any()
}
