use leptos::prelude::*;
use shared::client::NoticeKind;

use super::{PageSignals, style};
use crate::utils::popup::Popup;

/// Inputs bound to a signal pair: shown value and keystrokes written back.
fn text_input(
    kind: &'static str,
    id: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <input
            type=kind
            id=id
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn AddShiftDialog(
    signals: PageSignals,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Popup visible=signals.dialog_open on_dismiss=on_cancel>
            <form
                class=style::shift_form
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <h3>"Add Shift"</h3>
                <label for="shiftDate">"Date"</label>
                {text_input("date", "shiftDate", signals.date)}
                <label for="shiftStartTime">"Start time"</label>
                {text_input("time", "shiftStartTime", signals.start_time)}
                <label for="shiftEndTime">"End time"</label>
                {text_input("time", "shiftEndTime", signals.end_time)}
                <label for="shiftLocation">"Location"</label>
                {text_input("text", "shiftLocation", signals.location)}
                {move || {
                    signals
                        .message
                        .get()
                        .map(|notice| {
                            let class = match notice.kind {
                                NoticeKind::Error => style::message_error,
                                NoticeKind::Success => style::message_ok,
                            };
                            view! { <p class=class>{notice.text}</p> }
                        })
                }}
                <div class=style::form_actions>
                    <button type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" disabled=move || signals.busy.get()>
                        "Save"
                    </button>
                </div>
            </form>
        </Popup>
    }
}
