use leptos::prelude::*;
use shared::client::{NO_SHIFTS_MESSAGE, TableBody};

use super::style;

#[component]
pub fn ShiftTableView(body: RwSignal<TableBody>) -> impl IntoView {
    view! {
        <table class=style::shift_table>
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Time"</th>
                    <th>"Location"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {move || match body.get() {
                    TableBody::Pending => ().into_any(),
                    TableBody::Rows(rows) => {
                        rows.into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.date}</td>
                                        <td class=style::muted>{row.time_range}</td>
                                        <td class=style::muted>{row.location}</td>
                                        <td>
                                            <span class=style::status>{row.status}</span>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                    TableBody::NoShifts => {
                        view! {
                            <tr>
                                <td colspan="4" class=style::info_row>{NO_SHIFTS_MESSAGE}</td>
                            </tr>
                        }
                            .into_any()
                    }
                    TableBody::Failed(text) => {
                        view! {
                            <tr>
                                <td colspan="4" class=style::error_row>{text}</td>
                            </tr>
                        }
                            .into_any()
                    }
                }}
            </tbody>
        </table>
    }
}
