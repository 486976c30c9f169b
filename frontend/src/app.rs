use leptos::logging::error;
use leptos::prelude::*;
use shared::{Error, check_session};

use crate::shifts::ShiftsPage;
use crate::utils::{BrowserStorage, page_config, page_period_label, redirect};

/// Gate for the whole page: nothing below renders without a stored session.
#[component]
pub fn App() -> impl IntoView {
    let config = page_config();
    let session = BrowserStorage::local()
        .ok_or(Error::SessionMissing)
        .and_then(|storage| check_session(&storage, &config));

    match session {
        Ok(session) => {
            let label = page_period_label();
            view! {
                <main>
                    <ShiftsPage session=session config=config label=label />
                </main>
            }
            .into_any()
        }
        Err(e) => {
            error!("Session check failed: {}", e);
            redirect(&config.login_path);
            ().into_any()
        }
    }
}
