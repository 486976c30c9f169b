mod app;
mod shifts;
pub mod utils;

use app::*;
use leptos::prelude::*;


fn main() {
    console_error_panic_hook::set_once();
    utils::logging::init();
    mount_to_body(|| {
        view! { <App /> }
    })
}
