use leptos::prelude::*;

stylance::import_crate_style!(
    #[allow(dead_code)]
    style,
    "src/utils/popup.module.css"
);

/// Modal overlay. Clicking the backdrop asks the owner to dismiss it; the
/// owner decides whether `visible` actually flips.
#[component]
pub fn Popup(
    children: ChildrenFn,
    visible: RwSignal<bool>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class=style::overlay on:click=move |_| on_dismiss.run(())></div>
            <div class=style::popup_content role="dialog">
                {children()}
            </div>
        </Show>
    }
}
