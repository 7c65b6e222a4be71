use leptos::*;
use system_ui::ShutdownScreen;

use super::use_desktop_runtime;

#[component]
pub(super) fn ShutdownOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <Show when=move || runtime.state.with(|desktop| desktop.shut_down)>
            <ShutdownScreen>
                <p class="shutdown-message">"It's now safe to turn off your computer."</p>
                <p class="shutdown-hint">"Press any key to start again."</p>
            </ShutdownScreen>
        </Show>
    }
}
