mod web_app;

pub use web_app::{
    site_path, DesktopEntry, NotFound, SiteApp, SITE_BASE, SITE_DESCRIPTION, SITE_TITLE,
};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
