use desktop_runtime::{DesktopHostContext, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

pub const SITE_TITLE: &str = "Ryan's Portfolio";
pub const SITE_DESCRIPTION: &str =
    "Ryan's personal site, presented as a retro desktop with windows, a taskbar and a start menu.";
/// Path prefix the site is served under.
pub const SITE_BASE: &str = "/ryanhomepage";

/// Absolute href for `path` under [`SITE_BASE`].
pub fn site_path(path: &str) -> String {
    format!("{SITE_BASE}/{}", path.trim_start_matches('/'))
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=SITE_TITLE />
        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Router base=SITE_BASE>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host=DesktopHostContext::default()>
            <DesktopShell />
        </DesktopProvider>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    let path = move || location.pathname.get();

    view! {
        <section class="site-not-found">
            <h1>"404"</h1>
            <p>{move || format!("Nothing lives at {}.", path())}</p>
            <A href=site_path("")>"Back to the desktop"</A>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn site_paths_are_rooted_under_the_base() {
        assert_eq!(site_path(""), "/ryanhomepage/");
        assert_eq!(site_path("/"), "/ryanhomepage/");
        assert_eq!(site_path("essays"), "/ryanhomepage/essays");
        assert_eq!(site_path("/missing/page"), "/ryanhomepage/missing/page");
    }
}
