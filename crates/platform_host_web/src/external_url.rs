//! External URL adapter for the browser host.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

/// Browsing-context target used for every external link.
pub const EXTERNAL_URL_TARGET: &str = "_blank";

#[derive(Debug, Clone, Copy, Default)]
/// Browser external URL adapter backed by `window.open`.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move { open_in_new_context(url) })
    }
}

#[cfg(target_arch = "wasm32")]
fn open_in_new_context(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "browser window unavailable".to_string())?;
    match window.open_with_url_and_target(url, EXTERNAL_URL_TARGET) {
        Ok(Some(_)) => Ok(()),
        // `window.open` returns null when a popup blocker intervenes.
        Ok(None) => Err(format!("opening `{url}` was blocked by the browser")),
        Err(err) => Err(format!("window.open failed: {err:?}")),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_in_new_context(url: &str) -> Result<(), String> {
    Err(format!(
        "external navigation to `{url}` requires the browser host"
    ))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_targets_report_unsupported_navigation() {
        let err = block_on(WebExternalUrlService.open_url("https://trymosaic.co")).unwrap_err();
        assert!(err.contains("https://trymosaic.co"));
    }
}
