use platform_host::{ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService};

use crate::external_url::WebExternalUrlService;

/// Adapter enum that erases the concrete navigation backend behind [`ExternalUrlService`].
#[derive(Debug, Clone, Copy)]
pub enum ExternalUrlServiceAdapter {
    /// Browser-backed external URL opening.
    Browser(WebExternalUrlService),
    /// No-op fallback for native builds and tests.
    Headless(NoopExternalUrlService),
}

impl ExternalUrlService for ExternalUrlServiceAdapter {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.open_url(url),
            Self::Headless(service) => service.open_url(url),
        }
    }
}

/// Returns the stable name of the compile-time selected host strategy.
pub const fn host_strategy_name() -> &'static str {
    if cfg!(target_arch = "wasm32") {
        "browser"
    } else {
        "headless"
    }
}

/// Builds the external URL adapter for the compile-time selected host strategy.
pub fn external_url_service() -> ExternalUrlServiceAdapter {
    if cfg!(target_arch = "wasm32") {
        ExternalUrlServiceAdapter::Browser(WebExternalUrlService)
    } else {
        ExternalUrlServiceAdapter::Headless(NoopExternalUrlService)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_builds_select_headless_strategy() {
        assert_eq!(host_strategy_name(), "headless");
        let service = external_url_service();
        assert!(matches!(service, ExternalUrlServiceAdapter::Headless(_)));
        assert_eq!(block_on(service.open_url("https://trymosaic.co")), Ok(()));
    }
}
