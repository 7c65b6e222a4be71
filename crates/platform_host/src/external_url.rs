//! External URL host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin};

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for opening external URLs in a new browsing context.
///
/// Navigation is fire-and-forget from the shell's point of view: callers log failures and move on.
pub trait ExternalUrlService {
    /// Opens `url` outside the desktop shell.
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for targets without a browser.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(&'a self, _url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Default)]
/// In-memory service that records every requested URL instead of navigating.
pub struct RecordingExternalUrlService {
    opened: RefCell<Vec<String>>,
    blocked: bool,
}

impl RecordingExternalUrlService {
    /// Creates a recorder that rejects every request the way a popup blocker would.
    pub fn blocking() -> Self {
        Self {
            opened: RefCell::new(Vec::new()),
            blocked: true,
        }
    }

    /// Returns the URLs requested so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for RecordingExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if self.blocked {
                return Err(format!("navigation to `{url}` was blocked"));
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn noop_service_always_succeeds() {
        assert_eq!(block_on(NoopExternalUrlService.open_url("https://example.com")), Ok(()));
    }

    #[test]
    fn recording_service_keeps_request_order() {
        let service = RecordingExternalUrlService::default();
        block_on(service.open_url("https://trymosaic.co")).expect("open first");
        block_on(service.open_url("mailto:hello@trymosaic.co")).expect("open second");

        assert_eq!(
            service.opened(),
            vec![
                "https://trymosaic.co".to_string(),
                "mailto:hello@trymosaic.co".to_string()
            ]
        );
    }

    #[test]
    fn blocking_service_reports_failure_without_recording() {
        let service = RecordingExternalUrlService::blocking();
        let err = block_on(service.open_url("https://trymosaic.co")).unwrap_err();

        assert!(err.contains("blocked"));
        assert!(service.opened().is_empty());
    }
}
