//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; navigation, DOM focus, and viewport queries live behind this
//! typed boundary so tests can inject a recording URL service.

use std::rc::Rc;

use leptos::{logging, spawn_local};
use platform_host::ExternalUrlService;
use platform_host_web::{external_url_service, host_strategy_name};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::{
    model::{Viewport, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH},
    reducer::RuntimeEffect,
};

/// DOM id of the focusable desktop root.
pub const SHELL_ROOT_ID: &str = "desktop-shell-root";

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    external_urls: Rc<dyn ExternalUrlService>,
    host_strategy_name: &'static str,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self {
            external_urls: Rc::new(external_url_service()),
            host_strategy_name: host_strategy_name(),
        }
    }
}

impl DesktopHostContext {
    /// Builds a host bundle around an explicit URL service.
    pub fn new(external_urls: Rc<dyn ExternalUrlService>, host_strategy_name: &'static str) -> Self {
        Self {
            external_urls,
            host_strategy_name,
        }
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.external_urls.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    ///
    /// Window lifecycle effects are an observation hook only: the built-in window bodies are
    /// static and keep no per-window state, so no content subscribes to them. Debug builds log
    /// them to the console.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::OpenExternalUrl(url) => self.open_external_url(url),
            RuntimeEffect::WindowLifecycle { window_id, event } => {
                if cfg!(debug_assertions) {
                    logging::log!("window `{window_id}` lifecycle: {event:?}");
                }
            }
            RuntimeEffect::FocusShellRoot => focus_shell_root(),
        }
    }

    /// Opens `url` outside the shell. Failures such as a blocked popup are logged and dropped.
    pub fn open_external_url(&self, url: String) {
        let service = self.external_url_service();
        spawn_local(async move {
            if let Err(err) = service.open_url(&url).await {
                logging::warn!("open external url failed for `{url}`: {err}");
            }
        });
    }

    /// Returns the desktop area available to windows, excluding the taskbar.
    pub fn desktop_viewport(&self, taskbar_height_px: i32) -> Viewport {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(DEFAULT_VIEWPORT_WIDTH);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(DEFAULT_VIEWPORT_HEIGHT);

                return Viewport {
                    w: width.max(320),
                    h: (height - taskbar_height_px).max(220),
                };
            }
        }

        Viewport {
            w: DEFAULT_VIEWPORT_WIDTH,
            h: DEFAULT_VIEWPORT_HEIGHT - taskbar_height_px,
        }
    }
}

fn focus_shell_root() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(SHELL_ROOT_ID))
        else {
            return;
        };
        if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = element.focus();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::WindowId, reducer::WindowLifecycleEvent};

    #[test]
    fn native_viewport_subtracts_taskbar() {
        let host = DesktopHostContext::default();
        assert_eq!(
            host.desktop_viewport(38),
            Viewport {
                w: DEFAULT_VIEWPORT_WIDTH,
                h: DEFAULT_VIEWPORT_HEIGHT - 38
            }
        );
        assert_eq!(host.host_strategy_name(), "headless");
    }

    #[test]
    fn lifecycle_effects_do_not_reach_host_services() {
        let urls = Rc::new(platform_host::RecordingExternalUrlService::default());
        let host = DesktopHostContext::new(urls.clone(), "recording");

        for event in [
            WindowLifecycleEvent::Focused,
            WindowLifecycleEvent::Minimized,
            WindowLifecycleEvent::Closed,
        ] {
            host.run_runtime_effect(RuntimeEffect::WindowLifecycle {
                window_id: WindowId::from("about"),
                event,
            });
        }

        assert!(urls.opened().is_empty());
        assert_eq!(host.host_strategy_name(), "recording");
    }
}
