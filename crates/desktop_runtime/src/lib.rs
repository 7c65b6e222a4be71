//! Window-manager state machine and Leptos desktop shell for the portfolio site.
//!
//! [`reducer::reduce_desktop`] is the single mutation entry point; everything under
//! [`components`] is a read-only projection of [`model::DesktopState`].

pub mod catalog;
pub mod components;
pub mod content;
mod effect_executor;
pub mod host;
pub mod icons;
pub mod launch;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod start_menu;
pub mod taskbar;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use host::DesktopHostContext;
pub use launch::{LaunchEntry, LaunchTarget};
pub use model::*;
pub use reducer::{
    reduce_desktop, DesktopAction, ReducerError, RuntimeEffect, WindowLifecycleEvent,
};
pub use start_menu::StartMenuAction;
pub use taskbar::{taskbar_entries, TaskbarEntry};
