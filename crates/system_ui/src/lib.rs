//! Shared UI primitive library for the retro desktop shell.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable `data-ui-*`
//! DOM contract consumed by the desktop stylesheet. Shell components compose these primitives
//! instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer,
    ListItemButton, ListSurface, MenuItem, MenuSeparator, MenuSurface, ResizeHandle,
    ShutdownScreen, Taskbar, TaskbarButton, TaskbarSection, TrayClock, WindowBody,
    WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer,
        Icon, IconName, IconSize, ListItemButton, ListSurface, MenuItem, MenuSeparator,
        MenuSurface, ResizeHandle, ShutdownScreen, Taskbar, TaskbarButton, TaskbarSection,
        TrayClock, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
        WindowTitleBar,
    };
}
