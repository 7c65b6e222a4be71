//! Taskbar presentation derived from [`DesktopState`].
//!
//! Nothing here owns state. The view recomputes [`taskbar_entries`] after every dispatch and
//! routes button clicks to [`DesktopAction::ToggleTaskbarWindow`](crate::reducer::DesktopAction).

use system_ui::IconName;

use crate::{
    catalog,
    model::{DesktopState, WindowId},
};

/// Height of the taskbar strip in CSS pixels; the window viewport excludes it.
pub const TASKBAR_HEIGHT_PX: i32 = 38;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub label: String,
    pub icon: IconName,
    /// Rendered with the sunken bevel: the window is active and visible.
    pub pressed: bool,
    pub minimized: bool,
}

/// One entry per open window (minimized included), in registry insertion order.
pub fn taskbar_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    state
        .open_windows()
        .map(|window| {
            let descriptor = catalog::descriptor(&window.id);
            TaskbarEntry {
                window_id: window.id.clone(),
                label: descriptor.taskbar_label.clone(),
                icon: descriptor.icon(),
                pressed: state.is_active(&window.id) && !window.minimized,
                minimized: window.minimized,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    pub hour: u32,
    pub minute: u32,
}

impl ClockSnapshot {
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                hour: 12,
                minute: 0,
            }
        }
    }
}

/// Formats the tray clock as `h:MM AM`/`h:MM PM`.
pub fn format_clock(snapshot: ClockSnapshot) -> String {
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour % 24 >= 12 { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, snapshot.minute, suffix)
}
