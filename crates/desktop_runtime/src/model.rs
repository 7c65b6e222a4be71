use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW_WIDTH: i32 = 420;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 300;
pub const DEFAULT_VIEWPORT_WIDTH: i32 = 1024;
pub const DEFAULT_VIEWPORT_HEIGHT: i32 = 768;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an ephemeral document; never shares a namespace with [`WindowId`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocumentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }

    /// CSS for absolutely positioning a window frame at this rect.
    pub fn css(self) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;",
            self.x, self.y, self.w, self.h
        )
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 48,
            y: 48,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

/// Desktop area available to windows, excluding the taskbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub w: i32,
    pub h: i32,
}

impl Viewport {
    pub fn rect(self) -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: self.w,
            h: self.h,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            w: DEFAULT_VIEWPORT_WIDTH,
            h: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    pub id: WindowId,
    pub is_open: bool,
    pub minimized: bool,
    pub maximized: bool,
    pub rect: WindowRect,
    pub restore_rect: Option<WindowRect>,
    pub z_index: u32,
}

impl WindowState {
    /// A closed, never-focused entry with the given geometry.
    pub fn closed(id: WindowId, rect: WindowRect) -> Self {
        Self {
            id,
            is_open: false,
            minimized: false,
            maximized: false,
            rect,
            restore_rect: None,
            z_index: 0,
        }
    }
}

/// The four observable per-window states of the focus state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowVisualState {
    Closed,
    OpenBackground,
    OpenActive,
    OpenMinimized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmenuId {
    Programs,
    Documents,
    Links,
}

impl SubmenuId {
    pub fn label(self) -> &'static str {
        match self {
            Self::Programs => "Programs",
            Self::Documents => "Documents",
            Self::Links => "Links",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StartMenuState {
    pub open: bool,
    pub expanded: Option<SubmenuId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    /// Registry in insertion order; entries for predeclared windows are never removed.
    pub windows: Vec<WindowState>,
    pub active_window: Option<WindowId>,
    pub start_menu: StartMenuState,
    pub active_document: Option<DocumentId>,
    pub shut_down: bool,
    pub next_z_index: u32,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            active_window: None,
            start_menu: StartMenuState::default(),
            active_document: None,
            shut_down: false,
            next_z_index: 1,
        }
    }
}

impl DesktopState {
    /// Builds the first-render state from the window catalog.
    ///
    /// Every catalog window is registered closed, the boot set is opened in catalog order, and the
    /// configured initial window is focused last so it ends up active and topmost.
    pub fn boot(viewport: Viewport) -> Self {
        let catalog = crate::catalog::window_catalog();
        let mut state = Self::default();
        for descriptor in &catalog.windows {
            state.windows.push(WindowState::closed(
                WindowId(descriptor.id.clone()),
                crate::window_manager::clamp_rect(descriptor.default_rect(viewport), viewport),
            ));
        }

        for descriptor in catalog.windows.iter().filter(|d| d.open_on_boot) {
            crate::window_manager::focus_window(&mut state, &WindowId(descriptor.id.clone()));
        }
        if let Some(initial) = catalog.initial_focus.as_deref() {
            crate::window_manager::focus_window(&mut state, &WindowId::from(initial));
        }
        state
    }

    pub fn window(&self, id: &WindowId) -> Option<&WindowState> {
        self.windows.iter().find(|w| &w.id == id)
    }

    pub fn is_open(&self, id: &WindowId) -> bool {
        self.window(id).map(|w| w.is_open).unwrap_or(false)
    }

    pub fn is_minimized(&self, id: &WindowId) -> bool {
        self.window(id).map(|w| w.minimized).unwrap_or(false)
    }

    pub fn is_active(&self, id: &WindowId) -> bool {
        self.active_window.as_ref() == Some(id)
    }

    pub fn visual_state(&self, id: &WindowId) -> WindowVisualState {
        match self.window(id) {
            None => WindowVisualState::Closed,
            Some(w) if !w.is_open => WindowVisualState::Closed,
            Some(w) if w.minimized => WindowVisualState::OpenMinimized,
            Some(_) if self.is_active(id) => WindowVisualState::OpenActive,
            Some(_) => WindowVisualState::OpenBackground,
        }
    }

    pub fn open_windows(&self) -> impl Iterator<Item = &WindowState> {
        self.windows.iter().filter(|w| w.is_open)
    }

    /// Highest z-index currently assigned, used to stack the document viewer above every window.
    pub fn top_z_index(&self) -> u32 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::North,
        ResizeEdge::South,
        ResizeEdge::East,
        ResizeEdge::West,
        ResizeEdge::NorthEast,
        ResizeEdge::NorthWest,
        ResizeEdge::SouthEast,
        ResizeEdge::SouthWest,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
    pub viewport: Viewport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
    pub viewport: Viewport,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}
