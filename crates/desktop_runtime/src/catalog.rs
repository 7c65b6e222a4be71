//! Predeclared window catalog loaded from `desktop.manifest.toml` at build time.

use std::sync::OnceLock;

use leptos::logging;
use serde::Deserialize;
use system_ui::IconName;

use crate::model::{Viewport, WindowId, WindowRect};

include!(concat!(env!("OUT_DIR"), "/window_catalog_generated.rs"));

/// One axis of a window's default size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extent {
    /// Fixed size in CSS pixels.
    Px(i32),
    /// Percentage of the viewport along the same axis.
    Pct(u8),
}

impl Extent {
    fn resolve(self, available: i32) -> i32 {
        match self {
            Self::Px(px) => px,
            Self::Pct(pct) => available * i32::from(pct) / 100,
        }
    }
}

/// Which built-in body a window renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowContent {
    MyComputer,
    About,
    Projects,
    Why,
    Contact,
    Essays,
    TextPad,
    Photos,
    RecycleBin,
    #[serde(other)]
    Empty,
}

/// Static presentation data for one window id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WindowDescriptor {
    pub id: String,
    pub title: String,
    pub taskbar_label: String,
    pub desktop_label: Option<String>,
    pub icon: String,
    pub content: WindowContent,
    pub x: i32,
    pub y: i32,
    pub width: Extent,
    pub height: Extent,
    pub open_on_boot: bool,
}

impl WindowDescriptor {
    /// Descriptor used for ids the manifest does not declare.
    pub fn fallback(window_id: &WindowId) -> Self {
        let rect = WindowRect::default();
        Self {
            id: window_id.0.clone(),
            title: window_id.0.clone(),
            taskbar_label: window_id.0.clone(),
            desktop_label: None,
            icon: IconName::Folder.token().to_string(),
            content: WindowContent::Empty,
            x: rect.x,
            y: rect.y,
            width: Extent::Px(rect.w),
            height: Extent::Px(rect.h),
            open_on_boot: false,
        }
    }

    pub fn window_id(&self) -> WindowId {
        WindowId(self.id.clone())
    }

    pub fn icon(&self) -> IconName {
        crate::icons::icon_for_token(&self.icon)
    }

    pub fn default_rect(&self, viewport: Viewport) -> WindowRect {
        WindowRect {
            x: self.x,
            y: self.y,
            w: self.width.resolve(viewport.w),
            h: self.height.resolve(viewport.h),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WindowCatalog {
    pub initial_focus: Option<String>,
    pub windows: Vec<WindowDescriptor>,
}

/// Returns the generated catalog, parsed once.
pub fn window_catalog() -> &'static WindowCatalog {
    static CATALOG: OnceLock<WindowCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(WINDOW_CATALOG_JSON).unwrap_or_else(|err| {
            logging::warn!("window catalog failed to parse, starting empty: {err}");
            WindowCatalog::default()
        })
    })
}

/// Looks up `window_id`, falling back to a generic descriptor for undeclared ids.
pub fn descriptor(window_id: &WindowId) -> WindowDescriptor {
    window_catalog()
        .windows
        .iter()
        .find(|descriptor| descriptor.id == window_id.0)
        .cloned()
        .unwrap_or_else(|| WindowDescriptor::fallback(window_id))
}
