use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct RawManifest {
    schema_version: u32,
    desktop: RawDesktop,
    #[serde(rename = "window")]
    windows: Vec<RawWindow>,
}

#[derive(Debug, Deserialize)]
struct RawDesktop {
    initial_focus: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawWindow {
    id: String,
    title: String,
    taskbar_label: Option<String>,
    desktop_label: Option<String>,
    icon: String,
    content: Option<String>,
    x: i32,
    y: i32,
    width: Option<i32>,
    width_pct: Option<u8>,
    height: Option<i32>,
    height_pct: Option<u8>,
    #[serde(default)]
    open_on_boot: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum Extent {
    Px(i32),
    Pct(u8),
}

#[derive(Debug, Serialize)]
struct CatalogWindow {
    id: String,
    title: String,
    taskbar_label: String,
    desktop_label: Option<String>,
    icon: String,
    content: String,
    x: i32,
    y: i32,
    width: Extent,
    height: Extent,
    open_on_boot: bool,
}

#[derive(Debug, Serialize)]
struct Catalog {
    initial_focus: Option<String>,
    windows: Vec<CatalogWindow>,
}

fn extent(id: &str, axis: &str, px: Option<i32>, pct: Option<u8>) -> Extent {
    match (px, pct) {
        (Some(px), None) if px > 0 => Extent::Px(px),
        (None, Some(pct)) if (1..=100).contains(&pct) => Extent::Pct(pct),
        (Some(_), Some(_)) => panic!("window `{id}` sets both {axis} and {axis}_pct"),
        (None, None) => panic!("window `{id}` sets neither {axis} nor {axis}_pct"),
        _ => panic!("window `{id}` has an out-of-range {axis}"),
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.manifest.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: RawManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    let mut windows = Vec::with_capacity(manifest.windows.len());
    for window in manifest.windows {
        if window.id.trim().is_empty() {
            panic!("window ids must not be empty in {}", path.display());
        }
        if !seen.insert(window.id.clone()) {
            panic!("duplicate window id `{}` in {}", window.id, path.display());
        }
        if window.icon.trim().is_empty() {
            panic!("window `{}` has no icon token", window.id);
        }
        let width = extent(&window.id, "width", window.width, window.width_pct);
        let height = extent(&window.id, "height", window.height, window.height_pct);
        windows.push(CatalogWindow {
            taskbar_label: window.taskbar_label.unwrap_or_else(|| window.title.clone()),
            id: window.id,
            title: window.title,
            desktop_label: window.desktop_label,
            icon: window.icon,
            content: window.content.unwrap_or_else(|| "empty".to_string()),
            x: window.x,
            y: window.y,
            width,
            height,
            open_on_boot: window.open_on_boot,
        });
    }

    if let Some(focus) = manifest.desktop.initial_focus.as_deref() {
        let boots_open = windows
            .iter()
            .any(|window| window.id == focus && window.open_on_boot);
        if !boots_open {
            panic!("initial_focus `{focus}` must name a window with open_on_boot = true");
        }
    }

    let catalog = Catalog {
        initial_focus: manifest.desktop.initial_focus,
        windows,
    };
    let json = serde_json::to_string_pretty(&catalog).expect("serialize window catalog");
    let generated = format!(
        "/// Build-time generated window catalog JSON.\n\
pub const WINDOW_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("window_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
