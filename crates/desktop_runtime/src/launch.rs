//! Stateless launch surface: desktop icons and the explorer-style listings.
//!
//! Each entry is a static `(label, icon, target)` triple. Activating one produces a single
//! [`DesktopAction`]; nothing here holds state.

use system_ui::IconName;

use crate::{
    catalog,
    content::{self, FOCUS_URL, MOSAIC_URL, NEUROTRAITS_URL},
    model::{DocumentId, WindowId},
    reducer::DesktopAction,
};

/// What activating a launch entry does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchTarget {
    /// Focus (and open if needed) a predeclared window.
    Window(WindowId),
    /// Open a URL in a new browsing context.
    ExternalUrl(&'static str),
    /// Open the ephemeral document viewer.
    Document(DocumentId),
}

impl LaunchTarget {
    pub fn window(id: &str) -> Self {
        Self::Window(WindowId::from(id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchEntry {
    pub label: String,
    pub icon: IconName,
    pub target: LaunchTarget,
}

impl LaunchEntry {
    fn new(label: impl Into<String>, icon: IconName, target: LaunchTarget) -> Self {
        Self {
            label: label.into(),
            icon,
            target,
        }
    }
}

/// A row in an explorer-style listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingRow {
    /// Non-interactive group caption.
    Heading { label: &'static str, icon: IconName },
    /// Activatable entry; `nested` rows render indented under the previous heading.
    Entry { entry: LaunchEntry, nested: bool },
}

/// Maps a launch target to the reducer action it emits.
pub fn launch_action(target: LaunchTarget) -> DesktopAction {
    match target {
        LaunchTarget::Window(window_id) => DesktopAction::FocusWindow { window_id },
        LaunchTarget::ExternalUrl(url) => DesktopAction::OpenExternalUrl {
            url: url.to_string(),
        },
        LaunchTarget::Document(document_id) => DesktopAction::OpenDocument { document_id },
    }
}

/// Desktop icon column, in manifest order, for every window with a desktop label.
pub fn desktop_icons() -> Vec<LaunchEntry> {
    catalog::window_catalog()
        .windows
        .iter()
        .filter_map(|descriptor| {
            descriptor.desktop_label.as_ref().map(|label| {
                LaunchEntry::new(
                    label.clone(),
                    descriptor.icon(),
                    LaunchTarget::Window(descriptor.window_id()),
                )
            })
        })
        .collect()
}

fn entry(label: &'static str, icon: IconName, target: LaunchTarget) -> ListingRow {
    ListingRow::Entry {
        entry: LaunchEntry::new(label, icon, target),
        nested: false,
    }
}

fn nested_link(label: &'static str, url: &'static str) -> ListingRow {
    ListingRow::Entry {
        entry: LaunchEntry::new(label, IconName::Link, LaunchTarget::ExternalUrl(url)),
        nested: true,
    }
}

/// Contents of the "My Computer" window.
pub fn my_computer_entries() -> Vec<ListingRow> {
    vec![
        entry("About Ryan", IconName::Document, LaunchTarget::window("about")),
        entry("Projects", IconName::Briefcase, LaunchTarget::window("projects")),
        ListingRow::Heading {
            label: "Projects",
            icon: IconName::Briefcase,
        },
        nested_link("NeuroTraits", NEUROTRAITS_URL),
        nested_link("Mosaic Focus", FOCUS_URL),
        nested_link("Mosaic", MOSAIC_URL),
        entry("Essays", IconName::Document, LaunchTarget::window("docs")),
        entry(
            "Why This Exists.txt",
            IconName::Document,
            LaunchTarget::window("why"),
        ),
        entry("Text Pad.txt", IconName::Document, LaunchTarget::window("textpad")),
        entry("Photos", IconName::Photos, LaunchTarget::window("photos")),
        entry("Contact", IconName::Document, LaunchTarget::window("contact")),
        entry(
            "Recycle Bin",
            IconName::RecycleBin,
            LaunchTarget::window("recyclebin"),
        ),
    ]
}

/// Contents of the "Recycle Bin" window; each entry opens the ephemeral document viewer.
pub fn recycle_bin_entries() -> Vec<LaunchEntry> {
    content::RECYCLE_BIN
        .iter()
        .map(|document| {
            LaunchEntry::new(
                document.name,
                IconName::Document,
                LaunchTarget::Document(DocumentId::from(document.id)),
            )
        })
        .collect()
}
