//! Semantic icon identifiers and the single icon renderer used by shell components.
//!
//! Artwork is owned by the stylesheet: every icon renders as an empty, `aria-hidden` element
//! carrying a stable `data-icon` token, so components never embed raw glyphs or SVG.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components.
pub enum IconName {
    /// Monitor / "My Computer".
    Computer,
    /// Person silhouette.
    User,
    /// Briefcase / projects.
    Briefcase,
    /// Plain text document.
    Document,
    /// Command prompt.
    Terminal,
    /// Envelope.
    Mail,
    /// Photo frame.
    Photos,
    /// Recycle bin.
    RecycleBin,
    /// Hard drive.
    HardDrive,
    /// Folder.
    Folder,
    /// Outbound link.
    Link,
    /// Calendar page.
    Calendar,
    /// Start button logo.
    Start,
    /// Power / shut down.
    Shutdown,
    /// Tray speaker.
    Speaker,
    /// Submenu expander.
    ChevronRight,
    /// Window minimize control.
    WindowMinimize,
    /// Window maximize control.
    WindowMaximize,
    /// Window restore control.
    WindowRestore,
    /// Window close control.
    Close,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Computer => "computer",
            Self::User => "user",
            Self::Briefcase => "briefcase",
            Self::Document => "document",
            Self::Terminal => "terminal",
            Self::Mail => "mail",
            Self::Photos => "photos",
            Self::RecycleBin => "recycle-bin",
            Self::HardDrive => "hard-drive",
            Self::Folder => "folder",
            Self::Link => "link",
            Self::Calendar => "calendar",
            Self::Start => "start",
            Self::Shutdown => "shutdown",
            Self::Speaker => "speaker",
            Self::ChevronRight => "chevron-right",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Close => "close",
        }
    }

    /// Resolves a token back into an icon, as used by the window manifest.
    pub fn from_token(token: &str) -> Option<Self> {
        ALL_ICONS.iter().copied().find(|icon| icon.token() == token)
    }
}

const ALL_ICONS: [IconName; 20] = [
    IconName::Computer,
    IconName::User,
    IconName::Briefcase,
    IconName::Document,
    IconName::Terminal,
    IconName::Mail,
    IconName::Photos,
    IconName::RecycleBin,
    IconName::HardDrive,
    IconName::Folder,
    IconName::Link,
    IconName::Calendar,
    IconName::Start,
    IconName::Shutdown,
    IconName::Speaker,
    IconName::ChevronRight,
    IconName::WindowMinimize,
    IconName::WindowMaximize,
    IconName::WindowRestore,
    IconName::Close,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Rendered icon sizes.
pub enum IconSize {
    /// Window-control size.
    Xs,
    /// Taskbar and menu size.
    #[default]
    Sm,
    /// Desktop icon size.
    Lg,
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders a semantic icon.
pub fn Icon(icon: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-icon=icon.token()
            data-ui-size=size.token()
        ></span>
    }
}
