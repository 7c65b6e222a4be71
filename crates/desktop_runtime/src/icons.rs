//! Icon resolution for catalog windows and launch entries.
//!
//! The manifest stores icons as `system_ui` tokens; this module is the one place those tokens
//! are turned back into [`IconName`] values so views never branch on window ids.

use system_ui::IconName;

use crate::{catalog, model::WindowId};

/// Icon used when a manifest token does not name a known glyph.
pub const FALLBACK_ICON: IconName = IconName::Folder;

/// Resolves a manifest icon token, falling back to [`FALLBACK_ICON`].
pub fn icon_for_token(token: &str) -> IconName {
    IconName::from_token(token).unwrap_or(FALLBACK_ICON)
}

/// Returns the catalog icon for `window_id`.
pub fn window_icon(window_id: &WindowId) -> IconName {
    catalog::descriptor(window_id).icon()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_windows_resolve_to_their_glyphs() {
        assert_eq!(window_icon(&WindowId::from("mycomputer")), IconName::Computer);
        assert_eq!(window_icon(&WindowId::from("contact")), IconName::Mail);
        assert_eq!(window_icon(&WindowId::from("textpad")), IconName::Document);
    }

    #[test]
    fn unknown_tokens_fall_back() {
        assert_eq!(icon_for_token("floppy"), FALLBACK_ICON);
        assert_eq!(window_icon(&WindowId::from("scratch")), FALLBACK_ICON);
    }
}
