//! Start menu tree and its open/expanded state machine.

use system_ui::IconName;

use crate::{
    catalog,
    content::{FOCUS_URL, LINKEDIN_URL, MOSAIC_URL, NEUROTRAITS_URL},
    launch::LaunchTarget,
    model::{DesktopState, StartMenuState, SubmenuId, WindowId},
};

/// What selecting a leaf does before the menu closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartMenuAction {
    Launch(LaunchTarget),
    ShutDown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartMenuLeaf {
    pub label: String,
    pub icon: IconName,
    pub action: StartMenuAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartMenuNode {
    Leaf(StartMenuLeaf),
    Submenu {
        id: SubmenuId,
        icon: IconName,
        items: Vec<StartMenuLeaf>,
    },
    Separator,
}

fn leaf(label: impl Into<String>, icon: IconName, action: StartMenuAction) -> StartMenuLeaf {
    StartMenuLeaf {
        label: label.into(),
        icon,
        action,
    }
}

fn window_leaf(id: &str) -> StartMenuLeaf {
    let descriptor = catalog::descriptor(&WindowId::from(id));
    leaf(
        descriptor.title.clone(),
        descriptor.icon(),
        StartMenuAction::Launch(LaunchTarget::window(id)),
    )
}

fn link_leaf(label: &str, url: &'static str) -> StartMenuLeaf {
    leaf(
        label,
        IconName::Link,
        StartMenuAction::Launch(LaunchTarget::ExternalUrl(url)),
    )
}

/// The full menu, top to bottom.
pub fn start_menu_tree() -> Vec<StartMenuNode> {
    let programs = catalog::window_catalog()
        .windows
        .iter()
        .map(|descriptor| window_leaf(&descriptor.id))
        .collect();

    vec![
        StartMenuNode::Submenu {
            id: SubmenuId::Programs,
            icon: IconName::Folder,
            items: programs,
        },
        StartMenuNode::Submenu {
            id: SubmenuId::Documents,
            icon: IconName::Document,
            items: vec![window_leaf("docs"), window_leaf("textpad"), window_leaf("why")],
        },
        StartMenuNode::Submenu {
            id: SubmenuId::Links,
            icon: IconName::Link,
            items: vec![
                link_leaf("Mosaic", MOSAIC_URL),
                link_leaf("NeuroTraits", NEUROTRAITS_URL),
                link_leaf("Mosaic Focus", FOCUS_URL),
                link_leaf("LinkedIn", LINKEDIN_URL),
            ],
        },
        StartMenuNode::Separator,
        StartMenuNode::Leaf(leaf(
            "About Me",
            IconName::User,
            StartMenuAction::Launch(LaunchTarget::window("about")),
        )),
        StartMenuNode::Leaf(leaf(
            "Contact",
            IconName::Mail,
            StartMenuAction::Launch(LaunchTarget::window("contact")),
        )),
        StartMenuNode::Separator,
        StartMenuNode::Leaf(leaf(
            "Shut Down...",
            IconName::Shutdown,
            StartMenuAction::ShutDown,
        )),
    ]
}

/// Flips the menu; closing also collapses any submenu.
pub fn toggle_menu(menu: &mut StartMenuState) {
    if menu.open {
        close_menu(menu);
    } else {
        menu.open = true;
    }
}

pub fn close_menu(menu: &mut StartMenuState) {
    menu.open = false;
    menu.expanded = None;
}

/// Expands `submenu`, collapsing it when it is already the expanded one.
///
/// Ignored while the menu is closed.
pub fn expand_submenu(menu: &mut StartMenuState, submenu: SubmenuId) {
    if !menu.open {
        return;
    }
    menu.expanded = if menu.expanded == Some(submenu) {
        None
    } else {
        Some(submenu)
    };
}

/// Closes the menu and applies a leaf's own state change.
///
/// Returns the launch target the caller still has to perform.
pub fn select_leaf(state: &mut DesktopState, action: StartMenuAction) -> Option<LaunchTarget> {
    close_menu(&mut state.start_menu);
    match action {
        StartMenuAction::Launch(target) => Some(target),
        StartMenuAction::ShutDown => {
            state.shut_down = true;
            None
        }
    }
}

/// Leaves the shutdown screen with the menu closed.
pub fn wake(state: &mut DesktopState) {
    state.shut_down = false;
    close_menu(&mut state.start_menu);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn open_menu() -> StartMenuState {
        StartMenuState {
            open: true,
            expanded: None,
        }
    }

    #[test]
    fn expanding_a_second_submenu_replaces_the_first() {
        let mut menu = open_menu();
        expand_submenu(&mut menu, SubmenuId::Programs);
        expand_submenu(&mut menu, SubmenuId::Links);
        assert_eq!(menu.expanded, Some(SubmenuId::Links));
    }

    #[test]
    fn expanding_the_expanded_submenu_collapses_it() {
        let mut menu = open_menu();
        expand_submenu(&mut menu, SubmenuId::Documents);
        expand_submenu(&mut menu, SubmenuId::Documents);
        assert_eq!(menu.expanded, None);
    }

    #[test]
    fn toggling_closed_clears_the_submenu() {
        let mut menu = open_menu();
        expand_submenu(&mut menu, SubmenuId::Programs);
        toggle_menu(&mut menu);
        assert_eq!(menu, StartMenuState::default());
    }

    #[test]
    fn expand_is_ignored_while_closed() {
        let mut menu = StartMenuState::default();
        expand_submenu(&mut menu, SubmenuId::Programs);
        assert_eq!(menu.expanded, None);
    }

    #[test]
    fn shut_down_leaf_closes_menu_and_enters_shutdown() {
        let mut state = DesktopState::default();
        state.start_menu = open_menu();
        assert_eq!(select_leaf(&mut state, StartMenuAction::ShutDown), None);
        assert!(state.shut_down);
        assert_eq!(state.start_menu, StartMenuState::default());

        wake(&mut state);
        assert!(!state.shut_down);
    }

    #[test]
    fn programs_submenu_lists_every_catalog_window() {
        let tree = start_menu_tree();
        let Some(StartMenuNode::Submenu { id, items, .. }) = tree.first() else {
            panic!("programs submenu should lead the menu");
        };
        assert_eq!(*id, SubmenuId::Programs);
        assert_eq!(items.len(), catalog::window_catalog().windows.len());
        assert_eq!(items[1].label, "About Ryan");
    }
}
