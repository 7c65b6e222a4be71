use leptos::ev::MouseEvent;
use leptos::*;
use system_ui::{Icon, IconName, IconSize, MenuItem, MenuSeparator, MenuSurface};

use super::{use_desktop_runtime, DesktopRuntimeContext};
use crate::{
    model::SubmenuId,
    reducer::DesktopAction,
    start_menu::{start_menu_tree, StartMenuLeaf, StartMenuNode},
};

/// DOM id of the start menu surface, referenced by the start button's `aria-controls`.
pub(super) const START_MENU_ID: &str = "desktop-start-menu";

fn leaf_item(runtime: DesktopRuntimeContext, leaf: StartMenuLeaf) -> View {
    let action = leaf.action;
    view! {
        <MenuItem on_click=Callback::new(move |_: MouseEvent| {
            runtime.dispatch_action(DesktopAction::SelectStartMenuItem {
                action: action.clone(),
            });
        })>
            <Icon icon=leaf.icon size=IconSize::Sm />
            <span>{leaf.label}</span>
        </MenuItem>
    }
    .into_view()
}

fn menu_node(
    runtime: DesktopRuntimeContext,
    node: StartMenuNode,
    expanded: Signal<Option<SubmenuId>>,
) -> View {
    match node {
        StartMenuNode::Leaf(leaf) => leaf_item(runtime, leaf),
        StartMenuNode::Submenu { id, icon, items } => {
            let is_expanded = Signal::derive(move || expanded.get() == Some(id));
            let items = store_value(items);
            view! {
                <div class="start-menu-group" data-submenu=id.label()>
                    <MenuItem
                        has_submenu=true
                        expanded=is_expanded
                        on_click=Callback::new(move |_: MouseEvent| {
                            runtime.dispatch_action(DesktopAction::ExpandSubmenu { submenu: id });
                        })
                    >
                        <Icon icon=icon size=IconSize::Sm />
                        <span>{id.label()}</span>
                        <Icon icon=IconName::ChevronRight size=IconSize::Xs />
                    </MenuItem>
                    <Show when=move || is_expanded.get()>
                        <MenuSurface ui_slot="submenu" aria_label=id.label()>
                            {items
                                .get_value()
                                .into_iter()
                                .map(|leaf| leaf_item(runtime, leaf))
                                .collect_view()}
                        </MenuSurface>
                    </Show>
                </div>
            }
            .into_view()
        }
        StartMenuNode::Separator => view! { <MenuSeparator /> }.into_view(),
    }
}

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let open = Signal::derive(move || state.with(|desktop| desktop.start_menu.open));
    let expanded = Signal::derive(move || state.with(|desktop| desktop.start_menu.expanded));
    let tree = store_value(start_menu_tree());

    view! {
        <Show when=move || open.get()>
            <MenuSurface id=START_MENU_ID aria_label="Start menu" ui_slot="start-menu">
                <div class="start-menu-banner" aria-hidden="true">
                    <span>"RyanOS"</span>
                </div>
                <div class="start-menu-items">
                    {tree
                        .get_value()
                        .into_iter()
                        .map(|node| menu_node(runtime, node, expanded))
                        .collect_view()}
                </div>
            </MenuSurface>
        </Show>
    }
}
