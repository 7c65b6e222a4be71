//! Leptos desktop shell: the read-only view projection of [`DesktopState`](crate::model::DesktopState).

mod content;
mod menus;
mod shutdown;
mod taskbar;
mod window;

use leptos::ev::MouseEvent;
use leptos::*;
use system_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Icon,
    IconSize,
};
use web_sys::PointerEvent;

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

use self::{
    content::DocumentViewer, menus::StartMenu, shutdown::ShutdownOverlay,
    taskbar::DesktopTaskbar, window::DesktopWindow,
};
use crate::{
    host::SHELL_ROOT_ID,
    launch::desktop_icons,
    model::{PointerPosition, WindowId},
    reducer::DesktopAction,
};

fn pointer_from_pointer_event(ev: &PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}

#[component]
/// Full desktop: icons, windows, document viewer, start menu, taskbar, and shutdown screen.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let open_window_ids = Signal::derive(move || {
        state.with(|desktop| {
            desktop
                .open_windows()
                .map(|window| window.id.clone())
                .collect::<Vec<WindowId>>()
        })
    });

    let key_listener = window_event_listener(ev::keydown, move |ev| {
        if state.with_untracked(|desktop| desktop.shut_down) {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::WakeFromShutdown);
            return;
        }
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        let (menu_open, document_open) = state.with_untracked(|desktop| {
            (desktop.start_menu.open, desktop.active_document.is_some())
        });
        if menu_open {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        } else if document_open {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseDocument);
        }
    });
    on_cleanup(move || key_listener.remove());

    let on_pointermove = Callback::new(move |ev: PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();
        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
        } else if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    });
    let on_pointerup = Callback::new(move |_: PointerEvent| end_active_pointer_interaction(runtime));

    view! {
        <DesktopRoot
            id=SHELL_ROOT_ID
            tabindex=-1
            on_pointermove=on_pointermove
            on_pointerup=on_pointerup
        >
            <DesktopBackdrop on_mousedown=Callback::new(move |_: MouseEvent| {
                runtime.dispatch_action(DesktopAction::CloseStartMenu);
            })>
                <DesktopIconGrid>
                    {desktop_icons()
                        .into_iter()
                        .map(|entry| {
                            let target = entry.target.clone();
                            view! {
                                <DesktopIconButton
                                    title=entry.label.clone()
                                    on_click=Callback::new(move |_| {
                                        runtime.dispatch_action(DesktopAction::Launch {
                                            target: target.clone(),
                                        });
                                    })
                                >
                                    <Icon icon=entry.icon size=IconSize::Lg />
                                    <span class="desktop-icon-label">{entry.label}</span>
                                </DesktopIconButton>
                            }
                        })
                        .collect_view()}
                </DesktopIconGrid>
            </DesktopBackdrop>

            <DesktopWindowLayer>
                <For each=move || open_window_ids.get() key=|window_id| window_id.clone() let:window_id>
                    <DesktopWindow window_id=window_id />
                </For>
                <DocumentViewer />
            </DesktopWindowLayer>

            <StartMenu />
            <DesktopTaskbar />
            <ShutdownOverlay />
        </DesktopRoot>
    }
}
