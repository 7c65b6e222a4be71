use leptos::ev::MouseEvent;
use leptos::*;
use system_ui::{
    Icon, IconName, IconSize, ResizeHandle, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use web_sys::PointerEvent;

use super::{content::window_content, pointer_from_pointer_event, use_desktop_runtime};
use crate::{
    catalog,
    model::{ResizeEdge, WindowId},
    reducer::DesktopAction,
};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &PointerEvent) {}

fn is_primary_press(ev: &PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let descriptor = catalog::descriptor(&window_id);
    let window_id = store_value(window_id);

    let window = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| desktop.window(&window_id.get_value()).cloned())
    });
    let focused =
        Signal::derive(move || runtime.state.with(|desktop| desktop.is_active(&window_id.get_value())));
    let minimized = Signal::derive(move || window.get().map(|w| w.minimized).unwrap_or(false));
    let maximized = Signal::derive(move || window.get().map(|w| w.maximized).unwrap_or(false));
    let style = Signal::derive(move || {
        window
            .get()
            .map(|w| {
                let hidden = if w.minimized { "display:none;" } else { "" };
                format!("{}z-index:{};{}", w.rect.css(), w.z_index, hidden)
            })
            .unwrap_or_default()
    });

    let focus = Callback::new(move |_: PointerEvent| {
        runtime.dispatch_action(DesktopAction::FocusWindow {
            window_id: window_id.get_value(),
        });
    });
    let minimize = Callback::new(move |_: MouseEvent| {
        runtime.dispatch_action(DesktopAction::MinimizeWindow {
            window_id: window_id.get_value(),
        });
    });
    let close = Callback::new(move |_: MouseEvent| {
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: window_id.get_value(),
        });
    });
    let toggle_maximize = Callback::new(move |_: MouseEvent| {
        let window_id = window_id.get_value();
        if maximized.get_untracked() {
            runtime.dispatch_action(DesktopAction::RestoreWindow { window_id });
        } else {
            runtime.dispatch_action(DesktopAction::MaximizeWindow {
                window_id,
                viewport: runtime.viewport(),
            });
        }
    });
    let begin_move = Callback::new(move |ev: PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id: window_id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
            viewport: runtime.viewport(),
        });
    });

    let resize_handles = ResizeEdge::ALL
        .into_iter()
        .map(|edge| {
            let begin_resize = Callback::new(move |ev: PointerEvent| {
                if !is_primary_press(&ev) {
                    return;
                }
                try_set_pointer_capture(&ev);
                ev.prevent_default();
                ev.stop_propagation();
                runtime.dispatch_action(DesktopAction::BeginResize {
                    window_id: window_id.get_value(),
                    edge,
                    pointer: pointer_from_pointer_event(&ev),
                    viewport: runtime.viewport(),
                });
            });
            view! { <ResizeHandle edge=edge.token() on_pointerdown=begin_resize /> }
        })
        .collect_view();

    let title = descriptor.title.clone();
    let title_icon = descriptor.icon();
    let body = descriptor.content;
    let frame_id = format!("window-{}", descriptor.id);

    view! {
        <WindowFrame
            id=frame_id
            style=style
            aria_label=title.clone()
            focused=focused
            minimized=minimized
            maximized=maximized
            on_pointerdown=focus
        >
            <WindowTitleBar focused=focused on_pointerdown=begin_move on_dblclick=toggle_maximize>
                <WindowTitle>
                    <Icon icon=title_icon size=IconSize::Xs />
                    <span>{title}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton aria_label="Minimize" on_click=minimize>
                        <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                    </WindowControlButton>
                    <WindowControlButton
                        aria_label=Signal::derive(move || {
                            let label = if maximized.get() { "Restore" } else { "Maximize" };
                            label.to_string()
                        })
                        on_click=toggle_maximize
                    >
                        {move || {
                            let icon = if maximized.get() {
                                IconName::WindowRestore
                            } else {
                                IconName::WindowMaximize
                            };
                            view! { <Icon icon=icon size=IconSize::Xs /> }
                        }}
                    </WindowControlButton>
                    <WindowControlButton aria_label="Close" on_click=close>
                        <Icon icon=IconName::Close size=IconSize::Xs />
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>{window_content(body)}</WindowBody>
            <Show when=move || !maximized.get()>{resize_handles.clone()}</Show>
        </WindowFrame>
    }
}
