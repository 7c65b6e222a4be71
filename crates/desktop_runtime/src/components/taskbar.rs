use std::time::Duration;

use leptos::ev::MouseEvent;
use leptos::*;
use system_ui::{Icon, IconName, IconSize, Taskbar, TaskbarButton, TaskbarSection, TrayClock};

use super::{menus::START_MENU_ID, use_desktop_runtime};
use crate::{
    reducer::DesktopAction,
    taskbar::{format_clock, taskbar_entries, ClockSnapshot},
};

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let entries = create_memo(move |_| state.with(taskbar_entries));
    let start_open = Signal::derive(move || state.with(|desktop| desktop.start_menu.open));
    let clock_now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <Taskbar aria_label="Taskbar">
            <TaskbarSection ui_slot="start">
                <TaskbarButton
                    id="start-button"
                    ui_slot="start-button"
                    aria_label="Start"
                    aria_controls=START_MENU_ID
                    aria_expanded=start_open
                    pressed=start_open
                    on_click=Callback::new(move |ev: MouseEvent| {
                        ev.stop_propagation();
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                    })
                >
                    <Icon icon=IconName::Start size=IconSize::Sm />
                    <span>"Start"</span>
                </TaskbarButton>
            </TaskbarSection>

            <TaskbarSection ui_slot="running" aria_label="Open windows">
                <For
                    each=move || entries.get()
                    key=|entry| (entry.window_id.clone(), entry.pressed, entry.minimized)
                    let:entry
                >
                    {{
                        let window_id = entry.window_id.clone();
                        view! {
                            <TaskbarButton
                                id=format!("taskbar-{}", entry.window_id)
                                aria_label=entry.label.clone()
                                title=entry.label.clone()
                                pressed=entry.pressed
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow {
                                        window_id: window_id.clone(),
                                    });
                                })
                            >
                                <Icon icon=entry.icon size=IconSize::Xs />
                                <span class="taskbar-button-label">{entry.label}</span>
                            </TaskbarButton>
                        }
                    }}
                </For>
            </TaskbarSection>

            <TaskbarSection ui_slot="tray">
                <Icon icon=IconName::Speaker size=IconSize::Xs />
                <TrayClock aria_label=Signal::derive(move || format_clock(clock_now.get()))>
                    {move || format_clock(clock_now.get())}
                </TrayClock>
            </TaskbarSection>
        </Taskbar>
    }
}
