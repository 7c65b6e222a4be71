use desktop_runtime::{
    content::RECYCLE_BIN, launch::recycle_bin_entries, reduce_desktop, taskbar_entries,
    DesktopAction, DesktopState, InteractionState, RuntimeEffect, WindowId, WindowVisualState,
};
use pretty_assertions::assert_eq;

struct Desktop {
    state: DesktopState,
    interaction: InteractionState,
}

impl Desktop {
    fn empty() -> Self {
        Self {
            state: DesktopState::default(),
            interaction: InteractionState::default(),
        }
    }

    fn dispatch(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(&mut self.state, &mut self.interaction, action).expect("reduce action")
    }

    fn focus(&mut self, id: &str) {
        self.dispatch(DesktopAction::FocusWindow {
            window_id: WindowId::from(id),
        });
    }

    fn toggle(&mut self, id: &str) {
        self.dispatch(DesktopAction::ToggleTaskbarWindow {
            window_id: WindowId::from(id),
        });
    }

    fn visual(&self, id: &str) -> WindowVisualState {
        self.state.visual_state(&WindowId::from(id))
    }

    fn taskbar(&self) -> Vec<(String, bool)> {
        taskbar_entries(&self.state)
            .into_iter()
            .map(|entry| (entry.label, entry.pressed))
            .collect()
    }
}

#[test]
fn focusing_from_all_closed_opens_one_pressed_button() {
    let mut desktop = Desktop::empty();
    desktop.focus("about");

    assert_eq!(desktop.visual("about"), WindowVisualState::OpenActive);
    assert_eq!(desktop.taskbar(), vec![("about".to_string(), true)]);
}

#[test]
fn focusing_a_second_window_backgrounds_the_first() {
    let mut desktop = Desktop::empty();
    desktop.focus("about");
    desktop.focus("projects");

    assert_eq!(desktop.visual("about"), WindowVisualState::OpenBackground);
    assert_eq!(desktop.visual("projects"), WindowVisualState::OpenActive);
    assert_eq!(
        desktop.taskbar(),
        vec![("about".to_string(), false), ("projects".to_string(), true)]
    );
}

#[test]
fn taskbar_toggle_hides_then_restores_the_active_window() {
    let mut desktop = Desktop::empty();
    desktop.focus("about");

    desktop.toggle("about");
    assert_eq!(desktop.visual("about"), WindowVisualState::OpenMinimized);
    assert_eq!(desktop.state.active_window, None);
    assert_eq!(desktop.taskbar(), vec![("about".to_string(), false)]);

    desktop.toggle("about");
    assert_eq!(desktop.visual("about"), WindowVisualState::OpenActive);
}

#[test]
fn toggle_matches_minimize_or_focus_from_every_state() {
    let ids = ["about", "projects", "contact"];
    let setups: [fn(&mut Desktop); 4] = [
        |_| {},
        |d| d.focus("about"),
        |d| {
            d.focus("about");
            d.focus("projects");
        },
        |d| {
            d.focus("about");
            d.toggle("about");
        },
    ];

    for setup in setups {
        for id in ids {
            let mut toggled = Desktop::empty();
            setup(&mut toggled);
            let mut expected = Desktop::empty();
            setup(&mut expected);

            let window_id = WindowId::from(id);
            let minimizes = expected.state.is_active(&window_id)
                && !expected.state.is_minimized(&window_id);
            if minimizes {
                expected.dispatch(DesktopAction::MinimizeWindow { window_id });
            } else {
                expected.dispatch(DesktopAction::FocusWindow { window_id });
            }
            toggled.toggle(id);

            assert_eq!(toggled.state, expected.state, "toggle({id})");
        }
    }
}

#[test]
fn focus_exclusivity_holds_across_a_mixed_sequence() {
    let mut desktop = Desktop::empty();
    desktop.focus("about");
    desktop.focus("docs");
    desktop.toggle("docs");
    desktop.focus("textpad");
    desktop.dispatch(DesktopAction::CloseWindow {
        window_id: WindowId::from("textpad"),
    });
    desktop.toggle("about");

    let active: Vec<&str> = desktop
        .state
        .windows
        .iter()
        .filter(|w| desktop.state.visual_state(&w.id) == WindowVisualState::OpenActive)
        .map(|w| w.id.as_str())
        .collect();
    assert_eq!(active, vec!["about"]);
}

#[test]
fn recycle_bin_document_leaves_no_residue_after_close() {
    let mut desktop = Desktop::empty();
    desktop.focus("recyclebin");
    let before = desktop.state.clone();

    let first = recycle_bin_entries()
        .into_iter()
        .next()
        .expect("recycle bin has entries");
    desktop.dispatch(DesktopAction::Launch {
        target: first.target,
    });
    assert_eq!(
        desktop.state.active_document.as_ref().map(|id| id.as_str()),
        Some(RECYCLE_BIN[0].id)
    );
    assert!(desktop
        .state
        .windows
        .iter()
        .all(|w| w.id.as_str() != RECYCLE_BIN[0].id));

    desktop.dispatch(DesktopAction::CloseDocument);
    assert_eq!(desktop.state, before);
}

#[test]
fn boot_layout_matches_first_render() {
    let state = DesktopState::boot(Default::default());
    let desktop = Desktop {
        state,
        interaction: InteractionState::default(),
    };
    assert_eq!(
        desktop.taskbar(),
        vec![("about".to_string(), true), ("projects".to_string(), false)]
    );
}
