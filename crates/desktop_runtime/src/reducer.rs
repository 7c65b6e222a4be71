//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::{
    content,
    launch::{launch_action, LaunchTarget},
    model::{
        DesktopState, DocumentId, DragSession, InteractionState, PointerPosition, ResizeEdge,
        ResizeSession, SubmenuId, Viewport, WindowId, WindowSize,
    },
    start_menu::{self, StartMenuAction},
    window_manager::{
        close_window, focus_window, maximize_window, minimize_window, open_window, resize_within,
        restore_window, toggle_window, update_geometry,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Mark a window open without moving focus.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id, opening and unminimizing it as needed.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Taskbar button click: minimize when active and visible, focus otherwise.
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Maximize a window to the provided viewport.
    MaximizeWindow {
        /// Window to maximize.
        window_id: WindowId,
        /// Viewport to fill.
        viewport: Viewport,
    },
    /// Restore a maximized window to its previous rect.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Overwrite window position and/or size.
    UpdateGeometry {
        /// Window being moved or resized.
        window_id: WindowId,
        /// New top-left corner.
        position: Option<PointerPosition>,
        /// New outer size.
        size: Option<WindowSize>,
        /// Viewport used for clamping.
        viewport: Viewport,
    },
    /// Begin dragging a window by its titlebar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
        /// Viewport bounding the drag.
        viewport: Viewport,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
        /// Viewport bounding the resize.
        viewport: Viewport,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Expand or collapse a start menu submenu.
    ExpandSubmenu {
        /// Submenu to expand.
        submenu: SubmenuId,
    },
    /// Select a start menu leaf.
    SelectStartMenuItem {
        /// Leaf action to perform after the menu closes.
        action: StartMenuAction,
    },
    /// Activate a desktop icon or listing entry.
    Launch {
        /// Entry target.
        target: LaunchTarget,
    },
    /// Show a recycle-bin document in the ephemeral viewer, replacing any open one.
    OpenDocument {
        /// Document to show.
        document_id: DocumentId,
    },
    /// Dismiss the ephemeral document viewer.
    CloseDocument,
    /// Open a URL outside the desktop shell.
    OpenExternalUrl {
        /// Destination URL.
        url: String,
    },
    /// Leave the shutdown screen.
    WakeFromShutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Window chrome interactions reported to window content.
pub enum WindowLifecycleEvent {
    /// The window became active.
    Focused,
    /// The window was minimized.
    Minimized,
    /// The window was closed.
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Open an external URL in a new browsing context.
    OpenExternalUrl(String),
    /// A window's chrome changed its lifecycle state. Observed by the host, not by content.
    WindowLifecycle {
        /// Window that changed.
        window_id: WindowId,
        /// What happened.
        event: WindowLifecycleEvent,
    },
    /// Return keyboard focus to the shell root.
    FocusShellRoot,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that cannot apply to the current state.
pub enum ReducerError {
    /// The document id is not in the recycle bin.
    #[error("unknown document `{0}`")]
    UnknownDocument(DocumentId),
    /// The shell is showing the shutdown screen and only accepts a wake action.
    #[error("desktop is shut down")]
    ShutDown,
}

fn lifecycle(window_id: WindowId, event: WindowLifecycleEvent) -> RuntimeEffect {
    RuntimeEffect::WindowLifecycle { window_id, event }
}

fn pointer_delta(from: PointerPosition, to: PointerPosition) -> (i32, i32) {
    (to.x - from.x, to.y - from.y)
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Window actions never fail: unknown window ids are registered on demand. State is left
/// untouched whenever an error is returned.
///
/// # Errors
///
/// Returns [`ReducerError::ShutDown`] for any action other than
/// [`DesktopAction::WakeFromShutdown`] while the shutdown screen is shown, and
/// [`ReducerError::UnknownDocument`] when opening a document that does not exist.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    if state.shut_down && action != DesktopAction::WakeFromShutdown {
        return Err(ReducerError::ShutDown);
    }

    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { window_id } => {
            open_window(state, &window_id);
        }
        DesktopAction::FocusWindow { window_id } => {
            start_menu::close_menu(&mut state.start_menu);
            if focus_window(state, &window_id) {
                effects.push(lifecycle(window_id, WindowLifecycleEvent::Focused));
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            if minimize_window(state, &window_id) {
                effects.push(lifecycle(window_id, WindowLifecycleEvent::Minimized));
            }
        }
        DesktopAction::CloseWindow { window_id } => {
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|session| session.window_id == window_id)
            {
                interaction.dragging = None;
            }
            if interaction
                .resizing
                .as_ref()
                .is_some_and(|session| session.window_id == window_id)
            {
                interaction.resizing = None;
            }
            if close_window(state, &window_id) {
                effects.push(lifecycle(window_id, WindowLifecycleEvent::Closed));
            }
        }
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            start_menu::close_menu(&mut state.start_menu);
            let event = if state.is_active(&window_id) && !state.is_minimized(&window_id) {
                WindowLifecycleEvent::Minimized
            } else {
                WindowLifecycleEvent::Focused
            };
            if toggle_window(state, &window_id) {
                effects.push(lifecycle(window_id, event));
            }
        }
        DesktopAction::MaximizeWindow {
            window_id,
            viewport,
        } => {
            maximize_window(state, &window_id, viewport);
        }
        DesktopAction::RestoreWindow { window_id } => {
            restore_window(state, &window_id);
        }
        DesktopAction::UpdateGeometry {
            window_id,
            position,
            size,
            viewport,
        } => {
            update_geometry(state, &window_id, position, size, viewport);
        }
        DesktopAction::BeginMove {
            window_id,
            pointer,
            viewport,
        } => {
            let Some(window) = state.window(&window_id).filter(|w| w.is_open) else {
                return Ok(effects);
            };
            let rect_start = window.rect;
            let maximized = window.maximized;
            if focus_window(state, &window_id) {
                effects.push(lifecycle(window_id.clone(), WindowLifecycleEvent::Focused));
            }
            if !maximized {
                interaction.dragging = Some(DragSession {
                    window_id,
                    pointer_start: pointer,
                    rect_start,
                    viewport,
                });
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let (dx, dy) = pointer_delta(session.pointer_start, pointer);
                let next = session.rect_start.offset(dx, dy);
                update_geometry(
                    state,
                    &session.window_id,
                    Some(PointerPosition {
                        x: next.x,
                        y: next.y,
                    }),
                    None,
                    session.viewport,
                );
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
            viewport,
        } => {
            let Some(window) = state.window(&window_id).filter(|w| w.is_open) else {
                return Ok(effects);
            };
            let rect_start = window.rect;
            let maximized = window.maximized;
            if focus_window(state, &window_id) {
                effects.push(lifecycle(window_id.clone(), WindowLifecycleEvent::Focused));
            }
            if !maximized {
                interaction.resizing = Some(ResizeSession {
                    window_id,
                    edge,
                    pointer_start: pointer,
                    rect_start,
                    viewport,
                });
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_ref() {
                let (dx, dy) = pointer_delta(session.pointer_start, pointer);
                let next = resize_within(
                    session.rect_start,
                    session.edge,
                    dx,
                    dy,
                    session.viewport,
                );
                update_geometry(
                    state,
                    &session.window_id,
                    Some(PointerPosition {
                        x: next.x,
                        y: next.y,
                    }),
                    Some(WindowSize {
                        w: next.w,
                        h: next.h,
                    }),
                    session.viewport,
                );
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::ToggleStartMenu => {
            start_menu::toggle_menu(&mut state.start_menu);
        }
        DesktopAction::CloseStartMenu => {
            start_menu::close_menu(&mut state.start_menu);
        }
        DesktopAction::ExpandSubmenu { submenu } => {
            start_menu::expand_submenu(&mut state.start_menu, submenu);
        }
        DesktopAction::SelectStartMenuItem { action } => {
            if let StartMenuAction::Launch(LaunchTarget::Document(document_id)) = &action {
                if content::recycled_document(document_id).is_none() {
                    return Err(ReducerError::UnknownDocument(document_id.clone()));
                }
            }
            if let Some(target) = start_menu::select_leaf(state, action) {
                return reduce_desktop(state, interaction, launch_action(target));
            }
        }
        DesktopAction::Launch { target } => {
            return reduce_desktop(state, interaction, launch_action(target));
        }
        DesktopAction::OpenDocument { document_id } => {
            if content::recycled_document(&document_id).is_none() {
                return Err(ReducerError::UnknownDocument(document_id));
            }
            start_menu::close_menu(&mut state.start_menu);
            state.active_document = Some(document_id);
        }
        DesktopAction::CloseDocument => {
            state.active_document = None;
        }
        DesktopAction::OpenExternalUrl { url } => {
            effects.push(RuntimeEffect::OpenExternalUrl(url));
        }
        DesktopAction::WakeFromShutdown => {
            if state.shut_down {
                start_menu::wake(state);
                effects.push(RuntimeEffect::FocusShellRoot);
            }
        }
    }

    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowRect, WindowVisualState};

    fn id(value: &str) -> WindowId {
        WindowId::from(value)
    }

    fn dispatch(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
        let mut interaction = InteractionState::default();
        reduce_desktop(state, &mut interaction, action).unwrap()
    }

    #[test]
    fn focus_emits_lifecycle_once_and_closes_start_menu() {
        let mut state = DesktopState::default();
        state.start_menu.open = true;

        let first = dispatch(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: id("about"),
            },
        );
        let second = dispatch(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: id("about"),
            },
        );

        assert_eq!(
            first,
            vec![RuntimeEffect::WindowLifecycle {
                window_id: id("about"),
                event: WindowLifecycleEvent::Focused,
            }]
        );
        assert_eq!(second, Vec::new());
        assert!(!state.start_menu.open);
    }

    #[test]
    fn taskbar_toggle_minimizes_if_focused_and_restores_if_minimized() {
        let mut state = DesktopState::default();
        dispatch(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: id("about"),
            },
        );

        let effects = dispatch(
            &mut state,
            DesktopAction::ToggleTaskbarWindow {
                window_id: id("about"),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::WindowLifecycle {
                window_id: id("about"),
                event: WindowLifecycleEvent::Minimized,
            }]
        );
        assert_eq!(state.active_window, None);

        dispatch(
            &mut state,
            DesktopAction::ToggleTaskbarWindow {
                window_id: id("about"),
            },
        );
        assert_eq!(state.visual_state(&id("about")), WindowVisualState::OpenActive);
    }

    #[test]
    fn close_emits_lifecycle_and_clears_focus() {
        let mut state = DesktopState::default();
        dispatch(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: id("contact"),
            },
        );
        let effects = dispatch(
            &mut state,
            DesktopAction::CloseWindow {
                window_id: id("contact"),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::WindowLifecycle {
                window_id: id("contact"),
                event: WindowLifecycleEvent::Closed,
            }]
        );
        assert_eq!(state.active_window, None);
    }

    #[test]
    fn drag_moves_window_relative_to_pointer_and_clamps() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let viewport = Viewport { w: 800, h: 600 };
        dispatch(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: id("textpad"),
            },
        );
        let start = state.window(&id("textpad")).map(|w| w.rect).unwrap();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id("textpad"),
                pointer: PointerPosition { x: 100, y: 100 },
                viewport,
            },
        )
        .unwrap();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 125, y: 140 },
            },
        )
        .unwrap();
        assert_eq!(
            state.window(&id("textpad")).map(|w| w.rect),
            Some(start.offset(25, 40))
        );

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 2000, y: -500 },
            },
        )
        .unwrap();
        let rect = state.window(&id("textpad")).map(|w| w.rect).unwrap();
        assert_eq!((rect.x + rect.w, rect.y), (800, 0));

        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove).unwrap();
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn resize_from_corner_updates_size() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        dispatch(
            &mut state,
            DesktopAction::UpdateGeometry {
                window_id: id("docs"),
                position: Some(PointerPosition { x: 10, y: 10 }),
                size: Some(WindowSize { w: 300, h: 200 }),
                viewport: Viewport::default(),
            },
        );
        dispatch(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: id("docs"),
            },
        );

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: id("docs"),
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 310, y: 210 },
                viewport: Viewport::default(),
            },
        )
        .unwrap();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 360, y: 230 },
            },
        )
        .unwrap();

        assert_eq!(
            state.window(&id("docs")).map(|w| w.rect),
            Some(WindowRect {
                x: 10,
                y: 10,
                w: 350,
                h: 220
            })
        );
    }

    #[test]
    fn west_resize_past_the_desktop_edge_keeps_the_right_edge() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let viewport = Viewport { w: 1000, h: 700 };
        dispatch(
            &mut state,
            DesktopAction::UpdateGeometry {
                window_id: id("photos"),
                position: Some(PointerPosition { x: 110, y: 100 }),
                size: Some(WindowSize { w: 200, h: 200 }),
                viewport,
            },
        );
        dispatch(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: id("photos"),
            },
        );

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: id("photos"),
                edge: ResizeEdge::West,
                pointer: PointerPosition { x: 110, y: 150 },
                viewport,
            },
        )
        .unwrap();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: -400, y: 150 },
            },
        )
        .unwrap();

        let rect = state.window(&id("photos")).map(|w| w.rect).unwrap();
        assert_eq!((rect.x, rect.x + rect.w), (0, 310));
    }

    #[test]
    fn maximized_windows_do_not_start_drags() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        dispatch(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: id("about"),
            },
        );
        dispatch(
            &mut state,
            DesktopAction::MaximizeWindow {
                window_id: id("about"),
                viewport: Viewport::default(),
            },
        );

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id("about"),
                pointer: PointerPosition { x: 5, y: 5 },
                viewport: Viewport::default(),
            },
        )
        .unwrap();
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn start_menu_launch_focuses_window_and_closes_menu() {
        let mut state = DesktopState::default();
        dispatch(&mut state, DesktopAction::ToggleStartMenu);
        dispatch(
            &mut state,
            DesktopAction::ExpandSubmenu {
                submenu: SubmenuId::Programs,
            },
        );

        dispatch(
            &mut state,
            DesktopAction::SelectStartMenuItem {
                action: StartMenuAction::Launch(LaunchTarget::window("photos")),
            },
        );
        assert_eq!(state.active_window, Some(id("photos")));
        assert!(!state.start_menu.open);
        assert_eq!(state.start_menu.expanded, None);
    }

    #[test]
    fn launching_a_link_emits_external_url_effect() {
        let mut state = DesktopState::default();
        let effects = dispatch(
            &mut state,
            DesktopAction::Launch {
                target: LaunchTarget::ExternalUrl(content::LINKEDIN_URL),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl(
                content::LINKEDIN_URL.to_string()
            )]
        );
        assert_eq!(state, DesktopState::default());
    }

    #[test]
    fn documents_replace_each_other_and_reject_unknown_ids() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let first = DocumentId::from(content::RECYCLE_BIN[0].id);
        let second = DocumentId::from(content::RECYCLE_BIN[1].id);

        dispatch(
            &mut state,
            DesktopAction::OpenDocument {
                document_id: first,
            },
        );
        dispatch(
            &mut state,
            DesktopAction::OpenDocument {
                document_id: second.clone(),
            },
        );
        assert_eq!(state.active_document, Some(second.clone()));

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenDocument {
                document_id: DocumentId::from("bin/missing.txt"),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ReducerError::UnknownDocument(DocumentId::from("bin/missing.txt"))
        );
        assert_eq!(state.active_document, Some(second));
    }

    #[test]
    fn unknown_document_from_start_menu_leaves_menu_open() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        dispatch(&mut state, DesktopAction::ToggleStartMenu);
        dispatch(
            &mut state,
            DesktopAction::ExpandSubmenu {
                submenu: SubmenuId::Documents,
            },
        );
        let before = state.clone();

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SelectStartMenuItem {
                action: StartMenuAction::Launch(LaunchTarget::Document(DocumentId::from(
                    "bin/missing.txt",
                ))),
            },
        )
        .unwrap_err();

        assert_eq!(
            err,
            ReducerError::UnknownDocument(DocumentId::from("bin/missing.txt"))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn shutdown_blocks_everything_but_wake() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        dispatch(&mut state, DesktopAction::ToggleStartMenu);
        dispatch(
            &mut state,
            DesktopAction::SelectStartMenuItem {
                action: StartMenuAction::ShutDown,
            },
        );
        assert!(state.shut_down);

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                window_id: id("about"),
            },
        )
        .unwrap_err();
        assert_eq!(err, ReducerError::ShutDown);

        let effects = dispatch(&mut state, DesktopAction::WakeFromShutdown);
        assert_eq!(effects, vec![RuntimeEffect::FocusShellRoot]);
        assert!(!state.shut_down);
        assert!(!state.start_menu.open);
    }
}
