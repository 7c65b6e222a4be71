//! Window registry and focus transitions used by the desktop reducer.
//!
//! Every helper is tolerant: an unknown [`WindowId`] is registered on demand rather than
//! rejected, and each helper returns whether it changed anything.

use crate::{
    catalog,
    model::{
        DesktopState, PointerPosition, ResizeEdge, Viewport, WindowId, WindowRect, WindowSize,
        WindowState,
    },
};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 200;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 150;
/// Maximum window width as a percentage of the viewport width.
pub const MAX_WIDTH_PERCENT: i32 = 94;
/// Maximum window height as a percentage of the viewport height.
pub const MAX_HEIGHT_PERCENT: i32 = 90;

fn window_entry<'a>(state: &'a mut DesktopState, window_id: &WindowId) -> &'a mut WindowState {
    let index = match state.windows.iter().position(|w| &w.id == window_id) {
        Some(index) => index,
        None => {
            let rect = catalog::descriptor(window_id).default_rect(Viewport::default());
            state
                .windows
                .push(WindowState::closed(window_id.clone(), rect));
            state.windows.len() - 1
        }
    };
    &mut state.windows[index]
}

/// Clamps `rect` to the size limits and keeps it fully inside `viewport`.
pub fn clamp_rect(rect: WindowRect, viewport: Viewport) -> WindowRect {
    let max_w = max_extent(viewport.w, MAX_WIDTH_PERCENT, MIN_WINDOW_WIDTH);
    let max_h = max_extent(viewport.h, MAX_HEIGHT_PERCENT, MIN_WINDOW_HEIGHT);
    let w = rect.w.clamp(MIN_WINDOW_WIDTH, max_w);
    let h = rect.h.clamp(MIN_WINDOW_HEIGHT, max_h);
    WindowRect {
        x: rect.x.clamp(0, (viewport.w - w).max(0)),
        y: rect.y.clamp(0, (viewport.h - h).max(0)),
        w,
        h,
    }
}

/// Marks `window_id` open without changing focus. Idempotent.
pub fn open_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let window = window_entry(state, window_id);
    if window.is_open {
        return false;
    }
    window.is_open = true;
    window.minimized = false;
    true
}

/// Closes `window_id`, keeping its last geometry for the next open.
///
/// A maximized window is restored first so it reopens at its normal size, and an active window
/// gives up focus.
pub fn close_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let Some(window) = state.windows.iter_mut().find(|w| &w.id == window_id) else {
        return false;
    };
    if !window.is_open {
        return false;
    }
    window.is_open = false;
    window.minimized = false;
    if window.maximized {
        if let Some(restore) = window.restore_rect.take() {
            window.rect = restore;
        }
        window.maximized = false;
    }
    normalize_focus(state);
    true
}

/// Sets the minimized flag independently of the open flag.
pub fn set_minimized(state: &mut DesktopState, window_id: &WindowId, minimized: bool) -> bool {
    let window = window_entry(state, window_id);
    if window.minimized == minimized {
        return false;
    }
    window.minimized = minimized;
    normalize_focus(state);
    true
}

/// Minimizes `window_id`; when it was active, no other window inherits focus.
pub fn minimize_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let was_active = state.is_active(window_id);
    let changed = set_minimized(state, window_id, true);
    if was_active {
        state.active_window = None;
    }
    changed || was_active
}

/// Opens, unminimizes, activates, and raises `window_id`.
///
/// Focusing the window that is already active and topmost is a no-op, so repeated focus does not
/// churn the stack counter.
pub fn focus_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let top = state.top_z_index();
    let already_focused_top = state.is_active(window_id)
        && state
            .window(window_id)
            .map(|w| w.is_open && !w.minimized && w.z_index == top)
            .unwrap_or(false);
    if already_focused_top {
        return false;
    }

    let z_index = state.next_z_index;
    state.next_z_index = state.next_z_index.saturating_add(1);
    let window = window_entry(state, window_id);
    window.is_open = true;
    window.minimized = false;
    window.z_index = z_index;
    state.active_window = Some(window_id.clone());
    true
}

/// Taskbar toggle: minimizes the active visible window, focuses anything else.
pub fn toggle_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    if state.is_active(window_id) && !state.is_minimized(window_id) {
        minimize_window(state, window_id)
    } else {
        focus_window(state, window_id)
    }
}

/// Fills the viewport with an open window and remembers its previous rect.
pub fn maximize_window(state: &mut DesktopState, window_id: &WindowId, viewport: Viewport) -> bool {
    let Some(window) = state.windows.iter_mut().find(|w| &w.id == window_id) else {
        return false;
    };
    if !window.is_open || window.maximized {
        return false;
    }
    window.restore_rect = Some(window.rect);
    window.rect = viewport.rect();
    window.maximized = true;
    true
}

/// Returns a maximized window to its remembered rect.
pub fn restore_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let Some(window) = state.windows.iter_mut().find(|w| &w.id == window_id) else {
        return false;
    };
    if !window.maximized {
        return false;
    }
    if let Some(restore) = window.restore_rect.take() {
        window.rect = restore;
    }
    window.maximized = false;
    true
}

/// Applies a drag or resize tick. Last write wins after clamping to the viewport.
pub fn update_geometry(
    state: &mut DesktopState,
    window_id: &WindowId,
    position: Option<PointerPosition>,
    size: Option<WindowSize>,
    viewport: Viewport,
) -> bool {
    let window = window_entry(state, window_id);
    let mut next = window.rect;
    if let Some(size) = size {
        next.w = size.w;
        next.h = size.h;
    }
    if let Some(position) = position {
        next.x = position.x;
        next.y = position.y;
    }
    let next = clamp_rect(next, viewport);
    if next == window.rect {
        return false;
    }
    window.rect = next;
    true
}

fn max_extent(available: i32, percent: i32, min: i32) -> i32 {
    (available * percent / 100).max(min)
}

/// Resizes one axis. A moving start edge is clamped against the fixed end edge so the far side
/// of the window never shifts; a moving end edge stops at the viewport and the size limits.
fn resize_axis(
    (pos, len): (i32, i32),
    delta: i32,
    (moves_start, moves_end): (bool, bool),
    min: i32,
    max: i32,
    available: i32,
) -> (i32, i32) {
    if moves_start {
        let end = pos + len;
        let latest = end - min;
        let earliest = (end - max).max(0).min(latest);
        let next = (pos + delta).clamp(earliest, latest);
        (next, end - next)
    } else if moves_end {
        let max = max.min(available - pos).max(min);
        (pos, (len + delta).clamp(min, max))
    } else {
        (pos, len)
    }
}

/// Resize tick for an edge/corner drag, bounded by `viewport`.
///
/// Unlike [`clamp_rect`], the edge opposite the one being dragged stays where it started.
pub fn resize_within(
    start: WindowRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    viewport: Viewport,
) -> WindowRect {
    let (x, w) = resize_axis(
        (start.x, start.w),
        dx,
        (
            matches!(
                edge,
                ResizeEdge::West | ResizeEdge::NorthWest | ResizeEdge::SouthWest
            ),
            matches!(
                edge,
                ResizeEdge::East | ResizeEdge::NorthEast | ResizeEdge::SouthEast
            ),
        ),
        MIN_WINDOW_WIDTH,
        max_extent(viewport.w, MAX_WIDTH_PERCENT, MIN_WINDOW_WIDTH),
        viewport.w,
    );
    let (y, h) = resize_axis(
        (start.y, start.h),
        dy,
        (
            matches!(
                edge,
                ResizeEdge::North | ResizeEdge::NorthEast | ResizeEdge::NorthWest
            ),
            matches!(
                edge,
                ResizeEdge::South | ResizeEdge::SouthEast | ResizeEdge::SouthWest
            ),
        ),
        MIN_WINDOW_HEIGHT,
        max_extent(viewport.h, MAX_HEIGHT_PERCENT, MIN_WINDOW_HEIGHT),
        viewport.h,
    );
    WindowRect { x, y, w, h }
}

/// Drops `active_window` when it no longer names an open, visible window.
pub fn normalize_focus(state: &mut DesktopState) {
    let valid = match state.active_window.as_ref() {
        Some(active) => state
            .window(active)
            .map(|w| w.is_open && !w.minimized)
            .unwrap_or(false),
        None => true,
    };
    if !valid {
        state.active_window = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowVisualState;

    fn id(value: &str) -> WindowId {
        WindowId::from(value)
    }

    #[test]
    fn focus_opens_unminimizes_and_activates() {
        let mut state = DesktopState::default();
        set_minimized(&mut state, &id("about"), true);

        assert!(focus_window(&mut state, &id("about")));
        assert_eq!(state.active_window, Some(id("about")));
        assert!(state.is_open(&id("about")));
        assert!(!state.is_minimized(&id("about")));
    }

    #[test]
    fn repeated_focus_is_idempotent() {
        let mut state = DesktopState::default();
        focus_window(&mut state, &id("about"));
        let once = state.clone();

        assert!(!focus_window(&mut state, &id("about")));
        assert_eq!(state, once);
    }

    #[test]
    fn focus_raises_above_previously_active_window() {
        let mut state = DesktopState::default();
        focus_window(&mut state, &id("about"));
        focus_window(&mut state, &id("projects"));
        focus_window(&mut state, &id("about"));

        let about = state.window(&id("about")).map(|w| w.z_index);
        let projects = state.window(&id("projects")).map(|w| w.z_index);
        assert!(about > projects);
        assert_eq!(
            state.visual_state(&id("projects")),
            WindowVisualState::OpenBackground
        );
    }

    #[test]
    fn minimizing_active_window_leaves_no_active_window() {
        let mut state = DesktopState::default();
        focus_window(&mut state, &id("about"));
        focus_window(&mut state, &id("projects"));

        minimize_window(&mut state, &id("projects"));
        assert_eq!(state.active_window, None);
        assert_eq!(
            state.visual_state(&id("projects")),
            WindowVisualState::OpenMinimized
        );
        assert_eq!(
            state.visual_state(&id("about")),
            WindowVisualState::OpenBackground
        );
    }

    #[test]
    fn minimizing_background_window_keeps_focus() {
        let mut state = DesktopState::default();
        focus_window(&mut state, &id("about"));
        focus_window(&mut state, &id("projects"));

        minimize_window(&mut state, &id("about"));
        assert_eq!(state.active_window, Some(id("projects")));
    }

    #[test]
    fn toggle_minimizes_active_and_focuses_everything_else() {
        let mut state = DesktopState::default();
        focus_window(&mut state, &id("about"));

        toggle_window(&mut state, &id("about"));
        assert_eq!(
            state.visual_state(&id("about")),
            WindowVisualState::OpenMinimized
        );

        toggle_window(&mut state, &id("about"));
        assert_eq!(state.visual_state(&id("about")), WindowVisualState::OpenActive);

        toggle_window(&mut state, &id("contact"));
        assert_eq!(
            state.visual_state(&id("contact")),
            WindowVisualState::OpenActive
        );
        assert_eq!(
            state.visual_state(&id("about")),
            WindowVisualState::OpenBackground
        );
    }

    #[test]
    fn close_keeps_geometry_and_clears_focus() {
        let mut state = DesktopState::default();
        focus_window(&mut state, &id("about"));
        update_geometry(
            &mut state,
            &id("about"),
            Some(PointerPosition { x: 10, y: 20 }),
            Some(WindowSize { w: 300, h: 200 }),
            Viewport::default(),
        );

        assert!(close_window(&mut state, &id("about")));
        assert_eq!(state.active_window, None);
        assert_eq!(state.visual_state(&id("about")), WindowVisualState::Closed);

        focus_window(&mut state, &id("about"));
        assert_eq!(
            state.window(&id("about")).map(|w| w.rect),
            Some(WindowRect {
                x: 10,
                y: 20,
                w: 300,
                h: 200
            })
        );
    }

    #[test]
    fn close_of_unknown_window_is_a_no_op() {
        let mut state = DesktopState::default();
        assert!(!close_window(&mut state, &id("ghost")));
        assert!(state.windows.is_empty());
    }

    #[test]
    fn open_registers_unknown_windows_without_focus() {
        let mut state = DesktopState::default();
        assert!(open_window(&mut state, &id("scratch")));
        assert!(!open_window(&mut state, &id("scratch")));
        assert_eq!(
            state.visual_state(&id("scratch")),
            WindowVisualState::OpenBackground
        );
        assert_eq!(state.active_window, None);
    }

    #[test]
    fn closing_maximized_window_restores_its_normal_rect() {
        let mut state = DesktopState::default();
        focus_window(&mut state, &id("textpad"));
        let before = state.window(&id("textpad")).map(|w| w.rect);

        maximize_window(&mut state, &id("textpad"), Viewport { w: 800, h: 600 });
        assert_eq!(
            state.window(&id("textpad")).map(|w| w.rect),
            Some(Viewport { w: 800, h: 600 }.rect())
        );

        close_window(&mut state, &id("textpad"));
        let window = state.window(&id("textpad")).cloned();
        assert_eq!(window.as_ref().map(|w| w.maximized), Some(false));
        assert_eq!(window.map(|w| w.rect), before);
    }

    #[test]
    fn restore_returns_to_rect_before_maximize() {
        let mut state = DesktopState::default();
        focus_window(&mut state, &id("docs"));
        let before = state.window(&id("docs")).map(|w| w.rect);

        maximize_window(&mut state, &id("docs"), Viewport::default());
        assert!(restore_window(&mut state, &id("docs")));
        assert_eq!(state.window(&id("docs")).map(|w| w.rect), before);
        assert!(!restore_window(&mut state, &id("docs")));
    }

    #[test]
    fn clamp_enforces_min_and_viewport_bounds() {
        let viewport = Viewport { w: 1000, h: 600 };
        assert_eq!(
            clamp_rect(
                WindowRect {
                    x: -50,
                    y: 900,
                    w: 50,
                    h: 5000
                },
                viewport
            ),
            WindowRect {
                x: 0,
                y: 60,
                w: MIN_WINDOW_WIDTH,
                h: 540
            }
        );
        assert_eq!(
            clamp_rect(
                WindowRect {
                    x: 900,
                    y: 0,
                    w: 2000,
                    h: 300
                },
                viewport
            ),
            WindowRect {
                x: 60,
                y: 0,
                w: 940,
                h: 300
            }
        );
    }

    #[test]
    fn west_resize_stops_at_minimum_width() {
        let start = WindowRect {
            x: 100,
            y: 100,
            w: 300,
            h: 300,
        };
        let rect = resize_within(start, ResizeEdge::West, 250, 0, Viewport::default());
        assert_eq!(
            rect,
            WindowRect {
                x: 200,
                y: 100,
                w: MIN_WINDOW_WIDTH,
                h: 300
            }
        );
    }

    #[test]
    fn west_resize_keeps_right_edge_at_viewport_and_width_limits() {
        let viewport = Viewport { w: 1000, h: 700 };
        let start = WindowRect {
            x: 110,
            y: 100,
            w: 200,
            h: 200,
        };
        let past_left = resize_within(start, ResizeEdge::West, -500, 0, viewport);
        assert_eq!((past_left.x, past_left.x + past_left.w), (0, 310));

        let wide = WindowRect {
            x: 400,
            y: 0,
            w: 600,
            h: 300,
        };
        let past_max = resize_within(wide, ResizeEdge::West, -400, 0, viewport);
        assert_eq!((past_max.x, past_max.w), (60, 940));
        assert_eq!(past_max.x + past_max.w, 1000);
        assert_eq!(clamp_rect(past_max, viewport), past_max);
    }

    #[test]
    fn north_resize_keeps_bottom_edge_fixed() {
        let viewport = Viewport { w: 1000, h: 700 };
        let start = WindowRect {
            x: 0,
            y: 300,
            w: 400,
            h: 400,
        };
        let rect = resize_within(start, ResizeEdge::NorthWest, 0, -400, viewport);
        assert_eq!((rect.y, rect.h), (70, 630));
        assert_eq!(rect.y + rect.h, 700);

        let shrunk = resize_within(start, ResizeEdge::North, 0, 390, viewport);
        assert_eq!((shrunk.y, shrunk.h), (550, MIN_WINDOW_HEIGHT));
    }

    #[test]
    fn east_resize_stops_at_viewport_without_moving_left_edge() {
        let viewport = Viewport { w: 1000, h: 700 };
        let start = WindowRect {
            x: 700,
            y: 50,
            w: 250,
            h: 200,
        };
        let rect = resize_within(start, ResizeEdge::SouthEast, 400, 0, viewport);
        assert_eq!(
            rect,
            WindowRect {
                x: 700,
                y: 50,
                w: 300,
                h: 200
            }
        );
    }

    #[test]
    fn south_east_resize_grows_both_axes() {
        let start = WindowRect {
            x: 10,
            y: 10,
            w: 300,
            h: 200,
        };
        assert_eq!(
            resize_within(start, ResizeEdge::SouthEast, 40, 25, Viewport::default()),
            WindowRect {
                x: 10,
                y: 10,
                w: 340,
                h: 225
            }
        );
    }
}
