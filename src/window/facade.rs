//! Window control facade
//!
//! Thin adapter over the host's native window API. The native layer may be
//! missing entirely (the host runs on a platform without window control), so
//! every operation degrades to a neutral failure value instead of propagating
//! an error: `None` for queries, `false` for actions.

use std::rc::Rc;

use log::debug;

use super::{PinLevel, WindowHandle};

/// Primitive window operations supplied by the host platform layer.
///
/// Implementations must be best-effort: a handle that no longer resolves or a
/// native call that fails internally reports `None`/`false`, never panics.
pub trait NativeWindowApi {
    /// The window hosting the plugin, independent of focus.
    fn current_window(&self) -> Option<WindowHandle>;

    /// The window currently holding input focus, if any.
    fn focused_window(&self) -> Option<WindowHandle>;

    /// Ids of every top-level window belonging to the host application.
    fn window_ids(&self) -> Vec<WindowHandle>;

    fn is_focused(&self, window: WindowHandle) -> Option<bool>;

    fn is_always_on_top(&self, window: WindowHandle) -> Option<bool>;

    fn set_always_on_top(&self, window: WindowHandle, on_top: bool, level: PinLevel) -> bool;

    fn focus(&self, window: WindowHandle) -> bool;

    fn blur(&self, window: WindowHandle) -> bool;
}

/// Result of the shared toggle/ensure primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The flag was off and is now on.
    Applied,
    /// The flag was already on; the window was only refocused.
    Already,
    /// The flag was on and is now off.
    Removed,
    /// No native window could be resolved.
    Unavailable,
}

impl ToggleOutcome {
    /// Whether the window is pinned after the operation.
    pub fn pinned(self) -> bool {
        matches!(self, ToggleOutcome::Applied | ToggleOutcome::Already)
    }
}

/// Facade over an optional [`NativeWindowApi`].
#[derive(Clone)]
pub struct WindowControl {
    api: Option<Rc<dyn NativeWindowApi>>,
}

impl WindowControl {
    pub fn new(api: Rc<dyn NativeWindowApi>) -> Self {
        Self { api: Some(api) }
    }

    /// Facade with no reachable native API; every call returns its neutral
    /// failure value.
    pub fn unavailable() -> Self {
        Self { api: None }
    }

    pub fn is_available(&self) -> bool {
        self.api.is_some()
    }

    fn api(&self) -> Option<&dyn NativeWindowApi> {
        self.api.as_deref()
    }

    /// Resolve the window the plugin should treat as "current": the focused
    /// window when one exists, else the host's notion of the current window.
    pub fn current_window(&self) -> Option<WindowHandle> {
        let api = self.api()?;
        api.focused_window().or_else(|| api.current_window())
    }

    pub fn focused_window(&self) -> Option<WindowHandle> {
        self.api()?.focused_window()
    }

    pub fn window_ids(&self) -> Vec<WindowHandle> {
        self.api().map(|api| api.window_ids()).unwrap_or_default()
    }

    pub fn is_focused(&self, window: WindowHandle) -> Option<bool> {
        self.api()?.is_focused(window)
    }

    pub fn set_always_on_top(&self, window: WindowHandle, on_top: bool, level: PinLevel) -> bool {
        let Some(api) = self.api() else {
            return false;
        };
        let ok = api.set_always_on_top(window, on_top, level);
        if !ok {
            debug!("set_always_on_top failed for window {}", window.0);
        }
        ok
    }

    pub fn focus(&self, window: WindowHandle) -> bool {
        let Some(api) = self.api() else {
            return false;
        };
        let ok = api.focus(window);
        if !ok {
            debug!("focus failed for window {}", window.0);
        }
        ok
    }

    pub fn blur(&self, window: WindowHandle) -> bool {
        let Some(api) = self.api() else {
            return false;
        };
        let ok = api.blur(window);
        if !ok {
            debug!("blur failed for window {}", window.0);
        }
        ok
    }

    /// Blur whichever window currently holds focus.
    pub fn blur_focused(&self) -> bool {
        match self.focused_window() {
            Some(window) => self.blur(window),
            None => false,
        }
    }

    /// Pin state of the currently focused window.
    ///
    /// This is the only always-on-top query with a trustworthy answer; for
    /// unfocused windows the pin tracker's cache is authoritative.
    pub fn focused_pinned(&self) -> bool {
        let Some(api) = self.api() else {
            return false;
        };
        api.focused_window()
            .and_then(|window| api.is_always_on_top(window))
            .unwrap_or(false)
    }

    /// Flip the always-on-top flag of the current window and refocus it.
    pub fn toggle(&self) -> ToggleOutcome {
        let Some(api) = self.api() else {
            return ToggleOutcome::Unavailable;
        };
        let Some(window) = self.current_window() else {
            return ToggleOutcome::Unavailable;
        };
        let was_pinned = api.is_always_on_top(window).unwrap_or(false);
        api.set_always_on_top(window, !was_pinned, PinLevel::Floating);
        api.focus(window);
        if was_pinned {
            ToggleOutcome::Removed
        } else {
            ToggleOutcome::Applied
        }
    }

    /// Apply-only variant: pin the current window if it is not pinned yet.
    pub fn ensure(&self) -> ToggleOutcome {
        let Some(api) = self.api() else {
            return ToggleOutcome::Unavailable;
        };
        let Some(window) = self.current_window() else {
            return ToggleOutcome::Unavailable;
        };
        if api.is_always_on_top(window).unwrap_or(false) {
            api.focus(window);
            ToggleOutcome::Already
        } else {
            api.set_always_on_top(window, true, PinLevel::Floating);
            api.focus(window);
            ToggleOutcome::Applied
        }
    }
}
