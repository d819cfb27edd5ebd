//! Win32 backend for the window control facade
//!
//! Drives the host application's own top-level windows through the user32
//! surface. Always-on-top maps to the `HWND_TOPMOST` insert-after position,
//! queried back through the `WS_EX_TOPMOST` extended style bit.

use windows::Win32::Foundation::{BOOL, HWND, LPARAM};
use windows::Win32::System::Threading::GetCurrentProcessId;
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetForegroundWindow, GetShellWindow, GetWindowLongW, GetWindowThreadProcessId,
    IsWindow, IsWindowVisible, SetForegroundWindow, SetWindowPos, GWL_EXSTYLE, HWND_NOTOPMOST,
    HWND_TOPMOST, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, WS_EX_TOPMOST,
};

use super::{NativeWindowApi, PinLevel, WindowHandle};

/// Window API backend for hosts running on Windows.
#[derive(Debug, Default)]
pub struct Win32WindowApi;

impl Win32WindowApi {
    pub fn new() -> Self {
        Self
    }
}

fn to_hwnd(window: WindowHandle) -> HWND {
    HWND(window.0 as isize as *mut core::ffi::c_void)
}

fn to_handle(hwnd: HWND) -> WindowHandle {
    WindowHandle(hwnd.0 as isize as i64)
}

/// Whether the window is a live, visible top-level window of this process.
fn is_own_window(hwnd: HWND) -> bool {
    unsafe {
        if hwnd.0.is_null() || !IsWindow(hwnd).as_bool() || !IsWindowVisible(hwnd).as_bool() {
            return false;
        }
        let mut pid: u32 = 0;
        GetWindowThreadProcessId(hwnd, Some(&mut pid));
        pid != 0 && pid == GetCurrentProcessId()
    }
}

unsafe extern "system" fn enum_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let windows = &mut *(lparam.0 as *mut Vec<WindowHandle>);
    if is_own_window(hwnd) {
        windows.push(to_handle(hwnd));
    }
    BOOL(1)
}

impl NativeWindowApi for Win32WindowApi {
    fn current_window(&self) -> Option<WindowHandle> {
        // Best effort: the foreground window when it is ours, else the first
        // of the process's own top-level windows in z-order.
        self.focused_window()
            .or_else(|| self.window_ids().into_iter().next())
    }

    fn focused_window(&self) -> Option<WindowHandle> {
        unsafe {
            let hwnd = GetForegroundWindow();
            if is_own_window(hwnd) {
                Some(to_handle(hwnd))
            } else {
                None
            }
        }
    }

    fn window_ids(&self) -> Vec<WindowHandle> {
        let mut windows: Vec<WindowHandle> = Vec::new();
        unsafe {
            let _ = EnumWindows(
                Some(enum_proc),
                LPARAM(&mut windows as *mut Vec<WindowHandle> as isize),
            );
        }
        windows
    }

    fn is_focused(&self, window: WindowHandle) -> Option<bool> {
        let hwnd = to_hwnd(window);
        if !is_own_window(hwnd) {
            return None;
        }
        unsafe { Some(GetForegroundWindow() == hwnd) }
    }

    fn is_always_on_top(&self, window: WindowHandle) -> Option<bool> {
        let hwnd = to_hwnd(window);
        if !is_own_window(hwnd) {
            return None;
        }
        unsafe {
            let ex_style = GetWindowLongW(hwnd, GWL_EXSTYLE) as u32;
            Some(ex_style & WS_EX_TOPMOST.0 != 0)
        }
    }

    fn set_always_on_top(&self, window: WindowHandle, on_top: bool, _level: PinLevel) -> bool {
        let hwnd = to_hwnd(window);
        if !is_own_window(hwnd) {
            return false;
        }
        let insert_after = if on_top { HWND_TOPMOST } else { HWND_NOTOPMOST };
        unsafe {
            SetWindowPos(
                hwnd,
                insert_after,
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
            )
            .is_ok()
        }
    }

    fn focus(&self, window: WindowHandle) -> bool {
        let hwnd = to_hwnd(window);
        if !is_own_window(hwnd) {
            return false;
        }
        unsafe { SetForegroundWindow(hwnd).as_bool() }
    }

    fn blur(&self, window: WindowHandle) -> bool {
        let hwnd = to_hwnd(window);
        if !is_own_window(hwnd) {
            return false;
        }
        unsafe {
            if GetForegroundWindow() != hwnd {
                // Already unfocused, nothing to do.
                return true;
            }
            let shell = GetShellWindow();
            if shell.0.is_null() {
                return false;
            }
            SetForegroundWindow(shell).as_bool()
        }
    }
}
