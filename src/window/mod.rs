//! Native window control
//!
//! Home of the window-control facade and its backends. The facade talks to a
//! host-provided [`NativeWindowApi`]; `win32.rs` ships the backend for hosts
//! running on Windows.

pub mod facade;
#[cfg(windows)]
pub mod win32;

pub use facade::{NativeWindowApi, ToggleOutcome, WindowControl};
#[cfg(windows)]
pub use win32::Win32WindowApi;

/// Opaque identifier of a native OS-level window.
///
/// Not owned by the plugin; a handle may stop resolving between any two calls
/// when its window closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowHandle(pub i64);

/// Stacking level hint passed alongside an always-on-top request.
///
/// Backends without level support ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinLevel {
    Normal,
    #[default]
    Floating,
}
