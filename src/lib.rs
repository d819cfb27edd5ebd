//! pintop - always-on-top window pinning for document-editing hosts
//!
//! This crate is a host-application plugin that tracks and toggles the
//! always-on-top state of the host's native windows, renders a small pin
//! badge per window, and manages pop-out windows that are pinned on creation
//! and unwound when they close. The host supplies the native window API, the
//! workspace operations and the badge rendering surface; the plugin supplies
//! the state machines in between.

pub mod commands;
pub mod error;
pub mod host;
pub mod indicator;
pub mod pin;
pub mod plugin;
pub mod popout;
pub mod scheduler;
pub mod settings;
pub mod utils;
pub mod window;

pub use error::{PinTopError, PinTopResult};
pub use host::{DocumentId, IndicatorId, IndicatorSurface, WindowClass, Workspace};
pub use plugin::PinTopPlugin;
pub use settings::{CommandAction, CustomCommand, IndicatorConfig, JournalPeriod, Settings};
pub use window::{NativeWindowApi, PinLevel, ToggleOutcome, WindowControl, WindowHandle};

#[cfg(windows)]
pub use window::Win32WindowApi;
