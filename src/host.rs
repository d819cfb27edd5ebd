//! Host application boundary
//!
//! The plugin never talks to the document-editing host directly; everything it
//! needs from the host UI layer comes in through the traits defined here. The
//! host hands an implementation to [`crate::plugin::PinTopPlugin`] at load
//! time and keeps it alive for the plugin's lifetime.

use crate::settings::{IndicatorConfig, JournalPeriod};

/// Identity of an open top-level UI window, as assigned by the host.
///
/// This is distinct from the native [`crate::window::WindowHandle`]: the host
/// reports lifecycle events and routes indicator clicks in terms of document
/// ids, while the native window id only becomes known after an asynchronous
/// correlation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

/// Handle to a rendered pin badge, issued by the host's [`IndicatorSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndicatorId(pub u64);

/// Window classification used by the indicator visibility policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowClass {
    Main,
    Popout,
}

/// Host workspace operations consumed by the plugin.
///
/// All methods are infallible from the caller's perspective; operations that
/// can fail report through `bool`/`Option` results and the host logs the
/// underlying cause itself.
pub trait Workspace {
    /// The document id of the host's main window.
    fn main_document(&self) -> DocumentId;

    /// Every currently open top-level window, main window included.
    fn open_documents(&self) -> Vec<DocumentId>;

    /// Whether the given window currently holds input focus at the UI level.
    fn document_has_focus(&self, doc: DocumentId) -> bool;

    /// Open a new top-level window duplicating the currently active document.
    fn open_popout_with_active_document(&self);

    /// Open a new top-level window with no content.
    fn open_popout_blank(&self);

    /// Open the named file in a new top-level window. Returns `false` when the
    /// path does not resolve; the window may still open empty in that case.
    fn open_popout_file(&self, path: &str) -> bool;

    /// Create a note at `path`, optionally populated from a template file.
    fn create_note(&self, path: &str, template: Option<&str>) -> bool;

    /// Create or resolve the periodic note for `period`, returning its path.
    fn create_journal_note(&self, period: JournalPeriod) -> Option<String>;

    fn file_exists(&self, path: &str) -> bool;

    fn folder_exists(&self, path: &str) -> bool;

    /// Journal periods the host's periodic-note facility can serve.
    fn available_journal_periods(&self) -> Vec<JournalPeriod>;

    /// Vault name used as the deep-link guard.
    fn vault_name(&self) -> String;

    /// Surface a user-visible notice.
    fn notify(&self, message: &str);
}

/// Rendering surface for pin badges.
///
/// Rendering and styling are entirely the host's business; the plugin only
/// decides when a badge exists, where its configured offsets come from, and
/// whether it carries the pinned style.
pub trait IndicatorSurface {
    /// Create a badge in the given window. `None` means the surface cannot
    /// render (for example the window is already gone); the plugin degrades
    /// to showing no indicator there.
    fn create(
        &mut self,
        doc: DocumentId,
        class: WindowClass,
        config: &IndicatorConfig,
    ) -> Option<IndicatorId>;

    /// Remove a badge. Must tolerate handles that were already removed.
    fn remove(&mut self, id: IndicatorId);

    /// Switch the badge between its pinned and unpinned visual state.
    fn set_pinned(&mut self, id: IndicatorId, pinned: bool);

    /// Re-apply configured offsets and sizes to an existing badge.
    fn apply_layout(&mut self, id: IndicatorId, config: &IndicatorConfig);
}
