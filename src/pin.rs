//! Last-known pin state per open window
//!
//! The native window is the source of truth only while it holds input focus;
//! for every other window the cached value is authoritative. Both the poll
//! tick and explicit overrides write into the same record, and the most
//! recently computed value always wins.

use std::collections::HashMap;

use crate::host::DocumentId;
use crate::window::WindowControl;

#[derive(Debug, Default)]
pub struct PinTracker {
    states: HashMap<DocumentId, bool>,
}

impl PinTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Externally computed pin state, e.g. a toggle result or a pop-out
    /// finalization forcing `true`.
    pub fn set(&mut self, doc: DocumentId, pinned: bool) {
        self.states.insert(doc, pinned);
    }

    /// Cached pin state; unknown windows read as unpinned.
    pub fn get(&self, doc: DocumentId) -> bool {
        self.states.get(&doc).copied().unwrap_or(false)
    }

    pub fn forget(&mut self, doc: DocumentId) {
        self.states.remove(&doc);
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// Documents with a recorded pin state.
    pub fn documents(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.states.keys().copied()
    }

    /// Pin state under the focused-window authority rule: a focused window is
    /// re-read from the native side and the cache updated, anything else
    /// answers from the cache.
    pub fn effective(
        &mut self,
        doc: DocumentId,
        focused: bool,
        control: &WindowControl,
    ) -> bool {
        if focused {
            let pinned = control.focused_pinned();
            self.states.insert(doc, pinned);
            pinned
        } else {
            self.get(doc)
        }
    }
}
