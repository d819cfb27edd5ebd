//! Delayed-callback scheduling
//!
//! The plugin runs on the host's single UI thread and may not block, so every
//! "do this in a few milliseconds" step is recorded here and executed when the
//! host's periodic tick reaches the due time. Each entry is individually
//! cancellable, which is what lets a pending correlation retry be dropped on
//! disposal instead of firing into torn-down state.

use std::time::Instant;

use crate::host::DocumentId;
use crate::window::WindowHandle;

/// Work items the plugin schedules for later execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Retry correlating a launched pop-out with its native window.
    FinalizePopout { attempt: u32 },
    /// Run the shared toggle after an indicator click's focus transition.
    ToggleFocused { doc: DocumentId },
    /// Delayed focus restoration on the main window.
    FocusWindow { window: WindowHandle },
    /// One shot of the staggered post-close blur.
    BlurWindow { window: WindowHandle },
}

/// Handle to a scheduled entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Entry {
    id: TaskId,
    due: Instant,
    task: Task,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    entries: Vec<Entry>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_at(&mut self, due: Instant, task: Task) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, due, task });
        id
    }

    /// Cancel a scheduled entry. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Remove and return every entry due at or before `now`, ordered by due
    /// time (scheduling order breaks ties).
    pub fn take_due(&mut self, now: Instant) -> Vec<Task> {
        let (mut ready, rest): (Vec<Entry>, Vec<Entry>) =
            self.entries.drain(..).partition(|entry| entry.due <= now);
        self.entries = rest;
        ready.sort_by_key(|entry| (entry.due, entry.id.0));
        ready.into_iter().map(|entry| entry.task).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
