//! Pin indicator management
//!
//! Keeps exactly one badge per open window in sync with that window's
//! believed pin state. Two writers feed the same per-window record: UI events
//! (toggle results, pop-out finalization) and the periodic poll that re-reads
//! the focused window's native state. Both run on the host's UI thread, so the
//! most recent write always wins.
//!
//! Visibility policy:
//! - Main window: a badge exists only while the setting is enabled and the
//!   window is pinned.
//! - Pop-out windows: a badge exists whenever the setting is enabled; its
//!   pinned style tracks the boolean.

use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

use log::debug;

use crate::host::{DocumentId, IndicatorId, IndicatorSurface, WindowClass, Workspace};
use crate::pin::PinTracker;
use crate::settings::Settings;
use crate::window::WindowControl;

/// Fixed interval of the pin-state poll.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Delay between a badge click's focus request and the toggle it triggers,
/// long enough for the focus transition to land so the toggle observes the
/// now-focused window.
pub const CLICK_TOGGLE_DELAY: Duration = Duration::from_millis(50);

pub struct IndicatorManager {
    surface: Box<dyn IndicatorSurface>,
    indicators: HashMap<DocumentId, IndicatorId>,
    pins: PinTracker,
}

impl IndicatorManager {
    pub fn new(surface: Box<dyn IndicatorSurface>) -> Self {
        Self {
            surface,
            indicators: HashMap::new(),
            pins: PinTracker::new(),
        }
    }

    /// Evaluate every currently open window and create badges where the
    /// policy warrants one.
    pub fn init(
        &mut self,
        settings: &Settings,
        control: &WindowControl,
        workspace: &dyn Workspace,
    ) {
        for doc in workspace.open_documents() {
            self.add_indicator(doc, settings, control, workspace);
        }
    }

    /// Remove every badge and forget all pin state.
    pub fn dispose(&mut self) {
        for (_, id) in self.indicators.drain() {
            self.surface.remove(id);
        }
        self.pins.clear();
    }

    pub fn handle_window_opened(
        &mut self,
        doc: DocumentId,
        settings: &Settings,
        control: &WindowControl,
        workspace: &dyn Workspace,
    ) {
        self.add_indicator(doc, settings, control, workspace);
    }

    pub fn handle_window_closed(&mut self, doc: DocumentId) {
        self.remove_indicator(doc);
    }

    /// Externally computed pin state for one window, followed by a policy
    /// re-evaluation of that window.
    pub fn set_pinned(
        &mut self,
        doc: DocumentId,
        pinned: bool,
        settings: &Settings,
        control: &WindowControl,
        workspace: &dyn Workspace,
    ) {
        self.pins.set(doc, pinned);
        self.update_indicator(doc, settings, control, workspace);
    }

    /// Cached pin state for one window.
    pub fn pin_state(&self, doc: DocumentId) -> bool {
        self.pins.get(doc)
    }

    pub fn has_indicator(&self, doc: DocumentId) -> bool {
        self.indicators.contains_key(&doc)
    }

    /// The document currently holding input focus among the main window and
    /// every tracked window.
    pub fn focused_document(&self, workspace: &dyn Workspace) -> Option<DocumentId> {
        let main = workspace.main_document();
        if workspace.document_has_focus(main) {
            return Some(main);
        }
        self.tracked_documents(None)
            .into_iter()
            .find(|doc| workspace.document_has_focus(*doc))
    }

    /// Re-evaluate every tracked window; also run after a toggle or a pop-out
    /// finalization.
    pub fn refresh_all(
        &mut self,
        settings: &Settings,
        control: &WindowControl,
        workspace: &dyn Workspace,
    ) {
        let main = settings
            .main_indicator
            .show
            .then(|| workspace.main_document());
        for doc in self.tracked_documents(main) {
            self.update_indicator(doc, settings, control, workspace);
        }
    }

    /// Settings changed: rebuild every badge from scratch.
    pub fn refresh_config(
        &mut self,
        settings: &Settings,
        control: &WindowControl,
        workspace: &dyn Workspace,
    ) {
        self.dispose();
        self.init(settings, control, workspace);
    }

    /// Documents with a badge or a pin record, plus an optional extra (the
    /// main window while its indicator setting is enabled, so a pin applied
    /// elsewhere can surface its badge on the next pass).
    fn tracked_documents(&self, extra: Option<DocumentId>) -> Vec<DocumentId> {
        let mut docs: BTreeSet<DocumentId> = self.indicators.keys().copied().collect();
        docs.extend(self.pins.documents());
        docs.extend(extra);
        docs.into_iter().collect()
    }

    fn window_class(doc: DocumentId, workspace: &dyn Workspace) -> WindowClass {
        if doc == workspace.main_document() {
            WindowClass::Main
        } else {
            WindowClass::Popout
        }
    }

    fn add_indicator(
        &mut self,
        doc: DocumentId,
        settings: &Settings,
        control: &WindowControl,
        workspace: &dyn Workspace,
    ) {
        if self.indicators.contains_key(&doc) {
            return;
        }

        let class = Self::window_class(doc, workspace);
        match class {
            WindowClass::Main => {
                if !settings.main_indicator.show {
                    return;
                }
                let focused = workspace.document_has_focus(doc);
                if !self.pins.effective(doc, focused, control) {
                    return;
                }
            }
            WindowClass::Popout => {
                if !settings.popout_indicator.show {
                    return;
                }
            }
        }

        let config = settings.indicator_config(class);
        let Some(id) = self.surface.create(doc, class, config) else {
            // Surface cannot render; degrade to no indicator, silently.
            debug!("indicator creation failed for document {}", doc.0);
            return;
        };
        self.indicators.insert(doc, id);
        self.update_indicator(doc, settings, control, workspace);
    }

    fn remove_indicator(&mut self, doc: DocumentId) {
        if let Some(id) = self.indicators.remove(&doc) {
            self.surface.remove(id);
        }
        self.pins.forget(doc);
    }

    fn update_indicator(
        &mut self,
        doc: DocumentId,
        settings: &Settings,
        control: &WindowControl,
        workspace: &dyn Workspace,
    ) {
        let class = Self::window_class(doc, workspace);
        let focused = workspace.document_has_focus(doc);
        let pinned = self.pins.effective(doc, focused, control);

        if class == WindowClass::Main && settings.main_indicator.show {
            let present = self.indicators.contains_key(&doc);
            if pinned && !present {
                self.add_indicator(doc, settings, control, workspace);
                return;
            }
            if !pinned && present {
                self.remove_indicator(doc);
                return;
            }
        }

        if let Some(&id) = self.indicators.get(&doc) {
            let config = settings.indicator_config(class);
            self.surface.apply_layout(id, config);
            self.surface.set_pinned(id, pinned);
        }
    }
}
