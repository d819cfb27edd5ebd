//! Pop-out window lifecycle
//!
//! Launching a pop-out and learning which native window it became are two
//! separate events: the host opens the window asynchronously and only reports
//! a document-level `window-open`. The controller bridges the gap by
//! snapshotting the native window set before launch and looking for a new id
//! afterwards, retrying for a bounded period because the creation delay is
//! unknown.
//!
//! The launch also decides what happens to the main window once the pop-out
//! closes again: restore its focus, or keep it in the background. The host
//! has focus-management of its own that likes to refocus the main window
//! after a child closes, so the background case issues the corrective blur
//! several times over a short span.

use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

use chrono::NaiveDate;
use log::{debug, warn};

use crate::host::{DocumentId, Workspace};
use crate::indicator::IndicatorManager;
use crate::scheduler::{Scheduler, Task, TaskId};
use crate::settings::{CommandAction, CustomCommand, Settings};
use crate::utils::resolve_file_name_rule;
use crate::window::{PinLevel, WindowControl, WindowHandle};

/// Correlation retry budget.
pub const FINALIZE_MAX_ATTEMPTS: u32 = 10;
pub const FINALIZE_RETRY_DELAY: std::time::Duration = std::time::Duration::from_millis(75);

/// Timing policy for the focus corrections around a pop-out close.
///
/// The staggered blur exists to out-race the host's own refocus behavior; the
/// exact number and spacing of attempts is an environment detail, so it lives
/// here instead of in the state machine.
#[derive(Debug, Clone)]
pub struct FocusPolicy {
    /// Offsets at which the corrective blur is issued after a close. A zero
    /// offset blurs synchronously.
    pub blur_delays: Vec<std::time::Duration>,
    /// Delay before focus is restored to the main window.
    pub restore_focus_delay: std::time::Duration,
    /// Delay between correlation attempts.
    pub finalize_retry_delay: std::time::Duration,
    /// Correlation attempts before the pending launch is abandoned.
    pub finalize_max_attempts: u32,
}

impl Default for FocusPolicy {
    fn default() -> Self {
        Self {
            blur_delays: [0, 10, 30, 50, 100]
                .into_iter()
                .map(std::time::Duration::from_millis)
                .collect(),
            restore_focus_delay: std::time::Duration::from_millis(100),
            finalize_retry_delay: FINALIZE_RETRY_DELAY,
            finalize_max_attempts: FINALIZE_MAX_ATTEMPTS,
        }
    }
}

/// A launch awaiting correlation with its native window.
#[derive(Debug)]
struct PendingPopout {
    /// Native windows that existed before the launch.
    existing: BTreeSet<WindowHandle>,
    maintain_background: bool,
    restore_focus: bool,
    main_window: WindowHandle,
    /// Set once the host reports the opened document.
    opened_doc: Option<DocumentId>,
    /// Scheduled retry, cleared on every exit path.
    retry_task: Option<TaskId>,
}

/// An established pop-out.
#[derive(Debug, Clone, Copy)]
pub struct ActivePopout {
    pub window: WindowHandle,
    pub doc: DocumentId,
    pub maintain_background: bool,
    pub restore_focus: bool,
    pub main_window: WindowHandle,
}

pub struct PopoutManager {
    main_window: Option<WindowHandle>,
    pending: Option<PendingPopout>,
    active: HashMap<WindowHandle, ActivePopout>,
    policy: FocusPolicy,
}

impl PopoutManager {
    /// Capture the main window handle at load time; every later launch and
    /// close replays focus decisions against it.
    pub fn new(control: &WindowControl, policy: FocusPolicy) -> Self {
        Self {
            main_window: control.current_window(),
            pending: None,
            active: HashMap::new(),
            policy,
        }
    }

    pub fn main_window(&self) -> Option<WindowHandle> {
        self.main_window
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn popout_for_document(&self, doc: DocumentId) -> Option<ActivePopout> {
        self.active.values().find(|info| info.doc == doc).copied()
    }

    /// Whether any active pop-out wants the main window kept in the
    /// background.
    pub fn is_maintaining_background(&self) -> bool {
        self.active.values().any(|info| info.maintain_background)
    }

    /// Launch a new pop-out.
    ///
    /// At most one launch may be in flight; a second request while one is
    /// pending is rejected outright rather than queued.
    pub fn open_popout(
        &mut self,
        force_background: bool,
        command: Option<&CustomCommand>,
        today: NaiveDate,
        settings: &Settings,
        control: &WindowControl,
        workspace: &dyn Workspace,
    ) {
        if self.pending.is_some() {
            debug!("pop-out launch rejected, another launch is pending");
            return;
        }

        let Some(main_window) = self.main_window else {
            workspace.notify("Unable to control windows on this platform.");
            return;
        };

        let main_focused = control
            .is_focused(main_window)
            .unwrap_or_else(|| workspace.document_has_focus(workspace.main_document()));

        let maintain_background = force_background || !main_focused;
        let restore_focus = !force_background && main_focused;

        let existing: BTreeSet<WindowHandle> = control.window_ids().into_iter().collect();
        self.pending = Some(PendingPopout {
            existing,
            maintain_background,
            restore_focus,
            main_window,
            opened_doc: None,
            retry_task: None,
        });

        if maintain_background {
            // Pre-empt the host keeping the main window focused through its
            // own window-creation routine. Failure is ignored.
            control.blur_focused();
        }

        self.load_content(command, today, settings, workspace);
    }

    /// Ask the host to open the requested content in a new top-level window.
    fn load_content(
        &mut self,
        command: Option<&CustomCommand>,
        today: NaiveDate,
        settings: &Settings,
        workspace: &dyn Workspace,
    ) {
        let Some(command) = command else {
            workspace.open_popout_with_active_document();
            return;
        };

        match &command.action {
            CommandAction::Blank {} => workspace.open_popout_blank(),
            CommandAction::File { file_path } => {
                if !workspace.open_popout_file(file_path) {
                    warn!("failed to open file in pop-out window: {file_path}");
                }
            }
            CommandAction::Folder {
                folder_path,
                file_name_rule,
                template_path,
            } => {
                let mut name = resolve_file_name_rule(file_name_rule, &settings.date_format, today);
                if !name.contains('.') {
                    name.push_str(".md");
                }
                let path = if folder_path.is_empty() {
                    name
                } else {
                    format!("{}/{}", folder_path.trim_end_matches('/'), name)
                };
                if workspace.create_note(&path, template_path.as_deref()) {
                    workspace.open_popout_file(&path);
                } else {
                    workspace.notify(&format!("Failed to create note {path}."));
                }
            }
            CommandAction::Journal { journal_period } => {
                match workspace.create_journal_note(*journal_period) {
                    Some(path) => {
                        workspace.open_popout_file(&path);
                    }
                    None => {
                        workspace.notify(&format!(
                            "Failed to create {journal_period} journal note."
                        ));
                    }
                }
            }
        }
    }

    /// Host reported a new top-level window. Only meaningful while a launch
    /// is pending; windows opened by other means are ignored.
    pub fn handle_window_opened(
        &mut self,
        doc: DocumentId,
        settings: &Settings,
        control: &WindowControl,
        workspace: &dyn Workspace,
        indicators: &mut IndicatorManager,
        scheduler: &mut Scheduler,
        now: Instant,
    ) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        if let Some(task) = pending.retry_task.take() {
            scheduler.cancel(task);
        }
        pending.opened_doc = Some(doc);
        self.finalize_attempt(0, settings, control, workspace, indicators, scheduler, now);
    }

    /// One correlation attempt: look for a native window absent from the
    /// pre-launch snapshot; schedule a retry while the budget lasts.
    pub fn finalize_attempt(
        &mut self,
        attempt: u32,
        settings: &Settings,
        control: &WindowControl,
        workspace: &dyn Workspace,
        indicators: &mut IndicatorManager,
        scheduler: &mut Scheduler,
        now: Instant,
    ) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };

        let new_window = control
            .window_ids()
            .into_iter()
            .find(|id| !pending.existing.contains(id));

        let Some(window) = new_window else {
            if attempt >= self.policy.finalize_max_attempts {
                debug!("pop-out correlation abandoned after {attempt} attempts");
                self.pending = None;
                return;
            }
            let task = scheduler.schedule_at(
                now + self.policy.finalize_retry_delay,
                Task::FinalizePopout {
                    attempt: attempt + 1,
                },
            );
            pending.retry_task = Some(task);
            return;
        };

        let Some(pending) = self.pending.take() else {
            return;
        };
        let Some(doc) = pending.opened_doc else {
            // No document to bind the window to; nothing useful can be done.
            return;
        };

        debug!("pop-out window {} correlated to document {}", window.0, doc.0);
        self.active.insert(
            window,
            ActivePopout {
                window,
                doc,
                maintain_background: pending.maintain_background,
                restore_focus: pending.restore_focus,
                main_window: pending.main_window,
            },
        );

        control.set_always_on_top(window, true, PinLevel::Floating);
        control.focus(window);
        indicators.set_pinned(doc, true, settings, control, workspace);
        indicators.refresh_all(settings, control, workspace);
    }

    /// Host reported a closed top-level window. Unwinds the matching pop-out,
    /// then replays the focus decision recorded at launch against the main
    /// window's current focus state.
    pub fn handle_window_closed(
        &mut self,
        doc: DocumentId,
        control: &WindowControl,
        scheduler: &mut Scheduler,
        now: Instant,
    ) {
        let Some(info) = self.popout_for_document(doc) else {
            return;
        };
        self.active.remove(&info.window);

        control.set_always_on_top(info.window, false, PinLevel::Floating);

        let main_window = info.main_window;
        if !self.active.is_empty() {
            // A pinned sibling pop-out keeps precedence over any focus
            // restoration.
            self.schedule_background_blur(main_window, control, scheduler, now);
            return;
        }

        // The recorded disposition may be stale; the current focus state
        // decides first.
        let main_focused = control.is_focused(main_window).unwrap_or(false);
        if main_focused {
            return;
        }

        if info.restore_focus {
            scheduler.schedule_at(
                now + self.policy.restore_focus_delay,
                Task::FocusWindow {
                    window: main_window,
                },
            );
        } else {
            self.schedule_background_blur(main_window, control, scheduler, now);
        }
    }

    /// Issue the corrective blur once per configured offset.
    fn schedule_background_blur(
        &self,
        main_window: WindowHandle,
        control: &WindowControl,
        scheduler: &mut Scheduler,
        now: Instant,
    ) {
        for delay in &self.policy.blur_delays {
            if delay.is_zero() {
                control.blur(main_window);
            } else {
                scheduler.schedule_at(
                    now + *delay,
                    Task::BlurWindow {
                        window: main_window,
                    },
                );
            }
        }
    }

    /// Drop all lifecycle state, cancelling the pending retry and removing
    /// always-on-top from still-open pop-outs best-effort.
    pub fn dispose(&mut self, control: &WindowControl, scheduler: &mut Scheduler) {
        if let Some(pending) = self.pending.take() {
            if let Some(task) = pending.retry_task {
                scheduler.cancel(task);
            }
        }
        for info in self.active.values() {
            control.set_always_on_top(info.window, false, PinLevel::Floating);
        }
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{IndicatorId, IndicatorSurface, WindowClass};
    use crate::settings::JournalPeriod;
    use crate::window::fake::FakeWindowApi;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct NullSurface;

    impl IndicatorSurface for NullSurface {
        fn create(
            &mut self,
            _doc: DocumentId,
            _class: WindowClass,
            _config: &crate::settings::IndicatorConfig,
        ) -> Option<IndicatorId> {
            None
        }
        fn remove(&mut self, _id: IndicatorId) {}
        fn set_pinned(&mut self, _id: IndicatorId, _pinned: bool) {}
        fn apply_layout(&mut self, _id: IndicatorId, _config: &crate::settings::IndicatorConfig) {}
    }

    #[derive(Default)]
    struct WorkspaceLog {
        duplicate_opens: usize,
        blank_opens: usize,
        file_opens: Vec<String>,
        created_notes: Vec<(String, Option<String>)>,
        notices: Vec<String>,
    }

    struct TestWorkspace {
        main: DocumentId,
        focused: RefCell<Option<DocumentId>>,
        journal_path: Option<String>,
        log: RefCell<WorkspaceLog>,
    }

    impl TestWorkspace {
        fn new() -> Self {
            Self {
                main: DocumentId(1),
                focused: RefCell::new(None),
                journal_path: None,
                log: RefCell::new(WorkspaceLog::default()),
            }
        }
    }

    impl Workspace for TestWorkspace {
        fn main_document(&self) -> DocumentId {
            self.main
        }
        fn open_documents(&self) -> Vec<DocumentId> {
            vec![self.main]
        }
        fn document_has_focus(&self, doc: DocumentId) -> bool {
            *self.focused.borrow() == Some(doc)
        }
        fn open_popout_with_active_document(&self) {
            self.log.borrow_mut().duplicate_opens += 1;
        }
        fn open_popout_blank(&self) {
            self.log.borrow_mut().blank_opens += 1;
        }
        fn open_popout_file(&self, path: &str) -> bool {
            self.log.borrow_mut().file_opens.push(path.to_string());
            true
        }
        fn create_note(&self, path: &str, template: Option<&str>) -> bool {
            self.log
                .borrow_mut()
                .created_notes
                .push((path.to_string(), template.map(str::to_string)));
            true
        }
        fn create_journal_note(&self, _period: JournalPeriod) -> Option<String> {
            self.journal_path.clone()
        }
        fn file_exists(&self, _path: &str) -> bool {
            true
        }
        fn folder_exists(&self, _path: &str) -> bool {
            true
        }
        fn available_journal_periods(&self) -> Vec<JournalPeriod> {
            vec![JournalPeriod::Daily]
        }
        fn vault_name(&self) -> String {
            "vault".to_string()
        }
        fn notify(&self, message: &str) {
            self.log.borrow_mut().notices.push(message.to_string());
        }
    }

    struct Fixture {
        api: Rc<FakeWindowApi>,
        control: WindowControl,
        workspace: TestWorkspace,
        indicators: IndicatorManager,
        scheduler: Scheduler,
        manager: PopoutManager,
        settings: Settings,
    }

    fn fixture() -> Fixture {
        let api = Rc::new(FakeWindowApi::new(&[1, 2]));
        api.set_focused(Some(WindowHandle(1)));
        let control = WindowControl::new(api.clone());
        let manager = PopoutManager::new(&control, FocusPolicy::default());
        Fixture {
            api,
            control,
            workspace: TestWorkspace::new(),
            indicators: IndicatorManager::new(Box::new(NullSurface)),
            scheduler: Scheduler::new(),
            manager,
            settings: Settings::default(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn launch(fx: &mut Fixture, force_background: bool) {
        fx.manager.open_popout(
            force_background,
            None,
            today(),
            &fx.settings,
            &fx.control,
            &fx.workspace,
        );
    }

    fn finalize(fx: &mut Fixture, doc: DocumentId, now: Instant) {
        fx.manager.handle_window_opened(
            doc,
            &fx.settings,
            &fx.control,
            &fx.workspace,
            &mut fx.indicators,
            &mut fx.scheduler,
            now,
        );
    }

    fn drain(fx: &mut Fixture, now: Instant) {
        for task in fx.scheduler.take_due(now) {
            match task {
                Task::FinalizePopout { attempt } => fx.manager.finalize_attempt(
                    attempt,
                    &fx.settings,
                    &fx.control,
                    &fx.workspace,
                    &mut fx.indicators,
                    &mut fx.scheduler,
                    now,
                ),
                Task::FocusWindow { window } => {
                    fx.control.focus(window);
                }
                Task::BlurWindow { window } => {
                    fx.control.blur(window);
                }
                Task::ToggleFocused { .. } => {}
            }
        }
    }

    #[test]
    fn second_launch_while_pending_is_rejected() {
        let mut fx = fixture();
        launch(&mut fx, false);
        launch(&mut fx, false);
        assert_eq!(fx.workspace.log.borrow().duplicate_opens, 1);
        assert_eq!(fx.manager.active_count(), 0);
        assert!(fx.manager.has_pending());
    }

    #[test]
    fn correlation_picks_the_new_window() {
        let mut fx = fixture();
        let now = Instant::now();
        launch(&mut fx, false);
        fx.api.add_window(3);
        finalize(&mut fx, DocumentId(7), now);

        assert!(!fx.manager.has_pending());
        assert_eq!(fx.manager.active_count(), 1);
        let info = fx.manager.popout_for_document(DocumentId(7)).unwrap();
        assert_eq!(info.window, WindowHandle(3));
        assert!(fx.api.is_topmost(WindowHandle(3)));
        assert_eq!(fx.api.focus_calls_for(WindowHandle(3)), 1);
        assert!(fx.indicators.pin_state(DocumentId(7)));
    }

    #[test]
    fn correlation_retries_then_abandons() {
        let mut fx = fixture();
        let mut now = Instant::now();
        launch(&mut fx, false);
        // The new window never becomes visible to enumeration.
        finalize(&mut fx, DocumentId(7), now);
        assert!(fx.manager.has_pending());

        for _ in 0..FINALIZE_MAX_ATTEMPTS + 1 {
            now += FINALIZE_RETRY_DELAY;
            drain(&mut fx, now);
        }
        assert!(!fx.manager.has_pending());
        assert_eq!(fx.manager.active_count(), 0);
        assert!(fx.scheduler.is_empty());
    }

    #[test]
    fn late_window_is_still_correlated_by_a_retry() {
        let mut fx = fixture();
        let mut now = Instant::now();
        launch(&mut fx, false);
        finalize(&mut fx, DocumentId(7), now);

        now += FINALIZE_RETRY_DELAY;
        drain(&mut fx, now);
        fx.api.add_window(3);
        now += FINALIZE_RETRY_DELAY;
        drain(&mut fx, now);

        assert_eq!(fx.manager.active_count(), 1);
        assert!(fx.api.is_topmost(WindowHandle(3)));
    }

    #[test]
    fn background_close_blurs_the_main_window() {
        let mut fx = fixture();
        let mut now = Instant::now();
        launch(&mut fx, true);
        fx.api.add_window(3);
        finalize(&mut fx, DocumentId(7), now);

        // Main window is unfocused at close time.
        fx.api.set_focused(None);
        fx.manager
            .handle_window_closed(DocumentId(7), &fx.control, &mut fx.scheduler, now);
        assert_eq!(fx.manager.active_count(), 0);
        assert!(!fx.api.is_topmost(WindowHandle(3)));

        now += std::time::Duration::from_millis(200);
        drain(&mut fx, now);
        assert!(fx.api.blur_calls_for(WindowHandle(1)) >= 1);
        assert_eq!(fx.api.focus_calls_for(WindowHandle(1)), 0);
    }

    #[test]
    fn restore_focus_close_issues_exactly_one_delayed_focus() {
        let mut fx = fixture();
        let mut now = Instant::now();
        launch(&mut fx, false);
        fx.api.add_window(3);
        finalize(&mut fx, DocumentId(7), now);
        let blurs_before = fx.api.blur_calls_for(WindowHandle(1));

        fx.api.set_focused(None);
        fx.manager
            .handle_window_closed(DocumentId(7), &fx.control, &mut fx.scheduler, now);

        // Nothing fires synchronously.
        assert_eq!(fx.api.focus_calls_for(WindowHandle(1)), 0);
        now += std::time::Duration::from_millis(200);
        drain(&mut fx, now);
        assert_eq!(fx.api.focus_calls_for(WindowHandle(1)), 1);
        assert_eq!(fx.api.blur_calls_for(WindowHandle(1)), blurs_before);
    }

    #[test]
    fn close_with_focused_main_window_does_nothing() {
        let mut fx = fixture();
        let mut now = Instant::now();
        launch(&mut fx, false);
        fx.api.add_window(3);
        finalize(&mut fx, DocumentId(7), now);

        fx.api.set_focused(Some(WindowHandle(1)));
        let focus_before = fx.api.focus_calls_for(WindowHandle(1));
        let blurs_before = fx.api.blur_calls_for(WindowHandle(1));
        fx.manager
            .handle_window_closed(DocumentId(7), &fx.control, &mut fx.scheduler, now);

        now += std::time::Duration::from_millis(200);
        drain(&mut fx, now);
        assert_eq!(fx.api.focus_calls_for(WindowHandle(1)), focus_before);
        assert_eq!(fx.api.blur_calls_for(WindowHandle(1)), blurs_before);
    }

    #[test]
    fn sibling_popout_keeps_precedence_over_focus_restore() {
        let mut fx = fixture();
        let mut now = Instant::now();

        launch(&mut fx, false);
        fx.api.add_window(3);
        finalize(&mut fx, DocumentId(7), now);

        fx.api.set_focused(Some(WindowHandle(1)));
        launch(&mut fx, false);
        fx.api.add_window(4);
        finalize(&mut fx, DocumentId(8), now);
        assert_eq!(fx.manager.active_count(), 2);

        fx.api.set_focused(None);
        fx.manager
            .handle_window_closed(DocumentId(8), &fx.control, &mut fx.scheduler, now);

        now += std::time::Duration::from_millis(200);
        drain(&mut fx, now);
        // The remaining pinned sibling forces the background treatment.
        assert!(fx.api.blur_calls_for(WindowHandle(1)) >= 1);
        assert_eq!(fx.api.focus_calls_for(WindowHandle(1)), 0);
    }

    #[test]
    fn close_of_unrelated_window_is_ignored() {
        let mut fx = fixture();
        let now = Instant::now();
        launch(&mut fx, false);
        fx.api.add_window(3);
        finalize(&mut fx, DocumentId(7), now);

        fx.manager
            .handle_window_closed(DocumentId(99), &fx.control, &mut fx.scheduler, now);
        assert_eq!(fx.manager.active_count(), 1);
    }

    #[test]
    fn launch_without_main_window_raises_notice() {
        let mut fx = fixture();
        fx.manager = PopoutManager::new(&WindowControl::unavailable(), FocusPolicy::default());
        launch(&mut fx, false);
        assert!(!fx.manager.has_pending());
        assert_eq!(
            fx.workspace.log.borrow().notices,
            vec!["Unable to control windows on this platform.".to_string()]
        );
    }

    #[test]
    fn forced_background_launch_blurs_immediately() {
        let mut fx = fixture();
        launch(&mut fx, true);
        assert_eq!(fx.api.blur_calls_for(WindowHandle(1)), 1);
    }

    #[test]
    fn folder_command_creates_a_dated_note() {
        let mut fx = fixture();
        let cmd = CustomCommand {
            id: "c".to_string(),
            name: String::new(),
            enabled: true,
            action: CommandAction::Folder {
                folder_path: "notes".to_string(),
                file_name_rule: "Log {{date}}".to_string(),
                template_path: Some("tpl.md".to_string()),
            },
        };
        fx.manager.open_popout(
            true,
            Some(&cmd),
            today(),
            &fx.settings,
            &fx.control,
            &fx.workspace,
        );
        let log = fx.workspace.log.borrow();
        assert_eq!(
            log.created_notes,
            vec![(
                "notes/Log 2024-01-15.md".to_string(),
                Some("tpl.md".to_string())
            )]
        );
        assert_eq!(log.file_opens, vec!["notes/Log 2024-01-15.md".to_string()]);
    }

    #[test]
    fn journal_command_failure_raises_notice() {
        let mut fx = fixture();
        let cmd = CustomCommand {
            id: "c".to_string(),
            name: String::new(),
            enabled: true,
            action: CommandAction::Journal {
                journal_period: JournalPeriod::Weekly,
            },
        };
        fx.manager.open_popout(
            true,
            Some(&cmd),
            today(),
            &fx.settings,
            &fx.control,
            &fx.workspace,
        );
        let log = fx.workspace.log.borrow();
        assert!(log.file_opens.is_empty());
        assert_eq!(
            log.notices,
            vec!["Failed to create weekly journal note.".to_string()]
        );
    }

    #[test]
    fn dispose_cancels_pending_retry_and_unpins_popouts() {
        let mut fx = fixture();
        let now = Instant::now();
        launch(&mut fx, false);
        fx.api.add_window(3);
        finalize(&mut fx, DocumentId(7), now);

        fx.api.set_focused(Some(WindowHandle(1)));
        launch(&mut fx, false);
        finalize(&mut fx, DocumentId(8), now); // never correlates, retry pending
        assert_eq!(fx.scheduler.len(), 1);

        fx.manager.dispose(&fx.control, &mut fx.scheduler);
        assert_eq!(fx.manager.active_count(), 0);
        assert!(!fx.manager.has_pending());
        assert!(fx.scheduler.is_empty());
        assert!(!fx.api.is_topmost(WindowHandle(3)));
    }
}
