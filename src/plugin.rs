//! Plugin wiring and host entry points
//!
//! [`PinTopPlugin`] owns every piece of plugin state and is the single object
//! the host talks to. Lifecycle events, command invocations, indicator clicks
//! and the periodic tick all enter here; the plugin routes them into the
//! indicator manager and the pop-out controller and executes whatever work
//! the scheduler has due.

use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::Local;
use log::{debug, info};

use crate::commands::{
    command_specs, CommandSpec, OPEN_PINNED_POPOUT, OPEN_PINNED_POPOUT_EXCLUSIVE,
    TOGGLE_WINDOW_PIN,
};
use crate::error::PinTopResult;
use crate::host::{DocumentId, IndicatorSurface, Workspace};
use crate::indicator::{IndicatorManager, CLICK_TOGGLE_DELAY, POLL_INTERVAL};
use crate::popout::{FocusPolicy, PopoutManager};
use crate::scheduler::{Scheduler, Task};
use crate::settings::{CustomCommand, Settings};
use crate::window::{NativeWindowApi, ToggleOutcome, WindowControl};

pub struct PinTopPlugin {
    settings: Settings,
    control: WindowControl,
    workspace: Rc<dyn Workspace>,
    indicators: IndicatorManager,
    popouts: PopoutManager,
    scheduler: Scheduler,
    poll_interval: Duration,
    next_poll: Option<Instant>,
}

impl PinTopPlugin {
    pub fn new(
        settings: Settings,
        api: Option<Rc<dyn NativeWindowApi>>,
        workspace: Rc<dyn Workspace>,
        surface: Box<dyn IndicatorSurface>,
    ) -> Self {
        let control = match api {
            Some(api) => WindowControl::new(api),
            None => WindowControl::unavailable(),
        };
        let popouts = PopoutManager::new(&control, FocusPolicy::default());
        Self {
            settings,
            control,
            workspace,
            indicators: IndicatorManager::new(surface),
            popouts,
            scheduler: Scheduler::new(),
            poll_interval: POLL_INTERVAL,
            next_poll: None,
        }
    }

    /// Host loaded the plugin: set up indicators for every open window and
    /// arm the poll.
    pub fn load(&mut self, now: Instant) {
        info!("loading pintop plugin");
        self.indicators
            .init(&self.settings, &self.control, self.workspace.as_ref());
        self.next_poll = Some(now + self.poll_interval);
    }

    /// Host unloads the plugin: release every owned resource. Safe to call
    /// more than once.
    pub fn unload(&mut self) {
        info!("unloading pintop plugin");
        self.popouts.dispose(&self.control, &mut self.scheduler);
        self.indicators.dispose();
        self.scheduler.clear();
        self.next_poll = None;
    }

    /// Periodic tick driven by the host timer: runs due scheduled work, then
    /// the pin-state poll when its interval elapsed.
    pub fn tick(&mut self, now: Instant) {
        for task in self.scheduler.take_due(now) {
            self.run_task(task, now);
        }
        if let Some(due) = self.next_poll {
            if now >= due {
                self.indicators
                    .refresh_all(&self.settings, &self.control, self.workspace.as_ref());
                self.next_poll = Some(now + self.poll_interval);
            }
        }
    }

    fn run_task(&mut self, task: Task, now: Instant) {
        match task {
            Task::FinalizePopout { attempt } => self.popouts.finalize_attempt(
                attempt,
                &self.settings,
                &self.control,
                self.workspace.as_ref(),
                &mut self.indicators,
                &mut self.scheduler,
                now,
            ),
            Task::ToggleFocused { doc } => {
                debug!("running delayed toggle for document {}", doc.0);
                self.run_toggle();
            }
            Task::FocusWindow { window } => {
                self.control.focus(window);
            }
            Task::BlurWindow { window } => {
                self.control.blur(window);
            }
        }
    }

    /// Host notification: a top-level window opened. Both the indicator
    /// manager and the pop-out controller evaluate it independently.
    pub fn on_window_open(&mut self, doc: DocumentId, now: Instant) {
        self.indicators.handle_window_opened(
            doc,
            &self.settings,
            &self.control,
            self.workspace.as_ref(),
        );
        self.popouts.handle_window_opened(
            doc,
            &self.settings,
            &self.control,
            self.workspace.as_ref(),
            &mut self.indicators,
            &mut self.scheduler,
            now,
        );
    }

    /// Host notification: a top-level window closed.
    pub fn on_window_close(&mut self, doc: DocumentId, now: Instant) {
        self.indicators.handle_window_closed(doc);
        self.popouts
            .handle_window_closed(doc, &self.control, &mut self.scheduler, now);
    }

    /// A pin badge was clicked: focus the owning window, then toggle once the
    /// focus transition had time to land.
    pub fn on_indicator_click(&mut self, doc: DocumentId, now: Instant) {
        let handle = if doc == self.workspace.main_document() {
            self.popouts.main_window()
        } else {
            self.popouts.popout_for_document(doc).map(|info| info.window)
        };
        if let Some(window) = handle {
            self.control.focus(window);
        }
        self.scheduler
            .schedule_at(now + CLICK_TOGGLE_DELAY, Task::ToggleFocused { doc });
    }

    /// Toggle the focused window's pin and reflect the result everywhere.
    pub fn toggle_pin(&mut self) -> ToggleOutcome {
        self.run_toggle()
    }

    fn run_toggle(&mut self) -> ToggleOutcome {
        let outcome = self.control.toggle();
        let focused = self.indicators.focused_document(self.workspace.as_ref());

        // Suppress the notice when the clicked window already shows a badge;
        // the style change is feedback enough.
        let suppress_notice = focused
            .map(|doc| self.indicators.has_indicator(doc))
            .unwrap_or(false);

        if let Some(doc) = focused {
            self.indicators.set_pinned(
                doc,
                outcome.pinned(),
                &self.settings,
                &self.control,
                self.workspace.as_ref(),
            );
        }
        self.indicators
            .refresh_all(&self.settings, &self.control, self.workspace.as_ref());

        if !suppress_notice {
            let message = match outcome {
                ToggleOutcome::Applied | ToggleOutcome::Already => "Window pinned on top",
                ToggleOutcome::Removed => "Window unpinned",
                ToggleOutcome::Unavailable => "Unable to control the window",
            };
            self.workspace.notify(message);
        }
        outcome
    }

    /// Launch a pop-out, optionally loading a custom command's content.
    pub fn open_popout(&mut self, force_background: bool, command_id: Option<&str>) {
        let command = command_id
            .and_then(|id| self.settings.command_by_id(id))
            .cloned();
        let today = Local::now().date_naive();
        self.popouts.open_popout(
            force_background,
            command.as_ref(),
            today,
            &self.settings,
            &self.control,
            self.workspace.as_ref(),
        );
    }

    /// Dispatch a registered command by id.
    pub fn run_command(&mut self, id: &str) {
        match id {
            TOGGLE_WINDOW_PIN => {
                self.toggle_pin();
            }
            OPEN_PINNED_POPOUT => self.open_popout(false, None),
            OPEN_PINNED_POPOUT_EXCLUSIVE => self.open_popout(true, None),
            custom => {
                let known = self
                    .settings
                    .enabled_commands()
                    .any(|command| command.id == custom);
                if known {
                    self.open_popout(true, Some(custom));
                } else {
                    debug!("ignoring unknown command id: {custom}");
                }
            }
        }
    }

    /// Deep-link entry: `vault` must match the workspace's vault name and the
    /// id must name an enabled custom command; anything else is ignored.
    pub fn handle_protocol(&mut self, vault: &str, command_id: &str) {
        if vault != self.workspace.vault_name() {
            debug!("protocol request for foreign vault ignored");
            return;
        }
        let known = self
            .settings
            .enabled_commands()
            .any(|command| command.id == command_id);
        if known {
            self.open_popout(true, Some(command_id));
        }
    }

    /// Swap in a new settings record and rebuild the indicators.
    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.indicators
            .refresh_config(&self.settings, &self.control, self.workspace.as_ref());
    }

    /// Validate a custom command against the workspace before enabling it.
    pub fn validate_command(&self, command: &CustomCommand) -> PinTopResult<()> {
        command.validate(self.workspace.as_ref())
    }

    /// Commands the host should currently have registered.
    pub fn command_specs(&self) -> Vec<CommandSpec> {
        command_specs(&self.settings)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_document_pinned(&self, doc: DocumentId) -> bool {
        self.indicators.pin_state(doc)
    }

    pub fn has_indicator(&self, doc: DocumentId) -> bool {
        self.indicators.has_indicator(doc)
    }

    pub fn active_popout_count(&self) -> usize {
        self.popouts.active_count()
    }

    pub fn has_pending_popout(&self) -> bool {
        self.popouts.has_pending()
    }
}
