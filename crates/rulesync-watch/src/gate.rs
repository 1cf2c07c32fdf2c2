//! Debounce gate and event filtering

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use notify::event::{CreateKind, RemoveKind};
use notify::{Event, EventKind};
use rulesync_fs::is_markdown;
use tracing::{debug, trace};

/// Minimum time between accepted triggers.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(500);

/// Admits at most one trigger per cooldown window.
#[derive(Debug)]
pub struct EventGate {
    cooldown: Duration,
    last_trigger: Mutex<Option<Instant>>,
}

impl EventGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_trigger: Mutex::new(None),
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Admit a trigger at `now` if the cooldown has elapsed since the last
    /// admitted one. Check and update happen under one lock.
    pub fn admit(&self, now: Instant) -> bool {
        let mut last = self
            .last_trigger
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match *last {
            Some(previous) if now.saturating_duration_since(previous) < self.cooldown => false,
            _ => {
                *last = Some(now);
                true
            }
        }
    }
}

impl Default for EventGate {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

/// True for events that touch a Markdown file.
///
/// Access events and directory create/remove events are ignored, as are
/// events whose paths are all directories or non-Markdown files.
pub fn is_rule_event(event: &Event) -> bool {
    match event.kind {
        EventKind::Access(_)
        | EventKind::Create(CreateKind::Folder)
        | EventKind::Remove(RemoveKind::Folder) => return false,
        _ => {}
    }

    event
        .paths
        .iter()
        .any(|path| is_markdown(path) && !path.is_dir())
}

/// Filters events, applies the gate, and runs the callback.
///
/// The callback runs under `running`. Other work that must not overlap a
/// callback can share the same lock through [`ChangeHandler::with_lock`].
pub struct ChangeHandler<F> {
    gate: EventGate,
    running: Arc<Mutex<()>>,
    callback: F,
}

impl<F> ChangeHandler<F>
where
    F: Fn() + Send + Sync,
{
    pub fn new(cooldown: Duration, callback: F) -> Self {
        Self::with_lock(cooldown, Arc::new(Mutex::new(())), callback)
    }

    /// Like [`ChangeHandler::new`], but callbacks hold `running` while they run.
    pub fn with_lock(cooldown: Duration, running: Arc<Mutex<()>>, callback: F) -> Self {
        Self {
            gate: EventGate::new(cooldown),
            running,
            callback,
        }
    }

    /// Handle an event now. Returns true if the callback ran.
    pub fn handle(&self, event: &Event) -> bool {
        self.handle_at(event, Instant::now())
    }

    /// Handle an event observed at `now`.
    pub fn handle_at(&self, event: &Event, now: Instant) -> bool {
        if !is_rule_event(event) {
            trace!(kind = ?event.kind, "Ignoring event");
            return false;
        }
        if !self.gate.admit(now) {
            debug!(paths = ?event.paths, "Change within cooldown, skipping");
            return false;
        }

        let _guard = self
            .running
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        debug!(paths = ?event.paths, "Change detected");
        (self.callback)();
        true
    }
}
