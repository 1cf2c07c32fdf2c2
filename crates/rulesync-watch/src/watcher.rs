//! Recursive watch over an input directory
//!
//! [`RuleWatcher::start`] registers a `notify` watcher whose event closure
//! feeds a [`ChangeHandler`]. The returned [`WatchHandle`] owns the OS watch;
//! stopping or dropping it releases the watch.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, info, warn};

use crate::gate::ChangeHandler;
use crate::{Error, Result};

/// Interval between liveness checks while waiting for shutdown.
pub const LIVENESS_TICK: Duration = Duration::from_secs(1);

pub struct RuleWatcher;

impl RuleWatcher {
    /// Start watching `dir` recursively.
    ///
    /// `callback` runs on the watcher's delivery thread for each admitted
    /// change, never concurrently with itself or with work passed to
    /// [`WatchHandle::run_exclusive`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryNotFound`] if `dir` is not a directory, or a
    /// `notify` error if the OS watch cannot be registered.
    pub fn start<F>(dir: &Path, cooldown: Duration, callback: F) -> Result<WatchHandle>
    where
        F: Fn() + Send + Sync + 'static,
    {
        if !dir.is_dir() {
            return Err(Error::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let running = Arc::new(Mutex::new(()));
        let handler = Arc::new(ChangeHandler::with_lock(
            cooldown,
            Arc::clone(&running),
            callback,
        ));
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) => {
                handler.handle(&event);
            }
            Err(e) => warn!(error = %e, "Watch error"),
        })?;
        watcher.watch(dir, RecursiveMode::Recursive)?;

        info!(dir = %dir.display(), cooldown_ms = cooldown.as_millis() as u64, "Watching for changes");
        Ok(WatchHandle {
            dir: dir.to_path_buf(),
            watcher: Some(watcher),
            running,
        })
    }
}

/// Owner of an active watch.
pub struct WatchHandle {
    dir: PathBuf,
    watcher: Option<RecommendedWatcher>,
    running: Arc<Mutex<()>>,
}

impl WatchHandle {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn is_active(&self) -> bool {
        self.watcher.is_some()
    }

    /// Run `work` while no change callback is running.
    ///
    /// Changes admitted meanwhile wait and run afterwards.
    pub fn run_exclusive<R>(&self, work: impl FnOnce() -> R) -> R {
        let _guard = self
            .running
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        work()
    }

    /// Release the OS watch. Calling it again does nothing.
    pub fn stop(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            if let Err(e) = watcher.unwatch(&self.dir) {
                debug!(error = %e, "Unwatch failed");
            }
            info!(dir = %self.dir.display(), "Stopped watching");
        }
    }

    /// Keep the watch alive until `shutdown` resolves, then stop it.
    pub async fn watch_until<S>(mut self, shutdown: S)
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut ticker = tokio::time::interval(LIVENESS_TICK);

        loop {
            tokio::select! {
                () = &mut shutdown => break,
                _ = ticker.tick() => {
                    if !self.dir.is_dir() {
                        warn!(dir = %self.dir.display(), "Watched directory disappeared");
                    }
                }
            }
        }

        self.stop();
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
