//! File watching for live conversion.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// HTML file was created or modified
    HtmlChanged(PathBuf),

    /// HTML file was deleted
    HtmlRemoved(PathBuf),
}

/// Watches directories for HTML changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher for the given paths.
    ///
    /// Returns the watcher and a channel to receive events. Paths that do not
    /// exist are skipped.
    pub fn new(
        paths: &[PathBuf],
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        for path in paths {
            if path.exists() {
                watcher
                    .watch(path, RecursiveMode::Recursive)
                    .map_err(std::io::Error::other)?;
            } else {
                tracing::warn!("Not watching missing path {}", path.display());
            }
        }

        std::thread::spawn(move || {
            let debounce = Duration::from_millis(100);
            let mut last: Option<(WatchEvent, Instant)> = None;

            while let Ok(event) = sync_rx.recv() {
                for path in &event.paths {
                    let Some(watch_event) = classify_event(path, &event.kind) else {
                        continue;
                    };

                    // Collapse bursts for the same path
                    let now = Instant::now();
                    if let Some((previous, at)) = &last {
                        if *previous == watch_event && now.duration_since(*at) < debounce {
                            continue;
                        }
                    }
                    last = Some((watch_event.clone(), now));

                    if async_tx.blocking_send(watch_event).is_err() {
                        return;
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<WatchEvent> {
    use notify::EventKind;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if ext != "html" && ext != "htm" {
        return None;
    }

    match kind {
        EventKind::Create(_) | EventKind::Modify(_) => {
            Some(WatchEvent::HtmlChanged(path.to_path_buf()))
        }
        EventKind::Remove(_) => Some(WatchEvent::HtmlRemoved(path.to_path_buf())),
        _ => None,
    }
}
