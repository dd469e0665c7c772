use std::path::Path;
use std::sync::mpsc;

use notify::{EventKind, RecursiveMode, Watcher};

/// Starts a recursive watcher on `dir` that pings `tx` whenever a TOML
/// document changes. The returned watcher must be kept alive.
pub fn spawn(dir: &Path, tx: mpsc::Sender<()>) -> notify::Result<notify::RecommendedWatcher> {
    let mut watcher =
        notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
            let Ok(event) = res else { return };
            match event.kind {
                EventKind::Modify(_)
                | EventKind::Create(_)
                | EventKind::Remove(_)
                | EventKind::Any => {
                    for p in event.paths {
                        let is_toml = p
                            .extension()
                            .and_then(|e| e.to_str())
                            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));
                        if is_toml && tx.send(()).is_err() {
                            return;
                        }
                    }
                }
                _ => {}
            }
        })?;
    watcher.watch(dir, RecursiveMode::Recursive)?;
    Ok(watcher)
}
