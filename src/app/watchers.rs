use std::path::PathBuf;
use std::sync::mpsc::{Receiver, channel};

use super::config::{ClientConfig, load_config_from_path};

/// Spawns a background watcher that signals on any change to `path`.
pub fn spawn_file_watcher(path: PathBuf) -> Receiver<()> {
    let (tx, rx) = channel::<()>();
    std::thread::spawn(move || {
        use notify::{EventKind, RecursiveMode, Watcher};
        let watcher = notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                match event.kind {
                    EventKind::Modify(_)
                    | EventKind::Create(_)
                    | EventKind::Remove(_)
                    | EventKind::Any => {
                        let _ = tx.send(());
                    }
                    _ => {}
                }
            }
        });
        match watcher {
            Ok(mut watcher) => {
                if let Err(e) = watcher.watch(&path, RecursiveMode::NonRecursive) {
                    log::warn!("cannot watch {}: {}", path.display(), e);
                    return;
                }
                log::debug!("watching {}", path.display());
                loop {
                    std::thread::sleep(std::time::Duration::from_secs(3600));
                }
            }
            Err(e) => log::warn!("file watcher unavailable: {}", e),
        }
    });
    rx
}

/// Reloads the client config when its file changes, keeping the last good one on failure.
pub struct ConfigReloader {
    path: PathBuf,
    rx: Receiver<()>,
}

impl ConfigReloader {
    pub fn new(path: PathBuf) -> Self {
        let rx = spawn_file_watcher(path.clone());
        Self { path, rx }
    }

    /// Drains pending change events; returns a freshly loaded config if there were any.
    pub fn poll(&self) -> Option<ClientConfig> {
        if self.rx.try_iter().count() == 0 {
            return None;
        }
        if !self.path.exists() {
            log::warn!("config missing: {}", self.path.display());
            return None;
        }
        match load_config_from_path(&self.path) {
            Ok(cfg) => {
                log::info!("config reloaded from {}", self.path.display());
                Some(cfg)
            }
            Err(e) => {
                log::warn!("config reload failed ({}): {}", self.path.display(), e);
                None
            }
        }
    }
}
