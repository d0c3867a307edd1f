//! Generate static files

use anyhow::Result;
use notify::{RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::{Folio, CONFIG_FILE};

/// Generate the static site
pub fn run(folio: &Folio) -> Result<()> {
    let start = Instant::now();

    let loader = ContentLoader::new(folio);
    let posts = loader.load_posts()?;
    tracing::info!("Loaded {} posts", posts.len());

    Generator::new(folio).generate(&posts)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Watch for file changes and regenerate
pub async fn watch(folio: &Folio) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    for (path, mode) in watched_paths(folio) {
        watcher.watch(&path, mode)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut last_rebuild = Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                // Debounce bursts of events from a single save
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, regenerating...");
                    if let Err(e) = rebuild(folio) {
                        tracing::error!("Generation failed: {}", e);
                    }
                    last_rebuild = Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

/// Existing inputs a rebuild depends on: the source tree and the config file
pub fn watched_paths(folio: &Folio) -> Vec<(PathBuf, RecursiveMode)> {
    let mut paths = Vec::new();
    if folio.source_dir.exists() {
        paths.push((folio.source_dir.clone(), RecursiveMode::Recursive));
    }
    let config_path = folio.base_dir.join(CONFIG_FILE);
    if config_path.exists() {
        paths.push((config_path, RecursiveMode::NonRecursive));
    }
    paths
}

/// Reload configuration and regenerate
pub fn rebuild(folio: &Folio) -> Result<()> {
    let fresh = Folio::new(&folio.base_dir)?;
    run(&fresh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_watched_paths_skip_missing_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert!(watched_paths(&folio).is_empty());

        fs::create_dir_all(&folio.source_dir).unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "title: Folio\n").unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(
            watched_paths(&folio),
            vec![
                (folio.source_dir.clone(), RecursiveMode::Recursive),
                (dir.path().join(CONFIG_FILE), RecursiveMode::NonRecursive),
            ]
        );
    }
}
