//! Generate static files

use anyhow::Result;
use notify::{RecursiveMode, Watcher};
use notify_debouncer_mini::new_debouncer;
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::generator::Generator;
use crate::{Portfolio, CONFIG_FILE};

/// Quiet period before a burst of file events triggers a rebuild
const DEBOUNCE: Duration = Duration::from_millis(500);

/// Generate the static site
pub fn run(site: &Portfolio) -> Result<()> {
    let start = std::time::Instant::now();

    let catalog = site.catalog()?;
    tracing::info!(
        "Loaded {} projects and {} posts",
        catalog.projects().len(),
        catalog.posts().len()
    );

    let generator = Generator::new(site)?;
    generator.generate(&catalog)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

type WatchList = Vec<(PathBuf, RecursiveMode)>;

/// Paths to register with the watcher
///
/// The base directory is watched flat so a config file or source directory
/// created later is still noticed.
pub fn watched_paths(site: &Portfolio) -> WatchList {
    let mut paths = Vec::new();
    if site.base_dir.is_dir() {
        paths.push((site.base_dir.clone(), RecursiveMode::NonRecursive));
    }
    if site.source_dir.is_dir() {
        paths.push((site.source_dir.clone(), RecursiveMode::Recursive));
    }
    paths
}

/// Entries to drop and entries to add to go from `old` to `new`
fn diff_watches(
    old: &[(PathBuf, RecursiveMode)],
    new: &[(PathBuf, RecursiveMode)],
) -> (WatchList, WatchList) {
    let removed = old.iter().filter(|w| !new.contains(w)).cloned().collect();
    let added = new.iter().filter(|w| !old.contains(w)).cloned().collect();
    (removed, added)
}

/// Bring the watcher in line with `wanted`
fn sync_watches(
    watcher: &mut dyn Watcher,
    watched: &mut WatchList,
    wanted: WatchList,
) -> Result<()> {
    let (removed, added) = diff_watches(watched, &wanted);
    for (path, _) in &removed {
        // The OS drops the watch itself when the path is deleted
        if let Err(e) = watcher.unwatch(path) {
            tracing::debug!("Unwatch {:?}: {}", path, e);
        }
        tracing::debug!("Stopped watching: {:?}", path);
    }
    for (path, mode) in &added {
        watcher.watch(path, *mode)?;
        tracing::debug!("Watching: {:?}", path);
    }
    *watched = wanted;
    Ok(())
}

/// Whether a change at `path` can affect the output
fn is_relevant(site: &Portfolio, path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    let noise = path_str.contains(".git")
        || path_str.contains(".DS_Store")
        || path_str.ends_with('~')
        || path_str.ends_with(".swp");
    !noise && (path == site.base_dir.join(CONFIG_FILE) || path.starts_with(&site.source_dir))
}

/// Block on file events, regenerating after each debounced burst
///
/// The configuration is reloaded before every rebuild and the watched paths
/// follow it. `on_rebuild` sees the outcome of each attempt; failures do not
/// stop the loop.
pub fn watch_blocking<F>(site: &Portfolio, mut on_rebuild: F) -> Result<()>
where
    F: FnMut(Result<()>),
{
    let (tx, rx) = channel();
    let mut debouncer = new_debouncer(DEBOUNCE, tx)?;

    let mut current = site.clone();
    let mut watched = Vec::new();
    sync_watches(debouncer.watcher(), &mut watched, watched_paths(&current))?;

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let changed: Vec<_> = events
                    .iter()
                    .filter(|e| is_relevant(&current, &e.path))
                    .collect();
                if changed.is_empty() {
                    continue;
                }
                for event in &changed {
                    tracing::info!("File changed: {}", event.path.display());
                }

                let result = match Portfolio::new(&current.base_dir) {
                    Ok(fresh) => {
                        let result = run(&fresh);
                        if let Err(e) =
                            sync_watches(debouncer.watcher(), &mut watched, watched_paths(&fresh))
                        {
                            tracing::warn!("Failed to update watched paths: {}", e);
                        }
                        current = fresh;
                        result
                    }
                    Err(e) => Err(e),
                };
                on_rebuild(result);
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Watch for file changes and regenerate
pub async fn watch(site: &Portfolio) -> Result<()> {
    let site = site.clone();
    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    tokio::task::spawn_blocking(move || {
        watch_blocking(&site, |result| match result {
            Ok(()) => tracing::info!("Regenerated successfully"),
            Err(e) => tracing::error!("Generation failed: {}", e),
        })
    })
    .await?
}
