// src/watch/mod.rs

//! Monitor mode: watch the input file and re-render on every content change.

pub mod hash;

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, info, warn};

use crate::errors::Result;

/// Watch `input` and call `render` whenever its contents change.
///
/// The watcher observes the parent directory, since editors commonly replace
/// the file on save rather than writing in place. Events are filtered down to
/// the input file and deduplicated by content hash, so our own `cleanup`
/// rewrite settles instead of looping. Render failures are logged and
/// watching continues.
pub fn monitor<F>(input: &Path, mut render: F) -> Result<()>
where
    F: FnMut() -> Result<()>,
{
    let (event_tx, event_rx) = mpsc::channel::<notify::Result<Event>>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| {
            if event_tx.send(res).is_err() {
                eprintln!("taskdot: failed to forward notify event");
            }
        },
        Config::default(),
    )?;
    watcher.watch(&watch_dir(input), RecursiveMode::NonRecursive)?;

    let file_name = input.file_name().map(|name| name.to_os_string());
    let mut last_hash = hash::content_hash(input)?;

    info!(input = %input.display(), "monitoring for changes");

    for res in event_rx {
        let event = match res {
            Ok(event) => event,
            Err(err) => {
                warn!("file watch error: {err}");
                continue;
            }
        };

        let relevant = match &file_name {
            Some(name) => event
                .paths
                .iter()
                .any(|path| path.file_name() == Some(name.as_os_str())),
            None => true,
        };
        if !relevant {
            continue;
        }

        let current = match hash::content_hash(input) {
            Ok(current) => current,
            Err(err) => {
                // the file may be mid-replace; the next event will catch it
                debug!("could not hash input: {err}");
                continue;
            }
        };
        if current == last_hash {
            debug!("content unchanged, skipping render");
            continue;
        }
        last_hash = current;

        info!("input changed, rendering");
        if let Err(err) = render() {
            warn!("render failed: {err}");
        }
    }

    Ok(())
}

/// Directory to watch for the given input file.
fn watch_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
