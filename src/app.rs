//! One decision-and-act cycle: the piece a hotkey press actually runs.

use anyhow::Result;
use tracing::{debug, warn};

use crate::launch::CommandRunner;
use crate::mru::{self, MruStore};
use crate::selector::{Action, decide};
use crate::spec::WindowSpec;
use crate::wm::WmClient;

/// Run one run-raise-next cycle: query the window manager, reconcile the
/// MRU list, decide, act, and persist the new order.
///
/// Exactly one focus call and at most one save happen per invocation. A
/// no-op decision saves nothing, so an untouched MRU snapshot stays
/// byte-identical. With `dry_run` the chosen action is printed to stdout
/// and no side effect is performed at all.
pub fn run_once(
    spec: &WindowSpec,
    wm: &mut dyn WmClient,
    runner: &dyn CommandRunner,
    store: &dyn MruStore,
    dry_run: bool,
) -> Result<()> {
    let live = wm.list_windows()?;
    let focused = wm.focused_window()?;
    let windows = mru::reconcile(store.load(), &live);
    debug!(
        "{} open windows, focused: {}",
        windows.len(),
        focused.as_ref().map_or("none", |w| w.id.as_str())
    );

    let action = decide(spec, &windows, focused.as_ref());
    debug!("decision: {action}");

    if dry_run {
        println!("{action}");
        return Ok(());
    }

    match action {
        Action::Launch(Some(command)) => runner.run(&command),
        Action::Launch(None) => {
            debug!("no matching windows and no command to run");
            Ok(())
        }
        Action::Noop => Ok(()),
        Action::Focus(window) | Action::Advance(window) => {
            // Focus is best effort; the MRU promotion still records the
            // intent so the next invocation cycles from here.
            if let Err(e) = wm.focus(&window) {
                warn!("focus request for {} failed: {e:#}", window.id);
            }
            let promoted = mru::promote(windows, &window);
            store.save(&promoted)?;
            Ok(())
        }
    }
}
