//! The per-invocation decision: launch, focus, advance, or do nothing.
//!
//! Pressing the hotkey repeatedly gives: first press focuses the app's most
//! recently used window if the app isn't focused; subsequent presses step
//! through its remaining windows, then wrap to the least recently used one.
//! The cycle position is never stored anywhere. Because every focus promotes
//! its target to the front of the MRU list, the windows already visited form
//! a contiguous prefix of that list, and the prefix alone tells us where the
//! cycle stands.

use std::fmt;

use crate::spec::WindowSpec;
use crate::window::Window;

/// What a single invocation should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Launch the app; carries the spec's command, when it has one.
    Launch(Option<String>),
    /// Jump to the app's most recently used window.
    Focus(Window),
    /// Step to the next window in the app's cycle.
    Advance(Window),
    /// The app's only matching window is already focused.
    Noop,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Launch(Some(command)) => write!(f, "launch: {command}"),
            Action::Launch(None) => write!(f, "launch: (no command)"),
            Action::Focus(window) => write!(f, "focus: {} ({})", window.id, window.title),
            Action::Advance(window) => write!(f, "advance: {} ({})", window.id, window.title),
            Action::Noop => write!(f, "no-op"),
        }
    }
}

/// Decide what this invocation should do.
///
/// `ordered_windows` is the reconciled window list in most-recently-used
/// order; `focused` is the currently focused window, if any. Total: every
/// input combination produces exactly one action.
#[must_use]
pub fn decide(spec: &WindowSpec, ordered_windows: &[Window], focused: Option<&Window>) -> Action {
    // A spec with no attribute requirements is "always run this command".
    if !spec.has_matching_keys() {
        return Action::Launch(spec.command.clone());
    }

    if ordered_windows.is_empty() {
        return Action::Launch(spec.command.clone());
    }

    let matching: Vec<Window> = ordered_windows
        .iter()
        .filter(|window| spec.matches(window))
        .cloned()
        .collect();
    if matching.is_empty() {
        return Action::Launch(spec.command.clone());
    }

    let focused = match focused {
        Some(window) if matching.contains(window) => window,
        // The app isn't focused: jump to its most recently used window.
        _ => return Action::Focus(matching[0].clone()),
    };

    if matching.len() == 1 {
        debug_assert_eq!(&matching[0], focused);
        return Action::Noop;
    }

    let unvisited = unvisited_windows(&matching, ordered_windows);
    match unvisited.first() {
        Some(next) => Action::Advance(next.clone()),
        // Every matching window has been visited: wrap to the least
        // recently used one and restart the cycle from the far end.
        None => Action::Advance(matching[matching.len() - 1].clone()),
    }
}

/// Matching windows that are not part of the visited run at the top of the
/// MRU order. The visited prefix ends at the first window that does not
/// match.
#[must_use]
fn unvisited_windows(matching: &[Window], ordered_windows: &[Window]) -> Vec<Window> {
    let mut visited = Vec::new();
    for window in ordered_windows {
        if matching.contains(window) {
            visited.push(window);
        } else {
            break;
        }
    }

    matching
        .iter()
        .filter(|window| !visited.contains(window))
        .cloned()
        .collect()
}
