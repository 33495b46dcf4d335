//! Window manager backends.
//!
//! The decision engine only needs three things from the window manager:
//! the open windows, the focused window, and a way to focus one. This
//! abstraction keeps the engine testable against fakes and lets the same
//! binary drive different window managers.

mod sway;
mod wmctrl;

pub use sway::SwayWm;
pub use wmctrl::WmctrlWm;

use anyhow::Result;
use clap::ValueEnum;

use crate::window::Window;

/// A window manager the tool can query and drive.
pub trait WmClient {
    /// The open windows, in the manager's own listing order. The order is
    /// stable within one call.
    fn list_windows(&mut self) -> Result<Vec<Window>>;

    /// The currently focused window, if the manager reports one.
    fn focused_window(&mut self) -> Result<Option<Window>>;

    /// Focus `window`. Best effort: the manager may silently ignore a
    /// request for a window that no longer exists, and we never re-verify.
    fn focus(&mut self, window: &Window) -> Result<()>;
}

/// Which backend talks to the window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// EWMH/NetWM window managers, via the `wmctrl` and `xprop` tools
    Wmctrl,
    /// sway, via its IPC socket
    Sway,
}

/// Connect the chosen backend.
pub fn connect(backend: Backend) -> Result<Box<dyn WmClient>> {
    match backend {
        Backend::Wmctrl => Ok(Box::new(WmctrlWm::new())),
        Backend::Sway => Ok(Box::new(SwayWm::new()?)),
    }
}
