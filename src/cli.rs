use clap::Parser;

use crate::spec::WindowSpec;
use crate::wm::Backend;

/// Launch an app, switch to it, or cycle through its windows.
///
/// Bind an invocation to a hotkey: if the app has no open windows its
/// command is run, if it isn't focused its most recently used window is
/// raised, and if it is focused the hotkey steps through its windows.
#[derive(Debug, Parser)]
#[command(name = "runraisenext", version)]
pub struct Cli {
    /// Alias of a window spec from the config file
    pub alias: Option<String>,

    /// Window ID to look for, e.g. 0x0180000b. An ID uniquely identifies a
    /// window, so it cannot be combined with other window spec options
    #[arg(
        short = 'i',
        long = "id",
        conflicts_with_all = ["desktop", "pid", "wm_class", "machine", "title"]
    )]
    pub window_id: Option<String>,

    /// Desktop to look for windows on, e.g. 1
    #[arg(short, long)]
    pub desktop: Option<String>,

    /// Process id to look for, e.g. 3384
    #[arg(short, long)]
    pub pid: Option<String>,

    /// WM_CLASS to look for, e.g. Navigator.Firefox
    #[arg(short = 'w', long)]
    pub wm_class: Option<String>,

    /// Client machine name to look for
    #[arg(short, long)]
    pub machine: Option<String>,

    /// Window title to look for
    #[arg(short, long)]
    pub title: Option<String>,

    /// Command that launches the app when no matching windows are found,
    /// e.g. firefox
    #[arg(short, long)]
    pub command: Option<String>,

    /// Config file with the window spec aliases
    #[arg(short, long, default_value = "~/.runraisenext.json")]
    pub file: String,

    /// Window manager backend to talk to
    #[arg(long, value_enum, default_value = "wmctrl")]
    pub backend: Backend,

    /// Print the chosen action instead of performing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The window spec given directly on the command line, to be overlaid
    /// on whatever the alias resolved to.
    pub fn spec_overrides(&self) -> WindowSpec {
        WindowSpec {
            id: self.window_id.clone(),
            desktop: self.desktop.clone(),
            pid: self.pid.clone(),
            wm_class: self.wm_class.clone(),
            machine: self.machine.clone(),
            title: self.title.clone(),
            command: self.command.clone(),
        }
    }
}
