use serde::Deserialize;

use crate::window::Window;

/// Which windows a hotkey targets, plus the command that launches the app
/// when it has no windows to switch to.
///
/// A spec doesn't have to constrain every attribute: `{"wm_class":
/// ".Firefox"}` targets every window whose WM_CLASS contains ".Firefox".
/// Config file entries deserialize directly into this type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WindowSpec {
    pub id: Option<String>,
    pub desktop: Option<String>,
    pub pid: Option<String>,
    pub wm_class: Option<String>,
    pub machine: Option<String>,
    pub title: Option<String>,
    pub command: Option<String>,
}

impl WindowSpec {
    /// Attribute requirements as (attribute name, required substring) pairs.
    /// `command` is not a matching key.
    fn matching_entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("id", self.id.as_deref()),
            ("desktop", self.desktop.as_deref()),
            ("pid", self.pid.as_deref()),
            ("wm_class", self.wm_class.as_deref()),
            ("machine", self.machine.as_deref()),
            ("title", self.title.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
    }

    /// True when the spec constrains at least one window attribute. A spec
    /// with only a `command` does not target windows at all.
    #[must_use]
    pub fn has_matching_keys(&self) -> bool {
        self.matching_entries().next().is_some()
    }

    /// Does `window` satisfy every attribute requirement in this spec?
    ///
    /// Matching is by case-folded substring: a `wm_class` of ".firefox"
    /// matches a window whose WM_CLASS is "Navigator.Firefox". A window
    /// without the attribute is treated as having an empty value. A spec with
    /// no attribute requirements matches every window.
    #[must_use]
    pub fn matches(&self, window: &Window) -> bool {
        self.matching_entries().all(|(key, wanted)| {
            let value = window.attr(key).unwrap_or_default();
            value.to_lowercase().contains(&wanted.to_lowercase())
        })
    }

    /// Overlay `overrides` on top of this spec; any attribute or command set
    /// there wins over the config file's value.
    pub fn merge(&mut self, overrides: WindowSpec) {
        self.id = overrides.id.or(self.id.take());
        self.desktop = overrides.desktop.or(self.desktop.take());
        self.pid = overrides.pid.or(self.pid.take());
        self.wm_class = overrides.wm_class.or(self.wm_class.take());
        self.machine = overrides.machine.or(self.machine.take());
        self.title = overrides.title.or(self.title.take());
        self.command = overrides.command.or(self.command.take());
    }
}
