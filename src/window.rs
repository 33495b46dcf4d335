use serde::{Deserialize, Serialize};

/// A window as reported by the window manager.
///
/// The attributes mirror what `wmctrl -lpx` reports for each window. A
/// backend that cannot supply an attribute leaves it empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Window {
    pub id: String,
    #[serde(default)]
    pub desktop: String,
    #[serde(default)]
    pub pid: String,
    #[serde(default)]
    pub wm_class: String,
    #[serde(default)]
    pub machine: String,
    #[serde(default)]
    pub title: String,
}

impl Window {
    /// A window known only by its id. Equality is id-based, so this is
    /// enough for membership checks against a full window list.
    pub fn from_id(id: impl Into<String>) -> Self {
        Window {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Look up a matchable attribute by its spec key.
    pub fn attr(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(self.id.as_str()),
            "desktop" => Some(self.desktop.as_str()),
            "pid" => Some(self.pid.as_str()),
            "wm_class" => Some(self.wm_class.as_str()),
            "machine" => Some(self.machine.as_str()),
            "title" => Some(self.title.as_str()),
            _ => None,
        }
    }
}

/// Two windows are the same window iff their ids are equal; the other
/// attributes can drift between queries within a single run.
impl PartialEq for Window {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Window {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_id_only() {
        let a = Window {
            id: "0x01".to_string(),
            title: "Old Title".to_string(),
            ..Default::default()
        };
        let b = Window {
            id: "0x01".to_string(),
            title: "New Title".to_string(),
            ..Default::default()
        };
        let c = Window::from_id("0x02");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_attr_lookup() {
        let window = Window {
            id: "0x01".to_string(),
            wm_class: "Navigator.Firefox".to_string(),
            ..Default::default()
        };

        assert_eq!(window.attr("wm_class"), Some("Navigator.Firefox"));
        assert_eq!(window.attr("title"), Some(""));
        assert_eq!(window.attr("bogus"), None);
    }
}
