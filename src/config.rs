//! App alias lookup from the user's config file.
//!
//! The config file is a JSON object mapping aliases to window specs:
//!
//! ```json
//! {
//!     "Firefox": {"wm_class": ".Firefox", "command": "firefox"},
//!     "gvim": {"wm_class": "gvim.Gvim", "command": "gvim"}
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use crate::error::ConfigError;
use crate::spec::WindowSpec;

/// Resolve `alias` against the config file at `path`.
///
/// Aliases match case-insensitively: a config entry "Firefox" is found by
/// `firefox`. Two entries whose names only differ in case are a
/// [`ConfigError::Duplicate`]; an alias with no entry is a
/// [`ConfigError::NotFound`].
pub fn resolve_alias(alias: &str, path: &Path) -> Result<WindowSpec, ConfigError> {
    let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_owned(),
        source,
    })?;
    let specs: HashMap<String, WindowSpec> =
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })?;

    let mut folded: HashMap<String, WindowSpec> = HashMap::with_capacity(specs.len());
    for (name, spec) in specs {
        let name = name.to_lowercase();
        if folded.insert(name.clone(), spec).is_some() {
            return Err(ConfigError::Duplicate {
                alias: name,
                path: path.to_owned(),
            });
        }
    }

    folded
        .remove(&alias.to_lowercase())
        .ok_or_else(|| ConfigError::NotFound {
            alias: alias.to_string(),
            path: path.to_owned(),
        })
}
