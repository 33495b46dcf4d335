mod app;
mod cli;
mod config;
mod error;
mod launch;
mod mru;
mod selector;
mod spec;
mod window;
mod wm;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use launch::ShellRunner;
use mru::FileMruStore;
use spec::WindowSpec;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut spec = match &cli.alias {
        Some(alias) => config::resolve_alias(alias, &expand_tilde(&cli.file)?)?,
        None => WindowSpec::default(),
    };
    spec.merge(cli.spec_overrides());

    let store_path = FileMruStore::default_path().context("could not determine cache directory")?;
    let store = FileMruStore::new(store_path);
    let mut wm = wm::connect(cli.backend)?;

    app::run_once(&spec, wm.as_mut(), &ShellRunner, &store, cli.dry_run)
}

/// Expand a leading `~/` to the user's home directory.
fn expand_tilde(path: &str) -> Result<PathBuf> {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = dirs::home_dir().context("could not determine home directory")?;
        return Ok(home.join(rest));
    }
    Ok(PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(
            expand_tilde("~/.runraisenext.json").unwrap(),
            home.join(".runraisenext.json")
        );
        assert_eq!(
            expand_tilde("/etc/runraisenext.json").unwrap(),
            PathBuf::from("/etc/runraisenext.json")
        );
    }
}
