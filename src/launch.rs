use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::info;

/// Runs an app's launch command.
pub trait CommandRunner {
    /// Spawn `command` detached; its exit status is never collected.
    fn run(&self, command: &str) -> Result<()>;
}

/// Spawns launch commands through the user's shell, fire-and-forget.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<()> {
        info!("launching: {command}");
        Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to launch '{command}'"))?;
        Ok(())
    }
}
