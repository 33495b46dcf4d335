//! Backend for EWMH/NetWM window managers, driven through the `wmctrl` and
//! `xprop` command line tools.

use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::debug;

use super::WmClient;
use crate::window::Window;

pub struct WmctrlWm;

impl WmctrlWm {
    pub fn new() -> Self {
        WmctrlWm
    }

    fn wmctrl(args: &[&str]) -> Result<String> {
        let output = Command::new("wmctrl")
            .args(args)
            .output()
            .context("failed to run wmctrl (is it installed?)")?;
        if !output.status.success() {
            bail!(
                "wmctrl {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl WmClient for WmctrlWm {
    fn list_windows(&mut self) -> Result<Vec<Window>> {
        let listing = Self::wmctrl(&["-lpx"])?;
        Ok(listing
            .lines()
            .filter_map(|line| {
                let window = parse_listing_line(line);
                if window.is_none() && !line.trim().is_empty() {
                    debug!("skipping unparsable wmctrl line: {line}");
                }
                window
            })
            .collect())
    }

    fn focused_window(&mut self) -> Result<Option<Window>> {
        let output = Command::new("xprop")
            .args(["-root", "_NET_ACTIVE_WINDOW"])
            .output()
            .context("failed to run xprop (is it installed?)")?;
        if !output.status.success() {
            debug!("xprop could not read _NET_ACTIVE_WINDOW");
            return Ok(None);
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        // Window equality is id-based, so an id-only window is enough for
        // the membership checks the decision engine performs.
        Ok(parse_active_window(&stdout).map(Window::from_id))
    }

    fn focus(&mut self, window: &Window) -> Result<()> {
        Self::wmctrl(&["-i", "-a", &window.id])?;
        Ok(())
    }
}

/// Canonical form for X window ids, so ids from `wmctrl` (`0x02a00001`) and
/// `xprop` (`0x2a00001`) compare equal.
fn normalize_id(id: &str) -> Option<String> {
    let hex = id.trim().strip_prefix("0x")?;
    u64::from_str_radix(hex, 16).ok().map(|n| format!("{n:#010x}"))
}

/// Parse one line of `wmctrl -lpx` output:
///
/// ```text
/// 0x02a00001  0 4346   Navigator.Firefox  mistakenot The Mock Class - Firefox
/// ```
///
/// Columns are window id, desktop, pid, WM_CLASS, client machine, then the
/// title (which may itself contain whitespace) to the end of the line.
fn parse_listing_line(line: &str) -> Option<Window> {
    let (id, rest) = next_column(line)?;
    let (desktop, rest) = next_column(rest)?;
    let (pid, rest) = next_column(rest)?;
    let (wm_class, rest) = next_column(rest)?;
    let (machine, rest) = next_column(rest)?;

    Some(Window {
        id: normalize_id(id)?,
        desktop: desktop.to_string(),
        pid: pid.to_string(),
        wm_class: wm_class.to_string(),
        machine: machine.to_string(),
        title: rest.trim().to_string(),
    })
}

/// Split one whitespace-delimited column off the front of a listing line.
fn next_column(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start();
    if line.is_empty() {
        return None;
    }
    match line.find(char::is_whitespace) {
        Some(split) => Some((&line[..split], &line[split..])),
        None => Some((line, "")),
    }
}

/// Extract the focused window id from `xprop -root _NET_ACTIVE_WINDOW`
/// output, e.g. `_NET_ACTIVE_WINDOW(WINDOW): window id # 0x2a00001`. An id
/// of 0 means nothing is focused.
fn parse_active_window(output: &str) -> Option<String> {
    let token = output
        .split_whitespace()
        .find(|token| token.starts_with("0x"))?;
    let id = normalize_id(token.trim_end_matches(','))?;
    (id != "0x00000000").then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing_line() {
        let line = "0x02a00001  0 4346   Navigator.Firefox     mistakenot The Mock Class - Mock 1.0.1 documentation - Firefox";

        let window = parse_listing_line(line).unwrap();

        assert_eq!(window.id, "0x02a00001");
        assert_eq!(window.desktop, "0");
        assert_eq!(window.pid, "4346");
        assert_eq!(window.wm_class, "Navigator.Firefox");
        assert_eq!(window.machine, "mistakenot");
        assert_eq!(
            window.title,
            "The Mock Class - Mock 1.0.1 documentation - Firefox"
        );
    }

    #[test]
    fn test_parse_listing_line_sticky_desktop_and_empty_title() {
        // Sticky windows report desktop -1; a window may have no title.
        let window = parse_listing_line("0x01600003 -1 2211   Conky.conky  mistakenot").unwrap();

        assert_eq!(window.desktop, "-1");
        assert_eq!(window.title, "");
    }

    #[test]
    fn test_parse_listing_line_rejects_garbage() {
        assert!(parse_listing_line("").is_none());
        assert!(parse_listing_line("not a window line").is_none());
    }

    #[test]
    fn test_normalize_id_pads_and_lowercases() {
        assert_eq!(normalize_id("0x2a00001").as_deref(), Some("0x02a00001"));
        assert_eq!(normalize_id("0x02A00001").as_deref(), Some("0x02a00001"));
        assert!(normalize_id("4346").is_none());
    }

    #[test]
    fn test_parse_active_window() {
        let output = "_NET_ACTIVE_WINDOW(WINDOW): window id # 0x2a00001\n";
        assert_eq!(parse_active_window(output).as_deref(), Some("0x02a00001"));
    }

    #[test]
    fn test_parse_active_window_none_focused() {
        let output = "_NET_ACTIVE_WINDOW(WINDOW): window id # 0x0\n";
        assert_eq!(parse_active_window(output), None);
    }

    #[test]
    fn test_parse_active_window_garbage() {
        assert_eq!(parse_active_window("_NET_ACTIVE_WINDOW: not found"), None);
    }
}
