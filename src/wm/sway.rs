//! sway backend, over the synchronous IPC client.

use anyhow::{Context, Result};
use swayipc::{Connection, Node, NodeType};

use super::WmClient;
use crate::window::Window;

pub struct SwayWm {
    connection: Connection,
}

impl SwayWm {
    pub fn new() -> Result<Self> {
        let connection = Connection::new().context("failed to connect to the sway IPC socket")?;
        Ok(SwayWm { connection })
    }
}

impl WmClient for SwayWm {
    fn list_windows(&mut self) -> Result<Vec<Window>> {
        let tree = self.connection.get_tree()?;
        Ok(collect_windows(&tree, ""))
    }

    fn focused_window(&mut self) -> Result<Option<Window>> {
        let tree = self.connection.get_tree()?;
        Ok(find_focused(&tree, ""))
    }

    fn focus(&mut self, window: &Window) -> Result<()> {
        self.connection
            .run_command(format!("[con_id={}] focus", window.id))?;
        Ok(())
    }
}

/// Map a tree node to a window. Only views count: they are `Con` (or
/// floating) nodes with a pid, while layout containers have none.
fn window_from_node(node: &Node, workspace: &str) -> Option<Window> {
    if !matches!(node.node_type, NodeType::Con | NodeType::FloatingCon) || node.pid.is_none() {
        return None;
    }

    // XWayland windows carry a WM_CLASS; native Wayland windows have an
    // app_id instead, which fills the same role for matching.
    let wm_class = node
        .window_properties
        .as_ref()
        .and_then(|props| props.class.clone())
        .or_else(|| node.app_id.clone())
        .unwrap_or_default();

    Some(Window {
        id: node.id.to_string(),
        desktop: workspace.to_string(),
        pid: node.pid.map(|pid| pid.to_string()).unwrap_or_default(),
        wm_class,
        machine: String::new(),
        title: node.name.clone().unwrap_or_default(),
    })
}

/// Flatten the node tree into windows, tracking the workspace each window
/// sits on.
fn collect_windows(node: &Node, workspace: &str) -> Vec<Window> {
    let workspace = if node.node_type == NodeType::Workspace {
        node.name.as_deref().unwrap_or(workspace)
    } else {
        workspace
    };

    let mut windows = Vec::new();
    if let Some(window) = window_from_node(node, workspace) {
        windows.push(window);
    }
    for child in node.nodes.iter().chain(&node.floating_nodes) {
        windows.extend(collect_windows(child, workspace));
    }
    windows
}

/// Find the focused view in the tree. A focused layout container does not
/// count, only an actual window.
fn find_focused(node: &Node, workspace: &str) -> Option<Window> {
    let workspace = if node.node_type == NodeType::Workspace {
        node.name.as_deref().unwrap_or(workspace)
    } else {
        workspace
    };

    if node.focused
        && let Some(window) = window_from_node(node, workspace)
    {
        return Some(window);
    }

    node.nodes
        .iter()
        .chain(&node.floating_nodes)
        .find_map(|child| find_focused(child, workspace))
}

// swayipc::Node is #[non_exhaustive], so the traversal cannot be unit tested
// with hand-built trees; the node-to-window mapping is exercised against a
// live sway session instead.
