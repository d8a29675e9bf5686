// SPDX-License-Identifier: MIT OR Apache-2.0
//! The scene document: node hierarchy, render settings, takes, undo.
//!
//! The document owns every entity; the rest of the system works with
//! [`NodeId`]/[`crate::TakeId`]/[`crate::RenderSettingsId`] handles and asks
//! the document to mutate state inside a `begin_undo`/`end_undo` bracket so
//! that one operation is exactly one undo step.

use crate::history::{History, HistoryError, StateSnapshot, Transaction};
use crate::node::{NodeId, SceneNode};
use crate::render::RenderSettings;
use crate::take::TakeTree;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Document errors
#[derive(Debug, Error)]
pub enum DocumentError {
    /// File read/write error
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Scene file parse error
    #[error("Scene parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Scene file encode error
    #[error("Scene encode error: {0}")]
    Encode(#[from] ron::Error),

    /// Undo history error
    #[error("History error: {0}")]
    History(#[from] HistoryError),
}

/// State covered by the undo bracket: what take generation mutates.
type UndoState = (Vec<RenderSettings>, TakeTree);

/// A scene document.
#[derive(Debug, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Document name (file name)
    pub name: String,
    /// File path, once saved or loaded
    pub path: Option<PathBuf>,
    /// Document frame rate
    pub fps: f64,
    /// All nodes, in creation order
    pub nodes: IndexMap<NodeId, SceneNode>,
    /// Currently selected nodes
    pub selection: Vec<NodeId>,
    /// Render-settings records; the first one is the document default
    pub render_settings: Vec<RenderSettings>,
    /// Take hierarchy
    pub takes: TakeTree,

    #[serde(skip)]
    history: History,
    #[serde(skip)]
    change_events: u64,
    #[serde(skip)]
    open_undo: Option<(String, StateSnapshot)>,
}

impl SceneDocument {
    /// Create an empty document with one default render-settings record
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            fps: 30.0,
            nodes: IndexMap::new(),
            selection: Vec::new(),
            render_settings: vec![RenderSettings::new("Default")],
            takes: TakeTree::new(),
            history: History::new(),
            change_events: 0,
            open_undo: None,
        }
    }

    /// Document name without its file extension
    pub fn base_name(&self) -> String {
        Path::new(&self.name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Untitled")
            .to_string()
    }

    // --- node hierarchy ------------------------------------------------

    /// Add a root node, returning its handle
    pub fn add_node(&mut self, node: SceneNode) -> NodeId {
        let id = NodeId::new();
        self.nodes.insert(id, node);
        id
    }

    /// Add a node as the last child of `parent`, returning its handle
    pub fn add_child(&mut self, parent: NodeId, mut node: SceneNode) -> NodeId {
        node.parent = Some(parent);
        let id = NodeId::new();
        self.nodes.insert(id, node);
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(id);
        }
        id
    }

    /// Get a node by handle
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    /// Get a mutable node by handle
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(&id)
    }

    /// Every node in the document, depth-first preorder from the roots
    pub fn walk(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        for (&id, node) in &self.nodes {
            if node.parent.is_none() {
                self.walk_from(id, &mut out);
            }
        }
        out
    }

    fn walk_from(&self, id: NodeId, out: &mut Vec<NodeId>) {
        out.push(id);
        if let Some(node) = self.nodes.get(&id) {
            for &child in &node.children {
                self.walk_from(child, out);
            }
        }
    }

    /// Strict ancestors of a node, nearest parent first
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.nodes.get(&id).and_then(|n| n.parent);
        while let Some(parent) = current {
            out.push(parent);
            current = self.nodes.get(&parent).and_then(|n| n.parent);
        }
        out
    }

    /// Replace the selection
    pub fn select(&mut self, ids: impl Into<Vec<NodeId>>) {
        self.selection = ids.into();
    }

    /// Currently selected nodes
    pub fn selected(&self) -> &[NodeId] {
        &self.selection
    }

    // --- render settings ------------------------------------------------

    /// The document's default (first) render-settings record
    pub fn default_render_settings(&self) -> Option<&RenderSettings> {
        self.render_settings.first()
    }

    /// Every record except the default one
    pub fn non_default_render_settings(&self) -> &[RenderSettings] {
        self.render_settings.get(1..).unwrap_or_default()
    }

    /// Append a record to the end of the list
    pub fn push_render_settings(&mut self, settings: RenderSettings) {
        self.render_settings.push(settings);
    }

    /// Remove every record except the default one. Returns the number removed.
    pub fn remove_non_default_render_settings(&mut self) -> usize {
        let removed = self.render_settings.len().saturating_sub(1);
        self.render_settings.truncate(1);
        removed
    }

    // --- undo -----------------------------------------------------------

    /// Open an undo bracket. Mutations until `end_undo` become one step.
    pub fn begin_undo(&mut self, description: impl Into<String>) -> Result<(), DocumentError> {
        let description = description.into();
        tracing::debug!(%description, "undo bracket opened");
        self.open_undo = Some((description, self.undo_snapshot()?));
        Ok(())
    }

    /// Close the undo bracket and commit the step. No-op without `begin_undo`.
    pub fn end_undo(&mut self) -> Result<(), DocumentError> {
        if let Some((description, before)) = self.open_undo.take() {
            let after = self.undo_snapshot()?;
            self.history.commit(Transaction::new(description, before, after));
        }
        Ok(())
    }

    /// Undo the last committed step
    pub fn undo(&mut self) -> Result<(), DocumentError> {
        let transaction = self.history.undo()?;
        self.restore(&transaction.before)?;
        Ok(())
    }

    /// Redo the last undone step
    pub fn redo(&mut self) -> Result<(), DocumentError> {
        let transaction = self.history.redo()?;
        self.restore(&transaction.after)?;
        Ok(())
    }

    /// Whether an undo step is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn undo_snapshot(&self) -> Result<StateSnapshot, HistoryError> {
        StateSnapshot::from_value(&(&self.render_settings, &self.takes))
    }

    fn restore(&mut self, snapshot: &StateSnapshot) -> Result<(), HistoryError> {
        let (render_settings, takes) = snapshot.to_value::<UndoState>()?;
        self.render_settings = render_settings;
        self.takes = takes;
        self.notify_changed();
        Ok(())
    }

    // --- change notification ---------------------------------------------

    /// Raise the document-changed event
    pub fn notify_changed(&mut self) {
        self.change_events += 1;
        tracing::debug!(events = self.change_events, "document changed");
    }

    /// Number of change events raised so far
    pub fn change_events(&self) -> u64 {
        self.change_events
    }

    // --- persistence -----------------------------------------------------

    /// Save the document to a file as pretty RON
    pub fn save(&mut self, path: &Path) -> Result<(), DocumentError> {
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        std::fs::write(path, text)?;
        self.path = Some(path.to_path_buf());
        tracing::info!(path = %path.display(), "saved document");
        Ok(())
    }

    /// Load a document from a RON file
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let text = std::fs::read_to_string(path)?;
        let mut document: SceneDocument = ron::from_str(&text)?;
        document.path = Some(path.to_path_buf());
        tracing::info!(path = %path.display(), "loaded document");
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeKind, SceneNode};

    #[test]
    fn test_walk_is_depth_first_preorder() {
        let mut doc = SceneDocument::new("scene.ron");
        let root = doc.add_node(SceneNode::new("Root", NodeKind::Null));
        let child = doc.add_child(root, SceneNode::new("Child", NodeKind::Null));
        let grandchild = doc.add_child(child, SceneNode::new("Grandchild", NodeKind::Camera));
        let sibling = doc.add_node(SceneNode::new("Sibling", NodeKind::Mesh));

        assert_eq!(doc.walk(), vec![root, child, grandchild, sibling]);
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let mut doc = SceneDocument::new("scene.ron");
        let root = doc.add_node(SceneNode::new("Root", NodeKind::Null));
        let mid = doc.add_child(root, SceneNode::new("Mid", NodeKind::Null));
        let leaf = doc.add_child(mid, SceneNode::new("Leaf", NodeKind::Camera));

        assert_eq!(doc.ancestors(leaf), vec![mid, root]);
        assert!(doc.ancestors(root).is_empty());
    }

    #[test]
    fn test_undo_restores_render_settings_and_takes() {
        let mut doc = SceneDocument::new("scene.ron");
        doc.begin_undo("Generate Takes").unwrap();
        let template = doc.default_render_settings().unwrap().duplicate();
        doc.push_render_settings(template);
        let main = doc.takes.main();
        doc.takes.add_take("Cam1", main, None);
        doc.end_undo().unwrap();

        assert_eq!(doc.render_settings.len(), 2);
        assert_eq!(doc.takes.len(), 2);

        doc.undo().unwrap();
        assert_eq!(doc.render_settings.len(), 1);
        assert_eq!(doc.takes.len(), 1);

        doc.redo().unwrap();
        assert_eq!(doc.render_settings.len(), 2);
        assert_eq!(doc.takes.len(), 2);
    }

    #[test]
    fn test_base_name_strips_extension() {
        assert_eq!(SceneDocument::new("shots.ron").base_name(), "shots");
        assert_eq!(SceneDocument::new("shots").base_name(), "shots");
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut doc = SceneDocument::new("scene.ron");
        let root = doc.add_node(SceneNode::new("Root", NodeKind::Null));
        doc.add_child(root, SceneNode::new("Cam1", NodeKind::Camera));

        let text =
            ron::ser::to_string_pretty(&doc, ron::ser::PrettyConfig::default()).unwrap();
        let loaded: SceneDocument = ron::from_str(&text).unwrap();
        assert_eq!(loaded.walk().len(), 2);
        assert_eq!(loaded.name, "scene.ron");
    }
}
