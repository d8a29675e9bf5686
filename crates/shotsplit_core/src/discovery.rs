// SPDX-License-Identifier: MIT OR Apache-2.0
//! Camera discovery and ordering.

use crate::natural::natural_cmp;
use shotsplit_scene::{NodeId, NodeKind, SceneDocument};

/// Node types treated as cameras. Process-wide configuration.
pub const CAMERA_KINDS: &[NodeKind] = &[NodeKind::Camera, NodeKind::LegacyCamera];

/// Which nodes a session considers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryScope {
    /// Every node in the document
    WholeScene,
    /// The current selection only
    Selection,
}

/// Whether a node is a camera
pub fn is_camera(doc: &SceneDocument, id: NodeId) -> bool {
    doc.node(id).is_some_and(|n| CAMERA_KINDS.contains(&n.kind))
}

/// Find every camera in scope, ordered by natural name comparison.
///
/// The sort is stable: cameras with equal names keep their scene order.
pub fn discover(doc: &SceneDocument, scope: DiscoveryScope) -> Vec<NodeId> {
    let candidates = match scope {
        DiscoveryScope::WholeScene => doc.walk(),
        DiscoveryScope::Selection => doc.selected().to_vec(),
    };

    let mut cameras: Vec<NodeId> = candidates
        .into_iter()
        .filter(|&id| is_camera(doc, id))
        .collect();

    cameras.sort_by(|&a, &b| natural_cmp(node_name(doc, a), node_name(doc, b)));

    tracing::debug!(count = cameras.len(), ?scope, "discovered cameras");
    cameras
}

fn node_name(doc: &SceneDocument, id: NodeId) -> &str {
    doc.node(id).map(|n| n.name.as_str()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shotsplit_scene::SceneNode;

    fn doc_with_cameras(names: &[&str]) -> SceneDocument {
        let mut doc = SceneDocument::new("scene.ron");
        doc.add_node(SceneNode::new("Geometry", NodeKind::Mesh));
        for name in names {
            doc.add_node(SceneNode::new(*name, NodeKind::Camera));
        }
        doc.add_node(SceneNode::new("Sun", NodeKind::Light));
        doc
    }

    #[test]
    fn test_filters_to_camera_kinds() {
        let mut doc = doc_with_cameras(&["Cam1"]);
        doc.add_node(SceneNode::new("OldCam", NodeKind::LegacyCamera));

        let cameras = discover(&doc, DiscoveryScope::WholeScene);
        assert_eq!(cameras.len(), 2);
        assert!(cameras.iter().all(|&id| is_camera(&doc, id)));
    }

    #[test]
    fn test_natural_name_order() {
        let doc = doc_with_cameras(&["Cam2", "Cam10", "Cam1"]);
        let cameras = discover(&doc, DiscoveryScope::WholeScene);

        let names: Vec<&str> = cameras
            .iter()
            .map(|&id| doc.node(id).unwrap().name.as_str())
            .collect();
        assert_eq!(names, ["Cam1", "Cam2", "Cam10"]);
    }

    #[test]
    fn test_selection_scope() {
        let mut doc = SceneDocument::new("scene.ron");
        let picked = doc.add_node(SceneNode::new("CamA", NodeKind::Camera));
        doc.add_node(SceneNode::new("CamB", NodeKind::Camera));
        let mesh = doc.add_node(SceneNode::new("Floor", NodeKind::Mesh));
        doc.select(vec![picked, mesh]);

        assert_eq!(discover(&doc, DiscoveryScope::Selection), vec![picked]);
    }

    #[test]
    fn test_nested_cameras_are_found() {
        let mut doc = SceneDocument::new("scene.ron");
        let rig = doc.add_node(SceneNode::new("Rig", NodeKind::Null));
        doc.add_child(rig, SceneNode::new("Cam1", NodeKind::Camera));

        assert_eq!(discover(&doc, DiscoveryScope::WholeScene).len(), 1);
    }

    #[test]
    fn test_empty_scene_yields_nothing() {
        let doc = SceneDocument::new("scene.ron");
        assert!(discover(&doc, DiscoveryScope::WholeScene).is_empty());
    }
}
