// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene nodes and their type identifiers.

use crate::tag::{Tag, TagKind};
use crate::track::{AnimationTrack, TrackParameter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle to a node in the scene document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Node type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Camera object
    Camera,
    /// Camera object from the legacy object set
    LegacyCamera,
    /// Null/group object
    Null,
    /// Polygon mesh
    Mesh,
    /// Spline curve
    Spline,
    /// Light source
    Light,
}

impl NodeKind {
    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Camera => "Camera",
            Self::LegacyCamera => "Camera (Legacy)",
            Self::Null => "Null",
            Self::Mesh => "Mesh",
            Self::Spline => "Spline",
            Self::Light => "Light",
        }
    }
}

/// A node in the scene hierarchy.
///
/// Nodes are owned by the document; everything else holds [`NodeId`] handles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneNode {
    /// Node name
    pub name: String,
    /// Node type
    pub kind: NodeKind,
    /// Parent node (if any)
    pub parent: Option<NodeId>,
    /// Child nodes
    pub children: Vec<NodeId>,
    /// Tags attached to this node
    pub tags: Vec<Tag>,
    /// Animation tracks on this node
    pub tracks: Vec<AnimationTrack>,
}

impl SceneNode {
    /// Create a new node with the given name and type
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parent: None,
            children: Vec::new(),
            tags: Vec::new(),
            tracks: Vec::new(),
        }
    }

    /// Attach a tag
    pub fn add_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// Add an animation track
    pub fn add_track(&mut self, track: AnimationTrack) {
        self.tracks.push(track);
    }

    /// Find a track of the given parameter on this node
    pub fn find_track(&self, parameter: TrackParameter) -> Option<&AnimationTrack> {
        self.tracks.iter().find(|t| t.parameter == parameter)
    }

    /// Find the first tag of the given kind on this node
    pub fn find_tag(&self, kind: TagKind) -> Option<&Tag> {
        self.tags.iter().find(|t| t.kind() == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_track() {
        let mut node = SceneNode::new("Cam1", NodeKind::Camera);
        node.add_track(AnimationTrack::with_key_times(
            TrackParameter::Position,
            &[2.0, 7.0],
        ));

        assert!(node.find_track(TrackParameter::Position).is_some());
        assert!(node.find_track(TrackParameter::Rotation).is_none());
    }

    #[test]
    fn test_find_tag_returns_first_match() {
        let mut node = SceneNode::new("Cam1", NodeKind::Camera);
        let a = NodeId::new();
        let b = NodeId::new();
        node.add_tag(Tag::Target {
            target: Some(a),
            up_vector: None,
        });
        node.add_tag(Tag::Target {
            target: Some(b),
            up_vector: None,
        });

        match node.find_tag(TagKind::Target) {
            Some(Tag::Target { target, .. }) => assert_eq!(*target, Some(a)),
            other => panic!("unexpected tag: {other:?}"),
        }
    }
}
