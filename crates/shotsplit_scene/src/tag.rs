// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tags that drive a node's motion from outside its own tracks.

use crate::node::NodeId;
use crate::track::{AnimationTrack, TrackParameter};
use serde::{Deserialize, Serialize};

/// Kind of tag, for lookup on a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagKind {
    /// Align-to-spline constraint
    AlignToSpline,
    /// Look-at target expression
    Target,
}

/// A tag attached to a scene node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Tag {
    /// Drives the node's position along a spline. Carries its own animation
    /// tracks, scoped to the tag rather than the node.
    AlignToSpline {
        /// Tracks on the tag (spline position and segment offset)
        tracks: Vec<AnimationTrack>,
    },
    /// Orients the node towards a target object, optionally stabilized by a
    /// separate up-vector object.
    Target {
        /// Object the node looks at
        target: Option<NodeId>,
        /// Object defining the up direction
        up_vector: Option<NodeId>,
    },
}

impl Tag {
    /// Get the kind of this tag
    pub fn kind(&self) -> TagKind {
        match self {
            Self::AlignToSpline { .. } => TagKind::AlignToSpline,
            Self::Target { .. } => TagKind::Target,
        }
    }

    /// Find a track of the given parameter on this tag
    pub fn find_track(&self, parameter: TrackParameter) -> Option<&AnimationTrack> {
        match self {
            Self::AlignToSpline { tracks } => tracks.iter().find(|t| t.parameter == parameter),
            Self::Target { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_track_on_align_tag() {
        let tag = Tag::AlignToSpline {
            tracks: vec![AnimationTrack::with_key_times(
                TrackParameter::SplinePosition,
                &[0.0, 3.0],
            )],
        };
        assert!(tag.find_track(TrackParameter::SplinePosition).is_some());
        assert!(tag.find_track(TrackParameter::SplineSegment).is_none());
    }

    #[test]
    fn test_target_tag_has_no_tracks() {
        let tag = Tag::Target {
            target: None,
            up_vector: None,
        };
        assert_eq!(tag.kind(), TagKind::Target);
        assert!(tag.find_track(TrackParameter::Position).is_none());
    }
}
