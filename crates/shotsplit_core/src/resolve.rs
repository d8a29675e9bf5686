// SPDX-License-Identifier: MIT OR Apache-2.0
//! Frame-range inference for a camera's effective motion.
//!
//! A camera's range covers every keyframe on every track that can move it:
//! its own transform tracks, its ancestors' transform tracks, the tracks on
//! an align-to-spline tag, and the transform tracks of target/up-vector
//! objects referenced by a look-at tag.

use shotsplit_scene::{AnimationTrack, NodeId, SceneDocument, Tag, TagKind, Time, TrackParameter};
use std::collections::HashSet;

/// Transform parameters inspected on every contributing object
const TRANSFORM_PARAMETERS: [TrackParameter; 3] = [
    TrackParameter::Position,
    TrackParameter::Rotation,
    TrackParameter::Scale,
];

/// Parameters inspected on an align-to-spline tag
const SPLINE_PARAMETERS: [TrackParameter; 2] =
    [TrackParameter::SplinePosition, TrackParameter::SplineSegment];

/// The inclusive time span covering all relevant keyframes.
///
/// `count` is the number of tracks that contributed; at zero the interval is
/// `(0, 0)` by convention. Once a track contributes, `start <= end` holds
/// and further contributions only widen the span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeInterval {
    /// Earliest contributing keyframe time
    pub start: Time,
    /// Latest contributing keyframe time
    pub end: Time,
    /// Number of contributing tracks
    pub count: usize,
}

impl TimeInterval {
    /// The empty interval: no contributions, `(0, 0)`
    pub fn new() -> Self {
        Self {
            start: Time::ZERO,
            end: Time::ZERO,
            count: 0,
        }
    }

    /// Fold one track's `(first, last)` keyframe times into the interval.
    ///
    /// The first contribution initializes both bounds; later ones expand
    /// them outwards, never inwards.
    pub fn expand(&mut self, min: Time, max: Time) {
        if self.count == 0 || min < self.start {
            self.start = min;
        }
        if self.count == 0 || max > self.end {
            self.end = max;
        }
        self.count += 1;
    }

    /// Whether any track contributed
    pub fn has_data(&self) -> bool {
        self.count > 0
    }
}

impl Default for TimeInterval {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the time interval covering every motion source of `camera`.
pub fn resolve(doc: &SceneDocument, camera: NodeId) -> TimeInterval {
    let mut interval = TimeInterval::new();
    let mut visited: HashSet<NodeId> = HashSet::new();

    let mut contributors = vec![camera];
    contributors.extend(doc.ancestors(camera));

    for id in contributors {
        collect_transform_tracks(doc, id, &mut interval);
        collect_tags(doc, id, &mut interval, &mut visited);
    }

    tracing::debug!(
        start = interval.start.seconds(),
        end = interval.end.seconds(),
        tracks = interval.count,
        "resolved camera range"
    );
    interval
}

fn collect_transform_tracks(doc: &SceneDocument, id: NodeId, interval: &mut TimeInterval) {
    let Some(node) = doc.node(id) else { return };
    for parameter in TRANSFORM_PARAMETERS {
        collect_track(node.find_track(parameter), interval);
    }
}

fn collect_tags(
    doc: &SceneDocument,
    id: NodeId,
    interval: &mut TimeInterval,
    visited: &mut HashSet<NodeId>,
) {
    let Some(node) = doc.node(id) else { return };

    if let Some(align) = node.find_tag(TagKind::AlignToSpline) {
        for parameter in SPLINE_PARAMETERS {
            collect_track(align.find_track(parameter), interval);
        }
    }

    if let Some(Tag::Target { target, up_vector }) = node.find_tag(TagKind::Target) {
        if let Some(target) = target {
            collect_link(doc, *target, interval, visited);
        }
        if let Some(up_vector) = up_vector {
            collect_link(doc, *up_vector, interval, visited);
        }
    }
}

/// A linked object contributes its own transform tracks only, not its
/// ancestors or tags. The visited set keeps repeated or cyclic references
/// from contributing twice.
fn collect_link(
    doc: &SceneDocument,
    id: NodeId,
    interval: &mut TimeInterval,
    visited: &mut HashSet<NodeId>,
) {
    if !visited.insert(id) {
        return;
    }
    collect_transform_tracks(doc, id, interval);
}

fn collect_track(track: Option<&AnimationTrack>, interval: &mut TimeInterval) {
    let Some(track) = track else { return };
    if let (Some(first), Some(last)) = (track.first_time(), track.last_time()) {
        interval.expand(first, last);
    }
}
