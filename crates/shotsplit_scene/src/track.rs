// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animation tracks and keyframes.

use crate::time::Time;
use serde::{Deserialize, Serialize};

/// Parameter id a track animates.
///
/// The transform channels live on scene nodes; the spline channels live on
/// align-to-spline tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackParameter {
    /// Relative position
    Position,
    /// Relative rotation
    Rotation,
    /// Relative scale
    Scale,
    /// Position along a spline (align-to-spline tag)
    SplinePosition,
    /// Spline segment offset (align-to-spline tag)
    SplineSegment,
}

impl TrackParameter {
    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Position => "Position",
            Self::Rotation => "Rotation",
            Self::Scale => "Scale",
            Self::SplinePosition => "Spline Position",
            Self::SplineSegment => "Spline Segment",
        }
    }
}

/// A keyframe on an animation track.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Keyframe {
    /// Time of the keyframe
    pub time: Time,
    /// Value at this keyframe
    pub value: f64,
}

impl Keyframe {
    /// Create a new keyframe
    pub fn new(time: Time, value: f64) -> Self {
        Self { time, value }
    }
}

/// An animation track: one animated parameter with its keyframes.
///
/// Keyframes are kept ordered by time, earliest first. A track present on a
/// node or tag is expected to hold at least one keyframe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationTrack {
    /// Parameter this track animates
    pub parameter: TrackParameter,
    /// Keyframes, ordered by time
    keyframes: Vec<Keyframe>,
}

impl AnimationTrack {
    /// Create a new empty track
    pub fn new(parameter: TrackParameter) -> Self {
        Self {
            parameter,
            keyframes: Vec::new(),
        }
    }

    /// Create a track with keyframes at the given times, value 0.
    pub fn with_key_times(parameter: TrackParameter, times: &[f64]) -> Self {
        let mut track = Self::new(parameter);
        for &t in times {
            track.add_key(Time::from_seconds(t), 0.0);
        }
        track
    }

    /// Add a keyframe, keeping the track sorted
    pub fn add_keyframe(&mut self, keyframe: Keyframe) {
        self.keyframes.push(keyframe);
        self.keyframes
            .sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap());
    }

    /// Add a keyframe at the given time
    pub fn add_key(&mut self, time: Time, value: f64) {
        self.add_keyframe(Keyframe::new(time, value));
    }

    /// Time of the earliest keyframe
    pub fn first_time(&self) -> Option<Time> {
        self.keyframes.first().map(|k| k.time)
    }

    /// Time of the latest keyframe
    pub fn last_time(&self) -> Option<Time> {
        self.keyframes.last().map(|k| k.time)
    }

    /// Get keyframe count
    pub fn keyframe_count(&self) -> usize {
        self.keyframes.len()
    }

    /// Get all keyframes
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframes_sorted_on_insert() {
        let mut track = AnimationTrack::new(TrackParameter::Position);
        track.add_key(Time::from_seconds(7.0), 0.0);
        track.add_key(Time::from_seconds(2.0), 0.0);
        track.add_key(Time::from_seconds(5.0), 0.0);

        assert_eq!(track.first_time(), Some(Time::from_seconds(2.0)));
        assert_eq!(track.last_time(), Some(Time::from_seconds(7.0)));
        assert_eq!(track.keyframe_count(), 3);
    }

    #[test]
    fn test_empty_track_has_no_bounds() {
        let track = AnimationTrack::new(TrackParameter::Scale);
        assert_eq!(track.first_time(), None);
        assert_eq!(track.last_time(), None);
    }
}
