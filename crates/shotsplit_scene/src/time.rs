// SPDX-License-Identifier: MIT OR Apache-2.0
//! Document time values.

use serde::{Deserialize, Serialize};

/// A point in document time, in seconds.
///
/// Keyframes and frame ranges are stored as time values; conversion to frame
/// numbers only happens at the edges (log output), using the document's
/// frame rate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Time(f64);

impl Time {
    /// Time zero.
    pub const ZERO: Time = Time(0.0);

    /// Create a time from seconds.
    pub fn from_seconds(seconds: f64) -> Self {
        Self(seconds)
    }

    /// Seconds since document start.
    pub fn seconds(&self) -> f64 {
        self.0
    }

    /// Convert to the nearest frame number at the given frame rate.
    pub fn frame(&self, fps: f64) -> i64 {
        (self.0 * fps).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_conversion() {
        assert_eq!(Time::from_seconds(1.0).frame(30.0), 30);
        assert_eq!(Time::from_seconds(0.5).frame(24.0), 12);
        assert_eq!(Time::ZERO.frame(30.0), 0);
    }

    #[test]
    fn test_ordering() {
        assert!(Time::from_seconds(1.0) < Time::from_seconds(2.0));
        assert!(Time::ZERO <= Time::from_seconds(0.0));
    }
}
