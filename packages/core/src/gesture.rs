//! Gesture routing: swipe classification over raw touch points, and the
//! tap-zone split used by the numbers and sentences screens.
//!
//! A swipe fires only when the dominant-axis displacement exceeds the
//! minimum distance; anything shorter is a tap and is left to the
//! caller's click handling, so the two never double-fire.

use serde::{Deserialize, Serialize};

/// Minimum dominant-axis displacement, in logical pixels.
pub const MIN_SWIPE_DISTANCE: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Finger moved right-to-left; advances to the next item.
    Left,
    /// Finger moved left-to-right; returns to the previous item.
    Right,
    Up,
    Down,
}

/// Tracks one touch sequence from start through moves to release.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start: Option<Point>,
    last: Option<Point>,
    min_distance: f32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self {
            start: None,
            last: None,
            min_distance: MIN_SWIPE_DISTANCE,
        }
    }

    pub fn with_min_distance(min_distance: f32) -> Self {
        Self {
            start: None,
            last: None,
            min_distance,
        }
    }

    pub fn touch_start(&mut self, point: Point) {
        self.last = None;
        self.start = Some(point);
    }

    pub fn touch_move(&mut self, point: Point) {
        self.last = Some(point);
    }

    /// Classify the finished sequence. `None` means tap (or no movement
    /// was recorded).
    pub fn touch_end(&mut self) -> Option<SwipeDirection> {
        let (start, last) = (self.start.take()?, self.last.take()?);
        let dx = start.x - last.x;
        let dy = start.y - last.y;
        if dx.abs() > dy.abs() {
            if dx.abs() < self.min_distance {
                return None;
            }
            Some(if dx > 0.0 {
                SwipeDirection::Left
            } else {
                SwipeDirection::Right
            })
        } else {
            if dy.abs() < self.min_distance {
                return None;
            }
            Some(if dy > 0.0 {
                SwipeDirection::Up
            } else {
                SwipeDirection::Down
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapZone {
    /// Left quarter of the screen: previous item.
    Previous,
    /// Center half: replay the current narration.
    Replay,
    /// Right quarter: next item.
    Next,
}

impl TapZone {
    /// Classify a tap by its horizontal position on a screen of the
    /// given width.
    pub fn classify(x: f32, width: f32) -> Self {
        if x < width / 4.0 {
            TapZone::Previous
        } else if x > width * 3.0 / 4.0 {
            TapZone::Next
        } else {
            TapZone::Replay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(dx: f32, dy: f32) -> Option<SwipeDirection> {
        let mut tracker = SwipeTracker::new();
        tracker.touch_start(Point::new(100.0, 100.0));
        tracker.touch_move(Point::new(100.0 + dx, 100.0 + dy));
        tracker.touch_end()
    }

    #[test]
    fn long_leftward_drag_is_swipe_left() {
        assert_eq!(run(-80.0, 10.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn short_drag_is_a_tap() {
        assert_eq!(run(-30.0, 10.0), None);
        assert_eq!(run(10.0, 10.0), None);
    }

    #[test]
    fn vertical_drag_never_fires_horizontally() {
        assert_eq!(run(10.0, -80.0), Some(SwipeDirection::Up));
        assert_eq!(run(10.0, 80.0), Some(SwipeDirection::Down));
    }

    #[test]
    fn rightward_drag_is_swipe_right() {
        assert_eq!(run(80.0, -10.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn end_without_movement_is_nothing() {
        let mut tracker = SwipeTracker::new();
        tracker.touch_start(Point::new(10.0, 10.0));
        assert_eq!(tracker.touch_end(), None);
        // A fresh sequence after release starts clean.
        tracker.touch_start(Point::new(0.0, 0.0));
        tracker.touch_move(Point::new(-90.0, 0.0));
        assert_eq!(tracker.touch_end(), Some(SwipeDirection::Left));
    }

    #[test]
    fn tap_zones_split_quarters() {
        assert_eq!(TapZone::classify(50.0, 400.0), TapZone::Previous);
        assert_eq!(TapZone::classify(200.0, 400.0), TapZone::Replay);
        assert_eq!(TapZone::classify(350.0, 400.0), TapZone::Next);
    }
}
