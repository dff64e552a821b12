//! Shared test utilities for the shopfront test suite.
//!
//! Provides rotation fixtures and a timeline driver used by the rotation and
//! timer tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut timeline = Timeline::new();
//! let mut ctrl = RotationController::new(slides(3), ms(100)).unwrap();
//! ctrl.start(&mut timeline);
//! assert_eq!(drive(&mut timeline, &mut ctrl, ms(250)), 2);
//! ```

use crate::rotation::{DisplayItem, RotationController};
use crate::timer::Timeline;
use std::time::Duration;

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// `n` labeled display items: "slide 0", "slide 1", ...
pub fn slides(n: usize) -> Vec<DisplayItem> {
    (0..n)
        .map(|i| DisplayItem::new(format!("slide {i}")))
        .collect()
}

/// Advance the timeline and dispatch every drained tick to the controller,
/// the way a page event loop would. Returns how many ticks the controller
/// actually claimed.
pub fn drive(timeline: &mut Timeline, ctrl: &mut RotationController, elapsed: Duration) -> usize {
    timeline
        .advance(elapsed)
        .into_iter()
        .filter(|tick| ctrl.handle_tick(*tick))
        .count()
}

/// Indices of all active items — the exactly-one-active invariant makes this
/// a single-element vector for any healthy controller.
pub fn active_indices(ctrl: &RotationController) -> Vec<usize> {
    ctrl.items()
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_active())
        .map(|(i, _)| i)
        .collect()
}
