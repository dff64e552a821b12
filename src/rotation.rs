//! Rotation controller for slideshows and carousels.
//!
//! One controller drives one rotating display: the hero slideshow and the
//! testimonial carousel are two instances of the same type with different
//! item sequences and intervals. The controller owns which single item is
//! active and moves that position forward on a timer tick or on demand; it
//! never touches presentation — the active flags are the whole contract.
//!
//! ## Invariant
//!
//! Exactly one item is active at all times. The sequence is fixed at
//! construction; items are never added or removed afterwards.
//!
//! ## Timer ownership
//!
//! `start` schedules a repeating timer on the page [`Timeline`] and the
//! controller becomes the sole owner of the handle. `stop` and `destroy`
//! release it. Because the host loop may have drained a tick before the
//! controller was stopped, `handle_tick` re-checks ownership and the running
//! flag on entry — a just-cancelled controller must not advance once more.

use crate::timer::{Tick, TimerHandle, Timeline};
use std::time::Duration;
use thiserror::Error;

/// Construction-time configuration errors. The documented policy is to
/// degrade: callers skip wiring the rotation feature, the page never crashes
/// over a decorative element.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidConfig {
    #[error("rotation needs at least one item")]
    EmptyItems,
    #[error("rotation interval must be non-zero")]
    ZeroInterval,
}

/// One entry in a rotating display sequence.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    label: String,
    active: bool,
}

impl DisplayItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            active: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Cycles through a fixed item sequence on a timer or on demand.
#[derive(Debug)]
pub struct RotationController {
    items: Vec<DisplayItem>,
    current: usize,
    running: bool,
    interval: Duration,
    timer: Option<TimerHandle>,
    destroyed: bool,
}

impl RotationController {
    /// Item 0 starts active; the controller starts paused.
    pub fn new(items: Vec<DisplayItem>, interval: Duration) -> Result<Self, InvalidConfig> {
        if items.is_empty() {
            return Err(InvalidConfig::EmptyItems);
        }
        if interval.is_zero() {
            return Err(InvalidConfig::ZeroInterval);
        }
        let mut items = items;
        for item in &mut items {
            item.active = false;
        }
        items[0].active = true;
        Ok(Self {
            items,
            current: 0,
            running: false,
            interval,
            timer: None,
            destroyed: false,
        })
    }

    /// Begin automatic advancement. Idempotent; a no-op after `destroy`.
    pub fn start(&mut self, timeline: &mut Timeline) {
        if self.running || self.destroyed {
            return;
        }
        self.timer = Some(timeline.schedule_repeating(self.interval));
        self.running = true;
    }

    /// Pause automatic advancement and release the timer. Idempotent.
    pub fn stop(&mut self, timeline: &mut Timeline) {
        if let Some(handle) = self.timer.take() {
            timeline.cancel(handle);
        }
        self.running = false;
    }

    /// Release the timer permanently. After this, `start` is a no-op and no
    /// tick — including one already drained from the timeline — advances the
    /// rotation.
    pub fn destroy(&mut self, timeline: &mut Timeline) {
        self.stop(timeline);
        self.destroyed = true;
    }

    /// Move the active position forward one step, wrapping at the end.
    /// A single-item rotation stays at index 0.
    pub fn advance(&mut self) {
        let next = (self.current + 1) % self.items.len();
        self.activate(next);
    }

    /// Jump to an index directly (dot navigation). Out-of-range indices wrap
    /// circularly, matching `advance`: negative lands on the last item,
    /// past-the-end lands on the first.
    pub fn jump_to(&mut self, index: isize) {
        let len = self.items.len() as isize;
        let target = if index < 0 {
            len - 1
        } else if index >= len {
            0
        } else {
            index
        };
        self.activate(target as usize);
    }

    /// Callback entry from the host loop. Advances only when the tick belongs
    /// to this controller's live timer and the controller is still running;
    /// returns whether an advance happened.
    pub fn handle_tick(&mut self, tick: Tick) -> bool {
        if self.destroyed || !self.running {
            return false;
        }
        if self.timer != Some(tick.handle) {
            return false;
        }
        self.advance();
        true
    }

    fn activate(&mut self, index: usize) {
        self.items[self.current].active = false;
        self.items[index].active = true;
        self.current = index;
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn active_item(&self) -> &DisplayItem {
        &self.items[self.current]
    }
}
