//! Deterministic repeating-timer timeline.
//!
//! The host environment contract for rotation: `schedule_repeating` hands out
//! an opaque handle, `cancel` revokes it, and `advance` moves virtual time
//! forward, returning every tick that came due in chronological order. Nothing
//! here spawns threads or reads wall clocks — the caller (a page event loop,
//! a CLI demo, a test) decides when time passes, which is what makes rotation
//! behavior reproducible.
//!
//! ## Ordering
//!
//! Ticks within one `advance` call are delivered oldest-first. Two timers due
//! at the same instant fire in the order they were scheduled. A single timer
//! whose interval fits several times into one `advance` fires once per
//! elapsed interval.
//!
//! ## Cancellation
//!
//! `cancel` is synchronously effective for everything the timeline has not
//! yet emitted. Ticks already drained out of `advance` are values in the
//! caller's hands; consumers re-check handle liveness on receipt (see
//! `RotationController::handle_tick`), so a cancelled timer never causes a
//! late advance either way.

use std::time::Duration;

/// Opaque identifier for a scheduled repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(u64);

/// One due firing of a repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub handle: TimerHandle,
}

#[derive(Debug)]
struct Entry {
    handle: TimerHandle,
    interval: Duration,
    next_due: Duration,
}

/// Manually driven timer queue. One timeline per page; every controller on
/// the page schedules into it and receives its ticks back from the host loop.
#[derive(Debug, Default)]
pub struct Timeline {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time (total of all `advance` calls).
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of live (uncancelled) timers.
    pub fn scheduled_count(&self) -> usize {
        self.entries.len()
    }

    /// Schedule a repeating timer. The first tick is due one full `interval`
    /// from now. A zero interval never fires — the scheduling caller
    /// validates its interval (rotation rejects zero at construction), and a
    /// decorative timer must degrade rather than spin.
    pub fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            interval,
            next_due: self.now + interval,
        });
        handle
    }

    /// Revoke a handle. Unknown or already-cancelled handles are ignored.
    pub fn cancel(&mut self, handle: TimerHandle) {
        self.entries.retain(|e| e.handle != handle);
    }

    /// Move virtual time forward by `elapsed` and return every tick that came
    /// due, oldest first.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Tick> {
        let target = self.now + elapsed;
        let mut fired = Vec::new();

        loop {
            // Earliest due entry wins; ties go to the earliest-scheduled
            // (entries are kept in scheduling order).
            let mut earliest: Option<usize> = None;
            for (i, entry) in self.entries.iter().enumerate() {
                if entry.interval.is_zero() || entry.next_due > target {
                    continue;
                }
                match earliest {
                    Some(e) if self.entries[e].next_due <= entry.next_due => {}
                    _ => earliest = Some(i),
                }
            }
            let Some(i) = earliest else { break };
            let entry = &mut self.entries[i];
            fired.push(Tick {
                handle: entry.handle,
            });
            entry.next_due += entry.interval;
        }

        self.now = target;
        fired
    }
}
