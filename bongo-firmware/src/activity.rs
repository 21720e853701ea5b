//! The "last activity" timestamp that drives the animation.
//!
//! Key events and the display refresh run from different host callbacks, so the timestamp lives
//! behind a critical section mutex.

use core::cell::Cell;

use embassy_sync::blocking_mutex::CriticalSectionMutex;
use embassy_time::Instant;

/// What resets the activity timer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActivitySource {
    /// Every key press.
    #[default]
    KeyPress,
    /// A rise in the host's words-per-minute estimate.
    TypingSpeed,
}

#[derive(Copy, Clone)]
struct Activity {
    last: Instant,
    prev_wpm: u8,
}

pub struct ActivityTimer {
    source: ActivitySource,
    state: CriticalSectionMutex<Cell<Activity>>,
}

impl ActivityTimer {
    pub const fn new(source: ActivitySource) -> Self {
        Self {
            source,
            state: CriticalSectionMutex::new(Cell::new(Activity {
                last: Instant::from_ticks(0),
                prev_wpm: 0,
            })),
        }
    }

    pub fn source(&self) -> ActivitySource {
        self.source
    }

    /// Call on every key press. Ignored unless the source is [ActivitySource::KeyPress].
    pub fn record_press(&self, now: Instant) {
        if self.source == ActivitySource::KeyPress {
            self.update(|a| a.last = now);
        }
    }

    /// Call with the host's current typing speed. Ignored unless the source is
    /// [ActivitySource::TypingSpeed].
    pub fn observe_typing_speed(&self, wpm: u8, now: Instant) {
        if self.source == ActivitySource::TypingSpeed {
            self.update(|a| {
                if wpm > a.prev_wpm {
                    a.last = now;
                }
                a.prev_wpm = wpm;
            });
        }
    }

    pub fn last_activity(&self) -> Instant {
        self.state.lock(|s| s.get().last)
    }

    /// Milliseconds since the last activity.
    pub fn since(&self, now: Instant) -> u32 {
        millis_between(self.last_activity(), now)
    }

    fn update(&self, f: impl FnOnce(&mut Activity)) {
        self.state.lock(|s| {
            let mut a = s.get();
            f(&mut a);
            s.set(a);
        });
    }
}

impl Default for ActivityTimer {
    fn default() -> Self {
        Self::new(ActivitySource::default())
    }
}

/// Saturating milliseconds from `then` to `now`; zero if `now` is earlier.
pub(crate) fn millis_between(then: Instant, now: Instant) -> u32 {
    now.checked_duration_since(then)
        .map(|d| d.as_millis().min(u32::MAX as u64) as u32)
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "activity_test.rs"]
mod test;
