//! Time driven bongocat animation.
//!
//! The state is derived from the time since the last key activity on every call:
//!
//! | time since activity         | state | drawn                     |
//! |-----------------------------|-------|---------------------------|
//! | `< 2 * frame_duration`      | Tap   | base + next tap frame     |
//! | `< 8 * frame_duration`      | Prep  | base + prep frame         |
//! | `<= idle_timeout`           | Idle  | base + next idle frame    |
//! | `> idle_timeout`            | Off   | display switched off      |
//!
//! Frames are only drawn when more than `frame_duration` has passed since the previous frame.
//! The tap and idle frame counters run freely; they are not reset when the state changes.

use bongo_common::globals::{
    FRAME_DURATION, OLED_TIMEOUT, PREP_WINDOW_FRAMES, TAP_WINDOW_FRAMES,
};
use embassy_time::Instant;

use crate::{
    activity::{millis_between, ActivityTimer},
    bongocat::{CatFrames, Orientation},
    oled::OledSurface,
    render::render_composite,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationState {
    Tap,
    Prep,
    Idle,
    Off,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationConfig {
    pub frame_duration_ms: u32,
    pub idle_timeout_ms: u32,
    /// Tap state lasts this many frame durations after activity.
    pub tap_window_frames: u32,
    /// Prep state ends this many frame durations after activity.
    pub prep_window_frames: u32,
}

impl AnimationConfig {
    pub const fn new() -> Self {
        Self {
            frame_duration_ms: FRAME_DURATION,
            idle_timeout_ms: OLED_TIMEOUT,
            tap_window_frames: TAP_WINDOW_FRAMES,
            prep_window_frames: PREP_WINDOW_FRAMES,
        }
    }

    pub const fn with_idle_timeout(mut self, idle_timeout_ms: u32) -> Self {
        self.idle_timeout_ms = idle_timeout_ms;
        self
    }

    pub const fn with_frame_duration(mut self, frame_duration_ms: u32) -> Self {
        self.frame_duration_ms = frame_duration_ms;
        self
    }

    pub const fn state_for(&self, since_activity_ms: u32) -> AnimationState {
        let frame = self.frame_duration_ms as u64;
        let t = since_activity_ms as u64;
        if t < frame * self.tap_window_frames as u64 {
            AnimationState::Tap
        } else if t < frame * self.prep_window_frames as u64 {
            AnimationState::Prep
        } else if t <= self.idle_timeout_ms as u64 {
            AnimationState::Idle
        } else {
            AnimationState::Off
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The outcome of one [Animator::tick].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Too soon after the previous frame; nothing written.
    Skipped,
    /// Inactive for longer than the idle timeout; display is off.
    Off,
    Rendered { state: AnimationState, frame: usize },
}

pub struct Animator {
    frames: &'static CatFrames,
    config: AnimationConfig,
    tap_frame: usize,
    idle_frame: usize,
}

impl Animator {
    pub fn new(orientation: Orientation, config: AnimationConfig) -> Self {
        Self::with_frames(CatFrames::for_orientation(orientation), config)
    }

    pub fn with_frames(frames: &'static CatFrames, config: AnimationConfig) -> Self {
        Self {
            frames,
            config,
            tap_frame: 0,
            idle_frame: 0,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn frames(&self) -> &'static CatFrames {
        self.frames
    }

    /// The diff frame index last drawn for `state`.
    pub fn frame_index(&self, state: AnimationState) -> usize {
        match state {
            AnimationState::Tap => self.tap_frame,
            AnimationState::Idle => self.idle_frame,
            AnimationState::Prep | AnimationState::Off => 0,
        }
    }

    pub fn tick(
        &mut self,
        surface: &mut impl OledSurface,
        since_activity_ms: u32,
        since_frame_ms: u32,
    ) -> Tick {
        let state = self.config.state_for(since_activity_ms);
        if state == AnimationState::Off {
            if surface.is_on() {
                crate::debug!("oled off after {}ms idle", since_activity_ms);
                surface.off();
            }
            return Tick::Off;
        }

        if since_frame_ms <= self.config.frame_duration_ms {
            return Tick::Skipped;
        }

        if !surface.is_on() {
            surface.on();
        }
        surface.clear();

        let frames = self.frames;
        let (diffs, frame) = match state {
            AnimationState::Tap => {
                self.tap_frame = next_frame(self.tap_frame, frames.tap.len());
                (&frames.tap[..], self.tap_frame)
            }
            AnimationState::Idle => {
                self.idle_frame = next_frame(self.idle_frame, frames.idle.len());
                (&frames.idle[..], self.idle_frame)
            }
            _ => (&frames.prep[..], 0),
        };
        render_composite(surface, frames.base, diffs[frame], frames.width);

        Tick::Rendered { state, frame }
    }
}

fn next_frame(current: usize, count: usize) -> usize {
    if current + 1 < count {
        current + 1
    } else {
        0
    }
}

/// Owns the animator and the time the last frame was drawn.
pub struct BongoCat {
    animator: Animator,
    last_frame: Instant,
}

impl BongoCat {
    pub fn new(orientation: Orientation, config: AnimationConfig) -> Self {
        Self {
            animator: Animator::new(orientation, config),
            last_frame: Instant::from_ticks(0),
        }
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Call from the host's display refresh callback.
    pub fn refresh(
        &mut self,
        surface: &mut impl OledSurface,
        activity: &ActivityTimer,
        now: Instant,
    ) -> Tick {
        let tick = self.animator.tick(
            surface,
            activity.since(now),
            millis_between(self.last_frame, now),
        );
        if let Tick::Rendered { .. } = tick {
            self.last_frame = now;
        }
        tick
    }

    /// [Self::refresh] using the current time.
    pub fn refresh_now(&mut self, surface: &mut impl OledSurface, activity: &ActivityTimer) -> Tick {
        self.refresh(surface, activity, Instant::now())
    }
}

#[cfg(test)]
#[path = "animation_test.rs"]
mod test;
