//! The scroll controller.
//!
//! Drives the document viewport: programmatic scrolls animate toward a
//! target row, manual scrolls move instantly. Starting a new programmatic
//! scroll replaces any in-flight one (stop before start), and while one
//! is in flight the app suppresses scroll-driven activation entirely.

use std::time::Duration;

use onepage_core::{EasingType, ScrollConfig};

use super::tween::Tween;

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    tween: Option<Tween>,
    current: u16,
    /// A programmatic scroll landed since the last `take_completed`
    completed: bool,
    duration: Duration,
    easing: EasingType,
    smooth: bool,
}

impl ScrollAnimator {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            tween: None,
            current: 0,
            completed: false,
            duration: config.duration(),
            easing: config.easing,
            smooth: config.is_smooth(),
        }
    }

    #[inline]
    pub fn current(&self) -> u16 {
        self.current
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Final position once any in-flight animation lands.
    pub fn target(&self) -> u16 {
        self.tween.as_ref().map(Tween::target).unwrap_or(self.current)
    }

    /// Jump to a position, cancelling any animation.
    pub fn set(&mut self, pos: u16) {
        self.tween = None;
        self.current = pos;
    }

    /// Cancel any in-flight animation, holding the current position.
    pub fn stop(&mut self) {
        if let Some(tween) = self.tween.take() {
            self.current = tween.sample();
        }
    }

    /// Programmatic scroll to a target row. Cancels the in-flight
    /// animation first; without smooth scrolling the move is instant and
    /// counts as completed immediately.
    pub fn scroll_to(&mut self, target: u16, max: u16) {
        let target = target.min(max);
        self.stop();

        if !self.smooth || target == self.current {
            self.current = target;
            self.completed = true;
            return;
        }
        self.tween = Some(Tween::new(self.current, target, self.duration, self.easing));
    }

    /// Manual scroll by a delta. Never animates: user scrolling should
    /// track the input directly and keep driving viewport detection.
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        self.stop();
        self.current = (self.current as i32 + delta).clamp(0, max as i32) as u16;
    }

    /// Advance the animation; call once per frame. Returns the current
    /// position, clamped to `max`.
    pub fn update(&mut self, max: u16) -> u16 {
        if let Some(tween) = &self.tween {
            if tween.is_finished() {
                self.current = tween.target().min(max);
                self.tween = None;
                self.completed = true;
            } else {
                self.current = tween.sample().min(max);
            }
        } else {
            self.current = self.current.min(max);
        }
        self.current
    }

    /// Whether a programmatic scroll has landed since the last call.
    /// The app uses this to re-run the activation path, the equivalent of
    /// a scroll completion callback.
    pub fn take_completed(&mut self) -> bool {
        std::mem::take(&mut self.completed)
    }
}
