//! The indicator animator.
//!
//! One visual marker per menu, created lazily on first activation and
//! mutated in place afterwards. Moves re-tag the marker from the active
//! section and tween its row; a move issued mid-flight cancels the
//! previous one (last call wins). Without a configured duration every
//! move is instantaneous.

use std::time::Duration;

use onepage_core::{EasingType, IndicatorConfig};

use crate::scroll::Tween;

#[derive(Debug, Clone)]
pub struct Indicator {
    row: u16,
    /// Tag derived from the active section's id
    tag: String,
    tween: Option<Tween>,
    duration: Option<Duration>,
    easing: EasingType,
    glyph: String,
}

impl Indicator {
    /// First activation: place the marker directly, no animation.
    pub fn materialize(config: &IndicatorConfig, row: u16, section_id: &str) -> Self {
        Self {
            row,
            tag: section_id.to_string(),
            tween: None,
            duration: config.duration(),
            easing: config.easing,
            glyph: config.glyph.clone(),
        }
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Re-tag and move toward the given item row.
    pub fn move_to(&mut self, row: u16, section_id: &str, animate: bool) {
        self.tag = section_id.to_string();

        // stop before start: hold the interpolated position, then retarget
        if let Some(tween) = self.tween.take() {
            self.row = tween.sample();
        }

        match self.duration {
            Some(duration) if animate && row != self.row => {
                self.tween = Some(Tween::new(self.row, row, duration, self.easing));
            }
            _ => self.row = row,
        }
    }

    /// Advance the animation; call once per frame.
    pub fn update(&mut self) -> u16 {
        if let Some(tween) = &self.tween {
            if tween.is_finished() {
                self.row = tween.target();
                self.tween = None;
            } else {
                self.row = tween.sample();
            }
        }
        self.row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animated() -> IndicatorConfig {
        IndicatorConfig {
            duration_ms: Some(100),
            ..Default::default()
        }
    }

    #[test]
    fn test_materialize_places_without_animation() {
        let ind = Indicator::materialize(&animated(), 3, "works");
        assert_eq!(ind.row(), 3);
        assert_eq!(ind.tag(), "works");
        assert!(!ind.is_animating());
    }

    #[test]
    fn test_no_duration_means_instant_move() {
        let mut ind = Indicator::materialize(&IndicatorConfig::default(), 0, "hello");
        ind.move_to(4, "contact", true);
        assert_eq!(ind.row(), 4);
        assert!(!ind.is_animating());
    }

    #[test]
    fn test_animated_move_retags_immediately() {
        let mut ind = Indicator::materialize(&animated(), 0, "hello");
        ind.move_to(4, "contact", true);
        assert_eq!(ind.tag(), "contact");
        assert!(ind.is_animating());
        // row only settles once the tween lands
        assert_eq!(ind.row(), 0);
    }

    #[test]
    fn test_move_without_animate_flag_jumps() {
        let mut ind = Indicator::materialize(&animated(), 0, "hello");
        ind.move_to(4, "contact", false);
        assert_eq!(ind.row(), 4);
        assert!(!ind.is_animating());
    }

    #[test]
    fn test_mid_flight_move_cancels_previous() {
        let mut ind = Indicator::materialize(&animated(), 0, "hello");
        ind.move_to(4, "works", true);
        ind.move_to(1, "hello", true);
        assert!(ind.is_animating());
        assert_eq!(ind.tag(), "hello");
        // a fresh tween starts from the held position, not the old target
        assert_eq!(ind.update(), 0);
    }

    #[test]
    fn test_move_to_same_row_is_instant() {
        let mut ind = Indicator::materialize(&animated(), 2, "works");
        ind.move_to(2, "works-2", true);
        assert!(!ind.is_animating());
        assert_eq!(ind.tag(), "works-2");
    }
}
