//! One-shot card entry animation.
//!
//! Cards start hidden (transparent, offset down) and reveal the first time
//! at least 10% of their area is inside the viewport. Scrolling a revealed
//! card back out never resets it.

use std::collections::HashMap;
use std::time::{Duration, Instant};

pub const REVEAL_THRESHOLD: f32 = 0.10;
pub const REVEAL_DURATION: Duration = Duration::from_millis(500);
/// Vertical offset, in points, of a card that has not revealed yet.
pub const HIDDEN_OFFSET: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(pub u64);

#[derive(Default)]
pub struct RevealTracker {
    revealed: HashMap<CardId, Instant>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports the card's currently visible area fraction. The first report
    /// at or above the threshold starts the card's reveal.
    pub fn observe(&mut self, card: CardId, visible_fraction: f32, now: Instant) {
        if visible_fraction >= REVEAL_THRESHOLD {
            self.revealed.entry(card).or_insert(now);
        }
    }

    pub fn is_revealed(&self, card: CardId) -> bool {
        self.revealed.contains_key(&card)
    }

    /// Animation progress in `[0, 1]`: 0 until revealed, easing to 1 over
    /// the reveal duration.
    pub fn progress(&self, card: CardId, now: Instant) -> f32 {
        let Some(started) = self.revealed.get(&card) else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(*started);
        let linear =
            (elapsed.as_secs_f32() / REVEAL_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        eased(linear)
    }

    /// True while any card is mid-animation; drives the repaint cadence.
    pub fn any_animating(&self, now: Instant) -> bool {
        self.revealed
            .values()
            .any(|started| now.saturating_duration_since(*started) < REVEAL_DURATION)
    }
}

fn eased(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_stays_hidden() {
        let mut tracker = RevealTracker::new();
        let now = Instant::now();
        tracker.observe(CardId(1), 0.05, now);
        assert!(!tracker.is_revealed(CardId(1)));
        assert_eq!(tracker.progress(CardId(1), now), 0.0);
    }

    #[test]
    fn threshold_triggers_reveal() {
        let mut tracker = RevealTracker::new();
        let now = Instant::now();
        tracker.observe(CardId(1), 0.10, now);
        assert!(tracker.is_revealed(CardId(1)));
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut tracker = RevealTracker::new();
        let t0 = Instant::now();
        tracker.observe(CardId(1), 0.5, t0);
        // Scrolled out, then back in much later: the original instant holds.
        tracker.observe(CardId(1), 0.0, t0 + Duration::from_secs(2));
        tracker.observe(CardId(1), 0.9, t0 + Duration::from_secs(3));
        let done = t0 + REVEAL_DURATION;
        assert_eq!(tracker.progress(CardId(1), done), 1.0);
    }

    #[test]
    fn progress_eases_from_zero_to_one() {
        let mut tracker = RevealTracker::new();
        let t0 = Instant::now();
        tracker.observe(CardId(1), 1.0, t0);
        assert_eq!(tracker.progress(CardId(1), t0), 0.0);
        let halfway = tracker.progress(CardId(1), t0 + Duration::from_millis(250));
        assert!(halfway > 0.0 && halfway < 1.0);
        assert_eq!(
            tracker.progress(CardId(1), t0 + Duration::from_secs(5)),
            1.0
        );
    }

    #[test]
    fn animating_flag_clears_after_the_animation() {
        let mut tracker = RevealTracker::new();
        let t0 = Instant::now();
        tracker.observe(CardId(1), 1.0, t0);
        assert!(tracker.any_animating(t0 + Duration::from_millis(100)));
        assert!(!tracker.any_animating(t0 + Duration::from_millis(600)));
    }

    #[test]
    fn cards_reveal_independently() {
        let mut tracker = RevealTracker::new();
        let t0 = Instant::now();
        tracker.observe(CardId(1), 1.0, t0);
        tracker.observe(CardId(2), 0.02, t0);
        assert!(tracker.is_revealed(CardId(1)));
        assert!(!tracker.is_revealed(CardId(2)));
    }
}
