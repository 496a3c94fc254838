//! Time-driven flash message dismissal.
//!
//! Every flash lives through the same schedule from the instant it is
//! pushed: fully visible for five seconds, a 300 ms slide-and-fade, then
//! removal. There is no cancellation and no interaction; `tick` just moves
//! the queue forward with whatever clock the caller supplies.

use std::time::{Duration, Instant};

use tracing::debug;

pub const FLASH_VISIBLE: Duration = Duration::from_millis(5000);
pub const FLASH_FADE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashSeverity {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Flash {
    pub text: String,
    pub severity: FlashSeverity,
    shown_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlashPhase {
    Visible,
    /// Fade progress in `[0, 1]`.
    Fading(f32),
    Expired,
}

impl Flash {
    pub fn phase(&self, now: Instant) -> FlashPhase {
        let elapsed = now.saturating_duration_since(self.shown_at);
        if elapsed < FLASH_VISIBLE {
            FlashPhase::Visible
        } else if elapsed < FLASH_VISIBLE + FLASH_FADE {
            let fading = elapsed - FLASH_VISIBLE;
            FlashPhase::Fading(fading.as_secs_f32() / FLASH_FADE.as_secs_f32())
        } else {
            FlashPhase::Expired
        }
    }
}

#[derive(Default)]
pub struct FlashQueue {
    flashes: Vec<Flash>,
}

impl FlashQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, severity: FlashSeverity, now: Instant) {
        let text = text.into();
        debug!(%text, "flash scheduled");
        self.flashes.push(Flash {
            text,
            severity,
            shown_at: now,
        });
    }

    /// Drops expired flashes. Call once per frame before rendering.
    pub fn tick(&mut self, now: Instant) {
        self.flashes
            .retain(|flash| flash.phase(now) != FlashPhase::Expired);
    }

    /// Flashes still on screen, paired with their fade progress (0.0 while
    /// fully visible).
    pub fn visible(&self, now: Instant) -> Vec<(&Flash, f32)> {
        self.flashes
            .iter()
            .filter_map(|flash| match flash.phase(now) {
                FlashPhase::Visible => Some((flash, 0.0)),
                FlashPhase::Fading(progress) => Some((flash, progress)),
                FlashPhase::Expired => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.flashes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_runs_through_its_schedule() {
        let t0 = Instant::now();
        let mut queue = FlashQueue::new();
        queue.push("Student added successfully!", FlashSeverity::Success, t0);

        assert_eq!(queue.visible(t0).len(), 1);
        assert_eq!(queue.visible(t0)[0].1, 0.0);

        let mid = t0 + Duration::from_millis(4999);
        assert_eq!(queue.visible(mid)[0].1, 0.0);

        let fading = t0 + Duration::from_millis(5150);
        let (_, progress) = queue.visible(fading)[0];
        assert!(progress > 0.0 && progress < 1.0);

        let gone = t0 + Duration::from_millis(5301);
        assert!(queue.visible(gone).is_empty());
        queue.tick(gone);
        assert!(queue.is_empty());
    }

    #[test]
    fn tick_keeps_live_flashes() {
        let t0 = Instant::now();
        let mut queue = FlashQueue::new();
        queue.push("Student deleted successfully!", FlashSeverity::Success, t0);
        queue.tick(t0 + Duration::from_millis(1000));
        assert!(!queue.is_empty());
    }

    #[test]
    fn flashes_expire_independently() {
        let t0 = Instant::now();
        let mut queue = FlashQueue::new();
        queue.push("first", FlashSeverity::Error, t0);
        queue.push("second", FlashSeverity::Success, t0 + Duration::from_millis(3000));

        let later = t0 + Duration::from_millis(5400);
        queue.tick(later);
        let visible = queue.visible(later);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0.text, "second");
    }

    #[test]
    fn phase_is_monotonic_over_the_lifetime() {
        let t0 = Instant::now();
        let flash = {
            let mut queue = FlashQueue::new();
            queue.push("x", FlashSeverity::Success, t0);
            queue.flashes.remove(0)
        };
        assert_eq!(flash.phase(t0), FlashPhase::Visible);
        assert!(matches!(
            flash.phase(t0 + Duration::from_millis(5100)),
            FlashPhase::Fading(_)
        ));
        assert_eq!(
            flash.phase(t0 + Duration::from_millis(6000)),
            FlashPhase::Expired
        );
    }
}
