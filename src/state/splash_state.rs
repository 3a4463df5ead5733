//! Splash screen animation state

use std::time::{Duration, Instant};

/// Animation phase for splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Static logo display
    Display,
    /// Logo animating upward
    ScrollUp,
    /// Animation finished
    Complete,
}

/// Splash screen animation state
#[derive(Debug)]
pub struct SplashState {
    /// When the splash started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: SplashPhase,
    /// Current vertical offset (for scroll animation)
    pub scroll_offset: f32,
}

impl SplashState {
    /// Display duration before animation starts
    const DISPLAY_DURATION: Duration = Duration::from_millis(1100);
    /// Duration of scroll-up animation
    const ANIMATION_DURATION: Duration = Duration::from_millis(700);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: SplashPhase::Display,
            scroll_offset: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self, terminal_height: u16) {
        let elapsed = self.start_time.elapsed();

        if elapsed < Self::DISPLAY_DURATION {
            self.phase = SplashPhase::Display;
            self.scroll_offset = 0.0;
        } else if elapsed < Self::DISPLAY_DURATION + Self::ANIMATION_DURATION {
            self.phase = SplashPhase::ScrollUp;
            let animation_elapsed = elapsed - Self::DISPLAY_DURATION;
            let progress = animation_elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
            // Cubic ease-out for smooth deceleration
            let eased = simple_easing::cubic_out(progress);
            self.scroll_offset = eased * f32::from(terminal_height);
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    /// Check if animation is complete
    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_in_display_phase() {
        let state = SplashState::new();
        assert_eq!(state.phase, SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
    }

    #[test]
    fn test_skip_completes_immediately() {
        let mut state = SplashState::new();
        state.skip();
        assert!(state.is_complete());
    }

    #[test]
    fn test_update_during_display_keeps_offset_zero() {
        let mut state = SplashState::new();
        state.update(40);
        assert_eq!(state.phase, SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
    }

    #[test]
    fn test_update_after_total_duration_completes() {
        let mut state = SplashState::new();
        state.start_time = Instant::now() - Duration::from_secs(5);
        state.update(40);
        assert!(state.is_complete());
    }
}
