//! Intro name-card animation state

use std::time::{Duration, Instant};

/// Animation phase for the intro card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    /// Static name card
    Hold,
    /// Card sliding off the top
    Rise,
    /// Animation finished
    Done,
}

/// Intro animation state
#[derive(Debug)]
pub struct IntroState {
    start_time: Instant,
    pub phase: IntroPhase,
    /// Current upward offset in rows
    pub offset: f32,
}

impl IntroState {
    /// Hold duration before the card starts moving
    const HOLD_DURATION: Duration = Duration::from_millis(900);
    /// Duration of the rise animation
    const RISE_DURATION: Duration = Duration::from_millis(600);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: IntroPhase::Hold,
            offset: 0.0,
        }
    }

    /// Advance the animation based on elapsed time. A skipped intro stays
    /// done; time never rewinds it.
    pub fn update(&mut self, terminal_height: u16) {
        if self.phase == IntroPhase::Done {
            return;
        }
        let elapsed = self.start_time.elapsed();

        if elapsed < Self::HOLD_DURATION {
            self.phase = IntroPhase::Hold;
            self.offset = 0.0;
        } else if elapsed < Self::HOLD_DURATION + Self::RISE_DURATION {
            self.phase = IntroPhase::Rise;
            let rise_elapsed = elapsed - Self::HOLD_DURATION;
            let progress = rise_elapsed.as_secs_f32() / Self::RISE_DURATION.as_secs_f32();
            let eased = simple_easing::cubic_out(progress);
            self.offset = eased * f32::from(terminal_height);
        } else {
            self.phase = IntroPhase::Done;
        }
    }

    /// Skip straight to the end (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = IntroPhase::Done;
    }

    pub fn is_done(&self) -> bool {
        self.phase == IntroPhase::Done
    }
}

impl Default for IntroState {
    fn default() -> Self {
        Self::new()
    }
}
