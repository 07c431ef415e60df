//! Walk-cycle animation clock.
//!
//! The host calls [`AnimationClock::tick`] on its own timer. The clock only
//! counts ticks: the phase advances once per tick and a single countdown,
//! re-armed by every [`AnimationClock::start`], returns it to idle.

use serde::{Deserialize, Serialize};
use terrawalk_common::{TerrawalkError, TerrawalkResult};

/// Animation timing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Frames in one walk cycle
    pub frame_count: u8,
    /// Host tick interval in milliseconds
    pub tick_interval_ms: u32,
    /// How long a walk animation runs after the last accepted move
    pub duration_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_count: 8,
            tick_interval_ms: 100,
            duration_ms: 800,
        }
    }
}

impl AnimationConfig {
    /// Checks that the cycle and interval are non-empty.
    pub fn validate(&self) -> TerrawalkResult<()> {
        if self.frame_count == 0 {
            return Err(TerrawalkError::invalid_parameter(
                "frame_count",
                "must be positive",
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(TerrawalkError::invalid_parameter(
                "tick_interval_ms",
                "must be positive",
            ));
        }
        Ok(())
    }

    /// Ticks until auto-stop: `ceil(duration / interval)`, at least one.
    #[must_use]
    pub fn duration_ticks(&self) -> u32 {
        self.duration_ms
            .div_ceil(self.tick_interval_ms.max(1))
            .max(1)
    }
}

/// Result of one host tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseAdvanced {
    /// Phase after the tick
    pub phase: u8,
    /// Whether the host should keep ticking
    pub still_animating: bool,
}

/// Phase counter plus the single pending auto-stop countdown.
///
/// Only [`AnimationClock::new`] builds one, so the frame count is never zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimationClock {
    /// Timing configuration
    config: AnimationConfig,
    /// Current frame, `0..frame_count`
    phase: u8,
    /// Ticks left before auto-stop; `Some` iff animating
    ticks_remaining: Option<u32>,
}

impl AnimationClock {
    /// Creates an idle clock.
    pub fn new(config: AnimationConfig) -> TerrawalkResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            phase: 0,
            ticks_remaining: None,
        })
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> u8 {
        self.phase
    }

    /// Whether a walk cycle is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.ticks_remaining.is_some()
    }

    /// Ticks left before auto-stop, if animating.
    #[must_use]
    pub const fn ticks_remaining(&self) -> Option<u32> {
        self.ticks_remaining
    }

    /// Timing configuration.
    #[must_use]
    pub const fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Starts the cycle from phase 0 if idle, then re-arms the countdown.
    ///
    /// A running cycle keeps its phase; only the stop deadline moves.
    pub fn start(&mut self) {
        if !self.is_animating() {
            self.phase = 0;
        }
        self.ticks_remaining = Some(self.config.duration_ticks());
    }

    /// Forces idle at phase 0 and drops the countdown.
    pub fn stop(&mut self) {
        self.phase = 0;
        self.ticks_remaining = None;
    }

    /// Advances one phase step. Idle clocks do not move.
    pub fn tick(&mut self) -> PhaseAdvanced {
        let Some(remaining) = self.ticks_remaining else {
            return PhaseAdvanced {
                phase: self.phase,
                still_animating: false,
            };
        };

        self.phase = (self.phase + 1) % self.config.frame_count;
        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            self.stop();
        } else {
            self.ticks_remaining = Some(remaining);
        }

        PhaseAdvanced {
            phase: self.phase,
            still_animating: self.is_animating(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(duration_ms: u32) -> AnimationClock {
        AnimationClock::new(AnimationConfig {
            duration_ms,
            ..Default::default()
        })
        .expect("valid config")
    }

    #[test]
    fn test_default_duration_is_one_cycle() {
        assert_eq!(AnimationConfig::default().duration_ticks(), 8);
    }

    #[test]
    fn test_duration_rounds_up() {
        let config = AnimationConfig {
            tick_interval_ms: 150,
            duration_ms: 800,
            ..Default::default()
        };
        assert_eq!(config.duration_ticks(), 6);
        let instant = AnimationConfig {
            duration_ms: 0,
            ..Default::default()
        };
        assert_eq!(instant.duration_ticks(), 1);
    }

    #[test]
    fn test_invalid_config() {
        let zero_frames = AnimationConfig {
            frame_count: 0,
            ..Default::default()
        };
        assert!(AnimationClock::new(zero_frames).is_err());
        let zero_interval = AnimationConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert!(AnimationClock::new(zero_interval).is_err());
    }

    #[test]
    fn test_full_cycle_then_idle() {
        let mut clock = clock(800);
        clock.start();
        assert!(clock.is_animating());
        assert_eq!(clock.phase(), 0);

        for expected in 1..8 {
            let advanced = clock.tick();
            assert_eq!(advanced.phase, expected);
            assert!(advanced.still_animating);
        }
        let last = clock.tick();
        assert_eq!(last.phase, 0);
        assert!(!last.still_animating);

        let after = clock.tick();
        assert_eq!(after.phase, 0);
        assert!(!after.still_animating);
    }

    #[test]
    fn test_phase_wraps_while_still_animating() {
        let mut clock = clock(1200);
        clock.start();
        for _ in 0..8 {
            clock.tick();
        }
        assert_eq!(clock.phase(), 0);
        assert!(clock.is_animating());
        for _ in 0..4 {
            clock.tick();
        }
        assert!(!clock.is_animating());
        assert_eq!(clock.phase(), 0);
    }

    #[test]
    fn test_restart_rearms_without_resetting_phase() {
        let mut clock = clock(800);
        clock.start();
        for _ in 0..5 {
            clock.tick();
        }
        assert_eq!(clock.ticks_remaining(), Some(3));

        clock.start();
        assert_eq!(clock.phase(), 5);
        assert_eq!(clock.ticks_remaining(), Some(8));
    }

    #[test]
    fn test_stop_forces_idle() {
        let mut clock = clock(800);
        clock.start();
        clock.tick();
        clock.stop();
        assert!(!clock.is_animating());
        assert_eq!(clock.phase(), 0);
        assert_eq!(clock.ticks_remaining(), None);
    }
}
