//! Grid agent movement and facing.
//!
//! An [`Agent`] moves one cell per accepted request. A move is accepted only
//! when the target cell is inside the map and walkable; a rejected move
//! leaves the agent untouched and does not start the walk animation.

use serde::{Deserialize, Serialize};
use terrawalk_common::{Direction, GridCoord, TerrawalkResult};
use terrawalk_world::TerrainMap;
use tracing::debug;

use crate::animation::{AnimationClock, AnimationConfig, PhaseAdvanced};

/// Observable agent state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentState {
    /// Current cell
    pub position: GridCoord,
    /// Direction of the last accepted move
    pub facing: Direction,
    /// Walk-cycle frame
    pub animation_phase: u8,
    /// Whether the walk cycle is running
    pub is_animating: bool,
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Whether the agent moved
    pub accepted: bool,
    /// Position after the request
    pub new_position: GridCoord,
    /// Facing after the request
    pub new_facing: Direction,
}

/// Movable agent on a terrain map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Agent {
    /// Current cell
    position: GridCoord,
    /// Direction of the last accepted move
    facing: Direction,
    /// Walk-cycle clock
    clock: AnimationClock,
}

impl Agent {
    /// Creates an idle agent facing down at `position`.
    ///
    /// The position is not checked here; [`crate::Session::new`] does that.
    pub fn new(position: GridCoord, animation: AnimationConfig) -> TerrawalkResult<Self> {
        Ok(Self {
            position,
            facing: Direction::default(),
            clock: AnimationClock::new(animation)?,
        })
    }

    /// Current cell.
    #[must_use]
    pub const fn position(&self) -> GridCoord {
        self.position
    }

    /// Current facing.
    #[must_use]
    pub const fn facing(&self) -> Direction {
        self.facing
    }

    /// Walk-cycle clock.
    #[must_use]
    pub const fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Snapshot of the observable state.
    #[must_use]
    pub const fn state(&self) -> AgentState {
        AgentState {
            position: self.position,
            facing: self.facing,
            animation_phase: self.clock.phase(),
            is_animating: self.clock.is_animating(),
        }
    }

    /// Tries to step one cell in `direction` on `map`.
    pub fn request_move(&mut self, direction: Direction, map: &TerrainMap) -> MoveOutcome {
        let target = self.position.step(direction);
        if !map.is_walkable(target.x, target.y) {
            debug!(from = %self.position, to = %target, %direction, "move rejected");
            return MoveOutcome {
                accepted: false,
                new_position: self.position,
                new_facing: self.facing,
            };
        }

        self.position = target;
        self.facing = direction;
        self.start_animation();
        debug!(to = %target, %direction, "move accepted");

        MoveOutcome {
            accepted: true,
            new_position: self.position,
            new_facing: self.facing,
        }
    }

    /// Starts (or extends) the walk cycle.
    pub fn start_animation(&mut self) {
        if !self.clock.is_animating() {
            debug!(position = %self.position, "animation started");
        }
        self.clock.start();
    }

    /// Forces the agent idle at phase 0.
    pub fn stop_animation(&mut self) {
        self.clock.stop();
    }

    /// Advances the walk cycle by one host tick.
    pub fn tick(&mut self) -> PhaseAdvanced {
        let was_animating = self.clock.is_animating();
        let advanced = self.clock.tick();
        if was_animating && !advanced.still_animating {
            debug!(position = %self.position, "animation stopped");
        }
        advanced
    }
}
