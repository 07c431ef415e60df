//! Game session: one terrain map and the agent walking on it.
//!
//! This is the surface the host talks to. It forwards input to the agent,
//! answers walkability queries, and queues a [`DrawRequest`] for every
//! accepted move and every animation tick. Rejected moves queue nothing.

use terrawalk_common::{Direction, GridCoord, TerrawalkError, TerrawalkResult};
use terrawalk_world::TerrainMap;
use tracing::{info, warn};

use crate::agent::{Agent, AgentState, MoveOutcome};
use crate::animation::{AnimationConfig, PhaseAdvanced};
use crate::events::{DrawQueue, DrawRequest};

/// A running session.
#[derive(Debug)]
pub struct Session {
    /// Immutable terrain
    map: TerrainMap,
    /// The controllable agent
    agent: Agent,
    /// Pending draw requests
    draws: DrawQueue,
}

impl Session {
    /// Starts a session with the agent at `start`.
    ///
    /// `start` must lie on the map. A non-walkable start is accepted with a
    /// warning; the agent can still step off it onto land.
    pub fn new(
        map: TerrainMap,
        start: GridCoord,
        animation: AnimationConfig,
    ) -> TerrawalkResult<Self> {
        if !start.in_bounds(map.size()) {
            return Err(TerrawalkError::invalid_parameter(
                "start",
                format!("{start} is outside the {0}x{0} map", map.size()),
            ));
        }
        if !map.is_walkable(start.x, start.y) {
            warn!(
                "Start position {} is not walkable ({:?})",
                start,
                map.category_at(start)
            );
        }

        let agent = Agent::new(start, animation)?;
        info!(
            "Session started: {}x{} map, agent at {}",
            map.size(),
            map.size(),
            start
        );
        Ok(Self {
            map,
            agent,
            draws: DrawQueue::default(),
        })
    }

    /// Terrain of this session.
    #[must_use]
    pub const fn map(&self) -> &TerrainMap {
        &self.map
    }

    /// The agent.
    #[must_use]
    pub const fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Snapshot of the agent state.
    #[must_use]
    pub const fn agent_state(&self) -> AgentState {
        self.agent.state()
    }

    /// Whether the cell at `(x, y)` may be stepped on.
    #[must_use]
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.map.is_walkable(x, y)
    }

    /// Requests a one-cell move.
    pub fn request_move(&mut self, direction: Direction) -> MoveOutcome {
        let from = self.agent.position();
        let outcome = self.agent.request_move(direction, &self.map);
        if outcome.accepted {
            self.draws.publish(DrawRequest::AgentMoved {
                from,
                to: outcome.new_position,
                facing: outcome.new_facing,
                phase: self.agent.clock().phase(),
            });
        }
        outcome
    }

    /// Requests a move from a direction token such as `"up"` or `"d"`.
    pub fn request_move_token(&mut self, token: &str) -> TerrawalkResult<MoveOutcome> {
        let direction = token.parse::<Direction>()?;
        Ok(self.request_move(direction))
    }

    /// Advances the walk cycle by one host tick.
    ///
    /// The host keeps calling this while `still_animating` is true.
    pub fn tick(&mut self) -> PhaseAdvanced {
        let was_animating = self.agent.clock().is_animating();
        let advanced = self.agent.tick();
        if was_animating {
            self.draws.publish(DrawRequest::AgentFrame {
                position: self.agent.position(),
                facing: self.agent.facing(),
                phase: advanced.phase,
            });
        }
        advanced
    }

    /// Forces the agent idle at phase 0.
    pub fn stop_animation(&mut self) {
        self.agent.stop_animation();
    }

    /// Drains pending draw requests.
    pub fn drain_draw_requests(&self) -> Vec<DrawRequest> {
        self.draws.drain()
    }
}
