//! # Terrawalk Gameplay
//!
//! Gameplay systems for Terrawalk.
//!
//! This crate provides the agent layer on top of a generated terrain map:
//! - Grid agent with walkability-checked movement
//! - Tick-driven walk-cycle animation
//! - Session facade the host drives
//! - Draw request queue for the renderer
//! - Item-counting inventory

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod agent;
pub mod animation;
pub mod events;
pub mod inventory;
pub mod session;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::agent::*;
    pub use crate::animation::*;
    pub use crate::events::*;
    pub use crate::inventory::*;
    pub use crate::session::*;
    pub use terrawalk_world::generate_terrain;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use terrawalk_common::Direction;
    use terrawalk_world::GeneratorConfig;

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    #[test]
    fn test_walk_generated_map() {
        let map = generate_terrain(&GeneratorConfig::with_size(24)).expect("valid config");
        let start = map.first_walkable().expect("land on a 24x24 map");
        let mut session =
            Session::new(map, start, AnimationConfig::default()).expect("start on the map");

        for direction in Direction::ALL {
            session.request_move(direction);
        }
        while session.tick().still_animating {}
        assert!(!session.agent_state().is_animating);
    }

    proptest! {
        #[test]
        fn prop_agent_only_stands_on_walkable_cells(
            seed in any::<u32>(),
            moves in prop::collection::vec(direction_strategy(), 0..40),
        ) {
            let config = GeneratorConfig { seed, ..GeneratorConfig::with_size(16) };
            let map = generate_terrain(&config).expect("valid config");
            let Some(start) = map.first_walkable() else {
                return Ok(());
            };
            let mut session =
                Session::new(map, start, AnimationConfig::default()).expect("start on the map");

            for direction in moves {
                let before = session.agent_state();
                let outcome = session.request_move(direction);
                let after = session.agent_state();
                prop_assert!(session.is_walkable(after.position.x, after.position.y));
                if outcome.accepted {
                    prop_assert_eq!(after.position, before.position.step(direction));
                    prop_assert_eq!(after.facing, direction);
                    prop_assert!(after.is_animating);
                } else {
                    prop_assert_eq!(after, before);
                }
                session.tick();
            }
            prop_assert!(session.agent_state().position.in_bounds(16));
        }
    }
}
