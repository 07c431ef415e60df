//! Text renderer for the headless host.
//!
//! Owns the glyph table that stands in for tile and sprite assets, and turns
//! session state and draw requests into printable text.

use std::fmt::Write as _;

use terrawalk_common::{Direction, GridCoord};
use terrawalk_gameplay::{AgentState, DrawRequest, Inventory, Session};
use terrawalk_world::{TerrainCategory, TerrainMap};

use crate::iso::IsoProjection;

/// Glyphs for each terrain category and agent facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphTable {
    /// Indexed by [`TerrainCategory::index`]
    terrain: [char; 5],
    /// Indexed as up, down, left, right
    agent: [char; 4],
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self {
            terrain: ['~', '.', 'n', '^', 'A'],
            agent: ['u', 'd', 'l', 'r'],
        }
    }
}

impl GlyphTable {
    /// Tile glyph for a category.
    #[must_use]
    pub const fn terrain(&self, category: TerrainCategory) -> char {
        self.terrain[category.index()]
    }

    /// Agent glyph for a facing. Uppercase while animating on odd frames.
    #[must_use]
    pub fn agent(&self, facing: Direction, phase: u8) -> char {
        let glyph = self.agent[match facing {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }];
        if phase % 2 == 1 {
            glyph.to_ascii_uppercase()
        } else {
            glyph
        }
    }
}

/// Renders sessions as text.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Asset stand-ins
    glyphs: GlyphTable,
    /// Tile geometry for pixel positions
    iso: IsoProjection,
}

impl TextRenderer {
    /// Creates a renderer with the default glyphs.
    #[must_use]
    pub fn new(iso: IsoProjection) -> Self {
        Self {
            glyphs: GlyphTable::default(),
            iso,
        }
    }

    /// Glyph table in use.
    #[must_use]
    pub const fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    /// Map grid with the agent drawn on top, one line per row.
    #[must_use]
    pub fn render_map(&self, map: &TerrainMap, agent: &AgentState) -> String {
        let mut out = String::with_capacity(map.size() * (map.size() + 1));
        for (y, row) in map.terrain().rows().enumerate() {
            for (x, &category) in row.iter().enumerate() {
                let here = GridCoord::new(x as i32, y as i32);
                if here == agent.position {
                    out.push(self.glyphs.agent(agent.facing, agent.animation_phase));
                } else {
                    out.push(self.glyphs.terrain(category));
                }
            }
            out.push('\n');
        }
        out
    }

    /// Full session frame: map plus status line.
    #[must_use]
    pub fn render_session(&self, session: &Session) -> String {
        let state = session.agent_state();
        let mut out = self.render_map(session.map(), &state);
        out.push_str(&self.render_status(session.map(), &state));
        out.push('\n');
        out
    }

    /// One-line agent status.
    #[must_use]
    pub fn render_status(&self, map: &TerrainMap, agent: &AgentState) -> String {
        let screen = self.iso.project(agent.position);
        let terrain = map
            .category_at(agent.position)
            .map_or("unknown", TerrainCategory::name);
        format!(
            "agent {} on {} facing {} frame {}{} screen ({}, {})",
            agent.position,
            terrain,
            agent.facing,
            agent.animation_phase,
            if agent.is_animating { " walking" } else { "" },
            screen.x + self.iso.origin_offset(map.size()),
            screen.y,
        )
    }

    /// One line describing a draw request.
    #[must_use]
    pub fn describe(&self, request: &DrawRequest) -> String {
        match request {
            DrawRequest::AgentMoved {
                from,
                to,
                facing,
                phase,
            } => format!(
                "redraw tile {from}, draw '{}' at {to}",
                self.glyphs.agent(*facing, *phase)
            ),
            DrawRequest::AgentFrame {
                position,
                facing,
                phase,
            } => format!(
                "draw '{}' at {position} frame {phase}",
                self.glyphs.agent(*facing, *phase)
            ),
        }
    }

    /// Inventory overlay.
    #[must_use]
    pub fn render_inventory(&self, inventory: &Inventory) -> String {
        let mut out = String::from("== Inventory ==\n");
        if inventory.is_empty() {
            out.push_str("(empty)\n");
        }
        for (item, count) in inventory.iter() {
            let _ = writeln!(out, "{item}: {count}");
        }
        out
    }

    /// Legend of terrain glyphs.
    #[must_use]
    pub fn legend(&self) -> String {
        TerrainCategory::ALL
            .iter()
            .map(|&category| format!("{} {}", self.glyphs.terrain(category), category.name()))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrawalk_gameplay::AnimationConfig;
    use terrawalk_world::{ElevationConvention, ElevationGrid};

    fn scenario_map() -> TerrainMap {
        let elevation = ElevationGrid::from_rows(
            vec![
                vec![0.9, 0.1, 0.5],
                vec![0.1, 0.5, 0.9],
                vec![0.5, 0.9, 0.1],
            ],
            ElevationConvention::Normalized,
        )
        .expect("square rows");
        TerrainMap::from_elevation(elevation).expect("finite samples")
    }

    fn renderer() -> TextRenderer {
        TextRenderer::new(IsoProjection::new(32, 32))
    }

    #[test]
    fn test_glyph_table_covers_every_category() {
        let glyphs = GlyphTable::default();
        let mut seen: Vec<char> = TerrainCategory::ALL
            .iter()
            .map(|&c| glyphs.terrain(c))
            .collect();
        seen.dedup();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_agent_glyph_alternates_with_phase() {
        let glyphs = GlyphTable::default();
        assert_eq!(glyphs.agent(Direction::Right, 0), 'r');
        assert_eq!(glyphs.agent(Direction::Right, 1), 'R');
        assert_eq!(glyphs.agent(Direction::Up, 2), 'u');
    }

    #[test]
    fn test_render_map_overlays_agent() {
        let session = Session::new(
            scenario_map(),
            GridCoord::new(1, 1),
            AnimationConfig::default(),
        )
        .expect("valid start");
        let text = renderer().render_map(session.map(), &session.agent_state());
        assert_eq!(text, "A~n\n~dA\nnA~\n");
    }

    #[test]
    fn test_render_status() {
        let map = scenario_map();
        let session =
            Session::new(map, GridCoord::new(1, 1), AnimationConfig::default()).expect("start");
        let status = renderer().render_status(session.map(), &session.agent_state());
        assert_eq!(
            status,
            "agent (1, 1) on hills facing down frame 0 screen (32, 32)"
        );
    }

    #[test]
    fn test_describe_requests() {
        let r = renderer();
        let moved = DrawRequest::AgentMoved {
            from: GridCoord::new(1, 1),
            to: GridCoord::new(2, 1),
            facing: Direction::Right,
            phase: 0,
        };
        assert_eq!(r.describe(&moved), "redraw tile (1, 1), draw 'r' at (2, 1)");
        let frame = DrawRequest::AgentFrame {
            position: GridCoord::new(2, 1),
            facing: Direction::Right,
            phase: 3,
        };
        assert_eq!(r.describe(&frame), "draw 'R' at (2, 1) frame 3");
    }

    #[test]
    fn test_render_inventory() {
        let r = renderer();
        assert_eq!(r.render_inventory(&Inventory::new()), "== Inventory ==\n(empty)\n");

        let mut inv = Inventory::new();
        inv.add("Sword", 1).expect("add");
        inv.add("Health Potion", 3).expect("add");
        assert_eq!(
            r.render_inventory(&inv),
            "== Inventory ==\nHealth Potion: 3\nSword: 1\n"
        );
    }
}
