//! Application lifecycle management.
//!
//! Headless host loop: reads command tokens, drives the session and prints
//! the renderer's output.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, info, warn};

use terrawalk_gameplay::{generate_terrain, Inventory, Session};

use crate::config::{EngineConfig, CONFIG_FILE};
use crate::iso::IsoProjection;
use crate::renderer::TextRenderer;

/// Items the agent starts with.
const STARTING_ITEMS: [(&str, u32); 3] = [("Sword", 1), ("Health Potion", 3), ("Shield", 1)];

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading input
    Continue,
    /// Leave the loop
    Quit,
}

/// Host state.
#[derive(Debug)]
pub struct TerrawalkApp {
    /// Engine configuration
    config: EngineConfig,
    /// Terrain and agent
    session: Session,
    /// Text output
    renderer: TextRenderer,
    /// Agent's items
    inventory: Inventory,
    /// Whether the inventory overlay is visible
    show_inventory: bool,
}

impl TerrawalkApp {
    /// Generates the map and places the agent.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let generator = config.resolved_generator();
        let map = generate_terrain(&generator).context("terrain generation failed")?;

        let start = match config.start.or_else(|| map.first_walkable()) {
            Some(start) => start,
            None => {
                warn!("Map has no walkable cell, starting at the origin");
                Default::default()
            },
        };
        let session = Session::new(map, start, config.animation).context("invalid start")?;

        let mut inventory = Inventory::new();
        for (item, count) in STARTING_ITEMS {
            inventory.add(item, count)?;
        }

        Ok(Self {
            renderer: TextRenderer::new(IsoProjection::new(config.tile_width, config.tile_height)),
            config,
            session,
            inventory,
            show_inventory: false,
        })
    }

    /// Current session.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Whether the inventory overlay is visible.
    pub const fn inventory_visible(&self) -> bool {
        self.show_inventory
    }

    /// Runs one whitespace-separated token.
    pub fn handle_token<W: Write>(&mut self, token: &str, out: &mut W) -> Result<Flow> {
        match token {
            "q" | "quit" | "exit" => return Ok(Flow::Quit),
            "i" => {
                self.show_inventory = !self.show_inventory;
                debug!("Inventory overlay visible: {}", self.show_inventory);
                if self.show_inventory {
                    write!(out, "{}", self.renderer.render_inventory(&self.inventory))?;
                }
            },
            "map" => write!(out, "{}", self.renderer.render_session(&self.session))?,
            "help" | "?" => writeln!(
                out,
                "move: up/down/left/right or w/a/s/d  i: inventory  map: redraw  q: quit"
            )?,
            _ => match self.session.request_move_token(token) {
                Ok(outcome) => {
                    if outcome.accepted {
                        let ticks = self.run_animation();
                        debug!("Walk cycle finished after {ticks} ticks");
                    } else {
                        writeln!(out, "blocked")?;
                    }
                    self.flush_draw_requests(out)?;
                    write!(out, "{}", self.renderer.render_session(&self.session))?;
                },
                Err(e) => {
                    warn!("Ignoring input: {e}");
                    writeln!(out, "unknown command {token:?}, try help")?;
                },
            },
        }
        Ok(Flow::Continue)
    }

    /// Reads lines until end of input or a quit command.
    pub fn run_loop<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        writeln!(out, "{}", self.renderer.legend())?;
        write!(out, "{}", self.renderer.render_session(&self.session))?;

        for line in input.lines() {
            let line = line?;
            for token in line.split_whitespace() {
                if self.handle_token(token, &mut out)? == Flow::Quit {
                    return Ok(());
                }
            }
            out.flush()?;
        }
        Ok(())
    }

    /// Ticks until the walk cycle ends. Returns the number of ticks.
    ///
    /// Headless mode has no frame timer, so ticks run back to back.
    fn run_animation(&mut self) -> u32 {
        let mut ticks = 0;
        while self.session.tick().still_animating {
            ticks += 1;
        }
        ticks + 1
    }

    /// Drains queued draw requests, printing them when enabled.
    fn flush_draw_requests<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for request in self.session.drain_draw_requests() {
            if self.config.show_draw_requests {
                writeln!(out, "{}", self.renderer.describe(&request))?;
            }
        }
        Ok(())
    }
}

/// Runs the host on stdin and stdout.
pub fn run(config_path: Option<&Path>) -> Result<()> {
    let path = config_path.unwrap_or_else(|| Path::new(CONFIG_FILE));
    let mut config = EngineConfig::load_from(path).unwrap_or_else(|e| {
        warn!("{e:#}, using defaults");
        EngineConfig::default()
    });
    config.validate();

    info!("Configuration loaded:");
    info!(
        "  Map: {}x{}, convention {:?}, tileable {}",
        config.generator.size,
        config.generator.size,
        config.generator.convention,
        config.generator.tileable
    );
    info!(
        "  Animation: {} frames, {} ms tick, {} ms duration",
        config.animation.frame_count,
        config.animation.tick_interval_ms,
        config.animation.duration_ms
    );

    let mut app = TerrawalkApp::new(config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    app.run_loop(stdin.lock(), stdout.lock())
}
