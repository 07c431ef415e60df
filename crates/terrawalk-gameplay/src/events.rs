//! Draw requests queued for the rendering collaborator.

use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use terrawalk_common::{Direction, GridCoord};
use tracing::warn;

/// Something the renderer should redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawRequest {
    /// Agent stepped to a new cell; redraw the old tile and the agent
    AgentMoved {
        /// Cell vacated
        from: GridCoord,
        /// Cell entered
        to: GridCoord,
        /// New facing
        facing: Direction,
        /// Walk-cycle frame
        phase: u8,
    },
    /// Walk-cycle frame changed in place
    AgentFrame {
        /// Agent cell
        position: GridCoord,
        /// Facing
        facing: Direction,
        /// Walk-cycle frame
        phase: u8,
    },
}

/// Unbounded queue of draw requests.
///
/// Every accepted move and every animating tick must reach the renderer, so
/// nothing is dropped however long a walk cycle runs between drains.
#[derive(Debug)]
pub struct DrawQueue {
    /// Sender for queuing requests
    sender: Sender<DrawRequest>,
    /// Receiver for draining requests
    receiver: Receiver<DrawRequest>,
}

impl Default for DrawQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Queues a request.
    pub fn publish(&self, request: DrawRequest) {
        if let Err(e) = self.sender.try_send(request) {
            warn!("Dropped draw request: {e}");
        }
    }

    /// Drains all pending requests.
    pub fn drain(&self) -> Vec<DrawRequest> {
        self.receiver.try_iter().collect()
    }

    /// Returns the number of pending requests.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }
}
