//! Common types shared across the crate: coordinates, cell states, guess
//! outcomes and the error taxonomy.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::GRID_SIZE;

/// Identifier of a game. Games are created with a fresh v4 UUID.
pub type GameId = Uuid;

/// A cell position on the grid. `x` is the column, `y` the row, both
/// zero-based. Construction is unchecked; callers validate with
/// [`Coord::in_bounds`] at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Whether the coordinate lies on the grid.
    pub fn in_bounds(&self) -> bool {
        self.x < GRID_SIZE && self.y < GRID_SIZE
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Renderable state of a single board cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    #[default]
    Empty,
    Hit,
    Miss,
}

/// Result of a resolved guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessOutcome {
    /// Guess missed every ship.
    Miss,
    /// Guess hit a ship that still has unhit cells.
    Hit,
    /// Guess completed a ship, carrying its name.
    Sunk { ship: String },
}

/// Errors surfaced by layout, replay and service operations.
#[derive(Debug, Error)]
pub enum GameError {
    /// Coordinate outside the grid, rejected at the submission boundary.
    #[error("coordinate ({x}, {y}) is off the board")]
    OutOfBounds { x: u8, y: u8 },
    /// Ship extends past the edge of the grid from its anchor.
    #[error("ship {ship:?} does not fit at its anchor")]
    ShipOutOfBounds { ship: String },
    /// Manifest entry with a size the grid cannot hold.
    #[error("invalid size {size} for ship {ship:?}")]
    InvalidShipSize { ship: String, size: u8 },
    /// Manifest asks for more cells than the grid has.
    #[error("fleet needs {cells} cells but the board has {capacity}")]
    FleetTooLarge { cells: usize, capacity: usize },
    /// Randomized placement exhausted its attempt limit. Retryable.
    #[error("could not place ship {ship:?} after {attempts} attempts")]
    PlacementFailed { ship: String, attempts: usize },
    /// The cell was already guessed in this game.
    #[error("cell ({x}, {y}) was already guessed in this game")]
    DuplicateGuess { x: u8, y: u8 },
    /// No game with this id exists in the store.
    #[error("unknown game {0}")]
    GameNotFound(GameId),
    /// A stored layout failed validation on load.
    #[error("corrupt stored layout: {reason}")]
    CorruptLayout { reason: String },
    /// Failure in the backing store.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
