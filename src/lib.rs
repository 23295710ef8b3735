//! Battleship guess-log service core.
//!
//! Ship layouts are generated by bounded randomized trial placement,
//! persisted once per game through the [`GameStore`] seam, and replayed
//! against the append-only guess log to reconstruct a renderable board,
//! sunk-ship list and game-over flag.

mod cellset;
mod common;
mod config;
mod fleet;
mod guess;
mod layout;
mod logging;
mod replay;
mod service;
mod ship;
mod store;
mod ui;

pub use cellset::CellSet;
pub use common::{CellState, Coord, GameError, GameId, GuessOutcome};
pub use config::{default_fleet, CELL_COUNT, GRID_SIZE};
pub use fleet::{FleetManifest, ShipClass};
pub use guess::{Guess, GuessSubmission};
pub use layout::{Layout, MAX_PLACE_ATTEMPTS};
pub use logging::init_logging;
pub use replay::{reconstruct, BoardView, Reconstruction};
pub use service::{GameService, GameSummary, GuessReport, PlayerScore};
pub use ship::{Orientation, PlacedShip};
pub use store::{GameStore, MemoryStore};
pub use ui::render_board;
