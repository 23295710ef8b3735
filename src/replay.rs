//! Game reconstruction: replay a persisted guess log into a renderable
//! board plus derived sunk/game-over state.

use serde::{Deserialize, Serialize};

use crate::cellset::CellSet;
use crate::common::{CellState, Coord};
use crate::config::GRID_SIZE;
use crate::guess::Guess;
use crate::layout::Layout;

/// A renderable 10×10 board of cell states.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    cells: [[CellState; GRID_SIZE as usize]; GRID_SIZE as usize],
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell state at `coord`; out-of-bounds reads are `Empty`.
    pub fn get(&self, coord: Coord) -> CellState {
        if coord.in_bounds() {
            self.cells[coord.y as usize][coord.x as usize]
        } else {
            CellState::Empty
        }
    }

    fn set(&mut self, coord: Coord, state: CellState) {
        self.cells[coord.y as usize][coord.x as usize] = state;
    }

    /// Rows top to bottom, each row left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.iter().map(|row| row.as_slice())
    }
}

/// Derived state of a game: the board, the names of sunk ships in
/// manifest order, and whether the whole fleet is sunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconstruction {
    pub board: BoardView,
    pub sunk_ships: Vec<String>,
    pub game_over: bool,
}

/// Fold a guess log into derived state against a fixed layout.
///
/// The fold is last-write-wins: a later guess at the same cell overwrites
/// the earlier cell state. Out-of-bounds entries (possible in logs written
/// before submission validation existed) are skipped. The hit set is every
/// in-bounds entry flagged as a hit; sunk and game-over state are universal
/// quantifiers over that set, so log order does not affect them.
pub fn reconstruct(layout: &Layout, log: &[Guess]) -> Reconstruction {
    let mut board = BoardView::new();
    let mut hits = CellSet::new();

    for guess in log {
        let coord = guess.coord();
        if !coord.in_bounds() {
            continue;
        }
        if guess.is_hit {
            board.set(coord, CellState::Hit);
            let _ = hits.insert(coord);
        } else {
            board.set(coord, CellState::Miss);
        }
    }

    let sunk_ships = layout
        .sunk_ships(&hits)
        .into_iter()
        .map(|ship| ship.name().to_owned())
        .collect();

    Reconstruction {
        board,
        sunk_ships,
        game_over: layout.all_sunk(&hits),
    }
}
