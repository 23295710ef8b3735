//! Canonical guess shapes.
//!
//! Earlier API revisions drifted between `x`/`y` and
//! `x_coordinate`/`y_coordinate`, and between `isHit` and `is_hit`. The
//! canonical shape is snake_case `x`/`y`/`is_hit`; the legacy names are
//! accepted on input via serde aliases and never produced on output.

use serde::{Deserialize, Serialize};

use crate::common::{Coord, GameError, GameId};

/// One persisted guess: an append-only record per submitted coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    #[serde(alias = "gameId")]
    pub game_id: GameId,
    #[serde(alias = "playerName")]
    pub player_name: String,
    #[serde(alias = "x_coordinate")]
    pub x: u8,
    #[serde(alias = "y_coordinate")]
    pub y: u8,
    #[serde(alias = "isHit")]
    pub is_hit: bool,
}

impl Guess {
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

/// A guess as submitted by a client. Carries no hit flag: the server
/// resolves hits against the persisted layout. (Legacy clients send an
/// `isHit` field; it is ignored.)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessSubmission {
    #[serde(alias = "gameId")]
    pub game_id: GameId,
    #[serde(alias = "playerName")]
    pub player_name: String,
    #[serde(alias = "x_coordinate")]
    pub x: u8,
    #[serde(alias = "y_coordinate")]
    pub y: u8,
}

impl GuessSubmission {
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// Bounds-check the coordinate at the boundary.
    pub fn validate(&self) -> Result<Coord, GameError> {
        let coord = self.coord();
        if coord.in_bounds() {
            Ok(coord)
        } else {
            Err(GameError::OutOfBounds {
                x: self.x,
                y: self.y,
            })
        }
    }
}
