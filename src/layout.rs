//! Ship layout generation and fleet-wide evaluation.
//!
//! A layout is generated once per game by randomized trial placement and
//! then persisted through the store; reconstruction always loads it back
//! rather than regenerating, so derived state is stable across reads.

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cellset::CellSet;
use crate::common::{Coord, GameError};
use crate::config::GRID_SIZE;
use crate::fleet::FleetManifest;
use crate::ship::{Orientation, PlacedShip};

/// Attempts per ship before placement gives up with a retryable error.
/// The default fleet covers 17 of 100 cells, so in practice a handful of
/// attempts suffice; the bound exists so unsatisfiable manifests fail
/// instead of spinning forever.
pub const MAX_PLACE_ATTEMPTS: usize = 1_000;

/// A full fleet placed on the grid with pairwise disjoint cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LayoutRecord", into = "LayoutRecord")]
pub struct Layout {
    ships: Vec<PlacedShip>,
    occupied: CellSet,
}

impl Layout {
    /// Generate a layout for `manifest` by repeated randomized trial
    /// placement: per ship, pick orientation 50/50 and a random in-bounds
    /// anchor, accept the first placement disjoint from all earlier ships.
    pub fn generate<R: Rng>(manifest: &FleetManifest, rng: &mut R) -> Result<Self, GameError> {
        let mut ships = Vec::with_capacity(manifest.ships().len());
        let mut occupied = CellSet::new();

        for class in manifest.ships() {
            let len = class.size();
            let mut placed = None;
            for attempt in 1..=MAX_PLACE_ATTEMPTS {
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let (max_x, max_y) = match orientation {
                    Orientation::Horizontal => (GRID_SIZE - len, GRID_SIZE - 1),
                    Orientation::Vertical => (GRID_SIZE - 1, GRID_SIZE - len),
                };
                let anchor = Coord::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
                let ship = PlacedShip::new(class.clone(), anchor, orientation)?;
                if !occupied.intersects(ship.mask()) {
                    debug!(
                        "placed {} at {} {:?} after {} attempt(s)",
                        ship.name(),
                        anchor,
                        orientation,
                        attempt
                    );
                    placed = Some(ship);
                    break;
                }
            }
            match placed {
                Some(ship) => {
                    occupied |= *ship.mask();
                    ships.push(ship);
                }
                None => {
                    warn!(
                        "giving up on {} after {} attempts",
                        class.name(),
                        MAX_PLACE_ATTEMPTS
                    );
                    return Err(GameError::PlacementFailed {
                        ship: class.name().to_owned(),
                        attempts: MAX_PLACE_ATTEMPTS,
                    });
                }
            }
        }

        Ok(Self { ships, occupied })
    }

    /// Build a layout from already-placed ships, rejecting overlaps.
    pub fn from_ships(ships: Vec<PlacedShip>) -> Result<Self, GameError> {
        let mut occupied = CellSet::new();
        for ship in &ships {
            if occupied.intersects(ship.mask()) {
                return Err(GameError::CorruptLayout {
                    reason: format!("ship {:?} overlaps another ship", ship.name()),
                });
            }
            occupied |= *ship.mask();
        }
        Ok(Self { ships, occupied })
    }

    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    /// Union of all ship cells.
    pub fn occupied(&self) -> &CellSet {
        &self.occupied
    }

    /// Whether `coord` intersects any ship.
    pub fn is_hit(&self, coord: Coord) -> bool {
        self.occupied.contains(coord)
    }

    /// The ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<&PlacedShip> {
        self.ships.iter().find(|ship| ship.contains(coord))
    }

    /// Ships whose every cell is in `hits`, in manifest order.
    pub fn sunk_ships<'a>(&'a self, hits: &CellSet) -> Vec<&'a PlacedShip> {
        self.ships
            .iter()
            .filter(|ship| ship.is_sunk(hits))
            .collect()
    }

    /// Whether every ship is sunk. Vacuously true for an empty fleet.
    pub fn all_sunk(&self, hits: &CellSet) -> bool {
        self.ships.iter().all(|ship| ship.is_sunk(hits))
    }
}

/// Serialized form: just the ships. Occupancy is rebuilt and disjointness
/// re-checked on load so a corrupt record cannot produce an invalid layout.
#[derive(Serialize, Deserialize)]
struct LayoutRecord {
    ships: Vec<PlacedShip>,
}

impl TryFrom<LayoutRecord> for Layout {
    type Error = GameError;

    fn try_from(record: LayoutRecord) -> Result<Self, Self::Error> {
        Layout::from_ships(record.ships)
    }
}

impl From<Layout> for LayoutRecord {
    fn from(layout: Layout) -> Self {
        LayoutRecord {
            ships: layout.ships,
        }
    }
}
