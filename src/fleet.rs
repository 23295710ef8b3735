//! Fleet manifests: the fixed list of ship name/size pairs a layout is
//! generated from.

use serde::{Deserialize, Serialize};

use crate::common::GameError;
use crate::config::{CELL_COUNT, GRID_SIZE};

/// A ship's name and length in cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipClass {
    name: String,
    size: u8,
}

impl ShipClass {
    pub fn new(name: impl Into<String>, size: u8) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u8 {
        self.size
    }
}

/// A validated list of ship classes. Entries keep manifest order, which is
/// also placement order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ShipClass>", into = "Vec<ShipClass>")]
pub struct FleetManifest {
    ships: Vec<ShipClass>,
}

impl FleetManifest {
    /// Build a manifest, rejecting ships the grid cannot hold and fleets
    /// that need more cells than the grid has. An empty fleet is valid.
    pub fn new(ships: Vec<ShipClass>) -> Result<Self, GameError> {
        for ship in &ships {
            if ship.size == 0 || ship.size > GRID_SIZE {
                return Err(GameError::InvalidShipSize {
                    ship: ship.name.clone(),
                    size: ship.size,
                });
            }
        }
        let cells = ships.iter().map(|s| s.size as usize).sum::<usize>();
        if cells > CELL_COUNT {
            return Err(GameError::FleetTooLarge {
                cells,
                capacity: CELL_COUNT,
            });
        }
        Ok(Self { ships })
    }

    pub fn ships(&self) -> &[ShipClass] {
        &self.ships
    }

    /// Total cells the fleet occupies once placed.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(|s| s.size as usize).sum()
    }
}

impl TryFrom<Vec<ShipClass>> for FleetManifest {
    type Error = GameError;

    fn try_from(ships: Vec<ShipClass>) -> Result<Self, Self::Error> {
        FleetManifest::new(ships)
    }
}

impl From<FleetManifest> for Vec<ShipClass> {
    fn from(manifest: FleetManifest) -> Self {
        manifest.ships
    }
}
