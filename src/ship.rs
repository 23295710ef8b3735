//! Ship placement: a fleet entry bound to concrete grid cells.

use serde::{Deserialize, Serialize};

use crate::cellset::CellSet;
use crate::common::{Coord, GameError};
use crate::config::GRID_SIZE;
use crate::fleet::ShipClass;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship placed on the grid: class, anchor cell, orientation and the
/// occupancy mask derived from them. The occupied cells are contiguous and
/// axis-aligned by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ShipRecord", into = "ShipRecord")]
pub struct PlacedShip {
    class: ShipClass,
    anchor: Coord,
    orientation: Orientation,
    mask: CellSet,
}

impl PlacedShip {
    /// Place a ship of `class` with its first cell at `anchor`, extending
    /// right (horizontal) or down (vertical).
    pub fn new(
        class: ShipClass,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<Self, GameError> {
        let len = class.size();
        // widen before adding so absurd anchors from stored records cannot overflow
        let fits = match orientation {
            Orientation::Horizontal => {
                anchor.y < GRID_SIZE && anchor.x as u16 + len as u16 <= GRID_SIZE as u16
            }
            Orientation::Vertical => {
                anchor.x < GRID_SIZE && anchor.y as u16 + len as u16 <= GRID_SIZE as u16
            }
        };
        if len == 0 || !fits {
            return Err(GameError::ShipOutOfBounds {
                ship: class.name().to_owned(),
            });
        }

        let mut mask = CellSet::new();
        for i in 0..len {
            let cell = match orientation {
                Orientation::Horizontal => Coord::new(anchor.x + i, anchor.y),
                Orientation::Vertical => Coord::new(anchor.x, anchor.y + i),
            };
            mask.insert(cell)?;
        }

        Ok(Self {
            class,
            anchor,
            orientation,
            mask,
        })
    }

    pub fn name(&self) -> &str {
        self.class.name()
    }

    pub fn size(&self) -> u8 {
        self.class.size()
    }

    pub fn class(&self) -> &ShipClass {
        &self.class
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of this ship.
    pub fn mask(&self) -> &CellSet {
        &self.mask
    }

    /// The cells this ship occupies, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let (anchor, orientation) = (self.anchor, self.orientation);
        (0..self.class.size()).map(move |i| match orientation {
            Orientation::Horizontal => Coord::new(anchor.x + i, anchor.y),
            Orientation::Vertical => Coord::new(anchor.x, anchor.y + i),
        })
    }

    /// Whether the ship occupies `coord`.
    pub fn contains(&self, coord: Coord) -> bool {
        self.mask.contains(coord)
    }

    /// Whether every cell of the ship is in `hits`. Monotonic in `hits`:
    /// adding hits can only turn this true, never back.
    pub fn is_sunk(&self, hits: &CellSet) -> bool {
        hits.contains_all(&self.mask)
    }
}

/// Serialized form of a placed ship: the mask is rebuilt (and the
/// placement re-validated) on deserialization.
#[derive(Serialize, Deserialize)]
struct ShipRecord {
    class: ShipClass,
    anchor: Coord,
    orientation: Orientation,
}

impl TryFrom<ShipRecord> for PlacedShip {
    type Error = GameError;

    fn try_from(record: ShipRecord) -> Result<Self, Self::Error> {
        PlacedShip::new(record.class, record.anchor, record.orientation)
    }
}

impl From<PlacedShip> for ShipRecord {
    fn from(ship: PlacedShip) -> Self {
        ShipRecord {
            class: ship.class,
            anchor: ship.anchor,
            orientation: ship.orientation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destroyer_at(x: u8, y: u8, orientation: Orientation) -> PlacedShip {
        PlacedShip::new(ShipClass::new("Destroyer", 2), Coord::new(x, y), orientation).unwrap()
    }

    #[test]
    fn cells_match_anchor_and_orientation() {
        let ship = destroyer_at(4, 6, Orientation::Vertical);
        let cells: Vec<_> = ship.cells().collect();
        assert_eq!(cells, vec![Coord::new(4, 6), Coord::new(4, 7)]);
        for cell in cells {
            assert!(ship.contains(cell));
        }
        assert!(!ship.contains(Coord::new(4, 8)));
    }

    #[test]
    fn placement_past_edge_rejected() {
        let err = PlacedShip::new(
            ShipClass::new("Carrier", 5),
            Coord::new(6, 0),
            Orientation::Horizontal,
        )
        .unwrap_err();
        assert!(matches!(err, GameError::ShipOutOfBounds { .. }));
    }

    #[test]
    fn sunk_requires_every_cell() {
        let ship = destroyer_at(0, 0, Orientation::Horizontal);
        let mut hits = CellSet::new();
        assert!(!ship.is_sunk(&hits));
        hits.insert(Coord::new(0, 0)).unwrap();
        assert!(!ship.is_sunk(&hits));
        hits.insert(Coord::new(1, 0)).unwrap();
        assert!(ship.is_sunk(&hits));
        // unrelated hits never unsink it
        hits.insert(Coord::new(9, 9)).unwrap();
        assert!(ship.is_sunk(&hits));
    }

    #[test]
    fn serde_roundtrip_rebuilds_mask() {
        let ship = destroyer_at(2, 3, Orientation::Horizontal);
        let json = serde_json::to_string(&ship).unwrap();
        let back: PlacedShip = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ship);
        assert!(back.contains(Coord::new(3, 3)));
    }
}
