use crate::fleet::{FleetManifest, ShipClass};

/// Side length of the square grid.
pub const GRID_SIZE: u8 = 10;

/// Total number of cells on the grid.
pub const CELL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// The classic five-ship fleet: 17 of 100 cells.
pub fn default_fleet() -> FleetManifest {
    FleetManifest::new(vec![
        ShipClass::new("Carrier", 5),
        ShipClass::new("Battleship", 4),
        ShipClass::new("Cruiser", 3),
        ShipClass::new("Submarine", 3),
        ShipClass::new("Destroyer", 2),
    ])
    .expect("default fleet is valid")
}
