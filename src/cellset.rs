//! A fixed-size set of grid cells packed into a `u128`.
//!
//! One bit per cell of the 10×10 grid; bit index is `y * GRID_SIZE + x`.
//! Used for ship occupancy masks and accumulated hit sets.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};

use crate::common::{Coord, GameError};
use crate::config::{CELL_COUNT, GRID_SIZE};

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    /// An empty set.
    #[inline]
    pub const fn new() -> Self {
        CellSet { bits: 0 }
    }

    #[inline]
    fn bit(coord: Coord) -> u128 {
        1u128 << (coord.y as usize * GRID_SIZE as usize + coord.x as usize)
    }

    /// Add a cell to the set.
    pub fn insert(&mut self, coord: Coord) -> Result<(), GameError> {
        if !coord.in_bounds() {
            return Err(GameError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            });
        }
        self.bits |= Self::bit(coord);
        Ok(())
    }

    /// Whether the cell is in the set. Out-of-bounds coordinates are never
    /// members.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.in_bounds() && self.bits & Self::bit(coord) != 0
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Whether the two sets share any cell.
    pub fn intersects(&self, other: &CellSet) -> bool {
        self.bits & other.bits != 0
    }

    /// Whether every cell of `other` is also in `self`.
    pub fn contains_all(&self, other: &CellSet) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Iterator over the cells in the set, row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..CELL_COUNT).filter_map(move |idx| {
            if self.bits >> idx & 1 != 0 {
                Some(Coord::new(
                    (idx % GRID_SIZE as usize) as u8,
                    (idx / GRID_SIZE as usize) as u8,
                ))
            } else {
                None
            }
        })
    }
}

impl FromIterator<Coord> for CellSet {
    /// Collect coordinates into a set, silently dropping out-of-bounds ones.
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut set = CellSet::new();
        for coord in iter {
            let _ = set.insert(coord);
        }
        set
    }
}

impl BitOr for CellSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for CellSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits & rhs.bits,
        }
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet ({} cells):", self.len())?;
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let mark = if self.contains(Coord::new(x, y)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
