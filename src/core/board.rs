use crate::core::cell::Cell;

/// Maximum number of vehicles a puzzle may hold.
///
/// This is intentionally small: realistic boards carry about a dozen vehicles,
/// and the fixed cap keeps board values cheap to clone and hash.
pub const MAX_VEHICLES: usize = 16;

/// Bits per slot inside a [`StateKey`]: enough for a dense cell index.
const KEY_BITS_PER_SLOT: u32 = 6;

/// Packed canonical key of a board, 6 bits per vehicle slot.
///
/// Two boards built against the same fleet compare equal on their keys iff
/// they assign identical origin cells to every slot, regardless of how they
/// were reached.
pub type StateKey = u128;

/// Origin cells for every vehicle slot of one solve invocation.
///
/// Vehicle identity and shape are not stored here; that is the fleet's job.
/// A board only records where each slot's leading cell currently sits, which
/// is the single piece of state that changes during search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; MAX_VEHICLES],
    count: u8,
}

impl Board {
    pub fn new(count: usize, cells: [Cell; MAX_VEHICLES]) -> Self {
        debug_assert!(count <= MAX_VEHICLES);
        Self {
            cells,
            count: count as u8,
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count as usize
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells[..self.count()]
    }

    #[inline]
    pub fn get(&self, slot: usize) -> Cell {
        self.cells()[slot]
    }

    #[inline]
    pub fn set(&mut self, slot: usize, cell: Cell) {
        let n = self.count();
        self.cells[..n][slot] = cell;
    }

    /// Packed canonical key: slot 0 in the lowest bits, each slot contributing
    /// the dense index of its origin cell.
    pub fn key(&self) -> StateKey {
        debug_assert!(MAX_VEHICLES as u32 * KEY_BITS_PER_SLOT <= 128);
        let mut key: StateKey = 0;
        let mut shift: u32 = 0;
        for &cell in self.cells() {
            key |= (cell.index() as StateKey) << shift;
            shift += KEY_BITS_PER_SLOT;
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_separate_boards_that_differ_in_one_slot() {
        let mut cells = [Cell::new(0, 0); MAX_VEHICLES];
        cells[0] = Cell::new(2, 0);
        cells[1] = Cell::new(0, 3);
        let a = Board::new(2, cells);

        let mut b = a.clone();
        b.set(1, Cell::new(0, 4));

        assert_ne!(a.key(), b.key());

        let mut back = b.clone();
        back.set(1, Cell::new(0, 3));
        assert_eq!(a.key(), back.key());
    }
}
