//! # Grid Model
//!
//! Pure bounds-checked storage for the level character grid. The grid holds
//! typed cell symbols rather than raw text rows, so the alphabet and the
//! dimensions are enforced at construction time and every access is checked.

use crate::level::CellSymbol;
use crate::{PlatforgeError, PlatforgeResult};
use serde::{Deserialize, Serialize};

/// A fixed-size 2D grid of cell symbols.
///
/// Cells are stored row-major. Mutation is in place and no history is kept;
/// the [`Designer`](crate::Designer) is the sole mutator of a grid it owns.
///
/// # Examples
///
/// ```
/// use platforge::{CellSymbol, Grid};
///
/// let mut grid = Grid::new(4, 3);
/// grid.set(1, 2, CellSymbol::Block).unwrap();
/// assert_eq!(grid.get(1, 2).unwrap(), CellSymbol::Block);
/// assert_eq!(grid.get(0, 0).unwrap(), CellSymbol::Empty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<CellSymbol>,
}

impl Grid {
    /// Creates a grid of the given dimensions filled with empty cells.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![CellSymbol::Empty; (width * height) as usize],
        }
    }

    /// Builds a grid from text rows, validating dimensions and alphabet.
    ///
    /// Fails with [`PlatforgeError::Schema`] if the row count differs from
    /// `height`, any row's length differs from `width`, or a character falls
    /// outside the cell alphabet.
    pub fn from_rows(width: u32, height: u32, rows: &[String]) -> PlatforgeResult<Self> {
        if rows.len() != height as usize {
            return Err(PlatforgeError::Schema(format!(
                "expected {} rows, found {}",
                height,
                rows.len()
            )));
        }

        let mut cells = Vec::with_capacity((width * height) as usize);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width as usize {
                return Err(PlatforgeError::Schema(format!(
                    "row {} has length {}, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, ch) in row.chars().enumerate() {
                let symbol = CellSymbol::from_char(ch).ok_or_else(|| {
                    PlatforgeError::Schema(format!("unknown symbol '{}' at ({}, {})", ch, x, y))
                })?;
                cells.push(symbol);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the symbol at `(x, y)`, or [`PlatforgeError::OutOfRange`] if
    /// the coordinate falls outside the grid.
    pub fn get(&self, x: u32, y: u32) -> PlatforgeResult<CellSymbol> {
        self.check_bounds(x, y)?;
        Ok(self.cells[(y * self.width + x) as usize])
    }

    /// Overwrites the symbol at `(x, y)`, or fails with
    /// [`PlatforgeError::OutOfRange`].
    pub fn set(&mut self, x: u32, y: u32, symbol: CellSymbol) -> PlatforgeResult<()> {
        self.check_bounds(x, y)?;
        self.cells[(y * self.width + x) as usize] = symbol;
        Ok(())
    }

    /// Iterates all cells in row-major order (`y` outer, `x` inner).
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u32, CellSymbol)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &symbol)| {
            let x = i as u32 % self.width;
            let y = i as u32 / self.width;
            (x, y, symbol)
        })
    }

    /// Renders the grid back into text rows.
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.cells[(y * self.width + x) as usize].as_char())
                    .collect()
            })
            .collect()
    }

    fn check_bounds(&self, x: u32, y: u32) -> PlatforgeResult<()> {
        if x >= self.width || y >= self.height {
            return Err(PlatforgeError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(3, 2);
        for (_, _, symbol) in grid.iter_cells() {
            assert_eq!(symbol, CellSymbol::Empty);
        }
        assert_eq!(grid.to_rows(), vec!["...", "..."]);
    }

    #[test]
    fn test_from_rows_round_trip() {
        let rows = vec!["S...".to_string(), ".P..".to_string(), "..GE".to_string()];
        let grid = Grid::from_rows(4, 3, &rows).unwrap();
        assert_eq!(grid.get(0, 0).unwrap(), CellSymbol::Block);
        assert_eq!(grid.get(1, 1).unwrap(), CellSymbol::Spawn);
        assert_eq!(grid.get(3, 2).unwrap(), CellSymbol::Enemy);
        assert_eq!(grid.to_rows(), rows);
    }

    #[test]
    fn test_from_rows_rejects_row_count_mismatch() {
        let rows = vec!["..".to_string()];
        let err = Grid::from_rows(2, 2, &rows).unwrap_err();
        assert!(matches!(err, PlatforgeError::Schema(_)));
    }

    #[test]
    fn test_from_rows_rejects_row_length_mismatch() {
        let rows = vec!["..".to_string(), "...".to_string()];
        let err = Grid::from_rows(2, 2, &rows).unwrap_err();
        assert!(matches!(err, PlatforgeError::Schema(_)));
    }

    #[test]
    fn test_from_rows_rejects_unknown_symbol() {
        let rows = vec!["..".to_string(), ".x".to_string()];
        let err = Grid::from_rows(2, 2, &rows).unwrap_err();
        assert!(matches!(err, PlatforgeError::Schema(_)));
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = Grid::new(2, 2);
        assert!(matches!(
            grid.get(2, 0),
            Err(PlatforgeError::OutOfRange { .. })
        ));
        assert!(matches!(
            grid.set(0, 2, CellSymbol::Block),
            Err(PlatforgeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_iter_cells_is_row_major() {
        let rows = vec!["SP".to_string(), "GE".to_string()];
        let grid = Grid::from_rows(2, 2, &rows).unwrap();
        let order: Vec<(u32, u32)> = grid.iter_cells().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    proptest! {
        #[test]
        fn prop_fresh_grid_dimensions(width in 1u32..32, height in 1u32..32) {
            let grid = Grid::new(width, height);
            let rows = grid.to_rows();
            prop_assert_eq!(rows.len(), height as usize);
            for row in rows {
                prop_assert_eq!(row.chars().count(), width as usize);
                prop_assert!(row.chars().all(|ch| ch == '.'));
            }
        }
    }
}
