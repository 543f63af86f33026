//! # Level Module
//!
//! The character-grid level representation and everything that operates on it:
//! the bounds-checked grid, the designer mutation API, the serializable level
//! record, and the playability validator.

pub mod designer;
pub mod grid;
pub mod record;
pub mod validator;

pub use designer::*;
pub use grid::*;
pub use record::*;
pub use validator::*;

use serde::{Deserialize, Serialize};

/// A single cell symbol from the closed level alphabet.
///
/// # Examples
///
/// ```
/// use platforge::CellSymbol;
///
/// assert_eq!(CellSymbol::from_char('S'), Some(CellSymbol::Block));
/// assert_eq!(CellSymbol::Spawn.as_char(), 'P');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellSymbol {
    /// `.` — empty space
    Empty,
    /// `S` — solid block
    Block,
    /// `P` — player spawn (singleton)
    Spawn,
    /// `G` — level goal (singleton)
    Goal,
    /// `E` — enemy spawn
    Enemy,
}

impl CellSymbol {
    /// Parses a symbol from its grid character. Returns `None` for anything
    /// outside the alphabet.
    pub fn from_char(ch: char) -> Option<CellSymbol> {
        match ch {
            '.' => Some(CellSymbol::Empty),
            'S' => Some(CellSymbol::Block),
            'P' => Some(CellSymbol::Spawn),
            'G' => Some(CellSymbol::Goal),
            'E' => Some(CellSymbol::Enemy),
            _ => None,
        }
    }

    /// Returns the grid character for this symbol.
    pub fn as_char(self) -> char {
        match self {
            CellSymbol::Empty => '.',
            CellSymbol::Block => 'S',
            CellSymbol::Spawn => 'P',
            CellSymbol::Goal => 'G',
            CellSymbol::Enemy => 'E',
        }
    }

    /// The next symbol in the editor's click cycle:
    /// `. -> S -> P -> G -> E -> .`
    pub fn next(self) -> CellSymbol {
        match self {
            CellSymbol::Empty => CellSymbol::Block,
            CellSymbol::Block => CellSymbol::Spawn,
            CellSymbol::Spawn => CellSymbol::Goal,
            CellSymbol::Goal => CellSymbol::Enemy,
            CellSymbol::Enemy => CellSymbol::Empty,
        }
    }
}

/// A 2D grid coordinate. `x` indexes columns, `y` indexes rows; `(0, 0)` is
/// the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    /// Creates a new grid position.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_char_round_trip() {
        for ch in ['.', 'S', 'P', 'G', 'E'] {
            let sym = CellSymbol::from_char(ch).unwrap();
            assert_eq!(sym.as_char(), ch);
        }
    }

    #[test]
    fn test_symbol_rejects_unknown_chars() {
        assert_eq!(CellSymbol::from_char('x'), None);
        assert_eq!(CellSymbol::from_char(' '), None);
        assert_eq!(CellSymbol::from_char('p'), None);
    }

    #[test]
    fn test_editor_cycle_covers_alphabet() {
        let mut seen = vec![CellSymbol::Empty];
        let mut current = CellSymbol::Empty;
        for _ in 0..4 {
            current = current.next();
            assert!(!seen.contains(&current));
            seen.push(current);
        }
        assert_eq!(current.next(), CellSymbol::Empty);
    }
}
