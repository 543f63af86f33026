//! # Level Designer
//!
//! Mutation API over a [`Grid`] that enforces the domain invariants plain
//! cell storage cannot: at most one player spawn and at most one goal exist
//! at any time. The designer also carries the level metadata (theme, palette,
//! id/name) that lives alongside the grid rather than inside it, and turns
//! the whole thing into a [`LevelRecord`] snapshot on [`build`](Designer::build).

use crate::level::{CellSymbol, Grid, GridPos, LevelRecord, Palette};
use crate::PlatforgeResult;

/// In-memory level editor backed by a character grid.
///
/// The designer is the sole mutator of the grid it owns, so no locking is
/// needed; one designer per grid at a time.
///
/// # Examples
///
/// ```
/// use platforge::Designer;
///
/// let mut designer = Designer::new(4, 4);
/// designer.set_block(0, 0).unwrap();
/// designer.set_spawn(1, 1).unwrap();
/// designer.set_goal(2, 2).unwrap();
///
/// let record = designer.build();
/// assert_eq!(record.grid, vec!["S...", ".P..", "..G.", "...."]);
/// ```
#[derive(Debug, Clone)]
pub struct Designer {
    grid: Grid,
    id: Option<String>,
    name: Option<String>,
    theme: Option<String>,
    palette: Option<Palette>,
}

impl Designer {
    /// Creates a designer over a fresh all-empty grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            grid: Grid::new(width, height),
            id: None,
            name: None,
            theme: None,
            palette: None,
        }
    }

    /// Reconstructs a designer from an existing record, re-applying its
    /// metadata.
    ///
    /// Fails with [`Schema`](crate::PlatforgeError::Schema) if the record's
    /// grid disagrees with its declared `width`/`height` or uses a symbol
    /// outside the alphabet.
    pub fn from_record(record: &LevelRecord) -> PlatforgeResult<Self> {
        let grid = Grid::from_rows(record.width, record.height, &record.grid)?;
        Ok(Self {
            grid,
            id: record.id.clone(),
            name: record.name.clone(),
            theme: record.theme.clone(),
            palette: record.palette.clone(),
        })
    }

    /// Read access to the underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Marks a cell as a solid block, overwriting whatever was there.
    pub fn set_block(&mut self, x: u32, y: u32) -> PlatforgeResult<()> {
        self.grid.set(x, y, CellSymbol::Block)
    }

    /// Clears a cell back to empty space.
    pub fn clear_cell(&mut self, x: u32, y: u32) -> PlatforgeResult<()> {
        self.grid.set(x, y, CellSymbol::Empty)
    }

    /// Sets the player spawn, clearing any previous spawn cell first so at
    /// most one `P` exists after the call.
    pub fn set_spawn(&mut self, x: u32, y: u32) -> PlatforgeResult<()> {
        self.clear_all(CellSymbol::Spawn);
        self.grid.set(x, y, CellSymbol::Spawn)
    }

    /// Sets the goal, clearing any previous goal cell first so at most one
    /// `G` exists after the call.
    pub fn set_goal(&mut self, x: u32, y: u32) -> PlatforgeResult<()> {
        self.clear_all(CellSymbol::Goal);
        self.grid.set(x, y, CellSymbol::Goal)
    }

    /// Adds an enemy spawn. Enemies are not singletons; existing `E` cells
    /// stay put.
    pub fn add_enemy(&mut self, x: u32, y: u32) -> PlatforgeResult<()> {
        self.grid.set(x, y, CellSymbol::Enemy)
    }

    /// Places `symbol` through the mutator that owns its invariant. This is
    /// the dispatch an editor cell-cycling click goes through.
    pub fn apply(&mut self, x: u32, y: u32, symbol: CellSymbol) -> PlatforgeResult<()> {
        match symbol {
            CellSymbol::Empty => self.clear_cell(x, y),
            CellSymbol::Block => self.set_block(x, y),
            CellSymbol::Spawn => self.set_spawn(x, y),
            CellSymbol::Goal => self.set_goal(x, y),
            CellSymbol::Enemy => self.add_enemy(x, y),
        }
    }

    /// Sets the visual theme name.
    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.theme = Some(theme.into());
    }

    /// Merges a partial palette into the designer's palette. Fields absent
    /// from `partial` keep their previously set values.
    pub fn set_palette(&mut self, partial: Palette) {
        match &mut self.palette {
            Some(palette) => palette.merge(partial),
            None => self.palette = Some(partial),
        }
    }

    /// Sets the record id and display name carried into built records.
    pub fn set_identity(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.id = Some(id.into());
        self.name = Some(name.into());
    }

    /// Builds a [`LevelRecord`] snapshot by scanning the grid once.
    ///
    /// The scan is row-major (`y` outer, `x` inner). If the grid was
    /// constructed externally with duplicate `P` or `G` cells, the last one
    /// encountered wins; that tie-break is deliberate at this layer, and the
    /// validator is what rejects such records as malformed input.
    pub fn build(&self) -> LevelRecord {
        let mut spawn = None;
        let mut goal = None;
        let mut enemies = Vec::new();

        for (x, y, symbol) in self.grid.iter_cells() {
            match symbol {
                CellSymbol::Spawn => spawn = Some(GridPos::new(x, y)),
                CellSymbol::Goal => goal = Some(GridPos::new(x, y)),
                CellSymbol::Enemy => enemies.push(GridPos::new(x, y)),
                CellSymbol::Empty | CellSymbol::Block => {}
            }
        }

        LevelRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            width: self.grid.width(),
            height: self.grid.height(),
            grid: self.grid.to_rows(),
            spawn,
            goal,
            enemies: if enemies.is_empty() {
                None
            } else {
                Some(enemies)
            },
            theme: self.theme.clone(),
            palette: self.palette.clone(),
            skybox: None,
            meta: None,
        }
    }

    fn clear_all(&mut self, symbol: CellSymbol) {
        let matches: Vec<(u32, u32)> = self
            .grid
            .iter_cells()
            .filter(|&(_, _, cell)| cell == symbol)
            .map(|(x, y, _)| (x, y))
            .collect();
        for (x, y) in matches {
            // coordinates come from the iterator, always in bounds
            let _ = self.grid.set(x, y, CellSymbol::Empty);
        }
    }
}
