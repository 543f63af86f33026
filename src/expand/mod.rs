//! # Level Expander
//!
//! Deterministic mapping from a [`LevelRecord`] into world-space placements
//! for the rendering/physics host. The grid is centered on the world origin:
//! with a unit cell size, cell `(x, y)` maps to world
//! `(-width/2 + 0.5 + x, 0.5, -height/2 + 0.5 + y)`, half a cell above the
//! ground plane.
//!
//! Placements are ephemeral: they are recomputed on every expansion and owned
//! by the caller, never persisted.

use crate::level::{CellSymbol, Grid, GridPos, LevelRecord};
use crate::{PlatforgeError, PlatforgeResult};
use serde::{Deserialize, Serialize};

/// A world-space position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// Creates a new vector.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A skybox asset request forwarded to the host. The expander never fetches
/// the URL itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkyboxRequest {
    pub url: String,
}

/// The full placement set for one expanded level.
///
/// Placements carry geometry and identity only; material and color selection
/// from the record's palette is the host's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldPlacements {
    /// Player spawn position.
    pub spawn: Vec3,
    /// Goal marker position (renderable, collidable as a trigger).
    pub goal: Vec3,
    /// One static block per `S` cell, in row-major grid order.
    pub blocks: Vec<Vec3>,
    /// Enemy spawns: grid-derived `E` cells first, then any explicit
    /// `enemies` entries from the record. Duplicates are kept.
    pub enemies: Vec<Vec3>,
    /// Deferred skybox request, if the record carries one.
    pub skybox: Option<SkyboxRequest>,
}

/// Expands a level record into world placements.
///
/// Spawn and goal resolution: the last `P`/`G` cell in row-major scan order
/// wins; only when the grid carries no such cell does the record's explicit
/// `spawn`/`goal` field apply, mapped through the same cell-center transform.
/// If neither source yields a position the level cannot be staged and the
/// expansion fails with [`PlatforgeError::IncompleteLevel`].
///
/// Validation is not implied here. Callers should run
/// [`validate`](crate::validate) first; an `IncompleteLevel` error on a
/// record that was never validated is the expected symptom of skipping it.
pub fn expand(record: &LevelRecord) -> PlatforgeResult<WorldPlacements> {
    let grid = Grid::from_rows(record.width, record.height, &record.grid)?;

    let offset_x = -(record.width as f32) / 2.0 + 0.5;
    let offset_z = -(record.height as f32) / 2.0 + 0.5;
    let to_world =
        |pos: GridPos| Vec3::new(offset_x + pos.x as f32, 0.5, offset_z + pos.y as f32);

    let mut blocks = Vec::new();
    let mut enemies = Vec::new();
    let mut grid_spawn = None;
    let mut grid_goal = None;

    for (x, y, symbol) in grid.iter_cells() {
        let pos = GridPos::new(x, y);
        match symbol {
            CellSymbol::Block => blocks.push(to_world(pos)),
            CellSymbol::Spawn => grid_spawn = Some(pos),
            CellSymbol::Goal => grid_goal = Some(pos),
            CellSymbol::Enemy => enemies.push(to_world(pos)),
            CellSymbol::Empty => {}
        }
    }

    // Grid symbols beat the explicit fields; the fields only fill gaps.
    let spawn = grid_spawn.or(record.spawn).map(to_world).ok_or_else(|| {
        PlatforgeError::IncompleteLevel("no player spawn in grid or spawn field".to_string())
    })?;
    let goal = grid_goal.or(record.goal).map(to_world).ok_or_else(|| {
        PlatforgeError::IncompleteLevel("no goal in grid or goal field".to_string())
    })?;

    if let Some(extra) = &record.enemies {
        enemies.extend(extra.iter().copied().map(to_world));
    }

    log::debug!(
        "expanded level {}: {} blocks, {} enemies",
        record.id.as_deref().unwrap_or("<unnamed>"),
        blocks.len(),
        enemies.len()
    );

    Ok(WorldPlacements {
        spawn,
        goal,
        blocks,
        enemies,
        skybox: record.skybox.as_ref().map(|skybox| SkyboxRequest {
            url: skybox.url.clone(),
        }),
    })
}
