//! # Platforge
//!
//! Grid-based level authoring, validation, and world expansion for block
//! platformers.
//!
//! ## Architecture Overview
//!
//! A level lives as a compact character grid over the closed alphabet
//! `{. S P G E}` and flows through a small pipeline:
//!
//! - **Grid**: bounds-checked 2D storage of cell symbols
//! - **Designer**: mutation API over a grid that enforces the singleton
//!   invariants for the player spawn and the goal
//! - **Level Record**: the serializable level description, produced by the
//!   designer or loaded from a JSON file
//! - **Validator**: structural and playability checks on a record
//! - **Expander**: deterministic mapping from a validated record to
//!   world-space placements
//!
//! The rendering/physics host consumes the placements through the narrow
//! [`WorldHost`] trait; everything above that boundary is synchronous,
//! single-threaded, and free of I/O.

pub mod expand;
pub mod host;
pub mod level;

pub use expand::{expand, SkyboxRequest, Vec3, WorldPlacements};
pub use host::{stage_level, RecordingHost, StagedCall, WorldHost};
pub use level::{
    validate, CellSymbol, Designer, Grid, GridPos, LevelRecord, Palette, Skybox, SkyboxSource,
    ValidationError,
};

/// Core error type for the platforge pipeline.
#[derive(thiserror::Error, Debug)]
pub enum PlatforgeError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Structural mismatch between declared and actual grid dimensions,
    /// or a symbol outside the cell alphabet
    #[error("Schema error: {0}")]
    Schema(String),

    /// A mutation targeted a cell outside the grid bounds
    #[error("cell ({x}, {y}) out of range for {width}x{height} grid")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Expansion could not resolve a required singleton placement
    #[error("Incomplete level: {0}")]
    IncompleteLevel(String),
}

/// Result type used throughout the platforge codebase.
pub type PlatforgeResult<T> = Result<T, PlatforgeError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
