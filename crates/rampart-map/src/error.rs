//! Map validation errors. Raised at load time, never mid-simulation.

use std::fmt;

use rampart_core::types::GridCoord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Layout has no rows or no columns.
    EmptyLayout,
    /// A layout row has a different length than the first row.
    RaggedLayout {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A layout cell holds something other than 0 (empty) or 1 (path).
    InvalidCell { cell: GridCoord, code: u8 },
    /// No path cells, or an explicit path with no entries.
    EmptyPath,
    /// An explicit path entry lies outside the grid.
    PathCellOutOfBounds { cell: GridCoord },
    /// An explicit path entry is not a path cell in the layout.
    PathCellNotOnPath { cell: GridCoord },
    /// Two consecutive explicit path entries do not share an edge.
    BrokenPath { from: GridCoord, to: GridCoord },
    /// Path cells do not form a single unbranched chain.
    AmbiguousPath,
    /// No map with this id in the catalog.
    UnknownMap { id: String },
    /// Catalog JSON failed to parse.
    Json(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLayout => write!(f, "map layout is empty"),
            Self::RaggedLayout {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::InvalidCell { cell, code } => write!(
                f,
                "layout cell ({}, {}) has invalid code {code}",
                cell.row, cell.col
            ),
            Self::EmptyPath => write!(f, "map has no path"),
            Self::PathCellOutOfBounds { cell } => write!(
                f,
                "path cell ({}, {}) is outside the grid",
                cell.row, cell.col
            ),
            Self::PathCellNotOnPath { cell } => write!(
                f,
                "path cell ({}, {}) is not marked as path in the layout",
                cell.row, cell.col
            ),
            Self::BrokenPath { from, to } => write!(
                f,
                "path step ({}, {}) -> ({}, {}) is not between adjacent cells",
                from.row, from.col, to.row, to.col
            ),
            Self::AmbiguousPath => write!(f, "path cells do not form a single chain"),
            Self::UnknownMap { id } => write!(f, "no map with id '{id}'"),
            Self::Json(msg) => write!(f, "invalid map catalog: {msg}"),
        }
    }
}

impl std::error::Error for MapError {}

impl From<serde_json::Error> for MapError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
