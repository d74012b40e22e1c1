//! In-memory oracle over a fixed grid.
//!
//! Rows are text lines: `.` open, `#` wall, `!` a cell whose query fails.
//! Every query is counted so callers can assert on oracle traffic.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use thiserror::Error;

use crate::client::ApiError;
use crate::error::{operation, SolverError};
use crate::maze::oracle::{MoveOracle, MoveOutcome};
use crate::maze::types::{MazeDescriptor, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Open,
    Wall,
    Faulty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has width {found}, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
    #[error("unknown tile {tile:?} at ({x}, {y})")]
    UnknownTile { tile: char, x: usize, y: usize },
}

/// Deterministic oracle for a known layout.
#[derive(Debug)]
pub struct GridOracle {
    tiles: Vec<Vec<Tile>>,
    queries: AtomicUsize,
    log: Mutex<Vec<Position>>,
}

impl GridOracle {
    /// Parse a grid from rows of `.`, `#` and `!`.
    pub fn parse(rows: &[&str]) -> Result<Self, GridError> {
        let expected = rows.first().ok_or(GridError::Empty)?.chars().count();
        let mut tiles = Vec::with_capacity(rows.len());

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != expected {
                return Err(GridError::Ragged { row: y, expected, found });
            }
            let parsed = row
                .chars()
                .enumerate()
                .map(|(x, c)| match c {
                    '.' => Ok(Tile::Open),
                    '#' => Ok(Tile::Wall),
                    '!' => Ok(Tile::Faulty),
                    tile => Err(GridError::UnknownTile { tile, x, y }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            tiles.push(parsed);
        }

        Ok(Self {
            tiles,
            queries: AtomicUsize::new(0),
            log: Mutex::new(Vec::new()),
        })
    }

    /// A wall-free grid.
    pub fn open(height: usize, width: usize) -> Self {
        Self {
            tiles: vec![vec![Tile::Open; width]; height],
            queries: AtomicUsize::new(0),
            log: Mutex::new(Vec::new()),
        }
    }

    pub fn height(&self) -> usize {
        self.tiles.len()
    }

    pub fn width(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    /// Descriptor matching this grid's dimensions.
    pub fn descriptor(&self, id: &str) -> MazeDescriptor {
        MazeDescriptor::new(id, self.height() as i64, self.width() as i64)
    }

    /// Queries answered so far.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// Queried cells in query order.
    pub fn query_log(&self) -> Vec<Position> {
        self.log.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Distinct cells queried so far.
    pub fn distinct_queries(&self) -> usize {
        self.query_log().into_iter().collect::<HashSet<_>>().len()
    }

    fn tile(&self, pos: Position) -> Option<Tile> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        self.tiles.get(y)?.get(x).copied()
    }
}

impl MoveOracle for GridOracle {
    async fn check_move(&self, pos: Position) -> MoveOutcome {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut log) = self.log.lock() {
            log.push(pos);
        }

        match self.tile(pos) {
            Some(Tile::Open) => MoveOutcome::Legal,
            Some(Tile::Wall) | None => MoveOutcome::Illegal,
            Some(Tile::Faulty) => MoveOutcome::Fatal(SolverError::remote(
                operation::CHECK_MOVE,
                ApiError::Status(500),
            )),
        }
    }
}
