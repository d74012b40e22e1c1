//! Maze value types: descriptor, coordinates, and the solution path.

use serde::{Deserialize, Serialize};

/// Opaque maze identifier handed out by the service.
///
/// The service may encode it as a JSON string or number; either way it is
/// kept as text and placed as one path segment in per-maze endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawMazeId", into = "String")]
pub struct MazeId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMazeId {
    Text(String),
    Integer(i64),
    Unsigned(u64),
}

impl From<RawMazeId> for MazeId {
    fn from(raw: RawMazeId) -> Self {
        match raw {
            RawMazeId::Text(s) => Self(s),
            RawMazeId::Integer(n) => Self(n.to_string()),
            RawMazeId::Unsigned(n) => Self(n.to_string()),
        }
    }
}

impl From<MazeId> for String {
    fn from(id: MazeId) -> Self {
        id.0
    }
}

impl From<&str> for MazeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl MazeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MazeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A maze as described by the service at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MazeDescriptor {
    pub id: MazeId,
    pub height: i64,
    pub width: i64,
}

impl MazeDescriptor {
    pub fn new(id: impl Into<MazeId>, height: i64, width: i64) -> Self {
        Self {
            id: id.into(),
            height,
            width,
        }
    }

    /// Top-left cell.
    pub fn entry(&self) -> Position {
        Position::new(0, 0)
    }

    /// Bottom-right cell.
    pub fn exit(&self) -> Position {
        Position::new(self.width - 1, self.height - 1)
    }

    /// Whether `pos` lies inside `[0, width-1] x [0, height-1]`.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    /// Number of cells; zero for degenerate dimensions.
    pub fn area(&self) -> u64 {
        if self.height <= 0 || self.width <= 0 {
            return 0;
        }
        (self.height as u64).saturating_mul(self.width as u64)
    }
}

/// One step in a cardinal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Neighbor priority used by the search.
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    fn delta(self) -> (i64, i64) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// A 0-indexed cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Body the service must echo when confirming this cell.
    pub fn confirmation(&self) -> String {
        format!("Position: {}, {}", self.x, self.y)
    }

    /// Whether `other` is exactly one unit away along one axis.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Ordered cells from entry to exit. Empty when no path was found.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MazePath(Vec<Position>);

impl MazePath {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn cells(&self) -> &[Position] {
        &self.0
    }

    /// Whether every consecutive pair is adjacent and no cell repeats.
    pub fn is_well_formed(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.0.len());
        self.0.iter().all(|p| seen.insert(*p))
            && self.0.windows(2).all(|w| w[0].is_adjacent(&w[1]))
    }
}

impl From<Vec<Position>> for MazePath {
    fn from(cells: Vec<Position>) -> Self {
        Self(cells)
    }
}
