//! Blind maze search.
//!
//! # Data Flow
//! ```text
//! MazeExplorer (explorer.rs)
//!     → check_move (oracle.rs: bounds check, fatal → blocked)
//!     → MoveOracle impl
//!         RemoteMoveOracle: maze service via client + retries
//!         GridOracle (grid.rs): in-memory layout
//! ```
//!
//! The explorer never holds the grid; it learns walls one query at a time.

pub mod explorer;
pub mod grid;
pub mod oracle;
pub mod types;

pub use explorer::MazeExplorer;
pub use grid::GridOracle;
pub use oracle::{MoveOracle, MoveOutcome, RemoteMoveOracle};
pub use types::{Direction, MazeDescriptor, MazeId, MazePath, Position};
