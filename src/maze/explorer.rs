//! Depth-first maze exploration over a move oracle.
//!
//! # Algorithm
//! ```text
//! preconditions: height >= 0, width >= 0, entry legal, exit legal
//! stack = [entry], visited = {entry}
//! loop:
//!     top frame tries its next direction (left, up, right, down)
//!     neighbor == exit        → path = stack cells + exit
//!     visited / rejected      → skip
//!     oracle says legal       → mark visited, push
//!     otherwise               → remember as rejected
//!     frame out of directions → pop
//! stack empty → empty path
//! ```
//!
//! The exit is accepted on coordinate match; it was already confirmed by
//! the precondition. Each in-bounds cell is queried at most once, so a
//! search issues at most `height * width` oracle queries.

use std::collections::HashSet;

use crate::error::{SolverError, SolverResult};
use crate::maze::oracle::{check_move, MoveOracle};
use crate::maze::types::{Direction, MazeDescriptor, MazePath, Position};

/// One cell on the frontier stack and the next direction it will try.
#[derive(Debug, Clone, Copy)]
struct Frame {
    pos: Position,
    next: usize,
}

impl Frame {
    fn new(pos: Position) -> Self {
        Self { pos, next: 0 }
    }

    fn next_neighbor(&mut self) -> Option<Position> {
        let direction = Direction::SEARCH_ORDER.get(self.next)?;
        self.next += 1;
        Some(self.pos.step(*direction))
    }
}

/// Searches one maze for a path from entry to exit.
pub struct MazeExplorer<'a, O> {
    maze: &'a MazeDescriptor,
    oracle: O,
}

impl<'a, O: MoveOracle> MazeExplorer<'a, O> {
    pub fn new(maze: &'a MazeDescriptor, oracle: O) -> Self {
        Self { maze, oracle }
    }

    /// Find a path from entry to exit.
    ///
    /// Returns an empty path when the frontier is exhausted, and
    /// [`SolverError::InvalidMaze`] when the preconditions fail.
    pub async fn solve(&self) -> SolverResult<MazePath> {
        self.check_preconditions().await?;

        let entry = self.maze.entry();
        let exit = self.maze.exit();

        tracing::info!(
            maze_id = %self.maze.id,
            height = self.maze.height,
            width = self.maze.width,
            max_queries = self.maze.area(),
            "Exploring maze"
        );

        if entry == exit {
            return Ok(MazePath::from(vec![entry]));
        }

        let mut visited: HashSet<Position> = HashSet::from([entry]);
        let mut rejected: HashSet<Position> = HashSet::new();
        let mut stack = vec![Frame::new(entry)];

        while let Some(top) = stack.last_mut() {
            let Some(candidate) = top.next_neighbor() else {
                stack.pop();
                continue;
            };

            if candidate == exit {
                let mut cells: Vec<Position> = stack.iter().map(|f| f.pos).collect();
                cells.push(exit);
                tracing::info!(
                    length = cells.len(),
                    explored = visited.len(),
                    rejected = rejected.len(),
                    "Path found"
                );
                return Ok(MazePath::from(cells));
            }

            if visited.contains(&candidate) || rejected.contains(&candidate) {
                continue;
            }

            if check_move(&self.oracle, self.maze, candidate).await {
                visited.insert(candidate);
                stack.push(Frame::new(candidate));
            } else if self.maze.contains(candidate) {
                rejected.insert(candidate);
            }
        }

        tracing::warn!(
            explored = visited.len(),
            rejected = rejected.len(),
            "Frontier exhausted without reaching the exit"
        );
        Ok(MazePath::empty())
    }

    async fn check_preconditions(&self) -> SolverResult<()> {
        let maze = self.maze;

        if maze.height < 0 || maze.width < 0 {
            return Err(invalid(format!("negative dimensions {}x{}", maze.height, maze.width)));
        }
        if !check_move(&self.oracle, maze, maze.entry()).await {
            return Err(invalid(format!("entry {} is not enterable", maze.entry())));
        }
        if !check_move(&self.oracle, maze, maze.exit()).await {
            return Err(invalid(format!("exit {} is not enterable", maze.exit())));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> SolverError {
    tracing::warn!(%reason, "Invalid maze, search not started");
    SolverError::InvalidMaze(reason)
}
