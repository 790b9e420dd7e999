//! A perfect solver for the board game 'Connect 4'
//!
//! The solver uses an optimised game tree search to compute the
//! mathematically exact score of any position, together with the number
//! of nodes explored on the way.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_solver::{bitboard::Position, solver::Solver};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut solver = Solver::new();
//! let score = solver.solve(Position::from_moves("112233")?)?;
//!
//! assert_eq!(score, 18);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod bitboard;

pub mod solver;

pub mod transposition_table;


pub use bitboard::Position;
pub use solver::Solver;
pub use transposition_table::TranspositionTable;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// ensure that the given dimensions fit in a u64 for the bitboard representation
const_assert!(WIDTH * (HEIGHT + 1) < 64);
