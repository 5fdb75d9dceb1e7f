#![warn(missing_docs)]

//! # `tentai`
//!
//! An engine for [Galaxies](https://www.chiark.greenend.org.uk/~sgtatham/puzzles/js/galaxies.html)
//! (also known as Tentai Show) puzzles: a square grid is secretly partitioned
//! into regions, each marked by a center dot and required to be 180-degree
//! rotationally symmetric about it. The player draws edges along the grid
//! lattice to recover the partition.
//!
//! Begin with a [`Game`]: [`Game::new`] generates a random puzzle,
//! [`Game::from_seed`] a reproducible one, and [`Game::from_puzzle`] wraps a
//! known partition built with [`Puzzle::from_rects`] or
//! [`generate`](puzzle::generate). Drive play with
//! [`toggle_edge`](Game::toggle_edge), [`undo`](Game::undo) /
//! [`redo`](Game::redo), and [`request_hint`](Game::request_hint); pull
//! [`valid_cells`](Game::valid_cells), [`component_count`](Game::component_count),
//! and [`is_solved`](Game::is_solved) to present the derived state.
//!
//! # Internals
//! Generation is constructive: the board starts as one rectangle which is
//! repeatedly split at random offsets, so a valid (though not necessarily
//! unique) solution always exists. The live board is expressed as an
//! undirected graph over cells, where a drawn edge removes the connection
//! between its two cells; regions are the connected components. Components
//! and region validity are recomputed from the edge set on every query
//! rather than cached; boards are at most 15 x 15, and a view that cannot
//! go stale beats incremental bookkeeping at that size.
//!
//! The hint engine is a greedy heuristic over the edges still missing from
//! the known solution, not a general solver: each candidate is scored by
//! whether drawing it would separate a new region and whether it would
//! complete a valid one, and the best-scoring edge wins.
//!
//! The engine is synchronous and single-threaded; every operation completes
//! before returning, and hosts must serialize access themselves.

pub use edge::{Edge, Orientation};
pub use game::{Actor, Arrow, Game, Move};
pub use location::Location;
pub use puzzle::{Dot, Puzzle, Rect};

pub(crate) mod advisor;
pub(crate) mod edge;
pub(crate) mod game;
pub(crate) mod graph;
pub(crate) mod location;
pub mod puzzle;
pub(crate) mod region;
