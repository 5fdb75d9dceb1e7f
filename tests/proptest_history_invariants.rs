//! Property-based invariant tests for the session edge set and history.
//!
//! These verify the algebraic structure of edits for any sequence of moves:
//!
//! 1. Toggling the same edge twice restores the drawn set and the solved
//!    flag.
//! 2. Undoing every move returns to the freshly reset state, and one more
//!    undo reports nothing to do.
//! 3. Redoing after a full unwind reproduces the pre-undo state exactly.
//! 4. Fixed border edges are never toggleable and never enter the history.
//! 5. Arrow placement keeps at most one arrow per cell.

use std::num::NonZero;

use proptest::prelude::*;
use tentai::{Actor, Edge, Game, Location, Puzzle, Rect};

const N: usize = 5;

fn fixture() -> Game {
    Game::from_puzzle(Puzzle::from_rects(
        NonZero::new(N).unwrap(),
        vec![
            Rect { x: 0, y: 0, w: 5, h: 2 },
            Rect { x: 0, y: 2, w: 5, h: 3 },
        ],
    ))
}

// ── Strategies ──────────────────────────────────────────────────────────

fn interior_edge_strategy() -> impl Strategy<Value = Edge> {
    prop_oneof![
        (0..N, 1..N).prop_map(|(x, y)| Edge::horizontal(x, y)),
        (1..N, 0..N).prop_map(|(x, y)| Edge::vertical(x, y)),
    ]
}

fn border_edge_strategy() -> impl Strategy<Value = Edge> {
    prop_oneof![
        (0..N).prop_map(|x| Edge::horizontal(x, 0)),
        (0..N).prop_map(|x| Edge::horizontal(x, N)),
        (0..N).prop_map(|y| Edge::vertical(0, y)),
        (0..N).prop_map(|y| Edge::vertical(N, y)),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Double toggle is the identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn toggle_twice_is_identity(
        edges in prop::collection::vec(interior_edge_strategy(), 0..20),
        probe in interior_edge_strategy(),
    ) {
        let mut game = fixture();
        for edge in edges {
            game.toggle_edge(edge, Actor::Player);
        }

        let before = game.edges().clone();
        let solved_before = game.is_solved();

        prop_assert!(game.toggle_edge(probe, Actor::Player));
        prop_assert!(game.toggle_edge(probe, Actor::Player));

        prop_assert_eq!(game.edges(), &before);
        prop_assert_eq!(game.is_solved(), solved_before);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Undo unwinds every move
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn undo_unwinds_every_move(
        edges in prop::collection::vec(interior_edge_strategy(), 0..25),
    ) {
        let mut game = fixture();
        let initial = game.edges().clone();
        for edge in &edges {
            game.toggle_edge(*edge, Actor::Player);
        }

        for _ in 0..edges.len() {
            prop_assert!(game.undo());
        }
        prop_assert!(!game.undo());
        prop_assert_eq!(game.edges(), &initial);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Redo replays every move
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn redo_replays_every_move(
        edges in prop::collection::vec(interior_edge_strategy(), 0..25),
    ) {
        let mut game = fixture();
        for edge in &edges {
            game.toggle_edge(*edge, Actor::Player);
        }
        let done = game.edges().clone();

        for _ in 0..edges.len() {
            game.undo();
        }
        for _ in 0..edges.len() {
            prop_assert!(game.redo());
        }
        prop_assert!(!game.redo());
        prop_assert_eq!(game.edges(), &done);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. The border is untouchable
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn border_is_never_toggleable(edge in border_edge_strategy()) {
        let mut game = fixture();
        prop_assert!(!game.toggle_edge(edge, Actor::Player));
        prop_assert!(game.edges().contains(&edge));
        prop_assert!(game.history().is_empty());
        prop_assert!(!game.undo());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Arrows are one-per-cell
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arrows_stay_one_per_cell(
        placements in prop::collection::vec(((0..N, 0..N), 0usize..2), 1..30),
    ) {
        let mut game = fixture();
        for ((x, y), dot) in placements {
            game.place_arrow(Location(x, y), dot);
        }

        let mut cells: Vec<Location> = game.arrows().iter().map(|a| a.cell).collect();
        cells.sort_unstable();
        cells.dedup();
        prop_assert_eq!(cells.len(), game.arrows().len());
    }
}
