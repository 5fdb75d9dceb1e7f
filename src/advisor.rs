//! The greedy hint heuristic. It only ever proposes edges from the tracked
//! solution, scoring each missing edge by how much structure drawing it
//! would create.

use std::cmp::Reverse;

use itertools::Itertools;

use crate::edge::Edge;
use crate::game::Game;

/// Awarded when blocking a candidate strictly increases the number of
/// connected components.
const SEPARATION_WEIGHT: i32 = 10;
/// Awarded when a candidate strictly increases the number of valid regions.
const VALIDITY_WEIGHT: i32 = 5;

/// Pick the best not-yet-drawn solution edge, or `None` if none remain.
///
/// Every candidate re-derives the component and validity views with itself
/// provisionally blocked; acceptable because boards stay small. Ties
/// resolve to the smallest edge in `(orientation, x, y)` order, so
/// identical game states always yield the same hint.
pub(crate) fn suggest(game: &Game) -> Option<Edge> {
    let candidates = game
        .solution()
        .difference(game.edges())
        .copied()
        .collect_vec();

    let components_now = game.component_count_with(None);
    let valid_now = game.valid_region_count_with(None);

    candidates
        .into_iter()
        .map(|edge| {
            let mut score = 0;
            if game.component_count_with(Some(edge)) > components_now {
                score += SEPARATION_WEIGHT;
            }
            if game.valid_region_count_with(Some(edge)) > valid_now {
                score += VALIDITY_WEIGHT;
            }
            (score, edge)
        })
        .max_by_key(|&(score, edge)| (score, Reverse(edge)))
        .map(|(_, edge)| edge)
}
