use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::advisor;
use crate::edge::{self, Edge};
use crate::graph;
use crate::location::{Dimension, Location};
use crate::puzzle::{self, Dot, Puzzle, Rect};
use crate::region;

/// Who performed a move.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Actor {
    /// A move made through the host application's input surface.
    Player,
    /// A move applied by [`Game::request_hint`].
    Advisor,
}

/// One history entry, carrying enough to replay the toggle or invert it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// The toggled edge.
    pub edge: Edge,
    /// `true` if the toggle added the edge, `false` if it removed it.
    pub added: bool,
    /// Who made the move.
    pub actor: Actor,
}

/// A per-cell marker pointing at a dot. Purely cosmetic; arrows never
/// affect validity or solving.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrow {
    /// The annotated cell.
    pub cell: Location,
    /// Index into [`Game::dots`] of the dot the arrow points at.
    pub dot: usize,
}

/// A live puzzle session: the current edge set, the fixed border, the
/// tracked solution, and the undo/redo history.
///
/// The session owns all of its mutable state exclusively and every
/// operation runs to completion before returning. Hosts driving it from an
/// event loop must serialize calls onto one logical thread; no internal
/// locking is provided.
///
/// Derived views ([`valid_cells`](Self::valid_cells),
/// [`component_count`](Self::component_count)) are recomputed from the edge
/// set on demand rather than cached, so they always reflect the current
/// state.
pub struct Game {
    puzzle: Puzzle,
    fixed: HashSet<Edge>,
    edges: HashSet<Edge>,
    solution: HashSet<Edge>,
    history: Vec<Move>,
    redo_stack: Vec<Move>,
    arrows: Vec<Arrow>,
    rng: StdRng,
}

impl Game {
    /// Start a session on a freshly generated puzzle.
    pub fn new(size: Dimension) -> Self {
        let mut rng = StdRng::from_entropy();
        let puzzle = puzzle::generate(size, None, &mut rng);
        Self::with_parts(puzzle, rng)
    }

    /// Start a session whose puzzle generation (now and on every subsequent
    /// [`new_puzzle`](Self::new_puzzle)) is fully determined by `seed`.
    pub fn from_seed(size: Dimension, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let puzzle = puzzle::generate(size, None, &mut rng);
        Self::with_parts(puzzle, rng)
    }

    /// Start a session on a known puzzle, e.g. one built with
    /// [`Puzzle::from_rects`] or restored from persisted state.
    pub fn from_puzzle(puzzle: Puzzle) -> Self {
        Self::with_parts(puzzle, StdRng::from_entropy())
    }

    fn with_parts(puzzle: Puzzle, rng: StdRng) -> Self {
        let fixed = edge::border(puzzle.size());
        let solution = puzzle.solution_edges().difference(&fixed).copied().collect();
        Self {
            edges: fixed.clone(),
            fixed,
            solution,
            puzzle,
            history: Vec::new(),
            redo_stack: Vec::new(),
            arrows: Vec::new(),
            rng,
        }
    }

    /// Replace the puzzle with a fresh random one and reset the session.
    pub fn new_puzzle(&mut self) {
        self.puzzle = puzzle::generate(self.size(), None, &mut self.rng);
        self.fixed = edge::border(self.puzzle.size());
        self.solution = self.puzzle.solution_edges().difference(&self.fixed).copied().collect();
        self.reset();
    }

    /// Return to a fresh attempt at the same puzzle: only the border is
    /// drawn, and both history stacks and all arrows are cleared.
    pub fn reset(&mut self) {
        self.edges = self.fixed.clone();
        self.history.clear();
        self.redo_stack.clear();
        self.arrows.clear();
    }

    /// Flip `edge` in the drawn set.
    ///
    /// Returns `false` without touching anything if `edge` is part of the
    /// fixed border. Otherwise records the move, clears the redo stack, and
    /// returns `true`.
    pub fn toggle_edge(&mut self, edge: Edge, actor: Actor) -> bool {
        if self.fixed.contains(&edge) {
            return false;
        }

        let added = self.edges.insert(edge);
        if !added {
            self.edges.remove(&edge);
        }
        self.history.push(Move { edge, added, actor });
        self.redo_stack.clear();
        true
    }

    /// Invert the most recent move. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        let Some(mv) = self.history.pop() else {
            return false;
        };
        if mv.added {
            self.edges.remove(&mv.edge);
        } else {
            self.edges.insert(mv.edge);
        }
        self.redo_stack.push(mv);
        true
    }

    /// Re-apply the most recently undone move. Returns `false` if there is
    /// none.
    pub fn redo(&mut self) -> bool {
        let Some(mv) = self.redo_stack.pop() else {
            return false;
        };
        if mv.added {
            self.edges.insert(mv.edge);
        } else {
            self.edges.remove(&mv.edge);
        }
        self.history.push(mv);
        true
    }

    /// Whether the drawn internal edges match the solution exactly.
    pub fn is_solved(&self) -> bool {
        self.drawn() == self.solution
    }

    /// Draw the complete solution directly. Bypasses the move history:
    /// nothing is recorded and both stacks are left alone.
    pub fn reveal_solution(&mut self) {
        self.edges = self.fixed.union(&self.solution).copied().collect();
    }

    /// Ask the greedy advisor for the best missing solution edge and apply
    /// it. Returns the applied edge, or `None` when every solution edge is
    /// already drawn.
    pub fn request_hint(&mut self) -> Option<Edge> {
        let edge = advisor::suggest(self)?;
        self.toggle_edge(edge, Actor::Advisor);
        Some(edge)
    }

    /// Place an arrow on `cell` pointing at dot index `dot`, replacing any
    /// arrow already on that cell.
    pub fn place_arrow(&mut self, cell: Location, dot: usize) {
        if let Some(existing) = self.arrows.iter_mut().find(|arrow| arrow.cell == cell) {
            existing.dot = dot;
        } else {
            self.arrows.push(Arrow { cell, dot });
        }
    }

    /// Remove the arrow on `cell`. Returns `false` if there was none.
    pub fn remove_arrow(&mut self, cell: Location) -> bool {
        let before = self.arrows.len();
        self.arrows.retain(|arrow| arrow.cell != cell);
        self.arrows.len() != before
    }

    /// Board size `N`.
    pub fn size(&self) -> Dimension {
        self.puzzle.size()
    }

    /// The underlying puzzle.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Edges currently drawn, fixed border included.
    pub fn edges(&self) -> &HashSet<Edge> {
        &self.edges
    }

    /// The always-present outer border.
    pub fn fixed(&self) -> &HashSet<Edge> {
        &self.fixed
    }

    /// Galaxy centers.
    pub fn dots(&self) -> &[Dot] {
        self.puzzle.dots()
    }

    /// The rectangle partition behind the puzzle.
    pub fn rects(&self) -> &[Rect] {
        self.puzzle.rects()
    }

    /// User-placed arrows, in placement order.
    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Undone moves eligible for [`redo`](Self::redo), oldest first.
    pub fn redo_stack(&self) -> &[Move] {
        &self.redo_stack
    }

    /// Number of regions the current edge set separates the board into.
    pub fn component_count(&self) -> usize {
        self.component_count_with(None)
    }

    /// Every cell of every currently valid region, for highlighting.
    pub fn valid_cells(&self) -> HashSet<Location> {
        self.valid_components(None).into_iter().flatten().collect()
    }

    pub(crate) fn solution(&self) -> &HashSet<Edge> {
        &self.solution
    }

    pub(crate) fn component_count_with(&self, extra: Option<Edge>) -> usize {
        let graph = graph::adjacency(self.size(), &self.blocked_with(extra));
        graph::components(self.size(), &graph).len()
    }

    pub(crate) fn valid_region_count_with(&self, extra: Option<Edge>) -> usize {
        self.valid_components(extra).len()
    }

    fn drawn(&self) -> HashSet<Edge> {
        self.edges.difference(&self.fixed).copied().collect()
    }

    fn blocked_with(&self, extra: Option<Edge>) -> HashSet<Edge> {
        let mut blocked = self.edges.clone();
        blocked.extend(extra);
        blocked
    }

    fn valid_components(&self, extra: Option<Edge>) -> Vec<Vec<Location>> {
        let graph = graph::adjacency(self.size(), &self.blocked_with(extra));
        graph::components(self.size(), &graph)
            .into_iter()
            .filter(|component| {
                let cells = component.iter().copied().collect::<HashSet<_>>();
                region::is_valid(&cells, self.puzzle.dots())
            })
            .collect_vec()
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // one character per half-cell: corners +, drawn edges - and |, dots o
        let n = self.size().get();
        let side = 2 * n + 1;
        let mut grid = Array2::from_shape_fn((side, side), |(row, col)| match (col % 2, row % 2) {
            (0, 0) => '+',
            (1, 0) if self.edges.contains(&Edge::horizontal(col / 2, row / 2)) => '-',
            (0, 1) if self.edges.contains(&Edge::vertical(col / 2, row / 2)) => '|',
            _ => ' ',
        });

        for dot in self.puzzle.dots() {
            grid[((2.0 * dot.1) as usize, (2.0 * dot.0) as usize)] = 'o';
        }

        let mut out = String::with_capacity(side * (side + 1));
        for row in grid.rows() {
            for c in row {
                out.push(*c);
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
