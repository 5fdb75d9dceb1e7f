use std::collections::HashSet;

use strum::VariantArray;
use unordered_pair::UnorderedPair;

use crate::location::{Coord, Dimension, Location};

/// Whether an [`Edge`] lies on a horizontal or vertical grid line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// On the line between two rows, spanning one column.
    Horizontal,
    /// On the line between two columns, spanning one row.
    Vertical,
}

/// A unit segment of the grid lattice.
///
/// A horizontal edge `(x, y)` lies between row `y - 1` and row `y`, spanning
/// column `x`; it exists for `0 <= x < n`, `0 <= y <= n`. A vertical edge
/// `(x, y)` lies between column `x - 1` and column `x`, spanning row `y`; it
/// exists for `0 <= x <= n`, `0 <= y < n`. Constructing an edge outside
/// these bounds is a caller error, not a checked condition.
///
/// The derived ordering is `(orientation, x, y)`; it is the order in which
/// hint candidates are enumerated, so identical game states produce
/// identical hints.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Which family of grid lines this edge lies on.
    pub orientation: Orientation,
    /// Column (for horizontal edges) or separating grid line (for vertical).
    pub x: Coord,
    /// Separating grid line (for horizontal edges) or row (for vertical).
    pub y: Coord,
}

impl Edge {
    /// The horizontal edge spanning column `x` between rows `y - 1` and `y`.
    pub fn horizontal(x: Coord, y: Coord) -> Self {
        Self { orientation: Orientation::Horizontal, x, y }
    }

    /// The vertical edge spanning row `y` between columns `x - 1` and `x`.
    pub fn vertical(x: Coord, y: Coord) -> Self {
        Self { orientation: Orientation::Vertical, x, y }
    }

    /// The edge separating two lattice-adjacent cells, or `None` if the
    /// cells are not adjacent.
    pub fn between(cells: UnorderedPair<Location>) -> Option<Self> {
        let UnorderedPair(a, b) = cells;
        Side::direction_to(a, b).map(|side| side.crossing(a))
    }
}

/// Every edge on the outer border of a `size` x `size` board.
pub(crate) fn border(size: Dimension) -> HashSet<Edge> {
    let n = size.get();
    let mut edges = HashSet::with_capacity(4 * n);
    for x in 0..n {
        edges.insert(Edge::horizontal(x, 0));
        edges.insert(Edge::horizontal(x, n));
    }
    for y in 0..n {
        edges.insert(Edge::vertical(0, y));
        edges.insert(Edge::vertical(n, y));
    }
    edges
}

/// A step direction between lattice-adjacent cells.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub(crate) enum Side {
    Up,
    Down,
    Left,
    Right,
}

impl Side {
    /// The directions which reach a higher row-major scan index.
    pub(crate) const FORWARD_VARIANTS: &'static [Self] = &[Self::Right, Self::Down];

    /// Attempt the step from `location`; wraps on underflow, so the result
    /// must be bounds-checked by the caller.
    pub(crate) fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }

    /// Determine the direction from `a` to `b`, if they are adjacent.
    pub(crate) fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|side| side.attempt_from(a) == b).copied()
    }

    /// The lattice edge crossed when stepping from `location` this way.
    pub(crate) fn crossing(&self, location: Location) -> Edge {
        match self {
            Self::Up => Edge::horizontal(location.0, location.1),
            Self::Down => Edge::horizontal(location.0, location.1 + 1),
            Self::Left => Edge::vertical(location.0, location.1),
            Self::Right => Edge::vertical(location.0 + 1, location.1),
        }
    }
}
