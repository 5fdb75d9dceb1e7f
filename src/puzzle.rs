//! Puzzle generation: recursive rectangle partitioning, galaxy centers, and
//! the canonical solution edge set.

use std::collections::HashSet;

use itertools::Itertools;
use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::edge::{self, Edge, Side};
use crate::location::{Coord, Dimension, Location};

/// How many split attempts [`generate`] makes before settling for fewer
/// rectangles than requested.
const MAX_SPLIT_ATTEMPTS: usize = 5000;

/// An axis-aligned block of cells; the generator's partition unit.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Leftmost column.
    pub x: Coord,
    /// Topmost row.
    pub y: Coord,
    /// Width in cells; at least 1.
    pub w: Coord,
    /// Height in cells; at least 1.
    pub h: Coord,
}

impl Rect {
    /// The exact geometric center. Each coordinate is a multiple of one half.
    pub fn center(&self) -> Dot {
        Dot(
            self.x as f64 + self.w as f64 / 2.0,
            self.y as f64 + self.h as f64 / 2.0,
        )
    }

    pub(crate) fn contains(&self, cell: Location) -> bool {
        (self.x..self.x + self.w).contains(&cell.0) && (self.y..self.y + self.h).contains(&cell.1)
    }

    fn splittable(&self) -> bool {
        self.w >= 2 || self.h >= 2
    }
}

/// A galaxy center in continuous grid coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dot(pub f64, pub f64);

/// A partition of the board: the rectangle list, one center dot per
/// rectangle, the per-cell owner table, and the solution edge set.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Puzzle {
    size: Dimension,
    rects: Vec<Rect>,
    owner: Array2<usize>,
    dots: Vec<Dot>,
    solution_edges: HashSet<Edge>,
}

impl Puzzle {
    /// Build a puzzle from a known rectangle tiling.
    ///
    /// The rectangles must tile the `size` x `size` board exactly; this is a
    /// caller obligation, not a checked condition. Owner assignment, dot
    /// placement, and the solution edge set are all deterministic functions
    /// of the rectangle list.
    pub fn from_rects(size: Dimension, rects: Vec<Rect>) -> Self {
        let n = size.get();
        let owner = Array2::from_shape_fn((n, n), |ind| {
            let location = Location::from(ind);
            rects.iter().position(|rect| rect.contains(location)).unwrap()
        });
        let dots = rects.iter().map(Rect::center).collect_vec();
        let solution_edges = solution_edges(size, &owner);

        Self { size, rects, owner, dots, solution_edges }
    }

    /// Board size `N`.
    pub fn size(&self) -> Dimension {
        self.size
    }

    /// The rectangle partition, one entry per galaxy.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Galaxy centers, indexed in step with [`rects`](Self::rects).
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Index into [`rects`](Self::rects) of the rectangle owning `cell`.
    pub fn owner(&self, cell: Location) -> usize {
        self.owner[cell.as_index()]
    }

    /// The outer border plus every internal edge separating two owners.
    pub fn solution_edges(&self) -> &HashSet<Edge> {
        &self.solution_edges
    }
}

/// Carve the board into rectangles by repeated random splitting.
///
/// Starts from a single board-covering rectangle and splits a uniformly
/// chosen splittable rectangle (either dimension at least 2) until `target`
/// rectangles exist (a uniform draw from `9..=14` when unspecified), no
/// splittable rectangle remains, or the attempt limit runs out. Exhaustion
/// yields fewer rectangles than requested rather than failing.
pub fn generate<R: Rng + ?Sized>(size: Dimension, target: Option<usize>, rng: &mut R) -> Puzzle {
    let n = size.get();
    let target = target.unwrap_or_else(|| rng.gen_range(9..=14));

    let mut rects = vec![Rect { x: 0, y: 0, w: n, h: n }];

    let mut tries = 0;
    while rects.len() < target && tries < MAX_SPLIT_ATTEMPTS {
        tries += 1;
        let candidates = rects.iter().positions(Rect::splittable).collect_vec();
        let Some(&chosen) = candidates.choose(rng) else {
            break;
        };
        let (a, b) = split(rects.swap_remove(chosen), rng);
        rects.push(a);
        rects.push(b);
    }

    Puzzle::from_rects(size, rects)
}

/// Split `rect` across one dimension, biased 65/35 toward the longer one.
/// The split offset is uniform over the interior positions.
fn split<R: Rng + ?Sized>(rect: Rect, rng: &mut R) -> (Rect, Rect) {
    let Rect { x, y, w, h } = rect;
    let vertical = if w >= 2 && h >= 2 {
        (w >= h) == rng.gen_bool(0.65)
    } else {
        w >= 2
    };

    if vertical {
        let k = rng.gen_range(1..w);
        (Rect { x, y, w: k, h }, Rect { x: x + k, y, w: w - k, h })
    } else {
        let k = rng.gen_range(1..h);
        (Rect { x, y, w, h: k }, Rect { x, y: y + k, w, h: h - k })
    }
}

/// The outer border plus every internal lattice edge whose two cells have
/// different owners.
fn solution_edges(size: Dimension, owner: &Array2<usize>) -> HashSet<Edge> {
    let n = size.get();
    let mut edges = edge::border(size);

    for (x, y) in (0..n).cartesian_product(0..n) {
        let location = Location(x, y);
        for side in Side::FORWARD_VARIANTS {
            let neighbor = side.attempt_from(location);
            if neighbor.0 >= n || neighbor.1 >= n {
                continue;
            }
            if owner[location.as_index()] != owner[neighbor.as_index()] {
                edges.insert(side.crossing(location));
            }
        }
    }

    edges
}
