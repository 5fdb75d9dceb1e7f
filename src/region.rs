//! The region-validity predicate: a region is valid when it contains exactly
//! one dot and is 180-degree rotationally symmetric about it.

use std::collections::HashSet;

use crate::location::Location;
use crate::puzzle::Dot;

/// Whether `dot` falls inside any cell of the region, under half-open cell
/// bounds `[x, x + 1) x [y, y + 1)`.
pub(crate) fn contains_dot(cells: &HashSet<Location>, dot: Dot) -> bool {
    cells.iter().any(|cell| {
        let (x, y) = (cell.0 as f64, cell.1 as f64);
        x <= dot.0 && dot.0 < x + 1.0 && y <= dot.1 && dot.1 < y + 1.0
    })
}

/// Decide validity of a region against the full dot list.
///
/// Exactly one dot must be contained; the contained dot's floored
/// coordinates must each appear among the region's cell coordinates; and
/// every cell's 180-degree rotation about the dot must be a member.
pub(crate) fn is_valid(cells: &HashSet<Location>, dots: &[Dot]) -> bool {
    let mut contained = dots.iter().filter(|dot| contains_dot(cells, **dot));
    let dot = match (contained.next(), contained.next()) {
        (Some(dot), None) => *dot,
        _ => return false,
    };

    let (dot_x, dot_y) = (dot.0.floor() as usize, dot.1.floor() as usize);
    if !cells.iter().any(|cell| cell.0 == dot_x) || !cells.iter().any(|cell| cell.1 == dot_y) {
        return false;
    }

    has_rotational_symmetry(cells, dot)
}

/// A cell `(x, y)` maps to `(2 px - x - 1, 2 py - y - 1)` under 180-degree
/// rotation about the dot `(px, py)`.
pub(crate) fn has_rotational_symmetry(cells: &HashSet<Location>, dot: Dot) -> bool {
    cells.iter().all(|cell| {
        let sym_x = (2.0 * dot.0 - cell.0 as f64 - 1.0) as isize;
        let sym_y = (2.0 * dot.1 - cell.1 as f64 - 1.0) as isize;
        usize::try_from(sym_x)
            .ok()
            .zip(usize::try_from(sym_y).ok())
            .is_some_and(|(x, y)| cells.contains(&Location(x, y)))
    })
}
