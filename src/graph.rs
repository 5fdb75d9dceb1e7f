//! The live cell-adjacency view. Rebuilt from the blocked-edge set on every
//! query so it can never drift out of step with the edges actually drawn.

use std::collections::{HashSet, VecDeque};

use petgraph::graphmap::UnGraphMap;

use crate::edge::{Edge, Side};
use crate::location::{Dimension, Location};

/// Build the adjacency graph over all cells of a `size` x `size` board.
/// Two cells are connected iff they are lattice neighbors and the edge
/// between them is not in `blocked`.
pub(crate) fn adjacency(size: Dimension, blocked: &HashSet<Edge>) -> UnGraphMap<Location, ()> {
    let n = size.get();
    let mut graph = UnGraphMap::with_capacity(n * n, 2 * n * (n - 1));

    for y in 0..n {
        for x in 0..n {
            graph.add_node(Location(x, y));
        }
    }

    for y in 0..n {
        for x in 0..n {
            let location = Location(x, y);
            for side in Side::FORWARD_VARIANTS {
                let neighbor = side.attempt_from(location);
                if neighbor.0 >= n || neighbor.1 >= n {
                    continue;
                }
                if !blocked.contains(&side.crossing(location)) {
                    graph.add_edge(location, neighbor, ());
                }
            }
        }
    }

    graph
}

/// Connected components of `graph`, discovered breadth-first from each
/// unvisited cell in row-major scan order. Component order and membership
/// order are both deterministic for identical inputs.
pub(crate) fn components(size: Dimension, graph: &UnGraphMap<Location, ()>) -> Vec<Vec<Location>> {
    let n = size.get();
    let mut seen = vec![false; n * n];
    let mut components = Vec::new();

    for y in 0..n {
        for x in 0..n {
            let start = Location(x, y);
            if seen[start.cell_index(size)] {
                continue;
            }
            seen[start.cell_index(size)] = true;

            let mut queue = VecDeque::from([start]);
            let mut component = Vec::new();
            while let Some(cell) = queue.pop_front() {
                component.push(cell);
                for neighbor in graph.neighbors(cell) {
                    if !seen[neighbor.cell_index(size)] {
                        seen[neighbor.cell_index(size)] = true;
                        queue.push_back(neighbor);
                    }
                }
            }
            components.push(component);
        }
    }

    components
}
