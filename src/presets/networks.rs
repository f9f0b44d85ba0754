//! Counted network structures: rings, complete graphs, 2D grids,
//! 3D lattices and radial spokes.

use std::f64::consts::TAU;

use glam::dvec3;

use crate::types::{Edge, Graph, Point3};

/// `count` points evenly spaced on a circle in the XY plane
fn ring_points(count: usize, radius: f64) -> Vec<Point3> {
    (0..count)
        .map(|i| {
            let angle = (i as f64 / count as f64) * TAU;
            dvec3(radius * angle.cos(), radius * angle.sin(), 0.0)
        })
        .collect()
}

/// Closed ring: i → (i + 1) mod count
pub fn circular(count: usize, radius: f64) -> Graph {
    let nodes = ring_points(count, radius);
    let edges = (0..count)
        .map(|i| (i, (i + 1) % count))
        .filter(|(a, b)| a != b)
        .map(|(a, b)| Edge::Pair(a, b))
        .collect();
    Graph::new(nodes, edges)
}

/// Complete graph on `count` ring points: every distinct pair, i < j
pub fn star(count: usize, radius: f64) -> Graph {
    let nodes = ring_points(count, radius);
    let mut edges = Vec::with_capacity(count * count.saturating_sub(1) / 2);
    for i in 0..count {
        for j in (i + 1)..count {
            edges.push(Edge::Pair(i, j));
        }
    }
    Graph::new(nodes, edges)
}

/// `rows × cols` mesh, row-major (`idx = i * cols + j`), rows going down in Y.
///
/// Each point links to its right neighbour and the one below. No diagonals.
pub fn grid(rows: usize, cols: usize, spacing: f64) -> Graph {
    let mut nodes = Vec::with_capacity(rows * cols);
    let mut edges = Vec::new();

    for i in 0..rows {
        for j in 0..cols {
            nodes.push(dvec3(j as f64 * spacing, -(i as f64) * spacing, 0.0));
        }
    }

    for i in 0..rows {
        for j in 0..cols {
            let idx = i * cols + j;
            if j + 1 < cols {
                edges.push(Edge::Pair(idx, idx + 1));
            }
            if i + 1 < rows {
                edges.push(Edge::Pair(idx, idx + cols));
            }
        }
    }

    Graph::new(nodes, edges)
}

/// 3D mesh of `nx × ny × nz` cells, i.e. `(nx+1)(ny+1)(nz+1)` points.
///
/// Point (i, j, k) lives at index `i + (nx+1) * (j + (ny+1) * k)` and links to
/// its +X, +Y and +Z neighbours when they exist.
pub fn lattice(nx: usize, ny: usize, nz: usize, spacing: f64) -> Graph {
    let idx = |i: usize, j: usize, k: usize| i + (nx + 1) * (j + (ny + 1) * k);
    let mut nodes = Vec::with_capacity((nx + 1) * (ny + 1) * (nz + 1));
    let mut edges = Vec::new();

    for k in 0..=nz {
        for j in 0..=ny {
            for i in 0..=nx {
                nodes.push(dvec3(
                    i as f64 * spacing,
                    j as f64 * spacing,
                    k as f64 * spacing,
                ));
            }
        }
    }

    for k in 0..=nz {
        for j in 0..=ny {
            for i in 0..=nx {
                let a = idx(i, j, k);
                if i < nx {
                    edges.push(Edge::Pair(a, idx(i + 1, j, k)));
                }
                if j < ny {
                    edges.push(Edge::Pair(a, idx(i, j + 1, k)));
                }
                if k < nz {
                    edges.push(Edge::Pair(a, idx(i, j, k + 1)));
                }
            }
        }
    }

    Graph::new(nodes, edges)
}

/// Center node plus `count` outer points at `angle_offset + TAU * i / count`.
///
/// Only center-to-tip edges; the tips are not joined.
pub fn spokes(count: usize, length: f64, angle_offset: f64) -> Graph {
    let mut nodes = Vec::with_capacity(count + 1);
    let mut edges = Vec::with_capacity(count);

    nodes.push(Point3::ZERO);
    for i in 0..count {
        let a = angle_offset + (i as f64 / count as f64) * TAU;
        nodes.push(dvec3(a.cos() * length, a.sin() * length, 0.0));
        edges.push(Edge::Pair(0, i + 1));
    }

    Graph::new(nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circular_is_a_single_cycle() {
        let g = circular(6, 3.0);
        assert_eq!(g.node_count(), 6);
        for p in &g.nodes {
            assert!((p.length() - 3.0).abs() < 1e-12);
            assert_eq!(p.z, 0.0);
        }
        let pairs = g.edge_pairs();
        assert_eq!(pairs.len(), 6);
        // walking successors from 0 visits every node once and comes back
        let mut seen = vec![false; 6];
        let mut at = 0;
        for _ in 0..6 {
            assert!(!seen[at]);
            seen[at] = true;
            at = pairs.iter().find(|(a, _)| *a == at).map(|(_, b)| *b).unwrap();
        }
        assert_eq!(at, 0);
    }

    #[test]
    fn circular_single_node_has_no_self_loop() {
        let g = circular(1, 2.0);
        assert_eq!(g.node_count(), 1);
        assert!(g.edges.is_empty());
    }

    #[test]
    fn circular_two_nodes_link_both_ways() {
        assert_eq!(circular(2, 1.0).edge_pairs(), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn star_is_complete() {
        let g = star(5, 3.0);
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 10);
        assert!(g.edge_pairs().iter().all(|(a, b)| a < b));
    }

    #[test]
    fn grid_mesh_counts() {
        let g = grid(3, 4, 2.0);
        assert_eq!(g.node_count(), 12);
        assert_eq!(g.edge_count(), 3 * 3 + 4 * 2);
        // row 1, col 2
        assert_eq!(g.nodes[6], dvec3(4.0, -2.0, 0.0));
        for (a, b) in g.edge_pairs() {
            let d = g.nodes[b] - g.nodes[a];
            assert!(d.x == 0.0 || d.y == 0.0, "diagonal edge {a}-{b}");
        }
    }

    #[test]
    fn grid_degenerate_sizes() {
        assert!(grid(0, 5, 1.0).is_empty());
        let row = grid(1, 3, 1.0);
        assert_eq!(row.edge_pairs(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn lattice_index_formula() {
        let g = lattice(2, 1, 1, 1.0);
        assert_eq!(g.node_count(), 12);
        // i=1, j=1, k=1 -> 1 + 3 * (1 + 2 * 1) = 10
        assert_eq!(g.nodes[10], dvec3(1.0, 1.0, 1.0));
        // edges along x: 2*2*2, along y: 3*1*2, along z: 3*2*1
        assert_eq!(g.edge_count(), 8 + 6 + 6);
    }

    #[test]
    fn spokes_radiate_from_center() {
        let g = spokes(4, 2.0, 0.0);
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_pairs(), vec![(0, 1), (0, 2), (0, 3), (0, 4)]);
        assert!((g.nodes[1] - dvec3(2.0, 0.0, 0.0)).length() < 1e-12);
        assert!((g.nodes[2] - dvec3(0.0, 2.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn spokes_angle_offset() {
        let g = spokes(2, 1.0, std::f64::consts::FRAC_PI_2);
        assert!((g.nodes[1] - dvec3(0.0, 1.0, 0.0)).length() < 1e-12);
        assert!((g.nodes[2] - dvec3(0.0, -1.0, 0.0)).length() < 1e-12);
    }
}
