//! Path structures: a single open polyline, and multi-path networks with
//! optional point welding.
//!
//! Welding snaps each coordinate to a grid of cell size `merge_tolerance`
//! and uses the cell as a hash key. Points landing in the same cell share a
//! node; the first point seen for a cell fixes that node's position.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::log::warn;
use crate::types::{Edge, Graph, Point3};

use super::params::{DEFAULT_MERGE_TOLERANCE, PathOptions};

/// Rounded-coordinate fingerprint used for welding
pub type WeldKey = (i64, i64, i64);

/// Snap one coordinate to its cell. Halves round toward +∞.
#[inline]
fn snap(v: f64, tolerance: f64) -> i64 {
    (v / tolerance + 0.5).floor() as i64
}

/// Fingerprint of `p` on a grid of cell size `tolerance`
pub fn weld_key(p: Point3, tolerance: f64) -> WeldKey {
    (snap(p.x, tolerance), snap(p.y, tolerance), snap(p.z, tolerance))
}

/// Tolerances that cannot form a grid fall back to the default
fn effective_tolerance(tolerance: f64) -> f64 {
    if tolerance.is_finite() && tolerance > 0.0 {
        tolerance
    } else {
        warn!(tolerance, "merge tolerance must be positive and finite, using default");
        DEFAULT_MERGE_TOLERANCE
    }
}

/// Open chain through `points` in order. Fewer than 2 points gives an empty graph.
pub fn polyline(points: &[Point3]) -> Graph {
    if points.len() < 2 {
        return Graph::empty();
    }
    let edges = (0..points.len() - 1).map(|i| Edge::Pair(i, i + 1)).collect();
    Graph::new(points.to_vec(), edges)
}

/// Several open chains, either independent or welded into one network.
///
/// Without `merge`, every sub-path gets its own node range even when
/// coordinates coincide. With `merge`, coincident points collapse to one node
/// and a segment whose ends collapse together is dropped.
pub fn paths(paths: &[Vec<Point3>], options: PathOptions) -> Graph {
    if options.merge {
        welded_paths(paths, effective_tolerance(options.merge_tolerance))
    } else {
        separate_paths(paths)
    }
}

fn separate_paths(paths: &[Vec<Point3>]) -> Graph {
    let mut graph = Graph::empty();
    for pts in paths {
        let start = graph.nodes.len();
        graph.nodes.extend_from_slice(pts);
        graph
            .edges
            .extend((0..pts.len().saturating_sub(1)).map(|i| Edge::Pair(start + i, start + i + 1)));
    }
    graph
}

/// Node pool keyed by weld cell
struct WeldPool {
    tolerance: f64,
    index: HashMap<WeldKey, usize>,
    nodes: Vec<Point3>,
}

impl WeldPool {
    fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            index: HashMap::new(),
            nodes: Vec::new(),
        }
    }

    fn node_for(&mut self, p: Point3) -> usize {
        match self.index.entry(weld_key(p, self.tolerance)) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let idx = self.nodes.len();
                self.nodes.push(p);
                e.insert(idx);
                idx
            }
        }
    }

    /// Feed every segment of every path through the pool, calling `on_edge`
    /// for each segment that survives welding
    fn weld(&mut self, paths: &[Vec<Point3>], mut on_edge: impl FnMut(usize, usize)) {
        for pts in paths {
            for seg in pts.windows(2) {
                let a = self.node_for(seg[0]);
                let b = self.node_for(seg[1]);
                if a != b {
                    on_edge(a, b);
                }
            }
        }
    }
}

fn welded_paths(paths: &[Vec<Point3>], tolerance: f64) -> Graph {
    let mut pool = WeldPool::new(tolerance);
    let mut edges = Vec::new();
    pool.weld(paths, |a, b| edges.push(Edge::Pair(a, b)));
    Graph::new(pool.nodes, edges)
}

/// Number of nodes [`paths`] produces for these inputs, without building edges
pub fn path_node_count(paths: &[Vec<Point3>], options: PathOptions) -> usize {
    if options.merge {
        let mut pool = WeldPool::new(effective_tolerance(options.merge_tolerance));
        pool.weld(paths, |_, _| {});
        pool.nodes.len()
    } else {
        paths.iter().map(Vec::len).sum()
    }
}

/// Number of nodes [`polyline`] produces for these points
pub fn polyline_node_count(points: &[Point3]) -> usize {
    if points.len() < 2 { 0 } else { points.len() }
}
