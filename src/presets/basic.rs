//! Fixed-topology shapes: boxes, pyramid, octahedron, triangle, line, cone.

use std::f64::consts::TAU;

use glam::dvec3;

use crate::types::{Edge, Graph, Point3};

/// Edges of a box whose corners are listed bottom ring then top ring:
/// 4 bottom, 4 top, 4 vertical.
#[rustfmt::skip]
const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0),
    (4, 5), (5, 6), (6, 7), (7, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// Apex spokes, then the base ring
#[rustfmt::skip]
const PYRAMID_EDGES: [(usize, usize); 8] = [
    (0, 1), (0, 2), (0, 3), (0, 4),
    (1, 2), (2, 3), (3, 4), (4, 1),
];

/// Top hub spokes, bottom hub spokes, then the equator ring
#[rustfmt::skip]
const OCTAHEDRON_EDGES: [(usize, usize); 12] = [
    (0, 1), (0, 2), (0, 3), (0, 4),
    (5, 1), (5, 2), (5, 3), (5, 4),
    (1, 2), (2, 3), (3, 4), (4, 1),
];

/// Corner indices of the six box faces
const BOX_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [3, 2, 6, 7],
    [1, 2, 6, 5],
    [0, 3, 7, 4],
];

fn pairs(list: &[(usize, usize)]) -> Vec<Edge> {
    list.iter().map(|&(a, b)| Edge::Pair(a, b)).collect()
}

/// Rectangular box with corners at (±w, ±h, ±d)
fn box_frame(w: f64, h: f64, d: f64) -> Graph {
    let nodes = vec![
        dvec3(-w, -h, -d),
        dvec3(w, -h, -d),
        dvec3(w, h, -d),
        dvec3(-w, h, -d),
        dvec3(-w, -h, d),
        dvec3(w, -h, d),
        dvec3(w, h, d),
        dvec3(-w, h, d),
    ];
    Graph::new(nodes, pairs(&BOX_EDGES))
}

/// Cube with corners at (±size, ±size, ±size).
///
/// With `include_face_centers`, each face gets an extra node at the centroid
/// of its four corners, connected to those corners (+6 nodes, +24 edges).
pub fn cube(size: f64, include_face_centers: bool) -> Graph {
    let mut graph = box_frame(size, size, size);

    if include_face_centers {
        for face in BOX_FACES {
            let center = face.iter().map(|&i| graph.nodes[i]).sum::<Point3>() / 4.0;
            let idx = graph.nodes.len();
            graph.nodes.push(center);
            graph.edges.extend(face.iter().map(|&i| Edge::Pair(idx, i)));
        }
    }

    graph
}

/// Rectangular prism with corners at (±width, ±height, ±depth)
pub fn prism(width: f64, height: f64, depth: f64) -> Graph {
    box_frame(width, height, depth)
}

/// Square pyramid: apex at (0, height, 0), base corners at (±base, 0, ±base)
pub fn pyramid(base_size: f64, height: f64) -> Graph {
    let nodes = vec![
        dvec3(0.0, height, 0.0),
        dvec3(-base_size, 0.0, -base_size),
        dvec3(base_size, 0.0, -base_size),
        dvec3(base_size, 0.0, base_size),
        dvec3(-base_size, 0.0, base_size),
    ];
    Graph::new(nodes, pairs(&PYRAMID_EDGES))
}

/// Regular octahedron with vertices at ±size on each axis.
///
/// Node 0 is the top hub, node 5 the bottom hub, 1..=4 the equator.
pub fn octahedron(size: f64) -> Graph {
    let nodes = vec![
        dvec3(0.0, size, 0.0),
        dvec3(-size, 0.0, 0.0),
        dvec3(0.0, 0.0, size),
        dvec3(size, 0.0, 0.0),
        dvec3(0.0, 0.0, -size),
        dvec3(0.0, -size, 0.0),
    ];
    Graph::new(nodes, pairs(&OCTAHEDRON_EDGES))
}

/// Closed triangle in the XY plane
pub fn triangle(size: f64) -> Graph {
    let nodes = vec![
        dvec3(0.0, size, 0.0),
        dvec3(-size, -size, 0.0),
        dvec3(size, -size, 0.0),
    ];
    Graph::new(nodes, pairs(&[(0, 1), (1, 2), (2, 0)]))
}

/// Single segment along X, centered on the origin
pub fn line(length: f64) -> Graph {
    let half = length / 2.0;
    Graph::new(
        vec![dvec3(-half, 0.0, 0.0), dvec3(half, 0.0, 0.0)],
        vec![Edge::Pair(0, 1)],
    )
}

/// Cone wireframe: apex above, `base_segments` points on the base circle.
///
/// Edges are apex spokes followed by the base ring.
pub fn cone(radius: f64, height: f64, base_segments: usize) -> Graph {
    let mut nodes = Vec::with_capacity(base_segments + 1);
    let mut edges = Vec::with_capacity(base_segments * 2);

    nodes.push(dvec3(0.0, height * 0.5, 0.0));
    for i in 0..base_segments {
        let a = (i as f64 / base_segments as f64) * TAU;
        nodes.push(dvec3(radius * a.cos(), -height * 0.5, radius * a.sin()));
        edges.push(Edge::Pair(0, i + 1));
    }

    for i in 1..=base_segments {
        let next = if i == base_segments { 1 } else { i + 1 };
        // a one-point ring would close on itself
        if next != i {
            edges.push(Edge::Pair(i, next));
        }
    }

    Graph::new(nodes, edges)
}
