use std::collections::HashSet;

use glam::dvec3;
use wiregraph::presets::{BuiltinPreset, PathOptions};
use wiregraph::{Graph, ParamList, Point3, PresetRegistry, StyleOptions, generate, params};

fn run(name: &str, params: &ParamList) -> Graph {
    generate(&PresetRegistry::new(), name, params, &StyleOptions::default())
}

fn edge_text(g: &Graph) -> String {
    g.edge_pairs()
        .iter()
        .map(|(a, b)| format!("{a}-{b}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn sample_paths() -> Vec<Vec<Point3>> {
    vec![
        vec![dvec3(-2.0, 0.0, 0.0), dvec3(-0.8, 0.6, 0.0), dvec3(0.4, 1.2, 0.0)],
        vec![dvec3(-0.8, 0.6, 0.0), dvec3(-0.8, 2.0, 0.0)],
        vec![dvec3(0.4, 1.2, 0.0), dvec3(1.6, 1.2, 0.0)],
        vec![dvec3(9.0, 9.0, 9.0)],
    ]
}

/// Parameter lists that exercise defaults, zero/one-element edge cases,
/// non-integer or negative counts, and counts past the element limit
fn param_cases(preset: BuiltinPreset) -> Vec<ParamList> {
    let merged = |tol: f64| PathOptions { merge: true, merge_tolerance: tol };
    let mut cases = vec![params![]];
    cases.extend(match preset {
        BuiltinPreset::Cube => vec![params![1.0], params![1.0, true], params![3.0, false]],
        BuiltinPreset::Pyramid => vec![params![1.0, 4.0]],
        BuiltinPreset::Prism => vec![params![1.0, 2.0, 3.0]],
        BuiltinPreset::Octahedron | BuiltinPreset::Triangle | BuiltinPreset::Line => {
            vec![params![0.5], params![10.0]]
        }
        BuiltinPreset::Cone => vec![
            params![1.0, 1.0, 0],
            params![1.0, 1.0, 1],
            params![1.0, 1.0, 2],
            params![1.0, 1.0, 7.6],
            params![1.0, 1.0, -3],
            params![1.0, 1.0, 1e19],
        ],
        BuiltinPreset::Star | BuiltinPreset::Circular => vec![
            params![0],
            params![1],
            params![2],
            params![5, 3.0],
            params![7.4, 1.0],
            params![f64::NAN],
            params![1e7],
            params![1e300],
        ],
        BuiltinPreset::Grid => vec![
            params![0, 3],
            params![1, 1],
            params![4, 5, 1.0],
            params![2.5, 3.5],
            params![1e10, 1e10],
        ],
        BuiltinPreset::Lattice => vec![
            params![0, 0, 0],
            params![1, 1, 1, 2.0],
            params![3, 2, 0, 0.5],
            params![1e20, 1, 1],
        ],
        BuiltinPreset::Spokes => vec![params![0], params![6, 1.0, 0.3], params![1e19]],
        BuiltinPreset::Polyline => vec![
            params![Vec::<Point3>::new()],
            params![vec![dvec3(1.0, 1.0, 1.0)]],
            params![sample_paths()[0].clone()],
        ],
        BuiltinPreset::Paths => vec![
            params![sample_paths()],
            params![sample_paths(), merged(1e-4)],
            params![sample_paths(), merged(0.0)],
            params![sample_paths(), merged(5.0)],
        ],
    });
    cases
}

#[test]
fn predicted_node_count_matches_generator() {
    for &preset in BuiltinPreset::all() {
        for params in param_cases(preset) {
            let graph = run(preset.name(), &params);
            assert_eq!(
                graph.node_count(),
                preset.node_count(&params),
                "{} with {params:?}",
                preset.name()
            );
        }
    }
}

#[test]
fn generated_edges_stay_in_range() {
    for &preset in BuiltinPreset::all() {
        for params in param_cases(preset) {
            let graph = run(preset.name(), &params);
            assert_eq!(graph.first_dangling_edge(), None, "{} with {params:?}", preset.name());
            assert!(
                graph.edge_pairs().iter().all(|(a, b)| a != b),
                "{} emitted a self-loop",
                preset.name()
            );
        }
    }
}

#[test]
fn generation_is_deterministic() {
    for &preset in BuiltinPreset::all() {
        for params in param_cases(preset) {
            assert_eq!(run(preset.name(), &params), run(preset.name(), &params));
        }
    }
}

#[test]
fn cube_corners() {
    let size = 1.25;
    let g = run("cube", &params![size]);
    assert_eq!(g.node_count(), 8);
    assert_eq!(g.edge_count(), 12);

    let distinct: HashSet<(usize, usize)> =
        g.edge_pairs().into_iter().map(|(a, b)| (a.min(b), a.max(b))).collect();
    assert_eq!(distinct.len(), 12);

    for p in &g.nodes {
        for c in p.to_array() {
            assert_eq!(c.abs(), size);
        }
    }
}

#[test]
fn circular_is_one_cycle() {
    for count in [3usize, 4, 9] {
        let g = run("circular", &params![count, 2.5]);
        assert_eq!(g.node_count(), count);
        assert_eq!(g.edge_count(), count);
        for p in &g.nodes {
            assert!((p.length() - 2.5).abs() < 1e-9);
        }

        // walk the cycle from node 0 and come back after visiting every node
        let next: std::collections::HashMap<usize, usize> = g.edge_pairs().into_iter().collect();
        let mut seen = HashSet::new();
        let mut at = 0;
        for _ in 0..count {
            assert!(seen.insert(at));
            at = next[&at];
        }
        assert_eq!(at, 0);
        assert_eq!(seen.len(), count);
    }
}

#[test]
fn grid_mesh_counts() {
    for (rows, cols) in [(1usize, 1usize), (2, 3), (4, 4), (5, 2)] {
        let g = run("grid", &params![rows, cols, 1.5]);
        assert_eq!(g.node_count(), rows * cols);
        assert_eq!(g.edge_count(), rows * (cols - 1) + cols * (rows - 1));
        for (a, b) in g.edge_pairs() {
            // no diagonals: every edge changes exactly one coordinate by one spacing
            let d = g.nodes[b] - g.nodes[a];
            assert!((d.length() - 1.5).abs() < 1e-9);
        }
    }
}

#[test]
fn grid_edge_order() {
    let g = run("grid", &params![2, 3, 1.0]);
    insta::assert_snapshot!(edge_text(&g), @"0-1 0-3 1-2 1-4 2-5 3-4 4-5");
}

#[test]
fn lattice_unit_cube() {
    let g = run("lattice", &params![1, 1, 1, 2.0]);
    assert_eq!(g.node_count(), 8);
    assert_eq!(g.edge_count(), 12);

    let corners: HashSet<[i64; 3]> = g
        .nodes
        .iter()
        .map(|p| p.to_array().map(|c| c as i64))
        .collect();
    assert_eq!(corners.len(), 8);
    assert!(corners.iter().all(|c| c.iter().all(|&v| v == 0 || v == 2)));

    for (a, b) in g.edge_pairs() {
        assert_eq!(g.nodes[a].distance(g.nodes[b]), 2.0);
    }
    insta::assert_snapshot!(edge_text(&g), @"0-1 0-2 0-4 1-3 1-5 2-3 2-6 3-7 4-5 4-6 5-7 6-7");
}

#[test]
fn star_is_complete() {
    let g = run("star", &params![5, 3.0]);
    assert_eq!(g.node_count(), 5);
    assert_eq!(g.edge_count(), 10);
    for p in &g.nodes {
        assert!((p.length() - 3.0).abs() < 1e-9);
    }
    let distinct: HashSet<(usize, usize)> = g.edge_pairs().into_iter().collect();
    assert_eq!(distinct.len(), 10);
}

#[test]
fn spokes_radiate_from_center() {
    let g = run("spokes", &params![6, 1.5, 0.25]);
    assert_eq!(g.node_count(), 7);
    assert_eq!(g.nodes[0], Point3::ZERO);
    assert!(g.edge_pairs().iter().all(|&(a, _)| a == 0));
    let first = g.nodes[1];
    assert!((first - dvec3(1.5 * 0.25f64.cos(), 1.5 * 0.25f64.sin(), 0.0)).length() < 1e-12);
}

#[test]
fn paths_merge_and_separate() {
    let input = sample_paths();
    let separate = run("paths", &params![input.clone()]);
    assert_eq!(separate.node_count(), input.iter().map(Vec::len).sum::<usize>());

    let merged = run(
        "paths",
        &params![input, PathOptions { merge: true, merge_tolerance: 1e-4 }],
    );
    // the lone one-point path contributes nothing once welded
    assert_eq!(merged.node_count(), 5);
    assert_eq!(merged.edge_count(), 4);
}

#[test]
fn near_points_weld_within_tolerance() {
    let input = vec![
        vec![dvec3(0.0, 0.0, 0.0), dvec3(1.0, 1.0, 1.0)],
        vec![dvec3(1.0 + 2e-5, 1.0 - 2e-5, 1.0), dvec3(2.0, 0.0, 0.0)],
    ];
    let g = run("paths", &params![input, PathOptions { merge: true, merge_tolerance: 1e-4 }]);
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.nodes[1], dvec3(1.0, 1.0, 1.0));
}

#[test]
fn unknown_preset_is_empty() {
    let g = run("icosahedron", &params![1.0]);
    assert!(g.is_empty());
}
