//! Named graph presets
//!
//! This module is organized into submodules:
//! - `params`: positional parameter values and typed access
//! - `basic`: fixed polyhedra and simple shapes
//! - `networks`: counted rings, grids, lattices and spokes
//! - `paths`: polylines and welded multi-path networks
//!
//! [`PresetRegistry`] maps names to generators. Built-in presets are always
//! present; user presets can be added and removed at runtime and shadow a
//! built-in of the same name.

pub mod basic;
pub mod networks;
pub mod params;
pub mod paths;

pub use params::{Args, Param, ParamList, PathOptions};

use crate::log::{debug, warn};
use crate::render::StyleOptions;
use crate::types::Graph;

/// Largest number of nodes plus edges a counted built-in preset may produce.
/// Parameters past this yield an empty graph.
pub const MAX_ELEMENTS: usize = 1 << 22;

/// Anything that can turn positional parameters into a graph.
///
/// Closures of the form `Fn(&[Param], &StyleOptions) -> Graph` implement this
/// automatically.
pub trait PresetGenerator {
    fn generate(&self, params: &[Param], style: &StyleOptions) -> Graph;
}

impl<F> PresetGenerator for F
where
    F: Fn(&[Param], &StyleOptions) -> Graph,
{
    fn generate(&self, params: &[Param], style: &StyleOptions) -> Graph {
        self(params, style)
    }
}

/// The fixed set of presets that ship with the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinPreset {
    Cube,
    Pyramid,
    Prism,
    Octahedron,
    Triangle,
    Line,
    Cone,
    Star,
    Circular,
    Grid,
    Lattice,
    Spokes,
    Polyline,
    Paths,
}

/// Built-ins in listing order
static BUILTINS: [BuiltinPreset; 14] = [
    BuiltinPreset::Cube,
    BuiltinPreset::Pyramid,
    BuiltinPreset::Prism,
    BuiltinPreset::Octahedron,
    BuiltinPreset::Triangle,
    BuiltinPreset::Line,
    BuiltinPreset::Cone,
    BuiltinPreset::Star,
    BuiltinPreset::Circular,
    BuiltinPreset::Grid,
    BuiltinPreset::Lattice,
    BuiltinPreset::Spokes,
    BuiltinPreset::Polyline,
    BuiltinPreset::Paths,
];

impl BuiltinPreset {
    /// Every built-in, in listing order
    pub fn all() -> &'static [BuiltinPreset] {
        &BUILTINS
    }

    pub fn name(self) -> &'static str {
        match self {
            BuiltinPreset::Cube => "cube",
            BuiltinPreset::Pyramid => "pyramid",
            BuiltinPreset::Prism => "prism",
            BuiltinPreset::Octahedron => "octahedron",
            BuiltinPreset::Triangle => "triangle",
            BuiltinPreset::Line => "line",
            BuiltinPreset::Cone => "cone",
            BuiltinPreset::Star => "star",
            BuiltinPreset::Circular => "circular",
            BuiltinPreset::Grid => "grid",
            BuiltinPreset::Lattice => "lattice",
            BuiltinPreset::Spokes => "spokes",
            BuiltinPreset::Polyline => "polyline",
            BuiltinPreset::Paths => "paths",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        BUILTINS.iter().copied().find(|p| p.name() == name)
    }

    fn lookup(name: &str) -> Option<&'static BuiltinPreset> {
        BUILTINS.iter().find(|p| p.name() == name)
    }

    /// Run this preset's generator. Missing parameters take their defaults:
    ///
    /// | preset     | parameters (defaults)                             |
    /// |------------|---------------------------------------------------|
    /// | cube       | size=2, includeFaceCenters=false                  |
    /// | pyramid    | baseSize=2, height=2                              |
    /// | prism      | width=2, height=2, depth=1                        |
    /// | octahedron | size=2                                            |
    /// | triangle   | size=2                                            |
    /// | line       | length=2                                          |
    /// | cone       | radius=2, height=3, baseSegments=8                |
    /// | star       | count=8, radius=2                                 |
    /// | circular   | count=12, radius=3                                |
    /// | grid       | rows=3, cols=3, spacing=2                         |
    /// | lattice    | nx=2, ny=1, nz=1, spacing=2                       |
    /// | spokes     | count=4, length=2, angleOffset=0                  |
    /// | polyline   | points=[]                                         |
    /// | paths      | paths=[], {merge=false, mergeTolerance=1e-6}      |
    pub fn build(self, params: &[Param]) -> Graph {
        let a = Args(params);
        if !self.within_budget(a) {
            warn!(preset = self.name(), limit = MAX_ELEMENTS, "Preset parameters too large");
            return Graph::empty();
        }
        match self {
            BuiltinPreset::Cube => basic::cube(a.number(0, 2.0), a.flag(1, false)),
            BuiltinPreset::Pyramid => basic::pyramid(a.number(0, 2.0), a.number(1, 2.0)),
            BuiltinPreset::Prism => {
                basic::prism(a.number(0, 2.0), a.number(1, 2.0), a.number(2, 1.0))
            }
            BuiltinPreset::Octahedron => basic::octahedron(a.number(0, 2.0)),
            BuiltinPreset::Triangle => basic::triangle(a.number(0, 2.0)),
            BuiltinPreset::Line => basic::line(a.number(0, 2.0)),
            BuiltinPreset::Cone => basic::cone(a.number(0, 2.0), a.number(1, 3.0), a.count(2, 8)),
            BuiltinPreset::Star => networks::star(a.count(0, 8), a.number(1, 2.0)),
            BuiltinPreset::Circular => networks::circular(a.count(0, 12), a.number(1, 3.0)),
            BuiltinPreset::Grid => networks::grid(a.count(0, 3), a.count(1, 3), a.number(2, 2.0)),
            BuiltinPreset::Lattice => networks::lattice(
                a.count(0, 2),
                a.count(1, 1),
                a.count(2, 1),
                a.number(3, 2.0),
            ),
            BuiltinPreset::Spokes => {
                networks::spokes(a.count(0, 4), a.number(1, 2.0), a.number(2, 0.0))
            }
            BuiltinPreset::Polyline => paths::polyline(a.points(0)),
            BuiltinPreset::Paths => paths::paths(a.paths(0), a.path_options(1)),
        }
    }

    /// Predict how many nodes [`build`](Self::build) returns for `params`
    /// without generating the graph
    pub fn node_count(self, params: &[Param]) -> usize {
        let a = Args(params);
        if !self.within_budget(a) {
            return 0;
        }
        match self {
            BuiltinPreset::Cube => {
                if a.flag(1, false) {
                    14
                } else {
                    8
                }
            }
            BuiltinPreset::Pyramid => 5,
            BuiltinPreset::Prism => 8,
            BuiltinPreset::Octahedron => 6,
            BuiltinPreset::Triangle => 3,
            BuiltinPreset::Line => 2,
            BuiltinPreset::Cone => 1 + a.count(2, 8),
            BuiltinPreset::Star => a.count(0, 8),
            BuiltinPreset::Circular => a.count(0, 12),
            BuiltinPreset::Grid => a.count(0, 3) * a.count(1, 3),
            BuiltinPreset::Lattice => {
                (a.count(0, 2) + 1) * (a.count(1, 1) + 1) * (a.count(2, 1) + 1)
            }
            BuiltinPreset::Spokes => 1 + a.count(0, 4),
            BuiltinPreset::Polyline => paths::polyline_node_count(a.points(0)),
            BuiltinPreset::Paths => paths::path_node_count(a.paths(0), a.path_options(1)),
        }
    }
}

impl BuiltinPreset {
    /// Upper bound on nodes plus edges for the counted presets, `None` on
    /// overflow. Fixed shapes and point-list presets are sized by their input.
    fn element_bound(self, a: Args) -> Option<usize> {
        match self {
            BuiltinPreset::Cone => a.count(2, 8).checked_mul(2)?.checked_add(1),
            BuiltinPreset::Star => {
                let c = a.count(0, 8);
                c.checked_mul(c.saturating_sub(1))?.checked_div(2)?.checked_add(c)
            }
            BuiltinPreset::Circular => a.count(0, 12).checked_mul(2),
            BuiltinPreset::Grid => a.count(0, 3).checked_mul(a.count(1, 3))?.checked_mul(3),
            BuiltinPreset::Lattice => {
                let (nx, ny, nz) = (a.count(0, 2), a.count(1, 1), a.count(2, 1));
                nx.checked_add(1)?
                    .checked_mul(ny.checked_add(1)?)?
                    .checked_mul(nz.checked_add(1)?)?
                    .checked_mul(4)
            }
            BuiltinPreset::Spokes => a.count(0, 4).checked_mul(2)?.checked_add(1),
            _ => Some(0),
        }
    }

    fn within_budget(self, a: Args) -> bool {
        self.element_bound(a).is_some_and(|n| n <= MAX_ELEMENTS)
    }
}

impl PresetGenerator for BuiltinPreset {
    fn generate(&self, params: &[Param], _style: &StyleOptions) -> Graph {
        self.build(params)
    }
}

/// Name → generator table for one generation session.
///
/// Lookups check user presets first, then built-ins.
#[derive(Default)]
pub struct PresetRegistry {
    /// User presets in first-registration order
    user: Vec<(String, Box<dyn PresetGenerator>)>,
}

impl std::fmt::Debug for PresetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresetRegistry")
            .field("user", &self.list_user())
            .finish()
    }
}

impl PresetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user preset, replacing any earlier one of the same name.
    ///
    /// A blank name is rejected with a warning and nothing is stored.
    pub fn register(&mut self, name: impl Into<String>, generator: impl PresetGenerator + 'static) {
        let name = name.into();
        if name.trim().is_empty() {
            warn!("register: preset name must not be empty");
            return;
        }

        let generator: Box<dyn PresetGenerator> = Box::new(generator);
        match self.user.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => {
                debug!(name = %name, "replacing user preset");
                slot.1 = generator;
            }
            None => {
                debug!(name = %name, "registering user preset");
                self.user.push((name, generator));
            }
        }
    }

    /// Remove a user preset. Returns whether one was removed.
    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.user.len();
        self.user.retain(|(n, _)| n != name);
        self.user.len() != before
    }

    /// Whether `name` resolves to any preset
    pub fn has(&self, name: &str) -> bool {
        self.has_user(name) || BuiltinPreset::from_name(name).is_some()
    }

    /// Whether `name` is a user-registered preset
    pub fn has_user(&self, name: &str) -> bool {
        self.user.iter().any(|(n, _)| n == name)
    }

    /// Resolve `name`, user presets first
    pub fn get(&self, name: &str) -> Option<&dyn PresetGenerator> {
        self.user
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, g)| g.as_ref())
            .or_else(|| BuiltinPreset::lookup(name).map(|b| b as &dyn PresetGenerator))
    }

    /// Built-in preset names in listing order
    pub fn list_builtin(&self) -> Vec<&'static str> {
        BUILTINS.iter().map(|p| p.name()).collect()
    }

    /// User preset names in registration order
    pub fn list_user(&self) -> Vec<&str> {
        self.user.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Built-ins followed by user presets
    pub fn list_all(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.list_builtin();
        names.extend(self.list_user());
        names
    }

    /// Generate the graph for `name`.
    ///
    /// An unknown name is not an error: it logs a warning and yields an
    /// empty graph.
    pub fn generate(&self, name: &str, params: &[Param], style: &StyleOptions) -> Graph {
        match self.get(name) {
            Some(generator) => {
                let graph = generator.generate(params, style);
                debug!(
                    preset = name,
                    nodes = graph.node_count(),
                    edges = graph.edge_count(),
                    "generated preset"
                );
                graph
            }
            None => {
                warn!(preset = name, "Preset not found");
                Graph::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;
    use crate::types::{Edge, Point3};

    fn two_nodes(_: &[Param], _: &StyleOptions) -> Graph {
        Graph::new(vec![Point3::ZERO, Point3::ONE], vec![Edge::Pair(0, 1)])
    }

    #[test]
    fn builtin_names_round_trip() {
        for &p in BuiltinPreset::all() {
            assert_eq!(BuiltinPreset::from_name(p.name()), Some(p));
        }
        assert_eq!(BuiltinPreset::from_name("Cube"), None);
    }

    #[test]
    fn listing_order() {
        let mut reg = PresetRegistry::new();
        reg.register("b-custom", two_nodes);
        reg.register("a-custom", two_nodes);
        let all = reg.list_all();
        assert_eq!(all.len(), 16);
        assert_eq!(all[0], "cube");
        assert_eq!(all[13], "paths");
        assert_eq!(&all[14..], &["b-custom", "a-custom"]);
    }

    #[test]
    fn register_overwrites_in_place() {
        let mut reg = PresetRegistry::new();
        reg.register("x", two_nodes);
        reg.register("y", two_nodes);
        reg.register("x", |_: &[Param], _: &StyleOptions| Graph::empty());
        assert_eq!(reg.list_user(), vec!["x", "y"]);
        let g = reg.generate("x", &[], &StyleOptions::default());
        assert!(g.is_empty());
    }

    #[test]
    fn blank_name_is_ignored() {
        let mut reg = PresetRegistry::new();
        reg.register("  ", two_nodes);
        assert!(reg.list_user().is_empty());
    }

    #[test]
    fn unregister_is_noop_when_absent() {
        let mut reg = PresetRegistry::new();
        assert!(!reg.unregister("nope"));
        reg.register("x", two_nodes);
        assert!(reg.unregister("x"));
        assert!(!reg.has("x"));
    }

    #[test]
    fn builtins_cannot_be_unregistered() {
        let mut reg = PresetRegistry::new();
        assert!(!reg.unregister("cube"));
        assert!(reg.has("cube"));
        assert!(!reg.has_user("cube"));
    }

    #[test]
    fn user_preset_shadows_builtin() {
        let mut reg = PresetRegistry::new();
        let style = StyleOptions::default();
        assert_eq!(reg.generate("cube", &[], &style).node_count(), 8);

        reg.register("cube", two_nodes);
        assert_eq!(reg.generate("cube", &[], &style).node_count(), 2);

        reg.unregister("cube");
        assert_eq!(reg.generate("cube", &[], &style).node_count(), 8);
    }

    #[test]
    fn unknown_preset_is_empty() {
        let reg = PresetRegistry::new();
        assert!(!reg.has("dodecahedron"));
        assert!(reg.get("dodecahedron").is_none());
        assert!(reg.generate("dodecahedron", &params![1, 2], &StyleOptions::default()).is_empty());
    }

    #[test]
    fn user_generator_sees_params_and_style() {
        let mut reg = PresetRegistry::new();
        reg.register("ring-by-style", |p: &[Param], s: &StyleOptions| {
            let n = Args(p).count(0, 3);
            let mut g = networks::circular(n, s.node_radius * 10.0);
            g.edges.clear();
            g
        });
        let style = StyleOptions { node_radius: 0.5, ..StyleOptions::default() };
        let g = reg.generate("ring-by-style", &params![4], &style);
        assert_eq!(g.node_count(), 4);
        assert!((g.nodes[0].x - 5.0).abs() < 1e-12);
    }

    #[test]
    fn oversized_counts_yield_empty_graph() {
        let cases = [
            (BuiltinPreset::Lattice, params![1e20, 1, 1]),
            (BuiltinPreset::Lattice, params![200, 200, 200]),
            (BuiltinPreset::Star, params![1e6]),
            (BuiltinPreset::Grid, params![1e10, 1e10]),
            (BuiltinPreset::Circular, params![1e300]),
            (BuiltinPreset::Cone, params![1.0, 1.0, 1e19]),
            (BuiltinPreset::Spokes, params![1e19]),
        ];
        for (preset, params) in cases {
            assert_eq!(preset.node_count(&params), 0, "{}", preset.name());
            assert!(preset.build(&params).is_empty(), "{}", preset.name());
        }

        // right at the limit is still predicted
        let at_limit = params![MAX_ELEMENTS / 2];
        assert_eq!(BuiltinPreset::Circular.node_count(&at_limit), MAX_ELEMENTS / 2);
        assert_eq!(BuiltinPreset::Circular.node_count(&params![MAX_ELEMENTS / 2 + 1]), 0);
    }

    #[test]
    fn builtin_defaults_match_table() {
        let style = StyleOptions::default();
        let reg = PresetRegistry::new();
        let counts: Vec<(usize, usize)> = reg
            .list_builtin()
            .into_iter()
            .map(|n| {
                let g = reg.generate(n, &[], &style);
                (g.node_count(), g.edge_count())
            })
            .collect();
        assert_eq!(
            counts,
            vec![
                (8, 12),  // cube
                (5, 8),   // pyramid
                (8, 12),  // prism
                (6, 12),  // octahedron
                (3, 3),   // triangle
                (2, 1),   // line
                (9, 16),  // cone
                (8, 28),  // star
                (12, 12), // circular
                (9, 12),  // grid
                (12, 20), // lattice
                (5, 4),   // spokes
                (0, 0),   // polyline
                (0, 0),   // paths
            ]
        );
    }
}
