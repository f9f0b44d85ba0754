//! Procedural 3D node/edge graphs.
//!
//! A named preset plus positional parameters produces a [`Graph`] (node
//! positions and index pairs). The [`render`] module turns a graph into
//! positioned primitives (spheres for nodes, cylinders for edges, cones for
//! arrow caps) that a host drawing layer can attach to its scene.
//!
//! ```
//! use wiregraph::{GraphGeometry, PresetRegistry, StyleOptions, params};
//!
//! let registry = PresetRegistry::new();
//! let geometry =
//!     GraphGeometry::build(&registry, "lattice", &params![1, 1, 1, 2.0], StyleOptions::default())
//!         .unwrap();
//! assert_eq!(geometry.node_count(), 8);
//! assert_eq!(geometry.edge_count(), 12);
//! assert_eq!(geometry.group().len(), 20);
//! ```

pub mod errors;
pub mod input;
pub mod log;
pub mod model;
pub mod presets;
pub mod render;
pub mod types;

pub use errors::{InputError, RenderError, StyleError};
pub use model::{ColorMode, ParameterModel};
pub use presets::{BuiltinPreset, Param, ParamList, PathOptions, PresetGenerator, PresetRegistry};
pub use render::{GraphRenderer, NodeColors, PrimitiveGroup, StyleOptions};
pub use types::{Color, Edge, Graph, Point3};

/// Generate the graph for preset `name`.
///
/// Unknown presets log a warning and give an empty graph.
pub fn generate(registry: &PresetRegistry, name: &str, params: &[Param], style: &StyleOptions) -> Graph {
    registry.generate(name, params, style)
}

/// A generated graph rendered into an owned primitive group.
///
/// This is the one-call construction surface: pick a preset, pass its
/// parameters and a style, get back something attachable.
#[derive(Debug)]
pub struct GraphGeometry {
    preset: String,
    renderer: GraphRenderer,
    node_count: usize,
    edge_count: usize,
}

impl GraphGeometry {
    /// Generate `name` with `params` and render it with `style`.
    ///
    /// Fails only when the generator emits an edge that references a node
    /// it did not produce.
    pub fn build(
        registry: &PresetRegistry,
        name: &str,
        params: &[Param],
        style: StyleOptions,
    ) -> Result<Self, RenderError> {
        let mut geometry = Self {
            preset: name.to_string(),
            renderer: GraphRenderer::new(style),
            node_count: 0,
            edge_count: 0,
        };
        geometry.regenerate(registry, name, params)?;
        Ok(geometry)
    }

    /// Regenerate in place with a new preset, parameters and style.
    ///
    /// On error the previous primitives and counts stay as they were; the new
    /// style is kept for the next rebuild.
    pub fn rebuild(
        &mut self,
        registry: &PresetRegistry,
        name: &str,
        params: &[Param],
        style: StyleOptions,
    ) -> Result<(), RenderError> {
        self.renderer.configure(style);
        self.regenerate(registry, name, params)
    }

    fn regenerate(
        &mut self,
        registry: &PresetRegistry,
        name: &str,
        params: &[Param],
    ) -> Result<(), RenderError> {
        let graph = registry.generate(name, params, self.renderer.options());
        self.renderer.render_graph(&graph)?;
        self.preset = name.to_string();
        self.node_count = graph.node_count();
        self.edge_count = graph.edge_count();
        log::debug!(
            preset = name,
            nodes = self.node_count,
            edges = self.edge_count,
            "built graph geometry"
        );
        Ok(())
    }

    /// Preset name of the last successful build
    pub fn preset(&self) -> &str {
        &self.preset
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn renderer(&self) -> &GraphRenderer {
        &self.renderer
    }

    /// The attachable primitive container
    pub fn group(&self) -> &PrimitiveGroup {
        self.renderer.group()
    }

    /// Release every owned resource; safe to call more than once
    pub fn dispose(&mut self) {
        self.renderer.dispose();
    }
}
