//! Render assembly: turns a graph into positioned primitives
//!
//! This module is organized into submodules:
//! - `defaults`: Default style values
//! - `types`: `StyleOptions` and `NodeColors`
//! - `geometry`: Distance, midpoint and orientation math
//! - `resources`: Mesh/material descriptors and the arena that owns them
//! - `shapes`: Primitive types (`NodeMarker`, `EdgeConnector`, `ArrowCap`)
//! - `context`: `RenderContext` for assembling one render pass

pub mod context;
pub mod defaults;
pub mod geometry;
pub mod resources;
pub mod shapes;
pub mod types;

pub use context::RenderContext;
pub use resources::{GeometryDesc, GeometryId, MaterialDesc, MaterialId, ResourceArena};
pub use shapes::{ArrowCap, EdgeConnector, NodeMarker, Primitive, PrimitiveEnum, Source};
pub use types::*;

use crate::errors::RenderError;
use crate::log::debug;
use crate::types::{Edge, Graph, Point3};

/// A rendered batch: the primitives plus the resources they reference.
///
/// This is the container a host attaches to its scene. Releasing it frees
/// every resource at once.
#[derive(Debug, Default)]
pub struct PrimitiveGroup {
    primitives: Vec<PrimitiveEnum>,
    resources: ResourceArena,
}

impl PrimitiveGroup {
    pub fn new(primitives: Vec<PrimitiveEnum>, resources: ResourceArena) -> Self {
        Self {
            primitives,
            resources,
        }
    }

    /// All primitives in emission order: every marker, then each connector
    /// followed by its arrow cap
    pub fn primitives(&self) -> &[PrimitiveEnum] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn markers(&self) -> impl Iterator<Item = &NodeMarker> {
        self.primitives.iter().filter_map(PrimitiveEnum::as_marker)
    }

    pub fn connectors(&self) -> impl Iterator<Item = &EdgeConnector> {
        self.primitives.iter().filter_map(PrimitiveEnum::as_connector)
    }

    pub fn arrows(&self) -> impl Iterator<Item = &ArrowCap> {
        self.primitives.iter().filter_map(PrimitiveEnum::as_arrow)
    }

    pub fn geometry(&self, id: GeometryId) -> Option<&GeometryDesc> {
        self.resources.geometry(id)
    }

    pub fn material(&self, id: MaterialId) -> Option<&MaterialDesc> {
        self.resources.material(id)
    }

    pub fn live_geometries(&self) -> usize {
        self.resources.live_geometries()
    }

    pub fn live_materials(&self) -> usize {
        self.resources.live_materials()
    }

    /// Drop every primitive and release every resource
    pub fn release(&mut self) {
        let (geometries, materials) = self.resources.release_all();
        if geometries + materials > 0 {
            debug!(
                primitives = self.primitives.len(),
                geometries, materials, "released primitive group"
            );
        }
        self.primitives.clear();
    }
}

/// Render assembler.
///
/// Owns the current [`PrimitiveGroup`]. Each successful [`render`] replaces
/// the group wholesale; a failed one leaves the previous group in place.
///
/// [`render`]: GraphRenderer::render
#[derive(Debug, Default)]
pub struct GraphRenderer {
    options: StyleOptions,
    group: PrimitiveGroup,
}

impl GraphRenderer {
    pub fn new(options: StyleOptions) -> Self {
        let mut renderer = Self::default();
        renderer.configure(options);
        renderer
    }

    /// Replace the style. Invalid values fall back to their defaults.
    ///
    /// Takes effect on the next [`render`](GraphRenderer::render).
    pub fn configure(&mut self, options: StyleOptions) {
        self.options = options.sanitized();
    }

    pub fn options(&self) -> &StyleOptions {
        &self.options
    }

    /// Build primitives for `nodes` and `edges`, replacing the current group.
    ///
    /// Fails if any edge references a node index outside `nodes`; the
    /// previously rendered group is then left untouched.
    pub fn render(&mut self, nodes: &[Point3], edges: &[Edge]) -> Result<&PrimitiveGroup, RenderError> {
        let mut ctx = RenderContext::new(&self.options, nodes);
        ctx.add_nodes();
        for (ordinal, edge) in edges.iter().enumerate() {
            ctx.add_edge(ordinal, edge)?;
        }
        let skipped = ctx.skipped_edges();
        let mut next = ctx.finish();

        std::mem::swap(&mut self.group, &mut next);
        next.release();

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            skipped,
            primitives = self.group.len(),
            "rendered graph"
        );
        Ok(&self.group)
    }

    pub fn render_graph(&mut self, graph: &Graph) -> Result<&PrimitiveGroup, RenderError> {
        self.render(&graph.nodes, &graph.edges)
    }

    /// The current group, empty before the first render and after dispose
    pub fn group(&self) -> &PrimitiveGroup {
        &self.group
    }

    /// Release every owned resource. Calling it again does nothing.
    pub fn dispose(&mut self) {
        self.group.release();
    }
}

impl Drop for GraphRenderer {
    fn drop(&mut self) {
        self.dispose();
    }
}
