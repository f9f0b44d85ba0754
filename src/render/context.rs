//! Render context - assembly state for one render pass
//!
//! A context starts empty, accumulates primitives and the resources they
//! use, and is consumed into a [`PrimitiveGroup`]. Shared resources (the node
//! sphere and the default node/edge materials) are allocated on first use.

use crate::errors::RenderError;
use crate::log::warn;
use crate::types::{Color, Edge, Point3, try_positive};

use super::PrimitiveGroup;
use super::defaults::ARROW_RADIUS_FACTOR;
use super::geometry::is_degenerate;
use super::resources::{GeometryDesc, GeometryId, MaterialDesc, MaterialId, ResourceArena};
use super::shapes::{ArrowCap, EdgeConnector, NodeMarker, PrimitiveEnum};
use super::types::StyleOptions;

pub struct RenderContext<'a> {
    style: &'a StyleOptions,
    nodes: &'a [Point3],
    resources: ResourceArena,
    primitives: Vec<PrimitiveEnum>,
    node_sphere: Option<GeometryId>,
    node_material: Option<MaterialId>,
    edge_material: Option<MaterialId>,
    /// Edges with no drawable length
    skipped_edges: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(style: &'a StyleOptions, nodes: &'a [Point3]) -> Self {
        Self {
            style,
            nodes,
            resources: ResourceArena::new(),
            primitives: Vec::with_capacity(nodes.len()),
            node_sphere: None,
            node_material: None,
            edge_material: None,
            skipped_edges: 0,
        }
    }

    fn node_sphere(&mut self) -> GeometryId {
        let style = self.style;
        *self.node_sphere.get_or_insert_with(|| {
            self.resources.add_geometry(GeometryDesc::Sphere {
                radius: style.node_radius,
                segments: style.node_segments,
            })
        })
    }

    fn node_material(&mut self) -> MaterialId {
        let color = self.style.node_color;
        *self
            .node_material
            .get_or_insert_with(|| self.resources.add_material(MaterialDesc { color }))
    }

    /// Shared material for the global edge color, or a fresh one for any other
    fn edge_material(&mut self, color: Color) -> MaterialId {
        if color != self.style.edge_color {
            return self.resources.add_material(MaterialDesc { color });
        }
        let color = self.style.edge_color;
        *self
            .edge_material
            .get_or_insert_with(|| self.resources.add_material(MaterialDesc { color }))
    }

    /// Emit one marker per node
    pub fn add_nodes(&mut self) {
        let nodes = self.nodes;
        for (index, &position) in nodes.iter().enumerate() {
            let geometry = self.node_sphere();
            let scale = self.style.node_radius_for(index) / self.style.node_radius;
            let material = match self.style.node_color_override(index) {
                Some(color) => self.resources.add_material(MaterialDesc { color }),
                None => self.node_material(),
            };
            self.primitives
                .push(NodeMarker::new(index, position, scale, geometry, material).into());
        }
    }

    /// Emit the connector for edge number `ordinal`, plus its arrow cap when
    /// the style is directed
    pub fn add_edge(&mut self, ordinal: usize, edge: &Edge) -> Result<(), RenderError> {
        let style = self.style;
        let mut resolved = edge.resolve(style.edge_radius, style.edge_color);
        if let Err(error) = try_positive(resolved.radius) {
            warn!(edge = ordinal, radius = resolved.radius, %error, "invalid edge radius, using default");
            resolved.radius = style.edge_radius;
        }
        let p = self.node_at(ordinal, resolved.a)?;
        let q = self.node_at(ordinal, resolved.b)?;

        if is_degenerate(p, q) {
            warn!(edge = ordinal, a = resolved.a, b = resolved.b, "zero-length edge skipped");
            self.skipped_edges += 1;
            return Ok(());
        }

        let geometry = self.resources.add_geometry(GeometryDesc::Cylinder {
            radius: resolved.radius,
            height: p.distance(q),
            segments: style.edge_segments,
        });
        let material = self.edge_material(resolved.color);
        let Some(connector) = EdgeConnector::between(&resolved, p, q, geometry, material) else {
            self.skipped_edges += 1;
            return Ok(());
        };

        if style.directed {
            let cone = self.resources.add_geometry(GeometryDesc::Cone {
                radius: resolved.radius * ARROW_RADIUS_FACTOR,
                height: style.arrow_size,
                segments: style.arrow_segments,
            });
            let cap = ArrowCap::for_connector(
                &connector,
                q,
                style.node_radius_for(resolved.b),
                style.arrow_size,
                cone,
                material,
            );
            self.primitives.push(connector.into());
            self.primitives.push(cap.into());
        } else {
            self.primitives.push(connector.into());
        }
        Ok(())
    }

    fn node_at(&self, ordinal: usize, index: usize) -> Result<Point3, RenderError> {
        self.nodes
            .get(index)
            .copied()
            .ok_or(RenderError::EdgeOutOfRange {
                edge: ordinal,
                index,
                node_count: self.nodes.len(),
            })
    }

    pub fn skipped_edges(&self) -> usize {
        self.skipped_edges
    }

    pub fn finish(self) -> PrimitiveGroup {
        PrimitiveGroup::new(self.primitives, self.resources)
    }
}
