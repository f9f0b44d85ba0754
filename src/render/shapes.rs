//! Primitive types emitted by the renderer
//!
//! Each primitive knows its placement (position, rotation, scale), which
//! geometry and material it draws with, and which part of the graph it came
//! from. [`PrimitiveEnum`] gives them uniform storage.

use enum_dispatch::enum_dispatch;
use glam::{DMat4, DQuat, DVec3};

use crate::types::{Point3, ResolvedEdge};

use super::geometry::{direction, distance, midpoint};
use super::resources::{GeometryId, MaterialId};

/// The graph element a primitive was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Node(usize),
    Edge(usize, usize),
}

/// Common behavior for all primitives
#[enum_dispatch]
pub trait Primitive {
    /// World-space position of the primitive's local origin
    fn position(&self) -> Point3;

    fn rotation(&self) -> DQuat {
        DQuat::IDENTITY
    }

    fn scale(&self) -> DVec3 {
        DVec3::ONE
    }

    fn geometry(&self) -> GeometryId;

    fn material(&self) -> MaterialId;

    fn source(&self) -> Source;

    /// Local-to-world transform: scale, then rotate, then translate
    fn transform(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(self.scale(), self.rotation(), self.position())
    }
}

// ============================================================================
// Node marker
// ============================================================================

/// Sphere at a node position.
///
/// Markers share one unit-radius-relative sphere; a per-node radius shows up
/// as a uniform scale of `radius / global radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeMarker {
    pub index: usize,
    pub position: Point3,
    pub scale: f64,
    pub geometry: GeometryId,
    pub material: MaterialId,
}

impl NodeMarker {
    pub fn new(
        index: usize,
        position: Point3,
        scale: f64,
        geometry: GeometryId,
        material: MaterialId,
    ) -> Self {
        Self {
            index,
            position,
            scale,
            geometry,
            material,
        }
    }
}

impl Primitive for NodeMarker {
    fn position(&self) -> Point3 {
        self.position
    }

    fn scale(&self) -> DVec3 {
        DVec3::splat(self.scale)
    }

    fn geometry(&self) -> GeometryId {
        self.geometry
    }

    fn material(&self) -> MaterialId {
        self.material
    }

    fn source(&self) -> Source {
        Source::Node(self.index)
    }
}

// ============================================================================
// Edge connector
// ============================================================================

/// Cylinder spanning an edge, centered on its midpoint with +Y along `a → b`
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeConnector {
    pub a: usize,
    pub b: usize,
    pub position: Point3,
    pub rotation: DQuat,
    pub length: f64,
    pub radius: f64,
    pub geometry: GeometryId,
    pub material: MaterialId,
}

impl EdgeConnector {
    /// Connector for `edge` running from `p` to `q`; `None` when they coincide
    pub fn between(
        edge: &ResolvedEdge,
        p: Point3,
        q: Point3,
        geometry: GeometryId,
        material: MaterialId,
    ) -> Option<Self> {
        let dir = direction(p, q)?;
        Some(Self {
            a: edge.a,
            b: edge.b,
            position: midpoint(p, q),
            rotation: DQuat::from_rotation_arc(DVec3::Y, dir),
            length: distance(p, q),
            radius: edge.radius,
            geometry,
            material,
        })
    }

    /// Unit direction the connector points along
    pub fn axis(&self) -> DVec3 {
        self.rotation * DVec3::Y
    }
}

impl Primitive for EdgeConnector {
    fn position(&self) -> Point3 {
        self.position
    }

    fn rotation(&self) -> DQuat {
        self.rotation
    }

    fn geometry(&self) -> GeometryId {
        self.geometry
    }

    fn material(&self) -> MaterialId {
        self.material
    }

    fn source(&self) -> Source {
        Source::Edge(self.a, self.b)
    }
}

// ============================================================================
// Arrow cap
// ============================================================================

/// Cone near the destination end of a directed edge.
///
/// The cap's center sits `dest_radius + size/2` back from the destination
/// along the edge, so its tip meets the node surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowCap {
    pub a: usize,
    pub b: usize,
    pub position: Point3,
    pub rotation: DQuat,
    pub geometry: GeometryId,
    pub material: MaterialId,
}

impl ArrowCap {
    /// Cap for the connector, backed off from `end` by the destination radius
    pub fn for_connector(
        connector: &EdgeConnector,
        end: Point3,
        dest_radius: f64,
        size: f64,
        geometry: GeometryId,
        material: MaterialId,
    ) -> Self {
        Self {
            a: connector.a,
            b: connector.b,
            position: end - connector.axis() * (dest_radius + size / 2.0),
            rotation: connector.rotation,
            geometry,
            material,
        }
    }
}

impl Primitive for ArrowCap {
    fn position(&self) -> Point3 {
        self.position
    }

    fn rotation(&self) -> DQuat {
        self.rotation
    }

    fn geometry(&self) -> GeometryId {
        self.geometry
    }

    fn material(&self) -> MaterialId {
        self.material
    }

    fn source(&self) -> Source {
        Source::Edge(self.a, self.b)
    }
}

// ============================================================================
// Primitive Enum
// ============================================================================

/// Any renderable primitive
#[enum_dispatch(Primitive)]
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveEnum {
    NodeMarker,
    EdgeConnector,
    ArrowCap,
}

impl PrimitiveEnum {
    pub fn as_marker(&self) -> Option<&NodeMarker> {
        match self {
            PrimitiveEnum::NodeMarker(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_connector(&self) -> Option<&EdgeConnector> {
        match self {
            PrimitiveEnum::EdgeConnector(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_arrow(&self) -> Option<&ArrowCap> {
        match self {
            PrimitiveEnum::ArrowCap(a) => Some(a),
            _ => None,
        }
    }
}
