//! Mesh and material descriptors plus the arena that owns them.
//!
//! Primitives never hold geometry or materials directly. They hold small
//! copyable handles into a [`ResourceArena`], which tracks what is still live
//! so releasing a rendered group is a single call and leaks are countable.

use crate::types::Color;

/// Tessellated mesh description, in local space with the long axis on +Y
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryDesc {
    Sphere { radius: f64, segments: u32 },
    /// Centered on the origin, spanning `-height/2..height/2` along Y
    Cylinder { radius: f64, height: f64, segments: u32 },
    /// Base at `-height/2`, apex at `+height/2`
    Cone { radius: f64, height: f64, segments: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialDesc {
    pub color: Color,
}

/// Handle to a geometry slot in a [`ResourceArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryId(usize);

/// Handle to a material slot in a [`ResourceArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(usize);

/// Owner of every geometry and material a rendered group uses.
///
/// Slots are never reused; a released slot stays `None` so stale handles
/// resolve to nothing instead of to someone else's resource.
#[derive(Debug, Default)]
pub struct ResourceArena {
    geometries: Vec<Option<GeometryDesc>>,
    materials: Vec<Option<MaterialDesc>>,
}

impl ResourceArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_geometry(&mut self, desc: GeometryDesc) -> GeometryId {
        self.geometries.push(Some(desc));
        GeometryId(self.geometries.len() - 1)
    }

    pub fn add_material(&mut self, desc: MaterialDesc) -> MaterialId {
        self.materials.push(Some(desc));
        MaterialId(self.materials.len() - 1)
    }

    pub fn geometry(&self, id: GeometryId) -> Option<&GeometryDesc> {
        self.geometries.get(id.0).and_then(Option::as_ref)
    }

    pub fn material(&self, id: MaterialId) -> Option<&MaterialDesc> {
        self.materials.get(id.0).and_then(Option::as_ref)
    }

    pub fn live_geometries(&self) -> usize {
        self.geometries.iter().flatten().count()
    }

    pub fn live_materials(&self) -> usize {
        self.materials.iter().flatten().count()
    }

    /// Release everything. Returns `(geometries, materials)` actually freed,
    /// so a second call reports `(0, 0)`.
    pub fn release_all(&mut self) -> (usize, usize) {
        let geometries = self.geometries.iter_mut().filter_map(Option::take).count();
        let materials = self.materials.iter_mut().filter_map(Option::take).count();
        (geometries, materials)
    }
}
