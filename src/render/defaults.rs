//! Default render style (world units; colors packed 0xRRGGBB)

use crate::types::Color;

pub const NODE_RADIUS: f64 = 0.12;
pub const EDGE_RADIUS: f64 = 0.02;
pub const NODE_COLOR: Color = Color(0x00ffff);
pub const EDGE_COLOR: Color = Color(0xffffff);
pub const NODE_SEGMENTS: u32 = 16;
pub const EDGE_SEGMENTS: u32 = 8;
pub const ARROW_SIZE: f64 = 0.18;
pub const ARROW_SEGMENTS: u32 = 8;
/// Arrow cap base radius as a multiple of its edge's radius
pub const ARROW_RADIUS_FACTOR: f64 = 2.2;
/// Fewest segments any tessellated primitive may use
pub const MIN_SEGMENTS: u32 = 3;
