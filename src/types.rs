//! Core value types shared by the generators and the renderer.
//!
//! - Positions are plain glam `DVec3`s (`Point3`)
//! - Colors are packed `0xRRGGBB` values wrapped in a newtype
//! - Edges come in two shapes (bare pair or styled record) and are resolved
//!   to a single shape before rendering

use std::fmt;

use glam::DVec3;
use serde::Deserialize;

/// A position in 3D space.
pub type Point3 = DVec3;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Validate a strictly positive, finite value (radii, sizes).
#[inline]
pub fn try_positive(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Validate a finite, non-negative value.
#[inline]
pub fn try_non_negative(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Convert a numeric count parameter to an integer count.
///
/// Rounds to the nearest integer; NaN, infinite and negative values clamp to 0.
/// Generators and the node-count predictor both go through here so they
/// always agree.
#[inline]
pub fn to_count(val: f64) -> usize {
    if !val.is_finite() || val <= 0.0 {
        0
    } else {
        val.round() as usize
    }
}

/// RGB color packed as 0xRRGGBB.
///
/// Deserialized values go through [`Color::new`], so bits above 24 are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "u32")]
#[repr(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);
    pub const BLACK: Color = Color(0x000000);

    /// Build from a packed value, dropping anything above 24 bits.
    #[inline]
    pub const fn new(rgb: u32) -> Color {
        Color(rgb & 0xffffff)
    }

    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Color {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Split into (r, g, b) channels
    #[inline]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }

    /// Raw packed value
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl From<u32> for Color {
    fn from(rgb: u32) -> Self {
        Color::new(rgb)
    }
}

/// An edge between two node indices.
///
/// Generators emit bare pairs. Callers that want per-edge styling build the
/// `Styled` form; either way the renderer only ever sees a [`ResolvedEdge`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Pair(usize, usize),
    Styled {
        a: usize,
        b: usize,
        radius: Option<f64>,
        color: Option<Color>,
    },
}

impl Edge {
    /// Build a styled edge with explicit overrides
    pub fn styled(a: usize, b: usize, radius: Option<f64>, color: Option<Color>) -> Self {
        Edge::Styled { a, b, radius, color }
    }

    /// The (from, to) node indices
    pub fn endpoints(&self) -> (usize, usize) {
        match *self {
            Edge::Pair(a, b) => (a, b),
            Edge::Styled { a, b, .. } => (a, b),
        }
    }

    /// Normalize to the single internal shape, filling in the global defaults
    pub fn resolve(&self, default_radius: f64, default_color: Color) -> ResolvedEdge {
        match *self {
            Edge::Pair(a, b) => ResolvedEdge {
                a,
                b,
                radius: default_radius,
                color: default_color,
            },
            Edge::Styled { a, b, radius, color } => ResolvedEdge {
                a,
                b,
                radius: radius.unwrap_or(default_radius),
                color: color.unwrap_or(default_color),
            },
        }
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Edge::Pair(a, b)
    }
}

impl From<[usize; 2]> for Edge {
    fn from([a, b]: [usize; 2]) -> Self {
        Edge::Pair(a, b)
    }
}

/// An edge with every style value filled in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedEdge {
    pub a: usize,
    pub b: usize,
    pub radius: f64,
    pub color: Color,
}

/// A generated graph: ordered node positions plus connectivity.
///
/// A node's index in `nodes` is its only identity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    pub nodes: Vec<Point3>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Point3>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// A graph with no nodes and no edges
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Endpoint pairs of every edge, in order
    pub fn edge_pairs(&self) -> Vec<(usize, usize)> {
        self.edges.iter().map(Edge::endpoints).collect()
    }

    /// First edge that references a node index outside `nodes`, if any
    pub fn first_dangling_edge(&self) -> Option<(usize, usize)> {
        let n = self.nodes.len();
        self.edges
            .iter()
            .enumerate()
            .find_map(|(i, e)| {
                let (a, b) = e.endpoints();
                if a >= n {
                    Some((i, a))
                } else if b >= n {
                    Some((i, b))
                } else {
                    None
                }
            })
    }
}
