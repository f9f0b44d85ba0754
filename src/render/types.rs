//! Render style configuration

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Deserializer};

use crate::errors::StyleError;
use crate::log::warn;
use crate::types::{Color, try_positive};

use super::defaults;

/// Per-node color override: a fixed table, or a function of the node index.
///
/// A `None` entry (or result) leaves that node on the global node color.
#[derive(Clone)]
pub enum NodeColors {
    Fixed(Vec<Option<Color>>),
    Computed(Rc<dyn Fn(usize) -> Option<Color>>),
}

impl NodeColors {
    /// Fixed table where every node has a color
    pub fn fixed(colors: impl IntoIterator<Item = Color>) -> Self {
        NodeColors::Fixed(colors.into_iter().map(Some).collect())
    }

    pub fn computed(f: impl Fn(usize) -> Option<Color> + 'static) -> Self {
        NodeColors::Computed(Rc::new(f))
    }

    /// Override for node `index`, if any
    pub fn color_for(&self, index: usize) -> Option<Color> {
        match self {
            NodeColors::Fixed(colors) => colors.get(index).copied().flatten(),
            NodeColors::Computed(f) => f(index),
        }
    }
}

impl fmt::Debug for NodeColors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeColors::Fixed(colors) => f.debug_tuple("Fixed").field(colors).finish(),
            NodeColors::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Everything the renderer needs to know about appearance.
///
/// Deserializes from camelCase JSON; missing keys take the defaults and
/// unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleOptions {
    pub node_color: Color,
    pub edge_color: Color,
    pub node_radius: f64,
    pub edge_radius: f64,
    /// Sphere tessellation
    pub node_segments: u32,
    /// Cylinder tessellation
    pub edge_segments: u32,
    /// Add an arrow cap at the destination end of every edge
    pub directed: bool,
    /// Arrow cap length
    pub arrow_size: f64,
    pub arrow_segments: u32,
    /// Per-node radius, parallel to the node list
    pub node_radii: Option<Vec<Option<f64>>>,
    #[serde(deserialize_with = "deserialize_node_colors")]
    pub node_colors: Option<NodeColors>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            node_color: defaults::NODE_COLOR,
            edge_color: defaults::EDGE_COLOR,
            node_radius: defaults::NODE_RADIUS,
            edge_radius: defaults::EDGE_RADIUS,
            node_segments: defaults::NODE_SEGMENTS,
            edge_segments: defaults::EDGE_SEGMENTS,
            directed: false,
            arrow_size: defaults::ARROW_SIZE,
            arrow_segments: defaults::ARROW_SEGMENTS,
            node_radii: None,
            node_colors: None,
        }
    }
}

fn deserialize_node_colors<'de, D>(deserializer: D) -> Result<Option<NodeColors>, D::Error>
where
    D: Deserializer<'de>,
{
    let table: Option<Vec<Option<Color>>> = Option::deserialize(deserializer)?;
    Ok(table.map(NodeColors::Fixed))
}

impl StyleOptions {
    /// Per-node radius override for `index`, if present
    pub fn node_radius_override(&self, index: usize) -> Option<f64> {
        self.node_radii
            .as_ref()
            .and_then(|radii| radii.get(index).copied().flatten())
    }

    /// Radius node `index` is drawn with: its override, else the global radius
    pub fn node_radius_for(&self, index: usize) -> f64 {
        self.node_radius_override(index).unwrap_or(self.node_radius)
    }

    /// Per-node color override for `index`, if present
    pub fn node_color_override(&self, index: usize) -> Option<Color> {
        self.node_colors.as_ref().and_then(|c| c.color_for(index))
    }

    /// Check every value; an empty list means the options are usable as-is
    pub fn validate(&self) -> Vec<StyleError> {
        let mut errors = Vec::new();

        for (key, value) in [
            ("nodeRadius", self.node_radius),
            ("edgeRadius", self.edge_radius),
            ("arrowSize", self.arrow_size),
        ] {
            if let Err(reason) = try_positive(value) {
                errors.push(StyleError::InvalidValue { key, value, reason });
            }
        }

        for (key, value) in [
            ("nodeSegments", self.node_segments),
            ("edgeSegments", self.edge_segments),
            ("arrowSegments", self.arrow_segments),
        ] {
            if value < defaults::MIN_SEGMENTS {
                errors.push(StyleError::TooFewSegments {
                    key,
                    value,
                    min: defaults::MIN_SEGMENTS,
                });
            }
        }

        if let Some(radii) = &self.node_radii {
            for value in radii.iter().flatten().copied() {
                if let Err(reason) = try_positive(value) {
                    errors.push(StyleError::InvalidValue { key: "nodeRadii", value, reason });
                }
            }
        }

        errors
    }

    /// Replace every invalid value with its default, logging each one.
    ///
    /// Invalid per-node radii become `None` so those nodes use the global radius.
    pub fn sanitized(mut self) -> Self {
        for error in self.validate() {
            warn!(%error, "invalid style option, using default");
            match error {
                StyleError::InvalidValue { key: "nodeRadius", .. } => {
                    self.node_radius = defaults::NODE_RADIUS
                }
                StyleError::InvalidValue { key: "edgeRadius", .. } => {
                    self.edge_radius = defaults::EDGE_RADIUS
                }
                StyleError::InvalidValue { key: "arrowSize", .. } => {
                    self.arrow_size = defaults::ARROW_SIZE
                }
                StyleError::TooFewSegments { key: "nodeSegments", .. } => {
                    self.node_segments = defaults::NODE_SEGMENTS
                }
                StyleError::TooFewSegments { key: "edgeSegments", .. } => {
                    self.edge_segments = defaults::EDGE_SEGMENTS
                }
                StyleError::TooFewSegments { key: "arrowSegments", .. } => {
                    self.arrow_segments = defaults::ARROW_SEGMENTS
                }
                _ => {}
            }
        }

        if let Some(radii) = self.node_radii.as_mut() {
            for slot in radii.iter_mut() {
                if slot.is_some_and(|r| try_positive(r).is_err()) {
                    *slot = None;
                }
            }
        }

        self
    }
}
