//! Parameter model: every knob an interactive front end exposes, with defaults.
//!
//! The model is a flat, serde-deserializable record. It knows how to turn
//! itself into [`StyleOptions`] and into the positional parameters for the
//! selected preset, and how to size per-node overrides before generation.

use rand::Rng;
use serde::Deserialize;

use crate::errors::InputError;
use crate::input::{parse_paths, parse_points};
use crate::presets::{BuiltinPreset, ParamList, PathOptions};
use crate::render::{NodeColors, StyleOptions};
use crate::types::Color;

/// Alternating per-node colors: even indices, then odd indices
pub const ALTERNATE_COLORS: [Color; 2] = [Color(0xff60cc), Color(0x00e0ff)];

const SAMPLE_POLYLINE: &str = r#"[
  { "x": -2, "y": 0, "z": 0 },
  { "x": -0.8, "y": 0.6, "z": 0 },
  { "x": 0.4, "y": 1.2, "z": 0 }
]"#;

const SAMPLE_PATHS: &str = r#"[
  [ { "x": -2, "y": 0, "z": 0 }, { "x": -0.8, "y": 0.6, "z": 0 }, { "x": 0.4, "y": 1.2, "z": 0 } ],
  [ { "x": -0.8, "y": 0.6, "z": 0 }, { "x": -0.8, "y": 2.0, "z": 0 } ],
  [ { "x": 0.4, "y": 1.2, "z": 0 }, { "x": 1.6, "y": 1.2, "z": 0 } ]
]"#;

/// How per-node colors are chosen when enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Alternate,
    Random,
}

/// Per-node radius/color tables sized for the current preset
#[derive(Debug, Clone, Default)]
pub struct NodeOverrides {
    pub radii: Option<Vec<Option<f64>>>,
    pub colors: Option<NodeColors>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParameterModel {
    pub preset: String,

    // style
    pub node_color: Color,
    pub edge_color: Color,
    pub node_radius: f64,
    pub edge_radius: f64,
    pub node_segments: u32,
    pub edge_segments: u32,

    // directed
    pub directed: bool,
    pub arrow_size: f64,
    pub arrow_segments: u32,

    // per-node
    pub use_node_radii: bool,
    pub min_node_radius: f64,
    pub max_node_radius: f64,
    pub use_node_colors: bool,
    pub color_mode: ColorMode,

    // cube
    pub size: f64,
    pub include_face_centers: bool,

    // pyramid
    pub base_size: f64,
    pub height: f64,

    // prism
    pub width: f64,
    pub p_height: f64,
    pub depth: f64,

    // octahedron / triangle / line
    pub o_size: f64,
    pub t_size: f64,
    pub length: f64,

    // cone
    pub c_radius: f64,
    pub c_height: f64,
    pub base_segments: f64,

    // star / circular
    pub count: f64,
    pub radius: f64,

    // grid
    pub rows: f64,
    pub cols: f64,
    pub spacing: f64,

    // lattice
    pub nx: f64,
    pub ny: f64,
    pub nz: f64,
    pub l_spacing: f64,

    // spokes
    pub spokes_count: f64,
    pub spokes_len: f64,
    pub spokes_offset: f64,

    // polyline / paths, as JSON text
    #[serde(alias = "polylineJSON")]
    pub polyline_json: String,
    #[serde(alias = "pathsJSON")]
    pub paths_json: String,
    pub merge: bool,
    pub merge_tol: f64,

    #[serde(skip)]
    overrides: NodeOverrides,
}

impl Default for ParameterModel {
    fn default() -> Self {
        Self {
            preset: "cube".to_string(),
            node_color: Color(0xff66cc),
            edge_color: Color(0x3333ff),
            node_radius: 0.15,
            edge_radius: 0.03,
            node_segments: 16,
            edge_segments: 8,
            directed: false,
            arrow_size: 0.22,
            arrow_segments: 8,
            use_node_radii: false,
            min_node_radius: 0.10,
            max_node_radius: 0.24,
            use_node_colors: false,
            color_mode: ColorMode::Alternate,
            size: 2.0,
            include_face_centers: false,
            base_size: 2.0,
            height: 3.0,
            width: 2.0,
            p_height: 1.0,
            depth: 0.5,
            o_size: 2.0,
            t_size: 2.0,
            length: 6.0,
            c_radius: 2.0,
            c_height: 3.0,
            base_segments: 8.0,
            count: 10.0,
            radius: 3.0,
            rows: 3.0,
            cols: 3.0,
            spacing: 2.0,
            nx: 2.0,
            ny: 1.0,
            nz: 1.0,
            l_spacing: 2.0,
            spokes_count: 4.0,
            spokes_len: 2.0,
            spokes_offset: std::f64::consts::FRAC_PI_4,
            polyline_json: SAMPLE_POLYLINE.to_string(),
            paths_json: SAMPLE_PATHS.to_string(),
            merge: true,
            merge_tol: 1e-4,
            overrides: NodeOverrides::default(),
        }
    }
}

impl ParameterModel {
    /// Parse a (possibly partial) JSON document; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render style for the current parameters, including any per-node
    /// overrides from the last [`allocate_per_node_overrides`] call
    ///
    /// [`allocate_per_node_overrides`]: ParameterModel::allocate_per_node_overrides
    pub fn style_options(&self) -> StyleOptions {
        StyleOptions {
            node_color: self.node_color,
            edge_color: self.edge_color,
            node_radius: self.node_radius,
            edge_radius: self.edge_radius,
            node_segments: self.node_segments,
            edge_segments: self.edge_segments,
            directed: self.directed,
            arrow_size: self.arrow_size,
            arrow_segments: self.arrow_segments,
            node_radii: self.overrides.radii.clone(),
            node_colors: self.overrides.colors.clone(),
        }
    }

    /// Positional parameters for the selected preset.
    ///
    /// Presets that are not built in (user presets) get an empty list.
    pub fn preset_parameters(&self) -> ParamList {
        let Some(preset) = BuiltinPreset::from_name(&self.preset) else {
            return ParamList::new();
        };
        match preset {
            BuiltinPreset::Cube => crate::params![self.size, self.include_face_centers],
            BuiltinPreset::Pyramid => crate::params![self.base_size, self.height],
            BuiltinPreset::Prism => crate::params![self.width, self.p_height, self.depth],
            BuiltinPreset::Octahedron => crate::params![self.o_size],
            BuiltinPreset::Triangle => crate::params![self.t_size],
            BuiltinPreset::Line => crate::params![self.length],
            BuiltinPreset::Cone => crate::params![self.c_radius, self.c_height, self.base_segments],
            BuiltinPreset::Star | BuiltinPreset::Circular => {
                crate::params![self.count, self.radius]
            }
            BuiltinPreset::Grid => crate::params![self.rows, self.cols, self.spacing],
            BuiltinPreset::Lattice => crate::params![self.nx, self.ny, self.nz, self.l_spacing],
            BuiltinPreset::Spokes => {
                crate::params![self.spokes_count, self.spokes_len, self.spokes_offset]
            }
            BuiltinPreset::Polyline => crate::params![parse_points(&self.polyline_json)],
            BuiltinPreset::Paths => crate::params![
                parse_paths(&self.paths_json),
                PathOptions {
                    merge: self.merge,
                    merge_tolerance: self.merge_tol,
                }
            ],
        }
    }

    /// Nodes the selected preset will generate with the current parameters.
    ///
    /// User presets are opaque, so they report 0.
    pub fn compute_node_count(&self) -> usize {
        BuiltinPreset::from_name(&self.preset)
            .map(|p| p.node_count(&self.preset_parameters()))
            .unwrap_or(0)
    }

    /// Size per-node radius/color tables for the selected preset and store
    /// them for [`style_options`](ParameterModel::style_options).
    ///
    /// Disabled tables are cleared. Returns the node count used.
    pub fn allocate_per_node_overrides<R: Rng>(&mut self, rng: &mut R) -> usize {
        let count = self.compute_node_count();

        self.overrides.radii = self.use_node_radii.then(|| {
            let (min, max) = (self.min_node_radius, self.max_node_radius);
            // sampling needs a non-empty range with a finite width
            let sample = min < max && (max - min).is_finite();
            (0..count)
                .map(|_| Some(if sample { rng.gen_range(min..max) } else { min }))
                .collect()
        });

        self.overrides.colors = self.use_node_colors.then(|| match self.color_mode {
            ColorMode::Alternate => {
                NodeColors::fixed((0..count).map(|i| ALTERNATE_COLORS[i % 2]))
            }
            ColorMode::Random => {
                NodeColors::fixed((0..count).map(|_| Color(rng.gen_range(0..=0xffffff))))
            }
        });

        count
    }

    /// The tables stored by the last allocation
    pub fn overrides(&self) -> &NodeOverrides {
        &self.overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn partial_json_keeps_defaults() {
        let model =
            ParameterModel::from_json(r#"{ "preset": "grid", "rows": 4, "colorMode": "random" }"#)
                .unwrap();
        assert_eq!(model.preset, "grid");
        assert_eq!(model.rows, 4.0);
        assert_eq!(model.cols, 3.0);
        assert_eq!(model.color_mode, ColorMode::Random);
        assert_eq!(model.node_color, Color(0xff66cc));
    }

    #[test]
    fn uppercase_json_keys_are_accepted() {
        let model = ParameterModel::from_json(r#"{ "polylineJSON": "[]" }"#).unwrap();
        assert_eq!(model.polyline_json, "[]");
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(ParameterModel::from_json("{ preset: cube }").is_err());
    }

    #[test]
    fn sample_paths_count() {
        let mut model = ParameterModel { preset: "paths".into(), ..Default::default() };
        assert_eq!(model.compute_node_count(), 5);
        model.merge = false;
        assert_eq!(model.compute_node_count(), 7);
        model.preset = "polyline".into();
        assert_eq!(model.compute_node_count(), 3);
    }

    #[test]
    fn user_presets_get_no_parameters() {
        let model = ParameterModel { preset: "my-thing".into(), ..Default::default() };
        assert!(model.preset_parameters().is_empty());
        assert_eq!(model.compute_node_count(), 0);
    }

    #[test]
    fn alternate_colors() {
        let mut model = ParameterModel {
            preset: "circular".into(),
            count: 5.0,
            use_node_colors: true,
            ..Default::default()
        };
        let n = model.allocate_per_node_overrides(&mut StdRng::seed_from_u64(1));
        assert_eq!(n, 5);
        let style = model.style_options();
        assert_eq!(style.node_color_override(0), Some(Color(0xff60cc)));
        assert_eq!(style.node_color_override(1), Some(Color(0x00e0ff)));
        assert_eq!(style.node_color_override(4), Some(Color(0xff60cc)));
        assert_eq!(style.node_color_override(5), None);
        assert!(style.node_radii.is_none());
    }

    #[test]
    fn random_radii_stay_in_range() {
        let mut model = ParameterModel {
            preset: "grid".into(),
            use_node_radii: true,
            use_node_colors: true,
            color_mode: ColorMode::Random,
            ..Default::default()
        };
        model.allocate_per_node_overrides(&mut StdRng::seed_from_u64(42));
        let radii = model.overrides().radii.clone().unwrap();
        assert_eq!(radii.len(), 9);
        assert!(radii.iter().flatten().all(|r| (0.10..0.24).contains(r)));
        let colors = model.overrides().colors.as_ref().unwrap();
        assert!((0..9).all(|i| colors.color_for(i).is_some_and(|c| c.raw() <= 0xffffff)));
    }

    #[test]
    fn unsampleable_radius_range_uses_minimum() {
        let mut model = ParameterModel::from_json(
            r#"{ "useNodeRadii": true, "minNodeRadius": -1.7e308, "maxNodeRadius": 1.7e308 }"#,
        )
        .unwrap();
        let count = model.allocate_per_node_overrides(&mut StdRng::seed_from_u64(3));
        let radii = model.overrides().radii.clone().unwrap();
        assert_eq!(radii.len(), count);
        assert!(radii.iter().all(|r| *r == Some(-1.7e308)));
        // negative radii never reach the renderer
        let style = model.style_options().sanitized();
        assert!((0..count).all(|i| style.node_radius_for(i) == style.node_radius));

        model.min_node_radius = 0.3;
        model.max_node_radius = 0.3;
        model.allocate_per_node_overrides(&mut StdRng::seed_from_u64(3));
        assert!(model.overrides().radii.iter().flatten().all(|r| *r == Some(0.3)));
    }

    #[test]
    fn disabling_clears_tables() {
        let mut model = ParameterModel { use_node_radii: true, ..Default::default() };
        model.allocate_per_node_overrides(&mut StdRng::seed_from_u64(0));
        assert!(model.overrides().radii.is_some());
        model.use_node_radii = false;
        model.allocate_per_node_overrides(&mut StdRng::seed_from_u64(0));
        assert!(model.overrides().radii.is_none());
    }
}
