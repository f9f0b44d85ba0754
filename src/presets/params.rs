//! Positional preset parameters.
//!
//! A preset is invoked as `(name, params, style)`. `params` is an ordered
//! list whose meaning depends on the preset; missing or mistyped entries
//! fall back to the preset's documented default.

use serde::Deserialize;

use crate::log::debug;
use crate::types::{Point3, to_count};

/// Default welding tolerance for merged paths
pub const DEFAULT_MERGE_TOLERANCE: f64 = 1e-6;

/// One positional argument to a preset generator
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Number(f64),
    Flag(bool),
    Points(Vec<Point3>),
    Paths(Vec<Vec<Point3>>),
    PathOptions(PathOptions),
}

impl Param {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    fn kind(&self) -> &'static str {
        match self {
            Param::Number(_) => "number",
            Param::Flag(_) => "flag",
            Param::Points(_) => "points",
            Param::Paths(_) => "paths",
            Param::PathOptions(_) => "path options",
        }
    }
}

/// Ordered positional arguments for one generator call
pub type ParamList = Vec<Param>;

/// Build a [`ParamList`] from anything convertible into [`Param`].
///
/// ```
/// use wiregraph::params;
/// let p = params![1, 1, 1, 2.0];
/// assert_eq!(p.len(), 4);
/// ```
#[macro_export]
macro_rules! params {
    ($($p:expr),* $(,)?) => {
        {
            let list: $crate::presets::ParamList = vec![$($crate::presets::Param::from($p)),*];
            list
        }
    };
}

impl From<f64> for Param {
    fn from(v: f64) -> Self {
        Param::Number(v)
    }
}

impl From<i32> for Param {
    fn from(v: i32) -> Self {
        Param::Number(v as f64)
    }
}

impl From<u32> for Param {
    fn from(v: u32) -> Self {
        Param::Number(v as f64)
    }
}

impl From<usize> for Param {
    fn from(v: usize) -> Self {
        Param::Number(v as f64)
    }
}

impl From<bool> for Param {
    fn from(v: bool) -> Self {
        Param::Flag(v)
    }
}

impl From<Vec<Point3>> for Param {
    fn from(v: Vec<Point3>) -> Self {
        Param::Points(v)
    }
}

impl From<Vec<Vec<Point3>>> for Param {
    fn from(v: Vec<Vec<Point3>>) -> Self {
        Param::Paths(v)
    }
}

impl From<PathOptions> for Param {
    fn from(v: PathOptions) -> Self {
        Param::PathOptions(v)
    }
}

/// Options for the `paths` preset
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PathOptions {
    /// Weld coincident points across sub-paths into shared nodes
    pub merge: bool,
    /// Grid size for welding; points in the same cell become one node
    pub merge_tolerance: f64,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            merge: false,
            merge_tolerance: DEFAULT_MERGE_TOLERANCE,
        }
    }
}

/// Typed read access to a positional parameter list
#[derive(Debug, Clone, Copy)]
pub struct Args<'a>(pub &'a [Param]);

impl<'a> Args<'a> {
    fn get(&self, i: usize) -> Option<&'a Param> {
        self.0.get(i)
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn mismatch(&self, i: usize, expected: &'static str) {
        if let Some(p) = self.get(i) {
            debug!(index = i, expected, got = p.kind(), "parameter type mismatch, using default");
        }
    }

    /// Numeric parameter `i`, or `default` when absent
    pub fn number(&self, i: usize, default: f64) -> f64 {
        match self.get(i) {
            Some(Param::Number(v)) => *v,
            _ => {
                self.mismatch(i, "number");
                default
            }
        }
    }

    /// Count parameter `i` (rounded, clamped at 0), or `default` when absent
    pub fn count(&self, i: usize, default: usize) -> usize {
        match self.get(i) {
            Some(Param::Number(v)) => to_count(*v),
            _ => {
                self.mismatch(i, "number");
                default
            }
        }
    }

    /// Boolean parameter `i`, or `default` when absent
    pub fn flag(&self, i: usize, default: bool) -> bool {
        match self.get(i) {
            Some(Param::Flag(v)) => *v,
            _ => {
                self.mismatch(i, "flag");
                default
            }
        }
    }

    /// Point list parameter `i`, or an empty slice when absent
    pub fn points(&self, i: usize) -> &'a [Point3] {
        match self.get(i) {
            Some(Param::Points(v)) => v,
            _ => {
                self.mismatch(i, "points");
                &[]
            }
        }
    }

    /// Path list parameter `i`, or an empty slice when absent
    pub fn paths(&self, i: usize) -> &'a [Vec<Point3>] {
        match self.get(i) {
            Some(Param::Paths(v)) => v,
            _ => {
                self.mismatch(i, "paths");
                &[]
            }
        }
    }

    /// Path options parameter `i`, or the defaults when absent
    pub fn path_options(&self, i: usize) -> PathOptions {
        match self.get(i) {
            Some(Param::PathOptions(v)) => *v,
            _ => {
                self.mismatch(i, "path options");
                PathOptions::default()
            }
        }
    }
}
