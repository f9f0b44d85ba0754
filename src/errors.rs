//! Error types with diagnostics using miette
//!
//! Most bad input degrades gracefully (empty graph, default value, logged
//! warning). The types here cover the cases that are reported to the caller.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while assembling primitives from a graph
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("edge {edge} references node {index}, but the graph has {node_count} nodes")]
    #[diagnostic(
        code(wiregraph::render::edge_out_of_range),
        help("every edge endpoint must be a valid index into the node list")
    )]
    EdgeOutOfRange {
        edge: usize,
        index: usize,
        node_count: usize,
    },
}

// ============================================================================
// Style Errors
// ============================================================================

/// Errors found while validating style options
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("invalid value for `{key}`: {value} ({reason})")]
    #[diagnostic(code(wiregraph::style::invalid_value))]
    InvalidValue {
        key: &'static str,
        value: f64,
        reason: NumericError,
    },

    #[error("`{key}` needs at least {min} segments, got {value}")]
    #[diagnostic(code(wiregraph::style::too_few_segments))]
    TooFewSegments {
        key: &'static str,
        value: u32,
        min: u32,
    },
}

// ============================================================================
// Input Errors
// ============================================================================

/// Errors from textual input (JSON point lists, configuration documents)
#[derive(Error, Diagnostic, Debug)]
pub enum InputError {
    #[error("malformed JSON: {message}")]
    #[diagnostic(
        code(wiregraph::input::malformed_json),
        help("points are written as [{{\"x\": 0, \"y\": 0, \"z\": 0}}, ...]; `z` may be omitted")
    )]
    MalformedJson {
        message: String,
        line: usize,
        column: usize,
    },
}

impl From<serde_json::Error> for InputError {
    fn from(err: serde_json::Error) -> Self {
        InputError::MalformedJson {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}
