#![deny(missing_docs)]
//! svgforge core: SVG document detection, attribute dialects, and formatting.

/// Attribute renaming between markup and component (JSX) dialects.
pub mod attrs;
/// Tag-boundary re-indentation of markup text.
pub mod format;
/// Best-effort textual optimization and size metrics.
pub mod optimize;
/// Detection and extraction of SVG documents inside free text.
pub mod split;

pub use attrs::{ATTRIBUTE_PAIRS, to_component_dialect, to_markup_dialect};
pub use format::{DEFAULT_INDENT, Formatter, IndentFormatter, format_markup};
pub use optimize::{
    OptimizationMetrics, OptimizationResult, format_bytes, metrics, optimize,
};
pub use split::{contains_document, split_documents};
