#![deny(missing_docs)]
//! svgforge codegen: envelope extraction, component synthesis, and output dispatch.

/// Component dialects and their source templates.
pub mod dialect;
/// Output-mode routing.
pub mod dispatch;
/// Extraction of the outer `<svg>` envelope.
pub mod envelope;
/// Synthesis error types.
pub mod error;
/// Bulk-export planning: format table, archive entries, stats.
pub mod export;
/// File and component naming conventions.
pub mod naming;

pub use dialect::{
    ComponentSpec, DEFAULT_COMPONENT_NAME, DEFAULT_SIZE, Dialect, synthesize, try_synthesize,
};
pub use dispatch::{OutputMode, render, render_named, render_with_name};
pub use envelope::SvgEnvelope;
pub use error::SynthesisError;
pub use export::{
    BundleResult, EXPORT_FORMATS, ExportEntry, ExportFormat, ExportInput, ExportStats,
    format_by_id, render_bundle, render_readme,
};
pub use naming::{NamingConvention, convert_file_name};
