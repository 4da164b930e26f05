//! Bulk-export planning: format table, archive entries, stats.
//!
//! The library plans a bundle (relative paths plus file contents) and the
//! presentation layer owns the actual packaging (ZIP, download). Entries
//! whose rendered output came back empty are still listed but counted as
//! failed, so the caller can surface them.

use serde::{Deserialize, Serialize};
use svgforge_core::attrs::to_component_dialect;

use crate::dialect::{Dialect, synthesize};
use crate::naming::{NamingConvention, convert_file_name};

/// One selectable output format of a bulk export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExportFormat {
    /// Stable string id, shared with the dispatch/dialect ids.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// File extension, without the dot.
    pub extension: &'static str,
    /// Folder the format's files land in inside the bundle.
    pub folder: &'static str,
}

/// The fixed format table.
pub const EXPORT_FORMATS: &[ExportFormat] = &[
    ExportFormat {
        id: "svg",
        label: "Original SVG",
        extension: "svg",
        folder: "svg",
    },
    ExportFormat {
        id: "jsx",
        label: "JSX",
        extension: "jsx",
        folder: "jsx",
    },
    ExportFormat {
        id: "react-js",
        label: "React (JS)",
        extension: "jsx",
        folder: "react-js",
    },
    ExportFormat {
        id: "react-ts",
        label: "React (TS)",
        extension: "tsx",
        folder: "react-ts",
    },
    ExportFormat {
        id: "nextjs",
        label: "Next.js",
        extension: "tsx",
        folder: "nextjs",
    },
];

/// Looks up a format by its string id.
pub fn format_by_id(id: &str) -> Option<&'static ExportFormat> {
    EXPORT_FORMATS.iter().find(|format| format.id == id)
}

/// A source file handed in for bulk conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportInput {
    /// File name, extension included.
    pub name: String,
    /// SVG markup content.
    pub content: String,
}

/// One planned file of the bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportEntry {
    /// Relative path inside the bundle: `folder/name.extension`.
    pub path: String,
    /// Rendered file contents; empty when conversion failed.
    pub contents: String,
}

/// Conversion counters for a bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExportStats {
    /// Number of file × format conversions attempted.
    pub total: u32,
    /// Conversions that produced output.
    pub succeeded: u32,
    /// Conversions that came back empty.
    pub failed: u32,
}

/// A planned bundle: entries plus their stats.
#[derive(Debug, Clone, Serialize)]
pub struct BundleResult {
    /// Planned files in input × format order.
    pub entries: Vec<ExportEntry>,
    /// Conversion counters.
    pub stats: ExportStats,
}

/// Renders one file's output for one format. The component formats receive
/// the already-converted name as the component name.
fn render_output(content: &str, format: &ExportFormat, component_name: &str) -> String {
    match format.id {
        "svg" => content.to_string(),
        "jsx" => to_component_dialect(content),
        "react-js" => synthesize(content, Dialect::ReactJs, Some(component_name)),
        "react-ts" => synthesize(content, Dialect::ReactTs, Some(component_name)),
        "nextjs" => synthesize(content, Dialect::NextJs, Some(component_name)),
        _ => content.to_string(),
    }
}

/// Plans a bundle for the given inputs, format ids, and naming convention.
/// Unknown format ids are skipped.
pub fn render_bundle(
    inputs: &[ExportInput],
    format_ids: &[String],
    convention: NamingConvention,
) -> BundleResult {
    let formats: Vec<&ExportFormat> = format_ids
        .iter()
        .filter_map(|id| format_by_id(id))
        .collect();

    let mut entries = Vec::with_capacity(inputs.len() * formats.len());
    let mut stats = ExportStats::default();

    for input in inputs {
        let converted = convert_file_name(&input.name, convention);
        for format in &formats {
            let contents = render_output(&input.content, format, &converted);
            stats.total += 1;
            if contents.trim().is_empty() {
                stats.failed += 1;
            } else {
                stats.succeeded += 1;
            }
            entries.push(ExportEntry {
                path: format!("{}/{}.{}", format.folder, converted, format.extension),
                contents,
            });
        }
    }

    BundleResult { entries, stats }
}

/// Renders the bundle's README summary.
pub fn render_readme(
    file_count: usize,
    formats: &[&ExportFormat],
    convention: NamingConvention,
) -> String {
    let labels = formats
        .iter()
        .map(|format| format.label)
        .collect::<Vec<_>>()
        .join(", ");
    let folders = formats
        .iter()
        .map(|format| format!("- `{}/` - {} files", format.folder, format.label))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "# svgforge bulk export\n\n## Export Summary\n\n- **Total Files**: {file_count}\n- **Formats**: {labels}\n- **Naming Convention**: {convention}\n\n## Folder Structure\n\n{folders}\n\n## Usage\n\nEach folder contains the converted files in the respective format. Import and use them in your project as needed.\n",
        convention = convention.id(),
    )
}
