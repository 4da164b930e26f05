//! Browser boundary for svgforge: thin wasm-bindgen wrappers over the core
//! and codegen crates. All heavy lifting stays in the library crates; this
//! layer only parses permissive JS config objects and serializes results.

use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

use svgforge_codegen::export::{ExportEntry, ExportFormat, ExportInput, ExportStats};
use svgforge_codegen::{Dialect, NamingConvention};
use svgforge_core::format::{Formatter, IndentFormatter};

// ============================================================================
// Config objects
// ============================================================================

/// Options accepted by `render_output`.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmRenderConfig {
    /// Component name for the component modes.
    #[serde(default, alias = "componentName")]
    pub component_name: Option<String>,
}

/// Options accepted by `format_markup`.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmFormatConfig {
    /// Indent width in spaces; defaults to 2.
    #[serde(default)]
    pub indent: Option<usize>,
}

/// Options accepted by `render_bundle`.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmBundleOptions {
    /// Export format ids; defaults to `["svg"]`.
    #[serde(default)]
    pub formats: Option<Vec<String>>,
    /// Naming convention id; unknown or missing ids mean `original`.
    #[serde(default)]
    pub naming: Option<String>,
    /// Whether to render the bundle README.
    #[serde(default, alias = "includeReadme")]
    pub include_readme: Option<bool>,
}

/// Parses an optional JS config object, falling back to defaults on null,
/// undefined, or malformed input.
fn parse_config<T>(config: JsValue) -> T
where
    T: Default + serde::de::DeserializeOwned,
{
    if config.is_undefined() || config.is_null() {
        return T::default();
    }
    serde_wasm_bindgen::from_value(config).unwrap_or_default()
}

fn parse_convention(id: Option<&str>) -> NamingConvention {
    id.and_then(NamingConvention::parse).unwrap_or_default()
}

// ============================================================================
// Splitting
// ============================================================================

/// Splits free text into the complete SVG documents it contains.
///
/// Returns a JavaScript array of strings, in order of appearance; an empty
/// array when the text holds no documents.
#[wasm_bindgen]
pub fn split_documents(text: &str) -> js_sys::Array {
    svgforge_core::split::split_documents(text)
        .into_iter()
        .map(JsValue::from)
        .collect()
}

/// Returns whether the text contains at least one plausible SVG document.
#[wasm_bindgen]
pub fn contains_document(text: &str) -> bool {
    svgforge_core::split::contains_document(text)
}

// ============================================================================
// Conversion
// ============================================================================

/// Renders the output for a mode id (`preview`, `jsx`, `html`, `react-js`,
/// `react-ts`, `nextjs`).
///
/// Unknown mode ids fall back to passthrough; failed synthesis yields the
/// empty string. `config` is an optional `{ componentName }` object.
#[wasm_bindgen]
pub fn render_output(svg: &str, mode: &str, config: JsValue) -> String {
    let cfg: WasmRenderConfig = parse_config(config);
    svgforge_codegen::render_named(svg, mode, cfg.component_name.as_deref())
}

/// Synthesizes component source for a dialect id (`react-js`, `react-ts`,
/// `nextjs`, `html`).
///
/// Unlike `render_output`, this surfaces the failure reason: an unknown
/// dialect id or an input with no `<svg>` envelope is a JS error.
#[wasm_bindgen]
pub fn synthesize_component(
    svg: &str,
    dialect: &str,
    component_name: Option<String>,
) -> Result<String, JsError> {
    let dialect = Dialect::parse(dialect)
        .ok_or_else(|| JsError::new(&format!("Unknown dialect: {}", dialect)))?;
    svgforge_codegen::try_synthesize(svg, dialect, component_name.as_deref())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Re-indents markup text. `config` is an optional `{ indent }` object.
#[wasm_bindgen]
pub fn format_markup(input: &str, config: JsValue) -> String {
    let cfg: WasmFormatConfig = parse_config(config);
    let formatter = cfg
        .indent
        .map(IndentFormatter::new)
        .unwrap_or_default();
    formatter.format(input)
}

/// Optimizes SVG markup and returns `{ original, optimized, original_size,
/// optimized_size, reduction, path_count }`.
#[wasm_bindgen]
pub fn optimize_svg(svg: &str) -> Result<JsValue, JsError> {
    let result = svgforge_core::optimize::optimize(svg);
    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Applies a naming convention id (`original`, `kebab-case`, `PascalCase`,
/// `camelCase`) to a file name. Unknown ids fall back to `original`.
#[wasm_bindgen]
pub fn convert_file_name(name: &str, convention: &str) -> String {
    svgforge_codegen::convert_file_name(name, parse_convention(Some(convention)))
}

// ============================================================================
// Bulk export
// ============================================================================

/// Result of `render_bundle`.
#[derive(Debug, Clone, Serialize)]
pub struct BundleOutput {
    /// Planned files, `{ path, contents }` each.
    pub entries: Vec<ExportEntry>,
    /// Conversion counters.
    pub stats: ExportStats,
    /// Bundle README, when requested.
    pub readme: Option<String>,
}

/// Plans a bulk-export bundle.
///
/// `files` is an array of `{ name, content }` objects; `options` is an
/// optional `{ formats, naming, includeReadme }` object. The returned object
/// carries the planned entries, stats, and (optionally) a README; packaging
/// the entries into an archive is the caller's concern.
#[wasm_bindgen]
pub fn render_bundle(files: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let inputs: Vec<ExportInput> = serde_wasm_bindgen::from_value(files)
        .map_err(|e| JsError::new(&format!("Invalid files: {}", e)))?;
    let opts: WasmBundleOptions = parse_config(options);

    let format_ids = opts.formats.unwrap_or_else(|| vec!["svg".to_string()]);
    let convention = parse_convention(opts.naming.as_deref());

    let bundle = svgforge_codegen::render_bundle(&inputs, &format_ids, convention);

    let readme = if opts.include_readme.unwrap_or(false) {
        let formats: Vec<&ExportFormat> = format_ids
            .iter()
            .filter_map(|id| svgforge_codegen::format_by_id(id))
            .collect();
        Some(svgforge_codegen::render_readme(
            inputs.len(),
            &formats,
            convention,
        ))
    } else {
        None
    };

    let output = BundleOutput {
        entries: bundle.entries,
        stats: bundle.stats,
        readme,
    };
    serde_wasm_bindgen::to_value(&output)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
