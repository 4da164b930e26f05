use serde::Deserialize;
use svgforge_wasm::{
    contains_document, convert_file_name, format_markup, optimize_svg, render_bundle,
    render_output, split_documents, synthesize_component,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

const STAR: &str = r#"<svg viewBox="0 0 24 24" width="24" height="24"><path d="M0 0"/></svg>"#;

#[derive(Deserialize, Debug)]
struct OptimizeResult {
    original: String,
    optimized: String,
    original_size: usize,
    optimized_size: usize,
    reduction: u32,
    path_count: usize,
}

#[derive(Deserialize, Debug)]
struct BundleEntry {
    path: String,
    contents: String,
}

#[derive(Deserialize, Debug)]
struct BundleStats {
    total: u32,
    succeeded: u32,
    failed: u32,
}

#[derive(Deserialize, Debug)]
struct Bundle {
    entries: Vec<BundleEntry>,
    stats: BundleStats,
    readme: Option<String>,
}

fn js(value: serde_json::Value) -> JsValue {
    use serde::Serialize;
    // json_compatible() keeps JSON maps as plain objects instead of ES Maps.
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .expect("build JS value")
}

#[wasm_bindgen_test]
fn split_returns_documents_in_order() {
    let docs = split_documents("<svg>A</svg>junk<svg>B</svg>");
    assert_eq!(docs.length(), 2);
    assert_eq!(docs.get(0).as_string().unwrap(), "<svg>A</svg>");
    assert_eq!(docs.get(1).as_string().unwrap(), "<svg>B</svg>");
}

#[wasm_bindgen_test]
fn split_of_empty_text_is_empty() {
    assert_eq!(split_documents("").length(), 0);
    assert_eq!(split_documents("   ").length(), 0);
}

#[wasm_bindgen_test]
fn contains_document_probe() {
    assert!(contains_document(STAR));
    assert!(!contains_document("<svg unclosed"));
}

#[wasm_bindgen_test]
fn render_output_jsx_mode() {
    let out = render_output(
        r#"<svg stroke-width="2"><path/></svg>"#,
        "jsx",
        JsValue::UNDEFINED,
    );
    assert_eq!(out, r#"<svg strokeWidth="2"><path/></svg>"#);
}

#[wasm_bindgen_test]
fn render_output_unknown_mode_passes_through() {
    let out = render_output(STAR, "made-up", JsValue::NULL);
    assert_eq!(out, STAR);
}

#[wasm_bindgen_test]
fn render_output_component_mode_uses_config_name() {
    let out = render_output(STAR, "react-ts", js(serde_json::json!({"componentName": "Star"})));
    assert!(out.contains("interface StarProps"));
    assert!(out.contains("export const Star"));
}

#[wasm_bindgen_test]
fn synthesize_component_react_ts() {
    let out = synthesize_component(STAR, "react-ts", Some("Star".to_string()))
        .expect("synthesis should succeed");
    assert!(out.contains("interface StarProps"));
    assert!(!out.contains("width=\"24\""));
}

#[wasm_bindgen_test]
fn synthesize_component_unknown_dialect_is_an_error() {
    assert!(synthesize_component(STAR, "vue", None).is_err());
}

#[wasm_bindgen_test]
fn synthesize_component_without_envelope_is_an_error() {
    assert!(synthesize_component("<div>nope</div>", "react-js", None).is_err());
}

#[wasm_bindgen_test]
fn format_markup_with_default_indent() {
    let out = format_markup("<svg><g><path/></g></svg>", JsValue::UNDEFINED);
    assert_eq!(out, "<svg>\n  <g>\n    <path/>\n  </g>\n</svg>");
}

#[wasm_bindgen_test]
fn format_markup_with_custom_indent() {
    let out = format_markup(
        "<svg><rect/></svg>",
        js(serde_json::json!({"indent": 4})),
    );
    assert_eq!(out, "<svg>\n    <rect/>\n</svg>");
}

#[wasm_bindgen_test]
fn optimize_reports_metrics() {
    let value = optimize_svg("<svg>  <!-- c -->  <path d=\"M0 0\"/>  </svg>")
        .expect("optimize should succeed");
    let result: OptimizeResult = serde_wasm_bindgen::from_value(value).expect("deserialize");
    assert_eq!(result.optimized, "<svg><path d=\"M0 0\"/></svg>");
    assert!(result.optimized_size < result.original_size);
    assert!(result.reduction > 0);
    assert_eq!(result.path_count, 1);
    assert!(result.original.contains("<!-- c -->"));
}

#[wasm_bindgen_test]
fn convert_file_name_conventions() {
    assert_eq!(convert_file_name("my icon name", "PascalCase"), "MyIconName");
    assert_eq!(convert_file_name("My Icon Name", "kebab-case"), "my-icon-name");
    // Unknown convention falls back to the cleaned original name.
    assert_eq!(convert_file_name("my icon.svg", "nope"), "my-icon");
}

#[wasm_bindgen_test]
fn render_bundle_plans_entries_and_stats() {
    let files = js(serde_json::json!([
        { "name": "arrow left.svg", "content": STAR },
        { "name": "broken.svg", "content": "<div>nope</div>" },
    ]));
    let options = js(serde_json::json!({
        "formats": ["svg", "react-ts"],
        "naming": "PascalCase",
        "includeReadme": true,
    }));
    let value = render_bundle(files, options).expect("bundle should plan");
    let bundle: Bundle = serde_wasm_bindgen::from_value(value).expect("deserialize");

    let paths: Vec<&str> = bundle.entries.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "svg/ArrowLeft.svg",
            "react-ts/ArrowLeft.tsx",
            "svg/Broken.svg",
            "react-ts/Broken.tsx",
        ]
    );
    assert_eq!(bundle.stats.total, 4);
    assert_eq!(bundle.stats.succeeded, 3);
    assert_eq!(bundle.stats.failed, 1);
    assert!(bundle.entries[1].contents.contains("interface ArrowLeftProps"));

    let readme = bundle.readme.expect("readme requested");
    assert!(readme.contains("- **Total Files**: 2"));
    assert!(readme.contains("Original SVG, React (TS)"));
}

#[wasm_bindgen_test]
fn render_bundle_defaults_to_original_svg_only() {
    let files = js(serde_json::json!([{ "name": "a.svg", "content": STAR }]));
    let value = render_bundle(files, JsValue::UNDEFINED).expect("bundle should plan");
    let bundle: Bundle = serde_wasm_bindgen::from_value(value).expect("deserialize");
    assert_eq!(bundle.entries.len(), 1);
    assert_eq!(bundle.entries[0].path, "svg/a.svg");
    assert!(bundle.readme.is_none());
}
