//! Component dialects and their source templates.
//!
//! Each dialect is one fixed textual template parameterized by the component
//! name, the cleaned outer attributes, and the re-indented inner content.
//! Template text is the contract: tests pin it character for character.

use svgforge_core::attrs::to_component_dialect;

use crate::envelope;
use crate::error::SynthesisError;

/// Component name used when the caller supplies none.
pub const DEFAULT_COMPONENT_NAME: &str = "Icon";
/// Default width/height emitted into the templates.
pub const DEFAULT_SIZE: u32 = 24;

/// Target output dialect for synthesized component source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Untyped React arrow component.
    ReactJs,
    /// React arrow component with a generated props interface.
    ReactTs,
    /// `'use client'` Next.js function component with a single `size` prop.
    NextJs,
    /// Standalone HTML document embedding the raw markup.
    Html,
}

impl Dialect {
    /// Resolves a dialect from its string id.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "react-js" => Some(Self::ReactJs),
            "react-ts" => Some(Self::ReactTs),
            "nextjs" => Some(Self::NextJs),
            "html" => Some(Self::Html),
            _ => None,
        }
    }

    /// The fixed string id of this dialect.
    pub fn id(&self) -> &'static str {
        match self {
            Self::ReactJs => "react-js",
            Self::ReactTs => "react-ts",
            Self::NextJs => "nextjs",
            Self::Html => "html",
        }
    }
}

/// Parameters of a synthesized component.
#[derive(Debug, Clone)]
pub struct ComponentSpec {
    /// Component identifier.
    pub name: String,
    /// Target dialect.
    pub dialect: Dialect,
    /// Default width/height emitted into the template.
    pub size: u32,
}

impl ComponentSpec {
    /// Builds a spec, falling back to [`DEFAULT_COMPONENT_NAME`] and
    /// [`DEFAULT_SIZE`] where the caller left parameters out.
    pub fn new(dialect: Dialect, name: Option<&str>) -> Self {
        let name = name
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_COMPONENT_NAME)
            .to_string();
        Self {
            name,
            dialect,
            size: DEFAULT_SIZE,
        }
    }
}

/// Synthesizes component source, or an empty string when the input has no
/// usable envelope. Empty output means "nothing to render"; see
/// [`try_synthesize`] for the reason-carrying variant.
pub fn synthesize(svg: &str, dialect: Dialect, name: Option<&str>) -> String {
    try_synthesize(svg, dialect, name).unwrap_or_default()
}

/// Synthesizes component source, reporting why nothing could be produced.
pub fn try_synthesize(
    svg: &str,
    dialect: Dialect,
    name: Option<&str>,
) -> Result<String, SynthesisError> {
    if svg.trim().is_empty() {
        return Err(SynthesisError::EmptyInput);
    }
    let spec = ComponentSpec::new(dialect, name);
    match dialect {
        Dialect::ReactJs => {
            let (attributes, content) = component_parts(svg)?;
            Ok(render_react_js(&spec, &attributes, &content))
        }
        Dialect::ReactTs => {
            let (attributes, content) = component_parts(svg)?;
            Ok(render_react_ts(&spec, &attributes, &content))
        }
        Dialect::NextJs => {
            let (attributes, content) = component_parts(svg)?;
            Ok(render_next_js(&spec, &attributes, &content))
        }
        Dialect::Html => Ok(render_html(svg)),
    }
}

/// Converts to component dialect and splits into (cleaned attributes, content).
fn component_parts(svg: &str) -> Result<(String, String), SynthesisError> {
    let jsx = to_component_dialect(svg);
    let envelope = envelope::extract(&jsx).ok_or(SynthesisError::MissingEnvelope)?;
    let attributes = envelope::strip_templated_attrs(&envelope.attributes);
    Ok((attributes, envelope.content))
}

/// Prefixes every non-empty line of the content with the given indent.
fn indent_lines(content: &str, prefix: &str) -> String {
    content
        .split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the kept attributes onto their own template line, or nothing.
fn attribute_block(attributes: &str, prefix: &str) -> String {
    if attributes.is_empty() {
        String::new()
    } else {
        format!("\n{prefix}{attributes}")
    }
}

fn render_react_js(spec: &ComponentSpec, attributes: &str, content: &str) -> String {
    let name = &spec.name;
    let size = spec.size;
    let attrs = attribute_block(attributes, "    ");
    let body = indent_lines(content, "    ");
    format!(
        "export const {name} = ({{ className, width = {size}, height = {size} }}) => (\n  <svg\n    className={{className}}\n    width={{width}}\n    height={{height}}{attrs}\n  >\n{body}\n  </svg>\n);"
    )
}

fn render_react_ts(spec: &ComponentSpec, attributes: &str, content: &str) -> String {
    let name = &spec.name;
    let size = spec.size;
    let attrs = attribute_block(attributes, "    ");
    let body = indent_lines(content, "    ");
    format!(
        "interface {name}Props {{\n  className?: string;\n  width?: number;\n  height?: number;\n}}\n\nexport const {name} = ({{\n  className,\n  width = {size},\n  height = {size}\n}}: {name}Props) => (\n  <svg\n    className={{className}}\n    width={{width}}\n    height={{height}}{attrs}\n  >\n{body}\n  </svg>\n);"
    )
}

fn render_next_js(spec: &ComponentSpec, attributes: &str, content: &str) -> String {
    let name = &spec.name;
    let size = spec.size;
    let attrs = attribute_block(attributes, "      ");
    let body = indent_lines(content, "      ");
    format!(
        "'use client';\n\ninterface {name}Props {{\n  className?: string;\n  size?: number;\n}}\n\nexport function {name}({{ className, size = {size} }}: {name}Props) {{\n  return (\n    <svg\n      className={{className}}\n      width={{size}}\n      height={{size}}{attrs}\n    >\n{body}\n    </svg>\n  );\n}}"
    )
}

/// The HTML dialect wraps the raw, unconverted markup in a fixed skeleton.
fn render_html(svg: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"UTF-8\">\n  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n  <title>SVG Icon</title>\n</head>\n<body>\n  {svg}\n</body>\n</html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAR: &str = r#"<svg viewBox="0 0 24 24" width="24" height="24"><path d="M0 0"/></svg>"#;

    #[test]
    fn dialect_ids_round_trip() {
        for dialect in [Dialect::ReactJs, Dialect::ReactTs, Dialect::NextJs, Dialect::Html] {
            assert_eq!(Dialect::parse(dialect.id()), Some(dialect));
        }
        assert_eq!(Dialect::parse("vue"), None);
    }

    #[test]
    fn spec_defaults_name_and_size() {
        let spec = ComponentSpec::new(Dialect::ReactJs, None);
        assert_eq!(spec.name, "Icon");
        assert_eq!(spec.size, 24);
        let spec = ComponentSpec::new(Dialect::ReactJs, Some(""));
        assert_eq!(spec.name, "Icon");
        let spec = ComponentSpec::new(Dialect::ReactJs, Some("Star"));
        assert_eq!(spec.name, "Star");
    }

    #[test]
    fn react_ts_emits_props_interface_without_literal_size() {
        let source = synthesize(STAR, Dialect::ReactTs, Some("Star"));
        assert!(source.contains("interface StarProps"));
        assert!(source.contains("export const Star"));
        assert!(!source.contains("width=\"24\""));
        assert!(!source.contains("height=\"24\""));
        assert!(source.contains("width={width}"));
    }

    #[test]
    fn react_js_keeps_remaining_attributes() {
        let source = synthesize(STAR, Dialect::ReactJs, None);
        assert!(source.contains("export const Icon"));
        assert!(source.contains("viewBox=\"0 0 24 24\""));
        assert!(source.contains("width = 24, height = 24"));
    }

    #[test]
    fn nextjs_uses_single_size_prop() {
        let source = synthesize(STAR, Dialect::NextJs, Some("Star"));
        assert!(source.starts_with("'use client';\n"));
        assert!(source.contains("size = 24"));
        assert!(source.contains("width={size}"));
        assert!(source.contains("height={size}"));
        assert!(!source.contains("width={width}"));
    }

    #[test]
    fn html_wraps_the_literal_markup() {
        let source = synthesize(STAR, Dialect::Html, None);
        assert!(source.starts_with("<!DOCTYPE html>"));
        assert!(source.contains("<title>SVG Icon</title>"));
        assert!(source.contains(STAR));
        assert!(source.ends_with("</html>"));
    }

    #[test]
    fn component_dialect_conversion_happens_before_extraction() {
        let input = r#"<svg class="icon" stroke-width="2" viewBox="0 0 8 8"><path d="M0 0"/></svg>"#;
        let source = synthesize(input, Dialect::ReactJs, None);
        assert!(source.contains("strokeWidth=\"2\""));
        // `class` became `className` and was then stripped into the template parameter.
        assert!(!source.contains("className=\"icon\""));
        assert!(source.contains("className={className}"));
    }

    #[test]
    fn missing_envelope_is_the_empty_string() {
        assert_eq!(synthesize("<div>nope</div>", Dialect::ReactJs, None), "");
        assert_eq!(
            try_synthesize("<div>nope</div>", Dialect::ReactTs, None),
            Err(SynthesisError::MissingEnvelope)
        );
    }

    #[test]
    fn empty_input_is_the_empty_string() {
        assert_eq!(synthesize("", Dialect::ReactJs, None), "");
        assert_eq!(synthesize("  \n ", Dialect::Html, None), "");
        assert_eq!(
            try_synthesize("", Dialect::Html, None),
            Err(SynthesisError::EmptyInput)
        );
    }

    #[test]
    fn multiline_content_is_reindented() {
        let input = "<svg viewBox=\"0 0 24 24\">\n  <g>\n    <rect/>\n  </g>\n</svg>";
        let source = synthesize(input, Dialect::ReactJs, None);
        assert!(source.contains("\n      <g>\n        <rect/>\n      </g>\n"));
    }
}
