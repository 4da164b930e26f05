//! Attribute renaming between markup and component (JSX) dialects.
//!
//! The rename table is fixed at build time and covers the presentation and
//! namespaced attributes that differ between raw SVG markup and JSX props.
//! Replacement is literal: one whitespace character, the attribute name, and
//! the trailing `=` are matched as a unit and rewritten with a single space
//! prefix. Attribute-boundary parsing is intentionally absent; unmapped
//! names pass through untouched.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fixed `(markup name, component name)` rename pairs. Unique per direction.
pub const ATTRIBUTE_PAIRS: &[(&str, &str)] = &[
    ("class", "className"),
    ("stroke-width", "strokeWidth"),
    ("stroke-linecap", "strokeLinecap"),
    ("stroke-linejoin", "strokeLinejoin"),
    ("fill-rule", "fillRule"),
    ("clip-rule", "clipRule"),
    ("stroke-dasharray", "strokeDasharray"),
    ("stroke-dashoffset", "strokeDashoffset"),
    ("stroke-miterlimit", "strokeMiterlimit"),
    ("fill-opacity", "fillOpacity"),
    ("stroke-opacity", "strokeOpacity"),
    ("stop-color", "stopColor"),
    ("stop-opacity", "stopOpacity"),
    ("font-family", "fontFamily"),
    ("font-size", "fontSize"),
    ("font-weight", "fontWeight"),
    ("text-anchor", "textAnchor"),
    ("xmlns:xlink", "xmlnsXlink"),
    ("xlink:href", "xlinkHref"),
];

/// Compiles one direction of the rename table into `(pattern, replacement)`
/// pairs. The pattern matches a single whitespace character before the name
/// so that `className=` is never re-matched as `class=`.
fn compile_table(reverse: bool) -> Vec<(Regex, String)> {
    ATTRIBUTE_PAIRS
        .iter()
        .map(|&(markup, component)| {
            let (from, to) = if reverse {
                (component, markup)
            } else {
                (markup, component)
            };
            let pattern = Regex::new(&format!(r"\s{}=", regex::escape(from)))
                .expect("attribute patterns are valid");
            (pattern, format!(" {}=", to))
        })
        .collect()
}

static TO_COMPONENT: Lazy<Vec<(Regex, String)>> = Lazy::new(|| compile_table(false));
static TO_MARKUP: Lazy<Vec<(Regex, String)>> = Lazy::new(|| compile_table(true));

fn apply(table: &[(Regex, String)], input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }
    let mut out = input.to_string();
    for (pattern, replacement) in table {
        out = pattern.replace_all(&out, replacement.as_str()).into_owned();
    }
    out
}

/// Rewrites markup-dialect attribute names (`stroke-width`) into
/// component-dialect prop names (`strokeWidth`).
///
/// # Examples
///
/// ```
/// use svgforge_core::attrs::to_component_dialect;
///
/// let jsx = to_component_dialect(r#"<path class="a" fill-rule="evenodd"/>"#);
/// assert_eq!(jsx, r#"<path className="a" fillRule="evenodd"/>"#);
/// ```
pub fn to_component_dialect(markup: &str) -> String {
    apply(&TO_COMPONENT, markup)
}

/// Rewrites component-dialect prop names back into markup-dialect attribute
/// names. The string-level inverse of [`to_component_dialect`] over the
/// attribute tokens of the rename table.
pub fn to_markup_dialect(source: &str) -> String {
    apply(&TO_MARKUP, source)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = concat!(
        r#"<svg class="icon" stroke-width="2" stroke-linecap="round" "#,
        r#"fill-rule="evenodd" xmlns:xlink="http://www.w3.org/1999/xlink">"#,
        r##"<use xlink:href="#shape" fill-opacity="0.5"/></svg>"##,
    );

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(to_component_dialect(""), "");
        assert_eq!(to_component_dialect("  \n "), "");
        assert_eq!(to_markup_dialect(""), "");
    }

    #[test]
    fn markup_names_become_prop_names() {
        let jsx = to_component_dialect(SAMPLE);
        assert!(jsx.contains(" className=\"icon\""));
        assert!(jsx.contains(" strokeWidth=\"2\""));
        assert!(jsx.contains(" strokeLinecap=\"round\""));
        assert!(jsx.contains(" fillRule=\"evenodd\""));
        assert!(jsx.contains(" xmlnsXlink="));
        assert!(jsx.contains(" xlinkHref=\"#shape\""));
        assert!(jsx.contains(" fillOpacity=\"0.5\""));
        assert!(!jsx.contains(" class="));
        assert!(!jsx.contains(" stroke-width="));
    }

    #[test]
    fn prop_names_become_markup_names() {
        let markup = to_markup_dialect(r#"<rect className="box" strokeDasharray="4 2"/>"#);
        assert_eq!(markup, r#"<rect class="box" stroke-dasharray="4 2"/>"#);
    }

    #[test]
    fn round_trip_restores_mapped_names() {
        assert_eq!(to_markup_dialect(&to_component_dialect(SAMPLE)), SAMPLE);
    }

    #[test]
    fn unmapped_attributes_pass_through() {
        let input = r#"<path d="M0 0" fill="red" data-id="x"/>"#;
        assert_eq!(to_component_dialect(input), input);
        assert_eq!(to_markup_dialect(input), input);
    }

    #[test]
    fn prop_name_is_not_rematched_as_its_markup_prefix() {
        // `className=` must not be rewritten again via the `class` entry.
        let once = to_component_dialect(r#"<g class="a"/>"#);
        assert_eq!(to_component_dialect(&once), once);
    }

    #[test]
    fn name_after_newline_is_rewritten_with_a_space() {
        // The matched whitespace character is replaced by a literal space,
        // joining the attribute onto the previous line.
        let input = "<rect\nclass=\"a\"/>";
        assert_eq!(to_component_dialect(input), "<rect className=\"a\"/>");
    }

    #[test]
    fn every_table_entry_round_trips() {
        for &(markup, component) in ATTRIBUTE_PAIRS {
            let input = format!(r#"<g {markup}="v"/>"#);
            let converted = to_component_dialect(&input);
            assert_eq!(converted, format!(r#"<g {component}="v"/>"#));
            assert_eq!(to_markup_dialect(&converted), input);
        }
    }
}
