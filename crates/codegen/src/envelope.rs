//! Extraction of the outer `<svg>` envelope.
//!
//! The match is greedy: the envelope runs from the first `<svg ...>` opening
//! tag to the *final* `</svg>` in the input, so a document containing nested
//! `<svg>` elements keeps them inside the extracted content.

use once_cell::sync::Lazy;
use regex::Regex;

static ENVELOPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<svg([^>]*)>(.*)</svg>").expect("envelope pattern is valid"));
static WIDTH_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\s*width="[^"]*""#).expect("width pattern is valid"));
static HEIGHT_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\s*height="[^"]*""#).expect("height pattern is valid"));
static CLASS_NAME_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\s*className="[^"]*""#).expect("className pattern is valid"));

/// The outer tag's attribute string and the inner content of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgEnvelope {
    /// Raw attribute text of the opening tag, leading whitespace included.
    pub attributes: String,
    /// Everything between the opening tag and the final closing tag.
    pub content: String,
}

/// Extracts the envelope from a document, or `None` when the input does not
/// match the `<svg ...>...</svg>` shape. This is the designed failure mode
/// of synthesis, not an exceptional condition.
pub fn extract(svg: &str) -> Option<SvgEnvelope> {
    let captures = ENVELOPE.captures(svg)?;
    Some(SvgEnvelope {
        attributes: captures.get(1).map_or(String::new(), |m| m.as_str().to_string()),
        content: captures.get(2).map_or(String::new(), |m| m.as_str().to_string()),
    })
}

/// Removes `width="…"`, `height="…"`, and `className="…"` from an attribute
/// string and trims it. Those attributes become template parameters rather
/// than literals.
pub fn strip_templated_attrs(attributes: &str) -> String {
    let pass = WIDTH_ATTR.replace_all(attributes, "");
    let pass = HEIGHT_ATTR.replace_all(&pass, "");
    let pass = CLASS_NAME_ATTR.replace_all(&pass, "");
    pass.trim().to_string()
}
