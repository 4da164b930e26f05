//! Output-mode routing.
//!
//! `render` is total over the mode enum; the string-id entry point falls
//! back to passthrough for unknown ids so a stale or misspelled mode never
//! turns into an error at the boundary.

use svgforge_core::attrs::to_component_dialect;

use crate::dialect::{Dialect, synthesize};

/// The fixed set of output modes the tool renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// The source markup, unchanged.
    Preview,
    /// Component-dialect (JSX-attribute) markup.
    Jsx,
    /// Identical to the source markup at this level; the HTML document
    /// wrapper is a synthesis dialect, not a dispatch concern.
    Html,
    /// React (JS) component source.
    ReactJs,
    /// React (TS) component source.
    ReactTs,
    /// Next.js component source.
    NextJs,
}

impl OutputMode {
    /// Resolves a mode from its string id.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "preview" => Some(Self::Preview),
            "jsx" => Some(Self::Jsx),
            "html" => Some(Self::Html),
            "react-js" => Some(Self::ReactJs),
            "react-ts" => Some(Self::ReactTs),
            "nextjs" => Some(Self::NextJs),
            _ => None,
        }
    }

    /// The fixed string id of this mode.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Preview => "preview",
            Self::Jsx => "jsx",
            Self::Html => "html",
            Self::ReactJs => "react-js",
            Self::ReactTs => "react-ts",
            Self::NextJs => "nextjs",
        }
    }
}

/// Renders the output for a mode with the default component name.
pub fn render(svg: &str, mode: OutputMode) -> String {
    render_with_name(svg, mode, None)
}

/// Renders the output for a mode, passing a component name through to the
/// synthesizer for the component modes.
pub fn render_with_name(svg: &str, mode: OutputMode, name: Option<&str>) -> String {
    match mode {
        OutputMode::Preview | OutputMode::Html => svg.to_string(),
        OutputMode::Jsx => to_component_dialect(svg),
        OutputMode::ReactJs => synthesize(svg, Dialect::ReactJs, name),
        OutputMode::ReactTs => synthesize(svg, Dialect::ReactTs, name),
        OutputMode::NextJs => synthesize(svg, Dialect::NextJs, name),
    }
}

/// String-id entry point: unknown mode ids fall back to passthrough.
pub fn render_named(svg: &str, mode_id: &str, name: Option<&str>) -> String {
    match OutputMode::parse(mode_id) {
        Some(mode) => render_with_name(svg, mode, name),
        None => svg.to_string(),
    }
}
