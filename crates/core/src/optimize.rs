//! Best-effort textual optimization and size metrics.
//!
//! This is not a structural optimizer: it removes the markup a renderer
//! never needs (comments, prolog, doctype, metadata) and collapses
//! whitespace, all at the string level. The metrics functions accept any
//! (original, optimized) pair, so a stronger upstream optimizer can feed the
//! same reporting.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));
static PROLOG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<\?[^>]*\?>").expect("prolog pattern is valid"));
static DOCTYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<!DOCTYPE[^>]*>").expect("doctype pattern is valid"));
static METADATA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<metadata[^>]*>.*?</metadata>").expect("metadata pattern is valid"));
static INTER_TAG_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">\s+<").expect("inter-tag pattern is valid"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("whitespace run pattern is valid"));

/// Size and shape numbers for an optimization pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationMetrics {
    /// Byte length of the original markup.
    pub original_size: usize,
    /// Byte length of the optimized markup.
    pub optimized_size: usize,
    /// Size reduction in percent, rounded, never below zero.
    pub reduction: u32,
    /// Number of `<path` occurrences in the optimized markup.
    pub path_count: usize,
}

/// An optimization pass outcome: both strings plus their metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationResult {
    /// The input markup, untouched.
    pub original: String,
    /// The optimized markup.
    pub optimized: String,
    /// Byte length of the original markup.
    pub original_size: usize,
    /// Byte length of the optimized markup.
    pub optimized_size: usize,
    /// Size reduction in percent, rounded, never below zero.
    pub reduction: u32,
    /// Number of `<path` occurrences in the optimized markup.
    pub path_count: usize,
}

/// Strips removable markup and collapses whitespace.
fn minify(svg: &str) -> String {
    let pass = COMMENT.replace_all(svg, "");
    let pass = PROLOG.replace_all(&pass, "");
    let pass = DOCTYPE.replace_all(&pass, "");
    let pass = METADATA.replace_all(&pass, "");
    let pass = INTER_TAG_WHITESPACE.replace_all(&pass, "><");
    let pass = WHITESPACE_RUN.replace_all(&pass, " ");
    pass.trim().to_string()
}

/// Optimizes the markup and reports the resulting metrics.
///
/// # Examples
///
/// ```
/// use svgforge_core::optimize::optimize;
///
/// let result = optimize("<svg>  <!-- x -->  <path d=\"M0 0\"/>  </svg>");
/// assert_eq!(result.optimized, "<svg><path d=\"M0 0\"/></svg>");
/// assert_eq!(result.path_count, 1);
/// ```
pub fn optimize(svg: &str) -> OptimizationResult {
    let optimized = minify(svg);
    let m = metrics(svg, &optimized);
    OptimizationResult {
        original: svg.to_string(),
        optimized,
        original_size: m.original_size,
        optimized_size: m.optimized_size,
        reduction: m.reduction,
        path_count: m.path_count,
    }
}

/// Computes metrics for an already-materialized (original, optimized) pair.
pub fn metrics(original: &str, optimized: &str) -> OptimizationMetrics {
    let original_size = original.len();
    let optimized_size = optimized.len();
    let reduction = if original_size == 0 {
        0
    } else {
        let saved = original_size as f64 - optimized_size as f64;
        (saved / original_size as f64 * 100.0).round().max(0.0) as u32
    };
    OptimizationMetrics {
        original_size,
        optimized_size,
        reduction,
        path_count: optimized.matches("<path").count(),
    }
}

/// Renders a byte count as `0 B`, `1.5 KB`, `2 MB` with up to two decimals.
pub fn format_bytes(bytes: usize) -> String {
    const SIZES: [&str; 3] = ["B", "KB", "MB"];
    if bytes == 0 {
        return "0 B".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(SIZES.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rendered = format!("{value:.2}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", rendered, SIZES[exponent])
}
