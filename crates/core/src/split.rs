//! Detection and extraction of SVG documents inside free text.
//!
//! Pasted or dropped text routinely carries several `<svg>` documents glued
//! together with whitespace or unrelated markup. The splitter recovers each
//! complete document without parsing: it partitions on the literal closing
//! tag and rebuilds every partition that still carries an opening tag.

/// The literal opening-tag prefix a partition must contain to count as a document.
const OPEN_TAG: &str = "<svg";
/// The literal closing tag the input is partitioned on.
const CLOSE_TAG: &str = "</svg>";

/// Splits free text into the complete SVG documents it contains, in order
/// of appearance.
///
/// Each returned string starts at the first `<svg` of its partition and ends
/// with `</svg>`. Text between documents is discarded, as is any trailing
/// partition without an opening tag.
///
/// Nested `<svg>` elements are not specially handled: the first `</svg>`
/// always closes the nearest preceding `<svg`-bearing partition. A `</svg>`
/// embedded in an attribute value mis-splits for the same reason.
///
/// # Examples
///
/// ```
/// use svgforge_core::split::split_documents;
///
/// let docs = split_documents("<svg>A</svg>junk<svg>B</svg>");
/// assert_eq!(docs, vec!["<svg>A</svg>", "<svg>B</svg>"]);
/// ```
pub fn split_documents(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        log::debug!("split: empty input");
        return Vec::new();
    }

    let parts: Vec<&str> = text
        .split(CLOSE_TAG)
        .filter(|part| !part.trim().is_empty())
        .collect();
    log::debug!("split: {} candidate partition(s)", parts.len());

    let docs: Vec<String> = parts
        .iter()
        .filter_map(|part| {
            let trimmed = part.trim();
            let start = trimmed.find(OPEN_TAG)?;
            Some(format!("{}{}", &trimmed[start..], CLOSE_TAG))
        })
        .filter(|doc| doc.contains(OPEN_TAG))
        .collect();

    log::debug!("split: detected {} document(s)", docs.len());
    docs
}

/// Returns whether the text contains at least one plausible SVG document.
///
/// A cheap containment probe, not validation: both the opening and closing
/// tag substrings must be present after trimming.
pub fn contains_document(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.contains(OPEN_TAG) && trimmed.contains(CLOSE_TAG)
}
