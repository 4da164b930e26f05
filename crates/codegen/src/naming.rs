//! File and component naming conventions for exported bundles.

use once_cell::sync::Lazy;
use regex::Regex;

static SVG_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.svg$").expect("extension pattern is valid"));
static LOWER_UPPER_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("case boundary pattern is valid"));
static SEPARATOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[_\s]+").expect("separator pattern is valid"));
static HYPHEN_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-+").expect("hyphen run pattern is valid"));

/// Naming convention applied to exported file and component names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingConvention {
    /// The cleaned base name, unchanged.
    #[default]
    Original,
    /// `my-icon-name`
    KebabCase,
    /// `MyIconName`
    PascalCase,
    /// `myIconName`
    CamelCase,
}

impl NamingConvention {
    /// Resolves a convention from its string id.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "original" => Some(Self::Original),
            "kebab-case" => Some(Self::KebabCase),
            "PascalCase" => Some(Self::PascalCase),
            "camelCase" => Some(Self::CamelCase),
            _ => None,
        }
    }

    /// The fixed string id of this convention.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::KebabCase => "kebab-case",
            Self::PascalCase => "PascalCase",
            Self::CamelCase => "camelCase",
        }
    }
}

/// Transforms a file name into the requested convention.
///
/// The base name is the file name minus a case-insensitive `.svg` extension,
/// with every character outside `[a-zA-Z0-9-_]` collapsed to `-`.
///
/// # Examples
///
/// ```
/// use svgforge_codegen::naming::{NamingConvention, convert_file_name};
///
/// assert_eq!(
///     convert_file_name("my icon name", NamingConvention::PascalCase),
///     "MyIconName"
/// );
/// assert_eq!(
///     convert_file_name("My Icon Name", NamingConvention::KebabCase),
///     "my-icon-name"
/// );
/// ```
pub fn convert_file_name(file_name: &str, convention: NamingConvention) -> String {
    let base = base_name(file_name);
    match convention {
        NamingConvention::Original => base,
        NamingConvention::KebabCase => to_kebab(&base),
        NamingConvention::PascalCase => to_pascal(&base),
        NamingConvention::CamelCase => {
            let pascal = to_pascal(&base);
            let mut chars = pascal.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first.to_ascii_lowercase(), chars.as_str()),
                None => String::new(),
            }
        }
    }
}

fn base_name(file_name: &str) -> String {
    SVG_EXTENSION
        .replace(file_name, "")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

fn to_kebab(base: &str) -> String {
    let pass = LOWER_UPPER_BOUNDARY.replace_all(base, "${1}-${2}");
    let pass = pass.to_lowercase();
    let pass = SEPARATOR_RUN.replace_all(&pass, "-");
    HYPHEN_RUN.replace_all(&pass, "-").into_owned()
}

fn to_pascal(base: &str) -> String {
    base.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let rest: String = chars.collect();
            format!("{}{}", first.to_ascii_uppercase(), rest.to_ascii_lowercase())
        }
        None => String::new(),
    }
}
