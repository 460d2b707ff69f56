//! Output file naming: camelCase conversion and filename sanitization.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Default stem used when a note's title produces no usable name.
pub const DEFAULT_FALLBACK_STEM: &str = "untitled";

/// Extension appended to every generated page.
pub const PAGE_EXTENSION: &str = "html";

static INVALID_FILENAME_CHARS: OnceLock<Regex> = OnceLock::new();

fn invalid_filename_chars() -> &'static Regex {
    INVALID_FILENAME_CHARS.get_or_init(|| Regex::new(r#"[<>:"/\\|?*]"#).unwrap())
}

/// Convert a title to camelCase
///
/// Rules:
/// - Split on whitespace
/// - First word lowercased entirely
/// - Every following word gets an uppercase first character, the rest is kept as-is
/// - Words are joined with no separator
///
/// Input with no words yields an empty string.
///
/// # Examples
///
/// ```
/// use notesite_core::to_camel_case;
///
/// assert_eq!(to_camel_case("Hello World"), "helloWorld");
/// assert_eq!(to_camel_case("the iPhone review"), "theIPhoneReview");
/// assert_eq!(to_camel_case("   "), "");
/// ```
pub fn to_camel_case(text: &str) -> String {
    let mut words = text.split_whitespace();

    let Some(first) = words.next() else {
        return String::new();
    };

    let mut out = first.to_lowercase();
    for word in words {
        let mut chars = word.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Remove every character that is illegal in a filename: `< > : " / \ | ? *`
///
/// Characters are deleted, not replaced. Reserved device names, leading dots
/// and length limits are not handled.
pub fn sanitize_filename(name: &str) -> String {
    invalid_filename_chars().replace_all(name, "").into_owned()
}

/// The file name a note will be written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputName {
    /// Stem derived from the note's title
    Derived(String),
    /// The note had no usable title, so the fallback stem was used
    Fallback(String),
}

impl OutputName {
    /// Derive an output name from an optional title.
    ///
    /// Falls back to `fallback_stem` when there is no title, the title has no
    /// words, or sanitization strips every character.
    pub fn from_title(title: Option<&str>, fallback_stem: &str) -> Self {
        let stem = title
            .map(|t| sanitize_filename(&to_camel_case(t)))
            .unwrap_or_default();

        if stem.is_empty() {
            OutputName::Fallback(fallback_stem.to_string())
        } else {
            OutputName::Derived(stem)
        }
    }

    pub fn stem(&self) -> &str {
        match self {
            OutputName::Derived(stem) | OutputName::Fallback(stem) => stem,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, OutputName::Fallback(_))
    }

    /// Stem with the `.html` extension
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.stem(), PAGE_EXTENSION)
    }
}

impl fmt::Display for OutputName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}
