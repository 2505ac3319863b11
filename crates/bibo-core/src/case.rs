//! ASCII case projections of wire values
//!
//! Wire values are ASCII identifiers, so no locale handling is needed.

use crate::ClosedSet;

/// Uppercase the first letter of every word, lowercase the rest.
///
/// Words are separated by ASCII whitespace; separators are kept as-is.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c.to_ascii_lowercase());
        }
        at_word_start = c.is_ascii_whitespace();
    }
    out
}

/// Lowercase with spaces replaced by underscores
pub fn snake_case(s: &str) -> String {
    s.replace(' ', "_").to_ascii_lowercase()
}

/// Lowercase with spaces replaced by hyphens
pub fn kebab_case(s: &str) -> String {
    s.replace(' ', "-").to_ascii_lowercase()
}

/// Case accessors for string-valued enumerations
pub trait CaseProjection: ClosedSet<Wire = &'static str> {
    /// Wire value as declared
    #[inline]
    fn as_str(self) -> &'static str {
        self.wire()
    }

    fn lowercase(self) -> String {
        self.wire().to_ascii_lowercase()
    }

    fn uppercase(self) -> String {
        self.wire().to_ascii_uppercase()
    }

    fn title_case(self) -> String {
        crate::case::title_case(self.wire())
    }

    fn snake_case(self) -> String {
        crate::case::snake_case(self.wire())
    }

    fn kebab_case(self) -> String {
        crate::case::kebab_case(self.wire())
    }
}
