//! Language-to-color lookup for repository cards.
//!
//! Colors are presentation tokens (utility class names) rather than raw
//! color values, so the renderer decides how to paint them.

/// Token returned for unknown or absent languages.
pub const FALLBACK_COLOR: &str = "bg-gray-600";

/// Known languages and their tokens. Matching is exact and case-sensitive.
const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("JavaScript", "bg-yellow-400"),
    ("TypeScript", "bg-blue-500"),
    ("HTML", "bg-orange-500"),
    ("CSS", "bg-purple-500"),
    ("Python", "bg-green-500"),
    ("Java", "bg-red-500"),
    ("C#", "bg-green-600"),
    ("Ruby", "bg-red-600"),
    ("Go", "bg-blue-400"),
    ("PHP", "bg-indigo-400"),
    ("Swift", "bg-orange-600"),
    ("Kotlin", "bg-purple-600"),
    ("Rust", "bg-orange-700"),
    ("Dart", "bg-blue-300"),
];

/// Resolve the color token for a repository's primary language.
///
/// Total over its input: anything not in the table, and `None`, maps to
/// [`FALLBACK_COLOR`].
#[must_use]
pub fn color_for(language: Option<&str>) -> &'static str {
    let Some(language) = language else {
        return FALLBACK_COLOR;
    };

    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Iterate the known `(language, token)` pairs in table order.
pub fn known_languages() -> impl Iterator<Item = (&'static str, &'static str)> {
    LANGUAGE_COLORS.iter().copied()
}
