//! Nerd Font glyphs used by the console report.

pub const USER: &str = "\u{f007}";
pub const FOLLOWERS: &str = "\u{f0c0}";
pub const FOLLOWING: &str = "\u{f06e}";
pub const REPO: &str = "\u{f401}";
pub const GIST: &str = "\u{f0c5}";
pub const STAR: &str = "\u{f005}";
pub const FORK: &str = "\u{f126}";

/// Shown in place of a language icon when the repository has no language.
pub const UNKNOWN_LANGUAGE: &str = "(unknown)";

/// Shown for languages without a dedicated icon.
pub const OTHER_LANGUAGE: &str = "λ";

/// Icon for a GitHub language label (case-insensitive).
#[must_use]
pub fn language_icon(language: &str) -> &'static str {
    if language.is_empty() {
        return UNKNOWN_LANGUAGE;
    }

    match language.to_ascii_lowercase().as_str() {
        "typescript" => "\u{e69d}",
        "javascript" => "\u{f2ee}",
        "go" => "\u{e627}",
        "python" => "\u{e73c}",
        "rust" => "\u{e7a8}",
        "c++" => "\u{f0672}",
        "c#" => "\u{e7b2}",
        "php" => "\u{e608}",
        "java" => "\u{e738}",
        "zig" => "\u{e8ef}",
        "shell" => "\u{e760}",
        "vue" => "\u{e6a0}",
        "odin" => "\u{25ce}",
        "ruby" => "\u{e791}",
        "swift" => "\u{e755}",
        "kotlin" => "\u{e774}",
        "dart" => "\u{e798}",
        "elixir" => "\u{e7a7}",
        "haskell" => "\u{e777}",
        _ => OTHER_LANGUAGE,
    }
}
