//! Mapping usernames onto cache file names.

/// Extension of every cache file.
pub const CACHE_FILE_EXTENSION: &str = "json";

/// File name holding the cache entry for `username`.
///
/// GitHub logins are case-insensitive, so the name is lower-cased to let
/// `Octocat` and `octocat` share one entry.
#[must_use]
pub fn cache_file_name(username: &str) -> String {
    format!("{}.{CACHE_FILE_EXTENSION}", sanitize_path_component(&username.to_lowercase()))
}

/// Sanitize a string for use as a path component
///
/// Logins can't contain these characters, but the username comes straight from
/// the command line, so traversal sequences and separators are neutralised anyway.
///
/// # Examples
///
/// ```ignore
/// // This is an internal utility function
/// assert_eq!(sanitize_path_component("octocat"), "octocat");
/// assert_eq!(sanitize_path_component("../../etc/passwd"), "______etc_passwd");
/// ```
#[must_use]
fn sanitize_path_component(s: &str) -> String {
    let s = s.replace("..", "__");
    s.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_")
}
