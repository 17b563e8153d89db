//! Folder name sanitization.

/// Characters that are illegal in a folder name on at least one platform.
const FORBIDDEN: &[char] = &['/', '<', '>', ':', '"', '\\', '|', '?', '*'];

/// Make a game name safe to use as a folder name.
///
/// Removes every forbidden character, then strips trailing dots and
/// spaces (illegal at the end of a Windows folder name).
pub fn sanitize_name(name: &str) -> String {
    let cleaned: String = name.chars().filter(|c| !FORBIDDEN.contains(c)).collect();
    trim_trailing_dots_spaces(&cleaned).to_string()
}

/// Strip any trailing run of dots and spaces.
pub fn trim_trailing_dots_spaces(name: &str) -> &str {
    name.trim_end_matches(['.', ' '])
}
