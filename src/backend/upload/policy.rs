//! Filename policy for uploads.
//!
//! Acceptance is decided by filename suffix alone; file contents are never
//! inspected. The suffix match is case-sensitive, so `photo.PNG` is refused.

/// Suffixes accepted by `/upload`
pub const ALLOWED_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".pdf"];

/// Reduce a client-supplied filename to its final path component
///
/// Both `/` and `\` count as separators. Returns `None` when nothing usable
/// is left (empty, `.` or `..`).
pub fn sanitize_filename(raw: &str) -> Option<&str> {
    let name = raw.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(raw);
    match name {
        "" | "." | ".." => None,
        name => Some(name),
    }
}

/// Whether `filename` ends with one of [`ALLOWED_EXTENSIONS`]
pub fn is_allowed(filename: &str) -> bool {
    ALLOWED_EXTENSIONS
        .iter()
        .any(|suffix| filename.ends_with(suffix))
}
