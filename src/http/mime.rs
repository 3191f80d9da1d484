//! Content-Type lookup for served files.

/// Extension (with leading dot, lowercase) to MIME type.
const CONTENT_TYPES: &[(&str, &str)] = &[
    (".txt", "text/plain"),
    (".pdf", "application/pdf"),
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".html", "text/html"),
];

/// Returns the extension of the last path component, starting at its last
/// dot. `.txt` counts as an extension; `dir.d/file` has none.
pub fn extension(name: &str) -> Option<&str> {
    let file = name.rsplit('/').next().unwrap_or(name);
    file.rfind('.').map(|i| &file[i..])
}

/// Best-effort Content-Type for `name`, or `None` when the extension is not
/// in the table.
pub fn content_type_for(name: &str) -> Option<&'static str> {
    let ext = extension(name)?.to_ascii_lowercase();
    CONTENT_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(content_type_for("a.txt"), Some("text/plain"));
        assert_eq!(content_type_for("doc.pdf"), Some("application/pdf"));
        assert_eq!(content_type_for("b.png"), Some("image/png"));
        assert_eq!(content_type_for("photo.jpg"), Some("image/jpeg"));
        assert_eq!(content_type_for("index.html"), Some("text/html"));
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(content_type_for("SHOUT.TXT"), Some("text/plain"));
        assert_eq!(content_type_for("Photo.JpG"), Some("image/jpeg"));
    }

    #[test]
    fn unknown_or_missing_extension() {
        assert_eq!(content_type_for("archive.tar.gz"), None);
        assert_eq!(content_type_for("photo.jpeg"), None);
        assert_eq!(content_type_for("README"), None);
        assert_eq!(content_type_for("dir.d/file"), None);
    }

    #[test]
    fn only_last_extension_counts() {
        assert_eq!(content_type_for("notes.txt.png"), Some("image/png"));
        assert_eq!(extension("nested/dir/.txt"), Some(".txt"));
    }
}
