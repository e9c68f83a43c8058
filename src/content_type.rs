pub static FALLBACK: &str = "application/octet-stream";

/// Maps a filename to a MIME type by its extension, case-insensitively.
/// Anything outside the image table (including no extension) falls back to
/// `application/octet-stream`.
pub fn content_type(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "gif" => "image/gif",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        _ => FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(content_type("a.gif"), "image/gif");
        assert_eq!(content_type("a.jpg"), "image/jpeg");
        assert_eq!(content_type("a.jpeg"), "image/jpeg");
        assert_eq!(content_type("a.png"), "image/png");
        assert_eq!(content_type("a.webp"), "image/webp");
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(content_type("photo.JPG"), content_type("photo.jpg"));
        assert_eq!(content_type("photo.PnG"), "image/png");
    }

    #[test]
    fn unknown_or_missing_extension_falls_back() {
        assert_eq!(content_type("file.bmp"), FALLBACK);
        assert_eq!(content_type("file"), FALLBACK);
        assert_eq!(content_type(""), FALLBACK);
        assert_eq!(content_type("trailing-dot."), FALLBACK);
    }

    #[test]
    fn only_the_last_extension_counts() {
        assert_eq!(content_type("archive.png.bmp"), FALLBACK);
        assert_eq!(content_type("archive.bmp.png"), "image/png");
    }
}
