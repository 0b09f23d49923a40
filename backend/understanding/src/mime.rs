//! MIME type detection for uploaded images.

use std::path::Path;

/// Used when neither the upload nor the bytes say otherwise.
pub const FALLBACK_MIME: &str = "image/png";

/// Detect MIME type by file extension.
pub fn detect_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png"          => "image/png",
        "gif"          => "image/gif",
        "webp"         => "image/webp",
        "bmp"          => "image/bmp",
        "avif"         => "image/avif",
        "tiff" | "tif" => "image/tiff",
        _              => "application/octet-stream",
    }
}

/// Detect an image MIME type from its leading magic bytes.
pub fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => Some("image/png"),
        [0xff, 0xd8, 0xff, ..] => Some("image/jpeg"),
        [b'G', b'I', b'F', b'8', ..] => Some("image/gif"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        [b'B', b'M', ..] => Some("image/bmp"),
        _ => None,
    }
}

/// Pick the MIME type for an upload: the declared type wins, then the
/// sniffed one, then `image/png`.
pub fn resolve_mime(declared: Option<&str>, bytes: &[u8]) -> String {
    declared
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .or_else(|| sniff_image_mime(bytes))
        .unwrap_or(FALLBACK_MIME)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detects_jpeg() {
        assert_eq!(detect_mime_type(&PathBuf::from("problem.JPG")), "image/jpeg");
    }

    #[test]
    fn unknown_extension_fallback() {
        assert_eq!(detect_mime_type(&PathBuf::from("file.xyz")), "application/octet-stream");
    }

    #[test]
    fn sniffs_png_and_webp() {
        assert_eq!(sniff_image_mime(b"\x89PNG\r\n\x1a\n"), Some("image/png"));
        assert_eq!(sniff_image_mime(b"RIFF\0\0\0\0WEBPVP8 "), Some("image/webp"));
        assert_eq!(sniff_image_mime(b"hello"), None);
    }

    #[test]
    fn declared_type_wins() {
        assert_eq!(resolve_mime(Some("image/jpeg"), b"\x89PNG"), "image/jpeg");
    }

    #[test]
    fn falls_back_to_png() {
        assert_eq!(resolve_mime(None, b"??"), "image/png");
        assert_eq!(resolve_mime(Some(""), b"\xff\xd8\xff\xe0"), "image/jpeg");
    }
}
