/// MIME type to file extension resolution.
///
/// The extension is cosmetic: the storage key, not the extension, is the
/// addressing mechanism, so an unexpected MIME type never blocks an upload.

/// Exact-match lookup used by the filesystem backend. Unknown or absent
/// MIME types fall back to `bin`.
pub fn extension_exact(mime_type: Option<&str>) -> &'static str {
    match mime_type {
        Some("image/jpeg") | Some("image/jpg") => "jpg",
        Some("image/png") => "png",
        Some("image/gif") => "gif",
        Some("image/webp") => "webp",
        Some("image/svg+xml") => "svg",
        _ => "bin",
    }
}

/// Fuzzy lookup used by the object-store backend: case-insensitive
/// substring match on the well-known image formats, then the subtype
/// after the `/`, then `bin`.
pub fn extension_fuzzy(mime_type: Option<&str>) -> String {
    let mime = match mime_type {
        Some(m) if !m.is_empty() => m.to_ascii_lowercase(),
        _ => return "bin".to_string(),
    };

    if mime.contains("jpeg") {
        "jpg".to_string()
    } else if mime.contains("png") {
        "png".to_string()
    } else if mime.contains("gif") {
        "gif".to_string()
    } else if mime.contains("webp") {
        "webp".to_string()
    } else if mime.contains("svg") {
        "svg".to_string()
    } else {
        match mime.split_once('/') {
            Some((_, subtype)) if !subtype.is_empty() => subtype.to_string(),
            _ => "bin".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_table_maps_known_image_types() {
        assert_eq!(extension_exact(Some("image/jpeg")), "jpg");
        assert_eq!(extension_exact(Some("image/jpg")), "jpg");
        assert_eq!(extension_exact(Some("image/png")), "png");
        assert_eq!(extension_exact(Some("image/gif")), "gif");
        assert_eq!(extension_exact(Some("image/webp")), "webp");
        assert_eq!(extension_exact(Some("image/svg+xml")), "svg");
    }

    #[test]
    fn exact_falls_back_to_bin() {
        assert_eq!(extension_exact(Some("application/pdf")), "bin");
        assert_eq!(extension_exact(Some("image/tiff")), "bin");
        assert_eq!(extension_exact(Some("")), "bin");
        assert_eq!(extension_exact(None), "bin");
    }

    #[test]
    fn fuzzy_matches_substrings_case_insensitively() {
        assert_eq!(extension_fuzzy(Some("image/jpeg")), "jpg");
        assert_eq!(extension_fuzzy(Some("IMAGE/PNG")), "png");
        assert_eq!(extension_fuzzy(Some("image/svg+xml")), "svg");
        assert_eq!(extension_fuzzy(Some("image/webp")), "webp");
        assert_eq!(extension_fuzzy(Some("application/x-gif-ish")), "gif");
    }

    #[test]
    fn fuzzy_falls_back_to_subtype_then_bin() {
        assert_eq!(extension_fuzzy(Some("image/tiff")), "tiff");
        assert_eq!(extension_fuzzy(Some("application/pdf")), "pdf");
        assert_eq!(extension_fuzzy(Some("garbage")), "bin");
        assert_eq!(extension_fuzzy(Some("")), "bin");
        assert_eq!(extension_fuzzy(None), "bin");
    }
}
