use std::path::Path;

/// MIME type used when the extension is unknown or missing.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Guesses a MIME type from a file name's extension.
///
/// Pure and total: unknown extensions fall back to [`FALLBACK_MIME`].
/// Matching is case-insensitive.
pub fn guess_mime(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return FALLBACK_MIME;
    };

    match ext.to_ascii_lowercase().as_str() {
        "txt" | "log" => "text/plain",
        "csv" => "text/csv",
        "tsv" => "text/tab-separated-values",
        "md" => "text/markdown",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "ipynb" => "application/x-ipynb+json",
        "xml" => "application/xml",
        "yaml" | "yml" => "application/yaml",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "ico" => "image/vnd.microsoft.icon",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "avi" => "video/x-msvideo",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        _ => FALLBACK_MIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_resolves_to_text_csv() {
        assert_eq!(guess_mime(Path::new("report.csv")), "text/csv");
    }

    #[test]
    fn unknown_extension_falls_back() {
        assert_eq!(guess_mime(Path::new("archive.unknownext")), FALLBACK_MIME);
    }

    #[test]
    fn no_extension_falls_back() {
        assert_eq!(guess_mime(Path::new("Makefile")), FALLBACK_MIME);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(guess_mime(Path::new("PHOTO.JPG")), "image/jpeg");
        assert_eq!(guess_mime(Path::new("plot.PnG")), "image/png");
    }

    #[test]
    fn full_paths_use_only_the_extension() {
        assert_eq!(
            guess_mime(Path::new("/content/output/notebook.ipynb")),
            "application/x-ipynb+json"
        );
    }

    #[test]
    fn dotfile_without_extension_falls_back() {
        // `.gitignore` has no extension in Path terms.
        assert_eq!(guess_mime(Path::new(".gitignore")), FALLBACK_MIME);
    }
}
