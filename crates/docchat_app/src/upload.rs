//! Content-type declaration for picked files.
//!
//! A terminal client has no browser to declare a MIME type, so the extension
//! stands in for it. The core only compares the resulting string against the
//! PDF type; everything else is rejected before any request is made.

use std::path::Path;

pub fn content_type_for(path: &Path) -> String {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("html") | Some("htm") => "text/html",
        _ => "application/octet-stream",
    }
    .to_string()
}

pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("file")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn pdf_extension_declares_pdf() {
        assert_eq!(content_type_for(Path::new("/docs/a.pdf")), "application/pdf");
        assert_eq!(content_type_for(Path::new("B.PDF")), "application/pdf");
    }

    #[test]
    fn other_extensions_declare_something_else() {
        assert_eq!(content_type_for(Path::new("notes.txt")), "text/plain");
        assert_eq!(
            content_type_for(Path::new("archive.tar.gz")),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for(Path::new("no_extension")),
            "application/octet-stream"
        );
    }

    #[test]
    fn file_name_is_the_last_component() {
        assert_eq!(file_name_of(Path::new("/docs/a.pdf")), "a.pdf");
        assert_eq!(file_name_of(Path::new("a.pdf")), "a.pdf");
    }
}
