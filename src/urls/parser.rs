use std::fs;
use std::path::Path;

use tracing::debug;

use super::classifier::classify_url;
use crate::error::UrlFileError;
use crate::models::UrlLine;

/// Classify every comma-separated URL in `path`, one [`UrlLine`] per line of input.
///
/// A missing file is reported as [`UrlFileError::NotFound`] so callers can
/// tell it apart from an empty file.
pub fn parse_url_file(path: &Path) -> Result<Vec<UrlLine>, UrlFileError> {
    let content =
        fs::read_to_string(path).map_err(|e| UrlFileError::from_io(path.to_path_buf(), e))?;

    let results: Vec<UrlLine> = split_lines(&content).into_iter().map(parse_line).collect();

    let urls: usize = results.iter().map(UrlLine::len).sum();
    debug!(file = %path.display(), lines = results.len(), urls, "parsed URL file");
    Ok(results)
}

/// Split on `\n`, `\r\n` or a lone `\r`. A trailing terminator does not
/// start another line.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = content
        .split("\r\n")
        .flat_map(|chunk| chunk.split(|c| c == '\n' || c == '\r'))
        .collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

pub fn parse_line(line: &str) -> UrlLine {
    let mut entry = UrlLine::new();
    for url in line.trim().split(',') {
        let url = url.trim();
        entry.insert(url.to_string(), classify_url(url));
    }
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UrlCategory;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn parse(content: &str) -> Vec<UrlLine> {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        parse_url_file(f.path()).unwrap()
    }

    #[test]
    fn test_two_line_file() {
        let lines = parse("https://github.com/a/b,  \nhttps://huggingface.co/datasets/x");
        assert_eq!(lines.len(), 2);

        assert_eq!(lines[0].len(), 2);
        assert_eq!(lines[0].get("https://github.com/a/b"), Some(UrlCategory::Code));
        assert_eq!(lines[0].get(""), Some(UrlCategory::Empty));

        assert_eq!(lines[1].len(), 1);
        assert_eq!(
            lines[1].get("https://huggingface.co/datasets/x"),
            Some(UrlCategory::Dataset)
        );
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        let lines = parse("https://huggingface.co/bert\n");
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_blank_line_is_single_empty_entry() {
        let lines = parse("https://github.com/a/b\n\nftp://x\r\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].len(), 1);
        assert_eq!(lines[1].get(""), Some(UrlCategory::Empty));
        assert_eq!(lines[2].get("ftp://x"), Some(UrlCategory::Unknown));
    }

    #[test]
    fn test_lone_carriage_return_ends_a_line() {
        let lines = parse("https://github.com/a/b,\rhttps://huggingface.co/x\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].get("https://github.com/a/b"), Some(UrlCategory::Code));
        assert_eq!(lines[1].get("https://huggingface.co/x"), Some(UrlCategory::Model));

        assert_eq!(parse("a\r\rb\r").len(), 3);
    }

    #[test]
    fn test_undecodable_file_is_io_error() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"\xff\xfe\n").unwrap();
        let err = parse_url_file(f.path()).unwrap_err();
        assert!(matches!(err, UrlFileError::Io { .. }));
    }

    #[test]
    fn test_duplicate_url_in_line_collapses() {
        let lines = parse("https://github.com/a/b, https://github.com/a/b ,\n");
        assert_eq!(lines[0].len(), 2);
    }

    #[test]
    fn test_empty_file() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = parse_url_file(&dir.path().join("urls.txt")).unwrap_err();
        assert!(matches!(err, UrlFileError::NotFound(_)));
    }
}
