/// Data extracted from one recognized manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Recorded hex digest, exactly as written in the manifest.
    pub digest: String,
    /// Referenced file path, relative to the manifest's directory. May be
    /// empty when the line carries a digest but names no file; such an
    /// entry still drives algorithm inference but verifies nothing.
    pub path: String,
}

/// Try the recognized line formats in order, stopping at the first match.
/// Returns `None` when the line matches neither format. A match always has
/// a non-empty digest; the path is returned as written, even when empty.
pub fn parse_line(line: &str) -> Option<Entry> {
    parse_gnu(line).or_else(|| parse_bsd(line))
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// GNU coreutils style: `<digest>  <path>` or `<digest> *<path>`.
/// The digest runs up to the first `"  "` or `" *"`; everything after the
/// two-byte separator is the path and may itself contain spaces.
fn parse_gnu(line: &str) -> Option<Entry> {
    let two_space = line.find("  ");
    let asterisk = line.find(" *");
    let sep = match (two_space, asterisk) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => return None,
    };

    let digest = &line[..sep];
    let path = &line[sep + 2..];
    if digest.is_empty() || !digest.bytes().all(is_word_byte) {
        return None;
    }

    Some(Entry {
        digest: digest.to_string(),
        path: path.to_string(),
    })
}

/// BSD style: `<ALGORITHM> (<path>) = <digest>`.
/// The closing marker is searched from the right so paths containing `") = "`
/// still parse.
fn parse_bsd(line: &str) -> Option<Entry> {
    let open = line.find(" (")?;
    let algorithm = &line[..open];
    let rest = &line[open + 2..];
    let (path, digest) = rest.rsplit_once(") = ")?;

    if algorithm.is_empty()
        || !algorithm.bytes().all(is_word_byte)
        || digest.is_empty()
        || !digest.bytes().all(is_word_byte)
    {
        return None;
    }

    Some(Entry {
        digest: digest.to_string(),
        path: path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gnu_two_space() {
        let entry = parse_line("d41d8cd98f00b204e9800998ecf8427e  empty.txt").unwrap();
        assert_eq!(entry.digest, "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(entry.path, "empty.txt");
    }

    #[test]
    fn test_gnu_binary_marker() {
        let entry = parse_line("d41d8cd98f00b204e9800998ecf8427e *empty.bin").unwrap();
        assert_eq!(entry.digest, "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(entry.path, "empty.bin");
    }

    #[test]
    fn test_gnu_path_with_spaces() {
        let entry = parse_line("b1946ac92492d2347c6235b4d2611184  my file name.txt").unwrap();
        assert_eq!(entry.path, "my file name.txt");
    }

    #[test]
    fn test_gnu_relative_subdirectory_path() {
        let entry = parse_line("b1946ac92492d2347c6235b4d2611184  sub/dir/file.txt").unwrap();
        assert_eq!(entry.path, "sub/dir/file.txt");
    }

    #[test]
    fn test_bsd_basic() {
        let entry =
            parse_line("MD5 (foo.bin) = d41d8cd98f00b204e9800998ecf8427e").unwrap();
        assert_eq!(entry.digest, "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(entry.path, "foo.bin");
    }

    #[test]
    fn test_bsd_path_with_parens() {
        let entry =
            parse_line("SHA256 (notes (copy).txt) = e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
                .unwrap();
        assert_eq!(entry.path, "notes (copy).txt");
    }

    #[test]
    fn test_line_matching_neither_format() {
        assert!(parse_line("this is not a checksum line").is_none());
        assert!(parse_line("d41d8cd98f00b204e9800998ecf8427e empty.txt").is_none());
        assert!(parse_line("").is_none());
        assert!(parse_line("  leading separator").is_none());
    }

    #[test]
    fn test_gnu_digest_with_empty_path() {
        let entry = parse_line("abc1234  ").unwrap();
        assert_eq!(entry.digest, "abc1234");
        assert_eq!(entry.path, "");
    }

    #[test]
    fn test_bsd_digest_with_empty_path() {
        let entry = parse_line("MD5 () = d41d8cd98f00b204e9800998ecf8427e").unwrap();
        assert_eq!(entry.digest, "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(entry.path, "");
    }

    #[test]
    fn test_gnu_rejects_non_word_digest() {
        assert!(parse_line("d41d-cd98f00b204e9800998ecf8427e  file").is_none());
    }

    #[test]
    fn test_bsd_rejects_missing_marker() {
        assert!(parse_line("MD5 (foo.bin) d41d8cd98f00b204e9800998ecf8427e").is_none());
        assert!(parse_line("MD5 foo.bin = d41d8cd98f00b204e9800998ecf8427e").is_none());
    }

    #[test]
    fn test_gnu_tried_before_bsd() {
        // A line that happens to parse as GNU must not fall through to BSD.
        let entry = parse_line("abc123  MD5 (x) = def").unwrap();
        assert_eq!(entry.digest, "abc123");
        assert_eq!(entry.path, "MD5 (x) = def");
    }
}
