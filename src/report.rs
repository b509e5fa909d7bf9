use std::path::Path;

/// Per-manifest verification counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines matching neither recognized format, or lines for which no
    /// algorithm could be inferred.
    pub invalid: u32,
    /// Listed files that were missing, unreadable, or not regular files.
    pub unreadable: u32,
    /// Computed digests that differed from the recorded ones.
    pub mismatched: u32,
    /// Computed digests that matched.
    pub verified: u32,
}

impl Summary {
    /// True when nothing went wrong: every counted line verified.
    pub fn ok(&self) -> bool {
        self.invalid == 0 && self.unreadable == 0 && self.mismatched == 0
    }
}

/// Emit the end-of-manifest warnings to stderr for any non-zero failure
/// counter, plus a note when not a single file verified.
pub fn print_summary(manifest: &Path, summary: &Summary) {
    if summary.invalid == 1 {
        eprintln!("WARNING: 1 line is improperly formatted");
    } else if summary.invalid > 1 {
        eprintln!("WARNING: {} lines are improperly formatted", summary.invalid);
    }

    if summary.unreadable == 1 {
        eprintln!("WARNING: 1 listed file could not be read");
    } else if summary.unreadable > 1 {
        eprintln!(
            "WARNING: {} listed files could not be read",
            summary.unreadable
        );
    }

    if summary.mismatched == 1 {
        eprintln!("WARNING: 1 computed checksum did NOT match");
    } else if summary.mismatched > 1 {
        eprintln!(
            "WARNING: {} computed checksums did NOT match",
            summary.mismatched
        );
    }

    if summary.verified == 0 {
        eprintln!("{}: no file was verified", manifest.display());
    }
}
