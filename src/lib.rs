use std::fs;
use std::path::Path;

pub mod algorithm;
pub mod error;
pub mod line;
pub mod report;

pub use algorithm::Algorithm;
pub use error::VerifyError;
pub use line::Entry;
pub use report::Summary;

/// Algorithm inference state for one manifest. The decision is made once, on
/// the first non-empty digest, and then never revisited for that manifest.
#[derive(Debug, Clone, Copy)]
enum AlgoState {
    Unknown,
    Known(Algorithm),
    Undetermined,
}

/// Per-entry verification outcome, folded into the [`Summary`] counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VerificationOutcome {
    Verified,
    Mismatch,
    Unreadable,
    InvalidFormat,
}

#[derive(Debug, Clone, Default)]
pub struct Verifier {
    pub ignore_missing: bool,
    pub quiet: bool,
    pub status: bool,
    pub strict: bool,
    pub warn: bool,
}

impl Verifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_missing(mut self, ignore_missing: bool) -> Self {
        self.ignore_missing = ignore_missing;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_status(mut self, status: bool) -> Self {
        self.status = status;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_warn(mut self, warn: bool) -> Self {
        self.warn = warn;
        self
    }

    /// Verify every entry of one manifest, printing per-entry results to
    /// stdout and warnings to stderr according to the configured flags.
    ///
    /// Referenced paths resolve against the manifest's own directory, passed
    /// explicitly so that processing several manifests never shares state.
    /// Only a manifest that cannot be read at all is an `Err`; per-line
    /// failures are counted in the returned [`Summary`].
    pub fn verify_manifest<P: AsRef<Path>>(&self, manifest: P) -> Result<Summary, VerifyError> {
        let manifest = manifest.as_ref();
        let base_dir = manifest.parent().unwrap_or_else(|| Path::new("."));

        let text = fs::read_to_string(manifest).map_err(|e| VerifyError::ManifestRead {
            path: manifest.display().to_string(),
            source: e,
        })?;

        let mut summary = Summary::default();
        let mut algo_state = AlgoState::Unknown;

        for (index, raw_line) in text.lines().enumerate() {
            let line_number = index + 1;

            // Blank lines and comments carry no digest; they never count and
            // never drive algorithm inference.
            if raw_line.is_empty() || raw_line.starts_with('#') {
                continue;
            }

            let entry = line::parse_line(raw_line);

            if let (AlgoState::Unknown, Some(parsed)) = (algo_state, &entry) {
                algo_state = match Algorithm::from_hex_len(parsed.digest.len()) {
                    Some(algorithm) => AlgoState::Known(algorithm),
                    None => AlgoState::Undetermined,
                };
            }

            let algorithm = match algo_state {
                AlgoState::Known(algorithm) => Some(algorithm),
                _ => None,
            };

            let outcome = match (entry, algorithm) {
                (Some(entry), Some(algorithm)) if !entry.path.is_empty() => {
                    match self.check_entry(base_dir, &entry, algorithm) {
                        Some(outcome) => outcome,
                        // ignore_missing: no counter, no output
                        None => continue,
                    }
                }
                _ => {
                    if self.warn {
                        let name = algorithm.map_or("", |a| a.as_str());
                        eprintln!(
                            "{}: {}: improperly formatted {} checksum line",
                            manifest.display(),
                            line_number,
                            name
                        );
                    }
                    VerificationOutcome::InvalidFormat
                }
            };

            match outcome {
                VerificationOutcome::Verified => summary.verified += 1,
                VerificationOutcome::Mismatch => summary.mismatched += 1,
                VerificationOutcome::Unreadable => summary.unreadable += 1,
                VerificationOutcome::InvalidFormat => summary.invalid += 1,
            }
        }

        if !self.status {
            report::print_summary(manifest, &summary);
        }

        // Collect-then-report: strict failures surface only once the whole
        // manifest has been traversed, so the counters above stay complete.
        if self.strict && summary.invalid > 0 {
            eprintln!("{}: improperly formatted checksum file", manifest.display());
        }

        Ok(summary)
    }

    /// Check one well-formed entry against the filesystem. Returns `None`
    /// when an unreadable file is skipped because of `ignore_missing`.
    fn check_entry(
        &self,
        base_dir: &Path,
        entry: &Entry,
        algorithm: Algorithm,
    ) -> Option<VerificationOutcome> {
        let resolved = base_dir.join(&entry.path);

        // The regular-file check and the read can still race; a hash failure
        // after the check counts as unreadable all the same.
        let actual = if resolved.is_file() {
            algorithm.hash_file(&resolved).ok()
        } else {
            None
        };

        let Some(actual) = actual else {
            if self.ignore_missing {
                return None;
            }
            if !self.status {
                println!("{}: FAILED open or read", entry.path);
            }
            return Some(VerificationOutcome::Unreadable);
        };

        if actual.eq_ignore_ascii_case(&entry.digest) {
            if !self.quiet && !self.status {
                println!("{}: OK", entry.path);
            }
            Some(VerificationOutcome::Verified)
        } else {
            if !self.status {
                println!("{}: FAILED", entry.path);
            }
            Some(VerificationOutcome::Mismatch)
        }
    }
}
