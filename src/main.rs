use clap::Parser;
use std::path::PathBuf;
use std::process;
use sumcheck::Verifier;

#[derive(Parser)]
#[command(name = "sumcheck")]
#[command(about = "Verify file checksums against a manifest")]
struct Cli {
    /// Don't fail or report status for missing files
    #[arg(long)]
    ignore_missing: bool,

    /// Don't print OK for each successfully verified file
    #[arg(long)]
    quiet: bool,

    /// Don't output anything, status code shows success
    #[arg(long)]
    status: bool,

    /// Exit non-zero for improperly formatted checksum lines
    #[arg(long)]
    strict: bool,

    /// Warn about improperly formatted checksum lines
    #[arg(long)]
    warn: bool,

    /// Manifest files to verify
    #[arg(required = true)]
    manifests: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let verifier = Verifier::new()
        .with_ignore_missing(cli.ignore_missing)
        .with_quiet(cli.quiet)
        .with_status(cli.status)
        .with_strict(cli.strict)
        .with_warn(cli.warn);

    let mut failed = false;

    // Arguments that don't name an existing regular file are skipped, not
    // treated as errors; the library only ever sees real manifest files.
    for manifest in cli.manifests.iter().filter(|path| path.is_file()) {
        match verifier.verify_manifest(manifest) {
            Ok(summary) => {
                if !summary.ok() {
                    failed = true;
                }
            }
            Err(err) => {
                eprintln!("sumcheck: {}", err);
                failed = true;
            }
        }
    }

    process::exit(i32::from(failed));
}
