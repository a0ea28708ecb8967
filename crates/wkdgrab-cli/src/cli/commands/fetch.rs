//! `wkdgrab fetch` – resolve a key, save it, optionally import it.

use crate::cli::prompt::Prompt;
use crate::cli::EXIT_NOT_FOUND;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;
use wkdgrab_core::email::EmailAddress;
use wkdgrab_core::fetch::{CurlFetcher, Fetcher};
use wkdgrab_core::import::GpgImport;
use wkdgrab_core::report::StderrReporter;
use wkdgrab_core::resolver::{self, Resolution};
use wkdgrab_core::storage;

/// Effective options for one fetch run (config merged with CLI flags).
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub verbose: bool,
    pub output_dir: Option<PathBuf>,
    pub autoimport: bool,
    pub gpg_path: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

/// Resolve `raw_email` over the network and return the process exit code.
pub fn run_fetch(raw_email: &str, opts: &FetchOptions, prompt: &dyn Prompt) -> Result<i32> {
    let fetcher = CurlFetcher::new(opts.connect_timeout, opts.timeout);
    fetch_and_save(raw_email, opts, &fetcher, prompt)
}

/// Fetch with an injected fetcher. Returns 0 when the key was found and
/// saved, [`EXIT_NOT_FOUND`] when both lookup methods came up empty; a
/// persistence failure is a hard error.
pub(crate) fn fetch_and_save(
    raw_email: &str,
    opts: &FetchOptions,
    fetcher: &dyn Fetcher,
    prompt: &dyn Prompt,
) -> Result<i32> {
    let email = EmailAddress::parse(raw_email)?;
    let reporter = StderrReporter::new(opts.verbose);

    match resolver::resolve(&email, fetcher, &reporter) {
        Resolution::Found { key, source } => {
            tracing::info!(source = source.url(), "public key retrieved");
            let filename = storage::default_filename(&email);
            let path = match &opts.output_dir {
                Some(dir) => dir.join(&filename),
                None => PathBuf::from(&filename),
            };
            storage::save_key(&path, &key)?;
            println!("saved public key to {}", path.display());
            maybe_import(&path, opts, prompt);
            Ok(0)
        }
        Resolution::NotFound => Ok(EXIT_NOT_FOUND),
    }
}

/// Import the saved key when wanted. Failures warn with the manual command
/// but never fail the run; the key is already on disk.
fn maybe_import(key_file: &Path, opts: &FetchOptions, prompt: &dyn Prompt) {
    let import = GpgImport::new(&opts.gpg_path);
    let wanted = opts.autoimport
        || prompt.confirm(&format!(
            "import {} into {}?",
            key_file.display(),
            opts.gpg_path
        ));
    if !wanted {
        return;
    }
    match import.import(key_file) {
        Ok(()) => println!("imported public key into {}", opts.gpg_path),
        Err(err) => {
            eprintln!("warning: key import failed: {}", err);
            eprintln!(
                "import the key manually with: {}",
                import.manual_command(key_file)
            );
        }
    }
}
