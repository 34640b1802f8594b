use miette::*;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Overrides the default input file when no path is passed on the command line.
pub const INPUT_ENV: &str = "AOC_INPUT";

/// Resolves the puzzle input for the running binary.
///
/// The first command line argument wins, then [`INPUT_ENV`], then `default`
/// relative to `crate_dir` (usually `env!("CARGO_MANIFEST_DIR")`).
pub fn resolve(crate_dir: &str, default: &str) -> PathBuf {
    resolve_from(
        std::env::args_os().nth(1),
        std::env::var_os(INPUT_ENV),
        crate_dir,
        default,
    )
}

fn resolve_from(
    arg: Option<OsString>,
    env: Option<OsString>,
    crate_dir: &str,
    default: &str,
) -> PathBuf {
    arg.or(env)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(crate_dir).join(default))
}

/// Reads the whole input file. Missing, unreadable or blank files are fatal.
#[tracing::instrument]
pub fn read(path: &Path) -> Result<String> {
    let input = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read puzzle input {}", path.display()))?;

    if input.trim().is_empty() {
        bail!("puzzle input {} is empty", path.display());
    }

    tracing::debug!(bytes = input.len(), "input loaded");
    Ok(input)
}

/// Resolves and reads the input in one go.
pub fn load(crate_dir: &str, default: &str) -> Result<String> {
    read(&resolve(crate_dir, default))
}
