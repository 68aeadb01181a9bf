// mailcheck-cli: shared utilities for the CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use mailcheck::Mailcheck;

/// Environment variable naming a file of extra domains (one per line).
const DOMAINS_ENV: &str = "MAILCHECK_DOMAINS";

/// Environment variable naming a file of extra top-level domains.
const TLDS_ENV: &str = "MAILCHECK_TLDS";

/// Options shared by the mailcheck binaries.
#[derive(Debug, Default)]
pub struct CliOptions {
    /// Path to an extra domain list file (`--domains`).
    pub domains_path: Option<String>,
    /// Path to an extra top-level-domain list file (`--tlds`).
    pub tlds_path: Option<String>,
    /// Distance threshold override (`--threshold`).
    pub threshold: Option<usize>,
    /// Positional email arguments; stdin line mode when empty.
    pub emails: Vec<String>,
}

/// Parse the shared flags out of the argument list.
///
/// Recognizes `--domains PATH`, `--tlds PATH`, and `--threshold N` (each also
/// in `--flag=value` form). Remaining non-flag arguments are collected as
/// emails; unknown flags abort.
pub fn parse_args(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--domains=") {
            options.domains_path = Some(val.to_string());
        } else if let Some(val) = arg.strip_prefix("--tlds=") {
            options.tlds_path = Some(val.to_string());
        } else if let Some(val) = arg.strip_prefix("--threshold=") {
            options.threshold = Some(parse_threshold(val));
        } else if arg == "--domains" || arg == "--tlds" || arg == "--threshold" {
            let Some(val) = args.get(i + 1) else {
                fatal(&format!("{arg} requires a value"));
            };
            match arg.as_str() {
                "--domains" => options.domains_path = Some(val.clone()),
                "--tlds" => options.tlds_path = Some(val.clone()),
                _ => options.threshold = Some(parse_threshold(val)),
            }
            skip_next = true;
        } else if arg.starts_with('-') {
            fatal(&format!("unknown option: {arg}"));
        } else {
            options.emails.push(arg.clone());
        }
    }

    options
}

fn parse_threshold(val: &str) -> usize {
    val.parse()
        .unwrap_or_else(|_| fatal("invalid number for --threshold"))
}

/// Build a checker from the parsed options.
///
/// Extra list files come from the flags, falling back to the
/// `MAILCHECK_DOMAINS` / `MAILCHECK_TLDS` environment variables; entries are
/// appended after the built-in defaults.
pub fn load_checker(options: &CliOptions) -> Result<Mailcheck, String> {
    let extra_domains = match resolve_path(options.domains_path.as_deref(), DOMAINS_ENV) {
        Some(path) => read_list(&path)?,
        None => Vec::new(),
    };
    let extra_tlds = match resolve_path(options.tlds_path.as_deref(), TLDS_ENV) {
        Some(path) => read_list(&path)?,
        None => Vec::new(),
    };

    let mut checker = Mailcheck::with_extra(&extra_domains, &extra_tlds)
        .map_err(|e| format!("failed to build checker: {e}"))?;
    if let Some(threshold) = options.threshold {
        checker.set_threshold(threshold);
    }
    Ok(checker)
}

/// Pick the explicit path if given, otherwise consult the environment.
fn resolve_path(arg: Option<&str>, env: &str) -> Option<PathBuf> {
    if let Some(path) = arg {
        return Some(PathBuf::from(path));
    }
    std::env::var(env).ok().map(PathBuf::from)
}

/// Read a list file: one entry per line, trimmed, blank lines skipped,
/// lower-cased to match the engine's case folding.
fn read_list(path: &Path) -> Result<Vec<String>, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.to_lowercase())
        .collect())
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
