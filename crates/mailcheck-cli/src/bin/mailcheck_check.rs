// mailcheck-check: Validate email format and flag likely typos.
//
// Reads emails from the command line or stdin (one per line). For each,
// prints whether it matches the simple email format pattern, plus a
// correction when a reference entry is close enough. The two outcomes are
// independent: a well-formed address can still carry a typo'd domain.
//
// Usage:
//   mailcheck-check [OPTIONS] [EMAIL...]
//
// Options:
//   --domains PATH    Extra domain list file (one entry per line)
//   --tlds PATH       Extra top-level-domain list file
//   --threshold N     Maximum distance for a suggestion (default: 3)
//   -h, --help        Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if mailcheck_cli::wants_help(&args) {
        println!("mailcheck-check: Validate email format and flag likely typos.");
        println!();
        println!("Usage: mailcheck-check [OPTIONS] [EMAIL...]");
        println!();
        println!("If EMAIL arguments are given, checks each one.");
        println!("Otherwise reads emails from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  --domains PATH    Extra domain list file (one entry per line)");
        println!("  --tlds PATH       Extra top-level-domain list file");
        println!("  --threshold N     Maximum distance for a suggestion (default: 3)");
        println!("  -h, --help        Print this help");
        return;
    }

    let options = mailcheck_cli::parse_args(&args);
    let checker =
        mailcheck_cli::load_checker(&options).unwrap_or_else(|e| mailcheck_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let report = |email: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let result = checker.check(email);
        let verdict = if result.valid { "valid" } else { "invalid" };
        match result.suggestion {
            Some(suggestion) => {
                let _ = writeln!(
                    out,
                    "{email}: {verdict} (did you mean {}?)",
                    suggestion.full
                );
            }
            None => {
                let _ = writeln!(out, "{email}: {verdict}");
            }
        }
    };

    if options.emails.is_empty() {
        // Read from stdin
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let email = line.trim();
            if email.is_empty() {
                continue;
            }
            report(email, &mut out);
        }
    } else {
        for email in &options.emails {
            report(email, &mut out);
        }
    }
}
