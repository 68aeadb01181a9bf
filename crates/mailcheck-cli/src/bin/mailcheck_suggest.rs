// mailcheck-suggest: Propose corrections for mistyped email addresses.
//
// Reads emails from the command line or stdin (one per line) and prints a
// corrected address whenever a reference entry is close enough.
//
// Usage:
//   mailcheck-suggest [OPTIONS] [EMAIL...]
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
        println!("mailcheck-suggest: Propose corrections for mistyped email addresses.");
        println!();
        println!("Usage: mailcheck-suggest [OPTIONS] [EMAIL...]");
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
        match checker.suggest(email) {
            Some(suggestion) => {
                let _ = writeln!(out, "{email}: did you mean {}?", suggestion.full);
            }
            None => {
                let _ = writeln!(out, "{email}: (no suggestion)");
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
