// Recover a secret from a share file with the `shamir` crate.
//
// This example demonstrates:
// - Reading the JSON share file format
// - Decoding shares written in bases 2 to 36
// - Consensus search over the subsets of shares, optionally in parallel and
//   tolerating corrupted shares

use std::{env, error::Error, fs, process::exit, time::Duration};

use console::style;
use shamir::{reconstruct, Modulus, SearchOptions, ShareFile, Strategy};

fn print_notice_and_exit(error: Option<String>) -> ! {
    println!(
        "{} Recover a Shamir secret from possibly corrupted shares",
        style("  overview:").magenta().bold()
    );
    println!(
        "{} recover [-h] [--help] [--input=<path>] [--prime=<p>] [--max_faults=<f>] [--timeout_ms=<ms>] [--parallel] [--json]",
        style("     usage:").magenta().bold()
    );
    println!(
        "{} {} must be a prime below 2^62, {} defaults to input.json",
        style("constraints:").magenta().bold(),
        style("prime").blue(),
        style("input").blue(),
    );
    if let Some(error) = error {
        println!("{} {}", style("     error:").red().bold(), error);
        exit(2);
    }
    exit(0);
}

fn parse_value<T: std::str::FromStr>(arg: &str, name: &str) -> T {
    let parts: Vec<&str> = arg.rsplit('=').collect();
    match parts.first().map(|value| value.parse::<T>()) {
        Some(Ok(value)) if parts.len() == 2 => value,
        _ => print_notice_and_exit(Some(format!("Invalid `--{}` argument", name))),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.contains(&"-h".to_string()) || args.contains(&"--help".to_string()) {
        print_notice_and_exit(None)
    }

    let mut input = "input.json".to_string();
    let mut prime = shamir::DEFAULT_PRIME;
    let mut options = SearchOptions::default();
    let mut json = false;

    for arg in &args {
        if arg.starts_with("--input") {
            input = parse_value(arg, "input");
        } else if arg.starts_with("--prime") {
            prime = parse_value(arg, "prime");
        } else if arg.starts_with("--max_faults") {
            options.max_faults = parse_value(arg, "max_faults");
        } else if arg.starts_with("--timeout_ms") {
            options.deadline = Some(Duration::from_millis(parse_value(arg, "timeout_ms")));
        } else if arg == "--parallel" {
            options.strategy = Strategy::Parallel;
        } else if arg == "--json" {
            json = true;
        } else {
            print_notice_and_exit(Some(format!("Unrecognized argument: {}", arg)))
        }
    }

    let modulus = match Modulus::new(prime) {
        Ok(modulus) => modulus,
        Err(e) => print_notice_and_exit(Some(e.to_string())),
    };

    let content = match fs::read_to_string(&input) {
        Ok(content) => content,
        Err(e) => {
            println!(
                "{} could not open {}: {}",
                style("     error:").red().bold(),
                input,
                e
            );
            exit(1)
        }
    };

    let file = match ShareFile::from_json(&content) {
        Ok(file) => file,
        Err(e) => {
            println!("{} {}", style("     error:").red().bold(), e);
            exit(1)
        }
    };
    if let Some(total) = file.declared_total {
        if total != file.shares.len() {
            println!(
                "{} {} shares announced, {} found",
                style("   warning:").yellow().bold(),
                total,
                file.shares.len()
            );
        }
    }

    match reconstruct(&file.shares, file.threshold, &modulus, options) {
        Ok(reconstruction) => {
            if json {
                println!("{}", serde_json::to_string(&reconstruction)?);
            } else {
                println!(
                    "{} {}",
                    style("    secret:").green().bold(),
                    reconstruction.secret
                );
                let xs = reconstruction
                    .subset
                    .iter()
                    .map(|&i| file.shares[i].x.to_string())
                    .collect::<Vec<_>>();
                println!("{} {}", style("    shares:").blue(), xs.join(", "));
                if !reconstruction.disagreeing.is_empty() {
                    let xs = reconstruction
                        .disagreeing
                        .iter()
                        .map(|&i| file.shares[i].x.to_string())
                        .collect::<Vec<_>>();
                    println!("{} {}", style(" corrupted:").yellow().bold(), xs.join(", "));
                }
            }
            Ok(())
        }
        Err(e) => {
            let label = if e.is_parse_failure() {
                "   invalid:"
            } else {
                "     error:"
            };
            println!("{} {}", style(label).red().bold(), e);
            exit(1)
        }
    }
}
