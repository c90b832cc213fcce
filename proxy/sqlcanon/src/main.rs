//! sqlcanon CLI
//!
//! Canonicalize SQL statement logs, one statement per line.

use sqlcanon::commands::{run_canon, run_digest, run_scanner};
use sqlcanon::options::parse_command_args;
use sqlcanon::CliError;

fn main() {
    sqlcanon::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "canon" => parse_command_args(&args[2..])
            .and_then(|(input, options)| run_canon(input.as_deref(), &options)),
        "digest" => parse_command_args(&args[2..])
            .and_then(|(input, options)| run_digest(input.as_deref(), &options)),
        "scanner" => run_scanner(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("sqlcanon {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => Err(CliError::UnknownCommand(command.clone())),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        if matches!(err, CliError::UnknownCommand(_)) {
            eprintln!();
            print_usage();
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("sqlcanon - SQL statement canonicalizer");
    println!();
    println!("Usage: sqlcanon <command> [FILE|-] [options]");
    println!();
    println!("Commands:");
    println!("  canon [FILE|-]    Print the canonical form of each statement");
    println!("  digest [FILE|-]   Count statements by canonical form");
    println!("  scanner           Show the marker scanner this CPU runs");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Input is one statement per line, read from FILE or stdin.");
    println!();
    println!("Options:");
    println!("  --scanner=<kind>  Scanner: auto, portable, avx2 (default: auto)");
    println!("  --max-len=<n>     Skip statements over n bytes (default: 1048576, 0 = no limit)");
    println!("  --top=<n>         digest: print only the n most frequent forms");
    println!("  --keep-empty      canon: print an empty line for each blank input line");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=sqlcanon=debug) to enable logging on stderr.");
}
