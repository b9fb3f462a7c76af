use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::{ArgAction, Parser, ValueEnum};
use startlang::{grammar::grammar::GRAMMAR, parser::parser::parse_source, render_error};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Parses a program and prints its syntax tree.
#[derive(Debug, Parser)]
#[command(name = "startlang", version, about = "Parser for Start/End programs")]
struct Cli {
    /// Source file to parse
    file: PathBuf,

    /// What to print on success
    #[arg(long, value_enum, default_value_t = Emit::Tree)]
    emit: Emit,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Debug view of the tree
    Tree,
    /// Tree as JSON
    Json,
    /// Canonical source text
    Source,
    /// Recognized productions, in completion order
    Reductions,
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "startlang=warn",
        1 => "startlang=info",
        2 => "startlang=debug",
        _ => "startlang=trace",
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.to_string_lossy().into_owned());

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            error!(path = %cli.file.display(), %err, "failed to read source");
            eprintln!("Error: could not read {}: {}", cli.file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let (parser, result) = parse_source(&source);
    info!(elapsed = ?start.elapsed(), "parsed {}", file_name);

    let program = match result {
        Ok(program) => program,
        Err(err) => {
            eprint!("{}", render_error(&err, &source, &file_name));
            return ExitCode::FAILURE;
        }
    };

    match cli.emit {
        Emit::Tree => println!("{:#?}", program),
        Emit::Json => match serde_json::to_string_pretty(&program) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Error: could not serialize tree: {}", err);
                return ExitCode::FAILURE;
            }
        },
        Emit::Source => print!("{}", program),
        Emit::Reductions => {
            for rule in parser.reductions() {
                println!("{:>2} {}", rule.id(), GRAMMAR.production(*rule));
            }
        }
    }

    info!(total = ?start.elapsed(), "done");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_defaults() {
        assert_eq!(directive_for_verbosity(0), "startlang=warn");
        assert_eq!(directive_for_verbosity(1), "startlang=info");
        assert_eq!(directive_for_verbosity(2), "startlang=debug");
        assert_eq!(directive_for_verbosity(3), "startlang=trace");
        assert_eq!(directive_for_verbosity(9), "startlang=trace");
    }

    #[test]
    fn cli_parses_emit() {
        let cli = Cli::try_parse_from(["startlang", "main.sl", "--emit", "json", "-vv"]).unwrap();

        assert_eq!(cli.emit, Emit::Json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.file, PathBuf::from("main.sl"));
    }
}
