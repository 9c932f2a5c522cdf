use jpb_core::{Any, Path, render, root};
use serde_json::Value;
use std::env;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!(
        "jpb {VERSION} - JSONPath query builder

Usage: jpb [OPTIONS] <STEP>...

Arguments:
  <STEP>...  Path steps, applied left to right: an integer selects an array
             index, '*' selects any element, anything else selects a key

Options:
      --call     Re-express the trailing key as a function call
      --json     Print a JSON object with the query text and parameters
  -h, --help     Show this help message
  -V, --version  Show version"
    );
}

fn print_version() {
    println!("jpb {VERSION}");
}

enum ParsedArgs {
    Help,
    Version,
    Build {
        steps: Vec<String>,
        call: bool,
        json: bool,
    },
}

fn parse_args() -> Result<ParsedArgs, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        return Err("missing required argument: <STEP>\n\nUsage: jpb [OPTIONS] <STEP>...\n\nFor more information, try '--help'".to_string());
    }

    let mut steps = Vec::new();
    let mut call = false;
    let mut json = false;

    for arg in &args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParsedArgs::Help),
            "-V" | "--version" => return Ok(ParsedArgs::Version),
            "--call" => call = true,
            "--json" => json = true,
            // Negative numbers are index steps, not options.
            s if s.starts_with('-') && s.parse::<i64>().is_err() => {
                return Err(format!("unknown option: {s}\n\nUsage: jpb [OPTIONS] <STEP>...\n\nFor more information, try '--help'"));
            }
            _ => steps.push(arg.clone()),
        }
    }

    if steps.is_empty() {
        return Err("missing required argument: <STEP>\n\nUsage: jpb [OPTIONS] <STEP>...\n\nFor more information, try '--help'".to_string());
    }

    Ok(ParsedArgs::Build { steps, call, json })
}

/// Apply one shell-supplied step: integers select indexes, `*` selects any
/// element, JSON strings select their content as a key, and everything else
/// is taken as a key verbatim
fn apply_step(path: &Path, step: &str) -> Result<Path, String> {
    if step == "*" {
        return path.at(Any).map_err(|e| e.to_string());
    }
    match serde_json::from_str::<Value>(step) {
        Ok(Value::Number(number)) if number.is_i64() => {
            let index = number.as_i64().unwrap_or_default();
            path.at(index).map_err(|e| e.to_string())
        }
        Ok(Value::String(name)) => path.at(name).map_err(|e| e.to_string()),
        _ => path.at(step).map_err(|e| e.to_string()),
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    match args {
        ParsedArgs::Help => {
            print_help();
            Ok(())
        }
        ParsedArgs::Version => {
            print_version();
            Ok(())
        }
        ParsedArgs::Build { steps, call, json } => {
            let mut path = root();
            for step in &steps {
                path = apply_step(&path, step)?;
            }
            if call {
                path = path.call().map_err(|e| e.to_string())?;
            }

            let (text, params) = render(&path);

            if json {
                let output = serde_json::json!({ "text": text, "params": params });
                println!("{output}");
            } else {
                println!("{text}");
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("jpb: {e}");
            ExitCode::FAILURE
        }
    }
}
