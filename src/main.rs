mod debug_report;

use romanum::{Engine, Options, ROMAN_MAX, ROMAN_MIN, to_roman, validate_verbose_with};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    std::process::exit(run(&config));
}

struct CliConfig {
    input: String,
    engine: Engine,
    verbose: bool,
    color: bool,
}

fn run(config: &CliConfig) -> i32 {
    let input = config.input.trim();

    // Digit-only input selects the integer → numeral direction.
    if input.bytes().all(|b| b.is_ascii_digit()) {
        let Ok(n) = input.parse::<u32>() else {
            eprintln!("Out of range ({ROMAN_MIN}-{ROMAN_MAX}).");
            return 1;
        };
        return match to_roman(n) {
            Some(roman) => {
                println!("{roman}");
                0
            }
            None => {
                eprintln!("Out of range ({ROMAN_MIN}-{ROMAN_MAX}).");
                1
            }
        };
    }

    let candidate = input.to_ascii_uppercase();
    let opts = Options { engine: config.engine };
    let report = validate_verbose_with(&candidate, &opts);

    if config.verbose {
        debug_report::print_run(&report, config.color);
    }

    match report.value {
        Some(value) => {
            if !config.verbose {
                println!("{value}");
            }
            0
        }
        None => {
            eprintln!("{candidate} is not a valid Roman numeral.");
            1
        }
    }
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut engine = Engine::Structural;
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("romanum {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--verbose" => verbose = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--engine" => {
                let value = args.next().ok_or_else(|| "error: --engine expects a value".to_string())?;
                engine = parse_engine(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--engine=") => {
                let value = arg.trim_start_matches("--engine=");
                engine = parse_engine(value)?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, engine, verbose, color })
}

fn parse_engine(value: &str) -> Result<Engine, String> {
    match value {
        "structural" => Ok(Engine::Structural),
        "pattern" => Ok(Engine::Pattern),
        _ => Err(format!("error: invalid --engine '{value}' (expected 'structural' or 'pattern')")),
    }
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "romanum {version}

Roman numeral converter and validator CLI.

Usage:
  romanum [OPTIONS] [--] <input...>
  romanum [OPTIONS] --input <text>

Digit-only input is converted to a Roman numeral; anything else is validated
as a Roman numeral (case-insensitive) and evaluated to its integer value.

Options:
  -i, --input <text>         Input to convert or validate. If omitted, reads
                             remaining args or stdin when no args are provided.
  --engine <name>            Validation engine: 'structural' (default) or
                             'pattern'. Both accept exactly the same numerals.
  --verbose                  Print the step-by-step validation report.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Valid numeral or successful conversion.
  1  Invalid numeral, or integer outside {min}-{max}.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        min = ROMAN_MIN,
        max = ROMAN_MAX
    )
}
