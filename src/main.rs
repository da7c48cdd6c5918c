mod report;

use nurdsem::app::{self, AppError, ArgsSource, PathSource, PromptSource, RunConfig};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

fn main() {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = execute(&config) {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn execute(config: &CliConfig) -> Result<(), AppError> {
    let paths = if io::stdin().is_terminal() {
        PromptSource::new(io::stdin().lock(), io::stderr()).resolve(&config.run)?
    } else {
        ArgsSource.resolve(&config.run)?
    };

    let corpus = app::prepare()?;
    let outcome = app::run(corpus, paths)?;

    let text = report::render(&outcome, config.verbose, config.color);
    if outcome.paths.writes_stdout() {
        eprintln!("{text}");
    } else {
        println!("{text}");
    }
    Ok(())
}

/// Install a stderr subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=nurdsem=debug`.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .with_target(true)
            .init();
    }
}

struct CliConfig {
    run: RunConfig,
    verbose: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut run = RunConfig::default();
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("nurdsem {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "-i" | "--input" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_once(&mut run.input_path, value, "input")?;
            }
            "-o" | "--output" => {
                let value = args.next().ok_or_else(|| "error: --output expects a value".to_string())?;
                set_once(&mut run.output_path, value, "output")?;
            }
            _ if arg.starts_with("--input=") => {
                set_once(&mut run.input_path, arg.trim_start_matches("--input=").to_string(), "input")?;
            }
            _ if arg.starts_with("--output=") => {
                set_once(&mut run.output_path, arg.trim_start_matches("--output=").to_string(), "output")?;
            }
            _ if arg.starts_with('-') && arg != "-" => {
                return Err(format!("error: unknown option '{arg}'\n\n{}", help_text()));
            }
            _ => {
                return Err(format!("error: unexpected argument '{arg}'\n\n{}", help_text()));
            }
        }
    }

    Ok(CliConfig { run, verbose, color })
}

fn set_once(slot: &mut Option<PathBuf>, value: String, what: &str) -> Result<(), String> {
    if slot.is_some() {
        return Err(format!("error: {what} provided multiple times"));
    }
    if value.is_empty() {
        return Err(format!("error: --{what} expects a non-empty path"));
    }
    *slot = Some(PathBuf::from(value));
    Ok(())
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "nurdsem {version}

Nurdsem Ragesum: a NurdRage-themed placeholder text generator. Every word of
the input is replaced by the next word of a fixed pseudo-Latin text, keeping
layout, punctuation and capitalization.

Usage:
  nurdsem [OPTIONS]

Options:
  -i, --input <path>     Input file ('-' for stdin). Prompted for when omitted
                         and stdin is a terminal.
  -o, --output <path>    Output file ('-' for stdout). Prompted for when
                         omitted and stdin is a terminal; '.txt' is added to
                         prompted names without an extension.
  -v, --verbose          Print word counts and timing after the run.
  --color                Force ANSI color output.
  --no-color             Disable ANSI color output.
  -h, --help             Show this help message.
  -V, --version          Print version information.

Environment:
  RUST_LOG               Enable diagnostics on stderr, e.g. RUST_LOG=nurdsem=debug.

Exit codes:
  0  Success.
  1  Failed to read, transform or write.
  2  Invalid arguments or no file selected.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
