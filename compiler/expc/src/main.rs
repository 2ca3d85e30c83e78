//! Exp interpreter CLI.

use std::process::ExitCode;

use expc::commands::{lex_file, parse_file, run_file};
use expc::CliOptions;

fn main() -> ExitCode {
    expc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print!("{}", usage());
        return ExitCode::SUCCESS;
    };

    match command.as_str() {
        "run" => with_options(command, &args[2..], run_file),
        "lex" => with_options(command, &args[2..], lex_file),
        "parse" => with_options(command, &args[2..], parse_file),
        "help" | "--help" | "-h" => {
            print!("{}", usage());
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("exp {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            // A bare source path is shorthand for `run`.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("exp"))
            {
                with_options("run", &args[1..], run_file)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                eprint!("{}", usage());
                ExitCode::FAILURE
            }
        }
    }
}

fn with_options(
    command: &str,
    args: &[String],
    handler: fn(&CliOptions) -> ExitCode,
) -> ExitCode {
    match CliOptions::parse(args) {
        Ok(options) => handler(&options),
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Usage: exp {command} <file.exp> [options]");
            ExitCode::FAILURE
        }
    }
}

fn usage() -> String {
    format!(
        "\
Exp interpreter {version}

Usage: exp <command> [options]

Commands:
  run <file.exp>       Run a program
  lex <file.exp>       Print the token stream
  parse <file.exp>     Print the parsed program as canonical source
  <file.exp>           Shorthand for `run`
  help                 Show this help message
  version              Show version information

Options:
  --max-depth=<n>      Limit nested function calls (default {depth}, or `unlimited`)
  --color=<mode>       Diagnostic colors: auto, always, never

Set {log}=<filter> (e.g. {log}=exp_eval=trace) to enable tracing on stderr.
",
        version = env!("CARGO_PKG_VERSION"),
        depth = exp_eval::DEFAULT_MAX_CALL_DEPTH,
        log = expc::LOG_ENV,
    )
}
