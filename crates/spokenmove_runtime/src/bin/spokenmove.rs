//! spokenmove CLI entry point.

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use spokenmove_runtime::{Repl, RuntimeConfig, Session, run_batch};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    alias_files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    no_speech_aliases: bool,
    // Debug flags
    trace: bool,
    trace_json: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--no-speech-aliases" => config.no_speech_aliases = true,
            "--trace" => config.trace = true,
            "--trace-json" => {
                config.trace = true;
                config.trace_json = true;
            }
            "-a" | "--aliases" => {
                i += 1;
                if i >= args.len() {
                    return Err("--aliases requires a file".into());
                }
                config.alias_files.push(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') && arg != "-" => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

/// Returns `Ok(false)` if any batch line failed to translate.
fn run(args: Vec<String>) -> Result<bool, Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(true);
    }

    if cli.show_version {
        println!("spokenmove {}", env!("CARGO_PKG_VERSION"));
        return Ok(true);
    }

    let mut config = RuntimeConfig::default()
        .with_speech_aliases(!cli.no_speech_aliases)
        .with_trace(cli.trace)
        .with_trace_json(cli.trace_json);
    for path in cli.alias_files {
        config = config.with_alias_file(path);
    }

    // Input files imply batch mode
    if cli.batch_mode || !cli.files.is_empty() {
        return run_batch_mode(&config, &cli.files);
    }

    Repl::from_config(&config)?.run()?;
    Ok(true)
}

fn run_batch_mode(
    config: &RuntimeConfig,
    files: &[PathBuf],
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut session = Session::from_config(config)?;
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let mut success = true;

    if files.is_empty() {
        let report = run_batch(&mut session, io::stdin().lock(), &mut stdout, &mut stderr)?;
        return Ok(report.is_success());
    }

    for path in files {
        let report = if path.as_os_str() == "-" {
            run_batch(&mut session, io::stdin().lock(), &mut stdout, &mut stderr)?
        } else {
            let file = File::open(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            run_batch(&mut session, BufReader::new(file), &mut stdout, &mut stderr)?
        };
        success &= report.is_success();
    }

    Ok(success)
}

fn print_help() {
    println!(
        "\x1b[1mspokenmove\x1b[0m - Translate spoken chess moves into SAN

\x1b[1mUSAGE:\x1b[0m
    spokenmove [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Files with one spoken move per line (implies --batch)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help               Print help information
    -V, --version            Print version information
    -b, --batch              Translate FILES (or stdin) line by line and exit
    -a, --aliases FILE       Merge a JSON alias file (repeatable)
    --no-speech-aliases      Accept canonical words only

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace                  Print rule-by-rule traces to stderr
    --trace-json             Print traces as JSON lines

\x1b[1mEXAMPLES:\x1b[0m
    spokenmove                          Start interactive REPL
    echo 'night to f3' | spokenmove -b  Prints Nf3
    spokenmove game.txt                 Translate every line of game.txt
    spokenmove -a mine.json             Add your own misrecognitions

\x1b[1mREPL COMMANDS:\x1b[0m
    :help                Show all commands
    :describe <san>      Read a SAN move back as words
    :trace on|off        Toggle tracing
    :load <file>         Merge a JSON alias file
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input"
    );
}
