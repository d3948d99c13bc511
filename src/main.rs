//! arithlex - tokenizes arithmetic expressions line by line.
//!
//! Reads the file given as the only argument, or standard input when no
//! argument is given, and prints the tokens of every line.

use std::{
    borrow::Cow,
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use arithlex::{lexer::tokens::format_tokens, render_error, tokenize};
use clap::{error::ErrorKind, Parser};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const USAGE: &str = "Usage: arithlex [path to file]";

/// Tokenize arithmetic expressions, one per line
#[derive(Parser, Debug)]
#[command(name = "arithlex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize arithmetic expressions, one per line", long_about = None)]
struct Cli {
    /// File to read; standard input when omitted
    file: Option<PathBuf>,

    /// Enable verbose logging on stderr
    #[arg(short, long, env = "ARITHLEX_VERBOSE")]
    verbose: bool,

    /// Disable color in log output
    #[arg(long, env = "ARITHLEX_NO_COLOR")]
    no_color: bool,

    /// Stop at the first line that fails to lex and exit with status 1
    #[arg(long, env = "ARITHLEX_FAIL_FAST")]
    fail_fast: bool,
}

fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("Invalid args!");
            println!("{}", USAGE);
            return Ok(ExitCode::from(1));
        }
    };

    init_logging(cli.verbose, cli.no_color)?;

    let (reader, origin): (Box<dyn BufRead>, String) = match &cli.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            (Box::new(BufReader::new(file)), path.display().to_string())
        }
        None => (Box::new(io::stdin().lock()), String::from("stdin")),
    };

    info!(%origin, "reading expressions");

    run(reader, &origin, cli.fail_fast)
}

/// Lexes every line of `reader`, printing tokens or a diagnostic per line.
fn run(mut reader: Box<dyn BufRead>, origin: &str, fail_fast: bool) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;
    let mut buf = Vec::new();

    for index in 0.. {
        let Some(line) = next_line(&mut *reader, &mut buf)
            .with_context(|| format!("Failed to read line {} of {}", index + 1, origin))?
        else {
            break;
        };

        match tokenize(&line) {
            Ok(tokens) => {
                debug!(line = index + 1, tokens = tokens.len(), "tokenized");
                writeln!(out, "{}", format_tokens(&tokens))?;
            }
            Err(error) => {
                warn!(line = index + 1, %error, "failed to tokenize");
                failures += 1;
                write!(out, "{}", render_error(&error, &line, origin, index))?;

                if fail_fast {
                    out.flush()?;
                    return Ok(ExitCode::from(1));
                }
            }
        }
    }

    out.flush()?;
    info!(failures, "done");

    Ok(ExitCode::SUCCESS)
}

/// Reads one line without its `\n` or `\r\n` terminator.
///
/// Invalid UTF-8 becomes U+FFFD so the lexer reports it like any other
/// unexpected character instead of ending the run.
fn next_line(reader: &mut dyn BufRead, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();

    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    let line = String::from_utf8_lossy(buf);
    if let Cow::Owned(_) = line {
        warn!("replaced invalid UTF-8 in input");
    }

    Ok(Some(line.into_owned()))
}

/// Initialize the logging system. Logs go to stderr so stdout only carries
/// results.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
