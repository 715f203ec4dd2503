use anyhow::{Context, Result};
use clap::Parser;
use keycalc::{Engine, EngineBuilder, Readout, Session};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Calculator driven one key press at a time.
///
/// Keys: digits 0-9, `.`, `+ - * /` (or `− × ÷`), `=`, `C`, `±` (or `+/-`), `%`.
/// Without KEYS, each stdin line is read as a key sequence until EOF or `quit`.
#[derive(Debug, Parser)]
#[command(name = "keycalc", version, about)]
struct Cli {
    /// Show `-0` after toggling the sign of zero
    #[arg(long, env = "KEYCALC_KEEP_NEGATIVE_ZERO")]
    keep_negative_zero: bool,

    /// Print the readout and session as JSON
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "KEYCALC_LOG", default_value = "warn")]
    log_level: String,

    /// Keys to apply before printing the readout and exiting
    #[arg(allow_hyphen_values = true)]
    keys: Vec<String>,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    readout: Readout,
    session: &'a Session,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    keycalc::logging::init(&cli.log_level);

    let mut engine = EngineBuilder::new()
        .keep_negative_zero(cli.keep_negative_zero)
        .build()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.keys.is_empty() {
        engine.press_str(&cli.keys.join(" "))?;
        return print_readout(&mut out, &engine, cli.json);
    }

    info!("reading keys from stdin");
    let stderr = io::stderr();
    run_lines(
        io::stdin().lock(),
        &mut out,
        &mut stderr.lock(),
        &mut engine,
        cli.json,
    )
}

/// Apply each input line as a key sequence until EOF or `quit`/`exit`.
/// A line with an unknown key is reported on `err` and leaves the session as is.
fn run_lines(
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
    engine: &mut Engine,
    json: bool,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if matches!(line, "quit" | "exit") {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match engine.press_str(line) {
            Ok(_) => print_readout(&mut *out, engine, json)?,
            Err(e) => writeln!(err, "Error: {e}")?,
        }
    }

    Ok(())
}

fn print_readout(out: &mut impl Write, engine: &Engine, json: bool) -> Result<()> {
    let readout = engine.readout();
    if json {
        let snapshot = Snapshot {
            readout,
            session: engine.session(),
        };
        writeln!(out, "{}", serde_json::to_string(&snapshot)?)?;
    } else {
        writeln!(out, "{}", readout.pending_label)?;
        writeln!(out, "{}", readout.display_text)?;
    }
    out.flush()?;
    Ok(())
}
