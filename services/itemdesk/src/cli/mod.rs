//! CLI dispatch: `run`, `doctor`, `version`, `help`.

use anyhow::anyhow;
use serde_json::json;

use crate::config::AppConfig;

/// CLI dispatch outcome.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CliDispatch {
    /// Go on to start the server.
    Run,
    /// Command handled; main should exit.
    Exit,
}

/// Parsed command.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run,
    Help,
    Version,
    Doctor(DoctorFormat),
}

/// `doctor` output format.
#[derive(Debug, PartialEq, Eq)]
enum DoctorFormat {
    Text,
    Json,
}

/// Parse and execute the CLI.
pub(crate) fn dispatch(args: &[String]) -> anyhow::Result<CliDispatch> {
    match parse(args)? {
        Command::Run => Ok(CliDispatch::Run),
        Command::Help => {
            print_root_help();
            Ok(CliDispatch::Exit)
        }
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(CliDispatch::Exit)
        }
        Command::Doctor(format) => {
            run_doctor(format);
            Ok(CliDispatch::Exit)
        }
    }
}

fn parse(args: &[String]) -> anyhow::Result<Command> {
    let Some(cmd) = args.first().map(|v| v.trim()) else {
        return Ok(Command::Run);
    };

    match cmd {
        "" | "run" => Ok(Command::Run),
        "-h" | "--help" | "help" => Ok(Command::Help),
        "version" => Ok(Command::Version),
        "doctor" => Ok(Command::Doctor(parse_doctor_format(&args[1..])?)),
        other => Err(anyhow!(
            "unknown command: {other}; run `itemdesk --help` for usage"
        )),
    }
}

/// Parse doctor's `--format` flag.
fn parse_doctor_format(args: &[String]) -> anyhow::Result<DoctorFormat> {
    if args.is_empty() {
        return Ok(DoctorFormat::Text);
    }
    if args.len() == 2 && args[0] == "--format" {
        return match args[1].as_str() {
            "text" => Ok(DoctorFormat::Text),
            "json" => Ok(DoctorFormat::Json),
            other => Err(anyhow!("unsupported doctor format: {other}")),
        };
    }
    Err(anyhow!("usage: itemdesk doctor [--format text|json]"))
}

/// Print the resolved configuration; exit 1 when it does not load.
fn run_doctor(format: DoctorFormat) {
    let config = AppConfig::from_env();

    match (&format, &config) {
        (DoctorFormat::Text, Ok(cfg)) => {
            println!("config: ok");
            println!("listen: {}:{}", cfg.host, cfg.port);
            println!("jwt-secret: set");
            println!("token-ttl-sec: {}", cfg.token_ttl_sec);
            println!("seed-account: {}", cfg.seed_account.email);
        }
        (DoctorFormat::Text, Err(err)) => {
            println!("config: error");
            println!("reason: {err:#}");
        }
        (DoctorFormat::Json, _) => {
            let payload = match &config {
                Ok(cfg) => json!({
                    "ok": true,
                    "host": cfg.host,
                    "port": cfg.port,
                    "jwtSecretSet": true,
                    "tokenTtlSec": cfg.token_ttl_sec,
                    "seedAccount": cfg.seed_account.email,
                }),
                Err(err) => json!({
                    "ok": false,
                    "error": format!("{err:#}"),
                }),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "{}".to_string())
            );
        }
    }

    if config.is_err() {
        std::process::exit(1);
    }
}

/// Print root help.
fn print_root_help() {
    println!("itemdesk usage:");
    println!("  itemdesk run");
    println!("  itemdesk doctor [--format text|json]");
    println!("  itemdesk version");
    println!();
    println!("environment:");
    println!("  JWT_SECRET (required), PORT, HOST, TOKEN_TTL_SEC,");
    println!("  ITEMDESK_USER_EMAIL, ITEMDESK_USER_PASSWORD, ITEMDESK_USER_NAME,");
    println!("  RUST_LOG, ITEMDESK_LOG_DIR, ITEMDESK_FILE_LOG_LEVEL");
}
