// crates/verifier-harness-cli/src/main.rs
// ============================================================================
// Module: Verifier Harness CLI Entry Point
// Description: Argument conversion and entry point dispatch for the harness.
// Purpose: Parse harness values, print them, and invoke the entry point.
// Dependencies: clap, tracing, verifier-harness-config, verifier-harness-core.
// ============================================================================

//! ## Overview
//! The verifier harness CLI converts its positional arguments to signed
//! integers of any magnitude (decimal by default, two's-complement with
//! `--binary`), prints them as `ARGS: [..]`, and invokes the configured entry
//! point with the placeholder body and no-op verifier hooks. All user-facing
//! strings are routed through the i18n catalog; diagnostics go to `tracing`
//! on stderr, uncolored unless stderr is a terminal.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::IsTerminal;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Parser;
use clap::ValueEnum;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use verifier_harness_cli::i18n::Locale;
use verifier_harness_cli::i18n::set_locale;
use verifier_harness_cli::t;
use verifier_harness_config::ConfigSource;
use verifier_harness_config::HarnessConfig;
use verifier_harness_core::ASSERT_HOOK;
use verifier_harness_core::ASSUME_HOOK;
use verifier_harness_core::ArgumentMode;
use verifier_harness_core::NoopVerifier;
use verifier_harness_core::PlaceholderBody;
use verifier_harness_core::format_arguments;
use verifier_harness_core::parse_arguments;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "VERIFIER_HARNESS_LANG";
/// Environment variable for the diagnostics filter.
const LOG_ENV: &str = "VERIFIER_HARNESS_LOG";
/// Diagnostics filter used when [`LOG_ENV`] is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "verifier-harness",
    about = "Feed decimal or two's-complement values into a verification entry point.",
    disable_version_flag = true
)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue)]
    show_version: bool,
    /// Preferred output language (overrides `VERIFIER_HARNESS_LANG`).
    #[arg(long, value_enum, value_name = "LANG")]
    lang: Option<LangArg>,
    /// Interpret every value as a two's-complement bit string.
    #[arg(short = 'b', long = "binary", action = ArgAction::SetTrue)]
    binary: bool,
    /// Path to the harness config (overrides `VERIFIER_HARNESS_CONFIG`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Values passed positionally to the entry point.
    #[arg(
        value_name = "INTEGERS",
        required_unless_present = "show_version",
        num_args = 1..,
        allow_negative_numbers = true
    )]
    integers: Vec<String>,
}

/// Supported CLI language arguments.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum LangArg {
    /// English.
    En,
    /// Catalan.
    Ca,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Ca => Self::Ca,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the harness pipeline.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    let env_log = std::env::var(LOG_ENV).ok();
    init_tracing(env_log.as_deref())?;

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = HarnessConfig::load(cli.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    match &config.source {
        ConfigSource::Defaults => tracing::debug!("using built-in configuration defaults"),
        ConfigSource::File(path) => {
            tracing::debug!(path = %path.display(), "loaded configuration file");
        }
    }

    let mode = resolve_mode(cli.binary, config.arguments.mode);
    let values = parse_arguments(&cli.integers, mode, config.arguments.max_width)
        .map_err(|err| CliError::new(t!("args.parse_failed", error = err)))?;
    tracing::debug!(mode = mode.as_str(), count = values.len(), "parsed harness arguments");
    write_stdout_line(&t!("main.args", args = format_arguments(&values)))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;

    let entry = config
        .entry_point()
        .map_err(|err| CliError::new(t!("entry.config_invalid", error = err)))?;
    let invocation = entry
        .invoke(&values, &PlaceholderBody, &NoopVerifier)
        .map_err(|err| CliError::new(t!("entry.invoke_failed", error = err)))?;
    tracing::debug!(
        invocation = %invocation,
        assert_hook = ASSERT_HOOK,
        assume_hook = ASSUME_HOOK,
        "invoked entry point"
    );
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Resolution Helpers
// ============================================================================

/// Resolves the CLI locale from flags or environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

/// Resolves the argument mode; `--binary` overrides the configured mode.
const fn resolve_mode(binary_flag: bool, configured: ArgumentMode) -> ArgumentMode {
    if binary_flag { ArgumentMode::Binary } else { configured }
}

/// Builds the diagnostics filter from the environment or the default.
fn build_log_filter(env_filter: Option<&str>) -> CliResult<EnvFilter> {
    let directives = env_filter.unwrap_or(DEFAULT_LOG_FILTER);
    EnvFilter::try_new(directives)
        .map_err(|err| CliError::new(t!("log.filter_invalid", env = LOG_ENV, error = err)))
}

/// Installs the stderr diagnostics subscriber.
fn init_tracing(env_filter: Option<&str>) -> CliResult<()> {
    let filter = build_log_filter(env_filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|err| CliError::new(t!("log.init_failed", error = err)))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
