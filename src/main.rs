//! listjoin - Convert between newline-separated lists and delimiter-joined strings.
//!
//! Turns a list with one item per line into a single string joined by a
//! comma, semicolon, pipe, or space, and splits such a string back into a
//! list. Items are trimmed and blank entries dropped in both directions.
//!
//! QUICK START:
//!   listjoin join < items.txt                       # a\nb\nc  ->  a,b,c
//!   printf 'a\nb' | listjoin join -d pipe --copy    # join and copy to clipboard
//!   listjoin split "a, b ,,c"                       # a, b ,,c ->  a\nb\nc
//!   listjoin interactive                            # stateful session with :commands
//!   listjoin lang uk                                # save Ukrainian as UI language
//!   listjoin config --set-delimiter pipe            # change the saved default

mod application;
mod cli;
mod domain;
mod infrastructure;

use std::io::Read;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{
    format_report_json, format_report_table, persist_language, resolve_language, Catalog,
    ConversionReport, ConverterState, OutputFormat, Session, TextProvider,
};
use cli::{parse_delimiter, parse_direction, Cli, Commands, ConvertArgs};
use domain::{AppConfig, AppError, Direction, Language};
use infrastructure::{
    config_file_path, ensure_config_exists, load_config, load_config_or_default, save_config,
    Clipboard, FilePreferenceStore, SystemClipboard,
};

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(cli: Cli) -> domain::Result<()> {
    let format = cli.output_format().map_err(AppError::config)?;
    let explicit_lang = cli.language().map_err(AppError::config)?;

    // `config` and `paths` must still work when the config file is broken.
    let (config, config_error) = match cli.command {
        Commands::Config { .. } | Commands::Paths => load_config_or_default(),
        _ => (load_config()?, None),
    };
    if let Some(e) = &config_error {
        eprintln!("{} {e} (showing defaults)", "Warning:".yellow().bold());
    }

    let preferences = FilePreferenceStore::new(config.preferences_path());
    let language = resolve_language(explicit_lang, &preferences);
    let catalog = Catalog::new(language);
    tracing::debug!(language = %language, "UI language resolved");

    match cli.command {
        Commands::Join(args) => {
            cmd_convert(Direction::ListToJoined, &args, &config, format, &catalog)?;
        }
        Commands::Split(args) => {
            cmd_convert(Direction::JoinedToList, &args, &config, format, &catalog)?;
        }
        Commands::Interactive { delimiter, mode } => {
            cmd_interactive(
                delimiter.as_deref(),
                mode.as_deref(),
                &config,
                language,
                &preferences,
            )?;
        }
        Commands::Lang { code } => {
            cmd_lang(code.as_deref(), language, &preferences)?;
        }
        Commands::Config {
            init,
            set_delimiter,
            set_mode,
        } => {
            if config_error.is_some() && (set_delimiter.is_some() || set_mode.is_some()) {
                return Err(AppError::config(
                    "refusing to overwrite an unreadable config file; fix or remove it first",
                ));
            }
            cmd_config(init, set_delimiter.as_deref(), set_mode.as_deref(), config)?;
        }
        Commands::Paths => {
            cmd_paths(&config, &preferences);
        }
    }

    Ok(())
}

/// Read conversion input from the argument, a file, or stdin.
fn read_input(args: &ConvertArgs) -> domain::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.input {
        return std::fs::read_to_string(path)
            .map_err(|e| AppError::io(format!("Failed to read {}", path.display()), e));
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| AppError::io("Failed to read stdin", e))?;
    Ok(buf)
}

/// Join or split command.
fn cmd_convert(
    direction: Direction,
    args: &ConvertArgs,
    config: &AppConfig,
    format: OutputFormat,
    catalog: &Catalog,
) -> domain::Result<()> {
    let delimiter = parse_delimiter(args.delimiter.as_deref(), config.defaults.delimiter)
        .map_err(AppError::config)?;
    let raw = read_input(args)?;

    let report = ConversionReport::build(direction, &raw, delimiter);
    tracing::info!(
        %direction,
        %delimiter,
        items = report.items.len(),
        "Converted"
    );

    let rendered = match format {
        OutputFormat::Text => report.output.clone(),
        OutputFormat::Json => format_report_json(&report).map_err(AppError::json)?,
        OutputFormat::Table => format_report_table(&report, catalog),
    };
    println!("{rendered}");

    if args.copy && !report.output.is_empty() {
        // Confirmation goes to stderr so piped stdout stays clean.
        if let Err(e) = SystemClipboard::new().write_text(&report.output) {
            eprintln!("{}", catalog.text("copy_failed").red().bold());
            return Err(e);
        }
        let field = catalog.text("fields.output");
        eprintln!(
            "{} {}",
            "✓".green().bold(),
            catalog.text_with("copied", &[("field", field.as_str())])
        );
    }

    Ok(())
}

/// Interactive session command.
fn cmd_interactive(
    delimiter: Option<&str>,
    mode: Option<&str>,
    config: &AppConfig,
    language: Language,
    preferences: &FilePreferenceStore,
) -> domain::Result<()> {
    let delimiter =
        parse_delimiter(delimiter, config.defaults.delimiter).map_err(AppError::config)?;
    let direction =
        parse_direction(mode, config.defaults.direction).map_err(AppError::config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::io("Failed to start async runtime", e))?;

    let clipboard = SystemClipboard::new();
    let state = ConverterState::new(delimiter, direction, language);
    let (session, expiries) = Session::new(state, &clipboard, preferences, config.notice_delay());

    let result = runtime.block_on(session.run(expiries));

    // Stdin is read on a blocking thread that may still be parked on a read.
    runtime.shutdown_background();

    result.map(|_| ())
}

/// Show or save language command.
fn cmd_lang(
    code: Option<&str>,
    current: Language,
    preferences: &FilePreferenceStore,
) -> domain::Result<()> {
    match code {
        Some(code) => {
            let language: Language = code.parse().map_err(AppError::config)?;
            persist_language(preferences, language)?;
            let catalog = Catalog::new(language);
            println!(
                "{} {}",
                "✓".green().bold(),
                catalog.text_with("language_set", &[("lang", language.label())])
            );
        }
        None => {
            println!("{} ({})", current.label().bold(), current.code());
        }
    }

    Ok(())
}

/// Show configuration command, saving any changed defaults first.
fn cmd_config(
    init: bool,
    set_delimiter: Option<&str>,
    set_mode: Option<&str>,
    mut config: AppConfig,
) -> domain::Result<()> {
    let path = config_file_path();

    if init {
        if ensure_config_exists()? {
            println!("{} Created {}", "✓".green().bold(), path.display());
        } else {
            println!("Config already exists: {}", path.display());
        }
    }

    if set_delimiter.is_some() || set_mode.is_some() {
        config.defaults.delimiter =
            parse_delimiter(set_delimiter, config.defaults.delimiter).map_err(AppError::config)?;
        config.defaults.direction =
            parse_direction(set_mode, config.defaults.direction).map_err(AppError::config)?;

        let saved = save_config(&config)?;
        println!("{} Saved {}", "✓".green().bold(), saved.display());
    }

    let content = toml::to_string_pretty(&config)
        .map_err(|e| AppError::config(format!("Failed to serialize config: {e}")))?;

    println!("{}", format!("# {}", path.display()).dimmed());
    println!("{content}");

    Ok(())
}

/// Show paths command.
fn cmd_paths(config: &AppConfig, preferences: &FilePreferenceStore) {
    println!("{}", "📂 listjoin Paths".bold());
    println!();
    println!("  [{}] {}", "data".green(), config.data_dir().display());
    println!("  [{}] {}", "config".blue(), config_file_path().display());
    println!(
        "  [{}] {}",
        "preferences".yellow(),
        preferences.path().display()
    );
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
