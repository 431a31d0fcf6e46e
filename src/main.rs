use std::fs;
use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use div_guard::cli::{Cli, ColorChoice};
use div_guard::config::{Config, ConfigLoader, FileConfigLoader, validate_config_semantics};
use div_guard::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
    format_environment_error,
};
use div_guard::report::Report;
use div_guard::{EXIT_CONFIG_ERROR, EXIT_FAILURE, runner};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    std::process::exit(run_check(&cli));
}

/// Diagnostics go to stderr so the report on stdout stays clean.
/// `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_check(cli: &Cli) -> i32 {
    match run_check_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) if e.is_environment() => match report_environment_error(cli, &e) {
            Ok(()) => EXIT_FAILURE,
            Err(write_err) => {
                eprintln!("Error: {write_err}");
                EXIT_CONFIG_ERROR
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// A missing or empty directory is the report itself, so it goes to the same
/// sink and format as a normal one.
fn report_environment_error(cli: &Cli, err: &div_guard::DivGuardError) -> div_guard::Result<()> {
    let content = format_environment_error(err, cli.format)?;
    write_output(cli.output.as_deref(), &content, cli.quiet)
}

fn run_check_impl(cli: &Cli) -> div_guard::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, cli);
    validate_config_semantics(&config)?;

    // 3. Scan and validate
    let report = runner::run(&config)?;

    // 4. Format output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(cli.format, &report, color_mode)?;

    // 5. Write output
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    // 6. Determine exit code
    Ok(report.summary.exit_code(cli.strict))
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> div_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let loaded = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    match &loaded.source {
        Some(source) => info!(path = %source.display(), "loaded configuration"),
        None => info!("no configuration file found, using defaults"),
    }
    Ok(loaded.config)
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(dir) = &cli.dir {
        config.scan.dir.clone_from(dir);
    }

    if let Some(ext) = &cli.ext {
        config.scan.extension.clone_from(ext);
        config.scan.normalize_extension();
    }

    config.scan.exclude.extend(cli.exclude.iter().cloned());

    if let Some(warn_after) = cli.warn_after {
        config.boxes.warn_after = warn_after;
    }

    if let Some(unclosed_after) = cli.unclosed_after {
        config.boxes.unclosed_after = unclosed_after;
    }
}

fn format_output(
    format: OutputFormat,
    report: &Report,
    color_mode: ColorMode,
) -> div_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> div_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
