use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use xiwa_logo::config::{self, LogoConfig};
use xiwa_logo::render::{self, RenderReport};
use xiwa_logo::output;

/// Flags shared by `render` and `check`.
#[derive(clap::Args, Clone, Default)]
struct RenderArgs {
    /// Config file layered over the stock defaults
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Where to write the PNG (default /boot/xiwa.png)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Label to draw
    #[arg(long)]
    text: Option<String>,

    /// Font file name or path
    #[arg(long)]
    font: Option<String>,

    /// Font size in pixels
    #[arg(long)]
    font_size: Option<f32>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

/// `0.1.0` on a release tag, `0.1.0+dev.<hash>` otherwise.
fn version_string() -> &'static str {
    match env!("XIWA_DEV_BUILD") {
        "" => env!("CARGO_PKG_VERSION"),
        // Leaked once at startup
        hash => Box::leak(format!("{}+dev.{hash}", env!("CARGO_PKG_VERSION")).into_boxed_str()),
    }
}

#[derive(Parser)]
#[command(name = "xiwa-logo")]
#[command(about = "Boot logo generator for XiwA-OS")]
#[command(long_about = "\
Boot logo generator for XiwA-OS

Draws an 800x400 black canvas with a cyan border and the label \"XiwA-OS\"
in white over a cyan halo, centered, and writes it to /boot/xiwa.png.
Missing directories are created.

The label uses arial.ttf when it can be found (the current directory,
[font] search_dirs, then the system font directories) and a built-in
bitmap font otherwise.

Running without a subcommand is the same as 'xiwa-logo render'.
Run 'xiwa-logo gen-config' to generate a documented logo.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the logo and write the PNG
    Render(RenderArgs),
    /// Resolve font and placement without writing anything
    Check(RenderArgs),
    /// Print a stock logo.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command.unwrap_or(Command::Render(RenderArgs::default()))) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Render(args) => {
            let config = resolve(&args)?;
            let report = render::render(&config)?;
            emit(&report, args.json)?;
        }
        Command::Check(args) => {
            let config = resolve(&args)?;
            let report = render::check(&config)?;
            emit(&report, args.json)?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }
    Ok(())
}

/// Load the config file (if any), then apply CLI overrides on top.
fn resolve(args: &RenderArgs) -> Result<LogoConfig, Box<dyn std::error::Error>> {
    let mut config = config::load_config(args.config.as_deref()).map_err(|e| match &args.config {
        Some(path) => format!("failed to load config {}: {e}", path.display()),
        None => e.to_string(),
    })?;

    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(text) = &args.text {
        config.text.label = text.clone();
    }
    if let Some(font) = &args.font {
        config.font.name = font.clone();
    }
    if let Some(size) = args.font_size {
        config.font.size = size;
    }

    config.validate()?;
    tracing::debug!(?config, "resolved config");
    Ok(config)
}

fn emit(report: &RenderReport, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        output::print_render_report(report);
    }
    Ok(())
}

/// Log to stderr, filtered by RUST_LOG or else by `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
