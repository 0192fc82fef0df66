use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use sitenav::config::{Config, ConfigStore};
use sitenav::logging::init_tracing;
use sitenav::menu::GroupId;
use sitenav::shutdown::ShutdownHandle;
use sitenav::ui::layout::Presentation;
use sitenav::ui::menu_view::RenderContext;
use sitenav::ui::navbar::{compose, NavbarView};
use sitenav::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "sitenav", version, about = "Responsive site navigation bar")]
struct Cli {
    /// Navbar config file (TOML, or JSON by extension). Defaults to the
    /// user config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Append logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive navbar in the terminal.
    Run,
    /// Print the composed view tree as JSON.
    Render {
        /// Viewport width in columns; selects desktop or mobile.
        #[arg(long, default_value_t = 120)]
        width: u16,
        /// Open the mobile panel before rendering.
        #[arg(long)]
        open: bool,
        /// Toggle a desktop group by menu index (repeatable).
        #[arg(long = "toggle-desktop", value_name = "INDEX")]
        toggle_desktop: Vec<usize>,
        /// Toggle a mobile group by menu index (repeatable, needs --open).
        #[arg(long = "toggle-mobile", value_name = "INDEX")]
        toggle_mobile: Vec<usize>,
    },
    /// Validate the config and list menu diagnostics.
    Check,
}

#[derive(Serialize)]
struct RenderOutput {
    presentation: &'static str,
    view: NavbarView,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    // The interactive UI owns the terminal, so it only logs to a file.
    let interactive = matches!(cli.command, Command::Run);
    if !interactive || cli.log_file.is_some() {
        init_tracing(cli.log_file.as_deref()).context("failed to initialise logging")?;
    }

    let (config, path) = load_config(cli.config)?;

    match cli.command {
        Command::Run => {
            let shutdown = ShutdownHandle::new();
            shutdown
                .install_signal_handlers()
                .context("failed to install signal handlers")?;
            runtime::run(ConfigStore::new(config, path), shutdown)
                .context("terminal UI failed")?;
        }
        Command::Render {
            width,
            open,
            toggle_desktop,
            toggle_mobile,
        } => {
            let presentation = Presentation::for_width(width, config.display.breakpoint);
            let mut navbar = compose(config.display.variant, config.navbar);
            for index in toggle_desktop {
                navbar.toggle(RenderContext::Desktop, GroupId(index));
            }
            if open {
                navbar.open_overlay();
            }
            for index in toggle_mobile {
                navbar.toggle(RenderContext::Mobile, GroupId(index));
            }
            let output = RenderOutput {
                presentation: match presentation {
                    Presentation::Desktop => "desktop",
                    Presentation::Mobile => "mobile",
                },
                view: navbar.view(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Check => {
            let diagnostics = config.navbar.diagnostics();
            println!(
                "{}: {} menu entries, variant {}, breakpoint {} columns",
                path.as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "built-in defaults".to_string()),
                config.navbar.menu_list.len(),
                config.display.variant.name(),
                config.display.breakpoint,
            );
            for diagnostic in &diagnostics {
                println!("  warning: {diagnostic}");
            }
            if diagnostics.is_empty() {
                println!("  no problems found");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Loads the explicit config file, or the default location if present.
fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let config = Config::load_from(&path)?;
        return Ok((config, Some(path)));
    }

    let default_path = Config::config_path();
    let config = Config::load()?;
    let path = default_path.exists().then_some(default_path);
    Ok((config, path))
}
