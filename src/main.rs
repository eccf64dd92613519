//! FolioTerm - a portfolio terminal
//!
//! Desktop entry point: parses command line arguments, installs the
//! tracing subscriber, loads configuration and profile, and launches the
//! GUI shell.

mod app;

use std::path::PathBuf;
use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use folioterm::config::theme::TerminalTheme;
use folioterm::{handle_startup_error, init_with_paths};

use app::FolioTermApp;

/// Parsed command line arguments
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Profile file path
    profile_path: Option<PathBuf>,
    /// Enable debug logging
    debug: bool,
    /// Window width override
    width: Option<f32>,
    /// Window height override
    height: Option<f32>,
    /// Theme override
    theme: Option<String>,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    i += 1;
                    let value = args.get(i).ok_or("Missing config file path")?;
                    app_args.config_path = Some(PathBuf::from(value));
                }
                "--profile" | "-p" => {
                    i += 1;
                    let value = args.get(i).ok_or("Missing profile file path")?;
                    app_args.profile_path = Some(PathBuf::from(value));
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--width" | "-w" => {
                    i += 1;
                    app_args.width = args.get(i).and_then(|v| v.parse().ok());
                }
                "--height" => {
                    i += 1;
                    app_args.height = args.get(i).and_then(|v| v.parse().ok());
                }
                "--theme" | "-t" => {
                    i += 1;
                    let value = args.get(i).ok_or("Missing theme name")?;
                    app_args.theme = Some(value.clone());
                }
                "--help" | "-h" => {
                    print_usage();
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("{} {}", folioterm::NAME, folioterm::VERSION);
                    process::exit(0);
                }
                other => {
                    return Err(format!("Unknown argument: {other}"));
                }
            }
            i += 1;
        }

        Ok(app_args)
    }
}

fn print_usage() {
    println!(
        "{} {} - {}\n\n\
         USAGE:\n    folioterm [OPTIONS]\n\n\
         OPTIONS:\n\
         \x20   -c, --config <FILE>    Configuration file (TOML or JSON)\n\
         \x20   -p, --profile <FILE>   Profile file (TOML or JSON)\n\
         \x20   -t, --theme <NAME>     Terminal theme (classic-green, amber, paper)\n\
         \x20   -w, --width <PX>       Window width\n\
         \x20       --height <PX>      Window height\n\
         \x20   -d, --debug            Enable debug logging\n\
         \x20   -h, --help             Print help\n\
         \x20   -V, --version          Print version",
        folioterm::NAME,
        folioterm::VERSION,
        folioterm::DESCRIPTION
    );
}

fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "folioterm=debug"
    } else {
        "folioterm=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let args = match AppArgs::parse() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}\n");
            print_usage();
            process::exit(2);
        }
    };

    init_tracing(args.debug);

    let mut startup = match init_with_paths(args.config_path.as_deref(), args.profile_path.as_deref())
    {
        Ok(startup) => startup,
        Err(e) => {
            error!("Startup failed: {}", e);
            eprintln!("{}", handle_startup_error(&e));
            process::exit(1);
        }
    };

    // Command line overrides beat the config file.
    if let Some(width) = args.width {
        startup.config.ui.window_width = width.max(400.0);
    }
    if let Some(height) = args.height {
        startup.config.ui.window_height = height.max(300.0);
    }
    if let Some(theme) = args.theme {
        if TerminalTheme::by_name(&theme).is_some() {
            startup.config.ui.theme_name = theme;
        } else {
            error!("Unknown theme '{}', keeping '{}'", theme, startup.config.ui.theme_name);
        }
    }

    info!(
        "Launching {} v{} ({}x{})",
        folioterm::NAME,
        folioterm::VERSION,
        startup.config.ui.window_width,
        startup.config.ui.window_height
    );

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([
                startup.config.ui.window_width,
                startup.config.ui.window_height,
            ])
            .with_min_inner_size([400.0, 300.0])
            .with_title("FolioTerm"),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "FolioTerm",
        native_options,
        Box::new(move |cc| Box::new(FolioTermApp::new(cc, startup))),
    ) {
        error!("Application error: {}", e);
        process::exit(1);
    }
}
