//! Localis - desktop client for the Localis translation backend.
//!
//! Upload a JSON file or a Word document, pick target languages and get the
//! translated archive saved to the downloads folder.

mod app;
mod config;
mod error;
mod languages;
mod upload;
mod utils;

use app::{LocalisApp, Route};
use config::{AppConfig, APP_NAME};
use std::path::PathBuf;
use std::sync::Arc;
use upload::{DirectorySink, HttpBackend, TranslationBackend};

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    start: Route,
}

fn main() -> eframe::Result<()> {
    init_logging();

    let args = parse_args();
    let config = AppConfig::load_or_default(args.config.as_deref());

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start async runtime: {}", e);
            std::process::exit(1);
        }
    };

    let backend = match HttpBackend::new(
        &config.backend.base_url,
        config.backend.request_timeout(),
        config.backend.progress_timeout(),
    ) {
        Ok(backend) => Arc::new(backend) as Arc<dyn TranslationBackend>,
        Err(e) => {
            log::error!("Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let downloads = config.downloads.resolve_directory();
    let app = LocalisApp::new(
        runtime,
        backend,
        DirectorySink::new(downloads),
        config.backend.base_url.clone(),
        config.progress.poll_interval(),
        args.start,
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native("Localis", options, Box::new(move |_cc| Box::new(app)))
}

fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", format!("info,{}=debug", APP_NAME));
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();
}

fn parse_args() -> Args {
    let argv: Vec<String> = std::env::args().collect();
    let mut args = Args::default();

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                println!("{} {}", APP_NAME, env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-c" | "--config" => {
                if i + 1 < argv.len() {
                    args.config = Some(PathBuf::from(&argv[i + 1]));
                    i += 1;
                } else {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
            }
            arg if arg.starts_with('-') => {
                eprintln!("Unknown option: {}", arg);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
            path => match Route::from_path(path) {
                Some(route) => args.start = route,
                None => {
                    eprintln!("Unknown screen: {}", path);
                    std::process::exit(1);
                }
            },
        }
        i += 1;
    }

    args
}

fn print_help() {
    println!(
        "{name} {version}

USAGE:
    {name} [OPTIONS] [SCREEN]

SCREEN:
    /                      Landing page (default)
    /translate-json        Translate JSON files
    /translate-document    Translate a document

OPTIONS:
    -c, --config <PATH>    Use this config file
    -h, --help             Print help
    -v, --version          Print version

ENVIRONMENT:
    LOCALIS_BACKEND_URL    Override the backend address
    RUST_LOG               Log filter (default: info,{name}=debug)",
        name = APP_NAME,
        version = env!("CARGO_PKG_VERSION"),
    );
}
