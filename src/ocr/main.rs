use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use focus_ocr::capture::XcapGrabber;
use focus_ocr::common::Region;
use focus_ocr::host::ConsoleHost;
use focus_ocr::logger::init_logger_exe;
use focus_ocr::plugin::{OcrPlugin, PluginConfig};
use focus_ocr::recognize::{EngineLayout, ScratchPaths};
use focus_ocr::settings::default_settings_path;

#[derive(Parser)]
#[command(version, about = "Read the text of the focused window with Tesseract", long_about = None)]
struct Cli {
    #[arg(
        long,
        help = "Screen region to recognize as left,top,width,height (default: topmost window)"
    )]
    region: Option<Region>,
    #[arg(
        long,
        help = "Directory containing tesseract/ (default: next to this executable)"
    )]
    engine_root: Option<PathBuf>,
    #[arg(long, help = "Settings file (default: per-user config directory)")]
    config: Option<PathBuf>,
    #[arg(long, help = "UI locale used to pick the default language, e.g. pt_BR")]
    locale: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logger_exe();

    let cli = Cli::parse();

    let layout = match EngineLayout::resolve(cli.engine_root.as_deref()) {
        Ok(layout) => layout,
        Err(e) => {
            log::error!("Cannot locate the OCR engine: {:#}", e);
            return ExitCode::FAILURE;
        }
    };
    log::debug!("Using OCR engine {}", layout.exe.display());

    let config = PluginConfig {
        layout,
        settings_path: cli.config.unwrap_or_else(default_settings_path),
        scratch: ScratchPaths::default(),
    };
    let host = ConsoleHost::new(cli.region, cli.locale);

    let mut plugin = match OcrPlugin::new(host, XcapGrabber, config) {
        Ok(plugin) => plugin,
        Err(e) => {
            log::error!("Failed to start: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = plugin.recognize_focused().await;
    plugin.terminate();

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
