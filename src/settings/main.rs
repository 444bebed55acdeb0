use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use focus_ocr::capture::XcapGrabber;
use focus_ocr::host::ConsoleHost;
use focus_ocr::logger::init_logger_exe;
use focus_ocr::plugin::{OcrPlugin, PluginConfig};
use focus_ocr::recognize::{EngineLayout, ScratchPaths};
use focus_ocr::settings::default_settings_path;

#[derive(Parser)]
#[command(version, about = "Choose the languages used for OCR", long_about = None)]
struct Cli {
    #[arg(
        long,
        help = "Directory containing tesseract/ (default: next to this executable)"
    )]
    engine_root: Option<PathBuf>,
    #[arg(long, help = "Settings file (default: per-user config directory)")]
    config: Option<PathBuf>,
    #[arg(long, help = "UI locale used to pick the default language, e.g. pt_BR")]
    locale: Option<String>,
    #[arg(long, help = "Print JSON instead of text", default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List installed languages, marking the selected ones
    List,
    /// Show the current settings
    Show,
    /// Select the first and, optionally, the second OCR language
    Set {
        language: String,
        language2: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logger_exe();

    let cli = Cli::parse();

    let config = PluginConfig {
        layout: EngineLayout::resolve(cli.engine_root.as_deref())?,
        settings_path: cli.config.unwrap_or_else(default_settings_path),
        scratch: ScratchPaths::default(),
    };
    let host = ConsoleHost::new(None, cli.locale);
    let mut plugin = OcrPlugin::new(host, XcapGrabber, config)?;

    let result = match cli.command {
        Command::List => list(&plugin, cli.json),
        Command::Show => show(&plugin, cli.json),
        Command::Set {
            language,
            language2,
        } => set(&mut plugin, &language, language2.as_deref().unwrap_or(&language)),
    };
    plugin.terminate();
    result
}

fn list(plugin: &OcrPlugin<ConsoleHost, XcapGrabber>, json: bool) -> Result<()> {
    let form = plugin.settings_form();
    if json {
        println!("{}", serde_json::to_string_pretty(form.choices())?);
        return Ok(());
    }

    if form.choices().is_empty() {
        println!("No OCR languages installed");
        return Ok(());
    }
    let (first, second) = form.selected();
    for (index, choice) in form.choices().iter().enumerate() {
        let marker = match (index == first, index == second) {
            (true, true) => "*+",
            (true, false) => "* ",
            (false, true) => " +",
            (false, false) => "  ",
        };
        println!("{} {:<8} {}", marker, choice.code, choice.label);
    }
    Ok(())
}

fn show(plugin: &OcrPlugin<ConsoleHost, XcapGrabber>, json: bool) -> Result<()> {
    let store = plugin.store();
    if json {
        println!("{}", serde_json::to_string_pretty(store.settings())?);
        return Ok(());
    }

    println!("settings file: {}", store.path().display());
    println!("language:      {}", store.settings().language);
    println!("language2:     {}", store.settings().language2);
    println!("engine flag:   -l {}", store.selection().lang_arg());
    Ok(())
}

fn set(
    plugin: &mut OcrPlugin<ConsoleHost, XcapGrabber>,
    language: &str,
    language2: &str,
) -> Result<()> {
    let mut form = plugin.settings_form();
    let position = |code: &str| {
        form.index_of(code)
            .ok_or_else(|| anyhow!("language '{}' is not installed", code))
    };
    let (first, second) = (position(language)?, position(language2)?);

    form.apply(first, second, plugin.store_mut())?;
    println!("OCR languages: {}", plugin.store().selection().lang_arg());
    Ok(())
}
