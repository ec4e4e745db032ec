use clap::Parser;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use stickynote::core::config::{self, NoteConfig};
use stickynote::error::AppError;
use stickynote::gui;

#[derive(Parser)]
#[command(name = "stickynote", about = "Always-on-top sticky note")]
struct Args {
    /// File the note is saved to (default: todo_sauvegarde.txt in the working directory)
    #[arg(long)]
    save_file: Option<PathBuf>,

    /// Config file to use instead of ~/.stickynote/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Initialize file logger - writes to stickynote.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("stickynote.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Sticky note starting up");

    let file_config = match args.config.as_deref() {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config().unwrap_or_else(|e| {
            warn!("Ignoring config file: {}", e);
            NoteConfig::default()
        }),
    };
    let resolved = config::resolve(&file_config, args.save_file.as_deref());

    gui::run(resolved).inspect_err(|e| log::error!("Exiting with error: {}", e))
}
