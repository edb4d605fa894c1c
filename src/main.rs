use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use moni::config::{MoniPaths, Settings};
use moni::menu::MainMenu;
use moni::storage::Storage;

#[derive(Parser)]
#[command(
    name = "moni",
    version,
    about = "Interactive personal finance tracker for the terminal",
    long_about = "Moni keeps a running balance and a transaction log in plain \
                  JSON files and walks you through deposits, withdrawals and \
                  history from a small interactive menu."
)]
struct Cli {
    /// Directory holding balance.json, logs.json and config.json
    #[arg(long, env = "MONI_DATA_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => MoniPaths::with_data_dir(dir),
        None => MoniPaths::new()?,
    };

    let settings = Settings::load_or_create(&paths)?;
    if !paths.is_initialized() {
        settings.save(&paths)?;
    }

    let storage = Storage::new(&paths)?;
    let menu = MainMenu::new(&storage, &settings);
    menu.run()?;

    Ok(())
}
