use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: write a default configuration file.
/// An existing file is never overwritten.
pub fn handle(path: &Path) -> AppResult<()> {
    if Config::init_at(path)? {
        success(format!("Config file created: {}", path.display()));
        info("Edit calendar.events_file and board.board_file before running `brief`.");
    } else {
        info(format!("Config file already exists: {}", path.display()));
    }
    Ok(())
}
