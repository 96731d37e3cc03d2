use std::path::PathBuf;

const DATA_DIR_NAME: &str = ".pip";
const DATA_FILE_NAME: &str = "pip.txt";
const FALLBACK_DATA_FILE: &str = "data/pip.txt";

/// Picks the task file: an explicit path wins, then `~/.pip/pip.txt`, then
/// `data/pip.txt` relative to the working directory when there is no home.
pub fn resolve_data_file(explicit: Option<PathBuf>) -> PathBuf {
    match explicit {
        Some(path) => path,
        None => default_data_file(),
    }
}

pub fn default_data_file() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(DATA_DIR_NAME).join(DATA_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_FILE))
}
