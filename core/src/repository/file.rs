use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::{PipError, Result};
use crate::model::task::Task;
use crate::repository::traits::{LoadedTasks, SkippedLine, TaskStore};

/// Line-oriented task file, one record per line.
#[derive(Clone, Debug)]
pub struct FileTaskStore {
    file_path: PathBuf,
}

impl FileTaskStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.file_path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).map_err(PipError::io("Failed to create data directory"))?;
            }
        }
        Ok(())
    }
}

impl TaskStore for FileTaskStore {
    fn load(&self) -> Result<LoadedTasks> {
        self.ensure_parent_dir()?;

        if !self.file_path.exists() {
            File::create(&self.file_path).map_err(PipError::io("Failed to create save file"))?;
            info!("created empty save file at {}", self.file_path.display());
            return Ok(LoadedTasks::default());
        }

        let file = File::open(&self.file_path).map_err(PipError::io("Failed to read save file"))?;
        let mut reader = BufReader::new(file);

        let mut loaded = LoadedTasks::default();
        let mut buf = Vec::new();
        let mut line_number = 0;
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(PipError::io("Failed to read save file"))?;
            if read == 0 {
                break;
            }
            line_number += 1;

            let decoded = match std::str::from_utf8(&buf) {
                Ok(text) => text,
                Err(e) => {
                    warn!(
                        "skipping line {} of {}: {}",
                        line_number,
                        self.file_path.display(),
                        e
                    );
                    loaded.skipped.push(SkippedLine {
                        line_number,
                        line: String::from_utf8_lossy(&buf).trim().to_string(),
                        reason: format!("Unreadable save line: {}", e),
                    });
                    continue;
                }
            };
            let trimmed = decoded.trim();
            if trimmed.is_empty() {
                continue;
            }
            match Task::from_record(trimmed) {
                Ok(task) => loaded.tasks.push(task),
                Err(e) => {
                    warn!(
                        "skipping line {} of {}: {}",
                        line_number,
                        self.file_path.display(),
                        e
                    );
                    loaded.skipped.push(SkippedLine {
                        line_number,
                        line: trimmed.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            "loaded {} tasks from {} ({} skipped)",
            loaded.tasks.len(),
            self.file_path.display(),
            loaded.skipped.len()
        );
        Ok(loaded)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        self.ensure_parent_dir()?;

        let write = || -> std::io::Result<()> {
            let file = File::create(&self.file_path)?;
            let mut writer = BufWriter::new(file);
            for task in tasks {
                writeln!(writer, "{}", task.to_record())?;
            }
            writer.flush()
        };
        write().map_err(|e| {
            warn!("failed to save {}: {}", self.file_path.display(), e);
            PipError::Io {
                context: "Failed to save tasks to disk",
                source: e,
            }
        })?;

        debug!("saved {} tasks to {}", tasks.len(), self.file_path.display());
        Ok(())
    }
}
