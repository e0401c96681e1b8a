//! Output artifact writing

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Destination for the finished batch; written exactly once per run
pub trait OutputSink {
    fn write_lines(&mut self, lines: &[String]) -> AppResult<()>;
}

/// UTF-8 text file, one value per line, each terminated by `\n`
///
/// Any existing file at the path is overwritten.
pub struct TextFileSink {
    path: PathBuf,
}

impl TextFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for TextFileSink {
    fn write_lines(&mut self, lines: &[String]) -> AppResult<()> {
        let capacity = lines.iter().map(|line| line.len() + 1).sum();
        let mut content = String::with_capacity(capacity);
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }

        fs::write(&self.path, content).map_err(|source| AppError::OutputWrite {
            path: self.path.clone(),
            source,
        })?;

        info!("OP_RETURN data written to: {}", self.path.display());
        Ok(())
    }
}
