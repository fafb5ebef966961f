use std::{
    io,
    path::{Path, PathBuf},
};

use crate::{Config, Error, Result};

/// Represents a recase.toml file with both raw content and parsed config.
#[derive(Debug)]
pub struct RecaseToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl RecaseToml {
    /// Open and parse a recase.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        Self::from_content(path, content)
    }

    /// Open and parse a recase.toml file, or return `None` if it does not exist.
    pub fn open_if_exists(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref().to_path_buf();
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_content(path, content).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::trace!(path = %path.display(), "no config file");
                Ok(None)
            }
            Err(e) => Err(Box::new(Error::Io { path, source: e })),
        }
    }

    fn from_content(path: PathBuf, content: String) -> Result<Self> {
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;
        tracing::trace!(path = %filename, style = %config.convert.style, "loaded config");

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
