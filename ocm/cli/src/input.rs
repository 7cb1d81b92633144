//! Where a command reads its document from.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use ocm_model_core::codec::Source;
use tracing::debug;

use crate::error::CliError;

/// A file path, or standard input for no path or `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => Self::File(path),
            _ => Self::Stdin,
        }
    }

    /// Opens the input for decoding.
    pub fn open(&self) -> Result<Source<'static>, CliError> {
        match self {
            Self::Stdin => {
                debug!("reading document from stdin");
                Ok(Source::from_reader(io::stdin()))
            }
            Self::File(path) => {
                debug!(path = %path.display(), "reading document");
                let file = File::open(path).map_err(|source| CliError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Source::from_reader(BufReader::new(file)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_and_missing_path_mean_stdin() {
        assert_eq!(Input::from_arg(None), Input::Stdin);
        assert_eq!(Input::from_arg(Some(PathBuf::from("-"))), Input::Stdin);
        assert_eq!(
            Input::from_arg(Some(PathBuf::from("cluster.json"))),
            Input::File(PathBuf::from("cluster.json"))
        );
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = Input::File(dir.path().join("absent.json"));
        assert!(matches!(input.open(), Err(CliError::Open { .. })));
    }
}
