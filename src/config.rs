//! Machine configuration read from the process environment.

use std::env;
use std::path::PathBuf;

/// Directories searched for dynamic modules.
pub const PATH_VAR: &str = "EGEL_PATH";
/// Interactive prompt.
pub const PROMPT_VAR: &str = "EGEL_PS0";

pub const DEFAULT_PROMPT: &str = ">> ";

fn default_search_path() -> Vec<PathBuf> {
    #[cfg(windows)]
    {
        vec![PathBuf::from(".")]
    }
    #[cfg(not(windows))]
    {
        vec![
            PathBuf::from("."),
            PathBuf::from("/usr/local/lib/egel"),
            PathBuf::from("/usr/lib/egel"),
        ]
    }
}

/// Read once when a machine is created and fixed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub search_path: Vec<PathBuf>,
    pub prompt: String,
}

impl Config {
    pub fn from_env() -> Self {
        let search_path = match env::var_os(PATH_VAR) {
            Some(paths) if !paths.is_empty() => env::split_paths(&paths).collect(),
            _ => default_search_path(),
        };
        let prompt = env::var(PROMPT_VAR).unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        Config {
            search_path,
            prompt,
        }
    }

    pub fn with_search_path<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_path = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Search path rendered with the platform separator, for diagnostics.
    pub fn search_path_display(&self) -> String {
        env::join_paths(&self.search_path)
            .map(|joined| joined.to_string_lossy().into_owned())
            .unwrap_or_else(|_| format!("{:?}", self.search_path))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            search_path: default_search_path(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}
