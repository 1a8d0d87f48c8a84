use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_EXTENSIONS: &str = "jpg|jpeg|png|bmp";
pub const DEFAULT_OUTPUT_DIR: &str = "image-organizer";
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Resolved configuration for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub extensions: Extensions,
    pub max_depth: usize,
    pub verbosity: Verbosity,
    pub scan_only: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extensions: Extensions::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            verbosity: Verbosity::Silent,
            scan_only: false,
        }
    }
}

impl Settings {
    /// Make both directories absolute and reject an empty extension set.
    pub fn resolve(mut self) -> Result<Self, ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::EmptyExtensions);
        }
        self.input_dir = absolute(&self.input_dir)?;
        self.output_dir = absolute(&self.output_dir)?;
        Ok(self)
    }

    /// Create the output directory (and parents) if missing. Done for every
    /// run, scan-only included.
    pub fn create_output_dir(&self) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| {
            ConfigError::OutputDirectory {
                path: self.output_dir.clone(),
                source,
            }
        })
    }
}

fn absolute(path: &Path) -> Result<PathBuf, ConfigError> {
    std::path::absolute(path).map_err(|source| ConfigError::PathResolution {
        path: path.to_path_buf(),
        source,
    })
}

/// Accepted file extensions, stored lowercase with a leading dot.
/// Serialized as the `|` separated list and read back through [`Extensions::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Extensions(HashSet<String>);

impl TryFrom<String> for Extensions {
    type Error = ConfigError;

    fn try_from(list: String) -> Result<Self, Self::Error> {
        Self::parse(&list)
    }
}

impl From<Extensions> for String {
    fn from(extensions: Extensions) -> Self {
        extensions.sorted().join("|")
    }
}

impl Default for Extensions {
    fn default() -> Self {
        Self(
            DEFAULT_EXTENSIONS
                .split('|')
                .map(|ext| format!(".{ext}"))
                .collect(),
        )
    }
}

impl Extensions {
    /// Parse a `|` or `,` separated list such as `jpg|.PNG|bmp`.
    pub fn parse(list: &str) -> Result<Self, ConfigError> {
        let mut set = HashSet::new();
        for raw in list.split(['|', ',']) {
            let trimmed = raw.trim();
            let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);
            if bare.is_empty() {
                continue;
            }
            if bare.contains(['/', '\\', '.']) || bare.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidExtension(trimmed.to_string()));
            }
            set.insert(format!(".{}", bare.to_lowercase()));
        }

        if set.is_empty() {
            return Err(ConfigError::EmptyExtensions);
        }
        Ok(Self(set))
    }

    /// Lowercased, dot-prefixed extension of `path` if it is accepted.
    ///
    /// The extension is everything from the last `.` of the file name, so a
    /// name made only of an extension (`.jpg`) still qualifies.
    pub fn match_path(&self, path: &Path) -> Option<String> {
        let name = path.file_name()?.to_string_lossy();
        let (_, suffix) = name.rsplit_once('.')?;
        if suffix.is_empty() {
            return None;
        }
        let ext = format!(".{}", suffix.to_lowercase());
        self.0.contains(&ext).then_some(ext)
    }

    pub fn contains(&self, ext: &str) -> bool {
        self.0.contains(ext)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sorted(&self) -> Vec<String> {
        let mut list: Vec<String> = self.0.iter().cloned().collect();
        list.sort();
        list
    }
}

/// How chatty the scanner is. Ordered: `Silent < Errors < All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Verbosity {
    Silent,
    Errors,
    All,
}

impl Verbosity {
    /// Map a repeated `-v` flag count onto a level.
    pub fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Self::Silent,
            1 => Self::Errors,
            _ => Self::All,
        }
    }

    pub fn shows_errors(self) -> bool {
        self >= Self::Errors
    }

    pub fn shows_info(self) -> bool {
        self >= Self::All
    }

    pub fn filter_directive(self) -> &'static str {
        match self {
            Self::Silent => "off",
            Self::Errors => "warn",
            Self::All => "info",
        }
    }
}
