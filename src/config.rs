use crate::glyphs::GlyphTable;
use crate::intercept::{ClipboardSource, DEFAULT_SKIP_CODES, Options};
use crate::translate::SessionCache;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.yaml";

/// The contents of the configuration file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Pick a new glyph for every character typed.
    pub randomize: bool,

    /// Glyphs to use for specific characters when not randomizing.
    pub dictionary: BTreeMap<String, String>,

    /// Key codes that keep their default behavior.
    pub skip_codes: Vec<u32>,

    /// Seed the random source for reproducible output.
    pub seed: Option<u64>,

    /// The sources pasted text is read from, in order.
    pub clipboard: Vec<ClipboardSource>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            randomize: true,
            dictionary: BTreeMap::new(),
            skip_codes: DEFAULT_SKIP_CODES.to_vec(),
            seed: None,
            clipboard: vec![ClipboardSource::Event, ClipboardSource::System],
        }
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, the default location is used if there's a
    /// file there and the defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// The default location of the configuration file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "witchify")?;
        Some(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config = Self::from_yaml(&contents)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // An empty file is a valid, all-defaults configuration.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(contents)?;
        config.dictionary_entries()?;
        Ok(config)
    }

    /// Add a `KEY=GLYPH` dictionary entry, as given on the command line.
    pub fn add_dictionary_entry(&mut self, entry: &str) -> Result<(), ConfigError> {
        // The key comes first so that `==≡` maps the equals sign itself.
        let mut chars = entry.chars();
        let key = chars.next().ok_or_else(|| ConfigError::MalformedEntry(entry.to_string()))?;
        let glyph = chars.as_str().strip_prefix('=').ok_or_else(|| ConfigError::MalformedEntry(entry.to_string()))?;
        let key = parse_key(key.encode_utf8(&mut [0; 4]))?;
        self.dictionary.insert(key.to_string(), glyph.to_string());
        Ok(())
    }

    /// Turn the configuration into activation options.
    pub fn into_options(self) -> Result<Options, ConfigError> {
        let entries = self.dictionary_entries()?;
        let dictionary = (!entries.is_empty()).then(|| SessionCache::seeded(entries));
        Ok(Options {
            randomize: self.randomize,
            dictionary,
            skip_codes: self.skip_codes,
            seed: self.seed,
            clipboard: self.clipboard,
        })
    }

    fn dictionary_entries(&self) -> Result<Vec<(char, String)>, ConfigError> {
        self.dictionary.iter().map(|(key, glyph)| Ok((parse_key(key)?, glyph.clone()))).collect()
    }
}

fn parse_key(key: &str) -> Result<char, ConfigError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if GlyphTable::canonical(ch).is_some() => Ok(ch),
        _ => Err(ConfigError::InvalidDictionaryKey(key.to_string())),
    }
}

/// Errors that can occur when loading the configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{0}': {1}")]
    Io(PathBuf, #[source] io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("dictionary key '{0}' must be a single character")]
    InvalidDictionaryKey(String),

    #[error("dictionary entry '{0}' must look like KEY=GLYPH")]
    MalformedEntry(String),
}
