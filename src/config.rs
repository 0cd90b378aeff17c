use crate::charset::CharacterClass;
use crate::errors::{ AppError, SpecError };
use crate::password::GenerationSpec;

use std::fs::File;
use std::io::BufReader;
use std::path::{ Path, PathBuf };

use serde::{ Deserialize, Serialize };

/// Defaults read from `config.json`. Command line flags override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub length: usize,
    pub count: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: 12,
            count: 1,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

impl Config {
    const FILE_NAME: &str = "config.json";

    /// Reads `path`, or the default location when `path` is `None`. Only a
    /// missing default file falls back to [`Config::default`].
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        Self::load_from(path, Self::default_path())
    }

    fn load_from(path: Option<&Path>, default: Option<PathBuf>) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::read(path),
            None => match default {
                Some(path) if path.exists() => Self::read(&path),
                _ => {
                    log::debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("passgen").join(Self::FILE_NAME))
    }

    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| match class {
                CharacterClass::Uppercase => self.uppercase,
                CharacterClass::Lowercase => self.lowercase,
                CharacterClass::Digits => self.numbers,
                CharacterClass::Symbols => self.symbols,
            })
            .collect()
    }

    pub fn spec(&self) -> Result<GenerationSpec, SpecError> {
        GenerationSpec::new(self.length, &self.enabled_classes())
    }

    fn read(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file)).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("loaded config from {}", path.display());
        Ok(config)
    }
}
