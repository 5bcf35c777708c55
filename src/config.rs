// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Configuration for the corpus tools.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The configuration for the corpus tools.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub corpus: CorpusConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorpusConfig {
    /// Resource tree scanned for candidate fonts.
    pub resources_dir: PathBuf,
    /// Where seed entries land.
    pub corpus_dir: PathBuf,
    /// Filename suffix a candidate must carry (case-sensitive).
    /// "Font files" for the current targets means `.ttf`.
    pub extension: String,
}

impl Default for Config {
    /// Load default configuration from FontCorpus.default.toml
    fn default() -> Self {
        let file_content = include_str!("../FontCorpus.default.toml");
        toml::from_str(file_content).expect("Cannot parse default config TOML")
    }
}

impl Config {
    pub fn from_toml_file_or_default(file_path: &Path) -> Self {
        if file_path.exists() {
            Self::from_toml_file(file_path)
        } else {
            Config::default()
        }
    }

    pub fn from_toml_file(file_path: &Path) -> Self {
        let config_str = std::fs::read_to_string(file_path).expect("Cannot read from config file");
        let config: Config = toml::from_str(&config_str).expect("Cannot parse config file");
        config
    }
}
