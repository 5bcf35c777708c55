// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! The command line interface for the corpus tools.

pub mod build;
pub mod common;
pub mod inspect;

use crate::config::Config;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "font-corpus")]
#[command(about = "A CLI for preparing font fuzzing corpora", version = "0.1.0")]
pub struct Cli {
    #[command(flatten)]
    pub global_options: GlobalOptions,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug)]
pub struct GlobalOptions {
    #[arg(
        long,
        short,
        value_name = "CONFIG_FILE",
        default_value = "FontCorpus.toml"
    )]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Build(Build),
    Inspect(Inspect),
}

/// Seed the corpus from the resource tree.
#[derive(Args, Debug)]
pub struct Build {
    /// Resource tree to scan; defaults to `corpus.resources_dir` from the config
    #[arg(long, short, value_name = "RESOURCE_DIR")]
    pub resources: Option<PathBuf>,
    /// Destination directory; defaults to `corpus.corpus_dir` from the config
    #[arg(long, short, value_name = "CORPUS_DIR")]
    pub out: Option<PathBuf>,
    /// Filename suffix to accept; defaults to `corpus.extension` from the config
    #[arg(long, short, value_name = "SUFFIX")]
    pub extension: Option<String>,
    /// Also save the run summary as TOML
    #[arg(long, value_name = "REPORT_FILE")]
    pub report: Option<PathBuf>,
}

/// Split a corpus entry back into font part and trailer.
#[derive(Args, Debug)]
pub struct Inspect {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Debug)]
pub struct FontCorpusEnv {
    pub cli: Cli,
    pub config: Config,
}

impl FontCorpusEnv {
    pub fn from_cli() -> Self {
        let cli = Cli::parse();
        let config = Config::from_toml_file_or_default(&cli.global_options.config);
        FontCorpusEnv { cli, config }
    }
}
