// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! The command line interface for the font-corpus tools.

use font_corpus::cli::{build::handle_build, inspect::handle_inspect, Command, FontCorpusEnv};

fn main() {
    env_logger::init();
    let env = FontCorpusEnv::from_cli();
    match &env.cli.command {
        Command::Build(cmd) => handle_build(&env, cmd),
        Command::Inspect(cmd) => handle_inspect(cmd),
    }
}
