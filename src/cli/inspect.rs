// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Shows how the fuzz target will see a corpus entry: the font part and
//! the trailing glyph selector.

use crate::{
    cli::Inspect,
    corpus::{split_entry, trailer_char, TRAILERS},
};
use std::fs;

pub fn handle_inspect(cmd: &Inspect) {
    let buffer = fs::read(&cmd.file).expect("Failed to read corpus entry");
    let (font_part, trailer) = match split_entry(&buffer) {
        Some(parts) => parts,
        None => panic!("Entry {:?} is too short to carry a trailer", cmd.file),
    };
    println!(
        "file={:?}, font bytes={}, trailer={:02x?}",
        cmd.file,
        font_part.len(),
        trailer
    );
    match TRAILERS.iter().position(|t| t == trailer) {
        Some(idx) => println!("Matches variant {}", idx + 1),
        None => println!("Trailer does not match any known variant"),
    }
    match trailer_char(trailer) {
        Some(chr) => println!("Fuzz target will rasterize: {:?}", chr),
        None => println!("Trailer is not a valid UTF-8 tail"),
    }
}
