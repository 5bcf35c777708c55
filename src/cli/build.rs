// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Seeds the fuzzing corpus from the resource tree.

use crate::{
    cli::{common::get_progress_bar_with_msg, Build, FontCorpusEnv},
    corpus::{ensure_corpus_dir, find_candidates, seed_entries, BuildSummary, MAX_ENTRY_BYTES},
};
use indicatif::HumanDuration;
use std::{fs, time::Instant};

pub fn handle_build(env: &FontCorpusEnv, cmd: &Build) {
    let conf = &env.config.corpus;
    let resources = cmd
        .resources
        .clone()
        .unwrap_or_else(|| conf.resources_dir.clone());
    let corpus_dir = cmd.out.clone().unwrap_or_else(|| conf.corpus_dir.clone());
    let extension = cmd
        .extension
        .clone()
        .unwrap_or_else(|| conf.extension.clone());

    println!("Seeding corpus dir: {:?}", corpus_dir);
    if !resources.exists() {
        panic!("Resource dir does not exist");
    }
    ensure_corpus_dir(&corpus_dir).expect("Failed to create corpus dir");

    let candidates = find_candidates(&resources, &extension).expect("Failed to scan resource dir");
    println!(
        "[1/2] Found {} {} files under {:?}",
        candidates.len(),
        extension,
        resources
    );

    println!("[2/2] Writing corpus entries...");
    let pb = get_progress_bar_with_msg(candidates.len() as u64, "Seeding");
    let timer = Instant::now();
    let mut summary = BuildSummary::default();
    for path in &candidates {
        let bytes = fs::read(path).expect("Failed to read candidate font");
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .expect("candidate has a UTF-8 file name")
            .to_string();
        let written =
            seed_entries(&bytes, &file_name, &corpus_dir).expect("Failed to write corpus entries");
        summary.candidates += 1;
        if written == 0 {
            summary.skipped_oversize += 1;
        }
        summary.entries_written += written;
        pb.inc(1);
    }
    pb.finish_and_clear();
    println!(
        "[2/2] Wrote {} entries, skipped {} fonts at or over {} bytes",
        summary.entries_written, summary.skipped_oversize, MAX_ENTRY_BYTES
    );
    if let Some(report_file) = &cmd.report {
        let toml_str =
            toml::to_string_pretty(&summary).expect("Failed to serialize report to TOML");
        fs::write(report_file, toml_str).expect("Failed to write report file");
        println!("Saved report to: {:?}", report_file);
    }
    println!("Done seeding in {}", HumanDuration(timer.elapsed()));
}
