// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Builds the seed corpus for the font parser fuzz targets.
//!
//! Every font file found under the resource tree turns into three corpus
//! entries: the original bytes with one of three fixed 4-byte trailers
//! appended. The trailer doubles as the UTF-8 glyph selector the fuzz
//! target reads back from the end of each input.

use anyhow::{Context, Result};
use glob::glob;
use log::{debug, info};
use serde::Serialize;
use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Size cap for a corpus entry, trailer included. A candidate is seeded
/// only if `len + TRAILER_LEN` stays strictly below this.
pub const MAX_ENTRY_BYTES: usize = 1024 * 1024;

pub const TRAILER_LEN: usize = 4;

/// The fixed trailers, one per variant. Each is a valid UTF-8 tail
/// (`g`, U+34A8, U+2211) so the fuzz target can decode a glyph from it.
/// The byte values are load-bearing for corpus reproducibility; do not
/// reorder or edit them.
pub const TRAILERS: [[u8; TRAILER_LEN]; 3] = [
    [0x00, 0x00, 0x00, 0x67],
    [0x00, 0xe3, 0x92, 0xa8],
    [0x00, 0xe2, 0x88, 0x91],
];

/// Tally of one builder run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildSummary {
    /// Files that matched the extension filter.
    pub candidates: usize,
    /// Candidates dropped for breaking the size cap.
    pub skipped_oversize: usize,
    /// Corpus entries written (3x the seeded candidates).
    pub entries_written: usize,
}

/// Create the corpus directory if it is missing. The parent must already
/// exist; an already-present directory is fine.
pub fn ensure_corpus_dir(corpus_dir: &Path) -> Result<()> {
    match fs::create_dir(corpus_dir) {
        Ok(()) => {
            info!("Created corpus dir at {:?}", corpus_dir);
            Ok(())
        },
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Failed to create corpus dir {:?}", corpus_dir)),
    }
}

/// Walk `source_root` recursively and return every file whose name ends
/// with `extension` (case-sensitive). The source tree is never touched.
pub fn find_candidates(source_root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let search_pattern = format!("{}/**/*", source_root.display());
    let mut candidates = vec![];
    for entry in glob(&search_pattern).context("Failed to read glob pattern")? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .map_or(false, |n| n.ends_with(extension));
        if matches {
            candidates.push(path);
        } else {
            debug!("Ignoring {:?}", path);
        }
    }
    Ok(candidates)
}

/// Write the three trailer variants of `bytes` into `corpus_dir`, named
/// `<file_name>.1` through `<file_name>.3`. Existing entries are
/// overwritten. Returns the number of entries written: 0 when the
/// candidate breaks the size cap (a normal skip, not an error), 3
/// otherwise.
pub fn seed_entries(bytes: &[u8], file_name: &str, corpus_dir: &Path) -> Result<usize> {
    if bytes.len() + TRAILER_LEN >= MAX_ENTRY_BYTES {
        debug!("Skipping {} ({} bytes, over cap)", file_name, bytes.len());
        return Ok(0);
    }
    for (idx, trailer) in TRAILERS.iter().enumerate() {
        let dest = corpus_dir.join(format!("{}.{}", file_name, idx + 1));
        let mut out = File::create(&dest)
            .with_context(|| format!("Failed to create corpus entry {:?}", dest))?;
        out.write_all(bytes)
            .and_then(|_| out.write_all(trailer))
            .with_context(|| format!("Failed to write corpus entry {:?}", dest))?;
    }
    Ok(TRAILERS.len())
}

/// Seed the corpus at `corpus_dir` from every `extension` file under
/// `source_root`. Single-threaded; each candidate is read fully, then its
/// variants are written in order. Source subdirectory structure is
/// flattened, so same-named fonts in different subtrees overwrite each
/// other's entries.
pub fn build(source_root: &Path, corpus_dir: &Path, extension: &str) -> Result<BuildSummary> {
    ensure_corpus_dir(corpus_dir)?;
    let mut summary = BuildSummary::default();
    for path in find_candidates(source_root, extension)? {
        summary.candidates += 1;
        let bytes = fs::read(&path).with_context(|| format!("Failed to read {:?}", path))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .expect("candidate passed the UTF-8 suffix filter")
            .to_string();
        let written = seed_entries(&bytes, &file_name, corpus_dir)?;
        if written == 0 {
            summary.skipped_oversize += 1;
        }
        summary.entries_written += written;
    }
    info!(
        "Seeded {} entries from {} candidates ({} skipped over cap)",
        summary.entries_written, summary.candidates, summary.skipped_oversize
    );
    Ok(summary)
}

/// Split a corpus entry into its font part and trailer. `None` if the
/// entry is too short to carry a trailer.
pub fn split_entry(bytes: &[u8]) -> Option<(&[u8], &[u8; TRAILER_LEN])> {
    if bytes.len() < TRAILER_LEN {
        return None;
    }
    let (font_part, tail) = bytes.split_at(bytes.len() - TRAILER_LEN);
    let trailer: &[u8; TRAILER_LEN] = tail.try_into().ok()?;
    Some((font_part, trailer))
}

/// Decode the trailer tail as UTF-8 and return its last character, the way
/// the fuzz target picks the glyph to rasterize.
pub fn trailer_char(trailer: &[u8; TRAILER_LEN]) -> Option<char> {
    std::str::from_utf8(trailer).ok().and_then(|s| s.chars().last())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_tree(root: &Path, files: &[(&str, &[u8])]) {
        for (rel, bytes) in files {
            let path = root.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, bytes).unwrap();
        }
    }

    fn entry_names(corpus: &Path) -> Vec<String> {
        let mut names = fs::read_dir(corpus)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect::<Vec<String>>();
        names.sort();
        names
    }

    #[test]
    fn test_filter_by_extension() {
        let src = tempdir().unwrap();
        write_tree(src.path(), &[
            ("a/font1.ttf", b"12345"),
            ("b/notes.txt", b"hello"),
            ("b/font.TTF", b"upper"),
            ("c/deep/nested/font2.ttf", b"xyz"),
        ]);
        let mut found = find_candidates(src.path(), ".ttf")
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect::<Vec<String>>();
        found.sort();
        assert_eq!(found, vec!["font1.ttf", "font2.ttf"]);
    }

    #[test]
    fn test_three_variants_with_trailers() {
        let src = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_tree(src.path(), &[("a/font1.ttf", b"0123456789")]);

        let summary = build(src.path(), out.path(), ".ttf").unwrap();
        assert_eq!(summary.candidates, 1);
        assert_eq!(summary.entries_written, 3);
        assert_eq!(summary.skipped_oversize, 0);

        for (idx, trailer) in TRAILERS.iter().enumerate() {
            let entry = fs::read(out.path().join(format!("font1.ttf.{}", idx + 1))).unwrap();
            assert_eq!(entry.len(), 14);
            assert_eq!(&entry[..10], b"0123456789");
            assert_eq!(&entry[10..], trailer);
        }
    }

    #[test]
    fn test_size_cap_boundary() {
        let out = tempdir().unwrap();
        // len + 4 == MAX_ENTRY_BYTES, not strictly under: skipped whole.
        let at_cap = vec![0u8; MAX_ENTRY_BYTES - TRAILER_LEN];
        assert_eq!(seed_entries(&at_cap, "big.ttf", out.path()).unwrap(), 0);
        assert!(entry_names(out.path()).is_empty());

        let under_cap = vec![0u8; MAX_ENTRY_BYTES - TRAILER_LEN - 1];
        assert_eq!(seed_entries(&under_cap, "ok.ttf", out.path()).unwrap(), 3);
        assert_eq!(entry_names(out.path()), vec![
            "ok.ttf.1", "ok.ttf.2", "ok.ttf.3"
        ]);
    }

    #[test]
    fn test_flattened_naming() {
        let src = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_tree(src.path(), &[
            ("x/one.ttf", b"aa"),
            ("y/z/two.ttf", b"bb"),
        ]);
        build(src.path(), out.path(), ".ttf").unwrap();
        assert_eq!(entry_names(out.path()), vec![
            "one.ttf.1", "one.ttf.2", "one.ttf.3", "two.ttf.1", "two.ttf.2", "two.ttf.3"
        ]);
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let src = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_tree(src.path(), &[("a/font.ttf", b"stable")]);

        build(src.path(), out.path(), ".ttf").unwrap();
        let first = entry_names(out.path())
            .iter()
            .map(|n| fs::read(out.path().join(n)).unwrap())
            .collect::<Vec<Vec<u8>>>();

        build(src.path(), out.path(), ".ttf").unwrap();
        let second = entry_names(out.path())
            .iter()
            .map(|n| fs::read(out.path().join(n)).unwrap())
            .collect::<Vec<Vec<u8>>>();

        assert_eq!(entry_names(out.path()).len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_corpus_dir_bootstrap() {
        let src = tempdir().unwrap();
        let parent = tempdir().unwrap();
        write_tree(src.path(), &[("font.ttf", b"f")]);

        let corpus = parent.path().join("corpus");
        assert!(!corpus.exists());
        build(src.path(), &corpus, ".ttf").unwrap();
        assert!(corpus.is_dir());

        // A second run over an existing dir must not fail and must leave
        // unrelated files alone.
        fs::write(corpus.join("keep.me"), b"untouched").unwrap();
        build(src.path(), &corpus, ".ttf").unwrap();
        assert_eq!(fs::read(corpus.join("keep.me")).unwrap(), b"untouched");
    }

    #[test]
    fn test_split_entry_and_trailer_char() {
        let mut entry = b"fontbytes".to_vec();
        entry.extend_from_slice(&TRAILERS[0]);
        let (font_part, trailer) = split_entry(&entry).unwrap();
        assert_eq!(font_part, b"fontbytes");
        assert_eq!(trailer, &TRAILERS[0]);

        assert_eq!(trailer_char(&TRAILERS[0]), Some('g'));
        assert_eq!(trailer_char(&TRAILERS[1]), Some('\u{34a8}'));
        assert_eq!(trailer_char(&TRAILERS[2]), Some('\u{2211}'));
        assert_eq!(trailer_char(&[0xff, 0xff, 0xff, 0xff]), None);

        assert!(split_entry(b"abc").is_none());
    }
}
