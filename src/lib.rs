// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Corpus preparation tools for fuzzing font parsers.
//!
//! The core is [`corpus::build`]: scan a resource tree for font files and
//! emit, for each one that fits under the size cap, three seed entries with
//! distinct fixed trailer bytes appended.

pub mod cli;
pub mod config;
pub mod corpus;

pub use corpus::{build, BuildSummary, MAX_ENTRY_BYTES, TRAILERS, TRAILER_LEN};
