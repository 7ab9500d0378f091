// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # ps2dec
//!
//! Command line front end for [`ps2_kbd`]. Reads a framed byte trace, one
//! `<direction> <byte> <start> <end>` record per line, from a file or stdin, and prints
//! one annotation per decoded event.
//!
//! ```text
//! $ printf 'H->D FF 0 10\nD->H FA 11 20\nD->H F0 21 30\nD->H 1C 31 40\n' | ps2dec
//! 0-10 command        Cmd: Reset
//! 11-20 ack            Res: ACK
//! 31-40 key-up         ↑: a A
//! ```
//!
//! Use `--code-set cs1|cs2|cs3` (default `cs2`) or `--config <file.json>` to pick the
//! code set, and `--format json` for machine readable output.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(rust_2018_idioms)]
// Enforce strict error handling in production code, allow unwrap in tests.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod common;
pub mod ps2dec;

// Re-export.
pub use common::*;
