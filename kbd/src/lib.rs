// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # ps2_kbd
//!
//! Interprets PS/2 keyboard traffic one byte at a time. The input is bytes that a
//! framing layer has already pulled off the clock and data lines, each tagged with its
//! direction (host to device, or device to host) and its sample span. The output is
//! what a person reading a logic analyzer capture wants to see:
//!
//! - `Cmd: Reset` for host commands,
//! - `↓: a A` / `↑: a A` for key presses and releases, with `F0` and `E0` prefixes
//!   folded into the key they belong to,
//! - `BAT OK`, `BAT NG`, and `Res: ACK` for keyboard status responses.
//!
//! ```text
//! (direction, byte, start, end)          ← byte framing layer (not in this crate)
//!    │
//! ┌──▼──────────────────────────────┐
//! │ ScanCodeInterpreter             │   one per traced link
//! │  • InterpreterState (F0 / E0)   │
//! │  • CodeSet → tables             │
//! └─────────────────────────────────┘
//!    │ Option<DecodedEvent>
//!    ▼
//! Annotation { category, texts }         → rendering layer (not in this crate)
//! ```
//!
//! # Code sets
//!
//! All three PC code sets are supported, selected once per session with [`CodeSet`].
//! Code sets 2 and 3 signal a break with an `F0` prefix; code set 1 sets bit 7 of the
//! code byte. Code sets 1 and 2 have `E0` extended keys.
//!
//! # Never fails
//!
//! Every table lookup is total and every `(state, byte)` pair has a transition. A byte
//! nobody has a name for is reported as [`UNKNOWN_CODE`]; decoding carries on with the
//! next byte. Errors only exist at the edges: reading a [`DecoderConfig`] or parsing a
//! text trace with [`parse_trace_line`].
//!
//! # Example
//!
//! ```
//! use ps2_kbd::{Annotation, ByteEvent, CodeSet, Direction, ScanCodeInterpreter};
//!
//! let trace = [
//!     ByteEvent::new(Direction::DeviceToHost, 0xE0, 0, 10),
//!     ByteEvent::new(Direction::DeviceToHost, 0x75, 11, 20),
//! ];
//! let mut interpreter = ScanCodeInterpreter::new(CodeSet::Set2);
//! let annotations: Vec<Annotation> = trace
//!     .into_iter()
//!     .filter_map(|it| interpreter.decode_event(it))
//!     .map(Annotation::from)
//!     .collect();
//! assert_eq!(annotations.len(), 1);
//! assert_eq!(annotations[0].texts.long, "↓: Up Arrow");
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(rust_2018_idioms)]
// Enforce strict error handling in production code, allow unwrap in tests.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod annotation;
pub mod code_set;
pub mod config;
pub mod decoder_info;
pub mod interpreter;
pub mod log;
pub mod tables;
pub mod trace;

// Re-export.
pub use annotation::*;
pub use code_set::*;
pub use config::*;
pub use interpreter::*;
pub use log::*;
pub use tables::*;
pub use trace::*;
