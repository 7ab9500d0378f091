// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Per byte state machine that groups `F0` / `E0` prefixed sequences into single key
//! events.
//!
//! ```text
//! Idle ──F0──► SawBreakPrefix ──E0──► SawBreakThenExtendedPrefix
//!  │                 │                          │
//!  E0          other: KeyUp(base)         any: KeyUp(extended)
//!  ▼                 ▼                          ▼
//! SawExtendedPrefix  Idle                       Idle
//!  │
//! any: KeyDown(extended)
//!  ▼
//! Idle
//! ```
//!
//! A host to device byte moves every state back to `Idle` and is reported as a
//! command.

// Attach sources.
pub mod scan_code_interpreter;
pub mod types;

// Re-export.
pub use scan_code_interpreter::*;
pub use types::*;
