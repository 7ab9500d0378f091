// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod trace_line_parser;

// Re-export.
pub use trace_line_parser::*;
