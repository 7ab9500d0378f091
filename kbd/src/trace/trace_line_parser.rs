// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parser for the plain text byte trace format:
//!
//! ```text
//! # direction  byte  start  end
//! H->D         FF    0      880
//! D->H         0xFA  1200   2080
//! ```
//!
//! Fields are whitespace separated. Bytes are hex with an optional `0x`, sample
//! numbers are decimal. Blank lines and `#` comments are skipped.

use crate::{ByteEvent, Direction, DirectionParseError};

pub const COMMENT_PREFIX: char = '#';

#[derive(thiserror::Error, Debug, PartialEq, Eq, miette::Diagnostic)]
pub enum TraceParseError {
    #[error("Line {line_number}: missing {field} field")]
    #[diagnostic(
        code(ps2_kbd::trace::missing_field),
        help("Each record is: <direction> <byte> <start> <end>")
    )]
    MissingField {
        line_number: usize,
        field: &'static str,
    },

    #[error("Line {line_number}: unexpected trailing field '{value}'")]
    #[diagnostic(code(ps2_kbd::trace::trailing_field))]
    TrailingField { line_number: usize, value: String },

    #[error("Line {line_number}: invalid direction")]
    #[diagnostic(code(ps2_kbd::trace::invalid_direction))]
    InvalidDirection {
        line_number: usize,
        #[source]
        #[diagnostic_source]
        source: DirectionParseError,
    },

    #[error("Line {line_number}: '{value}' is not a hex byte")]
    #[diagnostic(
        code(ps2_kbd::trace::invalid_byte),
        help("Use two hex digits, optionally prefixed with 0x, eg: F0 or 0xF0")
    )]
    InvalidByte { line_number: usize, value: String },

    #[error("Line {line_number}: '{value}' is not a sample number")]
    #[diagnostic(code(ps2_kbd::trace::invalid_sample))]
    InvalidSample { line_number: usize, value: String },

    #[error("Line {line_number}: span ends at {end} before it starts at {start}")]
    #[diagnostic(code(ps2_kbd::trace::inverted_span))]
    InvertedSpan {
        line_number: usize,
        start: u64,
        end: u64,
    },
}

/// Parse one line of a trace. `line_number` is 1 based and only used in errors.
///
/// Returns `Ok(None)` for blank and comment lines.
///
/// # Errors
///
/// Returns a [`TraceParseError`] if a field is missing, malformed, or the span is
/// inverted.
pub fn parse_trace_line(
    line_number: usize,
    line: &str,
) -> Result<Option<ByteEvent>, TraceParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }

    let mut fields = line.split_whitespace();
    let mut next_field = |field: &'static str| {
        fields
            .next()
            .ok_or(TraceParseError::MissingField { line_number, field })
    };

    let direction = next_field("direction")?
        .parse::<Direction>()
        .map_err(|source| TraceParseError::InvalidDirection {
            line_number,
            source,
        })?;
    let value = parse_byte(line_number, next_field("byte")?)?;
    let start = parse_sample(line_number, next_field("start")?)?;
    let end = parse_sample(line_number, next_field("end")?)?;

    if let Some(extra) = fields.next() {
        return Err(TraceParseError::TrailingField {
            line_number,
            value: extra.to_string(),
        });
    }

    if end < start {
        return Err(TraceParseError::InvertedSpan {
            line_number,
            start,
            end,
        });
    }

    Ok(Some(ByteEvent::new(direction, value, start, end)))
}

fn parse_byte(line_number: usize, field: &str) -> Result<u8, TraceParseError> {
    let digits = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
        .unwrap_or(field);
    let is_valid = !digits.is_empty()
        && digits.len() <= 2
        && digits.chars().all(|it| it.is_ascii_hexdigit());
    is_valid
        .then(|| u8::from_str_radix(digits, 16).ok())
        .flatten()
        .ok_or_else(|| TraceParseError::InvalidByte {
            line_number,
            value: field.to_string(),
        })
}

fn parse_sample(line_number: usize, field: &str) -> Result<u64, TraceParseError> {
    field
        .parse::<u64>()
        .map_err(|_| TraceParseError::InvalidSample {
            line_number,
            value: field.to_string(),
        })
}
