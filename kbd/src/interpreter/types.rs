// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

use crate::Direction;

/// Position of one byte on the wire, as sample numbers of the capture. The
/// interpreter never looks at it; it is carried from input to output so the caller
/// can place the annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SampleSpan {
    pub start: u64,
    pub end: u64,
}

impl SampleSpan {
    #[must_use]
    pub const fn new(start: u64, end: u64) -> Self { Self { start, end } }
}

/// One framed byte and where it sits in the capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawByte {
    pub value: u8,
    pub span: SampleSpan,
}

impl RawByte {
    #[must_use]
    pub const fn new(value: u8, span: SampleSpan) -> Self { Self { value, span } }
}

/// A record delivered by the byte framing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteEvent {
    pub direction: Direction,
    pub raw: RawByte,
}

impl ByteEvent {
    #[must_use]
    pub const fn new(direction: Direction, value: u8, start: u64, end: u64) -> Self {
        Self {
            direction,
            raw: RawByte::new(value, SampleSpan::new(start, end)),
        }
    }
}

/// Where the interpreter is inside a multi byte scan code sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, AsRefStr)]
pub enum InterpreterState {
    /// Not inside a sequence.
    #[default]
    Idle,
    /// Saw `F0`.
    SawBreakPrefix,
    /// Saw `E0`.
    SawExtendedPrefix,
    /// Saw `F0 E0`.
    SawBreakThenExtendedPrefix,
}

/// The logical event a byte completes. Names point into the static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodedEvent {
    /// Host to device command byte.
    Command(&'static str),
    /// Make code.
    KeyDown(&'static str),
    /// Break code.
    KeyUp(&'static str),
    /// BAT passed (`0xAA`, code sets 2 and 3).
    SelfTestOk,
    /// BAT failed (`0xFC`, code sets 2 and 3).
    SelfTestFail,
    /// `0xFA` acknowledge from the keyboard.
    CommandAck,
}

impl DecodedEvent {
    /// The resolved key or command name, if this event carries one.
    #[must_use]
    pub const fn name(&self) -> Option<&'static str> {
        match self {
            DecodedEvent::Command(name)
            | DecodedEvent::KeyDown(name)
            | DecodedEvent::KeyUp(name) => Some(name),
            DecodedEvent::SelfTestOk
            | DecodedEvent::SelfTestFail
            | DecodedEvent::CommandAck => None,
        }
    }
}

/// A [`DecodedEvent`] together with the span of the byte that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpannedEvent {
    pub span: SampleSpan,
    pub event: DecodedEvent,
}
