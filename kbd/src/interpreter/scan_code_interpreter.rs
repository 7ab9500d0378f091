// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ByteEvent, DecodedEvent, InterpreterState, SpannedEvent};
use crate::{CodeSet, Direction, command_name};

/// Prefix byte announcing a break code (code sets 2 and 3).
pub const BREAK_PREFIX: u8 = 0xF0;
/// Prefix byte announcing an extended key.
pub const EXTENDED_PREFIX: u8 = 0xE0;
/// BAT completion code.
pub const SELF_TEST_OK: u8 = 0xAA;
/// BAT failure code.
pub const SELF_TEST_FAIL: u8 = 0xFC;
/// Keyboard acknowledge.
pub const ACK: u8 = 0xFA;
/// Code set 1 marks a break by setting this bit in the make code.
pub const RELEASE_BIT: u8 = 0x80;

/// Turns an ordered stream of framed PS/2 bytes into key, command, and status events.
///
/// One instance per traced link. The only state is [`InterpreterState`], which tracks
/// the `F0` / `E0` prefixes of the sequence in progress. Every `(state, byte)` pair has
/// a transition, so [`Self::decode`] never fails and never stalls the stream.
///
/// ```
/// use ps2_kbd::{CodeSet, DecodedEvent, Direction, ScanCodeInterpreter};
///
/// let mut interpreter = ScanCodeInterpreter::new(CodeSet::Set2);
/// assert_eq!(interpreter.decode(Direction::DeviceToHost, 0xF0), None);
/// assert_eq!(
///     interpreter.decode(Direction::DeviceToHost, 0x1C),
///     Some(DecodedEvent::KeyUp("a A"))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanCodeInterpreter {
    code_set: CodeSet,
    state: InterpreterState,
}

impl ScanCodeInterpreter {
    #[must_use]
    pub const fn new(code_set: CodeSet) -> Self {
        Self {
            code_set,
            state: InterpreterState::Idle,
        }
    }

    #[must_use]
    pub const fn code_set(&self) -> CodeSet { self.code_set }

    #[must_use]
    pub const fn state(&self) -> InterpreterState { self.state }

    /// Drop any half-received sequence.
    pub fn reset(&mut self) { self.state = InterpreterState::Idle; }

    /// Consume one byte. Returns the event it completes, or `None` for a prefix byte.
    ///
    /// A host to device byte is always a command: it yields [`DecodedEvent::Command`]
    /// and abandons whatever prefix the keyboard had sent so far.
    pub fn decode(&mut self, direction: Direction, byte: u8) -> Option<DecodedEvent> {
        if direction == Direction::HostToDevice {
            if self.state != InterpreterState::Idle {
                tracing::trace!(
                    message = "host command aborts pending sequence",
                    state = %self.state,
                    byte = format_args!("{byte:#04X}")
                );
            }
            self.state = InterpreterState::Idle;
            return Some(DecodedEvent::Command(command_name(byte)));
        }

        let (next_state, maybe_event) = match self.state {
            InterpreterState::Idle => self.decode_idle(byte),
            InterpreterState::SawBreakPrefix => match byte {
                EXTENDED_PREFIX => (InterpreterState::SawBreakThenExtendedPrefix, None),
                _ => (
                    InterpreterState::Idle,
                    Some(DecodedEvent::KeyUp(self.code_set.lookup(byte))),
                ),
            },
            InterpreterState::SawExtendedPrefix => (
                InterpreterState::Idle,
                Some(DecodedEvent::KeyDown(self.code_set.lookup_extended(byte))),
            ),
            InterpreterState::SawBreakThenExtendedPrefix => (
                InterpreterState::Idle,
                Some(DecodedEvent::KeyUp(self.code_set.lookup_extended(byte))),
            ),
        };

        // % is Display, ? is Debug.
        tracing::trace!(
            message = "decode",
            byte = format_args!("{byte:#04X}"),
            from = %self.state,
            to = %next_state,
            event = ?maybe_event
        );

        self.state = next_state;
        maybe_event
    }

    /// Same as [`Self::decode`], keeping the span of the byte with the event.
    pub fn decode_event(&mut self, byte_event: ByteEvent) -> Option<SpannedEvent> {
        let ByteEvent { direction, raw } = byte_event;
        self.decode(direction, raw.value)
            .map(|event| SpannedEvent {
                span: raw.span,
                event,
            })
    }

    fn decode_idle(&self, byte: u8) -> (InterpreterState, Option<DecodedEvent>) {
        let event = match byte {
            BREAK_PREFIX => return (InterpreterState::SawBreakPrefix, None),
            EXTENDED_PREFIX => return (InterpreterState::SawExtendedPrefix, None),
            SELF_TEST_OK if self.code_set.reports_self_test() => DecodedEvent::SelfTestOk,
            SELF_TEST_FAIL if self.code_set.reports_self_test() => {
                DecodedEvent::SelfTestFail
            }
            ACK => DecodedEvent::CommandAck,
            _ if self.code_set.uses_release_bit() => self.decode_code_set_1(byte),
            _ => DecodedEvent::KeyDown(self.code_set.lookup(byte)),
        };
        (InterpreterState::Idle, Some(event))
    }

    /// A byte with [`RELEASE_BIT`] set is the break of the key it masks down to. The
    /// one exception is the BAT completion code, which the set 1 table lists under its
    /// own name and which is reported as a make code of that entry.
    fn decode_code_set_1(&self, byte: u8) -> DecodedEvent {
        let table = self.code_set.base_table();
        if byte == SELF_TEST_OK || byte & RELEASE_BIT == 0 {
            return DecodedEvent::KeyDown(table.lookup(byte));
        }
        DecodedEvent::KeyUp(table.lookup(byte & !RELEASE_BIT))
    }
}
