// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The two configuration-level enums of a decoding session: which scan code set the
//! keyboard speaks ([`CodeSet`]) and which side of the link put a byte on the wire
//! ([`Direction`]).
//!
//! Both have string forms that only exist at the edges (decoder option values, trace
//! files, JSON config). They are parsed once into these enums, and everything past
//! that point matches on them exhaustively.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter};

/// One of the three historical PC keyboard scan code sets.
///
/// Fixed for the lifetime of a [`crate::ScanCodeInterpreter`]. The string forms
/// (`cs1`, `cs2`, `cs3`) match the decoder option values in
/// [`crate::decoder_info::CODE_SET_OPTION_VALUES`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    AsRefStr,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum CodeSet {
    /// XT code set. Break is signaled by bit 7 of the code byte itself.
    #[strum(serialize = "cs1")]
    #[serde(rename = "cs1")]
    Set1,
    /// AT code set, the power-on default of almost every PS/2 keyboard.
    #[default]
    #[strum(serialize = "cs2")]
    #[serde(rename = "cs2")]
    Set2,
    /// Terminal code set. No `E0` extended keys.
    #[strum(serialize = "cs3")]
    #[serde(rename = "cs3")]
    Set3,
}

impl CodeSet {
    /// Code sets 2 and 3 report the BAT result (`0xAA` / `0xFC`) as status bytes. In
    /// code set 1 those values are ordinary scan codes.
    #[must_use]
    pub const fn reports_self_test(self) -> bool {
        match self {
            CodeSet::Set1 => false,
            CodeSet::Set2 | CodeSet::Set3 => true,
        }
    }

    /// Code set 1 encodes the break in the high bit of the code byte instead of an
    /// `F0` prefix.
    #[must_use]
    pub const fn uses_release_bit(self) -> bool { matches!(self, CodeSet::Set1) }
}

impl FromStr for CodeSet {
    type Err = CodeSetParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let it = value.trim();
        if it.eq_ignore_ascii_case("cs1") {
            Ok(CodeSet::Set1)
        } else if it.eq_ignore_ascii_case("cs2") {
            Ok(CodeSet::Set2)
        } else if it.eq_ignore_ascii_case("cs3") {
            Ok(CodeSet::Set3)
        } else {
            Err(CodeSetParseError::Unknown {
                value: value.to_string(),
            })
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, miette::Diagnostic)]
pub enum CodeSetParseError {
    #[error("Unknown code set: '{value}'")]
    #[diagnostic(
        code(ps2_kbd::code_set::unknown),
        help("Valid code sets are: cs1, cs2, cs3")
    )]
    Unknown { value: String },
}

/// Which end of the PS/2 link drove the byte.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize, Deserialize,
)]
pub enum Direction {
    /// Host (controller) to keyboard. Always a command or a command argument.
    #[strum(serialize = "H->D")]
    #[serde(rename = "H->D")]
    HostToDevice,
    /// Keyboard to host. Scan codes and status responses.
    #[strum(serialize = "D->H")]
    #[serde(rename = "D->H")]
    DeviceToHost,
}

impl FromStr for Direction {
    type Err = DirectionParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let it = value.trim();
        if it.eq_ignore_ascii_case("H->D") || it.eq_ignore_ascii_case("host") {
            Ok(Direction::HostToDevice)
        } else if it.eq_ignore_ascii_case("D->H") || it.eq_ignore_ascii_case("device") {
            Ok(Direction::DeviceToHost)
        } else {
            Err(DirectionParseError::Unknown {
                value: value.to_string(),
            })
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, miette::Diagnostic)]
pub enum DirectionParseError {
    #[error("Unknown direction: '{value}'")]
    #[diagnostic(
        code(ps2_kbd::direction::unknown),
        help("Use H->D (or host) for host to device, D->H (or device) for device to host")
    )]
    Unknown { value: String },
}
