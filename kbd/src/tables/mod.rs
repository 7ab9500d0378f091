// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Static scan code and command name tables.
//!
//! | Code set | Base table      | Extended (`E0`) table      |
//! |----------|-----------------|----------------------------|
//! | 1        | [`CODE_SET_1`]  | [`CODE_SET_1_EXTENDED`]    |
//! | 2        | [`CODE_SET_2`]  | [`CODE_SET_2_EXTENDED`]    |
//! | 3        | [`CODE_SET_3`]  | none, always [`UNKNOWN_CODE`] |
//!
//! Host commands are code set independent, see [`COMMANDS`].
//!
//! Every lookup here is total. A byte with no entry resolves to [`UNKNOWN_CODE`]; the
//! decoder observes a live bus and must keep going on bytes it does not recognize.

// Attach sources.
pub mod byte_name_table;
pub mod code_set_1;
pub mod code_set_2;
pub mod code_set_3;
pub mod command;

// Re-export.
pub use byte_name_table::*;
pub use code_set_1::*;
pub use code_set_2::*;
pub use code_set_3::*;
pub use command::*;

use crate::CodeSet;

/// Bytes defined twice in the key tables. The tables report `kept`.
pub const AMBIGUOUS_ENTRIES: &[AmbiguousEntry] = &[
    AmbiguousEntry {
        table_id: "cs1_e0",
        byte: 0x5E,
        kept: "System Power",
        shadowed: "Keyboard Power",
    },
    AmbiguousEntry {
        table_id: "cs2",
        byte: 0x5F,
        kept: "半角/全角",
        shadowed: "F24",
    },
    AmbiguousEntry {
        table_id: "cs2_e0",
        byte: 0x37,
        kept: "System Power",
        shadowed: "Keyboard Power",
    },
];

/// Labels that were corrected when the tables were transcribed.
pub const RELABELED_ENTRIES: &[RelabeledEntry] = &[RelabeledEntry {
    table_id: "cs1_e0",
    byte: 0x37,
    label: "Print Screen",
    source: "Prinen",
}];

impl CodeSet {
    #[must_use]
    pub fn base_table(self) -> &'static ByteNameTable {
        match self {
            CodeSet::Set1 => &CODE_SET_1,
            CodeSet::Set2 => &CODE_SET_2,
            CodeSet::Set3 => &CODE_SET_3,
        }
    }

    /// Code set 3 has no `E0` prefixed keys.
    #[must_use]
    pub fn extended_table(self) -> Option<&'static ByteNameTable> {
        match self {
            CodeSet::Set1 => Some(&CODE_SET_1_EXTENDED),
            CodeSet::Set2 => Some(&CODE_SET_2_EXTENDED),
            CodeSet::Set3 => None,
        }
    }

    /// Key name for a byte following no prefix, or following `F0`.
    #[must_use]
    pub fn lookup(self, byte: u8) -> &'static str { self.base_table().lookup(byte) }

    /// Key name for a byte following `E0`, or `F0 E0`.
    #[must_use]
    pub fn lookup_extended(self, byte: u8) -> &'static str {
        self.extended_table()
            .map_or(UNKNOWN_CODE, |table| table.lookup(byte))
    }
}

/// Name of a host to device command byte.
#[must_use]
pub fn command_name(byte: u8) -> &'static str { COMMANDS.lookup(byte) }

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_every_byte_resolves_in_every_code_set() {
        for code_set in CodeSet::iter() {
            for byte in 0..=u8::MAX {
                assert!(!code_set.lookup(byte).is_empty());
                assert!(!code_set.lookup_extended(byte).is_empty());
            }
        }
        for byte in 0..=u8::MAX {
            assert!(!command_name(byte).is_empty());
        }
    }

    #[test]
    fn test_code_set_3_extended_is_always_unknown() {
        for byte in 0..=u8::MAX {
            assert_eq!(CodeSet::Set3.lookup_extended(byte), UNKNOWN_CODE);
        }
    }

    #[test_case(CodeSet::Set1, 0x1C, "Return")]
    #[test_case(CodeSet::Set1, 0xAA, "BAT OK")]
    #[test_case(CodeSet::Set2, 0x1C, "a A")]
    #[test_case(CodeSet::Set2, 0x5A, "Return")]
    #[test_case(CodeSet::Set2, 0x02, UNKNOWN_CODE)]
    #[test_case(CodeSet::Set3, 0x1C, "A")]
    #[test_case(CodeSet::Set3, 0x87, "KANA")]
    fn test_base_lookup(code_set: CodeSet, byte: u8, expected: &str) {
        assert_eq!(code_set.lookup(byte), expected);
    }

    #[test_case(CodeSet::Set1, 0x48, "Up Arrow")]
    #[test_case(CodeSet::Set1, 0x37, "Print Screen")]
    #[test_case(CodeSet::Set2, 0x75, "Up Arrow")]
    #[test_case(CodeSet::Set2, 0x7C, "Print Screen")]
    #[test_case(CodeSet::Set2, 0x48, "Mail")]
    #[test_case(CodeSet::Set2, 0x00, UNKNOWN_CODE)]
    fn test_extended_lookup(code_set: CodeSet, byte: u8, expected: &str) {
        assert_eq!(code_set.lookup_extended(byte), expected);
    }

    #[test_case(0xED, "Set Indicator")]
    #[test_case(0xF0, "Select Scan Code")]
    #[test_case(0xFF, "Reset")]
    #[test_case(0x00, UNKNOWN_CODE)]
    fn test_command_name(byte: u8, expected: &str) {
        assert_eq!(command_name(byte), expected);
    }

    #[test]
    fn test_ambiguous_entries_report_last_definition() {
        let tables = [
            &CODE_SET_1,
            &CODE_SET_1_EXTENDED,
            &CODE_SET_2,
            &CODE_SET_2_EXTENDED,
            &CODE_SET_3,
        ];
        for entry in AMBIGUOUS_ENTRIES {
            let table = tables
                .iter()
                .find(|table| table.id() == entry.table_id)
                .unwrap();
            assert_eq!(table.get(entry.byte), Some(entry.kept));
            assert!(table.iter().all(|(_, name)| name != entry.shadowed));
        }
    }

    #[test]
    fn test_code_set_2_extended_keys_do_not_use_code_set_1_table() {
        assert_eq!(CodeSet::Set2.extended_table().map(ByteNameTable::id), Some("cs2_e0"));
        assert_eq!(CodeSet::Set2.lookup_extended(0x75), "Up Arrow");
        assert_eq!(CodeSet::Set1.lookup_extended(0x75), UNKNOWN_CODE);
    }

    #[test]
    fn test_relabeled_entries_report_corrected_label() {
        let tables = [&CODE_SET_1_EXTENDED, &CODE_SET_2_EXTENDED];
        for entry in RELABELED_ENTRIES {
            let table = tables
                .iter()
                .find(|table| table.id() == entry.table_id)
                .unwrap();
            assert_eq!(table.get(entry.byte), Some(entry.label));
            assert!(table.iter().all(|(_, name)| name != entry.source));
        }
        assert_eq!(CodeSet::Set1.lookup_extended(0x37), "Print Screen");
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(CODE_SET_1.len(), 130);
        assert_eq!(CODE_SET_1_EXTENDED.len(), 40);
        assert_eq!(CODE_SET_2.len(), 112);
        assert_eq!(CODE_SET_2_EXTENDED.len(), 40);
        assert_eq!(CODE_SET_3.len(), 130);
        assert_eq!(COMMANDS.len(), 16);
    }
}
