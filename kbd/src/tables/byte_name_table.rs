// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter, Result as FmtResult};

/// Name reported for any byte a table has no entry for.
pub const UNKNOWN_CODE: &str = "???";

const TABLE_SIZE: usize = 256;

/// A fixed, read-only `byte -> name` table with one slot per possible byte value.
///
/// Built at compile time by [`ByteNameTable::from_entries`] from a list of
/// `(byte, name)` pairs. When a byte appears more than once in that list the **last**
/// entry wins; see [`AmbiguousEntry`] for the affected bytes.
pub struct ByteNameTable {
    id: &'static str,
    slots: [Option<&'static str>; TABLE_SIZE],
}

impl ByteNameTable {
    #[must_use]
    pub const fn from_entries(id: &'static str, entries: &[(u8, &'static str)]) -> Self {
        let mut slots = [None; TABLE_SIZE];
        let mut index = 0;
        while index < entries.len() {
            let (byte, name) = entries[index];
            slots[byte as usize] = Some(name);
            index += 1;
        }
        Self { id, slots }
    }

    /// Short identifier of the table, eg: `cs2` or `cs2_e0`.
    #[must_use]
    pub const fn id(&self) -> &'static str { self.id }

    /// Partial lookup, `None` for unmapped bytes.
    #[must_use]
    pub const fn get(&self, byte: u8) -> Option<&'static str> { self.slots[byte as usize] }

    /// Total lookup. Unmapped bytes yield [`UNKNOWN_CODE`].
    #[must_use]
    pub const fn lookup(&self, byte: u8) -> &'static str {
        match self.get(byte) {
            Some(name) => name,
            None => UNKNOWN_CODE,
        }
    }

    /// Number of mapped bytes.
    #[must_use]
    pub fn len(&self) -> usize { self.slots.iter().filter(|it| it.is_some()).count() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Mapped entries in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &'static str)> + '_ {
        (0..=u8::MAX).filter_map(|byte| self.get(byte).map(|name| (byte, name)))
    }
}

impl Debug for ByteNameTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ByteNameTable")
            .field("id", &self.id)
            .field("len", &self.len())
            .finish()
    }
}

/// A byte that the historical key tables define twice with different labels. The
/// later definition is the one the table reports. Neither label is known to be the
/// intended one; they are listed so that callers and tests can see the ambiguity
/// instead of it being resolved silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbiguousEntry {
    pub table_id: &'static str,
    pub byte: u8,
    /// What the table reports (last definition).
    pub kept: &'static str,
    /// The earlier definition that is overridden.
    pub shadowed: &'static str,
}

/// A label in the historical key tables that is garbled beyond use and has been
/// replaced in the table. `source` is the label as it was originally written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelabeledEntry {
    pub table_id: &'static str,
    pub byte: u8,
    /// What the table reports.
    pub label: &'static str,
    pub source: &'static str,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static FIXTURE: ByteNameTable =
        ByteNameTable::from_entries("fixture", &[(0x01, "one"), (0x10, "first"), (0x10, "second")]);

    #[test]
    fn test_lookup_is_total() {
        for byte in 0..=u8::MAX {
            let name = FIXTURE.lookup(byte);
            assert!(!name.is_empty());
        }
        assert_eq!(FIXTURE.lookup(0x02), UNKNOWN_CODE);
    }

    #[test]
    fn test_last_definition_wins() {
        assert_eq!(FIXTURE.get(0x10), Some("second"));
        assert_eq!(FIXTURE.len(), 2);
    }

    #[test]
    fn test_iter_is_sorted_by_byte() {
        let entries: Vec<_> = FIXTURE.iter().collect();
        assert_eq!(entries, vec![(0x01, "one"), (0x10, "second")]);
    }
}
