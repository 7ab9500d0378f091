// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::ByteNameTable;

/// Host to keyboard command bytes. These are the same for every code set.
pub static COMMANDS: ByteNameTable = ByteNameTable::from_entries("cmd", &[
    (0xED, "Set Indicator"),
    (0xEE, "Echo"),
    (0xF0, "Select Scan Code"),
    (0xF2, "Read ID"),
    (0xF4, "Enable"),
    (0xF5, "Default Disable"),
    (0xF6, "Set Default"),
    (0xF7, "Set All Keys - Typematic"),
    (0xF8, "Set All Keys - Make/Break"),
    (0xF9, "Set All Keys - Make"),
    (0xFA, "Set All Keys - Typematic/Make/Break"),
    (0xFB, "Set Key Type - Typematic"),
    (0xFC, "Set Key Type - Make/Break"),
    (0xFD, "Set Key Type - Make"),
    (0xFE, "Resend"),
    (0xFF, "Reset"),
]);
