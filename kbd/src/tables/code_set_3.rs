// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Code set 3 (terminal) table. Every key has a single byte code, so there is no
//! extended table.

use super::ByteNameTable;

pub static CODE_SET_3: ByteNameTable = ByteNameTable::from_entries("cs3", &[
    (0x01, "LGui"),
    (0x03, "Vol Down"),
    (0x04, "Vol Up"),
    (0x05, "Mute"),
    (0x06, "HENKAN"),
    (0x07, "F1"),
    (0x08, "F13"),
    (0x09, "RGui"),
    (0x0A, "App"),
    (0x0B, "MHENKAN"),
    (0x0C, "Pause"),
    (0x0D, "Tab"),
    (0x0E, "`"),
    (0x0F, "F2"),
    (0x10, "F14"),
    (0x11, "Ctrl"),
    (0x12, "LShift"),
    (0x13, "ISO \\"),
    (0x14, "CapsL"),
    (0x15, "Q"),
    (0x16, "1"),
    (0x17, "F3"),
    (0x18, "F15"),
    (0x19, "Alt"),
    (0x1A, "Z"),
    (0x1B, "S"),
    (0x1C, "A"),
    (0x1D, "W"),
    (0x1E, "2"),
    (0x1F, "F4"),
    (0x20, "F16"),
    (0x21, "C"),
    (0x22, "X"),
    (0x23, "D"),
    (0x24, "E"),
    (0x25, "4"),
    (0x26, "3"),
    (0x27, "F5"),
    (0x28, "F17"),
    (0x29, "Space"),
    (0x2A, "V"),
    (0x2B, "F"),
    (0x2C, "T"),
    (0x2D, "R"),
    (0x2E, "5"),
    (0x2F, "F6"),
    (0x30, "F18"),
    (0x31, "N"),
    (0x32, "B"),
    (0x33, "H"),
    (0x34, "G"),
    (0x35, "Y"),
    (0x36, "6"),
    (0x37, "F7"),
    (0x38, "F19"),
    (0x39, "Alt"),
    (0x3A, "M"),
    (0x3B, "J"),
    (0x3C, "U"),
    (0x3D, "7"),
    (0x3E, "8"),
    (0x3F, "F8"),
    (0x40, "F20"),
    (0x41, ","),
    (0x42, "K"),
    (0x43, "I"),
    (0x44, "O"),
    (0x45, "0"),
    (0x46, "9"),
    (0x47, "F9"),
    (0x48, "F21"),
    (0x49, ","),
    (0x4A, "/"),
    (0x4B, "L"),
    (0x4C, ";"),
    (0x4D, "P"),
    (0x4E, "-"),
    (0x4F, "F10"),
    (0x50, "F22"),
    (0x51, "RO"),
    (0x52, "'"),
    (0x53, "ISO #"),
    (0x54, "["),
    (0x55, "="),
    (0x56, "F11"),
    (0x57, "F23"),
    (0x58, "Ctrl"),
    (0x59, "RShift"),
    (0x5A, "Ret"),
    (0x5B, "]"),
    (0x5C, "\\"),
    (0x5D, "JPY"),
    (0x5E, "F12"),
    (0x5F, "F24"),
    (0x60, "Down"),
    (0x61, "Left"),
    (0x62, "Home"),
    (0x63, "Up"),
    (0x64, "End"),
    (0x65, "Insert"),
    (0x66, "BS"),
    (0x67, "/"),
    (0x68, ","),
    (0x69, "1"),
    (0x6A, "Rig"),
    (0x6B, "P4"),
    (0x6C, "P7"),
    (0x6D, "Delete"),
    (0x6E, "Page Up"),
    (0x6F, "Page Down"),
    (0x70, "P0"),
    (0x71, "P."),
    (0x72, "P2"),
    (0x73, "P5"),
    (0x74, "P6"),
    (0x75, "P8"),
    (0x76, "Esc"),
    (0x77, "Num Lock"),
    (0x78, "P="),
    (0x79, "Enter"),
    (0x7A, "P3"),
    (0x7B, "P-"),
    (0x7C, "P+"),
    (0x7D, "P9"),
    (0x7E, "Scroll Lock"),
    (0x83, "Print Screen"),
    (0x84, "P*"),
    (0x85, "P,"),
    (0x86, "P="),
    (0x87, "KANA"),
]);
