// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Code set 1 (XT) tables.
//!
//! Only make codes are listed. A break code is the make code with bit 7 set, so the
//! interpreter masks it off with `0x7F` before looking it up here. The three entries
//! above `0x7F` are the controller status bytes. Only `0xAA` is ever looked up as is;
//! `0xFC` and `0xFF` decode as breaks of `0x7C` and `0x7F`.

use super::ByteNameTable;

pub static CODE_SET_1: ByteNameTable = ByteNameTable::from_entries("cs1", &[
    (0x01, "Escape"),
    (0x02, "1"),
    (0x03, "2"),
    (0x04, "3"),
    (0x05, "4"),
    (0x06, "5"),
    (0x07, "6"),
    (0x08, "7"),
    (0x09, "8"),
    (0x0A, "9"),
    (0x0B, "0"),
    (0x0C, "- _"),
    (0x0D, "= +"),
    (0x0E, "Backspace"),
    (0x0F, "Tab"),
    (0x10, "q"),
    (0x11, "w"),
    (0x12, "e"),
    (0x13, "r"),
    (0x14, "t"),
    (0x15, "y"),
    (0x16, "u"),
    (0x17, "i"),
    (0x18, "o"),
    (0x19, "p"),
    (0x1A, "[ {"),
    (0x1B, "] }"),
    (0x1C, "Return"),
    (0x1D, "Left Control"),
    (0x1E, "a"),
    (0x1F, "s"),
    (0x20, "d"),
    (0x21, "f"),
    (0x22, "g"),
    (0x23, "h"),
    (0x24, "j"),
    (0x25, "k"),
    (0x26, "l"),
    (0x27, "; :"),
    (0x28, "' \""),
    (0x29, "` ~"),
    (0x2A, "Left Shift"),
    (0x2B, "\\"),
    (0x2C, "z"),
    (0x2D, "x"),
    (0x2E, "c"),
    (0x2F, "v"),
    (0x30, "b"),
    (0x31, "n"),
    (0x32, "m"),
    (0x33, ", <"),
    (0x34, ". >"),
    (0x35, "/ ?"),
    (0x36, "Right Shift"),
    (0x37, "Keypad *"),
    (0x38, "Left Alt"),
    (0x39, "Space"),
    (0x3A, "Caps Lock"),
    (0x3B, "F1"),
    (0x3C, "F2"),
    (0x3D, "F3"),
    (0x3E, "F4"),
    (0x3F, "F5"),
    (0x40, "F6"),
    (0x41, "F7"),
    (0x42, "F8"),
    (0x43, "F9"),
    (0x44, "F10"),
    (0x45, "Num Lock"),
    (0x46, "Scroll Lock"),
    (0x47, "Keypad 7 Home"),
    (0x48, "Keypad 8 Up"),
    (0x49, "Keypad 9 PageUp"),
    (0x4A, "Keypad -"),
    (0x4B, "Keypad 4 Left"),
    (0x4C, "Keypad 5"),
    (0x4D, "Keypad 6 Right"),
    (0x4E, "Keypad +"),
    (0x4F, "Keypad 1 End"),
    (0x50, "Keypad 2 Down"),
    (0x51, "Keypad 3 PageDn"),
    (0x52, "Keypad 0 Insert"),
    (0x53, "Keypad . Delete"),
    (0x54, "Unknown"),
    (0x55, "Unknown"),
    (0x56, "Europe 2"),
    (0x57, "F11"),
    (0x58, "F12"),
    (0x59, "Keypad ="),
    (0x5A, "Unknown"),
    (0x5B, "Unknown"),
    (0x5C, "PC9800 Keypad ,"),
    (0x5D, "Unknown"),
    (0x5E, "Unknown"),
    (0x5F, "Unknown"),
    (0x60, "Unknown"),
    (0x61, "Unknown"),
    (0x62, "Unknown"),
    (0x63, "Unknown"),
    (0x64, "F13"),
    (0x65, "F14"),
    (0x66, "F15"),
    (0x67, "F16"),
    (0x68, "F17"),
    (0x69, "F18"),
    (0x6A, "F19"),
    (0x6B, "F20"),
    (0x6C, "F21"),
    (0x6D, "F22"),
    (0x6E, "F23"),
    (0x6F, "Unknown"),
    (0x70, "Katakana/Hiragana"),
    (0x71, "Unknown"),
    (0x72, "Unknown"),
    (0x73, "ろ (Ro)"),
    (0x74, "Unknown"),
    (0x75, "Unknown"),
    (0x76, "F24 半角/全角"),
    (0x77, "ひらがな"),
    (0x78, "かたかな"),
    (0x79, "変換"),
    (0x7A, "Unknown"),
    (0x7B, "無変変"),
    (0x7C, "Unknown"),
    (0x7D, "¥ (Yen)"),
    (0x7E, "Keypad ,"),
    (0x7F, "Unknown"),
    (0xAA, "BAT OK"),
    (0xFC, "BAT NG"),
    (0xFF, "Overrun Error"),
]);

/// Keys sent as `E0 <code>`.
pub static CODE_SET_1_EXTENDED: ByteNameTable = ByteNameTable::from_entries("cs1_e0", &[
    (0x10, "Scan Previous Track"),
    (0x19, "Scan Next Track"),
    (0x1C, "Keypad Enter"),
    (0x1D, "Right Control"),
    (0x20, "Mute"),
    (0x21, "Calculator"),
    (0x22, "Play/ Pause"),
    (0x24, "Stop"),
    (0x2E, "Volume Down"),
    (0x30, "Volume Up"),
    (0x32, "WWW Home"),
    (0x35, "Keypad /"),
    // Relabeled, see `RELABELED_ENTRIES`.
    (0x37, "Print Screen"),
    (0x38, "Right Alt"),
    (0x46, "Break (Ctrl-Pause)"),
    (0x47, "Home"),
    (0x48, "Up Arrow"),
    (0x49, "Page Up"),
    (0x4B, "Left Arrow"),
    (0x4D, "Right Arrow"),
    (0x4F, "End"),
    (0x50, "Down Arrow"),
    (0x51, "Page Down"),
    (0x52, "Insert"),
    (0x53, "Delete"),
    (0x5B, "Left GUI"),
    (0x5C, "Right GUI"),
    (0x5D, "App"),
    // Redefined on the next line, see `AMBIGUOUS_ENTRIES`.
    (0x5E, "Keyboard Power"),
    (0x5E, "System Power"),
    (0x5F, "System Sleep"),
    (0x63, "System Wake"),
    (0x65, "WWW Search"),
    (0x66, "WWW Favorites"),
    (0x67, "WWW Refresh"),
    (0x68, "WWW Stop"),
    (0x69, "WWW Forward"),
    (0x6A, "WWW Back"),
    (0x6B, "My Computer"),
    (0x6C, "Mail"),
    (0x6D, "Media Select"),
]);
