// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Code set 2 (AT) tables. This is the set almost every PS/2 keyboard powers up in,
//! and the one where a break is signaled by an `F0` prefix.

use super::ByteNameTable;

pub static CODE_SET_2: ByteNameTable = ByteNameTable::from_entries("cs2", &[
    (0x00, "Overrun Error"),
    (0x01, "F9"),
    (0x03, "F5"),
    (0x04, "F3"),
    (0x05, "F1"),
    (0x06, "F2"),
    (0x07, "F12"),
    (0x08, "F13"),
    (0x09, "F10"),
    (0x0A, "F8"),
    (0x0B, "F6"),
    (0x0C, "F4"),
    (0x0D, "Tab"),
    (0x0E, "` ~"),
    (0x0F, "Keypad ="),
    (0x10, "F14"),
    (0x11, "Left Alt"),
    (0x12, "Left Shift"),
    (0x13, "Katakana/Hiragana"),
    (0x14, "Left Control"),
    (0x15, "q Q"),
    (0x16, "1 !"),
    (0x18, "F15"),
    (0x1A, "z Z"),
    (0x1B, "s S"),
    (0x1C, "a A"),
    (0x1D, "w W"),
    (0x1E, "2 @"),
    (0x20, "F16"),
    (0x21, "c C"),
    (0x22, "x X"),
    (0x23, "d D"),
    (0x24, "e E"),
    (0x25, "4 $"),
    (0x26, "3 #"),
    (0x27, "PC9800 Keypad ,"),
    (0x28, "F17"),
    (0x29, "Space"),
    (0x2A, "v V"),
    (0x2B, "f F"),
    (0x2C, "t T"),
    (0x2D, "r R"),
    (0x2E, "5 %"),
    (0x30, "F18"),
    (0x31, "n N"),
    (0x32, "b B"),
    (0x33, "h H"),
    (0x34, "g G"),
    (0x35, "y Y"),
    (0x36, "6 ^"),
    (0x38, "F19"),
    (0x3A, "m M"),
    (0x3B, "j J"),
    (0x3C, "u U"),
    (0x3D, "7 &"),
    (0x3E, "8 *"),
    (0x40, "F20"),
    (0x41, ", <"),
    (0x42, "k K"),
    (0x43, "i I"),
    (0x44, "o O"),
    (0x45, "0 )"),
    (0x46, "9 ("),
    (0x48, "F21"),
    (0x49, ". >"),
    (0x4A, "/ ?"),
    (0x4B, "l L"),
    (0x4C, "; :"),
    (0x4D, "p P"),
    (0x4E, "- _"),
    (0x50, "F22"),
    (0x51, "ろ"),
    (0x52, "' \""),
    (0x54, "[ {"),
    (0x55, "= +"),
    (0x57, "F23"),
    (0x58, "Caps Lock"),
    (0x59, "Right Shift"),
    (0x5A, "Return"),
    (0x5B, "] }"),
    (0x5D, "\\"),
    // Redefined on the next line, see `AMBIGUOUS_ENTRIES`.
    (0x5F, "F24"),
    (0x5F, "半角/全角"),
    (0x61, "Europe 2"),
    (0x62, "ひらがな"),
    (0x63, "かたかな"),
    (0x64, "変換"),
    (0x66, "Backspace"),
    (0x67, "無変変"),
    (0x69, "Keypad 1 End"),
    (0x6A, "¥(Yen)"),
    (0x6B, "Keypad 4 Left"),
    (0x6C, "Keypad 7 Home"),
    (0x6D, "Keypad ,"),
    (0x70, "Keypad 0 Insert"),
    (0x71, "Keypad . Delete"),
    (0x72, "Keypad 2 Down"),
    (0x73, "Keypad 5"),
    (0x74, "Keypad 6 Right"),
    (0x75, "Keypad 8 Up"),
    (0x76, "Escape"),
    (0x77, "Num Lock"),
    (0x78, "F11"),
    (0x79, "Keypad +"),
    (0x7A, "Keypad 3 PageDn"),
    (0x7B, "Keypad -"),
    (0x7C, "Keypad *"),
    (0x7D, "Keypad 9 PageUp"),
    (0x7E, "Scroll Lock"),
    (0x83, "F7"),
    (0xF1, "한한(Hanja)"),
    (0xF2, "한옝(Hangul/English)"),
    (0xFC, "POST Fail"),
]);

/// Keys sent as `E0 <code>` (make) or `E0 F0 <code>` (break).
pub static CODE_SET_2_EXTENDED: ByteNameTable = ByteNameTable::from_entries("cs2_e0", &[
    (0x10, "WWW Search"),
    (0x11, "Right Alt"),
    (0x14, "Right Control"),
    (0x15, "Scan Previous Track"),
    (0x18, "WWW Favorites"),
    (0x1F, "Left GUI"),
    (0x20, "WWW Refresh"),
    (0x21, "Volume Down"),
    (0x23, "Mute"),
    (0x27, "Right GUI"),
    (0x28, "WWW Stop"),
    (0x2B, "Calculator"),
    (0x2F, "App"),
    (0x30, "WWW Forward"),
    (0x32, "Volume Up"),
    (0x34, "Play/ Pause"),
    // Redefined on the next line, see `AMBIGUOUS_ENTRIES`.
    (0x37, "Keyboard Power"),
    (0x37, "System Power"),
    (0x38, "WWW Back"),
    (0x3A, "WWW Home"),
    (0x3B, "Stop"),
    (0x3F, "System Sleep"),
    (0x40, "My Computer"),
    (0x48, "Mail"),
    (0x4A, "Keypad /"),
    (0x4D, "Scan Next Track"),
    (0x50, "Media Select"),
    (0x5A, "Keypad Enter"),
    (0x5E, "System Wake"),
    (0x69, "End"),
    (0x6B, "Left Arrow"),
    (0x6C, "Home"),
    (0x70, "Insert"),
    (0x71, "Delete"),
    (0x72, "Down Arrow"),
    (0x74, "Right Arrow"),
    (0x75, "Up Arrow"),
    (0x7A, "Page Down"),
    (0x7C, "Print Screen"),
    (0x7D, "Page Up"),
    (0x7E, "Break (Ctrl-Pause)"),
]);
