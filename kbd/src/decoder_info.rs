// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Registration metadata for hosting this decoder in a protocol analyzer. The option
//! list mirrors [`crate::CodeSet`].

pub const DECODER_ID: &str = "ibmpc_kbd";
pub const DECODER_NAME: &str = "IBM keycode";
pub const DECODER_LONG_NAME: &str = "IBM PC AT/XT keyboard";
pub const DECODER_DESCRIPTION: &str = "IBM PC AT/XT keyboard/mouse interface.";
pub const DECODER_LICENSE: &str = "gplv2+";
/// The byte framing decoder this one stacks on.
pub const DECODER_INPUT: &str = "ibmpc_atxt";
pub const DECODER_TAGS: &[&str] = &["PC"];

pub const CODE_SET_OPTION_ID: &str = "cs";
pub const CODE_SET_OPTION_DESCRIPTION: &str = "Code Set";
pub const CODE_SET_OPTION_DEFAULT: &str = "cs2";
pub const CODE_SET_OPTION_VALUES: &[&str] = &["cs1", "cs2", "cs3"];

/// Annotation class and row the events are drawn on.
pub const ANNOTATION_CLASS: (&str, &str) = ("data", "Data");
pub const ANNOTATION_ROW: (&str, &str) = ("code", "Code");

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::CodeSet;

    #[test]
    fn test_option_values_match_code_sets() {
        let values: Vec<String> = CodeSet::iter().map(|it| it.to_string()).collect();
        assert_eq!(values, CODE_SET_OPTION_VALUES);
        assert_eq!(CodeSet::default().as_ref(), CODE_SET_OPTION_DEFAULT);
        for value in CODE_SET_OPTION_VALUES {
            assert!(value.parse::<CodeSet>().is_ok());
        }
    }
}
