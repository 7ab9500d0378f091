// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use ps2_kbd::CodeSet;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "ps2dec")]
#[command(about = "⌨️ Decode a PS/2 keyboard byte trace into key and command events")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nProvide a trace file with one `<direction> <byte> <start> <end>` record per line, or pipe it to stdin.\nUSAGE 📓:\n  ps2dec [\x1b[32mtrace file\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    /// Trace to decode. Reads stdin when absent.
    #[arg(name = "trace file")]
    pub maybe_trace_file: Option<PathBuf>,

    #[command(flatten)]
    pub decoder_options: DecoderOption,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct DecoderOption {
    #[arg(
        long,
        short = 'c',
        help = "Scan code set the keyboard uses: cs1, cs2, or cs3 [default: cs2, or the config file]"
    )]
    pub code_set: Option<CodeSet>,

    #[arg(long, help = "JSON decoder config file, eg: { \"code_set\": \"cs1\" }")]
    pub config: Option<PathBuf>,

    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(
        long,
        help = "Stop at the first malformed trace line instead of skipping it"
    )]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log debug output to stderr and a file named `ps2dec_log.txt`."
    )]
    pub enable_logging: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `<start>-<end> <category> <text>` per event.
    #[default]
    Text,
    /// One JSON annotation object per line.
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_verify_cli() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_defaults() {
        let it = CLIArg::try_parse_from(["ps2dec"]).unwrap();
        assert_eq!(it.maybe_trace_file, None);
        assert_eq!(it.decoder_options.code_set, None);
        assert_eq!(it.decoder_options.format, OutputFormat::Text);
        assert!(!it.decoder_options.strict);
        assert!(!it.global_options.enable_logging);
    }

    #[test]
    fn test_all_options() {
        let it = CLIArg::try_parse_from([
            "ps2dec", "trace.txt", "-c", "cs1", "--format", "json", "--strict", "-l",
        ])
        .unwrap();
        assert_eq!(it.maybe_trace_file, Some(PathBuf::from("trace.txt")));
        assert_eq!(it.decoder_options.code_set, Some(CodeSet::Set1));
        assert_eq!(it.decoder_options.format, OutputFormat::Json);
        assert!(it.decoder_options.strict);
        assert!(it.global_options.enable_logging);
    }

    #[test_case("cs1", CodeSet::Set1)]
    #[test_case("CS2", CodeSet::Set2)]
    #[test_case("cs3", CodeSet::Set3)]
    fn test_code_set_value(value: &str, expected: CodeSet) {
        let it = CLIArg::try_parse_from(["ps2dec", "--code-set", value]).unwrap();
        assert_eq!(it.decoder_options.code_set, Some(expected));
    }

    #[test]
    fn test_rejects_unknown_code_set() {
        assert!(CLIArg::try_parse_from(["ps2dec", "--code-set", "cs4"]).is_err());
    }
}
