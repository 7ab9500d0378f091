// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use miette::{IntoDiagnostic, WrapErr};
use ps2_kbd::{Annotation, DecoderConfig, DisplayPreference, TracingConfig,
              parse_trace_line};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing_core::LevelFilter;

use super::{CLIArg, GlobalOption, OutputFormat, ui_str};

/// How a decode run went. Returned so the caller can report skipped lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeSummary {
    pub records: usize,
    pub events: usize,
    pub skipped_lines: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub format: OutputFormat,
    pub strict: bool,
}

/// Decoded events go to stdout, so logs never do. With `--enable-logging` everything
/// from DEBUG up goes to `ps2dec_log.txt` and stderr, otherwise only warnings reach
/// stderr.
#[must_use]
pub fn tracing_config(global_options: &GlobalOption) -> TracingConfig {
    if global_options.enable_logging {
        TracingConfig::new_file_and_display(None, DisplayPreference::Stderr)
    } else {
        TracingConfig::new_display(DisplayPreference::Stderr)
            .with_level_filter(LevelFilter::WARN)
    }
}

/// Resolve the decoder config from the CLI, open the input, and decode it to stdout.
///
/// # Errors
///
/// Returns an error if the config or trace file can't be read, writing to stdout fails,
/// or (with `--strict`) a trace line is malformed.
pub async fn run_ps2dec(cli_arg: CLIArg) -> miette::Result<DecodeSummary> {
    let decoder_options = cli_arg.decoder_options;

    let config = match &decoder_options.config {
        Some(path) => DecoderConfig::try_load(path)?,
        None => DecoderConfig::default(),
    }
    .with_code_set_override(decoder_options.code_set);

    let options = DecodeOptions {
        format: decoder_options.format,
        strict: decoder_options.strict,
    };

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "start decoding",
        code_set = %config.code_set,
        options = ?options,
        trace_file = ?cli_arg.maybe_trace_file
    );

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();

    match cli_arg.maybe_trace_file {
        Some(path) => {
            let file = tokio::fs::File::open(&path)
                .await
                .into_diagnostic()
                .wrap_err(ui_str::could_not_open_trace_file(&path))?;
            decode_trace(BufReader::new(file), &mut writer, config, options).await
        }
        None => {
            decode_trace(BufReader::new(tokio::io::stdin()), &mut writer, config, options)
                .await
        }
    }
}

/// Decode every record of `reader` with one interpreter and write an annotation line
/// per emitted event to `writer`.
///
/// Malformed lines are logged and skipped, so the rest of the capture still decodes,
/// unless `options.strict` is set.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or (strict only) a line is malformed.
pub async fn decode_trace<R, W>(
    reader: R,
    writer: &mut W,
    config: DecoderConfig,
    options: DecodeOptions,
) -> miette::Result<DecodeSummary>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut interpreter = config.new_interpreter();
    let mut summary = DecodeSummary::default();
    let mut lines = reader.lines();
    let mut line_number = 0;

    while let Some(line) = lines.next_line().await.into_diagnostic()? {
        line_number += 1;

        let maybe_byte_event = match parse_trace_line(line_number, &line) {
            Ok(it) => it,
            Err(error) if options.strict => return Err(error.into()),
            Err(error) => {
                // % is Display, ? is Debug.
                tracing::warn!(message = "skipping malformed trace line", error = %error);
                summary.skipped_lines += 1;
                continue;
            }
        };

        let Some(byte_event) = maybe_byte_event else {
            continue;
        };
        summary.records += 1;

        if let Some(spanned_event) = interpreter.decode_event(byte_event) {
            summary.events += 1;
            write_annotation(writer, &Annotation::from(spanned_event), options.format)?;
        }
    }

    writer.flush().into_diagnostic()?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "done decoding", summary = ?summary);

    Ok(summary)
}

/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_annotation<W: Write>(
    writer: &mut W,
    annotation: &Annotation,
    format: OutputFormat,
) -> miette::Result<()> {
    match format {
        OutputFormat::Text => writeln!(
            writer,
            "{}-{} {:<14} {}",
            annotation.start,
            annotation.end,
            annotation.category.as_ref(),
            annotation.texts.long
        )
        .into_diagnostic(),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, annotation).into_diagnostic()?;
            writeln!(writer).into_diagnostic()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ps2_kbd::{CodeSet, DEFAULT_LOG_FILE_NAME, WriterConfig};

    use super::*;

    const TRACE: &str = "\
# direction byte start end
H->D FF 0 10
D->H FA 11 20
D->H AA 21 30
D->H 1C 31 40
D->H F0 41 50
D->H 1C 51 60

D->H F0 61 70
D->H E0 71 80
D->H 75 81 90
";

    const TEXT_OPTIONS: DecodeOptions = DecodeOptions {
        format: OutputFormat::Text,
        strict: false,
    };

    async fn decode_to_string(
        input: &str,
        config: DecoderConfig,
        options: DecodeOptions,
    ) -> miette::Result<(DecodeSummary, String)> {
        let mut output = Vec::new();
        let summary = decode_trace(input.as_bytes(), &mut output, config, options).await?;
        Ok((summary, String::from_utf8(output).unwrap()))
    }

    #[test]
    fn test_tracing_config_with_logging_writes_file_and_stderr() {
        let it = tracing_config(&GlobalOption {
            enable_logging: true,
        });
        assert_eq!(
            it.get_writer_config(),
            WriterConfig::DisplayAndFile(
                DisplayPreference::Stderr,
                DEFAULT_LOG_FILE_NAME.to_string()
            )
        );
        assert_eq!(it.get_level_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_tracing_config_without_logging_only_warns_on_stderr() {
        let it = tracing_config(&GlobalOption {
            enable_logging: false,
        });
        assert_eq!(
            it.get_writer_config(),
            WriterConfig::Display(DisplayPreference::Stderr)
        );
        assert_eq!(it.get_level_filter(), LevelFilter::WARN);
    }

    #[tokio::test]
    async fn test_decode_trace_text() {
        let (summary, output) =
            decode_to_string(TRACE, DecoderConfig::default(), TEXT_OPTIONS)
                .await
                .unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "0-10 command        Cmd: Reset",
                "11-20 ack            Res: ACK",
                "21-30 self-test-ok   BAT OK",
                "31-40 key-down       ↓: a A",
                "51-60 key-up         ↑: a A",
                "81-90 key-up         ↑: Up Arrow",
            ]
        );
        assert_eq!(
            summary,
            DecodeSummary {
                records: 9,
                events: 6,
                skipped_lines: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_decode_trace_code_set_1() {
        let input = "D->H 1C 0 1\nD->H 9C 2 3\nD->H AA 4 5\n";
        let config = DecoderConfig {
            code_set: CodeSet::Set1,
        };
        let (_, output) = decode_to_string(input, config, TEXT_OPTIONS).await.unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "0-1 key-down       ↓: Return",
                "2-3 key-up         ↑: Return",
                "4-5 key-down       ↓: BAT OK",
            ]
        );
    }

    #[tokio::test]
    async fn test_decode_trace_json() {
        let options = DecodeOptions {
            format: OutputFormat::Json,
            strict: false,
        };
        let (_, output) =
            decode_to_string("D->H E0 1 2\nD->H 75 3 4\n", DecoderConfig::default(), options)
                .await
                .unwrap();
        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(value["category"], "key-down");
        assert_eq!(value["start"], 3);
        assert_eq!(value["texts"]["long"], "↓: Up Arrow");
    }

    #[tokio::test]
    async fn test_malformed_lines_are_skipped() {
        let input = "D->H F0 0 1\nbogus\nD->H 1C 2 3\n";
        let (summary, output) =
            decode_to_string(input, DecoderConfig::default(), TEXT_OPTIONS)
                .await
                .unwrap();
        assert_eq!(summary.skipped_lines, 1);
        assert_eq!(output.trim(), "2-3 key-up         ↑: a A");
    }

    #[tokio::test]
    async fn test_strict_stops_at_malformed_line() {
        let options = DecodeOptions {
            format: OutputFormat::Text,
            strict: true,
        };
        let result =
            decode_to_string("D->H 1C 0 1\nD->H ZZ 2 3\n", DecoderConfig::default(), options)
                .await;
        let report = result.unwrap_err();
        assert!(report.to_string().contains("Line 2"));
    }
}
