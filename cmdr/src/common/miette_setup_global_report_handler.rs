// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pretty error reports for `main() -> miette::Result<_>`.
//!
//! The hook is lazy: it only runs when a report is actually displayed, so the terminal
//! width is measured just before the output is generated, and never if no error
//! occurs.

use miette::MietteHandlerOpts;
use tracing::debug;

pub const REPORT_FOOTER: &str =
    "Run with --enable-logging and check ps2dec_log.txt for the decoder trace.";

/// The [`miette::ErrorHook`] is lazily evaluated.
pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = usize::from(
                crossterm::terminal::size()
                    .map(|(columns, _rows)| columns)
                    .unwrap_or(80),
            );
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(footer.to_string())
                .build(),
        )
    }))
    .ok();
}
