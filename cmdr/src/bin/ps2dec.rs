// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use ps2_kbd_cmdr::{REPORT_FOOTER,
                   ps2dec::{CLIArg, run_ps2dec, tracing_config, ui_str},
                   setup_default_miette_global_report_handler};

#[tokio::main]
async fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(REPORT_FOOTER);

    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    tracing_config(&cli_arg.global_options).install_global()?;
    if enable_logging {
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let result = run_ps2dec(cli_arg).await;

    match &result {
        Ok(summary) => {
            if let Some(warning) = ui_str::skipped_lines_warning(summary) {
                eprintln!("{warning}");
            }
        }
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not run ps2dec due to the following problem",
                error = ?error
            );
        }
    }

    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    result.map(|_| ())
}
