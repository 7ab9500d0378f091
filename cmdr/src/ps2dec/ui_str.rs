// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use super::DecodeSummary;

#[must_use]
pub fn could_not_open_trace_file(path: &Path) -> String {
    format!("Could not open trace file: '{}'", path.display())
}

#[must_use]
pub fn skipped_lines_warning(summary: &DecodeSummary) -> Option<String> {
    (summary.skipped_lines > 0).then(|| {
        format!(
            "Skipped {} malformed trace line(s). Run with --strict to stop at the first one.",
            summary.skipped_lines
        )
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_skipped_lines_warning() {
        assert_eq!(skipped_lines_warning(&DecodeSummary::default()), None);
        let summary = DecodeSummary {
            skipped_lines: 2,
            ..Default::default()
        };
        assert!(
            skipped_lines_warning(&summary)
                .unwrap()
                .starts_with("Skipped 2 malformed")
        );
    }
}
