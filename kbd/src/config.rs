// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use miette::{IntoDiagnostic, WrapErr};
use serde::{Deserialize, Serialize};

use crate::{CodeSet, ScanCodeInterpreter};

/// Options of a decoding session. Stored as JSON, eg: `{ "code_set": "cs1" }`. Missing
/// fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecoderConfig {
    pub code_set: CodeSet,
}

impl DecoderConfig {
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, has unknown fields, or names an
    /// unknown code set.
    pub fn try_from_json_str(json: &str) -> miette::Result<Self> {
        serde_json::from_str(json)
            .into_diagnostic()
            .wrap_err(ConfigErrorCouldNot::ParseJson)
    }

    /// # Errors
    ///
    /// Returns an error if the file can't be read, or its contents are not a valid
    /// config (see [`Self::try_from_json_str`]).
    #[tracing::instrument]
    pub fn try_load(path: &Path) -> miette::Result<Self> {
        let json = std::fs::read_to_string(path).into_diagnostic().wrap_err(
            ConfigErrorCouldNot::ReadFile {
                path: path.display().to_string(),
            },
        )?;
        let it = Self::try_from_json_str(&json)?;

        // % is Display, ? is Debug.
        tracing::debug!(message = "loaded decoder config", config = ?it);

        Ok(it)
    }

    /// A command line choice beats whatever the config file says.
    #[must_use]
    pub fn with_code_set_override(self, maybe_code_set: Option<CodeSet>) -> Self {
        match maybe_code_set {
            Some(code_set) => Self { code_set },
            None => self,
        }
    }

    #[must_use]
    pub fn new_interpreter(&self) -> ScanCodeInterpreter {
        ScanCodeInterpreter::new(self.code_set)
    }
}

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum ConfigErrorCouldNot {
    #[error("Could not read decoder config file: '{path}'")]
    ReadFile { path: String },

    #[error("Could not parse decoder config JSON")]
    #[diagnostic(help(r#"Expected eg: {{ "code_set": "cs2" }}"#))]
    ParseJson,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let it = DecoderConfig::try_from_json_str("{}").unwrap();
        assert_eq!(it, DecoderConfig::default());
        assert_eq!(it.code_set, CodeSet::Set2);
    }

    #[test]
    fn test_parse_code_set() {
        let it = DecoderConfig::try_from_json_str(r#"{ "code_set": "cs3" }"#).unwrap();
        assert_eq!(it.code_set, CodeSet::Set3);
        assert_eq!(it.new_interpreter().code_set(), CodeSet::Set3);
    }

    #[test]
    fn test_rejects_unknown_code_set() {
        assert!(DecoderConfig::try_from_json_str(r#"{ "code_set": "cs9" }"#).is_err());
    }

    #[test]
    fn test_rejects_unknown_field() {
        assert!(DecoderConfig::try_from_json_str(r#"{ "codeset": "cs1" }"#).is_err());
    }

    #[test]
    fn test_override() {
        let it = DecoderConfig {
            code_set: CodeSet::Set3,
        };
        assert_eq!(it.with_code_set_override(None).code_set, CodeSet::Set3);
        assert_eq!(
            it.with_code_set_override(Some(CodeSet::Set1)).code_set,
            CodeSet::Set1
        );
    }

    #[test]
    fn test_try_load_missing_file() {
        let result = DecoderConfig::try_load(Path::new("/definitely/not/here.json"));
        let report = result.unwrap_err();
        assert!(report.to_string().contains("Could not read decoder config file"));
    }

    #[test]
    fn test_try_load_from_file() {
        let path = std::env::temp_dir().join(format!("ps2_kbd_{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, r#"{ "code_set": "cs1" }"#).unwrap();
        let it = DecoderConfig::try_load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(it.code_set, CodeSet::Set1);
    }
}
