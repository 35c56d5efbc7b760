// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for pseudoloc

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A typed or binary resource value that is carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpaqueValue {
    /// Raw text of the `<value>` element (already unescaped).
    pub raw: String,
    /// Assembly-qualified type name, e.g. `System.Int32, mscorlib`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Serialization mime type for binary payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// The value of a resource entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ResourceValue {
    Text(String),
    Opaque(OpaqueValue),
}

impl ResourceValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResourceValue::Text(text) => Some(text),
            ResourceValue::Opaque(_) => None,
        }
    }
}

/// One named resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub name: String,
    pub value: ResourceValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ResourceEntry {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: ResourceValue::Text(value.into()),
            comment: None,
        }
    }

    pub fn opaque(name: impl Into<String>, value: OpaqueValue) -> Self {
        Self {
            name: name.into(),
            value: ResourceValue::Opaque(value),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// What happened to a single string entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryAction {
    /// The value was a culture name and now holds the pseudo-locale.
    LocaleReplaced,
    /// The value was pseudo-translated.
    Translated,
    /// Non-string value, left alone.
    PassedThrough,
}

/// Per-file entry counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryStatistics {
    pub entries: usize,
    pub strings_translated: usize,
    pub locales_replaced: usize,
    pub passthrough: usize,
}

impl EntryStatistics {
    pub fn record(&mut self, action: EntryAction) {
        self.entries += 1;
        match action {
            EntryAction::LocaleReplaced => self.locales_replaced += 1,
            EntryAction::Translated => self.strings_translated += 1,
            EntryAction::PassedThrough => self.passthrough += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Generated,
    Skipped,
    Failed,
}

/// Result of processing one input resource file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    pub input: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub status: FileStatus,
    /// Culture derived from the file name, when the file is locale-specific.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,
    #[serde(flatten)]
    pub statistics: EntryStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn generated(input: PathBuf, output: PathBuf, statistics: EntryStatistics) -> Self {
        Self {
            input,
            output: Some(output),
            status: FileStatus::Generated,
            culture: None,
            statistics,
            error: None,
        }
    }

    pub fn skipped(input: PathBuf, culture: String) -> Self {
        Self {
            input,
            output: None,
            status: FileStatus::Skipped,
            culture: Some(culture),
            statistics: EntryStatistics::default(),
            error: None,
        }
    }

    pub fn failed(input: PathBuf, error: String) -> Self {
        Self {
            input,
            output: None,
            status: FileStatus::Failed,
            culture: None,
            statistics: EntryStatistics::default(),
            error: Some(error),
        }
    }
}

/// Complete batch report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub created_at: String,
    pub pseudo_locale: String,
    pub files_seen: usize,
    pub files_generated: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
    pub results: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        self.files_failed > 0
    }
}
