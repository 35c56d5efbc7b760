// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-memory model of a `.resx` container.

use crate::types::ResourceEntry;
use serde::{Deserialize, Serialize};

pub const RESMIMETYPE: &str = "text/microsoft-resx";
pub const RESX_VERSION: &str = "2.0";
pub const RESX_READER: &str = "System.Resources.ResXResourceReader, System.Windows.Forms, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089";
pub const RESX_WRITER: &str = "System.Resources.ResXResourceWriter, System.Windows.Forms, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089";

/// A `<resheader>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResHeader {
    pub name: String,
    pub value: String,
}

impl ResHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An `<assembly>` alias declaration referenced by typed data nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub name: String,
}

/// Headers written when the source document declared none.
pub fn default_headers() -> Vec<ResHeader> {
    vec![
        ResHeader::new("resmimetype", RESMIMETYPE),
        ResHeader::new("version", RESX_VERSION),
        ResHeader::new("reader", RESX_READER),
        ResHeader::new("writer", RESX_WRITER),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResxDocument {
    /// Raw XML of the embedded `xsd:schema` block, if the source had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub headers: Vec<ResHeader>,
    pub assemblies: Vec<AssemblyRef>,
    pub entries: Vec<ResourceEntry>,
}

impl ResxDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document with the standard headers and the given entries.
    pub fn with_entries(entries: Vec<ResourceEntry>) -> Self {
        Self {
            schema: None,
            headers: default_headers(),
            assemblies: Vec::new(),
            entries,
        }
    }

    pub fn entry(&self, name: &str) -> Option<&ResourceEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|header| header.name == name)
            .map(|header| header.value.as_str())
    }
}
