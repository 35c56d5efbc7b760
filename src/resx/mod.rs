// SPDX-License-Identifier: PMPL-1.0-or-later

//! `.resx` resource container support.
//!
//! Reads and writes the XML resource format used by .NET projects:
//! `<resheader>` metadata, `<assembly>` aliases, and `<data>` nodes carrying
//! a `<value>` and optional `<comment>`. Untyped data nodes are strings;
//! typed or binary nodes are kept as opaque payloads and written back
//! unchanged.

mod document;
mod reader;
mod writer;

pub use document::{default_headers, AssemblyRef, ResHeader, ResxDocument, RESMIMETYPE};
pub use reader::parse_str;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File extension of resource containers.
pub const RESX_EXTENSION: &str = "resx";

/// Decode raw file bytes: UTF-8 (BOM stripped) first, then BOM-sniffed
/// UTF-16, then Windows-1252.
pub fn decode_bytes(raw: &[u8]) -> Result<String> {
    let without_bom = raw.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(raw);
    if let Ok(text) = std::str::from_utf8(without_bom) {
        return Ok(text.to_string());
    }

    // decode() sniffs UTF-16 BOMs before falling back to the given encoding
    let (cow, _, had_errors) = encoding_rs::WINDOWS_1252.decode(raw);
    if had_errors {
        anyhow::bail!("neither UTF-8, UTF-16 nor Windows-1252 text");
    }
    Ok(cow.into_owned())
}

pub fn read_file(path: &Path) -> Result<ResxDocument> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let content = decode_bytes(&raw).with_context(|| format!("decoding {}", path.display()))?;
    parse_str(&content).with_context(|| format!("parsing resx {}", path.display()))
}

pub fn write_file(document: &ResxDocument, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }
    let xml = document.to_xml_string()?;
    fs::write(path, xml).with_context(|| format!("writing {}", path.display()))
}
