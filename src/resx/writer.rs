// SPDX-License-Identifier: PMPL-1.0-or-later

//! `.resx` serialization.

use super::document::{default_headers, ResxDocument};
use crate::types::{ResourceEntry, ResourceValue};
use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

type XmlWriter = Writer<Vec<u8>>;

impl ResxDocument {
    /// Render the document as indented `.resx` XML.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        writer.write_event(Event::Start(BytesStart::new("root")))?;

        if let Some(schema) = &self.schema {
            let inner = writer.get_mut();
            inner.write_all(b"\n  ")?;
            inner.write_all(schema.trim().as_bytes())?;
        }

        let defaults;
        let headers = if self.headers.is_empty() {
            defaults = default_headers();
            &defaults
        } else {
            &self.headers
        };
        for header in headers {
            let mut start = BytesStart::new("resheader");
            start.push_attribute(("name", header.name.as_str()));
            writer.write_event(Event::Start(start))?;
            write_text_element(&mut writer, "value", &header.value)?;
            writer.write_event(Event::End(BytesEnd::new("resheader")))?;
        }

        for assembly in &self.assemblies {
            let mut element = BytesStart::new("assembly");
            if let Some(alias) = &assembly.alias {
                element.push_attribute(("alias", alias.as_str()));
            }
            element.push_attribute(("name", assembly.name.as_str()));
            writer.write_event(Event::Empty(element))?;
        }

        for entry in &self.entries {
            write_entry(&mut writer, entry)
                .with_context(|| format!("writing resource {}", entry.name))?;
        }

        writer.write_event(Event::End(BytesEnd::new("root")))?;
        writer.get_mut().write_all(b"\n")?;

        String::from_utf8(writer.into_inner()).context("generated resx is not valid utf-8")
    }
}

fn write_entry(writer: &mut XmlWriter, entry: &ResourceEntry) -> Result<()> {
    let mut start = BytesStart::new("data");
    start.push_attribute(("name", entry.name.as_str()));

    let raw = match &entry.value {
        ResourceValue::Text(text) => {
            start.push_attribute(("xml:space", "preserve"));
            text.as_str()
        }
        ResourceValue::Opaque(opaque) => {
            if let Some(type_name) = &opaque.type_name {
                start.push_attribute(("type", type_name.as_str()));
            }
            if let Some(mime_type) = &opaque.mime_type {
                start.push_attribute(("mimetype", mime_type.as_str()));
            }
            opaque.raw.as_str()
        }
    };

    writer.write_event(Event::Start(start))?;
    write_text_element(writer, "value", raw)?;
    if let Some(comment) = &entry.comment {
        write_text_element(writer, "comment", comment)?;
    }
    writer.write_event(Event::End(BytesEnd::new("data")))?;
    Ok(())
}

// The text event is written even when empty so the indenter keeps the
// closing tag on the same line.
fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
