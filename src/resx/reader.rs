// SPDX-License-Identifier: PMPL-1.0-or-later

//! `.resx` parsing on top of quick-xml's pull reader.

use super::document::{AssemblyRef, ResHeader, ResxDocument};
use crate::types::{OpaqueValue, ResourceEntry, ResourceValue};
use anyhow::{anyhow, bail, Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::collections::HashMap;
use std::io::Cursor;

/// `<value>` and `<comment>` children of a data or header element.
#[derive(Debug, Default)]
struct Body {
    value: String,
    comment: Option<String>,
}

#[derive(Clone, Copy)]
enum Field {
    Value,
    Comment,
}

/// Parse the text of a `.resx` document.
pub fn parse_str(xml: &str) -> Result<ResxDocument> {
    let mut reader = Reader::from_str(xml);
    let mut doc = ResxDocument::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    loop {
        let event = reader
            .read_event()
            .with_context(|| format!("malformed xml at byte {}", reader.buffer_position()))?;
        match event {
            Event::Start(ref e) => match e.name().as_ref() {
                b"data" => {
                    let entry = read_data(&mut reader, e)?;
                    insert_entry(&mut doc, &mut index, entry);
                }
                b"resheader" => {
                    let name = required_attr(e, b"name", "resheader")?;
                    let body = read_body(&mut reader, b"resheader")?;
                    doc.headers.push(ResHeader::new(name, body.value));
                }
                b"xsd:schema" => {
                    doc.schema = Some(capture_raw(&mut reader, e)?);
                }
                _ => {}
            },
            Event::Empty(ref e) => match e.name().as_ref() {
                b"data" => {
                    let entry = data_entry(e, Body::default())?;
                    insert_entry(&mut doc, &mut index, entry);
                }
                b"assembly" => {
                    doc.assemblies.push(AssemblyRef {
                        alias: attr(e, b"alias")?,
                        name: required_attr(e, b"name", "assembly")?,
                    });
                }
                b"resheader" => {
                    let name = required_attr(e, b"name", "resheader")?;
                    doc.headers.push(ResHeader::new(name, String::new()));
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(doc)
}

// Later duplicates replace the value but keep the first position.
fn insert_entry(doc: &mut ResxDocument, index: &mut HashMap<String, usize>, entry: ResourceEntry) {
    match index.get(&entry.name) {
        Some(&position) => doc.entries[position] = entry,
        None => {
            index.insert(entry.name.clone(), doc.entries.len());
            doc.entries.push(entry);
        }
    }
}

fn read_data(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<ResourceEntry> {
    let name = required_attr(start, b"name", "data")?;
    let body = read_body(reader, b"data")
        .with_context(|| format!("reading <data name=\"{}\">", name))?;
    data_entry(start, body)
}

fn data_entry(start: &BytesStart<'_>, body: Body) -> Result<ResourceEntry> {
    let name = required_attr(start, b"name", "data")?;
    if name.is_empty() {
        bail!("<data> element with an empty name");
    }
    let type_name = attr(start, b"type")?;
    let mime_type = attr(start, b"mimetype")?;

    let is_string = mime_type.is_none() && type_name.as_deref().map_or(true, is_string_type);

    let value = if is_string {
        ResourceValue::Text(body.value)
    } else {
        ResourceValue::Opaque(OpaqueValue {
            raw: body.value,
            type_name,
            mime_type,
        })
    };

    Ok(ResourceEntry {
        name,
        value,
        comment: body.comment,
    })
}

/// `System.String` with or without an assembly qualifier.
fn is_string_type(type_name: &str) -> bool {
    type_name.split(',').next().map(str::trim) == Some("System.String")
}

fn read_body(reader: &mut Reader<&[u8]>, end_tag: &[u8]) -> Result<Body> {
    let mut body = Body::default();
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => match e.name().as_ref() {
                b"value" => field = Some(Field::Value),
                b"comment" => {
                    field = Some(Field::Comment);
                    body.comment.get_or_insert_with(String::new);
                }
                _ => {}
            },
            Event::Empty(ref e) if e.name().as_ref() == b"comment" => {
                body.comment.get_or_insert_with(String::new);
            }
            Event::Text(ref t) => {
                if let Some(target) = field {
                    let text = t.unescape()?;
                    push_field(&mut body, target, &text);
                }
            }
            Event::CData(ref c) => {
                if let Some(target) = field {
                    let text = std::str::from_utf8(c)?;
                    push_field(&mut body, target, text);
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"value" | b"comment" => field = None,
                name if name == end_tag => break,
                _ => {}
            },
            Event::Eof => bail!(
                "unexpected end of document inside <{}>",
                String::from_utf8_lossy(end_tag)
            ),
            _ => {}
        }
    }

    Ok(body)
}

fn push_field(body: &mut Body, field: Field, text: &str) {
    match field {
        Field::Value => body.value.push_str(text),
        Field::Comment => body.comment.get_or_insert_with(String::new).push_str(text),
    }
}

/// Copies an element and all of its children back out as XML text.
fn capture_raw(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer.write_event(Event::Start(start.to_owned()))?;
    let mut depth = 0usize;

    loop {
        let event = reader.read_event()?;
        match event {
            Event::Start(ref e) if e.name() == start.name() => {
                depth += 1;
                writer.write_event(event.clone())?;
            }
            Event::End(ref e) if e.name() == start.name() => {
                writer.write_event(event.clone())?;
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Event::Eof => bail!("unexpected end of document inside schema block"),
            other => writer.write_event(other)?,
        }
    }

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).context("schema block is not valid utf-8")
}

fn attr(element: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attribute in element.attributes() {
        let attribute = attribute?;
        if attribute.key.as_ref() == key {
            return Ok(Some(attribute.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn required_attr(element: &BytesStart<'_>, key: &[u8], tag: &str) -> Result<String> {
    attr(element, key)?.ok_or_else(|| {
        anyhow!(
            "<{}> element without a {} attribute",
            tag,
            String::from_utf8_lossy(key)
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<root>
  <xsd:schema id="root" xmlns="" xmlns:xsd="http://www.w3.org/2001/XMLSchema">
    <xsd:element name="root" msdata:IsDataSet="true">
      <xsd:complexType />
    </xsd:element>
  </xsd:schema>
  <resheader name="resmimetype">
    <value>text/microsoft-resx</value>
  </resheader>
  <resheader name="version">
    <value>2.0</value>
  </resheader>
  <assembly alias="System.Windows.Forms" name="System.Windows.Forms, Version=4.0.0.0" />
  <data name="Greeting" xml:space="preserve">
    <value>Hello World</value>
    <comment>Shown on the start page</comment>
  </data>
  <data name="MetaLocale" xml:space="preserve">
    <value>en-US</value>
  </data>
  <data name="Count" type="System.Int32, mscorlib">
    <value>42</value>
  </data>
  <data name="Escaped" xml:space="preserve">
    <value>Fish &amp; Chips &lt;{0}&gt;</value>
  </data>
</root>
"#;

    #[test]
    fn reads_entries_in_order() {
        let doc = parse_str(SAMPLE).unwrap();
        let names: Vec<&str> = doc.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Greeting", "MetaLocale", "Count", "Escaped"]);
    }

    #[test]
    fn distinguishes_strings_from_typed_values() {
        let doc = parse_str(SAMPLE).unwrap();
        assert_eq!(
            doc.entry("Greeting").unwrap().value,
            ResourceValue::Text("Hello World".to_string())
        );
        match &doc.entry("Count").unwrap().value {
            ResourceValue::Opaque(opaque) => {
                assert_eq!(opaque.raw, "42");
                assert_eq!(opaque.type_name.as_deref(), Some("System.Int32, mscorlib"));
            }
            other => panic!("expected opaque value, got {:?}", other),
        }
    }

    #[test]
    fn only_exact_string_type_is_text() {
        let xml = r#"<root>
  <data name="Qualified" type="System.String, mscorlib"><value>Hello</value></data>
  <data name="Cmp" type="System.StringComparison, mscorlib"><value>Ordinal</value></data>
  <data name="Split" type="System.StringSplitOptions"><value>None</value></data>
</root>"#;
        let doc = parse_str(xml).unwrap();
        assert_eq!(doc.entry("Qualified").unwrap().value.as_text(), Some("Hello"));
        for name in ["Cmp", "Split"] {
            match &doc.entry(name).unwrap().value {
                ResourceValue::Opaque(opaque) => assert!(opaque.type_name.is_some()),
                other => panic!("{} should stay typed, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn unescapes_entities_and_keeps_comments() {
        let doc = parse_str(SAMPLE).unwrap();
        assert_eq!(
            doc.entry("Escaped").unwrap().value.as_text(),
            Some("Fish & Chips <{0}>")
        );
        assert_eq!(
            doc.entry("Greeting").unwrap().comment.as_deref(),
            Some("Shown on the start page")
        );
    }

    #[test]
    fn keeps_headers_assemblies_and_schema() {
        let doc = parse_str(SAMPLE).unwrap();
        assert_eq!(doc.header("resmimetype"), Some("text/microsoft-resx"));
        assert_eq!(doc.header("version"), Some("2.0"));
        assert_eq!(doc.assemblies.len(), 1);
        assert_eq!(doc.assemblies[0].alias.as_deref(), Some("System.Windows.Forms"));
        let schema = doc.schema.unwrap();
        assert!(schema.starts_with("<xsd:schema"));
        assert!(schema.trim_end().ends_with("</xsd:schema>"));
        assert!(schema.contains("<xsd:complexType/>") || schema.contains("<xsd:complexType />"));
    }

    #[test]
    fn duplicate_names_keep_last_value_first_position() {
        let xml = r#"<root>
  <data name="A"><value>one</value></data>
  <data name="B"><value>two</value></data>
  <data name="A"><value>three</value></data>
</root>"#;
        let doc = parse_str(xml).unwrap();
        assert_eq!(doc.entries.len(), 2);
        assert_eq!(doc.entries[0].name, "A");
        assert_eq!(doc.entries[0].value.as_text(), Some("three"));
    }

    #[test]
    fn empty_data_element_is_an_empty_string() {
        let doc = parse_str(r#"<root><data name="Blank" /></root>"#).unwrap();
        assert_eq!(doc.entries[0].value.as_text(), Some(""));
    }

    #[test]
    fn data_without_name_is_rejected() {
        let err = parse_str("<root><data><value>x</value></data></root>").unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn truncated_document_is_rejected() {
        assert!(parse_str("<root><data name=\"A\"><value>x</value>").is_err());
    }
}
