/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::domain::s3::{Grant, Grantee};
use crate::error::BoxError;

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Text that cannot appear in an XML 1.0 document.
#[derive(Debug)]
pub(super) struct InvalidXmlChar {
    element: &'static str,
    character: char,
}

impl fmt::Display for InvalidXmlChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "character U+{:04X} is not allowed in XML (element `{}`)",
            self.character as u32, self.element
        )
    }
}

impl std::error::Error for InvalidXmlChar {}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Streams a document element by element. No XML declaration is written.
pub(super) struct XmlBuilder {
    writer: Writer<Vec<u8>>,
}

impl XmlBuilder {
    pub(super) fn new() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
        }
    }

    pub(super) fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), BoxError> {
        let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.writer.write_event(Event::Start(element))?;
        Ok(())
    }

    pub(super) fn end(&mut self, name: &str) -> Result<(), BoxError> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Writes `<name/>`.
    pub(super) fn empty(&mut self, name: &str) -> Result<(), BoxError> {
        self.writer.write_event(Event::Empty(BytesStart::new(name)))?;
        Ok(())
    }

    /// Writes `grants` inside a `name` element, or `<name/>` when there are none.
    pub(super) fn grants(&mut self, name: &str, grants: &[Grant]) -> Result<(), BoxError> {
        if grants.is_empty() {
            return self.empty(name);
        }
        self.start(name, &[])?;
        for grant in grants {
            write_grant(self, grant)?;
        }
        self.end(name)
    }

    /// `<name>text</name>`, with `text` escaped.
    pub(super) fn text_element(&mut self, name: &'static str, text: &str) -> Result<(), BoxError> {
        if let Some(character) = text.chars().find(|c| !is_xml_char(*c)) {
            return Err(InvalidXmlChar {
                element: name,
                character,
            }
            .into());
        }
        self.start(name, &[])?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    pub(super) fn finish(self) -> Result<String, BoxError> {
        Ok(String::from_utf8(self.writer.into_inner())?)
    }
}

/// Writes one `Grant` element, shaped after the concrete grantee kind.
pub(super) fn write_grant(xml: &mut XmlBuilder, grant: &Grant) -> Result<(), BoxError> {
    xml.start("Grant", &[])?;
    match grant.grantee() {
        Grantee::Group { uri } => {
            xml.start("Grantee", &[("xmlns:xsi", XSI_NAMESPACE), ("xsi:type", "Group")])?;
            xml.text_element("URI", uri)?;
        }
        Grantee::CanonicalUser { id, display_name } => {
            xml.start(
                "Grantee",
                &[("xmlns:xsi", XSI_NAMESPACE), ("xsi:type", "CanonicalUser")],
            )?;
            xml.text_element("ID", id)?;
            if let Some(display_name) = display_name {
                xml.text_element("DisplayName", display_name)?;
            }
        }
        Grantee::EmailAddress { email } => {
            xml.start(
                "Grantee",
                &[("xmlns:xsi", XSI_NAMESPACE), ("xsi:type", "AmazonCustomerByEmail")],
            )?;
            xml.text_element("EmailAddress", email)?;
        }
    }
    xml.end("Grantee")?;
    xml.text_element("Permission", grant.permission().as_str())?;
    xml.end("Grant")
}
