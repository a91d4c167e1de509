// Copyright 2026 TedSearch Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Turns one base64 `content` payload into a [`NoticeRecord`].
//!
//! Lookups match on the local tag name so `n2016:NUTS` and `NUTS` are the
//! same element. A missing element is never an error; it yields `""`.

use std::collections::BTreeMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use roxmltree::Document;
use roxmltree::Node;
use roxmltree::ParsingOptions;

use crate::error::TedError;
use crate::model::NoticeRecord;
use crate::model::OrgDetails;
use crate::xml;

pub fn decode_payload(content: &str) -> Result<String, TedError> {
    let compact: Vec<u8> = content
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let bytes = BASE64
        .decode(compact)
        .map_err(|err| TedError::Decode(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| TedError::Decode(err.to_string()))
}

pub fn parse_document(xml: &str) -> Result<Document<'_>, TedError> {
    let opts = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Ok(Document::parse_with_options(xml, opts)?)
}

pub fn extract(content: &str) -> Result<NoticeRecord, TedError> {
    let text = decode_payload(content)?;
    let doc = parse_document(&text)?;
    Ok(record_from_document(&doc))
}

/// Like [`extract`], also returning the document pretty-printed for saving.
pub fn extract_with_xml(content: &str) -> Result<(NoticeRecord, String), TedError> {
    let text = decode_payload(content)?;
    let doc = parse_document(&text)?;
    Ok((record_from_document(&doc), xml::pretty_print(&doc)))
}

pub fn record_from_document(doc: &Document<'_>) -> NoticeRecord {
    let root = doc.root();
    let contracting_body = find(root, "CONTRACTING_BODY");

    NoticeRecord {
        name: contracting_body
            .map(|body| text_of(body, "OFFICIALNAME"))
            .unwrap_or_default(),
        city: text_of(root, "TOWN"),
        title: text_of(root, "TITLE"),
        desc: text_of(root, "SHORT_DESCR"),
        doc_id: attr_of(root, "TED_EXPORT", "DOC_ID"),
        date_added: find(root, "CODED_DATA_SECTION")
            .map(|section| text_of(section, "DATE_PUB"))
            .unwrap_or_default(),
        date_expires: text_of(root, "DELETION_DATE"),
        date_submitby: text_of(root, "DATE_RECEIPT_TENDERS"),
        apply_url: text_of(root, "URL_DOCUMENT"),
        nuts: attr_of(root, "NUTS", "CODE"),
        cpv: cpv_codes(root),
        org_details: contracting_body.map(|body| org_details(root, body)),
    }
}

fn org_details(root: Node<'_, '_>, body: Node<'_, '_>) -> OrgDetails {
    let mut url = text_of(body, "URL_GENERAL");
    if url.is_empty() {
        url = find(root, "NOTICE_DATA")
            .map(|data| text_of(data, "IA_URL_GENERAL"))
            .unwrap_or_default();
    }

    OrgDetails {
        name: text_of(body, "OFFICIALNAME"),
        city: text_of(body, "TOWN"),
        street: text_of(body, "ADDRESS"),
        contact_name: text_of(body, "CONTACT_POINT"),
        contact_email: text_of(body, "E_MAIL"),
        url,
    }
}

// Later duplicates overwrite earlier ones.
fn cpv_codes(root: Node<'_, '_>) -> BTreeMap<String, String> {
    let mut codes = BTreeMap::new();
    for node in root
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "ORIGINAL_CPV")
    {
        if let Some(code) = node.attribute("CODE") {
            codes.insert(code.to_string(), text_content(node));
        }
    }
    codes
}

/// First element named `tag` strictly below `scope`, in document order.
fn find<'a, 'input>(scope: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    scope
        .descendants()
        .skip(1)
        .find(|n| n.is_element() && n.tag_name().name() == tag)
}

fn text_of(scope: Node<'_, '_>, tag: &str) -> String {
    find(scope, tag).map(text_content).unwrap_or_default()
}

fn attr_of(scope: Node<'_, '_>, tag: &str, attr: &str) -> String {
    find(scope, tag)
        .and_then(|n| n.attribute(attr))
        .map(str::to_string)
        .unwrap_or_default()
}

fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string()
}
