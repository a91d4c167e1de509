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

//! Indented re-serialization of a parsed notice, used for `--savexml`.

use roxmltree::Document;
use roxmltree::Node;
use roxmltree::NodeType;

const INDENT: &str = "  ";
const XML_NS_URI: &str = "http://www.w3.org/XML/1998/namespace";

pub fn pretty_print(doc: &Document<'_>) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    for child in doc.root().children() {
        write_node(&mut out, child, 0);
    }
    out
}

fn write_node(out: &mut String, node: Node<'_, '_>, depth: usize) {
    match node.node_type() {
        NodeType::Element => write_element(out, node, depth),
        NodeType::Text => {
            let text = node.text().unwrap_or_default().trim();
            if !text.is_empty() {
                indent(out, depth);
                out.push_str(&escape(text, false));
                out.push('\n');
            }
        }
        NodeType::Comment => {
            indent(out, depth);
            out.push_str("<!--");
            out.push_str(node.text().unwrap_or_default());
            out.push_str("-->\n");
        }
        NodeType::PI => {
            if let Some(pi) = node.pi() {
                indent(out, depth);
                match pi.value {
                    Some(value) => out.push_str(&format!("<?{} {}?>\n", pi.target, value)),
                    None => out.push_str(&format!("<?{}?>\n", pi.target)),
                }
            }
        }
        NodeType::Root => {}
    }
}

fn write_element(out: &mut String, node: Node<'_, '_>, depth: usize) {
    let name = element_name(node);
    indent(out, depth);
    out.push('<');
    out.push_str(&name);

    for (prefix, uri) in declared_namespaces(node) {
        match prefix {
            Some(prefix) => out.push_str(&format!(" xmlns:{prefix}=\"{}\"", escape(&uri, true))),
            None => out.push_str(&format!(" xmlns=\"{}\"", escape(&uri, true))),
        }
    }

    for attr in node.attributes() {
        let attr_name = match attr.namespace().and_then(|uri| attribute_prefix(node, uri)) {
            Some(prefix) => format!("{prefix}:{}", attr.name()),
            None => attr.name().to_string(),
        };
        out.push_str(&format!(" {attr_name}=\"{}\"", escape(attr.value(), true)));
    }

    let children: Vec<Node<'_, '_>> = node
        .children()
        .filter(|child| !(child.is_text() && child.text().unwrap_or_default().trim().is_empty()))
        .collect();

    match children.as_slice() {
        [] => out.push_str("/>\n"),
        [only] if only.is_text() => {
            let text = only.text().unwrap_or_default().trim();
            out.push_str(&format!(">{}</{name}>\n", escape(text, false)));
        }
        _ => {
            out.push_str(">\n");
            for child in children {
                write_node(out, child, depth + 1);
            }
            indent(out, depth);
            out.push_str(&format!("</{name}>\n"));
        }
    }
}

fn element_name(node: Node<'_, '_>) -> String {
    let tag = node.tag_name();
    let prefix = tag.namespace().and_then(|uri| {
        node.namespaces()
            .find(|ns| ns.uri() == uri)
            .and_then(|ns| ns.name())
    });
    match prefix {
        Some(prefix) => format!("{prefix}:{}", tag.name()),
        None => tag.name().to_string(),
    }
}

// Namespaced attributes always carry a prefix; the default namespace never applies.
fn attribute_prefix(node: Node<'_, '_>, uri: &str) -> Option<String> {
    if uri == XML_NS_URI {
        return Some("xml".to_string());
    }
    node.namespaces()
        .filter(|ns| ns.uri() == uri)
        .find_map(|ns| ns.name())
        .map(str::to_string)
}

/// Namespaces in scope on `node` that its parent element did not already declare.
fn declared_namespaces(node: Node<'_, '_>) -> Vec<(Option<String>, String)> {
    let inherited: Vec<(Option<&str>, &str)> = node
        .parent_element()
        .map(|parent| parent.namespaces().map(|ns| (ns.name(), ns.uri())).collect())
        .unwrap_or_default();

    node.namespaces()
        .filter(|ns| ns.name() != Some("xml"))
        .filter(|ns| !inherited.contains(&(ns.name(), ns.uri())))
        .map(|ns| (ns.name().map(str::to_string), ns.uri().to_string()))
        .collect()
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn escape(text: &str, attribute: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
