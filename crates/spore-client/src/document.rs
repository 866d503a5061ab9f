//! Parsed XML documents returned by the service.

use std::fmt;

use xmltree::{Element, EmitterConfig, ParseError, XMLNode};

use crate::error::Result;

/// An immutable, fully parsed XML response.
///
/// Two documents compare equal when their element trees are structurally
/// equal, so a document fetched from the service equals one parsed from the
/// same bytes locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: Element,
}

impl XmlDocument {
    /// Parse a complete XML body.
    ///
    /// The body must hold exactly one root element. Comments, processing
    /// instructions and whitespace may surround it; anything else fails.
    pub fn parse(body: &[u8]) -> Result<Self> {
        let mut root = None;
        for node in Element::parse_all(body)? {
            match node {
                XMLNode::Element(element) if root.is_none() => root = Some(element),
                XMLNode::Comment(_) | XMLNode::ProcessingInstruction(..) => {}
                XMLNode::Text(text) if text.trim().is_empty() => {}
                _ => return Err(ParseError::CannotParse.into()),
            }
        }
        let root = root.ok_or(ParseError::CannotParse)?;
        Ok(Self { root })
    }

    /// The document element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Take ownership of the document element.
    pub fn into_root(self) -> Element {
        self.root
    }

    /// Text of a direct child of the root, e.g. `status` or `count`.
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.root
            .get_child(name)
            .and_then(|child| child.get_text())
            .map(|text| text.trim().to_string())
    }

    /// Number of `<asset>` elements in the document, with or without a
    /// usable id.
    pub fn asset_count(&self) -> usize {
        count_assets(&self.root)
    }

    /// Every `<asset>` element carrying a numeric `<id>`, in document order.
    ///
    /// Asset listings (user assets, sporecast assets, search results) all
    /// share this shape; elements without a usable id are skipped.
    pub fn asset_summaries(&self) -> Vec<AssetSummary> {
        let mut out = Vec::new();
        collect_assets(&self.root, &mut out);
        out
    }
}

impl fmt::Display for XmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        let config = EmitterConfig::new().perform_indent(true);
        self.root
            .write_with_config(&mut buf, config)
            .map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

/// Minimal description of an asset found in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSummary {
    /// Numeric asset id.
    pub id: u64,
    /// Creation name, when the listing carries one.
    pub name: Option<String>,
    /// Asset type token such as `CREATURE`, when present.
    pub asset_type: Option<String>,
}

fn count_assets(element: &Element) -> usize {
    if element.name == "asset" {
        return 1;
    }
    element
        .children
        .iter()
        .filter_map(|child| match child {
            XMLNode::Element(child) => Some(count_assets(child)),
            _ => None,
        })
        .sum()
}

fn collect_assets(element: &Element, out: &mut Vec<AssetSummary>) {
    if element.name == "asset"
        && let Some(id) = text_of(element, "id").and_then(|id| id.parse().ok())
    {
        out.push(AssetSummary {
            id,
            name: text_of(element, "name"),
            asset_type: text_of(element, "type"),
        });
        return;
    }

    for child in &element.children {
        if let XMLNode::Element(child) = child {
            collect_assets(child, out);
        }
    }
}

fn text_of(element: &Element, name: &str) -> Option<String> {
    element
        .get_child(name)
        .and_then(|child| child.get_text())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
