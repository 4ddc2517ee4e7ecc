// SPDX-License-Identifier: MPL-2.0
//! Site content: FAQ entries and the product catalogue.
//!
//! The default content ships inside the binary (`assets/content/site.toml`).
//! A user-supplied file with the same layout replaces it entirely.

use crate::catalogue::CatalogueEntry;
use crate::disclosure::{DisclosureItem, ItemId};
use crate::error::{Error, Result};
use crate::motion::Node;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

const EMBEDDED_FILE: &str = "site.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    /// Rendered expanded on first display.
    #[serde(default)]
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub catalogue: Vec<CatalogueEntry>,
}

impl SiteContent {
    /// Content compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let file = Asset::get(EMBEDDED_FILE)
            .ok_or_else(|| Error::Content(format!("missing embedded {EMBEDDED_FILE}")))?;
        Self::parse(&String::from_utf8_lossy(file.data.as_ref()))
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source)
    }

    /// Loads `path` if given, the embedded content otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::embedded(),
        }
    }

    pub fn parse(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|err| Error::Content(err.to_string()))
    }

    /// Registration records for the FAQ disclosure group. `nodes` maps an
    /// entry position to its (body, indicator) pair.
    pub fn faq_items(&self, nodes: impl Fn(usize) -> (Node, Node)) -> Vec<DisclosureItem> {
        self.faq
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                let (body, indicator) = nodes(position);
                let item = DisclosureItem::new(faq_item_id(position), Some(body))
                    .with_indicator(indicator);
                if entry.open {
                    item.initially_open()
                } else {
                    item
                }
            })
            .collect()
    }
}

/// Disclosure id of the FAQ entry at `position`.
#[must_use]
pub fn faq_item_id(position: usize) -> ItemId {
    ItemId(u32::try_from(position).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::embedded().expect("embedded content");
        assert!(!content.faq.is_empty());
        assert!(!content.catalogue.is_empty());
        for entry in &content.catalogue {
            assert!(entry.parse_images().is_ok(), "{}", entry.title);
        }
    }

    #[test]
    fn loads_user_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("site.toml");
        fs::write(
            &path,
            r#"
[[faq]]
question = "Q"
answer = "A"
open = true

[[catalogue]]
title = "Towel"
category = "bath"
images = '["a.jpg"]'
"#,
        )
        .expect("write");

        let content = SiteContent::load(Some(&path)).expect("load");
        assert_eq!(content.faq.len(), 1);
        assert!(content.faq[0].open);
        assert_eq!(content.catalogue[0].images, r#"["a.jpg"]"#);
    }

    #[test]
    fn invalid_file_is_a_content_error() {
        let err = SiteContent::parse("[[faq]]\nquestion = 3").unwrap_err();
        assert!(matches!(err, Error::Content(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().expect("temp dir");
        let err = SiteContent::load_from_path(&dir.path().join("none.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn faq_items_carry_open_flag() {
        let content = SiteContent {
            faq: vec![
                FaqEntry {
                    question: "a".into(),
                    answer: "a".into(),
                    open: false,
                },
                FaqEntry {
                    question: "b".into(),
                    answer: "b".into(),
                    open: true,
                },
            ],
            catalogue: Vec::new(),
        };
        let items = content.faq_items(|n| (Node::new(n as u32 * 2), Node::new(n as u32 * 2 + 1)));
        assert_eq!(items.len(), 2);
        assert!(!items[0].initially_open);
        assert!(items[1].initially_open);
        assert_eq!(items[1].id, faq_item_id(1));
    }
}
