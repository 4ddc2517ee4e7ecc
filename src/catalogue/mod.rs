// SPDX-License-Identifier: MPL-2.0
//! Catalogue data source.
//!
//! Each entry carries its image list as the serialized JSON array the page
//! embeds next to it. The list is validated before the modal is asked to
//! show anything; a list that fails validation is reported to the log and
//! the modal stays as it was.

use crate::carousel::{CarouselModal, Host, ImageRef, Product};
use crate::error::CatalogueError;
use serde::{Deserialize, Serialize};

/// Chip value that shows every entry.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Serialized JSON array of image references.
    #[serde(default = "empty_image_list")]
    pub images: String,
}

fn empty_image_list() -> String {
    "[]".to_string()
}

impl CatalogueEntry {
    pub fn parse_images(&self) -> Result<Vec<ImageRef>, CatalogueError> {
        parse_image_list(&self.images)
    }

    /// Builds the modal payload for this entry.
    pub fn to_product(&self) -> Result<Product, CatalogueError> {
        Ok(Product::new(
            self.title.clone(),
            self.description.clone(),
            self.parse_images()?,
        ))
    }
}

/// Parses and validates a serialized image list.
///
/// The list must be a JSON array of non-blank strings. Surrounding
/// whitespace is trimmed from each reference.
pub fn parse_image_list(raw: &str) -> Result<Vec<ImageRef>, CatalogueError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let serde_json::Value::Array(items) = value else {
        return Err(CatalogueError::NotAStringArray);
    };

    items
        .iter()
        .enumerate()
        .map(|(position, item)| {
            let reference = item.as_str().ok_or(CatalogueError::NotAStringArray)?.trim();
            if reference.is_empty() {
                return Err(CatalogueError::EmptyImageReference { position });
            }
            Ok(ImageRef::new(reference))
        })
        .collect()
}

/// Opens the modal for `entry`. Returns false, leaving the modal untouched,
/// if the image list is rejected.
pub fn open_entry(entry: &CatalogueEntry, modal: &mut CarouselModal, host: &mut Host<'_>) -> bool {
    match entry.to_product() {
        Ok(product) => {
            modal.open(product, host);
            true
        }
        Err(err) => {
            log_rejected(entry, &err);
            false
        }
    }
}

/// Like [`open_entry`], through the sample-request flow.
pub fn request_samples(
    entry: &CatalogueEntry,
    modal: &mut CarouselModal,
    host: &mut Host<'_>,
) -> bool {
    match entry.to_product() {
        Ok(product) => {
            modal.request_samples(product, host);
            true
        }
        Err(err) => {
            log_rejected(entry, &err);
            false
        }
    }
}

fn log_rejected(entry: &CatalogueEntry, err: &CatalogueError) {
    tracing::warn!(
        title = %entry.title,
        error = %err,
        "catalogue entry has an invalid image list"
    );
}

// =============================================================================
// Category filter
// =============================================================================

/// Filter chips above the catalogue grid. Exactly one chip is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    chips: Vec<String>,
    active: usize,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            chips: vec![ALL_CATEGORIES.to_string()],
            active: 0,
        }
    }
}

impl CategoryFilter {
    /// Builds the chips from the categories of `entries`, in first-seen order,
    /// after the `all` chip.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a CatalogueEntry>) -> Self {
        let mut filter = Self::default();
        for entry in entries {
            let category = entry.category.trim();
            if !category.is_empty() && !filter.chips.iter().any(|chip| chip == category) {
                filter.chips.push(category.to_string());
            }
        }
        filter
    }

    /// Activates `chip`. Unknown chips are ignored; returns whether it changed.
    pub fn select(&mut self, chip: &str) -> bool {
        match self.chips.iter().position(|candidate| candidate == chip) {
            Some(index) if index != self.active => {
                self.active = index;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn active(&self) -> &str {
        &self.chips[self.active]
    }

    /// Chip values with their active flag.
    pub fn chips(&self) -> impl Iterator<Item = (&str, bool)> {
        self.chips
            .iter()
            .enumerate()
            .map(move |(index, chip)| (chip.as_str(), index == self.active))
    }

    #[must_use]
    pub fn is_visible(&self, entry: &CatalogueEntry) -> bool {
        let active = self.active();
        active == ALL_CATEGORIES || active.is_empty() || entry.category.trim() == active
    }
}

/// Catalogue entries plus their filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
    filter: CategoryFilter,
}

impl Catalogue {
    #[must_use]
    pub fn new(entries: Vec<CatalogueEntry>) -> Self {
        let filter = CategoryFilter::from_entries(&entries);
        Self { entries, filter }
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&CatalogueEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn select_category(&mut self, chip: &str) -> bool {
        self.filter.select(chip)
    }

    /// Entries passing the active filter, with their catalogue index.
    pub fn visible_entries(&self) -> impl Iterator<Item = (usize, &CatalogueEntry)> {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, entry)| self.filter.is_visible(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{Nodes, Phase, Settled};
    use crate::motion::{Node, RecordingAnimator};
    use crate::page::PageState;
    use crate::quote_form::QuoteFormState;
    use tracing_test::traced_test;

    fn entry(title: &str, category: &str, images: &str) -> CatalogueEntry {
        CatalogueEntry {
            title: title.to_string(),
            description: String::new(),
            category: category.to_string(),
            images: images.to_string(),
        }
    }

    #[test]
    fn parses_string_array() {
        let images = parse_image_list(r#"["a.jpg", " b.jpg "]"#).unwrap();
        assert_eq!(images, vec![ImageRef::new("a.jpg"), ImageRef::new("b.jpg")]);
        assert!(parse_image_list("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            parse_image_list("[\"a.jpg\""),
            Err(CatalogueError::MalformedImageList(_))
        ));
    }

    #[test]
    fn rejects_non_string_items() {
        assert_eq!(
            parse_image_list(r#"["a.jpg", 3]"#),
            Err(CatalogueError::NotAStringArray)
        );
        assert_eq!(
            parse_image_list(r#"{"a": 1}"#),
            Err(CatalogueError::NotAStringArray)
        );
    }

    #[test]
    fn rejects_blank_reference() {
        assert_eq!(
            parse_image_list(r#"["a.jpg", "  "]"#),
            Err(CatalogueError::EmptyImageReference { position: 1 })
        );
    }

    #[test]
    fn filter_chips_follow_first_seen_order() {
        let entries = [
            entry("Towel", "bano", "[]"),
            entry("Sheet", "recamara", "[]"),
            entry("Robe", "bano", "[]"),
            entry("Loose", "", "[]"),
        ];
        let filter = CategoryFilter::from_entries(&entries);
        let chips: Vec<&str> = filter.chips().map(|(chip, _)| chip).collect();
        assert_eq!(chips, vec!["all", "bano", "recamara"]);
        assert_eq!(filter.active(), ALL_CATEGORIES);
    }

    #[test]
    fn filter_shows_matching_entries_only() {
        let mut catalogue = Catalogue::new(vec![
            entry("Towel", "bano", "[]"),
            entry("Sheet", "recamara", "[]"),
        ]);
        assert_eq!(catalogue.visible_entries().count(), 2);

        assert!(catalogue.select_category("recamara"));
        assert!(!catalogue.select_category("recamara"));
        assert!(!catalogue.select_category("cocina"));

        let visible: Vec<&str> = catalogue
            .visible_entries()
            .map(|(_, entry)| entry.title.as_str())
            .collect();
        assert_eq!(visible, vec!["Sheet"]);
    }

    #[test]
    #[traced_test]
    fn malformed_entry_is_logged_and_modal_stays_hidden() {
        let mut modal = CarouselModal::new(Nodes {
            surface: Node::new(1),
            image: Node::new(2),
        });
        let mut animator: RecordingAnimator<Settled> = RecordingAnimator::new();
        let mut page = PageState::new();
        let mut form = QuoteFormState::new();
        let mut host = Host::new(&mut animator, &mut page, &mut form);

        let opened = open_entry(&entry("Broken", "bano", "not json"), &mut modal, &mut host);

        assert!(!opened);
        assert_eq!(modal.phase(), Phase::Hidden);
        assert!(logs_contain("catalogue entry has an invalid image list"));
        assert!(logs_contain("Broken"));
    }

    #[test]
    fn valid_entry_opens_modal() {
        let mut modal = CarouselModal::new(Nodes {
            surface: Node::new(1),
            image: Node::new(2),
        });
        let mut animator: RecordingAnimator<Settled> = RecordingAnimator::new();
        let mut page = PageState::new();
        let mut form = QuoteFormState::new();
        let mut host = Host::new(&mut animator, &mut page, &mut form);

        assert!(open_entry(
            &entry("Towel", "bano", r#"["a.jpg","b.jpg"]"#),
            &mut modal,
            &mut host
        ));
        assert_eq!(modal.phase(), Phase::Opening);
        assert_eq!(modal.images().len(), 2);
    }
}
