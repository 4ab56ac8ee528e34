/// Gallery catalogue -- the work examples shown in the showcase.
///
/// A catalogue is either the built-in sample set or a JSON file:
///
/// ```json
/// {
///   "title": "Our work",
///   "items": [
///     { "id": "ba1", "type": "before_after", "title": "Body restoration",
///       "description": "After a collision", "date": "2024-05-14",
///       "before": "photos/ba1-before.jpg", "after": "photos/ba1-after.jpg" },
///     { "id": "1", "type": "single", "title": "Engine repair",
///       "image": "https://example.com/engine.jpg" }
///   ]
/// }
/// ```
///
/// Relative image paths are resolved against the catalogue file's
/// directory when loading.
mod builtin;

use crate::model::{ComparisonPair, ImageSource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Heading used when a catalogue file does not name one.
pub const DEFAULT_TITLE: &str = "Our work";

/// Failure to load or validate a catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("cannot read catalogue {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalogue JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("gallery item #{index} has an empty id")]
    EmptyId { index: usize },
    #[error("duplicate gallery item id `{0}`")]
    DuplicateId(String),
    #[error("gallery item `{id}` has an empty title")]
    EmptyTitle { id: String },
    #[error("gallery item `{id}` has an empty `{field}` source")]
    EmptySource { id: String, field: &'static str },
}

/// What a gallery card displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Single {
        image: ImageSource,
    },
    BeforeAfter {
        before: ImageSource,
        after: ImageSource,
    },
}

/// One work example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl GalleryItem {
    pub fn is_before_after(&self) -> bool {
        matches!(self.kind, ItemKind::BeforeAfter { .. })
    }

    /// Comparator input for a before/after item, labelled with the title.
    pub fn comparison_pair(&self) -> Option<ComparisonPair> {
        match &self.kind {
            ItemKind::BeforeAfter { before, after } => Some(
                ComparisonPair::new(before.clone(), after.clone()).with_labels(
                    Some(format!("Before — {}", self.title)),
                    Some(format!("After — {}", self.title)),
                ),
            ),
            ItemKind::Single { .. } => None,
        }
    }

    /// The single image, or the `after` image of a pair.
    pub fn cover_image(&self) -> &ImageSource {
        match &self.kind {
            ItemKind::Single { image } => image,
            ItemKind::BeforeAfter { after, .. } => after,
        }
    }

    fn resolve_paths(&mut self, base_dir: &Path) {
        match &mut self.kind {
            ItemKind::Single { image } => *image = image.resolved_against(base_dir),
            ItemKind::BeforeAfter { before, after } => {
                *before = before.resolved_against(base_dir);
                *after = after.resolved_against(base_dir);
            }
        }
    }
}

/// An ordered list of work examples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalogue {
    #[serde(default = "default_title")]
    pub title: String,
    pub items: Vec<GalleryItem>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Catalogue {
    /// The built-in sample gallery.
    pub fn builtin() -> Self {
        builtin::sample_catalogue()
    }

    /// Parse and validate a catalogue. Relative local image paths are
    /// resolved against `base_dir` when one is given.
    pub fn from_json_str(json: &str, base_dir: Option<&Path>) -> Result<Self, CatalogueError> {
        let mut catalogue: Catalogue = serde_json::from_str(json)?;
        catalogue.validate()?;
        if let Some(base) = base_dir {
            for item in &mut catalogue.items {
                item.resolve_paths(base);
            }
        }
        Ok(catalogue)
    }

    /// Read a catalogue file.
    pub fn load(path: &Path) -> Result<Self, CatalogueError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogueError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalogue = Self::from_json_str(&json, path.parent())?;
        info!(
            "Loaded {} gallery items from {}",
            catalogue.items.len(),
            path.display()
        );
        Ok(catalogue)
    }

    /// Check ids, titles and image sources.
    pub fn validate(&self) -> Result<(), CatalogueError> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            if item.id.trim().is_empty() {
                return Err(CatalogueError::EmptyId { index });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogueError::DuplicateId(item.id.clone()));
            }
            if item.title.trim().is_empty() {
                return Err(CatalogueError::EmptyTitle {
                    id: item.id.clone(),
                });
            }
            let empty_field = match &item.kind {
                ItemKind::Single { image } => image.is_empty().then_some("image"),
                ItemKind::BeforeAfter { before, after } => {
                    if before.is_empty() {
                        Some("before")
                    } else if after.is_empty() {
                        Some("after")
                    } else {
                        None
                    }
                }
            };
            if let Some(field) = empty_field {
                return Err(CatalogueError::EmptySource {
                    id: item.id.clone(),
                    field,
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    /// Number of before/after items.
    pub fn comparison_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_before_after()).count()
    }
}
