/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes. Comparator
/// instances are mounted lazily the first time a before/after item is drawn
/// and unmounted at the end of any frame in which they were not drawn, so
/// an item scrolled out of a closed lightbox or dropped by a catalogue reload
/// releases its drag resources the same way a removed widget would.
use anyhow::Context;
use autogallery_core::catalogue::Catalogue;
use autogallery_core::compare::{Comparator, DocumentTouch};
use autogallery_core::config::AppConfig;
use autogallery_core::host::Document;
use autogallery_core::lightbox::Lightbox;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::theme::ThemeMode;

/// Where a comparator is drawn. The grid card and the lightbox show the
/// same item through independent instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Surface {
    Grid,
    Lightbox,
}

/// Identity of a mounted comparator: one per item per surface.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MountKey {
    pub item_id: String,
    pub surface: Surface,
}

impl MountKey {
    pub fn new(item_id: impl Into<String>, surface: Surface) -> Self {
        Self {
            item_id: item_id.into(),
            surface,
        }
    }
}

/// Where the displayed catalogue came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueOrigin {
    /// The built-in sample work examples.
    Builtin,
    /// A JSON manifest on disk.
    File(PathBuf),
}

impl std::fmt::Display for CatalogueOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin => write!(f, "built-in samples"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// All application state.
pub struct AppState {
    // ── Content ────────────────────────────────────────
    pub config: AppConfig,
    pub catalogue: Catalogue,
    pub catalogue_origin: CatalogueOrigin,
    /// Last catalogue load failure, shown in the status bar.
    pub load_error: Option<String>,

    // ── Document resources ─────────────────────────────
    pub document: Document,
    pub lightbox: Lightbox,
    comparators: BTreeMap<MountKey, Comparator>,
    /// Comparators drawn during the current frame.
    rendered: BTreeSet<MountKey>,

    // ── UI state ───────────────────────────────────────
    pub theme_mode: ThemeMode,
    pub show_about: bool,
}

impl AppState {
    /// Build state from configuration, loading the configured catalogue.
    /// A catalogue that fails to load falls back to the built-in samples
    /// and the failure is kept in `load_error`.
    pub fn new(config: AppConfig) -> Self {
        let mut state = Self::with_catalogue(config, Catalogue::builtin());
        if state.config.catalogue_path.is_some() {
            if let Err(e) = state.reload_catalogue() {
                tracing::warn!("{e:#} -- showing built-in samples");
            }
        }
        state
    }

    /// Build state around an already-loaded catalogue.
    pub fn with_catalogue(config: AppConfig, catalogue: Catalogue) -> Self {
        let document = Document::new();
        let lightbox = Lightbox::new(document.scroll_lock().clone());
        Self {
            theme_mode: ThemeMode::from_dark_mode(config.dark_mode),
            config,
            catalogue,
            catalogue_origin: CatalogueOrigin::Builtin,
            load_error: None,
            document,
            lightbox,
            comparators: BTreeMap::new(),
            rendered: BTreeSet::new(),
            show_about: false,
        }
    }

    /// Re-read the catalogue named by the configuration, or restore the
    /// built-in samples when none is configured. All comparators are
    /// unmounted; an open lightbox stays open if its index still exists.
    pub fn reload_catalogue(&mut self) -> anyhow::Result<usize> {
        let (catalogue, origin) = match self.config.catalogue_path.clone() {
            Some(path) => {
                let loaded = Catalogue::load(&path)
                    .with_context(|| format!("failed to load catalogue {}", path.display()));
                match loaded {
                    Ok(catalogue) => (catalogue, CatalogueOrigin::File(path)),
                    Err(e) => {
                        self.load_error = Some(format!("{e:#}"));
                        return Err(e);
                    }
                }
            }
            None => (Catalogue::builtin(), CatalogueOrigin::Builtin),
        };

        let unmounted = self.unmount_all();
        self.catalogue = catalogue;
        self.catalogue_origin = origin;
        self.load_error = None;
        self.lightbox.clamp_to(self.catalogue.len());

        tracing::info!(
            items = self.catalogue.len(),
            unmounted,
            origin = %self.catalogue_origin,
            "catalogue loaded"
        );
        Ok(self.catalogue.len())
    }

    // ── Comparator mounting ────────────────────────────────────────

    /// Start a frame: nothing has been drawn yet.
    pub fn begin_frame(&mut self) {
        self.rendered.clear();
    }

    /// The comparator for item `index` on `surface`, mounting it on first
    /// use and marking it drawn for this frame. `None` for single-image
    /// items and out-of-range indices.
    pub fn comparator_for(&mut self, index: usize, surface: Surface) -> Option<&mut Comparator> {
        let item = self.catalogue.items.get(index)?;
        let pair = item.comparison_pair()?;
        let key = MountKey::new(item.id.as_str(), surface);
        self.rendered.insert(key.clone());

        let document = &self.document;
        let comparator = self.comparators.entry(key).or_insert_with_key(|key| {
            tracing::debug!(item = %key.item_id, surface = ?key.surface, "mounting comparator");
            Comparator::mount(document, pair)
        });
        Some(comparator)
    }

    /// End a frame: unmount every comparator that was not drawn. Returns
    /// how many were unmounted.
    pub fn end_frame(&mut self) -> usize {
        let rendered = &self.rendered;
        let before = self.comparators.len();
        self.comparators.retain(|key, _| rendered.contains(key));
        before - self.comparators.len()
    }

    /// A mounted comparator, if any.
    pub fn comparator(&self, key: &MountKey) -> Option<&Comparator> {
        self.comparators.get(key)
    }

    pub fn mounted_count(&self) -> usize {
        self.comparators.len()
    }

    fn unmount_all(&mut self) -> usize {
        let count = self.comparators.len();
        self.comparators.clear();
        self.rendered.clear();
        count
    }

    fn unmount_surface(&mut self, surface: Surface) {
        self.comparators.retain(|key, _| key.surface != surface);
        self.rendered.retain(|key| key.surface != surface);
    }

    // ── Document-level input ───────────────────────────────────────

    /// Deliver a document-level touch event to every comparator that is
    /// subscribed to it. Returns `true` if any slider moved.
    pub fn route_document_touch(&mut self, event: DocumentTouch) -> bool {
        self.document.dispatch(event, self.comparators.values_mut()) > 0
    }

    /// Scrolling is suppressed while any drag or the lightbox holds the lock.
    pub fn scroll_locked(&self) -> bool {
        self.document.scroll_lock().is_locked()
    }

    /// Comparators currently dragging (subscribed to document touches).
    pub fn active_drags(&self) -> usize {
        self.document.listeners().len()
    }

    // ── Lightbox ───────────────────────────────────────────────────

    pub fn open_lightbox(&mut self, index: usize) -> bool {
        self.lightbox.open(index, self.catalogue.len())
    }

    pub fn close_lightbox(&mut self) -> bool {
        self.unmount_surface(Surface::Lightbox);
        self.lightbox.close()
    }

    pub fn lightbox_next(&mut self) -> Option<usize> {
        self.unmount_surface(Surface::Lightbox);
        self.lightbox.next(self.catalogue.len())
    }

    pub fn lightbox_prev(&mut self) -> Option<usize> {
        self.unmount_surface(Surface::Lightbox);
        self.lightbox.prev(self.catalogue.len())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
