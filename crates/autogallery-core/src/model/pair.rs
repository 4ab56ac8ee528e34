/// Image references and the before/after pair shown by a comparator.
///
/// The comparator never fetches or decodes bytes itself: an `ImageSource`
/// is only turned into a URI for the host platform's image loader.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default display label of the `before` layer.
pub const DEFAULT_BEFORE_LABEL: &str = "Before";
/// Default display label of the `after` layer.
pub const DEFAULT_AFTER_LABEL: &str = "After";

/// URI schemes passed through to the loader untouched.
const PASSTHROUGH_SCHEMES: &[&str] = &["http://", "https://", "file://", "bytes://"];

/// A resolvable image reference: a URL or a local file path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageSource(String);

impl ImageSource {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// The reference exactly as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// `true` for `http://` and `https://` references.
    pub fn is_remote(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }

    /// `true` if the reference is a plain filesystem path.
    pub fn is_local_path(&self) -> bool {
        !PASSTHROUGH_SCHEMES.iter().any(|s| self.0.starts_with(s))
    }

    /// Resolve a relative local path against `base_dir`.
    ///
    /// URLs, URIs and absolute paths are returned unchanged.
    pub fn resolved_against(&self, base_dir: &Path) -> Self {
        if !self.is_local_path() {
            return self.clone();
        }
        let path = Path::new(&self.0);
        if path.is_absolute() {
            return self.clone();
        }
        let joined: PathBuf = base_dir.join(path);
        Self(joined.to_string_lossy().into_owned())
    }

    /// URI handed to the host image loader. Local paths become `file://` URIs.
    pub fn uri(&self) -> String {
        if self.is_local_path() {
            format!("file://{}", self.0)
        } else {
            self.0.clone()
        }
    }
}

impl From<&str> for ImageSource {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered pair of images compared by one comparator, each with a label.
///
/// Both images are assumed to share framing and aspect ratio; nothing here
/// enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonPair {
    pub before: ImageSource,
    pub after: ImageSource,
    pub before_label: String,
    pub after_label: String,
}

impl ComparisonPair {
    /// Pair with the default `Before` / `After` labels.
    pub fn new(before: impl Into<ImageSource>, after: impl Into<ImageSource>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
            before_label: DEFAULT_BEFORE_LABEL.to_string(),
            after_label: DEFAULT_AFTER_LABEL.to_string(),
        }
    }

    /// Override either label; `None` keeps the default.
    pub fn with_labels(mut self, before: Option<String>, after: Option<String>) -> Self {
        if let Some(label) = before {
            self.before_label = label;
        }
        if let Some(label) = after {
            self.after_label = label;
        }
        self
    }
}
