//! Exact marker test applied to every pre-filtered item.

/// Block comment written by the editor when the block is inserted.
pub const BLOCK_COMMENT_MARKER: &str = "<!-- wp:dmg/read-more";

/// Class attribute present in the block's rendered HTML.
pub const RENDERED_CLASS_MARKER: &str = "class=\"dmg-read-more\"";

/// Markers searched for by default, in test order.
pub const DEFAULT_MARKERS: [&str; 2] = [BLOCK_COMMENT_MARKER, RENDERED_CLASS_MARKER];

/// Case-sensitive substring matcher over a fixed, ordered marker list.
///
/// No regex and no markup parsing: a body matches when it contains any marker
/// verbatim. Differently-cased or re-serialised markers are missed, and an
/// unrelated use of the same text counts as a hit.
#[derive(Debug, Clone)]
pub struct MarkerMatcher {
    markers: Vec<String>,
}

impl MarkerMatcher {
    /// Creates a matcher over the given markers. Empty markers are dropped.
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers
                .into_iter()
                .map(Into::into)
                .filter(|m: &String| !m.is_empty())
                .collect(),
        }
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Returns true if `body` contains any marker. Stops at the first hit.
    pub fn is_match(&self, body: &str) -> bool {
        self.markers.iter().any(|marker| body.contains(marker.as_str()))
    }
}

impl Default for MarkerMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MARKERS)
    }
}
