//! Report row for a matching item.

/// One matching item, ready for tabular output.
///
/// Created once by the scanner when an item passes the marker test and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub id: i64,
    /// Title with markup stripped.
    pub title: String,
    /// Publish date rendered with the configured display format.
    pub date: String,
    pub author_name: String,
    pub url: String,
}
