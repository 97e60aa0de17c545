//! Client-side search over cached records.
//!
//! Filtering never touches server data; it is recomputed from the current
//! list and query text each time a view is rendered.

/// A record that can be matched against a free-text query.
pub trait Searchable {
    /// Text fields the query is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

/// Case-insensitive substring match of `query` against any search field.
///
/// A blank query matches every record.
pub fn matches_query<T: Searchable + ?Sized>(record: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record.search_fields().iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Borrow the records matching `query`, preserving order.
pub fn filter_records<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    records.iter().filter(|record| matches_query(*record, query)).collect()
}
