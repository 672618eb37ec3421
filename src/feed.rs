//! Feed Helpers
//!
//! Pure functions for feed ordering and submission validation.

use crate::models::{Confession, FieldErrors};

/// Sort the feed newest-first. Applied to the full set on initial load.
pub fn sort_by_recency(confessions: &mut [Confession]) {
    confessions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

/// Put a newly created record at the front of the feed.
///
/// No re-sort: the endpoint stamps the record at creation, so it is the
/// newest entry.
pub fn prepend(confessions: &mut Vec<Confession>, created: Confession) {
    confessions.insert(0, created);
}

/// Check the form inputs before submitting.
///
/// A literal emptiness check, no trimming: whitespace-only input passes,
/// matching what the endpoints themselves accept.
pub fn validate_submission(title: &str, confession: &str) -> Result<(), FieldErrors> {
    if title.is_empty() || confession.is_empty() {
        return Err(FieldErrors {
            title: if title.is_empty() {
                "Title cannot be empty.".to_string()
            } else {
                String::new()
            },
            confession: if confession.is_empty() {
                "Confession cannot be empty.".to_string()
            } else {
                String::new()
            },
        });
    }
    Ok(())
}
