//! Dotted-path lookup into nested JSON objects
//!
//! `"data.id"` addresses `source["data"]["id"]`. Only objects are traversed;
//! a segment that lands on a scalar or an array ends the lookup.

use serde_json::Value;

/// Separator between the segments of a nested path
pub const PATH_DELIMITER: char = '.';

/// Look up a nested value, returning `None` as soon as a segment is missing
pub fn nested_get<'a>(source: &'a Value, path: &str) -> Option<&'a Value> {
    path.split(PATH_DELIMITER)
        .try_fold(source, |current, key| current.as_object()?.get(key))
}

/// Join a path prefix and a key into a nested path
pub fn join(prefix: &str, key: &str) -> String {
    format!("{prefix}{PATH_DELIMITER}{key}")
}

/// A path is well formed when none of its segments is empty
pub fn is_well_formed(path: &str) -> bool {
    path.split(PATH_DELIMITER).all(|segment| !segment.is_empty())
}
