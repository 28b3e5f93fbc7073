//! Substring matching over declared record fields.

use crate::models::Record;

/// Lower-cases the raw query the way global and category search both expect.
///
/// The query is not trimmed: a padded query only matches values containing
/// the padding.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase()
}

/// True if any declared, non-null field contains `needle` case-insensitively.
///
/// `needle` must already be normalized. An empty needle matches every record
/// that has at least one non-null declared field.
#[must_use]
pub fn matches(record: &Record, fields: &[String], needle: &str) -> bool {
    fields.iter().any(|field| {
        record
            .get(field)
            .and_then(crate::models::FieldValue::canonical)
            .is_some_and(|value| value.to_lowercase().contains(needle))
    })
}

/// Exact-value AND conjunction. Empty filter values impose no constraint.
#[must_use]
pub fn passes_filters<'a, I>(record: &Record, filters: I) -> bool
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    filters.into_iter().all(|(field, expected)| {
        expected.is_empty()
            || record
                .get(field)
                .and_then(crate::models::FieldValue::canonical)
                .is_some_and(|value| value == expected)
    })
}
