// Client-side name search over the catalog.

use crate::catalog::models::ModeRecord;

/// What the card strip should show for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub items: Vec<ModeRecord>,
    /// True for the looping (doubled) carousel view.
    pub duplicate: bool,
}

pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Records whose name contains `query`, case-insensitively.
pub fn matches<'a>(records: &'a [ModeRecord], query: &str) -> Vec<&'a ModeRecord> {
    let q = normalize(query);
    records
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&q))
        .collect()
}

/// A non-empty query with hits shows just the hits, once. Anything else
/// (blank query, or nothing found) falls back to the full looping catalog.
pub fn plan(records: &[ModeRecord], query: &str) -> RenderPlan {
    if !normalize(query).is_empty() {
        let hits = matches(records, query);
        if !hits.is_empty() {
            return RenderPlan {
                items: hits.into_iter().cloned().collect(),
                duplicate: false,
            };
        }
    }
    full(records)
}

pub fn full(records: &[ModeRecord]) -> RenderPlan {
    RenderPlan {
        items: records.to_vec(),
        duplicate: true,
    }
}
