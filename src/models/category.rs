use serde::Serialize;

/// Reserved id of the always-present category holding pinned trackers.
/// Hidden from normal category listings; surfaced in query results as a
/// synthetic first section under the fixed "Pinned" label, never under
/// this raw id or its stored title.
pub const PINNED_CATEGORY_ID: &str = "pinned";

/// Stored title of the reserved category. Display code must not print it.
pub const PINNED_CATEGORY_TITLE: &str = "__pinned__";

/// Label the query engine emits for the synthetic pinned section.
pub const PINNED_SECTION_LABEL: &str = "Pinned";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    /// ISO timestamp; listing order is creation time ascending.
    pub created_at: String,
}

impl Category {
    pub fn is_pinned_category(&self) -> bool {
        self.id == PINNED_CATEGORY_ID
    }
}
