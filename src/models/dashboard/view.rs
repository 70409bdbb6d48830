use serde::Serialize;

use super::edit::Draft;
use crate::models::member::Member;

/// One rendered table row.
#[derive(Debug, Clone, Serialize)]
pub struct RowView {
    pub member: Member,
    pub selected: bool,
    pub draft: Option<Draft>,
}

impl RowView {
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }
}

/// Everything the table template and JSON snapshot need for one render.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub rows: Vec<RowView>,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub selected_count: usize,
    pub all_selected: bool,
    pub search: String,
}

impl PageView {
    /// "Page X of Y" indicator text.
    pub fn indicator(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
