use std::collections::{BTreeSet, HashMap};

use super::edit::{Draft, RowMode};
use super::view::{PageView, RowView};
use crate::models::member::{Member, MemberId};

/// Rows shown per page.
pub const PAGE_SIZE: usize = 10;

/// `ceil(count / PAGE_SIZE)`; zero records give zero pages.
pub fn total_pages_for(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// All state owned by one dashboard view.
#[derive(Debug, Clone)]
pub struct DashboardState {
    members: Vec<Member>,
    selected: BTreeSet<MemberId>,
    edits: HashMap<MemberId, Draft>,
    search: String,
    page: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            members: Vec::new(),
            selected: BTreeSet::new(),
            edits: HashMap::new(),
            search: String::new(),
            page: 1,
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(members: Vec<Member>) -> Self {
        let mut state = Self::default();
        state.load(members);
        state
    }

    /// Replace the record set with freshly fetched members.
    pub fn load(&mut self, members: Vec<Member>) {
        self.members = members;
        self.selected.clear();
        self.edits.clear();
        self.clamp_page();
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }

    pub fn contains(&self, id: &MemberId) -> bool {
        self.member(id).is_some()
    }

    pub fn selected(&self) -> &BTreeSet<MemberId> {
        &self.selected
    }

    pub fn is_selected(&self, id: &MemberId) -> bool {
        self.selected.contains(id)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    // ---------------------------------------------------------------------
    // Derived view
    // ---------------------------------------------------------------------

    /// Members whose name contains the search text, ignoring case.
    pub fn filtered(&self) -> Vec<&Member> {
        let needle = self.search.to_lowercase();
        self.members.iter().filter(|m| m.name_matches(&needle)).collect()
    }

    /// The filtered members on the current page.
    pub fn visible(&self) -> Vec<&Member> {
        let start = (self.page - 1) * PAGE_SIZE;
        self.filtered().into_iter().skip(start).take(PAGE_SIZE).collect()
    }

    pub fn total_pages(&self) -> usize {
        total_pages_for(self.filtered().len())
    }

    pub fn row_mode(&self, id: &MemberId) -> RowMode {
        match self.edits.get(id) {
            Some(draft) => RowMode::Editing(draft.clone()),
            None => RowMode::Viewing,
        }
    }

    /// Header checkbox state: every visible row is selected.
    pub fn all_visible_selected(&self) -> bool {
        let visible = self.visible();
        !visible.is_empty() && visible.iter().all(|m| self.selected.contains(&m.id))
    }

    pub fn page_view(&self) -> PageView {
        let filtered = self.filtered();
        let filtered_count = filtered.len();
        let start = (self.page - 1) * PAGE_SIZE;
        let rows = filtered
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .map(|m| RowView {
                member: m.clone(),
                selected: self.selected.contains(&m.id),
                draft: self.edits.get(&m.id).cloned(),
            })
            .collect();

        PageView {
            rows,
            page: self.page,
            per_page: PAGE_SIZE,
            total_pages: total_pages_for(filtered_count),
            filtered_count,
            total_count: self.members.len(),
            selected_count: self.selected.len(),
            all_selected: self.all_visible_selected(),
            search: self.search.clone(),
        }
    }

    // ---------------------------------------------------------------------
    // Search and pagination
    // ---------------------------------------------------------------------

    /// Update the search text. Filtering follows it immediately.
    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
    }

    /// Commit the current search: recompute pages and pull the current page
    /// back into range. The page is kept when it is still valid.
    pub fn apply_search(&mut self) {
        self.clamp_page();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
    }

    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    pub fn last_page(&mut self) {
        self.go_to_page(self.total_pages());
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page + 1);
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.total_pages().max(1));
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    /// Header checkbox: clear when the whole visible page is already
    /// selected, otherwise select exactly the visible page.
    pub fn toggle_select_all(&mut self) {
        if self.all_visible_selected() {
            self.selected.clear();
        } else {
            self.selected = self.visible().iter().map(|m| m.id.clone()).collect();
        }
    }

    /// Row checkbox. Returns false for ids not in the record set.
    pub fn toggle_select(&mut self, id: &MemberId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
        }
        true
    }

    // ---------------------------------------------------------------------
    // Deletion
    // ---------------------------------------------------------------------

    /// Remove one member. Its selection and edit entries go with it.
    pub fn delete(&mut self, id: &MemberId) -> bool {
        let before = self.members.len();
        self.members.retain(|m| &m.id != id);
        let removed = self.members.len() != before;
        if removed {
            self.selected.remove(id);
            self.edits.remove(id);
            self.clamp_page();
        }
        removed
    }

    /// Remove every selected member; returns how many were removed.
    pub fn delete_selected(&mut self) -> usize {
        if self.selected.is_empty() {
            return 0;
        }
        let selected = std::mem::take(&mut self.selected);
        let before = self.members.len();
        self.members.retain(|m| !selected.contains(&m.id));
        for id in &selected {
            self.edits.remove(id);
        }
        self.clamp_page();
        before - self.members.len()
    }

    // ---------------------------------------------------------------------
    // Inline editing
    // ---------------------------------------------------------------------

    /// Viewing -> Editing seeded from the record, Editing -> Viewing
    /// dropping the draft. Returns false for unknown ids.
    pub fn toggle_edit(&mut self, id: &MemberId) -> bool {
        if self.edits.remove(id).is_some() {
            return true;
        }
        match self.members.iter().find(|m| &m.id == id) {
            Some(member) => {
                self.edits.insert(id.clone(), Draft::from_member(member));
                true
            }
            None => false,
        }
    }

    /// Write input values into the row's draft. No-op unless editing.
    pub fn update_draft(&mut self, id: &MemberId, name: &str, email: &str, role: &str) -> bool {
        match self.edits.get_mut(id) {
            Some(draft) => {
                draft.name = name.to_string();
                draft.email = email.to_string();
                draft.role = role.to_string();
                true
            }
            None => false,
        }
    }

    /// Commit the draft into the record and return the row to viewing.
    pub fn save_edit(&mut self, id: &MemberId) -> bool {
        let Some(draft) = self.edits.remove(id) else {
            return false;
        };
        match self.members.iter_mut().find(|m| &m.id == id) {
            Some(member) => {
                draft.apply_to(member);
                true
            }
            None => false,
        }
    }
}
