//! Per-session view state.
//!
//! Which page is showing, where pagination stands, which record's modal is
//! open, and whether a request is in flight. Transitions are plain methods on
//! an owned struct; the caller decides when to fetch.

use crate::View;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub view: View,
    pub offset: usize,
    pub limit: usize,
    /// Record whose detail modal is open.
    pub selected: Option<i64>,
    pub loading: bool,
}

impl ViewState {
    pub fn new(view: View, limit: usize) -> Self {
        Self {
            view,
            offset: 0,
            limit: limit.max(1),
            selected: None,
            loading: false,
        }
    }

    /// Change page. Pagination and selection do not carry over.
    pub fn switch_to(&mut self, view: View) {
        if self.view != view {
            self.view = view;
            self.offset = 0;
            self.selected = None;
        }
    }

    /// Advance one page. Only moves when the last response filled the page,
    /// since a short page means there is nothing further.
    pub fn next_page(&mut self, last_page_len: usize) -> bool {
        if !self.view.paginated() || last_page_len < self.limit {
            return false;
        }
        self.offset += self.limit;
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if self.offset == 0 {
            return false;
        }
        self.offset = self.offset.saturating_sub(self.limit);
        true
    }

    pub fn select(&mut self, id: i64) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Path and query for the current list page.
    pub fn list_path(&self) -> String {
        let endpoint = self.view.list_endpoint();
        if self.view.paginated() {
            format!("{endpoint}?limit={}&offset={}", self.limit, self.offset)
        } else if self.view.limited() {
            format!("{endpoint}?limit={}", self.limit)
        } else {
            endpoint.to_string()
        }
    }

    /// Path for the open modal, if any.
    pub fn detail_path(&self) -> Option<String> {
        self.selected.and_then(|id| self.view.detail_endpoint(id))
    }

    /// Mark a request as started. Returns `false` if one is already in flight,
    /// so a slow poll is never stacked on top of itself.
    pub fn begin_request(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    pub fn finish_request(&mut self) {
        self.loading = false;
    }
}
