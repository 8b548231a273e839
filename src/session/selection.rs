//! Checkbox selection over the result list.

use serde::Serialize;
use std::collections::HashSet;

/// Ids of the rows ticked via checkboxes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedSet {
    ids: HashSet<String>,
}

impl CheckedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns whether it is now checked.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Replace the set with exactly these ids.
    pub fn check_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.ids = ids.into_iter().map(str::to_string).collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Checked ids in sorted order.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// State of the "select all" header checkbox for `result_count` results.
    pub fn header_state(&self, result_count: usize) -> HeaderCheckState {
        if result_count > 0 && self.ids.len() == result_count {
            HeaderCheckState::Checked
        } else if self.ids.is_empty() {
            HeaderCheckState::Unchecked
        } else {
            HeaderCheckState::Indeterminate
        }
    }
}

/// Visual state of the header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderCheckState {
    Unchecked,
    Indeterminate,
    Checked,
}
