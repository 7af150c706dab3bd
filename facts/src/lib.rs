use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub user: Option<User>,
    pub text: String,
    pub upvotes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: Name,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Name {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
}

impl Record {
    /// Display name for the record's author. A record without a user keeps
    /// the `"first last"` shape with both parts empty, i.e. a single space.
    pub fn author(&self) -> String {
        let name = self
            .user
            .as_ref()
            .map(|user| user.name.clone())
            .unwrap_or_default();
        format!("{} {}", name.first, name.last)
    }

    pub fn matches(&self, query: &str) -> bool {
        self.text
            .to_lowercase()
            .contains(&query.trim().to_lowercase())
    }
}

/// Case-insensitive substring filter over one fetched page. An empty query
/// keeps every record.
pub fn filter_records(records: &[Record], query: &str) -> Vec<Record> {
    records
        .iter()
        .filter(|record| record.matches(query))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub total_count: u32,
    pub current_page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

impl PaginationInfo {
    /// Bounds of the displayed interval, both zero for an empty result set.
    pub fn interval(&self) -> (u32, u32) {
        if self.total_count == 0 {
            return (0, 0);
        }
        let start = (self.current_page - 1) * self.per_page + 1;
        let end = self.total_count.min(start + self.per_page - 1);
        (start, end)
    }

    /// Window of up to five page numbers centered on the current page,
    /// clamped to `[1, total_pages]`.
    pub fn window(&self) -> RangeInclusive<u32> {
        let start = self.current_page.saturating_sub(2).max(1);
        let end = (self.current_page + 2).min(self.total_pages);
        start..=end
    }

    pub fn hide_first(&self) -> bool {
        self.current_page == 1
    }

    pub fn hide_last(&self) -> bool {
        self.current_page == self.total_pages
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactsResponse {
    pub records: Vec<Record>,
    #[serde(rename = "_pagination")]
    pub pagination: PaginationInfo,
}
