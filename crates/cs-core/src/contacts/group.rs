use serde::Serialize;

/// Display data for one contact group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupInfo {
    pub id: i64,
    /// Foreign-resource text if it resolved, else the stored title.
    pub title: Option<String>,
    pub account_name: Option<String>,
    /// Stored summary count, passed through as the store renders it.
    pub summary: Option<String>,
}

impl GroupInfo {
    pub fn new(
        id: i64,
        title: Option<String>,
        account_name: Option<String>,
        summary: Option<String>,
    ) -> Self {
        Self {
            id,
            title,
            account_name,
            summary,
        }
    }
}
