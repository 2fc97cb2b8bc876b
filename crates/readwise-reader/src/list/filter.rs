//! List query parameters.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{Category, Location};

/// Query parameters for the list endpoint.
///
/// Unset fields are left out of the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilter {
    /// Return only the document with this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Return only documents updated after this instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_after: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Opaque server cursor; an empty string is the same as no cursor.
    #[serde(skip_serializing_if = "cursor_is_absent")]
    pub page_cursor: Option<String>,

    /// Include each document's full HTML content.
    #[serde(rename = "withHTMLContent", skip_serializing_if = "is_false")]
    pub with_html_content: bool,
}

impl ListFilter {
    /// Create an empty filter (list everything from the first page).
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn updated_after(mut self, instant: DateTime<Utc>) -> Self {
        self.updated_after = Some(instant);
        self
    }

    #[must_use]
    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Start from the given cursor instead of the first page.
    #[must_use]
    pub fn page_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.page_cursor = Some(cursor.into());
        self
    }

    #[must_use]
    pub fn with_html_content(mut self, enabled: bool) -> Self {
        self.with_html_content = enabled;
        self
    }

    /// Returns a copy of this filter positioned at `cursor`.
    pub(crate) fn at_cursor(&self, cursor: Option<String>) -> Self {
        Self {
            page_cursor: cursor,
            ..self.clone()
        }
    }

    /// Returns the starting cursor, treating an empty string as none.
    pub(crate) fn start_cursor(&self) -> Option<String> {
        self.page_cursor.clone().filter(|c| !c.is_empty())
    }
}

fn cursor_is_absent(cursor: &Option<String>) -> bool {
    cursor.as_deref().is_none_or(str::is_empty)
}

fn is_false(value: &bool) -> bool {
    !*value
}
