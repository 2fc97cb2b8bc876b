//! Document category (what kind of content a document is).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidInputError};

/// The kind of content a document holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Article,
    Email,
    Rss,
    Highlight,
    Note,
    Pdf,
    Epub,
    Tweet,
    Video,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Article,
        Category::Email,
        Category::Rss,
        Category::Highlight,
        Category::Note,
        Category::Pdf,
        Category::Epub,
        Category::Tweet,
        Category::Video,
    ];

    /// Returns the wire name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Article => "article",
            Category::Email => "email",
            Category::Rss => "rss",
            Category::Highlight => "highlight",
            Category::Note => "note",
            Category::Pdf => "pdf",
            Category::Epub => "epub",
            Category::Tweet => "tweet",
            Category::Video => "video",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                InvalidInputError::Variant {
                    kind: "category",
                    value: s.to_string(),
                    expected: Category::ALL.map(|c| c.as_str()).join(", "),
                }
                .into()
            })
    }
}
