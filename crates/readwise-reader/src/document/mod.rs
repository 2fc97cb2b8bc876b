//! Reader document records.
//!
//! The live API is loose about its payloads: fields go missing, strings and
//! numbers come back as `null`, and `published_date` shows up in several
//! shapes. Decoding therefore defaults every field and maps `null` to the
//! zero value, while timestamps use `None` as their zero value.

mod published_date;

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::types::{Category, Location};

/// A read-only snapshot of a saved document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    #[serde(deserialize_with = "nullable")]
    pub id: String,

    /// Reader URL of the document.
    #[serde(deserialize_with = "nullable")]
    pub url: String,

    /// Original URL the document was saved from.
    #[serde(deserialize_with = "nullable")]
    pub source_url: String,

    #[serde(deserialize_with = "nullable")]
    pub title: String,

    #[serde(deserialize_with = "nullable")]
    pub author: String,

    /// How the document entered Reader (e.g. "web", "reader-ios").
    #[serde(deserialize_with = "nullable")]
    pub source: String,

    #[serde(deserialize_with = "known_variant")]
    pub category: Option<Category>,

    #[serde(deserialize_with = "known_variant")]
    pub location: Option<Location>,

    /// Tag metadata keyed by tag name.
    #[serde(deserialize_with = "nullable")]
    pub tags: Map<String, Value>,

    #[serde(deserialize_with = "nullable")]
    pub site_name: String,

    #[serde(deserialize_with = "nullable")]
    pub word_count: u64,

    #[serde(deserialize_with = "nullable")]
    pub notes: String,

    #[serde(deserialize_with = "nullable")]
    pub summary: String,

    #[serde(deserialize_with = "nullable")]
    pub image_url: String,

    /// Parent document ID (set for highlights and notes).
    #[serde(deserialize_with = "nullable")]
    pub parent_id: String,

    /// Reading progress as a fraction between 0 and 1.
    #[serde(deserialize_with = "nullable")]
    pub reading_progress: f64,

    /// Full HTML content, present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,

    pub created_at: Option<DateTime<Utc>>,

    pub updated_at: Option<DateTime<Utc>>,

    #[serde(deserialize_with = "published_date::deserialize")]
    pub published_date: Option<DateTime<Utc>>,

    pub first_opened_at: Option<DateTime<Utc>>,

    pub last_opened_at: Option<DateTime<Utc>>,

    pub saved_at: Option<DateTime<Utc>>,

    pub last_moved_at: Option<DateTime<Utc>>,
}

/// Decodes `null` as the type's default value.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a closed enumeration, mapping values this client does not know
/// to `None` so that one new server-side variant cannot fail a whole page.
fn known_variant<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match raw.parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            warn!(value = %raw, "Ignoring unrecognised document field value");
            Ok(None)
        }
    }
}
