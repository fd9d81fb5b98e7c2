// ── Blog domain type ──

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::convert::asset_url;

/// A blog post. `slug` is the unique key used in URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Rich-text document, with embedded assets already resolved.
    pub body: Option<Value>,
    /// ISO-8601 timestamp as authored in the CMS.
    pub published_at: String,
    /// The linked image asset (`{ sys, fields: { title, file: { url } } }`).
    pub main_image: Option<Value>,
}

impl BlogPost {
    /// Absolute URL of the main image, or "" when there is none.
    pub fn main_image_url(&self) -> String {
        asset_url(self.main_image.as_ref())
    }

    /// `published_at` parsed as a UTC instant, if it is a recognisable date.
    pub fn published_timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.published_at)
    }
}

/// Order posts newest first. Posts with unparseable dates go last, in their
/// original relative order.
pub fn sort_newest_first(posts: &mut [BlogPost]) {
    posts.sort_by_cached_key(|post| Reverse(post.published_timestamp()));
}

/// CMS date fields come in several shapes depending on the field's
/// configured precision: full RFC 3339, minutes with an offset, a naive
/// local time, or a bare date.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
