// ── API-to-domain conversions ──
//
// Bridges raw `breathwork_api::Entry` field bags into `crate::model` records.
// Each `From` impl reads every expected field and fills a literal default
// when the value is absent. "Absent" follows the CMS editor's falsy rule:
// missing, null, "", false and 0 all take the default.

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Number, Value};

use breathwork_api::Entry;

use crate::model::site::{
    DEFAULT_CONTACT_ADDRESS, DEFAULT_CONTACT_EMAIL, DEFAULT_CONTACT_PHONE, DEFAULT_CONTACT_TITLE,
    DEFAULT_RATING,
};
use crate::model::{
    AboutContent, BlogPost, ContactContent, GalleryImage, GallerySection, HeroContent,
    ServiceContent, TestimonialContent,
};

// ── Helpers ────────────────────────────────────────────────────────

/// Absolute URL for an asset reference.
///
/// Empty when the asset or its `fields.file.url` is missing; protocol-relative
/// URLs (`//host/path`, as the asset CDN returns them) gain an `https:` prefix.
pub fn asset_url(asset: Option<&Value>) -> String {
    let Some(url) = asset
        .and_then(|a| a.pointer("/fields/file/url"))
        .and_then(Value::as_str)
    else {
        return String::new();
    };

    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url.to_owned()
    }
}

/// Whether a JSON value counts as "present".
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Read-only view over an entry's field bag with defaulting accessors.
struct Fields<'a>(&'a Map<String, Value>);

impl<'a> Fields<'a> {
    /// The value of `key` if present and truthy.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.0.get(key).filter(|v| truthy(v))
    }

    /// Text value of `key`. Numbers are rendered, other shapes ignored.
    fn text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn text_or(&self, key: &str, default: &str) -> String {
        self.text(key).unwrap_or_else(|| default.to_owned())
    }

    fn text_or_empty(&self, key: &str) -> String {
        self.text(key).unwrap_or_default()
    }

    /// First present text among `keys`, in order.
    fn first_text(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|k| self.text(k))
    }

    /// First present value among `keys`, in order.
    fn first_value(&self, keys: &[&str]) -> Option<&'a Value> {
        keys.iter().find_map(|k| self.get(k))
    }

    /// Items of an array field; empty when absent or not an array.
    fn items(&self, key: &str) -> &'a [Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// String items of an array field, skipping anything else.
    fn string_list(&self, key: &str) -> Vec<String> {
        self.items(key)
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect()
    }

    /// Asset URL of a linked image field, `None` when it resolves to "".
    fn image(&self, key: &str) -> Option<String> {
        let url = asset_url(self.get(key));
        (!url.is_empty()).then_some(url)
    }
}

/// Stored rating as a number; numeric strings are read as numbers.
fn rating(value: Option<&Value>) -> Number {
    let number = match value {
        Some(Value::Number(n)) => Some(n.clone()),
        Some(Value::String(s)) => s.trim().parse::<Number>().ok(),
        _ => None,
    };
    number
        .filter(|n| truthy(&Value::Number(n.clone())))
        .unwrap_or_else(|| Number::from(DEFAULT_RATING))
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ── Site sections ──────────────────────────────────────────────────

impl From<&Entry> for HeroContent {
    fn from(entry: &Entry) -> Self {
        let f = Fields(&entry.fields);
        HeroContent {
            title: f.text_or_empty("title"),
            subtitle: f.text_or_empty("subtitle"),
            description: f.text_or_empty("description"),
            cta_text: f.text_or_empty("ctaText"),
            cta_link: f.text_or_empty("ctaLink"),
            image: f.image("image"),
        }
    }
}

impl From<&Entry> for AboutContent {
    fn from(entry: &Entry) -> Self {
        let f = Fields(&entry.fields);
        AboutContent {
            title: f.text_or_empty("title"),
            quote: f.text_or_empty("quote"),
            description1: f.text_or_empty("description1"),
            description2: f.text_or_empty("description2"),
            image: f.image("image"),
        }
    }
}

impl From<&Entry> for ServiceContent {
    fn from(entry: &Entry) -> Self {
        let f = Fields(&entry.fields);
        ServiceContent {
            title: f.text_or_empty("title"),
            description: f.text_or_empty("description"),
            duration: f.text_or_empty("duration"),
            price: f.text_or_empty("price"),
            features: f.string_list("features"),
        }
    }
}

impl From<&Entry> for TestimonialContent {
    fn from(entry: &Entry) -> Self {
        let f = Fields(&entry.fields);
        TestimonialContent {
            name: f.text_or_empty("name"),
            // Older entries use `quote`; submitted ones carry `message`.
            text: f
                .first_text(&["text", "quote", "message"])
                .unwrap_or_default(),
            role: f.text_or_empty("role"),
            rating: rating(f.get("rating")),
        }
    }
}

impl From<&Entry> for ContactContent {
    fn from(entry: &Entry) -> Self {
        let f = Fields(&entry.fields);
        ContactContent {
            title: Some(f.text_or("title", DEFAULT_CONTACT_TITLE)),
            subtitle: Some(f.text_or_empty("subtitle")),
            address: f.text_or("address", DEFAULT_CONTACT_ADDRESS),
            phone: f.text_or("phone", DEFAULT_CONTACT_PHONE),
            email: f.text_or("email", DEFAULT_CONTACT_EMAIL),
            hours: Some(f.text_or_empty("hours")),
        }
    }
}

impl From<&Value> for GalleryImage {
    fn from(asset: &Value) -> Self {
        GalleryImage {
            url: asset_url(Some(asset)),
            alt: asset
                .pointer("/fields/title")
                .filter(|v| truthy(v))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned(),
        }
    }
}

impl From<&Entry> for GallerySection {
    fn from(entry: &Entry) -> Self {
        let f = Fields(&entry.fields);
        GallerySection {
            title: f.text_or_empty("title"),
            description: f.text_or_empty("description"),
            images: f.items("images").iter().map(GalleryImage::from).collect(),
        }
    }
}

// ── Blog ───────────────────────────────────────────────────────────

impl From<&Entry> for BlogPost {
    fn from(entry: &Entry) -> Self {
        let f = Fields(&entry.fields);
        BlogPost {
            title: f.text_or_empty("title"),
            slug: f.text_or_empty("slug"),
            excerpt: f.text_or_empty("excerpt"),
            body: f.get("body").cloned(),
            published_at: f.text("publishedAt").unwrap_or_else(now_iso),
            main_image: f.first_value(&["mainImage", "featuredImage"]).cloned(),
        }
    }
}
