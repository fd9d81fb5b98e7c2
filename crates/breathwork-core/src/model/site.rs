// ── Site section domain types ──
//
// One record per landing-page section. Every field is filled
// deterministically by `crate::convert`; `Option` marks values that are
// omitted from the JSON form rather than sent as empty strings.

use serde::{Deserialize, Serialize};
use serde_json::Number;

pub const DEFAULT_CONTACT_TITLE: &str = "Get in Touch";
pub const DEFAULT_CONTACT_SUBTITLE: &str =
    "Have questions about breathwork or want to know more about upcoming sessions?";
pub const DEFAULT_CONTACT_ADDRESS: &str = "Oklahoma City, OK";
pub const DEFAULT_CONTACT_PHONE: &str = "(405) 555-1234";
pub const DEFAULT_CONTACT_EMAIL: &str = "contact@sherrilynnbreathwork.com";
pub const DEFAULT_CONTACT_HOURS: &str = "By Appointment";

/// Default star rating for testimonials that don't carry one.
pub const DEFAULT_RATING: u8 = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta_text: String,
    pub cta_link: String,
    /// Absolute image URL; omitted when the entry has no usable image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub title: String,
    pub quote: String,
    pub description1: String,
    pub description2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceContent {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub price: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialContent {
    pub name: String,
    pub text: String,
    pub role: String,
    /// Stored rating, kept as the CMS sent it (integer or fractional).
    pub rating: Number,
}

impl Default for TestimonialContent {
    fn default() -> Self {
        Self {
            name: String::new(),
            text: String::new(),
            role: String::new(),
            rating: Number::from(DEFAULT_RATING),
        }
    }
}

/// Contact block. Always renderable: when the CMS has nothing (or is down)
/// the placeholder business details are used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
}

impl ContactContent {
    /// Used when the space has no contact entry.
    pub fn placeholder() -> Self {
        Self {
            title: Some(DEFAULT_CONTACT_TITLE.into()),
            subtitle: Some(DEFAULT_CONTACT_SUBTITLE.into()),
            address: DEFAULT_CONTACT_ADDRESS.into(),
            phone: DEFAULT_CONTACT_PHONE.into(),
            email: DEFAULT_CONTACT_EMAIL.into(),
            hours: Some(DEFAULT_CONTACT_HOURS.into()),
        }
    }

    /// Used when the contact fetch failed.
    pub fn unavailable() -> Self {
        Self {
            title: Some(DEFAULT_CONTACT_TITLE.into()),
            subtitle: None,
            address: DEFAULT_CONTACT_ADDRESS.into(),
            phone: DEFAULT_CONTACT_PHONE.into(),
            email: DEFAULT_CONTACT_EMAIL.into(),
            hours: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GallerySection {
    pub title: String,
    pub description: String,
    pub images: Vec<GalleryImage>,
}

/// Everything the landing page renders, fetched in one go.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub hero: Option<HeroContent>,
    pub about: Option<AboutContent>,
    pub services: Vec<ServiceContent>,
    pub testimonials: Vec<TestimonialContent>,
    pub contact: Option<ContactContent>,
    pub gallery: Vec<GallerySection>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_aggregate_serializes_nulls_and_lists() {
        let value = serde_json::to_value(SiteContent::default()).unwrap_or_default();
        assert_eq!(
            value,
            json!({
                "hero": null,
                "about": null,
                "services": [],
                "testimonials": [],
                "contact": null,
                "gallery": []
            })
        );
    }

    #[test]
    fn unavailable_contact_omits_subtitle_and_hours() {
        let value = serde_json::to_value(ContactContent::unavailable()).unwrap_or_default();
        assert_eq!(
            value,
            json!({
                "title": "Get in Touch",
                "address": "Oklahoma City, OK",
                "phone": "(405) 555-1234",
                "email": "contact@sherrilynnbreathwork.com"
            })
        );
    }

    #[test]
    fn hero_uses_camel_case_keys() {
        let hero = HeroContent {
            cta_text: "Book".into(),
            cta_link: "/book".into(),
            ..HeroContent::default()
        };
        let value = serde_json::to_value(hero).unwrap_or_default();
        assert_eq!(value["ctaText"], json!("Book"));
        assert_eq!(value["ctaLink"], json!("/book"));
        assert!(value.get("image").is_none());
    }
}
