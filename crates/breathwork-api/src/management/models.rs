// Management API request types

use serde::Serialize;
use serde_json::{Map, Value};

/// Entry body for the Management API: every field value is keyed by locale.
///
/// ```json
/// { "fields": { "name": { "en-US": "Ada" }, "approved": { "en-US": false } } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalizedFields {
    #[serde(skip)]
    locale: String,
    fields: Map<String, Value>,
}

impl LocalizedFields {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            fields: Map::new(),
        }
    }

    /// Set `field` for this body's locale.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut localized = Map::new();
        localized.insert(self.locale.clone(), value.into());
        self.fields.insert(field.into(), Value::Object(localized));
        self
    }

    /// Localized value of `field`, if set.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).and_then(|v| v.get(&self.locale))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_fields_under_locale() {
        let body = LocalizedFields::new("en-US")
            .set("name", "Ada")
            .set("rating", 5)
            .set("approved", false);

        assert_eq!(
            serde_json::to_value(&body).unwrap_or_default(),
            json!({ "fields": {
                "name": { "en-US": "Ada" },
                "rating": { "en-US": 5 },
                "approved": { "en-US": false }
            }})
        );
        assert_eq!(body.get("rating"), Some(&json!(5)));
        assert_eq!(body.get("missing"), None);
    }
}
